// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazy list: realize rows near the viewport as a nested scroller moves.
//!
//! This example shows how to:
//! - implement `Surface` for a shared element handle,
//! - forward native scroll/resize events and drive `Radar::tick`,
//! - use `Zones` to decide which rows are realized,
//! - keep the viewport stable with `Radar::silent_night` when rows are prepended.
//!
//! Run:
//! - `cargo run -p understory_demos --example lazy_list`

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use kurbo::{Rect, Vec2};
use understory_radar::{
    Listeners, Radar, RadarConfig, RadarHooks, SatelliteId, Surface, Telescope,
};

/// A fake DOM node: shared so the "browser" side can mutate it.
#[derive(Clone, Debug)]
struct Node(Rc<RefCell<NodeState>>);

#[derive(Debug)]
struct NodeState {
    rect: Rect,
    scroll: Vec2,
    listening: Listeners,
}

impl Node {
    fn new(rect: Rect) -> Self {
        Self(Rc::new(RefCell::new(NodeState {
            rect,
            scroll: Vec2::ZERO,
            listening: Listeners::empty(),
        })))
    }

    fn scroll_by(&self, dy: f64) {
        self.0.borrow_mut().scroll.y += dy;
    }

    fn move_by(&self, dy: f64) {
        let mut state = self.0.borrow_mut();
        state.rect = state.rect + Vec2::new(0.0, dy);
    }

    fn grow_by(&self, dy: f64) {
        let mut state = self.0.borrow_mut();
        state.rect.y1 += dy;
    }
}

impl Surface for Node {
    fn bounds(&self) -> Rect {
        self.0.borrow().rect
    }

    fn scroll_offset(&self) -> Vec2 {
        self.0.borrow().scroll
    }

    fn set_scroll_offset(&mut self, offset: Vec2) {
        self.0.borrow_mut().scroll = offset;
    }

    fn listen(&mut self, listeners: Listeners) {
        self.0.borrow_mut().listening.insert(listeners);
        println!("listen   {listeners:?}");
    }

    fn unlisten(&mut self, listeners: Listeners) {
        self.0.borrow_mut().listening.remove(listeners);
        println!("unlisten {listeners:?}");
    }
}

/// Set after a shift or resize so the host knows to re-run its visibility pass.
#[derive(Clone, Default)]
struct Dirty(Rc<RefCell<bool>>);

impl RadarHooks for Dirty {
    fn did_shift_satellites(&mut self, _delta: Vec2) {
        *self.0.borrow_mut() = true;
    }

    fn did_resize_satellites(&mut self) {
        *self.0.borrow_mut() = true;
    }
}

const ROW_HEIGHT: f64 = 40.0;
const ROWS: usize = 200;

fn realized(radar: &Radar<Node>) -> BTreeSet<SatelliteId> {
    radar
        .satellites()
        .iter()
        .filter(|s| {
            radar
                .satellite_zones(s)
                .map(|z| (-1..=1).contains(&z.y))
                .unwrap_or(false)
        })
        .map(|s| s.id())
        .collect()
}

fn main() {
    let page = Node::new(Rect::new(0.0, 0.0, 1280.0, 800.0));
    let viewport = Node::new(Rect::new(100.0, 100.0, 500.0, 500.0));
    let sky = Node::new(Rect::new(100.0, 100.0, 500.0, 100.0 + ROW_HEIGHT * ROWS as f64));

    let mut radar = Radar::new(
        page.clone(),
        RadarConfig::new()
            .with_telescope(Telescope::Element(viewport.clone()))
            .with_sky(sky.clone()),
    );
    let dirty = Dirty::default();
    radar.set_hooks(dirty.clone());

    let rows: Vec<Node> = (0..ROWS)
        .map(|i| {
            let top = 100.0 + ROW_HEIGHT * i as f64;
            Node::new(Rect::new(100.0, top, 500.0, top + ROW_HEIGHT))
        })
        .collect();
    for row in &rows {
        radar.register(row.clone());
    }
    println!("initially realized: {} rows", realized(&radar).len());

    // A burst of small scroll events within one frame collapses into one pass.
    let mut now = 0;
    for _ in 0..10 {
        viewport.scroll_by(50.0);
        for row in &rows {
            row.move_by(-50.0);
        }
        radar.on_scroll();
    }
    now += 16;
    let ran = radar.tick(now);
    println!("frame {now}: ran {ran:?}, scroll = {:?}", radar.scroll());
    if dirty.0.replace(false) {
        println!("after scroll realized: {} rows", realized(&radar).len());
    }

    // Content grows above the fold; keep the viewport on the same rows.
    sky.grow_by(ROW_HEIGHT * 5.0);
    for row in &rows {
        row.move_by(ROW_HEIGHT * 5.0);
    }
    radar
        .silent_night()
        .expect("radar has a telescope and a sky");
    println!("after prepend scroll = {:?}", radar.scroll());

    // A resize burst is handled once, after the debounce expires.
    radar.on_resize(now);
    radar.on_resize(now + 10);
    while radar.tick(now).is_empty() {
        now += 16;
    }
    println!("resize handled at {now}ms");

    radar.destroy();
    println!("page still listening: {:?}", page.0.borrow().listening);
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared-handle test surfaces and a hook recorder.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use kurbo::{Rect, Vec2};

use crate::{Listeners, RadarHooks, Surface};

#[derive(Debug)]
struct State {
    bounds: Rect,
    scroll: Vec2,
    listening: Listeners,
}

/// A cloneable element handle; clones observe and mutate the same state.
#[derive(Clone, Debug)]
pub(crate) struct TestElement(Rc<RefCell<State>>);

impl TestElement {
    pub(crate) fn new(bounds: Rect) -> Self {
        Self(Rc::new(RefCell::new(State {
            bounds,
            scroll: Vec2::ZERO,
            listening: Listeners::empty(),
        })))
    }

    pub(crate) fn set_bounds(&self, bounds: Rect) {
        self.0.borrow_mut().bounds = bounds;
    }

    pub(crate) fn bounds_now(&self) -> Rect {
        self.0.borrow().bounds
    }

    pub(crate) fn scroll_to(&self, offset: Vec2) {
        self.0.borrow_mut().scroll = offset;
    }

    pub(crate) fn scroll_offset_now(&self) -> Vec2 {
        self.0.borrow().scroll
    }

    pub(crate) fn listening(&self) -> Listeners {
        self.0.borrow().listening
    }

    pub(crate) fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Surface for TestElement {
    fn bounds(&self) -> Rect {
        self.0.borrow().bounds
    }

    fn scroll_offset(&self) -> Vec2 {
        self.0.borrow().scroll
    }

    fn set_scroll_offset(&mut self, offset: Vec2) {
        self.0.borrow_mut().scroll = offset;
    }

    fn listen(&mut self, listeners: Listeners) {
        self.0.borrow_mut().listening.insert(listeners);
    }

    fn unlisten(&mut self, listeners: Listeners) {
        self.0.borrow_mut().listening.remove(listeners);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Call {
    WillShift(Vec2),
    DidShift(Vec2),
    WillResize,
    DidResize,
    WillAdjust(Vec2),
    DidAdjust(Vec2),
}

/// Hooks that append every call to a shared log.
#[derive(Clone, Debug, Default)]
pub(crate) struct Recorder(Rc<RefCell<Vec<Call>>>);

impl Recorder {
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub(crate) fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

impl RadarHooks for Recorder {
    fn will_shift_satellites(&mut self, delta: Vec2) {
        self.0.borrow_mut().push(Call::WillShift(delta));
    }

    fn did_shift_satellites(&mut self, delta: Vec2) {
        self.0.borrow_mut().push(Call::DidShift(delta));
    }

    fn will_resize_satellites(&mut self) {
        self.0.borrow_mut().push(Call::WillResize);
    }

    fn did_resize_satellites(&mut self) {
        self.0.borrow_mut().push(Call::DidResize);
    }

    fn will_adjust_position(&mut self, delta: Vec2) {
        self.0.borrow_mut().push(Call::WillAdjust(delta));
    }

    fn did_adjust_position(&mut self, delta: Vec2) {
        self.0.borrow_mut().push(Call::DidAdjust(delta));
    }
}

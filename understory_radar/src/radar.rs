// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The radar: registry, movement filtering, and listener lifecycle.

use alloc::boxed::Box;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Vec2;

use crate::config::{DEFAULT_MINIMUM_MOVEMENT, DEFAULT_RESIZE_DEBOUNCE};
use crate::schedule::{Debounce, TickOnce};
use crate::{
    Geography, Listeners, RadarConfig, RadarError, RadarHooks, Satellite, SatelliteId, Surface,
    Telescope, XZoneMode, Zones,
};

/// Tracks registered satellites against a scrolling viewport.
///
/// A radar observes three surfaces:
///
/// - the *page*, injected once at construction, which reports the window viewport
///   and the page-level scroll offset;
/// - the *telescope*, the constrained viewport (possibly the window itself);
/// - the *sky*, the full-extent content being scrolled.
///
/// It keeps two snapshots, the *planet* (telescope geometry) and the *skyline*
/// (sky geometry), plus the scroll offsets observed at the last processed
/// movement. Movement smaller than the minimum threshold is ignored; larger
/// movement is propagated to every satellite as a delta, so satellites never need
/// to be re-measured while scrolling.
///
/// ## Driving a radar
///
/// The radar never reads a clock and never subscribes to anything by itself.
/// Hosts forward native events to [`Radar::on_scroll`], [`Radar::on_page_scroll`],
/// and [`Radar::on_resize`], and call [`Radar::tick`] once per frame or sync
/// cycle. Scroll work is coalesced to one pass per tick; resize work is debounced
/// by the configured quiet period.
///
/// ```rust
/// use core::cell::Cell;
/// use std::rc::Rc;
///
/// use kurbo::{Rect, Vec2};
/// use understory_radar::{Listeners, Radar, RadarConfig, Surface, Telescope};
///
/// #[derive(Clone)]
/// struct Pane {
///     rect: Rect,
///     scroll: Rc<Cell<Vec2>>,
/// }
///
/// impl Surface for Pane {
///     fn bounds(&self) -> Rect { self.rect }
///     fn scroll_offset(&self) -> Vec2 { self.scroll.get() }
///     fn set_scroll_offset(&mut self, offset: Vec2) { self.scroll.set(offset) }
/// }
///
/// let pane = |rect| Pane { rect, scroll: Rc::new(Cell::new(Vec2::ZERO)) };
/// let viewport = pane(Rect::new(0.0, 0.0, 300.0, 500.0));
/// let scroll = viewport.scroll.clone();
///
/// let mut radar = Radar::new(
///     pane(Rect::new(0.0, 0.0, 1024.0, 768.0)),
///     RadarConfig::new()
///         .with_telescope(Telescope::Element(viewport))
///         .with_sky(pane(Rect::new(0.0, 0.0, 300.0, 5_000.0))),
/// );
/// let row = radar.register(pane(Rect::new(0.0, 1_200.0, 300.0, 1_250.0)));
/// // 700px below the viewport: one whole viewport height away.
/// assert_eq!(radar.zones_of(row).unwrap().y, 1);
///
/// // The host scrolls by 500px; the radar shifts the row on the next tick.
/// scroll.set(Vec2::new(0.0, 500.0));
/// radar.on_scroll();
/// assert_eq!(radar.tick(0), Listeners::SCROLL);
/// assert_eq!(radar.satellite(row).unwrap().geography().top(), 700.0);
/// assert_eq!(radar.zones_of(row).unwrap().y, 0);
/// ```
pub struct Radar<E: Surface> {
    page: E,
    telescope: Option<Telescope<E>>,
    sky: Option<E>,
    planet: Option<Geography>,
    skyline: Option<Geography>,

    satellites: Vec<Satellite<E>>,
    next_id: u64,

    /// Scroll container offset at the last processed movement.
    scroll: Vec2,
    /// Page offset at the last processed movement.
    position: Vec2,

    minimum_movement: f64,
    resize_debounce: u64,
    is_tracking: bool,
    x_zone: XZoneMode,

    listeners: Listeners,
    next_scroll: TickOnce,
    next_adjustment: TickOnce,
    next_resize: Debounce,

    hooks: Option<Box<dyn RadarHooks>>,
}

impl<E: Surface> core::fmt::Debug for Radar<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Radar")
            .field("planet", &self.planet)
            .field("skyline", &self.skyline)
            .field("satellites", &self.satellites.len())
            .field("scroll", &self.scroll)
            .field("position", &self.position)
            .field("minimum_movement", &self.minimum_movement)
            .field("resize_debounce", &self.resize_debounce)
            .field("is_tracking", &self.is_tracking)
            .field("x_zone", &self.x_zone)
            .field("listeners", &self.listeners)
            .field("hooks", &self.hooks.is_some())
            .finish_non_exhaustive()
    }
}

impl<E: Surface> Radar<E> {
    /// Creates a radar observing `page` and applies `config`.
    pub fn new(page: E, config: RadarConfig<E>) -> Self {
        let mut radar = Self {
            page,
            telescope: None,
            sky: None,
            planet: None,
            skyline: None,
            satellites: Vec::new(),
            next_id: 0,
            scroll: Vec2::ZERO,
            position: Vec2::ZERO,
            minimum_movement: DEFAULT_MINIMUM_MOVEMENT,
            resize_debounce: DEFAULT_RESIZE_DEBOUNCE,
            is_tracking: true,
            x_zone: XZoneMode::default(),
            listeners: Listeners::empty(),
            next_scroll: TickOnce::new(),
            next_adjustment: TickOnce::new(),
            next_resize: Debounce::new(),
            hooks: None,
        };
        radar.set_state(config);
        radar
    }

    /// Replaces the telescope, sky, and options.
    ///
    /// Installed listeners are torn down (and pending work cancelled) before the
    /// old surfaces are released. Geometry snapshots are re-measured and the
    /// cached offsets reset to live values without firing any movement. If both a
    /// telescope and a sky are present afterwards, listeners are installed.
    ///
    /// Registered satellites are kept.
    pub fn set_state(&mut self, config: RadarConfig<E>) {
        self.teardown_handlers();

        self.telescope = config.telescope;
        self.sky = config.sky;

        self.planet = self
            .telescope
            .as_ref()
            .map(|telescope| match telescope {
                Telescope::Window => Geography::new(&self.page),
                Telescope::Element(element) => Geography::new(element),
            });
        self.skyline = self.sky.as_ref().map(Geography::new);

        self.scroll = self
            .scroll_container()
            .map_or(Vec2::ZERO, Surface::scroll_offset);
        self.position = self.page.scroll_offset();

        self.minimum_movement = config.minimum_movement.unwrap_or(DEFAULT_MINIMUM_MOVEMENT);
        self.resize_debounce = config.resize_debounce.unwrap_or(DEFAULT_RESIZE_DEBOUNCE);
        self.is_tracking = config.is_tracking.unwrap_or(true);
        self.x_zone = config.x_zone.unwrap_or_default();

        rdebug!(
            telescope = self.telescope.is_some(),
            sky = self.sky.is_some(),
            minimum_movement = self.minimum_movement,
            resize_debounce = self.resize_debounce,
            is_tracking = self.is_tracking,
            "radar configured"
        );

        if self.telescope.is_some() && self.sky.is_some() {
            self.setup_handlers();
        }
    }

    /// Installs or replaces the lifecycle hooks.
    pub fn set_hooks(&mut self, hooks: impl RadarHooks + 'static) {
        self.hooks = Some(Box::new(hooks));
    }

    /// Drops the lifecycle hooks.
    pub fn clear_hooks(&mut self) {
        self.hooks = None;
    }

    // --- registry -------------------------------------------------------------

    /// Registers `element` and returns its identity.
    ///
    /// The element is measured once; no zone computation happens here.
    pub fn register(&mut self, element: E) -> SatelliteId {
        let id = SatelliteId(self.next_id);
        self.next_id += 1;
        self.satellites.push(Satellite::new(id, element));
        rtrace!(id = id.0, count = self.satellites.len(), "satellite registered");
        id
    }

    /// Removes the satellite `id` and hands its element back.
    ///
    /// Returns `None` if `id` is not registered.
    pub fn unregister(&mut self, id: SatelliteId) -> Option<E> {
        let index = self.satellites.iter().position(|s| s.id() == id)?;
        let satellite = self.satellites.remove(index);
        rtrace!(id = id.0, count = self.satellites.len(), "satellite unregistered");
        Some(satellite.destroy())
    }

    /// Number of registered satellites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.satellites.len()
    }

    /// Returns `true` if no satellites are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.satellites.is_empty()
    }

    /// Registered satellites in registration order.
    #[must_use]
    pub fn satellites(&self) -> &[Satellite<E>] {
        &self.satellites
    }

    /// Looks up a satellite by id.
    #[must_use]
    pub fn satellite(&self, id: SatelliteId) -> Option<&Satellite<E>> {
        self.satellites.iter().find(|s| s.id() == id)
    }

    /// Looks up a satellite by id for mutation.
    pub fn satellite_mut(&mut self, id: SatelliteId) -> Option<&mut Satellite<E>> {
        self.satellites.iter_mut().find(|s| s.id() == id)
    }

    // --- state ----------------------------------------------------------------

    /// Cached viewport geometry.
    #[must_use]
    pub const fn planet(&self) -> Option<&Geography> {
        self.planet.as_ref()
    }

    /// Cached content geometry.
    #[must_use]
    pub const fn skyline(&self) -> Option<&Geography> {
        self.skyline.as_ref()
    }

    /// Scroll container offset at the last processed movement.
    #[must_use]
    pub const fn scroll(&self) -> Vec2 {
        self.scroll
    }

    /// Page offset at the last processed movement.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Movement threshold in logical pixels.
    #[must_use]
    pub const fn minimum_movement(&self) -> f64 {
        self.minimum_movement
    }

    /// Resize debounce in milliseconds.
    #[must_use]
    pub const fn resize_debounce(&self) -> u64 {
        self.resize_debounce
    }

    /// Whether scroll events are acted upon.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.is_tracking
    }

    /// Enables or disables scroll tracking.
    pub fn set_tracking(&mut self, is_tracking: bool) {
        self.is_tracking = is_tracking;
    }

    /// Listeners currently installed.
    #[must_use]
    pub const fn listeners(&self) -> Listeners {
        self.listeners
    }

    // --- zones ----------------------------------------------------------------

    /// Classifies `satellite` against the viewport on both axes.
    pub fn satellite_zones(&self, satellite: &Satellite<E>) -> Result<Zones, RadarError> {
        Ok(Zones {
            x: self.satellite_x_zone(satellite)?,
            y: self.satellite_y_zone(satellite)?,
        })
    }

    /// Classifies the registered satellite `id` against the viewport.
    pub fn zones_of(&self, id: SatelliteId) -> Result<Zones, RadarError> {
        let satellite = self
            .satellite(id)
            .ok_or(RadarError::UnknownSatellite(id))?;
        self.satellite_zones(satellite)
    }

    /// Vertical zone of `satellite`.
    pub fn satellite_y_zone(&self, satellite: &Satellite<E>) -> Result<i32, RadarError> {
        let planet = self.planet.as_ref().ok_or(RadarError::NoTelescope)?;
        Ok(y_zone(planet, satellite.geography()))
    }

    /// Horizontal zone of `satellite`, computed with the configured [`XZoneMode`].
    pub fn satellite_x_zone(&self, satellite: &Satellite<E>) -> Result<i32, RadarError> {
        let planet = self.planet.as_ref().ok_or(RadarError::NoTelescope)?;
        Ok(x_zone(planet, satellite.geography(), self.x_zone))
    }

    // --- movement -------------------------------------------------------------

    /// Returns `true` if moving from `a` to `b` meets the minimum movement.
    #[must_use]
    pub fn is_earthquake(&self, a: f64, b: f64) -> bool {
        (b - a).abs() >= self.minimum_movement
    }

    /// Compares the scroll container's live offset with the cached one and, if
    /// either axis moved by at least the minimum movement, shifts satellites by
    /// the difference.
    ///
    /// Smaller movement is discarded without touching any state or hooks. Does
    /// nothing without a telescope.
    pub fn filter_movement(&mut self) {
        let Some(live) = self.scroll_container().map(Surface::scroll_offset) else {
            return;
        };
        let cached = self.scroll;
        if self.is_earthquake(cached.y, live.y) || self.is_earthquake(cached.x, live.x) {
            self.scroll = live;
            let delta = live - cached;
            rdebug!(dx = delta.x, dy = delta.y, "scroll earthquake");
            self.shift_satellites(delta);
        }
    }

    /// Moves every satellite and the skyline for a scroll of `delta`, between
    /// the shift hooks.
    pub fn shift_satellites(&mut self, delta: Vec2) {
        if let Some(hooks) = &mut self.hooks {
            hooks.will_shift_satellites(delta);
        }
        self.shift(delta);
        if let Some(hooks) = &mut self.hooks {
            hooks.did_shift_satellites(delta);
        }
    }

    /// Re-measures every satellite, between the resize hooks.
    pub fn resize_satellites(&mut self) {
        if let Some(hooks) = &mut self.hooks {
            hooks.will_resize_satellites();
        }
        for satellite in &mut self.satellites {
            satellite.resize();
        }
        if let Some(hooks) = &mut self.hooks {
            hooks.did_resize_satellites();
        }
    }

    /// Compares the page's live offset with the cached one and, on an
    /// earthquake, adjusts all recorded geometry by the difference.
    pub fn update_scroll_position(&mut self) {
        let live = self.page.scroll_offset();
        let cached = self.position;
        if self.is_earthquake(cached.y, live.y) || self.is_earthquake(cached.x, live.x) {
            self.position = live;
            let delta = live - cached;
            rdebug!(dx = delta.x, dy = delta.y, "page earthquake");
            self.adjust_position(delta);
        }
    }

    /// Moves the planet, every satellite, and the skyline for a page scroll of
    /// `delta`, between the adjust hooks.
    pub fn adjust_position(&mut self, delta: Vec2) {
        if let Some(hooks) = &mut self.hooks {
            hooks.will_adjust_position(delta);
        }
        if let Some(planet) = &mut self.planet {
            planet.shift(delta);
        }
        self.shift(delta);
        if let Some(hooks) = &mut self.hooks {
            hooks.did_adjust_position(delta);
        }
    }

    /// Re-measures the skyline from the sky.
    pub fn update_skyline(&mut self) {
        if let (Some(sky), Some(skyline)) = (&self.sky, &mut self.skyline) {
            skyline.refresh(sky);
        }
    }

    /// Refreshes the cached page offset and re-measures every satellite.
    pub fn rebuild(&mut self) {
        self.position = self.page.scroll_offset();
        for satellite in &mut self.satellites {
            satellite.resize();
        }
    }

    /// Keeps the visible content still across a change in content size.
    ///
    /// Re-measures the sky, scrolls the container by the change in content
    /// height/width so the viewport keeps showing the same content, then rebuilds
    /// all satellite geometry. Call this synchronously after mutating content,
    /// before the next paint.
    pub fn silent_night(&mut self) -> Result<(), RadarError> {
        if self.telescope.is_none() {
            return Err(RadarError::NoTelescope);
        }
        let (Some(sky), Some(skyline)) = (&self.sky, &mut self.skyline) else {
            return Err(RadarError::NoSky);
        };

        let before = skyline.rect().size();
        skyline.refresh(sky);
        let after = skyline.rect().size();
        let delta = Vec2::new(after.width - before.width, after.height - before.height);
        skyline.shift(delta);

        if let Some(container) = self.scroll_container_mut() {
            let offset = container.scroll_offset() + delta;
            container.set_scroll_offset(offset);
            let settled = container.scroll_offset();
            self.scroll = settled;
        }
        rdebug!(dx = delta.x, dy = delta.y, "silent night");

        self.rebuild();
        Ok(())
    }

    // --- events ---------------------------------------------------------------

    /// Raw scroll event from the telescope.
    ///
    /// Schedules [`Radar::filter_movement`] for the end of the current tick.
    /// Ignored while not tracking or when the scroll listener is not installed.
    /// Returns `true` if this event scheduled new work.
    pub fn on_scroll(&mut self) -> bool {
        if self.listeners.contains(Listeners::SCROLL) && self.is_tracking {
            self.next_scroll.schedule()
        } else {
            false
        }
    }

    /// Raw scroll event from the page around a nested telescope.
    ///
    /// Schedules [`Radar::update_scroll_position`] for the end of the current
    /// tick. Returns `true` if this event scheduled new work.
    pub fn on_page_scroll(&mut self) -> bool {
        if self.listeners.contains(Listeners::PAGE_SCROLL) {
            self.next_adjustment.schedule()
        } else {
            false
        }
    }

    /// Raw window resize event at time `now` (milliseconds).
    ///
    /// (Re)arms the resize debounce; [`Radar::resize_satellites`] runs once the
    /// window has been quiet for the configured debounce.
    pub fn on_resize(&mut self, now: u64) {
        if self.listeners.contains(Listeners::RESIZE) {
            self.next_resize.schedule(now, self.resize_debounce);
        }
    }

    /// Ends a scheduling tick at time `now` (milliseconds).
    ///
    /// Runs pending scroll work, then pending page-scroll work, then the resize
    /// handler if its debounce expired. Returns the handlers that ran.
    pub fn tick(&mut self, now: u64) -> Listeners {
        let mut ran = Listeners::empty();
        if self.next_scroll.take() {
            self.filter_movement();
            ran |= Listeners::SCROLL;
        }
        if self.next_adjustment.take() {
            self.update_scroll_position();
            ran |= Listeners::PAGE_SCROLL;
        }
        if self.next_resize.poll(now) {
            self.resize_satellites();
            ran |= Listeners::RESIZE;
        }
        ran
    }

    /// Deadline of a pending resize, if any. Hosts can use this to arm a timer.
    #[must_use]
    pub const fn next_resize_deadline(&self) -> Option<u64> {
        self.next_resize.deadline()
    }

    // --- teardown -------------------------------------------------------------

    /// Tears the radar down.
    ///
    /// Listeners are removed and pending work cancelled before anything else is
    /// released; then hooks are dropped, every satellite is destroyed, and the
    /// geometry snapshots are released.
    pub fn destroy(mut self) {
        self.teardown_handlers();
        self.hooks = None;
        for satellite in self.satellites.drain(..) {
            drop(satellite.destroy());
        }
        self.planet = None;
        self.skyline = None;
        self.telescope = None;
        self.sky = None;
        rdebug!("radar destroyed");
    }

    // --- internals ------------------------------------------------------------

    fn scroll_container(&self) -> Option<&E> {
        match self.telescope.as_ref()? {
            Telescope::Window => Some(&self.page),
            Telescope::Element(element) => Some(element),
        }
    }

    fn scroll_container_mut(&mut self) -> Option<&mut E> {
        match self.telescope.as_mut()? {
            Telescope::Window => Some(&mut self.page),
            Telescope::Element(element) => Some(element),
        }
    }

    fn shift(&mut self, delta: Vec2) {
        for satellite in &mut self.satellites {
            satellite.shift(delta);
        }
        if let Some(skyline) = &mut self.skyline {
            skyline.shift(delta);
        }
    }

    fn setup_handlers(&mut self) {
        let Some(telescope) = &mut self.telescope else {
            return;
        };
        self.page.listen(Listeners::RESIZE);
        let mut installed = Listeners::RESIZE | Listeners::SCROLL;
        match telescope {
            Telescope::Window => self.page.listen(Listeners::SCROLL),
            Telescope::Element(element) => {
                element.listen(Listeners::SCROLL);
                self.page.listen(Listeners::PAGE_SCROLL);
                installed |= Listeners::PAGE_SCROLL;
            }
        }
        self.listeners = installed;
        rdebug!(listeners = ?installed, "listeners installed");
    }

    fn teardown_handlers(&mut self) {
        let installed = self.listeners;
        if installed.contains(Listeners::RESIZE) {
            self.page.unlisten(Listeners::RESIZE);
        }
        if installed.contains(Listeners::SCROLL) {
            match &mut self.telescope {
                Some(Telescope::Element(element)) => element.unlisten(Listeners::SCROLL),
                Some(Telescope::Window) => self.page.unlisten(Listeners::SCROLL),
                None => {}
            }
        }
        if installed.contains(Listeners::PAGE_SCROLL) {
            self.page.unlisten(Listeners::PAGE_SCROLL);
        }
        self.next_resize.cancel();
        self.next_scroll.cancel();
        self.next_adjustment.cancel();
        self.listeners = Listeners::empty();
        if !installed.is_empty() {
            rdebug!(listeners = ?installed, "listeners removed");
        }
    }
}

impl<E: Surface> Drop for Radar<E> {
    fn drop(&mut self) {
        // No-op after `destroy`.
        self.teardown_handlers();
    }
}

/// `floor(distance / extent)`, with degenerate extents mapped to zone `0`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Zones far outside i32 saturate, which is the intended clamp"
)]
fn zone_index(distance: f64, extent: f64) -> i32 {
    if extent.is_nan() || extent <= 0.0 || !distance.is_finite() {
        return 0;
    }
    (distance / extent).floor() as i32
}

/// Zone of the span `near..far` against the viewport span `start..end`.
///
/// Spans that overlap or touch the viewport are in zone `0`. Otherwise the
/// zone is the gap between the facing edges in whole viewport extents, signed
/// by side, so a span whose near edge sits `k` extents past the viewport is in
/// zone `k`.
fn span_zone(near: f64, far: f64, start: f64, end: f64) -> i32 {
    let extent = end - start;
    if near >= end {
        zone_index(near - end, extent)
    } else if far <= start {
        zone_index(start - far, extent).saturating_neg()
    } else {
        0
    }
}

fn y_zone(planet: &Geography, satellite: &Geography) -> i32 {
    span_zone(
        satellite.top(),
        satellite.bottom(),
        planet.top(),
        planet.bottom(),
    )
}

fn x_zone(planet: &Geography, satellite: &Geography, mode: XZoneMode) -> i32 {
    match mode {
        XZoneMode::Horizontal => span_zone(
            satellite.left(),
            satellite.right(),
            planet.left(),
            planet.right(),
        ),
        XZoneMode::MirrorVertical => {
            let distance = if satellite.right() > planet.left() {
                satellite.bottom() - planet.top()
            } else if satellite.left() < planet.right() {
                satellite.top() - planet.bottom()
            } else {
                0.0
            };
            zone_index(distance, planet.width())
        }
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle hooks.

use kurbo::Vec2;

/// Callbacks invoked around the radar's geometry updates.
///
/// Every method has an empty default body, so hosts override only what they
/// need. Calls always come in `will_*`/`did_*` pairs around the corresponding
/// operation, including when no satellites are registered.
///
/// Hooks cannot borrow the radar. A host that wants to react to new positions
/// (for example, to start lazy loads) records what happened here and queries
/// [`Radar`](crate::Radar) once [`Radar::tick`](crate::Radar::tick) returns.
pub trait RadarHooks {
    /// Before satellites and the skyline move by `delta` for a scroll.
    fn will_shift_satellites(&mut self, delta: Vec2) {
        let _ = delta;
    }

    /// After satellites and the skyline moved by `delta` for a scroll.
    fn did_shift_satellites(&mut self, delta: Vec2) {
        let _ = delta;
    }

    /// Before every satellite is re-measured.
    fn will_resize_satellites(&mut self) {}

    /// After every satellite was re-measured.
    fn did_resize_satellites(&mut self) {}

    /// Before the viewport, satellites, and skyline move by `delta` for a page scroll.
    fn will_adjust_position(&mut self, delta: Vec2) {
        let _ = delta;
    }

    /// After the viewport, satellites, and skyline moved by `delta` for a page scroll.
    fn did_adjust_position(&mut self, delta: Vec2) {
        let _ = delta;
    }
}

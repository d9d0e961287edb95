// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_radar --heading-base-level=0

//! Understory Radar: scroll-aware position tracking for lazily rendered elements.
//!
//! A [`Radar`] keeps cached geometry for a set of registered elements
//! ("satellites") relative to a scrollable viewport (the "telescope") and the
//! content it scrolls over (the "sky"). Instead of re-measuring every element on
//! every scroll event, the radar filters out small movements and propagates
//! significant ones as deltas. Hosts use the resulting [`Zones`] to decide what to
//! realize, prefetch, or tear down.
//!
//! The core concepts are:
//!
//! - [`Surface`]: the host element interface (measure, scroll, listen).
//! - [`Geography`]: a cached box snapshot that can be shifted or re-measured.
//! - [`Satellite`]: a registered element plus its [`Geography`] and [`SatelliteId`].
//! - [`Radar`]: the coordinator. It owns the registry, the viewport and content
//!   snapshots, the listener lifecycle, and the coalescing of bursty input.
//! - [`RadarHooks`]: before/after callbacks around shifts, resizes, and page
//!   position adjustments.
//! - [`schedule`]: the tick-coalescing and debounce primitives the radar uses.
//!
//! ## Two coordinate frames
//!
//! A telescope may itself sit inside a scrolling page. The radar tracks the
//! scroll container's offset and the page's offset independently:
//!
//! - Scrolling the container shifts satellites and the skyline
//!   ([`Radar::shift_satellites`]); the viewport snapshot stays put.
//! - Scrolling the page moves the viewport snapshot too
//!   ([`Radar::adjust_position`]).
//!
//! Both go through the same movement threshold ([`Radar::is_earthquake`]).
//!
//! ## Zones
//!
//! [`Radar::satellite_zones`] classifies an element into whole viewport extents
//! per axis: `0` is within direct reach, positive is below/right, and negative
//! is above/left. Anything overlapping or touching the viewport is in zone `0`;
//! past that, the zone counts the whole viewport extents between the viewport's
//! far edge and the element's near edge. The horizontal rule is selectable
//! through [`XZoneMode`].
//!
//! ## Not a renderer
//!
//! This crate does not render, lay out, or decide what "lazy" means for your
//! application. It does not subscribe to platform events itself either: hosts
//! forward them through [`Radar::on_scroll`], [`Radar::on_page_scroll`], and
//! [`Radar::on_resize`], and drive time with [`Radar::tick`].
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//! - `tracing`: emits structured events under the `understory_radar` target.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[macro_use]
mod macros;

mod config;
mod error;
mod geography;
mod hooks;
mod radar;
mod satellite;
pub mod schedule;
mod types;

#[cfg(test)]
mod testing;

pub use config::{DEFAULT_MINIMUM_MOVEMENT, DEFAULT_RESIZE_DEBOUNCE, RadarConfig};
pub use error::RadarError;
pub use geography::Geography;
pub use hooks::RadarHooks;
pub use radar::Radar;
pub use satellite::{Satellite, SatelliteId};
pub use types::{Listeners, Surface, Telescope, XZoneMode, Zones};

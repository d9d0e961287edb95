// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radar configuration.

use crate::{Telescope, XZoneMode};

/// Movement, in logical pixels, below which scroll samples are ignored.
pub const DEFAULT_MINIMUM_MOVEMENT: f64 = 15.0;

/// Quiet period, in milliseconds, before a burst of resizes is processed.
pub const DEFAULT_RESIZE_DEBOUNCE: u64 = 64;

/// Configuration passed to [`Radar::new`](crate::Radar::new) and
/// [`Radar::set_state`](crate::Radar::set_state).
///
/// Every field is optional. Unset numeric fields fall back to
/// [`DEFAULT_MINIMUM_MOVEMENT`] and [`DEFAULT_RESIZE_DEBOUNCE`], tracking defaults
/// to on, and the horizontal zone rule defaults to [`XZoneMode::Horizontal`].
/// A configuration without both a telescope and a sky leaves the radar idle: no
/// listeners are installed.
///
/// ```
/// use kurbo::Rect;
/// use understory_radar::{RadarConfig, Surface, Telescope};
///
/// struct Pane(Rect);
/// impl Surface for Pane {
///     fn bounds(&self) -> Rect { self.0 }
/// }
///
/// let config = RadarConfig::new()
///     .with_telescope(Telescope::Element(Pane(Rect::new(0.0, 0.0, 300.0, 500.0))))
///     .with_sky(Pane(Rect::new(0.0, 0.0, 300.0, 5_000.0)))
///     .with_minimum_movement(8.0);
/// assert_eq!(config.minimum_movement, Some(8.0));
/// assert!(config.is_tracking.is_none());
/// ```
#[derive(Clone, Debug)]
pub struct RadarConfig<E> {
    /// The constrained viewport.
    pub telescope: Option<Telescope<E>>,
    /// The full-extent content element.
    pub sky: Option<E>,
    /// Threshold for [`Radar::is_earthquake`](crate::Radar::is_earthquake).
    pub minimum_movement: Option<f64>,
    /// Resize debounce in milliseconds.
    pub resize_debounce: Option<u64>,
    /// Whether scroll events are acted upon.
    pub is_tracking: Option<bool>,
    /// Horizontal zone rule.
    pub x_zone: Option<XZoneMode>,
}

impl<E> Default for RadarConfig<E> {
    fn default() -> Self {
        Self {
            telescope: None,
            sky: None,
            minimum_movement: None,
            resize_debounce: None,
            is_tracking: None,
            x_zone: None,
        }
    }
}

impl<E> RadarConfig<E> {
    /// Creates an empty (idle) configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the telescope.
    #[must_use]
    pub fn with_telescope(mut self, telescope: Telescope<E>) -> Self {
        self.telescope = Some(telescope);
        self
    }

    /// Sets the sky.
    #[must_use]
    pub fn with_sky(mut self, sky: E) -> Self {
        self.sky = Some(sky);
        self
    }

    /// Sets the minimum movement threshold.
    #[must_use]
    pub fn with_minimum_movement(mut self, minimum_movement: f64) -> Self {
        self.minimum_movement = Some(minimum_movement);
        self
    }

    /// Sets the resize debounce in milliseconds.
    #[must_use]
    pub fn with_resize_debounce(mut self, resize_debounce: u64) -> Self {
        self.resize_debounce = Some(resize_debounce);
        self
    }

    /// Sets whether scroll events are tracked.
    #[must_use]
    pub fn with_tracking(mut self, is_tracking: bool) -> Self {
        self.is_tracking = Some(is_tracking);
        self
    }

    /// Sets the horizontal zone rule.
    #[must_use]
    pub fn with_x_zone(mut self, x_zone: XZoneMode) -> Self {
        self.x_zone = Some(x_zone);
        self
    }
}

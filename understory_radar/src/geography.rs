// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cached box geometry for a single surface.

use kurbo::{Rect, Vec2};

use crate::Surface;

/// A snapshot of a surface's box in page coordinates.
///
/// A [`Geography`] does not follow its surface on its own. It is re-measured with
/// [`Geography::refresh`] and translated with [`Geography::shift`], which lets the
/// radar remember where things were and compare that against live values.
///
/// Shifting keeps `width` and `height` unchanged; only the edges move.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geography {
    rect: Rect,
}

impl Geography {
    /// Measures `surface` and returns its snapshot.
    #[must_use]
    pub fn new<S: Surface + ?Sized>(surface: &S) -> Self {
        Self::from_rect(surface.bounds())
    }

    /// Creates a snapshot from an already measured rectangle.
    #[must_use]
    pub const fn from_rect(rect: Rect) -> Self {
        Self { rect }
    }

    /// The cached rectangle.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Top edge.
    #[must_use]
    pub const fn top(&self) -> f64 {
        self.rect.y0
    }

    /// Bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.rect.y1
    }

    /// Left edge.
    #[must_use]
    pub const fn left(&self) -> f64 {
        self.rect.x0
    }

    /// Right edge.
    #[must_use]
    pub const fn right(&self) -> f64 {
        self.rect.x1
    }

    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    /// Re-measures the snapshot from `surface`, discarding any accumulated shifts.
    pub fn refresh<S: Surface + ?Sized>(&mut self, surface: &S) {
        self.rect = surface.bounds();
    }

    /// Applies a scroll movement of `delta`.
    ///
    /// Content moves opposite to the scroll direction: scrolling down by `delta.y`
    /// moves every edge up by `delta.y`.
    pub fn shift(&mut self, delta: Vec2) {
        self.rect = self.rect - delta;
    }
}

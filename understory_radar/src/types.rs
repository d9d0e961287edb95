// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: the host surface interface, listener flags, and zone results.

use kurbo::{Rect, Vec2};

/// A host element the radar can measure, scroll, and subscribe to.
///
/// Hosts implement this for their element handle type (typically a cheap,
/// reference-counted handle). The same trait covers the page, the telescope,
/// the sky, and every registered satellite; only the methods relevant to a role
/// are ever called for it.
///
/// - [`Surface::bounds`] must report live geometry in page coordinates. For the
///   page surface this is the window viewport.
/// - [`Surface::listen`] and [`Surface::unlisten`] are where hosts wire native
///   events. A native listener for [`Listeners::SCROLL`] should forward to
///   [`Radar::on_scroll`](crate::Radar::on_scroll), and so on.
pub trait Surface {
    /// Live box geometry in page coordinates.
    fn bounds(&self) -> Rect;

    /// Live scroll offset of this surface.
    fn scroll_offset(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Writes the scroll offset of this surface.
    ///
    /// Hosts may clamp; the radar reads the offset back afterwards.
    fn set_scroll_offset(&mut self, offset: Vec2) {
        let _ = offset;
    }

    /// Subscribes the host's native event source for `listeners`.
    fn listen(&mut self, listeners: Listeners) {
        let _ = listeners;
    }

    /// Unsubscribes the host's native event source for `listeners`.
    fn unlisten(&mut self, listeners: Listeners) {
        let _ = listeners;
    }
}

/// The constrained viewport through which the sky is observed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Telescope<E> {
    /// The top-level window. The page surface is used both for measurement and
    /// as the scroll container.
    Window,
    /// A scrollable element nested inside the page.
    Element(E),
}

bitflags::bitflags! {
    /// Native event channels a radar listens on.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Listeners: u8 {
        /// Window resize, installed on the page.
        const RESIZE      = 0b0000_0001;
        /// Scroll of the telescope (the page itself for [`Telescope::Window`]).
        const SCROLL      = 0b0000_0010;
        /// Scroll of the page around a nested telescope.
        const PAGE_SCROLL = 0b0000_0100;
    }
}

/// How the horizontal zone distance is computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum XZoneMode {
    /// Gaps use the left/right edges and the viewport width, mirroring the
    /// vertical rule.
    #[default]
    Horizontal,
    /// The legacy formula: branch selection uses left/right, but the distance is
    /// `bottom − viewport top` (or `top − viewport bottom`) floored in viewport
    /// widths. Reproduces the behavior older consumers of this algorithm were
    /// calibrated against, including its off-by-one at the viewport edge.
    MirrorVertical,
}

/// Position of a satellite relative to the viewport, in whole viewport extents.
///
/// `0` means within direct reach on that axis. Positive values are below/right
/// of the viewport and negative values above/left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Zones {
    /// Horizontal zone.
    pub x: i32,
    /// Vertical zone.
    pub y: i32,
}

impl Zones {
    /// Returns `true` if both axes are in zone `0`.
    #[must_use]
    pub const fn is_in_reach(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

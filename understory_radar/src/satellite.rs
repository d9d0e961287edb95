// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registered elements and their identity.

use kurbo::Vec2;

use crate::{Geography, Surface};

/// Stable identity of a registered satellite.
///
/// Ids are assigned in registration order by a single radar and are never reused
/// by that radar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SatelliteId(pub(crate) u64);

/// A registered element together with its cached geometry.
#[derive(Clone, Debug)]
pub struct Satellite<E> {
    id: SatelliteId,
    element: E,
    geography: Geography,
}

impl<E: Surface> Satellite<E> {
    pub(crate) fn new(id: SatelliteId, element: E) -> Self {
        let geography = Geography::new(&element);
        Self {
            id,
            element,
            geography,
        }
    }

    /// Re-measures the cached geometry from the element.
    pub fn resize(&mut self) {
        self.geography.refresh(&self.element);
    }

    /// Translates the cached geometry for a scroll movement of `delta`.
    pub fn shift(&mut self, delta: Vec2) {
        self.geography.shift(delta);
    }
}

impl<E> Satellite<E> {
    /// Identity key.
    #[must_use]
    pub const fn id(&self) -> SatelliteId {
        self.id
    }

    /// The wrapped element.
    #[must_use]
    pub const fn element(&self) -> &E {
        &self.element
    }

    /// Mutable access to the wrapped element.
    ///
    /// The cached geometry is not updated; call [`Satellite::resize`] afterwards
    /// if the element's box changed.
    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    /// Cached geometry.
    #[must_use]
    pub const fn geography(&self) -> &Geography {
        &self.geography
    }

    /// Releases the satellite and hands the element back.
    pub fn destroy(self) -> E {
        self.element
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Vec2};

    use super::{Satellite, SatelliteId};
    use crate::testing::TestElement;

    #[test]
    fn shift_is_cached_until_resize() {
        let element = TestElement::new(Rect::new(0.0, 100.0, 50.0, 150.0));
        let mut satellite = Satellite::new(SatelliteId(7), element.clone());
        assert_eq!(satellite.id(), SatelliteId(7));

        satellite.shift(Vec2::new(0.0, 30.0));
        assert_eq!(satellite.geography().top(), 70.0);
        assert_eq!(element.bounds_now().y0, 100.0, "element itself is untouched");

        satellite.resize();
        assert_eq!(satellite.geography().top(), 100.0);
    }

    #[test]
    fn destroy_returns_the_element() {
        let element = TestElement::new(Rect::new(0.0, 0.0, 1.0, 1.0));
        let satellite = Satellite::new(SatelliteId(0), element.clone());
        let back = satellite.destroy();
        assert!(back.same_as(&element));
    }
}

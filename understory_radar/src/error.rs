// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::SatelliteId;

/// Errors reported by [`Radar`](crate::Radar) queries that need configured geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RadarError {
    /// No telescope is configured, so there is no viewport to compare against.
    #[error("no telescope configured")]
    NoTelescope,
    /// No sky is configured, so content geometry is unknown.
    #[error("no sky configured")]
    NoSky,
    /// The id does not name a registered satellite.
    #[error("satellite {0:?} is not registered")]
    UnknownSatellite(SatelliteId),
}

//! Mean-longitude Moon engine with a single equation-of-centre term.

use crate::domain::lunar::{EclipticPositions, J2000};
use crate::ports::MoonEngine;

/// Low-precision engine: mean longitudes plus one correction term.
///
/// Good to a few degrees, which is enough for phase names and usually
/// enough for the sign except within a few degrees of a cusp.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplifiedMoonEngine;

impl SimplifiedMoonEngine {
    pub fn new() -> Self {
        Self
    }
}

impl MoonEngine for SimplifiedMoonEngine {
    fn name(&self) -> &'static str {
        "simplified"
    }

    fn positions(&self, jd: f64) -> EclipticPositions {
        let d = jd - J2000;

        let sun_mean_longitude = (280.466 + 0.985_647_4 * d).rem_euclid(360.0);
        let moon_mean_longitude = (218.32 + 13.176_396 * d).rem_euclid(360.0);
        let moon_mean_anomaly = (134.963 + 13.064_993 * d).rem_euclid(360.0);

        let moon_longitude =
            (moon_mean_longitude + 6.29 * moon_mean_anomaly.to_radians().sin()).rem_euclid(360.0);

        EclipticPositions {
            sun_longitude: sun_mean_longitude,
            moon_longitude,
        }
    }
}

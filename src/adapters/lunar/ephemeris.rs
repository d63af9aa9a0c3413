//! Truncated analytical lunar and solar theory.
//!
//! The Moon uses the principal periodic terms of the ELP-2000/82 longitude
//! series; the Sun uses its equation of centre with aberration and the
//! dominant nutation term. Accuracy is around 0.01° for the Sun and a few
//! hundredths of a degree for the Moon across several centuries of J2000.

use crate::domain::lunar::{EclipticPositions, J2000};
use crate::ports::MoonEngine;

const DAYS_PER_CENTURY: f64 = 36_525.0;

/// One longitude term: multipliers of D, M, M', F and the sine
/// coefficient in millionths of a degree.
struct LongitudeTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    coefficient: f64,
}

const fn term(d: i8, m: i8, mp: i8, f: i8, coefficient: f64) -> LongitudeTerm {
    LongitudeTerm {
        d,
        m,
        mp,
        f,
        coefficient,
    }
}

#[rustfmt::skip]
const MOON_LONGITUDE_TERMS: [LongitudeTerm; 59] = [
    term(0, 0, 1, 0, 6_288_774.0),
    term(2, 0, -1, 0, 1_274_027.0),
    term(2, 0, 0, 0, 658_314.0),
    term(0, 0, 2, 0, 213_618.0),
    term(0, 1, 0, 0, -185_116.0),
    term(0, 0, 0, 2, -114_332.0),
    term(2, 0, -2, 0, 58_793.0),
    term(2, -1, -1, 0, 57_066.0),
    term(2, 0, 1, 0, 53_322.0),
    term(2, -1, 0, 0, 45_758.0),
    term(0, 1, -1, 0, -40_923.0),
    term(1, 0, 0, 0, -34_720.0),
    term(0, 1, 1, 0, -30_383.0),
    term(2, 0, 0, -2, 15_327.0),
    term(0, 0, 1, 2, -12_528.0),
    term(0, 0, 1, -2, 10_980.0),
    term(4, 0, -1, 0, 10_675.0),
    term(0, 0, 3, 0, 10_034.0),
    term(4, 0, -2, 0, 8_548.0),
    term(2, 1, -1, 0, -7_888.0),
    term(2, 1, 0, 0, -6_766.0),
    term(1, 0, -1, 0, -5_163.0),
    term(1, 1, 0, 0, 4_987.0),
    term(2, -1, 1, 0, 4_036.0),
    term(2, 0, 2, 0, 3_994.0),
    term(4, 0, 0, 0, 3_861.0),
    term(2, 0, -3, 0, 3_665.0),
    term(0, 1, -2, 0, -2_689.0),
    term(2, 0, -1, 2, -2_602.0),
    term(2, -1, -2, 0, 2_390.0),
    term(1, 0, 1, 0, -2_348.0),
    term(2, -2, 0, 0, 2_236.0),
    term(0, 1, 2, 0, -2_120.0),
    term(0, 2, 0, 0, -2_069.0),
    term(2, -2, -1, 0, 2_048.0),
    term(2, 0, 1, -2, -1_773.0),
    term(2, 0, 0, 2, -1_595.0),
    term(4, -1, -1, 0, 1_215.0),
    term(0, 0, 2, 2, -1_110.0),
    term(3, 0, -1, 0, -892.0),
    term(2, 1, 1, 0, -810.0),
    term(4, -1, -2, 0, 759.0),
    term(0, 2, -1, 0, -713.0),
    term(2, 2, -1, 0, -700.0),
    term(2, 1, -2, 0, 691.0),
    term(2, -1, 0, -2, 596.0),
    term(4, 0, 1, 0, 549.0),
    term(0, 0, 4, 0, 537.0),
    term(4, -1, 0, 0, 520.0),
    term(1, 0, -2, 0, -487.0),
    term(2, 1, 0, -2, -399.0),
    term(0, 0, 2, -2, -381.0),
    term(1, 1, 1, 0, 351.0),
    term(3, 0, -2, 0, -340.0),
    term(4, 0, -3, 0, 330.0),
    term(2, -1, 2, 0, 327.0),
    term(0, 2, 1, 0, -323.0),
    term(1, 1, -1, 0, 299.0),
    term(2, 0, 3, 0, 294.0),
];

fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// Higher-precision engine built from a truncated lunar theory.
#[derive(Debug, Clone, Copy, Default)]
pub struct EphemerisMoonEngine;

impl EphemerisMoonEngine {
    pub fn new() -> Self {
        Self
    }

    /// Geometric lunar longitude (no nutation) in degrees.
    pub fn moon_longitude(&self, jd: f64) -> f64 {
        let t = (jd - J2000) / DAYS_PER_CENTURY;
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;

        let mean_longitude = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2
            + t3 / 538_841.0
            - t4 / 65_194_000.0;
        let elongation = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2
            + t3 / 545_868.0
            - t4 / 113_065_000.0;
        let sun_anomaly =
            357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
        let moon_anomaly = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2
            + t3 / 69_699.0
            - t4 / 14_712_000.0;
        let latitude_argument = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2
            - t3 / 3_526_000.0
            + t4 / 863_310_000.0;

        // Eccentricity of Earth's orbit scales terms involving M.
        let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

        let mut sum: f64 = MOON_LONGITUDE_TERMS
            .iter()
            .map(|term| {
                let argument = f64::from(term.d) * elongation
                    + f64::from(term.m) * sun_anomaly
                    + f64::from(term.mp) * moon_anomaly
                    + f64::from(term.f) * latitude_argument;
                let scale = match term.m.abs() {
                    1 => e,
                    2 => e * e,
                    _ => 1.0,
                };
                term.coefficient * scale * sin_deg(argument)
            })
            .sum();

        // Venus, Jupiter and flattening corrections.
        let a1 = 119.75 + 131.849 * t;
        let a2 = 53.09 + 479_264.290 * t;
        sum += 3_958.0 * sin_deg(a1)
            + 1_962.0 * sin_deg(mean_longitude - latitude_argument)
            + 318.0 * sin_deg(a2);

        (mean_longitude + sum / 1_000_000.0).rem_euclid(360.0)
    }

    /// Apparent solar longitude in degrees.
    pub fn sun_longitude(&self, jd: f64) -> f64 {
        let t = (jd - J2000) / DAYS_PER_CENTURY;
        let t2 = t * t;

        let mean_longitude = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2;
        let mean_anomaly = 357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2;
        let centre = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * sin_deg(mean_anomaly)
            + (0.019_993 - 0.000_101 * t) * sin_deg(2.0 * mean_anomaly)
            + 0.000_289 * sin_deg(3.0 * mean_anomaly);
        let true_longitude = mean_longitude + centre;

        let omega = 125.04 - 1_934.136 * t;
        (true_longitude - 0.005_69 - 0.004_78 * sin_deg(omega)).rem_euclid(360.0)
    }
}

impl MoonEngine for EphemerisMoonEngine {
    fn name(&self) -> &'static str {
        "ephemeris"
    }

    fn positions(&self, jd: f64) -> EclipticPositions {
        EclipticPositions {
            sun_longitude: self.sun_longitude(jd),
            moon_longitude: self.moon_longitude(jd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lunar::{julian_day_at, MoonPhase};
    use crate::domain::zodiac::ZodiacSign;
    use chrono::NaiveDate;

    fn angular_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn moon_longitude_reference_value() {
        // 1992-04-12 00:00 TD, geometric longitude 133.1627°
        let lon = EphemerisMoonEngine.moon_longitude(2_448_724.5);
        assert!(angular_distance(lon, 133.162_655) < 0.05, "got {}", lon);
    }

    #[test]
    fn sun_longitude_reference_value() {
        // 1992-10-13 00:00 TD, apparent longitude 199.9090°
        let lon = EphemerisMoonEngine.sun_longitude(2_448_908.5);
        assert!(angular_distance(lon, 199.908_95) < 0.01, "got {}", lon);
    }

    #[test]
    fn full_moon_of_january_2026() {
        // Opposition on 2026-01-03 around 10:00 UTC
        let date = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
        let p = EphemerisMoonEngine.positions(julian_day_at(date, 10.0));
        let elongation = (p.moon_longitude - p.sun_longitude).rem_euclid(360.0);
        assert!((elongation - 180.0).abs() < 2.0, "elongation {}", elongation);

        let moon = EphemerisMoonEngine.moon_data(date);
        assert_eq!(moon.phase, MoonPhase::FullMoon);
        assert_eq!(moon.zodiac_sign, ZodiacSign::Cancer);
    }

    #[test]
    fn engines_agree_to_within_a_few_degrees() {
        use crate::adapters::lunar::SimplifiedMoonEngine;
        let jd = julian_day_at(NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(), 12.0);
        let precise = EphemerisMoonEngine.positions(jd);
        let rough = SimplifiedMoonEngine.positions(jd);
        assert!(angular_distance(precise.sun_longitude, rough.sun_longitude) < 2.5);
        assert!(angular_distance(precise.moon_longitude, rough.moon_longitude) < 8.0);
    }
}

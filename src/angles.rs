//! Closed-form solar angle formulas.
//!
//! Angles are radians throughout; only the equation of time (minutes) and
//! the observer's longitude (degrees) are in other units. Every function is
//! pure and total over finite inputs.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::error::Result;
use crate::types::{LocalTimestamp, StandardOffset};

pub const DEGREES_PER_HOUR: f64 = 15.0;
/// Minutes of time per degree of longitude.
pub const MINUTES_PER_DEGREE: f64 = 4.0;
/// Leap days are ignored by the series below.
pub const DAYS_PER_YEAR: f64 = 365.0;
/// Zenith of the apparent sunrise/sunset, including refraction and the
/// solar disc radius.
pub const SUNRISE_ZENITH_DEG: f64 = 90.833;
/// `sin(zenith)` below this is treated as the sun standing at the zenith or
/// nadir, where azimuth has no meaning.
pub const AZIMUTH_EPSILON: f64 = 1e-6;

pub fn normalize_radians(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Annual-cycle angle `γ` of a timestamp.
///
/// Only the whole hour enters the formula, and the year is always 365 days
/// long, so late December of a leap year runs slightly past `2π`.
pub fn fractional_year(ts: &LocalTimestamp) -> f64 {
    let day = ts.day_of_year() as f64;
    let hour = ts.hour() as f64;
    TAU * (day - 1.0 + (hour - 12.0) / 24.0) / DAYS_PER_YEAR
}

/// Solar declination (Spencer series).
pub fn declination(gamma: f64) -> f64 {
    0.006918 - 0.399912 * gamma.cos() + 0.070257 * gamma.sin()
        - 0.006758 * (2.0 * gamma).cos()
        + 0.000907 * (2.0 * gamma).sin()
        - 0.002697 * (3.0 * gamma).cos()
        + 0.00148 * (3.0 * gamma).sin()
}

/// Equation of time in minutes.
pub fn equation_of_time(gamma: f64) -> f64 {
    229.18
        * (0.000075
            + 0.001868 * gamma.cos()
            - 0.032077 * gamma.sin()
            - 0.014615 * (2.0 * gamma).cos()
            - 0.040849 * (2.0 * gamma).sin())
}

/// Minutes to add to local standard time to obtain true solar time.
pub fn time_offset_minutes(eot: f64, longitude: f64, offset: StandardOffset) -> f64 {
    eot + MINUTES_PER_DEGREE * longitude - offset.minutes()
}

/// True solar time for a local standard timestamp.
///
/// # Errors
/// Returns `InvalidTimestamp` if the shift leaves chrono's date range.
pub fn true_solar_time(
    ts: &LocalTimestamp,
    longitude: f64,
    offset: StandardOffset,
) -> Result<LocalTimestamp> {
    let eot = equation_of_time(fractional_year(ts));
    ts.shifted_by_minutes(time_offset_minutes(eot, longitude, offset))
}

/// Hour angle of a true-solar-time timestamp, in [-π, π).
/// Zero at solar noon, negative in the morning.
pub fn hour_angle(tst: &LocalTimestamp) -> f64 {
    (DEGREES_PER_HOUR * (tst.decimal_hours() - 12.0)).to_radians()
}

/// Cosine of the zenith angle, clamped into [-1, 1].
pub fn cos_zenith(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let cos_z =
        latitude.sin() * declination.sin() + latitude.cos() * declination.cos() * hour_angle.cos();
    cos_z.clamp(-1.0, 1.0)
}

/// Zenith angle in [0, π].
pub fn zenith_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    cos_zenith(latitude, declination, hour_angle).acos()
}

pub fn solar_elevation(zenith: f64) -> f64 {
    FRAC_PI_2 - zenith
}

/// Azimuth clockwise from north, in [0, 2π).
///
/// `None` when the sun stands at the zenith or nadir.
pub fn azimuth_angle(latitude: f64, declination: f64, hour_angle: f64) -> Option<f64> {
    let zenith = zenith_angle(latitude, declination, hour_angle);
    let sin_zenith = zenith.sin();
    if sin_zenith < AZIMUTH_EPSILON {
        return None;
    }
    let cos_az = (declination.sin() * latitude.cos()
        - hour_angle.cos() * declination.cos() * latitude.sin())
        / sin_zenith;
    let raw = cos_az.clamp(-1.0, 1.0).acos();
    let azimuth = if hour_angle >= 0.0 { TAU - raw } else { raw };
    Some(normalize_radians(azimuth))
}

/// Cosine of the sunset hour angle for the apparent (refracted) horizon.
///
/// Values above 1 mean the sun never rises that day, values below -1 that
/// it never sets.
pub fn cos_sunset_hour_angle(latitude: f64, declination: f64) -> f64 {
    SUNRISE_ZENITH_DEG.to_radians().cos() / (latitude.cos() * declination.cos())
        - latitude.tan() * declination.tan()
}

/// Minutes of time spanned by an hour angle.
pub fn hour_angle_to_minutes(hour_angle: f64) -> f64 {
    hour_angle.to_degrees() / DEGREES_PER_HOUR * 60.0
}

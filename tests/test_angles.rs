use std::f64::consts::{FRAC_PI_2, PI, TAU};

use lapup_solar::angles::*;
use lapup_solar::types::{LocalTimestamp, StandardOffset};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> LocalTimestamp {
    LocalTimestamp::new(year, month, day, hour, minute, second).unwrap()
}

fn offset(hours: f64) -> StandardOffset {
    StandardOffset::from_hours(hours).unwrap()
}

// ── FractionalYear ──

#[test]
fn test_fractional_year_zero_at_new_year_noon() {
    assert_eq!(fractional_year(&ts(2019, 1, 1, 12, 0, 0.0)), 0.0);
}

#[test]
fn test_fractional_year_known_values() {
    assert_approx!(fractional_year(&ts(2019, 1, 1, 0, 0, 0.0)), -PI / 365.0, 1e-12);
    assert_approx!(fractional_year(&ts(2019, 7, 15, 12, 0, 0.0)), TAU * 195.0 / 365.0, 1e-12);
    assert_approx!(fractional_year(&ts(2019, 12, 31, 12, 0, 0.0)), TAU * 364.0 / 365.0, 1e-12);
}

#[test]
fn test_fractional_year_uses_whole_hour_only() {
    let on_the_hour = fractional_year(&ts(2019, 3, 10, 9, 0, 0.0));
    let late_in_hour = fractional_year(&ts(2019, 3, 10, 9, 59, 59.9));
    assert_eq!(on_the_hour, late_in_hour);
}

#[test]
fn test_fractional_year_non_decreasing_within_year() {
    let mut prev = f64::NEG_INFINITY;
    let mut t = ts(2019, 1, 1, 0, 0, 0.0);
    while t < ts(2020, 1, 1, 0, 0, 0.0) {
        let g = fractional_year(&t);
        assert!(g >= prev, "{}: {} < {}", t, g, prev);
        prev = g;
        t = t.shifted_by_minutes(60.0).unwrap();
    }
    // wraps back at the new year
    assert!(fractional_year(&t) < prev);
}

#[test]
fn test_fractional_year_leap_day_runs_past_full_turn() {
    assert!(fractional_year(&ts(2020, 12, 31, 23, 0, 0.0)) > TAU);
}

// ── Declination ──

#[test]
fn test_declination_bounded_every_hour() {
    let mut t = ts(2020, 1, 1, 0, 0, 0.0);
    while t < ts(2021, 1, 1, 0, 0, 0.0) {
        let d = declination(fractional_year(&t));
        assert!((-0.41..=0.41).contains(&d), "{}: {}", t, d);
        t = t.shifted_by_minutes(60.0).unwrap();
    }
}

#[test]
fn test_declination_solstices_equinoxes() {
    assert_approx!(declination(fractional_year(&ts(2019, 6, 21, 12, 0, 0.0))), 0.409, 0.005);
    assert_approx!(declination(fractional_year(&ts(2019, 12, 21, 12, 0, 0.0))), -0.409, 0.005);
    assert_approx!(declination(fractional_year(&ts(2019, 3, 21, 12, 0, 0.0))), 0.0, 0.01);
    assert_approx!(declination(fractional_year(&ts(2019, 9, 23, 12, 0, 0.0))), 0.0, 0.01);
}

// ── EquationOfTime ──

#[test]
fn test_equation_of_time_bounded() {
    for doy in 0..366 {
        let gamma = TAU * doy as f64 / 365.0;
        let eot = equation_of_time(gamma);
        assert!((-20.0..=17.0).contains(&eot), "gamma={}: {}", gamma, eot);
    }
}

#[test]
fn test_equation_of_time_extremes() {
    // mid-February minimum, early-November maximum
    assert_approx!(equation_of_time(fractional_year(&ts(2019, 2, 11, 12, 0, 0.0))), -14.2, 0.3);
    assert_approx!(equation_of_time(fractional_year(&ts(2019, 11, 3, 12, 0, 0.0))), 16.4, 0.3);
}

// ── TrueSolarTime ──

#[test]
fn test_time_offset_on_zone_meridian_is_equation_of_time() {
    assert_approx!(time_offset_minutes(-5.0, 15.0, offset(1.0)), -5.0, 1e-12);
    assert_approx!(time_offset_minutes(3.0, 21.78861111, offset(2.0)), 3.0 + 87.15444444 - 120.0, 1e-6);
}

#[test]
fn test_true_solar_time_on_zone_meridian() {
    let t = ts(2019, 1, 1, 12, 0, 0.0);
    let tst = true_solar_time(&t, 15.0, offset(1.0)).unwrap();
    let eot = equation_of_time(0.0);
    assert_approx!(eot, -2.904, 0.001);
    assert_approx!(tst.minutes_of_day(), 720.0 + eot, 1e-6);
}

#[test]
fn test_true_solar_time_carries_across_year_end() {
    let t = ts(2019, 12, 31, 23, 50, 0.0);
    let tst = true_solar_time(&t, 30.0, StandardOffset::UTC).unwrap();
    assert_eq!(tst.naive().date(), chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
}

#[test]
fn test_true_solar_time_round_trip_modulo_day() {
    let cases: &[(LocalTimestamp, f64, f64)] = &[
        (ts(2019, 7, 15, 12, 0, 0.0), 21.78861111, 2.0),
        (ts(2019, 7, 15, 0, 10, 0.0), 21.78861111, 2.0),
        (ts(2019, 3, 1, 23, 55, 30.0), 40.0, 2.0),
        (ts(2019, 6, 1, 0, 5, 0.0), -89.6, -6.0),
        (ts(2019, 10, 31, 23, 59, 59.5), 200.0, 12.0),
    ];
    for &(t, lon, hours) in cases {
        let off = offset(hours);
        let tst = true_solar_time(&t, lon, off).unwrap();
        let shift = time_offset_minutes(equation_of_time(fractional_year(&t)), lon, off);
        let expected = (t.minutes_of_day() + shift).rem_euclid(1440.0);
        let diff = (tst.minutes_of_day() - expected).rem_euclid(1440.0);
        assert!(diff < 1e-6 || 1440.0 - diff < 1e-6, "{} lon={}: diff={}", t, lon, diff);
    }
}

// ── HourAngle ──

#[test]
fn test_hour_angle_solar_noon() {
    assert_eq!(hour_angle(&ts(2019, 5, 5, 12, 0, 0.0)), 0.0);
}

#[test]
fn test_hour_angle_known_values() {
    assert_approx!(hour_angle(&ts(2019, 5, 5, 18, 0, 0.0)), FRAC_PI_2, 1e-12);
    assert_approx!(hour_angle(&ts(2019, 5, 5, 6, 0, 0.0)), -FRAC_PI_2, 1e-12);
    assert_approx!(hour_angle(&ts(2019, 5, 5, 13, 0, 0.0)), 15f64.to_radians(), 1e-12);
    assert_approx!(hour_angle(&ts(2019, 5, 5, 11, 30, 0.0)), (-7.5f64).to_radians(), 1e-12);
    assert_approx!(hour_angle(&ts(2019, 5, 5, 0, 0, 0.0)), -PI, 1e-12);
}

#[test]
fn test_hour_angle_range() {
    assert!(hour_angle(&ts(2019, 5, 5, 23, 59, 59.999)) < PI);
    assert!(hour_angle(&ts(2019, 5, 5, 0, 0, 0.0)) >= -PI);
}

#[test]
fn test_hour_angle_counts_fractional_seconds() {
    let a = hour_angle(&ts(2019, 5, 5, 12, 0, 0.0));
    let b = hour_angle(&ts(2019, 5, 5, 12, 0, 0.5));
    assert_approx!(b - a, (15.0 / 7200.0f64).to_radians(), 1e-12);
}

// ── Zenith ──

#[test]
fn test_cos_zenith_clamped_at_poles() {
    for &lat in &[FRAC_PI_2, -FRAC_PI_2] {
        for &decl in &[-0.41, 0.0, 0.41] {
            for i in 0..24 {
                let h = -PI + i as f64 * PI / 12.0;
                let c = cos_zenith(lat, decl, h);
                assert!((-1.0..=1.0).contains(&c), "lat={} decl={} h={}: {}", lat, decl, h, c);
                let z = zenith_angle(lat, decl, h);
                assert!((0.0..=PI).contains(&z));
            }
        }
    }
}

#[test]
fn test_zenith_at_pole_independent_of_hour_angle() {
    for i in 0..12 {
        let h = -PI + i as f64 * PI / 6.0;
        assert_approx!(zenith_angle(FRAC_PI_2, 0.4, h), FRAC_PI_2 - 0.4, 1e-9);
    }
}

#[test]
fn test_zenith_noon_equals_latitude_minus_declination() {
    let lat = 38.29138889f64.to_radians();
    assert_approx!(zenith_angle(lat, 0.378, 0.0), lat - 0.378, 1e-9);
    assert_approx!(zenith_angle(lat, -0.4, 0.0), lat + 0.4, 1e-9);
}

#[test]
fn test_cos_zenith_clamps_overshoot() {
    // sin^2 + cos^2 may exceed one by an ulp
    for i in 0..100 {
        let x = i as f64 * 0.0157;
        let c = cos_zenith(x, x, 0.0);
        assert!(c <= 1.0);
        assert!(zenith_angle(x, x, 0.0).is_finite());
    }
}

#[test]
fn test_solar_elevation_complement() {
    assert_eq!(solar_elevation(0.0), FRAC_PI_2);
    assert_approx!(solar_elevation(FRAC_PI_2), 0.0, 1e-15);
    assert_approx!(solar_elevation(PI), -FRAC_PI_2, 1e-15);
}

// ── Azimuth ──

#[test]
fn test_azimuth_morning_east_afternoon_west() {
    let lat = 38.29138889f64.to_radians();
    for &decl in &[-0.4, 0.0, 0.378] {
        for &ha_deg in &[-120.0, -90.0, -45.0, -10.0] {
            let h: f64 = f64::to_radians(ha_deg);
            let am = azimuth_angle(lat, decl, h).unwrap();
            let pm = azimuth_angle(lat, decl, -h).unwrap();
            assert!(am > 0.0 && am < PI, "decl={} ha={}: am={}", decl, ha_deg, am);
            assert!(pm > PI && pm < TAU, "decl={} ha={}: pm={}", decl, ha_deg, pm);
            // mirror image about the meridian
            assert_approx!(am + pm, TAU, 1e-9);
        }
    }
}

#[test]
fn test_azimuth_continuous_through_south_at_noon() {
    let lat = 38.29138889f64.to_radians();
    let eps = 1e-9;
    let before = azimuth_angle(lat, 0.378, -eps).unwrap();
    let at = azimuth_angle(lat, 0.378, 0.0).unwrap();
    let after = azimuth_angle(lat, 0.378, eps).unwrap();
    assert_approx!(before, PI, 1e-6);
    assert_approx!(at, PI, 1e-6);
    assert_approx!(after, PI, 1e-6);
    assert!(before <= at && at <= after);
}

#[test]
fn test_azimuth_sun_north_of_zenith_wraps_at_north() {
    // tropics in June: sun culminates to the north
    let lat = 0.1;
    let before = azimuth_angle(lat, 0.4, -1e-6).unwrap();
    let after = azimuth_angle(lat, 0.4, 1e-6).unwrap();
    assert!(before < 1e-3, "before={}", before);
    assert!(TAU - after < 1e-3, "after={}", after);
    let at = azimuth_angle(lat, 0.4, 0.0).unwrap();
    assert!(at < 1e-3 || TAU - at < 1e-3, "at={}", at);
}

#[test]
fn test_azimuth_known_value() {
    // 38.29°N, declination 0.3788 rad, hour angle -99.65°
    let az = azimuth_angle(38.29138889f64.to_radians(), 0.37877093, (-99.64912518f64).to_radians())
        .unwrap();
    assert_approx!(az.to_degrees(), 67.11, 0.01);
}

#[test]
fn test_azimuth_undefined_at_zenith_and_nadir() {
    assert_eq!(azimuth_angle(0.3, 0.3, 0.0), None);
    assert_eq!(azimuth_angle(0.3, -0.3, PI), None);
    assert_eq!(azimuth_angle(-0.2, -0.2, 0.0), None);
}

#[test]
fn test_azimuth_defined_at_poles() {
    for &lat in &[FRAC_PI_2, -FRAC_PI_2] {
        for i in 0..24 {
            let h = -PI + i as f64 * PI / 12.0;
            let az = azimuth_angle(lat, 0.2, h).unwrap();
            assert!((0.0..TAU).contains(&az), "lat={} h={}: {}", lat, h, az);
        }
    }
}

// ── NormalizeRadians ──

#[test]
fn test_normalize_radians() {
    let cases: &[(f64, f64)] = &[
        (0.0, 0.0),
        (TAU, 0.0),
        (-FRAC_PI_2, 3.0 * FRAC_PI_2),
        (3.0 * TAU + 1.0, 1.0),
        (-1e-20, 0.0),
    ];
    for &(input, expected) in cases {
        let out = normalize_radians(input);
        assert!((0.0..TAU).contains(&out), "{} -> {}", input, out);
        assert_approx!(out, expected, 1e-9);
    }
}

// ── SunsetHourAngle ──

#[test]
fn test_cos_sunset_hour_angle_equinox_equator() {
    // a little over six hours of half-day from refraction
    let h0 = cos_sunset_hour_angle(0.0, 0.0).acos();
    assert!(h0 > FRAC_PI_2);
    assert_approx!(hour_angle_to_minutes(h0), 363.3, 0.5);
}

#[test]
fn test_cos_sunset_hour_angle_polar_cases() {
    let lat = 80f64.to_radians();
    assert!(cos_sunset_hour_angle(lat, 0.409) < -1.0);
    assert!(cos_sunset_hour_angle(lat, -0.409) > 1.0);
}

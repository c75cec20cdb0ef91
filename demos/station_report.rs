use chrono::{NaiveDate, TimeZone, Utc};

use lapup_solar::{
    annotate_series, daylight_samples, minute_grid, pair_with_grid, LocalTimestamp,
    SolarGeometryCalculator, StationConfig, SunEvents,
};

fn main() -> Result<(), lapup_solar::Error> {
    env_logger::init();

    let station = StationConfig::default();
    let calc = SolarGeometryCalculator::new(station)?;

    println!("=== LAPUP Station Solar Geometry ===");
    println!(
        "Location: Patras ({:.5}°N, {:.5}°E), standard time UTC{:+}",
        station.position.latitude(),
        station.position.longitude(),
        station.offset.hours()
    );
    println!();

    // Logger timestamps are UTC
    for utc in [
        Utc.with_ymd_and_hms(2019, 1, 1, 11, 20, 0).unwrap(),
        Utc.with_ymd_and_hms(2019, 6, 24, 14, 40, 0).unwrap(),
    ] {
        let ts = LocalTimestamp::from_utc(&utc, station.offset)?;
        let g = calc.compute(ts)?;
        println!("Local standard time: {ts}");
        println!("True solar time:     {}", g.true_solar_time());
        println!("Declination:         {:.4} rad", g.declination());
        println!("Equation of time:    {:.2} min", g.equation_of_time());
        println!("Hour angle:          {:.4} rad ({:.2}°)", g.hour_angle(), g.hour_angle_degrees());
        println!("Elevation:           {:.2}°", g.elevation_degrees());
        match g.azimuth_degrees() {
            Some(az) => println!("Azimuth:             {az:.2}° (0°=N, 90°=E, 180°=S)"),
            None => println!("Azimuth:             undefined"),
        }
        println!();
    }

    if let Some(date) = NaiveDate::from_ymd_opt(2019, 7, 15) {
        if let SunEvents::RegularDay { sunrise, transit, sunset } = calc.sun_events(date)? {
            println!("--- {date} ---");
            println!("Sunrise: {sunrise}");
            println!("Transit: {transit}");
            println!("Sunset:  {sunset}");
            println!();
        }
    }

    let start = LocalTimestamp::new(2019, 7, 15, 0, 0, 0.0)?;
    let grid = minute_grid(start, 60, 24)?;
    let readings: Vec<f64> = (0..grid.len()).map(|i| i as f64 * 10.0).collect();
    let annotated = annotate_series(&calc, pair_with_grid(&grid, readings))?;
    println!("--- Hourly daylight samples ---");
    for s in daylight_samples(&annotated) {
        println!(
            "{}  reading={:>6.1}  elevation={:>6.2}°",
            s.timestamp,
            s.reading,
            s.geometry.elevation_degrees()
        );
    }
    Ok(())
}

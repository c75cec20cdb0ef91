//! Solar geometry for annotating radiometric station time series.
//!
//! Timestamps are local *standard* time (never daylight-saving time). Shift
//! UTC-stamped data with [`LocalTimestamp::from_utc`] before calling in.
//!
//! ```
//! use lapup_solar::{LocalTimestamp, SolarGeometryCalculator, StationConfig};
//!
//! let calc = SolarGeometryCalculator::new(StationConfig::default())?;
//! let ts = LocalTimestamp::new(2019, 7, 15, 12, 0, 0.0)?;
//! let geometry = calc.compute(ts)?;
//! assert!(geometry.zenith_degrees() < 25.0);
//! # Ok::<(), lapup_solar::Error>(())
//! ```
//!
//! Known limitation: the Fourier series use a fixed 365-day year and only the
//! whole hour of the timestamp, so results are low-precision (on the order of
//! a few tenths of a degree).

pub mod angles;
pub mod error;
pub mod geometry;
pub mod series;
pub mod types;

pub use angles::{
    azimuth_angle, cos_zenith, declination, equation_of_time, fractional_year, hour_angle,
    normalize_radians, solar_elevation, time_offset_minutes, true_solar_time, zenith_angle,
    DEGREES_PER_HOUR,
};

pub use error::{Error, Result};

pub use geometry::{SolarGeometry, SolarGeometryCalculator};

pub use series::{
    annotate_series, annotate_timestamps, daylight_samples, minute_grid, pair_with_grid,
    AnnotatedSample,
};

pub use types::{GeoPosition, LocalTimestamp, StandardOffset, StationConfig, SunEvents};

//! Annotating measurement series with solar geometry.

use log::debug;
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::{SolarGeometry, SolarGeometryCalculator};
use crate::types::LocalTimestamp;

/// One reading paired with the sun position at its timestamp.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnotatedSample<R> {
    pub timestamp: LocalTimestamp,
    pub reading: R,
    pub geometry: SolarGeometry,
}

/// Computes the geometry for every sample in parallel.
///
/// The output has the same length and order as `samples`.
///
/// # Errors
/// Returns a sample's error if any of them fails.
pub fn annotate_series<R: Send>(
    calculator: &SolarGeometryCalculator,
    samples: Vec<(LocalTimestamp, R)>,
) -> Result<Vec<AnnotatedSample<R>>> {
    debug!("annotating {} samples", samples.len());
    samples
        .into_par_iter()
        .map(|(timestamp, reading)| -> Result<AnnotatedSample<R>> {
            Ok(AnnotatedSample {
                timestamp,
                reading,
                geometry: calculator.compute(timestamp)?,
            })
        })
        .collect()
}

/// Geometry for bare timestamps, in input order.
///
/// # Errors
/// Returns a timestamp's error if any of them fails.
pub fn annotate_timestamps(
    calculator: &SolarGeometryCalculator,
    timestamps: &[LocalTimestamp],
) -> Result<Vec<SolarGeometry>> {
    timestamps
        .par_iter()
        .map(|&ts| calculator.compute(ts))
        .collect()
}

/// Samples taken while the sun is above the horizon.
pub fn daylight_samples<R>(
    samples: &[AnnotatedSample<R>],
) -> impl Iterator<Item = &AnnotatedSample<R>> {
    samples.iter().filter(|s| s.geometry.is_daylight())
}

/// Evenly spaced timestamps, `count` of them, `interval_minutes` apart,
/// starting at `start`. Matches the station's fixed-rate logging.
///
/// # Errors
/// Returns `InvalidTimestamp` for a non-positive interval or a grid running
/// past chrono's date range.
pub fn minute_grid(
    start: LocalTimestamp,
    interval_minutes: u32,
    count: usize,
) -> Result<Vec<LocalTimestamp>> {
    if interval_minutes == 0 {
        return Err(Error::invalid_timestamp("grid interval must be positive"));
    }
    (0..count)
        .map(|i| start.shifted_by_minutes(i as f64 * interval_minutes as f64))
        .collect()
}

/// Zips readings onto a grid, as a series ready for [`annotate_series`].
/// Extra readings or grid points beyond the shorter side are dropped.
pub fn pair_with_grid<R>(grid: &[LocalTimestamp], readings: Vec<R>) -> Vec<(LocalTimestamp, R)> {
    grid.iter().copied().zip(readings).collect()
}

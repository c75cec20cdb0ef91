//! Sun position for one station.
//!
//! [`SolarGeometryCalculator`] holds a validated [`StationConfig`] and exposes
//! every intermediate quantity as its own call. [`SolarGeometry`] bundles all
//! of them for a single instant, computed once at construction.

use chrono::{Datelike, NaiveDate};
use log::{debug, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angles;
use crate::error::Result;
use crate::types::{LocalTimestamp, StationConfig, SunEvents};

/// Every solar quantity for one timestamp at one station.
///
/// Angles are radians; `*_degrees` accessors convert. The value is immutable:
/// fields are only set by [`SolarGeometry::compute`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolarGeometry {
    timestamp: LocalTimestamp,
    fractional_year: f64,
    declination: f64,
    equation_of_time: f64,
    true_solar_time: LocalTimestamp,
    hour_angle: f64,
    cos_zenith: f64,
    zenith: f64,
    azimuth: Option<f64>,
}

impl SolarGeometry {
    /// # Errors
    /// Returns `InvalidTimestamp` if true solar time falls outside chrono's
    /// date range.
    pub fn compute(timestamp: LocalTimestamp, station: &StationConfig) -> Result<Self> {
        let latitude = station.position.latitude_radians();
        let gamma = angles::fractional_year(&timestamp);
        let declination = angles::declination(gamma);
        let equation_of_time = angles::equation_of_time(gamma);
        let offset_minutes = angles::time_offset_minutes(
            equation_of_time,
            station.position.longitude(),
            station.offset,
        );
        let true_solar_time = timestamp.shifted_by_minutes(offset_minutes)?;
        let hour_angle = angles::hour_angle(&true_solar_time);
        let cos_zenith = angles::cos_zenith(latitude, declination, hour_angle);
        let zenith = cos_zenith.acos();
        let azimuth = angles::azimuth_angle(latitude, declination, hour_angle);

        if azimuth.is_none() {
            warn!("azimuth undefined at {timestamp}: sun at zenith or nadir (zenith {zenith} rad)");
        }
        trace!(
            "{timestamp}: gamma={gamma:.6} decl={declination:.6} eot={equation_of_time:.3}min \
             tst={true_solar_time} ha={hour_angle:.6} zenith={zenith:.6}"
        );

        Ok(Self {
            timestamp,
            fractional_year: gamma,
            declination,
            equation_of_time,
            true_solar_time,
            hour_angle,
            cos_zenith,
            zenith,
            azimuth,
        })
    }

    pub fn timestamp(&self) -> LocalTimestamp {
        self.timestamp
    }

    pub fn fractional_year(&self) -> f64 {
        self.fractional_year
    }

    pub fn declination(&self) -> f64 {
        self.declination
    }

    /// Minutes.
    pub fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }

    pub fn true_solar_time(&self) -> LocalTimestamp {
        self.true_solar_time
    }

    pub fn hour_angle(&self) -> f64 {
        self.hour_angle
    }

    pub fn hour_angle_degrees(&self) -> f64 {
        self.hour_angle.to_degrees()
    }

    pub fn cos_zenith(&self) -> f64 {
        self.cos_zenith
    }

    pub fn zenith(&self) -> f64 {
        self.zenith
    }

    pub fn zenith_degrees(&self) -> f64 {
        self.zenith.to_degrees()
    }

    pub fn elevation(&self) -> f64 {
        angles::solar_elevation(self.zenith)
    }

    pub fn elevation_degrees(&self) -> f64 {
        self.elevation().to_degrees()
    }

    /// Clockwise from north in [0, 2π); `None` with the sun at zenith or nadir.
    pub fn azimuth(&self) -> Option<f64> {
        self.azimuth
    }

    pub fn azimuth_degrees(&self) -> Option<f64> {
        self.azimuth.map(f64::to_degrees)
    }

    pub fn is_daylight(&self) -> bool {
        self.elevation() > 0.0
    }
}

/// Solar geometry calculator bound to one station.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SolarGeometryCalculator {
    station: StationConfig,
}

impl SolarGeometryCalculator {
    /// # Errors
    /// Returns the station's first validation error.
    pub fn new(station: StationConfig) -> Result<Self> {
        station.validate()?;
        debug!(
            "solar geometry for station at {}°, {}° (UTC{:+})",
            station.position.latitude(),
            station.position.longitude(),
            station.offset.hours()
        );
        Ok(Self { station })
    }

    pub fn station(&self) -> &StationConfig {
        &self.station
    }

    pub fn fractional_year(&self, ts: &LocalTimestamp) -> f64 {
        angles::fractional_year(ts)
    }

    pub fn declination(&self, ts: &LocalTimestamp) -> f64 {
        angles::declination(angles::fractional_year(ts))
    }

    pub fn equation_of_time(&self, ts: &LocalTimestamp) -> f64 {
        angles::equation_of_time(angles::fractional_year(ts))
    }

    /// Signed minutes between local standard time and true solar time.
    pub fn time_offset_minutes(&self, ts: &LocalTimestamp) -> f64 {
        angles::time_offset_minutes(
            self.equation_of_time(ts),
            self.station.position.longitude(),
            self.station.offset,
        )
    }

    /// # Errors
    /// Returns `InvalidTimestamp` if the shift leaves chrono's date range.
    pub fn true_solar_time(&self, ts: &LocalTimestamp) -> Result<LocalTimestamp> {
        angles::true_solar_time(ts, self.station.position.longitude(), self.station.offset)
    }

    /// Radians, in [-π, π).
    ///
    /// # Errors
    /// See [`Self::true_solar_time`].
    pub fn hour_angle(&self, ts: &LocalTimestamp) -> Result<f64> {
        Ok(angles::hour_angle(&self.true_solar_time(ts)?))
    }

    /// # Errors
    /// See [`Self::true_solar_time`].
    pub fn cos_zenith(&self, ts: &LocalTimestamp) -> Result<f64> {
        let hour_angle = self.hour_angle(ts)?;
        Ok(angles::cos_zenith(
            self.station.position.latitude_radians(),
            self.declination(ts),
            hour_angle,
        ))
    }

    /// # Errors
    /// See [`Self::true_solar_time`].
    pub fn zenith_angle(&self, ts: &LocalTimestamp) -> Result<f64> {
        Ok(self.cos_zenith(ts)?.acos())
    }

    /// # Errors
    /// See [`Self::true_solar_time`].
    pub fn azimuth_angle(&self, ts: &LocalTimestamp) -> Result<Option<f64>> {
        let hour_angle = self.hour_angle(ts)?;
        Ok(angles::azimuth_angle(
            self.station.position.latitude_radians(),
            self.declination(ts),
            hour_angle,
        ))
    }

    /// # Errors
    /// See [`SolarGeometry::compute`].
    pub fn compute(&self, ts: LocalTimestamp) -> Result<SolarGeometry> {
        SolarGeometry::compute(ts, &self.station)
    }

    /// Apparent sunrise, solar transit and sunset on `date`, in local
    /// standard time. The declination and equation of time of local noon are
    /// used for the whole day.
    ///
    /// # Errors
    /// Returns `InvalidTimestamp` if the events fall outside chrono's range.
    pub fn sun_events(&self, date: NaiveDate) -> Result<SunEvents> {
        let noon = LocalTimestamp::new(date.year(), date.month(), date.day(), 12, 0, 0.0)?;
        let gamma = angles::fractional_year(&noon);
        let declination = angles::declination(gamma);
        let transit = noon.shifted_by_minutes(-self.time_offset_minutes(&noon))?;

        let cos_h0 =
            angles::cos_sunset_hour_angle(self.station.position.latitude_radians(), declination);
        let events = if cos_h0 > 1.0 {
            SunEvents::PolarNight { transit }
        } else if cos_h0 < -1.0 {
            SunEvents::PolarDay { transit }
        } else {
            let half_day = angles::hour_angle_to_minutes(cos_h0.acos());
            SunEvents::RegularDay {
                sunrise: transit.shifted_by_minutes(-half_day)?,
                transit,
                sunset: transit.shifted_by_minutes(half_day)?,
            }
        };
        debug!("sun events on {date}: {events:?}");
        Ok(events)
    }
}

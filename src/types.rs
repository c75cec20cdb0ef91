use std::fmt;

use chrono::{
    DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{check_latitude, check_longitude, check_offset_hours, Error, Result};

const NANOS_PER_SECOND: f64 = 1e9;

/// A calendar date and time in local *standard* time.
///
/// No daylight-saving correction is ever applied. Measurements stamped in
/// UTC (or in a DST-aware zone) must be shifted to the station's fixed
/// standard offset first, see [`LocalTimestamp::from_utc`] and
/// [`LocalTimestamp::from_zoned`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocalTimestamp(NaiveDateTime);

impl LocalTimestamp {
    /// Builds a timestamp from calendar components. `second` may carry a
    /// fractional part (nanosecond resolution).
    ///
    /// # Errors
    /// Returns `InvalidTimestamp` if the date or time does not exist or
    /// `second` is not a finite value in [0, 60).
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Result<Self> {
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_timestamp(format!(
                "second {second} outside [0, 60)"
            )));
        }
        let total_nanos = (second * NANOS_PER_SECOND).round() as u64;
        let whole = (total_nanos / 1_000_000_000) as u32;
        let nanos = (total_nanos % 1_000_000_000) as u32;
        if whole >= 60 {
            return Err(Error::invalid_timestamp(format!(
                "second {second} rounds to a full minute"
            )));
        }

        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            Error::invalid_timestamp(format!("no such date {year:04}-{month:02}-{day:02}"))
        })?;
        let time = NaiveTime::from_hms_nano_opt(hour, minute, whole, nanos).ok_or_else(|| {
            Error::invalid_timestamp(format!("no such time {hour:02}:{minute:02}:{second}"))
        })?;
        Ok(Self(date.and_time(time)))
    }

    pub fn from_naive(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    /// Re-expresses a UTC instant in the station's standard time.
    ///
    /// # Errors
    /// Returns `InvalidTimestamp` if the shift leaves chrono's date range.
    pub fn from_utc(utc: &DateTime<Utc>, offset: StandardOffset) -> Result<Self> {
        Self::from_zoned(utc, offset)
    }

    /// Re-expresses an instant from any zone (including DST-observing ones)
    /// in the station's fixed standard offset.
    ///
    /// # Errors
    /// Returns `InvalidTimestamp` if the shift leaves chrono's date range.
    pub fn from_zoned<Tz: TimeZone>(datetime: &DateTime<Tz>, offset: StandardOffset) -> Result<Self> {
        let shift = Duration::seconds((offset.hours() * 3600.0).round() as i64);
        datetime
            .naive_utc()
            .checked_add_signed(shift)
            .map(Self)
            .ok_or_else(|| Error::invalid_timestamp("standard-time shift out of range"))
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    /// 1-based ordinal day (Jan 1 = 1, up to 366 in leap years).
    pub fn day_of_year(&self) -> u32 {
        self.0.ordinal()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Time of day in decimal hours, including fractional seconds.
    pub fn decimal_hours(&self) -> f64 {
        self.minutes_of_day() / 60.0
    }

    /// Time of day in minutes since midnight, including fractional seconds.
    pub fn minutes_of_day(&self) -> f64 {
        let seconds = self.0.second() as f64 + self.0.nanosecond() as f64 / NANOS_PER_SECOND;
        self.0.hour() as f64 * 60.0 + self.0.minute() as f64 + seconds / 60.0
    }

    /// Shifts the timestamp by a signed number of minutes, carrying across
    /// day, month and year boundaries.
    ///
    /// # Errors
    /// Returns `InvalidTimestamp` if `minutes` is not finite or the result
    /// leaves chrono's date range.
    pub fn shifted_by_minutes(&self, minutes: f64) -> Result<Self> {
        let nanos = minutes * 60.0 * NANOS_PER_SECOND;
        if !nanos.is_finite() || nanos.abs() >= i64::MAX as f64 {
            return Err(Error::invalid_timestamp(format!(
                "cannot shift by {minutes} minutes"
            )));
        }
        self.0
            .checked_add_signed(Duration::nanoseconds(nanos.round() as i64))
            .map(Self)
            .ok_or_else(|| Error::invalid_timestamp("shifted timestamp out of range"))
    }
}

impl From<NaiveDateTime> for LocalTimestamp {
    fn from(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }
}

impl fmt::Display for LocalTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Observer position in degrees. Latitude is positive north, longitude
/// positive east and not wrapped into ±180°.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPosition {
    latitude: f64,
    longitude: f64,
}

impl GeoPosition {
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for bad coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_latitude(latitude)?;
        check_longitude(longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude_radians(&self) -> f64 {
        self.latitude.to_radians()
    }

    fn validate(&self) -> Result<()> {
        check_latitude(self.latitude)?;
        check_longitude(self.longitude)
    }
}

/// The station's standard (non-DST) offset from UTC, in hours.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StandardOffset {
    hours: f64,
}

impl StandardOffset {
    pub const UTC: Self = Self { hours: 0.0 };

    /// # Errors
    /// Returns `InvalidOffset` for non-finite values or values beyond ±14 h.
    pub fn from_hours(hours: f64) -> Result<Self> {
        check_offset_hours(hours)?;
        Ok(Self { hours })
    }

    /// Legacy zone guess `round(longitude / 15) + 1`, rounding halves to even.
    ///
    /// The extra hour matches Eastern European standard time at the Patras
    /// station and is wrong almost everywhere else. Only use it to reproduce
    /// values computed by the old station scripts.
    ///
    /// # Errors
    /// Returns `InvalidLongitude` or `InvalidOffset` for unusable longitudes.
    pub fn from_longitude_heuristic(longitude: f64) -> Result<Self> {
        check_longitude(longitude)?;
        Self::from_hours((longitude / 15.0).round_ties_even() + 1.0)
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }

    pub fn minutes(&self) -> f64 {
        self.hours * 60.0
    }
}

/// Station configuration, supplied once by the host program.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StationConfig {
    pub position: GeoPosition,
    pub offset: StandardOffset,
}

impl StationConfig {
    /// # Errors
    /// Returns the first validation error among the three inputs.
    pub fn new(latitude: f64, longitude: f64, offset_hours: f64) -> Result<Self> {
        Ok(Self {
            position: GeoPosition::new(latitude, longitude)?,
            offset: StandardOffset::from_hours(offset_hours)?,
        })
    }

    #[must_use]
    pub fn with_position(self, position: GeoPosition) -> Self {
        Self { position, ..self }
    }

    #[must_use]
    pub fn with_offset(self, offset: StandardOffset) -> Self {
        Self { offset, ..self }
    }

    /// Re-checks all fields. Configurations built through deserialization
    /// skip the constructors, so the calculator validates again.
    ///
    /// # Errors
    /// Returns the first validation error found.
    pub fn validate(&self) -> Result<()> {
        self.position.validate()?;
        check_offset_hours(self.offset.hours)
    }
}

impl Default for StationConfig {
    /// LAPUP radiometric station, University of Patras (UTC+2 standard time).
    fn default() -> Self {
        Self {
            position: GeoPosition {
                latitude: 38.29138889,
                longitude: 21.78861111,
            },
            offset: StandardOffset { hours: 2.0 },
        }
    }
}

/// Sunrise, transit and sunset for one day, or the polar cases where the sun
/// never crosses the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SunEvents<T = LocalTimestamp> {
    RegularDay { sunrise: T, transit: T, sunset: T },
    /// Sun stays above the horizon all day.
    PolarDay { transit: T },
    /// Sun stays below the horizon all day.
    PolarNight { transit: T },
}

impl<T> SunEvents<T> {
    pub const fn transit(&self) -> &T {
        match self {
            Self::RegularDay { transit, .. }
            | Self::PolarDay { transit }
            | Self::PolarNight { transit } => transit,
        }
    }

    pub const fn sunrise(&self) -> Option<&T> {
        match self {
            Self::RegularDay { sunrise, .. } => Some(sunrise),
            _ => None,
        }
    }

    pub const fn sunset(&self) -> Option<&T> {
        match self {
            Self::RegularDay { sunset, .. } => Some(sunset),
            _ => None,
        }
    }

    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::PolarDay { .. })
    }

    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::PolarNight { .. })
    }
}

//! Error types for solar geometry calculations.
//!
//! Inputs are validated when a position, offset or timestamp is built. Once a
//! calculator exists every formula is total over its inputs, so the only
//! failures a caller sees are malformed inputs.

use thiserror::Error;

/// Result type alias for operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Largest standard UTC offset in use, in hours.
pub const MAX_OFFSET_HOURS: f64 = 14.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Latitude outside [-90, 90] degrees or not finite.
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude { value: f64 },

    /// Longitude that is not a finite number.
    #[error("invalid longitude {value}° (must be finite)")]
    InvalidLongitude { value: f64 },

    /// Standard UTC offset that is not finite or is beyond ±14 hours.
    #[error("invalid standard offset {value} h (must be between -14 h and +14 h)")]
    InvalidOffset { value: f64 },

    /// Calendar components that do not name a real instant, or a shift that
    /// leaves the representable date range.
    #[error("invalid timestamp: {message}")]
    InvalidTimestamp { message: String },
}

impl Error {
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    #[must_use]
    pub const fn invalid_offset(value: f64) -> Self {
        Self::InvalidOffset { value }
    }

    pub fn invalid_timestamp(message: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            message: message.into(),
        }
    }
}

/// Validates latitude is within [-90, 90] degrees.
///
/// # Errors
/// Returns `InvalidLatitude` for out-of-range or non-finite values.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is finite. Values beyond ±180° are accepted as-is.
///
/// # Errors
/// Returns `InvalidLongitude` for NaN or infinite values.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !longitude.is_finite() {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates a standard UTC offset in hours.
///
/// # Errors
/// Returns `InvalidOffset` for non-finite values or values beyond ±14 h.
pub fn check_offset_hours(hours: f64) -> Result<()> {
    if !(-MAX_OFFSET_HOURS..=MAX_OFFSET_HOURS).contains(&hours) {
        return Err(Error::invalid_offset(hours));
    }
    Ok(())
}

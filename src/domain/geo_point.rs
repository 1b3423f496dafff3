use std::fmt;
use thiserror::Error;

/// A latitude/longitude pair on earth, in degrees. Validated at construction
/// and immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() {
            return Err(CoordinateError::NotFinite(latitude));
        }
        if !longitude.is_finite() {
            return Err(CoordinateError::NotFinite(longitude));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }

        Ok(GeoPoint { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Canonical `"{lat},{lon}"` form, used for coordinate parameters in outbound
/// API calls.
impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum CoordinateError {
    #[error("latitude {0} is outside the valid range [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside the valid range [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("coordinate component {0} is not a finite number")]
    NotFinite(f64),
}

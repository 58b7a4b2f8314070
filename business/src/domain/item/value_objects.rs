use serde::{Deserialize, Serialize};

use super::errors::ItemError;

/// A WGS84 point used to anchor a nearby search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Latitude must lie in [-90, 90] and longitude in [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ItemError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(ItemError::InvalidCoordinates);
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(ItemError::InvalidCoordinates);
        }
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
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_accept_valid_coordinates() {
        let point = GeoPoint::new(37.38, -122.08).unwrap();
        assert_eq!(point.latitude(), 37.38);
        assert_eq!(point.longitude(), -122.08);
    }

    #[test]
    fn should_accept_boundary_coordinates() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn should_reject_latitude_out_of_range() {
        let result = GeoPoint::new(91.0, 0.0);
        assert!(matches!(result, Err(ItemError::InvalidCoordinates)));
    }

    #[test]
    fn should_reject_nan_longitude() {
        let result = GeoPoint::new(0.0, f64::NAN);
        assert!(matches!(result, Err(ItemError::InvalidCoordinates)));
    }

    proptest! {
        #[test]
        fn should_accept_every_point_in_range(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            prop_assert!(GeoPoint::new(lat, lon).is_ok());
        }

        #[test]
        fn should_reject_every_latitude_beyond_the_poles(lat in 90.0001f64..1.0e6, lon in -180.0f64..=180.0) {
            prop_assert!(GeoPoint::new(lat, lon).is_err());
            prop_assert!(GeoPoint::new(-lat, lon).is_err());
        }
    }
}

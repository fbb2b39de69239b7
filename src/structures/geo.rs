use std::fmt::Display;

use serde::{Deserialize, Serialize};

const EARTH_RADIUS: f64 = 6371000.0;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        LatLng {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance in metres.
    pub fn dist(&self, other: Self) -> f64 {
        if self == &other {
            return 0.0;
        }

        let delta_latitude = (self.latitude - other.latitude).to_radians();
        let delta_longitude = (self.longitude - other.longitude).to_radians();

        let central_angle_inner = (delta_latitude / 2.0).sin().powi(2)
            + self.latitude.to_radians().cos()
                * other.latitude.to_radians().cos()
                * (delta_longitude / 2.0).sin().powi(2);
        let central_angle = 2.0 * central_angle_inner.sqrt().asin();

        EARTH_RADIUS * central_angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero() {
        let a = LatLng::new(55.611087, 37.20829);
        assert_eq!(a.dist(a), 0.0);
    }

    #[test]
    fn one_hundredth_degree_on_equator() {
        let a = LatLng::new(0.0, 0.0);
        let b = LatLng::new(0.0, 0.01);
        let d = a.dist(b);
        assert!((d - 1111.95).abs() < 0.1, "got {d}");
        assert!((b.dist(a) - d).abs() < 1e-9);
    }
}

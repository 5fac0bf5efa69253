// Location model representing geographic coordinates

use geo::{HaversineDistance, Point};
use serde::{Deserialize, Serialize};

/// Represents a location as latitude/longitude in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Creates a new location with the given coordinates
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to another location in kilometres
    pub fn haversine_km(&self, other: &Location) -> f64 {
        self.to_point().haversine_distance(&other.to_point()) / 1000.0
    }

    // geo points are (x = longitude, y = latitude)
    fn to_point(self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

// Travel mode model describing how a traveller moves between spots

use crate::models::{Cost, TravelModeId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported travel modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TravelModeName {
    Walking,
    Auto,
    Taxi,
    Metro,
    Bus,
}

impl fmt::Display for TravelModeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Represents a way of travelling with its cost and speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelMode {
    pub id: TravelModeId,

    pub name: TravelModeName,

    /// Display icon
    #[serde(default)]
    pub icon: String,

    /// Cost per kilometre travelled
    pub cost_per_km: Cost,

    /// Average speed in km/h
    pub speed_km_per_hour: f64,
}

impl TravelMode {
    /// Creates a new travel mode without an icon
    pub fn new<S: Into<String>>(
        id: S,
        name: TravelModeName,
        cost_per_km: Cost,
        speed_km_per_hour: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            icon: String::new(),
            cost_per_km,
            speed_km_per_hour,
        }
    }

    /// Minutes needed to travel the given distance, rounded to a whole minute
    pub fn travel_minutes(&self, distance_km: f64) -> u32 {
        if self.speed_km_per_hour <= 0.0 {
            return 0;
        }
        (distance_km / self.speed_km_per_hour * 60.0).round() as u32
    }

    /// Cost of travelling the given distance, rounded to a whole currency unit
    pub fn travel_cost(&self, distance_km: f64) -> Cost {
        (distance_km * self.cost_per_km).round()
    }

    /// Rate label, e.g. "₹15/km | 25 km/h"
    pub fn rate_label(&self) -> String {
        format!("₹{}/km | {} km/h", self.cost_per_km, self.speed_km_per_hour)
    }
}

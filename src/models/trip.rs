// Trip models for representing a planned itinerary

use crate::models::{CityId, Cost, SpotId, Time, TouristSpot, TravelMode, TravelModeId};
use crate::utils::format::format_duration;
use jiff::civil;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Part of the day a spot is recommended for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitTime {
    Morning,
    Afternoon,
    Evening,
}

impl VisitTime {
    /// Label for the spot at `index` in a trip of `len` spots.
    /// The first spot wins over the last one when they coincide.
    pub fn for_position(index: usize, len: usize) -> Self {
        if index == 0 {
            VisitTime::Morning
        } else if index + 1 == len {
            VisitTime::Evening
        } else {
            VisitTime::Afternoon
        }
    }
}

impl VisitTime {
    /// Local time a visit in this part of the day starts at
    pub fn starts_at(&self) -> civil::Time {
        match self {
            VisitTime::Morning => civil::time(9, 0, 0, 0),
            VisitTime::Afternoon => civil::time(13, 0, 0, 0),
            VisitTime::Evening => civil::time(17, 0, 0, 0),
        }
    }
}

impl fmt::Display for VisitTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Request to plan a trip through selected spots of one city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub city_id: CityId,

    /// Selected spots, in the order they will be visited
    pub spot_ids: Vec<SpotId>,

    pub travel_mode_id: TravelModeId,
}

impl TripRequest {
    /// Creates a new trip request
    pub fn new<S, I, T>(city_id: S, spot_ids: I, travel_mode_id: S) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            city_id: city_id.into(),
            spot_ids: spot_ids.into_iter().map(Into::into).collect(),
            travel_mode_id: travel_mode_id.into(),
        }
    }
}

/// A tourist spot placed in a trip, with the leg to the following spot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSpot {
    #[serde(flatten)]
    pub spot: TouristSpot,

    /// 1-based position in the trip
    pub visit_order: u32,

    pub recommended_time_to_visit: VisitTime,

    /// Minutes to reach the next spot (0 for the last spot)
    pub time_to_next_spot: u32,

    /// Kilometres to the next spot (0 for the last spot)
    pub distance_to_next_spot: f64,

    /// Transportation cost to the next spot (0 for the last spot)
    pub transportation_cost_to_next: Cost,
}

impl TripSpot {
    /// Whether the spot is open when its recommended visit starts
    pub fn open_at_recommended_time(&self) -> bool {
        self.spot.is_open_at(self.recommended_time_to_visit.starts_at())
    }
}

/// Aggregate cost of a trip. Food and lodging are not included.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TripCost {
    pub tickets: Cost,
    pub transportation: Cost,
    pub total: Cost,
}

impl TripCost {
    /// Creates a cost breakdown where total is tickets plus transportation
    pub fn new(tickets: Cost, transportation: Cost) -> Self {
        Self {
            tickets,
            transportation,
            total: tickets + transportation,
        }
    }
}

/// Represents a complete trip plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    pub id: String,

    pub city_id: CityId,

    /// Spots in visit order
    pub spots: Vec<TripSpot>,

    pub total_cost: TripCost,

    /// Total duration in hours, visits plus travel
    pub total_duration: Time,

    pub selected_travel_mode: TravelMode,
}

impl TripPlan {
    /// Names of the spots in visit order
    pub fn spot_names(&self) -> Vec<&str> {
        self.spots.iter().map(|s| s.spot.name.as_str()).collect()
    }

    /// Total kilometres travelled between spots
    pub fn total_distance(&self) -> f64 {
        self.spots.iter().map(|s| s.distance_to_next_spot).sum()
    }

    /// Duration label, e.g. "3 hrs 24 mins"
    pub fn duration_label(&self) -> String {
        format_duration(self.total_duration)
    }
}

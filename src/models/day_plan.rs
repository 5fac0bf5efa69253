// Day plan models for splitting a trip across several days

use crate::error::{PlannerError, Result};
use crate::models::Cost;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of days a trip is spread over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItineraryWindow {
    OneDay,
    ThreeDay,
    SevenDay,
}

impl ItineraryWindow {
    pub const ALL: [ItineraryWindow; 3] = [
        ItineraryWindow::OneDay,
        ItineraryWindow::ThreeDay,
        ItineraryWindow::SevenDay,
    ];

    /// Number of days in the window
    pub fn days(&self) -> usize {
        match self {
            ItineraryWindow::OneDay => 1,
            ItineraryWindow::ThreeDay => 3,
            ItineraryWindow::SevenDay => 7,
        }
    }
}

impl TryFrom<u8> for ItineraryWindow {
    type Error = PlannerError;

    fn try_from(days: u8) -> Result<Self> {
        match days {
            1 => Ok(ItineraryWindow::OneDay),
            3 => Ok(ItineraryWindow::ThreeDay),
            7 => Ok(ItineraryWindow::SevenDay),
            other => Err(PlannerError::invalid_input("window")
                .with_reason(format!("{} days is not a supported trip length", other))),
        }
    }
}

impl fmt::Display for ItineraryWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-day", self.days())
    }
}

/// Meal suggestions for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meals {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
}

/// Cost breakdown of a single day. Every component is a whole currency amount.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DayCosts {
    pub transport: Cost,
    pub food: Cost,
    pub accommodation: Cost,
    pub activities: Cost,
    pub total: Cost,
}

impl DayCosts {
    /// Creates a day cost breakdown and sums the total
    pub fn new(transport: Cost, food: Cost, accommodation: Cost, activities: Cost) -> Self {
        Self {
            transport,
            food,
            accommodation,
            activities,
            total: transport + food + accommodation + activities,
        }
    }
}

/// One day of a multi-day itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day number
    pub day: usize,

    /// Names of the spots visited on this day
    pub spots: Vec<String>,

    pub meals: Meals,

    /// Lodging for the night, if any
    pub accommodation: Option<String>,

    pub costs: DayCosts,

    pub travel_tips: Vec<String>,
}

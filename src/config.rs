// Planner configuration: the product-defined rates used for day plans

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Cost, ItineraryWindow};

/// Per-day rates for one itinerary window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRates {
    /// Food budget for every day
    pub food: Cost,

    /// Lodging cost for every night; the last day has no night
    pub accommodation: Cost,

    /// Accommodation label shown for nights with lodging
    pub accommodation_label: Option<String>,

    /// Activity cost charged on days without any spot
    pub free_day_activities: Option<Cost>,
}

impl DayRates {
    // Fields absent from the overrides keep their current value
    fn merged(self, overrides: DayRatesOverrides) -> Self {
        Self {
            food: overrides.food.unwrap_or(self.food),
            accommodation: overrides.accommodation.unwrap_or(self.accommodation),
            accommodation_label: match overrides.accommodation_label {
                Some(label) if label.is_empty() => None,
                Some(label) => Some(label),
                None => self.accommodation_label,
            },
            free_day_activities: overrides.free_day_activities.or(self.free_day_activities),
        }
    }
}

/// Partial day rates as written in a configuration file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DayRatesOverrides {
    food: Option<Cost>,
    accommodation: Option<Cost>,
    accommodation_label: Option<String>,
    free_day_activities: Option<Cost>,
}

/// Partial planner configuration as written in a configuration file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PlannerConfigOverrides {
    one_day: DayRatesOverrides,
    three_day: DayRatesOverrides,
    seven_day: DayRatesOverrides,
    road_factor: Option<f64>,
}

impl From<PlannerConfigOverrides> for PlannerConfig {
    fn from(overrides: PlannerConfigOverrides) -> Self {
        let defaults = PlannerConfig::default();
        Self {
            one_day: defaults.one_day.merged(overrides.one_day),
            three_day: defaults.three_day.merged(overrides.three_day),
            seven_day: defaults.seven_day.merged(overrides.seven_day),
            road_factor: overrides.road_factor.unwrap_or(defaults.road_factor),
        }
    }
}

/// Configuration of the trip planner.
///
/// When deserialized, every missing field falls back to the default of its
/// own window. An empty label or a zero free-day charge switches them off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PlannerConfigOverrides")]
pub struct PlannerConfig {
    pub one_day: DayRates,
    pub three_day: DayRates,
    pub seven_day: DayRates,

    /// Multiplier applied to straight-line distances to approximate roads
    pub road_factor: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            one_day: DayRates {
                food: 800.0,
                accommodation: 0.0,
                accommodation_label: None,
                free_day_activities: None,
            },
            three_day: DayRates {
                food: 1200.0,
                accommodation: 2500.0,
                accommodation_label: Some("Hotel/Guesthouse accommodation".to_string()),
                free_day_activities: None,
            },
            seven_day: DayRates {
                food: 1500.0,
                accommodation: 2200.0,
                accommodation_label: Some("Recommended accommodation".to_string()),
                free_day_activities: Some(500.0),
            },
            road_factor: 1.3,
        }
    }
}

impl PlannerConfig {
    /// Loads a configuration from JSON. Missing sections keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Rates for the given window
    pub fn rates_for(&self, window: ItineraryWindow) -> &DayRates {
        match window {
            ItineraryWindow::OneDay => &self.one_day,
            ItineraryWindow::ThreeDay => &self.three_day,
            ItineraryWindow::SevenDay => &self.seven_day,
        }
    }
}

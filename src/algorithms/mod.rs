pub mod day_plan;
pub mod itinerary;

// Common algorithm traits
use crate::error::Result;
use crate::models::{DayPlan, ItineraryWindow, TripPlan, TripRequest};

/// Trait for trip planners
pub trait ItineraryPlanner {
    /// Build a trip plan visiting the requested spots in the requested order
    fn build_trip_plan(&self, request: &TripRequest) -> Result<TripPlan>;

    /// Split a trip plan across the days of the given window
    fn generate_day_plans(&self, plan: &TripPlan, window: ItineraryWindow) -> Vec<DayPlan>;
}

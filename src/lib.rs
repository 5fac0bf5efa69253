// Public modules
pub mod algorithms;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::day_plan::{generate_day_plans, generate_day_plans_with, itinerary_total};
pub use algorithms::itinerary::TripPlanner;
pub use algorithms::ItineraryPlanner;
pub use config::PlannerConfig;
pub use error::{NotFoundKind, PlannerError, Result};
pub use ledger::ReviewLedger;
pub use models::{DayPlan, ItineraryWindow, Review, TouristSpot, TravelMode, TripPlan, TripRequest};
pub use utils::catalog::{Catalog, StaticCatalog};

// Models module - exports all model types

mod city;
mod day_plan;
mod location;
mod review;
mod spot;
mod travel_mode;
mod trip;

// Re-export model types
pub use self::city::City;
pub use self::day_plan::{DayCosts, DayPlan, ItineraryWindow, Meals};
pub use self::location::Location;
pub use self::review::{Review, Reviewer};
pub use self::spot::{BadgeStyle, SpotCategory, TouristSpot};
pub use self::travel_mode::{TravelMode, TravelModeName};
pub use self::trip::{TripCost, TripRequest, TripSpot, TripPlan, VisitTime};

// Common type aliases for improved code readability
pub type CityId = String;
pub type SpotId = String;
pub type TravelModeId = String;
pub type ReviewId = String;
pub type Cost = f64;
pub type Time = f64;

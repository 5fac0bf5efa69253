// Shared fixtures for integration tests
#![allow(dead_code)]

use jiff::civil::time;
use trip_planner::models::{City, Location, SpotCategory, TouristSpot, TravelMode, TravelModeName};
use trip_planner::utils::distance::FixedLegDistance;
use trip_planner::{StaticCatalog, TripPlanner};

pub fn create_spot(id: &str, name: &str, ticket_price: f64, hours: f64) -> TouristSpot {
    TouristSpot {
        id: id.to_string(),
        city_id: "test-city".to_string(),
        name: name.to_string(),
        description: String::new(),
        image_url: String::new(),
        ticket_price,
        opening_time: time(9, 0, 0, 0),
        closing_time: time(18, 0, 0, 0),
        average_time_spent: hours,
        rating: 4.2,
        category: SpotCategory::Cultural,
        location: Location::new(20.0, 78.0),
        reviews: Vec::new(),
    }
}

/// Catalog with one city, five spots and two travel modes
pub fn create_test_catalog() -> StaticCatalog {
    StaticCatalog::new(
        vec![City::new("test-city", "Test City", "Test State")],
        vec![
            create_spot("a", "Spot A", 0.0, 2.0),
            create_spot("b", "Spot B", 500.0, 1.0),
            create_spot("c", "Spot C", 120.0, 1.5),
            create_spot("d", "Spot D", 60.0, 0.5),
            create_spot("e", "Spot E", 0.0, 3.0),
        ],
        vec![
            TravelMode::new("walking", TravelModeName::Walking, 0.0, 5.0),
            TravelMode::new("taxi", TravelModeName::Taxi, 25.0, 30.0),
        ],
    )
    .expect("test catalog is valid")
}

/// Planner where every leg is 2 km long
pub fn create_test_planner() -> TripPlanner<StaticCatalog, FixedLegDistance> {
    TripPlanner::new(create_test_catalog()).with_estimator(FixedLegDistance(2.0))
}

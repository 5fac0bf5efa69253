// Catalog of cities, tourist spots and travel modes held in memory

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{PlannerError, Result};
use crate::models::{City, TouristSpot, TravelMode};

const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Read access to the reference data a trip is planned against
pub trait Catalog {
    /// All cities in display order
    fn list_cities(&self) -> &[City];

    /// Looks up a city by ID
    fn city(&self, city_id: &str) -> Option<&City>;

    /// Spots of a city in display order
    fn spots_for_city(&self, city_id: &str) -> Vec<&TouristSpot>;

    /// Looks up a spot that belongs to the given city
    fn spot(&self, city_id: &str, spot_id: &str) -> Option<&TouristSpot>;

    /// All travel modes in display order
    fn list_travel_modes(&self) -> &[TravelMode];

    /// Looks up a travel mode by ID
    fn travel_mode(&self, mode_id: &str) -> Option<&TravelMode>;
}

/// Catalog backed by vectors loaded once at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticCatalog {
    #[serde(default)]
    cities: Vec<City>,

    #[serde(default)]
    spots: Vec<TouristSpot>,

    #[serde(default)]
    travel_modes: Vec<TravelMode>,
}

impl StaticCatalog {
    /// Creates a catalog after validating the records
    pub fn new(
        cities: Vec<City>,
        spots: Vec<TouristSpot>,
        travel_modes: Vec<TravelMode>,
    ) -> Result<Self> {
        let catalog = Self {
            cities,
            spots,
            travel_modes,
        };
        catalog.validate()?;

        info!(
            "Loaded catalog with {} cities, {} spots and {} travel modes",
            catalog.cities.len(),
            catalog.spots.len(),
            catalog.travel_modes.len()
        );

        Ok(catalog)
    }

    /// Parses and validates a catalog from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let parsed: StaticCatalog = serde_json::from_str(json)?;
        Self::new(parsed.cities, parsed.spots, parsed.travel_modes)
    }

    /// The catalog shipped with the crate
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    fn validate(&self) -> Result<()> {
        let mut city_ids = HashSet::new();
        for city in &self.cities {
            if !city_ids.insert(city.id.as_str()) {
                return Err(PlannerError::catalog(format!("duplicate city ID '{}'", city.id)));
            }
        }

        let mut spot_ids = HashSet::new();
        for spot in &self.spots {
            if !spot_ids.insert(spot.id.as_str()) {
                return Err(PlannerError::catalog(format!("duplicate spot ID '{}'", spot.id)));
            }
            if !city_ids.contains(spot.city_id.as_str()) {
                return Err(PlannerError::catalog(format!(
                    "spot '{}' refers to unknown city '{}'",
                    spot.id, spot.city_id
                )));
            }
            if spot.ticket_price < 0.0 {
                return Err(PlannerError::catalog(format!(
                    "spot '{}' has a negative ticket price",
                    spot.id
                )));
            }
            if spot.average_time_spent <= 0.0 {
                return Err(PlannerError::catalog(format!(
                    "spot '{}' must have a positive visit duration",
                    spot.id
                )));
            }
            if !(0.0..=5.0).contains(&spot.rating) {
                return Err(PlannerError::catalog(format!(
                    "spot '{}' has rating {} outside 0-5",
                    spot.id, spot.rating
                )));
            }
            debug!("Validated spot {} in {}", spot.id, spot.city_id);
        }

        let mut mode_ids = HashSet::new();
        for mode in &self.travel_modes {
            if !mode_ids.insert(mode.id.as_str()) {
                return Err(PlannerError::catalog(format!(
                    "duplicate travel mode ID '{}'",
                    mode.id
                )));
            }
            if mode.speed_km_per_hour <= 0.0 || mode.cost_per_km < 0.0 {
                return Err(PlannerError::catalog(format!(
                    "travel mode '{}' needs a positive speed and non-negative cost",
                    mode.id
                )));
            }
        }

        Ok(())
    }
}

impl Catalog for StaticCatalog {
    fn list_cities(&self) -> &[City] {
        &self.cities
    }

    fn city(&self, city_id: &str) -> Option<&City> {
        self.cities.iter().find(|city| city.id == city_id)
    }

    fn spots_for_city(&self, city_id: &str) -> Vec<&TouristSpot> {
        self.spots
            .iter()
            .filter(|spot| spot.city_id == city_id)
            .collect()
    }

    fn spot(&self, city_id: &str, spot_id: &str) -> Option<&TouristSpot> {
        self.spots
            .iter()
            .find(|spot| spot.id == spot_id && spot.city_id == city_id)
    }

    fn list_travel_modes(&self) -> &[TravelMode] {
        &self.travel_modes
    }

    fn travel_mode(&self, mode_id: &str) -> Option<&TravelMode> {
        self.travel_modes.iter().find(|mode| mode.id == mode_id)
    }
}

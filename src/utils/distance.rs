// Distance estimation for the legs between consecutive spots

use crate::models::{TouristSpot, TravelMode};
use crate::utils::hash::stable_hash;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Estimates the travel distance of a leg in kilometres.
///
/// Implementations must be deterministic: the same pair of spots and travel
/// mode always yields the same distance, across builds as well. None of them
/// are meant to match a real routing engine.
pub trait LegEstimator {
    fn estimate_km(&self, from: &TouristSpot, to: &TouristSpot, mode: &TravelMode) -> f64;
}

/// Every leg has the same length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLegDistance(pub f64);

impl LegEstimator for FixedLegDistance {
    fn estimate_km(&self, _from: &TouristSpot, _to: &TouristSpot, _mode: &TravelMode) -> f64 {
        self.0.max(0.0)
    }
}

/// Straight-line distance between the spots scaled by a road-winding factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodesicLegDistance {
    pub road_factor: f64,
}

impl GeodesicLegDistance {
    pub fn new(road_factor: f64) -> Self {
        Self { road_factor }
    }
}

impl Default for GeodesicLegDistance {
    fn default() -> Self {
        Self::new(1.3)
    }
}

impl LegEstimator for GeodesicLegDistance {
    fn estimate_km(&self, from: &TouristSpot, to: &TouristSpot, _mode: &TravelMode) -> f64 {
        round_to_tenth(from.location.haversine_km(&to.location) * self.road_factor.max(0.0))
    }
}

/// Pseudo-random distance drawn from a generator seeded by the leg itself.
/// XXH3 and ChaCha8 are both value-stable, so a given seed always yields the
/// same distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeededLegDistance {
    pub seed: u64,
    pub min_km: f64,
    pub max_km: f64,
}

impl SeededLegDistance {
    pub fn new(seed: u64, min_km: f64, max_km: f64) -> Self {
        Self {
            seed,
            min_km,
            max_km,
        }
    }

    fn leg_seed(&self, from: &TouristSpot, to: &TouristSpot, mode: &TravelMode) -> u64 {
        stable_hash(self.seed, [from.id.as_str(), to.id.as_str(), mode.id.as_str()])
    }
}

impl Default for SeededLegDistance {
    fn default() -> Self {
        Self::new(0, 1.0, 10.0)
    }
}

impl LegEstimator for SeededLegDistance {
    fn estimate_km(&self, from: &TouristSpot, to: &TouristSpot, mode: &TravelMode) -> f64 {
        if self.max_km <= self.min_km {
            return round_to_tenth(self.min_km.max(0.0));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.leg_seed(from, to, mode));
        round_to_tenth(rng.gen_range(self.min_km..self.max_km))
    }
}

// Distances are reported with one decimal place
fn round_to_tenth(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}

use log::{debug, info, warn};
use std::collections::HashSet;

use crate::algorithms::day_plan::generate_day_plans_with;
use crate::algorithms::ItineraryPlanner;
use crate::config::PlannerConfig;
use crate::error::{NotFoundKind, PlannerError, Result};
use crate::models::{
    Cost, DayPlan, ItineraryWindow, TouristSpot, TravelMode, TripCost, TripPlan, TripRequest,
    TripSpot, VisitTime,
};
use crate::utils::catalog::Catalog;
use crate::utils::distance::{GeodesicLegDistance, LegEstimator};
use crate::utils::hash::stable_hash;

/// Builds trip plans against a catalog.
///
/// Selection order is visit order: spots are never reordered by geography
/// or rating.
pub struct TripPlanner<C, E = GeodesicLegDistance> {
    catalog: C,
    estimator: E,
    config: PlannerConfig,
}

impl<C: Catalog> TripPlanner<C, GeodesicLegDistance> {
    /// Creates a planner with the default configuration
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, PlannerConfig::default())
    }

    /// Creates a planner whose geodesic estimator uses the configured road factor
    pub fn with_config(catalog: C, config: PlannerConfig) -> Self {
        Self {
            catalog,
            estimator: GeodesicLegDistance::new(config.road_factor),
            config,
        }
    }
}

impl<C: Catalog, E: LegEstimator> TripPlanner<C, E> {
    /// Replaces the leg distance estimator
    pub fn with_estimator<F: LegEstimator>(self, estimator: F) -> TripPlanner<C, F> {
        TripPlanner {
            catalog: self.catalog,
            estimator,
            config: self.config,
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Resolves every requested spot, keeping the caller's order
    fn resolve_spots(&self, request: &TripRequest) -> Result<Vec<&TouristSpot>> {
        if request.spot_ids.is_empty() {
            warn!("Rejected trip request for {} without spots", request.city_id);
            return Err(PlannerError::invalid_input("spots")
                .with_reason("Please select at least one tourist spot to plan your trip."));
        }

        let mut seen = HashSet::new();
        if let Some(duplicate) = request.spot_ids.iter().find(|id| !seen.insert(id.as_str())) {
            warn!("Rejected trip request with {} selected twice", duplicate);
            return Err(PlannerError::invalid_input("spots")
                .with_reason(format!("{} is already part of the trip.", duplicate)));
        }

        if self.catalog.city(&request.city_id).is_none() {
            return Err(PlannerError::not_found(NotFoundKind::City, &request.city_id));
        }

        request
            .spot_ids
            .iter()
            .map(|spot_id| {
                self.catalog
                    .spot(&request.city_id, spot_id)
                    .ok_or_else(|| PlannerError::not_found(NotFoundKind::Spot, spot_id))
            })
            .collect()
    }

    fn resolve_travel_mode(&self, request: &TripRequest) -> Result<&TravelMode> {
        self.catalog
            .travel_mode(&request.travel_mode_id)
            .ok_or_else(|| {
                PlannerError::not_found(NotFoundKind::TravelMode, &request.travel_mode_id)
            })
    }

    /// Places the resolved spots in order and computes the leg to each next spot
    fn build_trip_spots(&self, spots: &[&TouristSpot], mode: &TravelMode) -> Vec<TripSpot> {
        let len = spots.len();

        spots
            .iter()
            .enumerate()
            .map(|(i, spot)| {
                // No trailing leg after the last spot
                let (distance, minutes, cost) = match spots.get(i + 1) {
                    Some(next) => {
                        let distance = self.estimator.estimate_km(spot, next, mode);
                        let minutes = mode.travel_minutes(distance);
                        let cost = mode.travel_cost(distance);
                        debug!(
                            "Leg {} -> {}: {} km, {} min, cost {}",
                            spot.id, next.id, distance, minutes, cost
                        );
                        (distance, minutes, cost)
                    }
                    None => (0.0, 0, 0.0),
                };

                TripSpot {
                    spot: (*spot).clone(),
                    visit_order: (i + 1) as u32,
                    recommended_time_to_visit: VisitTime::for_position(i, len),
                    time_to_next_spot: minutes,
                    distance_to_next_spot: distance,
                    transportation_cost_to_next: cost,
                }
            })
            .collect()
    }
}

impl<C: Catalog, E: LegEstimator> ItineraryPlanner for TripPlanner<C, E> {
    fn build_trip_plan(&self, request: &TripRequest) -> Result<TripPlan> {
        let spots = self.resolve_spots(request)?;
        let mode = self.resolve_travel_mode(request)?;

        let trip_spots = self.build_trip_spots(&spots, mode);

        let tickets: Cost = trip_spots.iter().map(|s| s.spot.ticket_price).sum();
        let transportation: Cost = trip_spots
            .iter()
            .map(|s| s.transportation_cost_to_next)
            .sum();

        let visit_hours: f64 = trip_spots.iter().map(|s| s.spot.average_time_spent).sum();
        let travel_minutes: u32 = trip_spots.iter().map(|s| s.time_to_next_spot).sum();
        let total_duration = visit_hours + f64::from(travel_minutes) / 60.0;

        let plan = TripPlan {
            id: plan_id(request),
            city_id: request.city_id.clone(),
            spots: trip_spots,
            total_cost: TripCost::new(tickets, transportation),
            total_duration,
            selected_travel_mode: mode.clone(),
        };

        info!(
            "Planned trip {} with {} spots by {}: total {} over {:.2} hours",
            plan.id,
            plan.spots.len(),
            mode.name,
            plan.total_cost.total,
            plan.total_duration
        );

        Ok(plan)
    }

    fn generate_day_plans(&self, plan: &TripPlan, window: ItineraryWindow) -> Vec<DayPlan> {
        generate_day_plans_with(plan, window, &self.config)
    }
}

// ID derived from the request contents, stable across builds
fn plan_id(request: &TripRequest) -> String {
    let parts = std::iter::once(request.city_id.as_str())
        .chain(std::iter::once(request.travel_mode_id.as_str()))
        .chain(request.spot_ids.iter().map(String::as_str));
    format!("trip-{}-{:016x}", request.city_id, stable_hash(0, parts))
}

// Integration tests for splitting trip plans into days
mod common;

use common::create_test_planner;
use std::collections::HashMap;
use trip_planner::algorithms::day_plan::FREE_DAY_PLACEHOLDER;
use trip_planner::models::DayCosts;
use trip_planner::{
    generate_day_plans_with, itinerary_total, ItineraryPlanner, ItineraryWindow, PlannerConfig,
    TripPlan, TripRequest,
};

fn plan_for(spot_ids: &[&str]) -> TripPlan {
    create_test_planner()
        .build_trip_plan(&TripRequest::new("test-city", spot_ids.iter().copied(), "taxi"))
        .unwrap()
}

fn name_counts<'a>(names: impl Iterator<Item = &'a str>) -> HashMap<&'a str, usize> {
    let mut counts = HashMap::new();
    for name in names {
        *counts.entry(name).or_insert(0) += 1;
    }
    counts
}

#[test]
fn test_day_counts_match_window() {
    let planner = create_test_planner();
    for spot_ids in [&["a"][..], &["a", "b"][..], &["a", "b", "c", "d", "e"][..]] {
        let plan = plan_for(spot_ids);
        for window in ItineraryWindow::ALL {
            let days = planner.generate_day_plans(&plan, window);
            assert_eq!(days.len(), window.days());
            let numbers: Vec<usize> = days.iter().map(|d| d.day).collect();
            assert_eq!(numbers, (1..=window.days()).collect::<Vec<_>>());
        }
    }
}

#[test]
fn test_every_spot_is_scheduled_exactly_once() {
    let planner = create_test_planner();
    let plan = plan_for(&["a", "b", "c", "d", "e"]);
    let expected = name_counts(plan.spots.iter().map(|s| s.spot.name.as_str()));

    for window in ItineraryWindow::ALL {
        let days = planner.generate_day_plans(&plan, window);
        let scheduled = name_counts(
            days.iter()
                .flat_map(|d| d.spots.iter().map(String::as_str))
                .filter(|name| *name != FREE_DAY_PLACEHOLDER),
        );
        assert_eq!(scheduled, expected, "window {}", window);
    }
}

#[test]
fn test_round_robin_assignment() {
    let planner = create_test_planner();
    let plan = plan_for(&["a", "b", "c", "d", "e"]);
    let days = planner.generate_day_plans(&plan, ItineraryWindow::ThreeDay);

    assert_eq!(days[0].spots, vec!["Spot A", "Spot D"]);
    assert_eq!(days[1].spots, vec!["Spot B", "Spot E"]);
    assert_eq!(days[2].spots, vec!["Spot C"]);
}

#[test]
fn test_one_day_scenario() {
    // two spots with 500 in tickets and 100 in transport
    let mut plan = plan_for(&["a", "b"]);
    plan.total_cost.transportation = 100.0;
    plan.total_cost.total = plan.total_cost.tickets + 100.0;

    let days = create_test_planner().generate_day_plans(&plan, ItineraryWindow::OneDay);

    assert_eq!(
        days[0].costs,
        DayCosts {
            transport: 100.0,
            food: 800.0,
            accommodation: 0.0,
            activities: 500.0,
            total: 1400.0,
        }
    );
}

#[test]
fn test_seven_days_with_two_spots() {
    let plan = plan_for(&["a", "b"]);
    let days = create_test_planner().generate_day_plans(&plan, ItineraryWindow::SevenDay);

    let free_days: Vec<_> = days
        .iter()
        .filter(|d| d.spots == vec![FREE_DAY_PLACEHOLDER])
        .collect();
    assert_eq!(free_days.len(), 5);
    assert!(free_days.iter().all(|d| d.costs.activities == 500.0));

    // 500 / 7 for the single spot on day 2, 50 / 7 transport per day
    assert_eq!(days[1].costs.activities, 71.0);
    assert_eq!(days[0].costs.transport, 7.0);
    assert_eq!(days[0].accommodation.as_deref(), Some("Recommended accommodation"));
    assert_eq!(days[6].accommodation, None);
}

#[test]
fn test_day_totals_sum_rounded_components() {
    let plan = plan_for(&["b", "c", "d"]);
    let days = create_test_planner().generate_day_plans(&plan, ItineraryWindow::ThreeDay);

    for day in &days {
        let c = day.costs;
        assert_eq!(c.total, c.transport + c.food + c.accommodation + c.activities);
        for component in [c.transport, c.food, c.accommodation, c.activities] {
            assert_eq!(component, component.round());
        }
    }
    assert_eq!(
        itinerary_total(&days),
        days.iter().map(|d| d.costs.total).sum::<f64>()
    );
}

#[test]
fn test_custom_rates() {
    let config = PlannerConfig::from_json(
        r#"{ "seven_day": {
            "food": 2000,
            "accommodation": 3000,
            "free_day_activities": 0,
            "accommodation_label": ""
        } }"#,
    )
    .unwrap();
    let plan = plan_for(&["a"]);
    let days = generate_day_plans_with(&plan, ItineraryWindow::SevenDay, &config);

    assert_eq!(days[0].costs.food, 2000.0);
    assert_eq!(days[3].costs.accommodation, 3000.0);
    assert_eq!(days[3].costs.activities, 0.0);
    assert_eq!(days[3].accommodation, None);
}

#[test]
fn test_partial_rates_keep_window_defaults() {
    let plan = plan_for(&["a"]);
    let default_days =
        create_test_planner().generate_day_plans(&plan, ItineraryWindow::SevenDay);

    for json in [
        r#"{ "seven_day": { "food": 2000 } }"#,
        r#"{ "seven_day": { "food": 2000, "accommodation": 2200 } }"#,
    ] {
        let config = PlannerConfig::from_json(json).unwrap();
        let days = generate_day_plans_with(&plan, ItineraryWindow::SevenDay, &config);

        assert_eq!(days[3].spots, vec![FREE_DAY_PLACEHOLDER]);
        assert_eq!(days[3].costs.activities, 500.0);
        assert_eq!(days[3].costs.food, 2000.0);
        assert_eq!(days[3].accommodation, default_days[3].accommodation);
        assert_eq!(days[3].accommodation.as_deref(), Some("Recommended accommodation"));
    }
}

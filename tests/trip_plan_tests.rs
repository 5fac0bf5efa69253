// Integration tests for building trip plans
mod common;

use common::create_test_planner;
use trip_planner::models::VisitTime;
use trip_planner::utils::distance::SeededLegDistance;
use trip_planner::{
    Catalog, ItineraryPlanner, NotFoundKind, PlannerError, StaticCatalog, TripPlanner,
    TripRequest,
};

#[test]
fn test_visit_order_follows_selection() {
    let planner = create_test_planner();
    let selection = ["d", "a", "e", "b"];

    let plan = planner
        .build_trip_plan(&TripRequest::new("test-city", selection, "taxi"))
        .unwrap();

    assert_eq!(plan.spots.len(), selection.len());
    for (i, (spot, id)) in plan.spots.iter().zip(selection).enumerate() {
        assert_eq!(spot.visit_order, (i + 1) as u32);
        assert_eq!(spot.spot.id, id);
    }

    let labels: Vec<VisitTime> = plan
        .spots
        .iter()
        .map(|s| s.recommended_time_to_visit)
        .collect();
    assert_eq!(
        labels,
        vec![
            VisitTime::Morning,
            VisitTime::Afternoon,
            VisitTime::Afternoon,
            VisitTime::Evening
        ]
    );
}

#[test]
fn test_walking_two_spot_scenario() {
    let planner = create_test_planner();
    let plan = planner
        .build_trip_plan(&TripRequest::new("test-city", ["a", "b"], "walking"))
        .unwrap();

    assert_eq!(plan.total_cost.tickets, 500.0);
    assert_eq!(plan.total_cost.transportation, 0.0);
    assert!((plan.total_duration - 3.4).abs() < 1e-9);
    assert_eq!(plan.duration_label(), "3 hrs 24 mins");
}

#[test]
fn test_totals_are_exact_sums() {
    let planner = create_test_planner();
    let plan = planner
        .build_trip_plan(&TripRequest::new("test-city", ["a", "b", "c", "d", "e"], "taxi"))
        .unwrap();

    // four legs of 2 km at 25/km, 4 minutes each at 30 km/h
    assert_eq!(plan.total_cost.tickets, 680.0);
    assert_eq!(plan.total_cost.transportation, 200.0);
    assert_eq!(
        plan.total_cost.total,
        plan.total_cost.tickets + plan.total_cost.transportation
    );
    assert!((plan.total_duration - (8.0 + 16.0 / 60.0)).abs() < 1e-9);
    assert_eq!(plan.total_distance(), 8.0);

    let last = plan.spots.last().unwrap();
    assert_eq!(last.time_to_next_spot, 0);
    assert_eq!(last.distance_to_next_spot, 0.0);
    assert_eq!(last.transportation_cost_to_next, 0.0);
}

#[test]
fn test_trip_total_excludes_food_and_lodging() {
    // Trip totals only cover tickets and transport; day plans add the rest
    let planner = create_test_planner();
    let plan = planner
        .build_trip_plan(&TripRequest::new("test-city", ["b", "c"], "taxi"))
        .unwrap();
    let days = planner.generate_day_plans(&plan, trip_planner::ItineraryWindow::OneDay);

    assert_eq!(plan.total_cost.total, 670.0);
    assert_eq!(days[0].costs.total, 670.0 + 800.0);
}

#[test]
fn test_errors_leave_no_plan() {
    let planner = create_test_planner();

    let empty =
        planner.build_trip_plan(&TripRequest::new("test-city", Vec::<String>::new(), "taxi"));
    match empty {
        Err(err @ PlannerError::Validation { .. }) => {
            assert_eq!(
                err.user_message(),
                "Please select at least one tourist spot to plan your trip."
            );
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    let unknown_mode = planner.build_trip_plan(&TripRequest::new("test-city", ["a"], "ferry"));
    assert!(matches!(
        unknown_mode,
        Err(PlannerError::NotFound { kind: NotFoundKind::TravelMode, .. })
    ));
}

#[test]
fn test_spot_from_other_city_is_not_found() {
    let planner = TripPlanner::new(StaticCatalog::bundled().unwrap());
    let result = planner.build_trip_plan(&TripRequest::new(
        "jaipur",
        ["jaipur-amber-fort", "delhi-red-fort"],
        "auto",
    ));

    assert!(matches!(
        result,
        Err(PlannerError::NotFound { kind: NotFoundKind::Spot, ref id }) if id == "delhi-red-fort"
    ));
}

#[test]
fn test_bundled_catalog_geodesic_plan() {
    let catalog = StaticCatalog::bundled().unwrap();
    let spot_ids: Vec<String> = catalog
        .spots_for_city("delhi")
        .iter()
        .map(|s| s.id.clone())
        .collect();
    let planner = TripPlanner::new(catalog);

    let plan = planner
        .build_trip_plan(&TripRequest::new("delhi", spot_ids.clone(), "auto"))
        .unwrap();

    println!("Planned {} spots, {}", plan.spots.len(), plan.duration_label());
    assert_eq!(plan.spots.len(), spot_ids.len());
    for leg in &plan.spots[..plan.spots.len() - 1] {
        assert!(leg.distance_to_next_spot > 0.0);
        assert_eq!(
            leg.transportation_cost_to_next,
            (leg.distance_to_next_spot * 15.0).round()
        );
    }
}

#[test]
fn test_seeded_estimator_is_repeatable() {
    let catalog = StaticCatalog::bundled().unwrap();
    let planner = TripPlanner::new(catalog).with_estimator(SeededLegDistance::new(42, 1.0, 10.0));
    let request = TripRequest::new(
        "mumbai",
        ["mumbai-gateway-of-india", "mumbai-marine-drive", "mumbai-juhu-beach"],
        "taxi",
    );

    let first = planner.build_trip_plan(&request).unwrap();
    let second = planner.build_trip_plan(&request).unwrap();

    assert_eq!(first, second);
    for leg in &first.spots[..2] {
        assert!((1.0..=10.0).contains(&leg.distance_to_next_spot));
    }
}

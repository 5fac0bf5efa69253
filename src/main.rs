use log::info;
use trip_planner::utils::format::{format_duration, format_rupees};
use trip_planner::{
    itinerary_total, Catalog, ItineraryPlanner, ItineraryWindow, ReviewLedger, StaticCatalog,
    TripPlanner, TripRequest,
};

fn main() {
    env_logger::init();

    let city_id = "jaipur";
    let travel_mode_id = "auto";

    // load the bundled catalog
    let catalog = match StaticCatalog::bundled() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error loading catalog: {}", e);
            return;
        }
    };

    // select every spot of the city in display order
    let spot_ids: Vec<String> = catalog
        .spots_for_city(city_id)
        .iter()
        .map(|spot| spot.id.clone())
        .collect();
    let first_spot = catalog.spots_for_city(city_id).first().map(|s| (*s).clone());

    let planner = TripPlanner::new(catalog);
    let request = TripRequest::new(city_id, spot_ids, travel_mode_id);

    let plan = match planner.build_trip_plan(&request) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Could not plan trip: {}", e.user_message());
            return;
        }
    };
    info!("Trip plan {} ready", plan.id);

    println!("\nTrip through {} by {}:", city_id, plan.selected_travel_mode.name);
    for spot in &plan.spots {
        println!(
            "  {}. {} ({}) - {}",
            spot.visit_order,
            spot.spot.name,
            spot.recommended_time_to_visit,
            spot.spot.price_label()
        );
        if !spot.open_at_recommended_time() {
            println!(
                "     closed at {}, open {} - {}",
                spot.recommended_time_to_visit.starts_at(),
                spot.spot.opening_time,
                spot.spot.closing_time
            );
        }
        if spot.distance_to_next_spot > 0.0 {
            println!(
                "     -> {} mins, {} km, {}",
                spot.time_to_next_spot,
                spot.distance_to_next_spot,
                format_rupees(spot.transportation_cost_to_next)
            );
        }
    }
    println!(
        "Tickets: {}, transportation: {}, total: {}, duration: {}",
        format_rupees(plan.total_cost.tickets),
        format_rupees(plan.total_cost.transportation),
        format_rupees(plan.total_cost.total),
        format_duration(plan.total_duration)
    );

    for window in ItineraryWindow::ALL {
        let days = planner.generate_day_plans(&plan, window);
        println!("\n{} itinerary ({}):", window, format_rupees(itinerary_total(&days)));
        for day in &days {
            println!(
                "  Day {}: {} | {}",
                day.day,
                day.spots.join(", "),
                format_rupees(day.costs.total)
            );
        }
    }

    // leave a review for the first stop
    if let Some(spot) = first_spot {
        let mut ledger = ReviewLedger::for_spot(&spot);
        match ledger.submit_review(5, "Worth every minute of the climb") {
            Ok(review) => println!(
                "\nReview {} added, {} reviews for {}",
                review.id,
                ledger.len(),
                spot.name
            ),
            Err(e) => eprintln!("Review rejected: {}", e.user_message()),
        }
    }
}

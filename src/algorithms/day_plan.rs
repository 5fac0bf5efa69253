// Splits a trip plan across the days of an itinerary window

use log::debug;

use crate::config::{DayRates, PlannerConfig};
use crate::models::{Cost, DayCosts, DayPlan, ItineraryWindow, Meals, TripPlan};

/// Placeholder listed on days without any assigned spot
pub const FREE_DAY_PLACEHOLDER: &str = "Free exploration day";

const DAILY_TIPS: [&str; 3] = [
    "Start early to avoid crowds at popular spots",
    "Carry water and stay hydrated",
    "Wear comfortable walking shoes",
];

const FIRST_DAY_TIP: &str = "Consider a local guide for deeper cultural insights";

/// Splits a trip plan into day plans using the default rates
pub fn generate_day_plans(plan: &TripPlan, window: ItineraryWindow) -> Vec<DayPlan> {
    generate_day_plans_with(plan, window, &PlannerConfig::default())
}

/// Splits a trip plan into day plans.
///
/// Spot `i` goes to day `(i mod W) + 1`. The split is round-robin, not
/// geographic, so early spots can land on later days.
pub fn generate_day_plans_with(
    plan: &TripPlan,
    window: ItineraryWindow,
    config: &PlannerConfig,
) -> Vec<DayPlan> {
    let days = window.days();
    let rates = config.rates_for(window);

    let mut buckets: Vec<Vec<String>> = vec![Vec::new(); days];
    for (i, spot) in plan.spots.iter().enumerate() {
        buckets[i % days].push(spot.spot.name.clone());
    }

    buckets
        .into_iter()
        .enumerate()
        .map(|(i, spots)| {
            let day = i + 1;
            let costs = day_costs(plan, window, rates, day, spots.len());
            debug!("{} plan day {}: {} spots, total {}", window, day, spots.len(), costs.total);

            DayPlan {
                day,
                spots: if spots.is_empty() {
                    vec![FREE_DAY_PLACEHOLDER.to_string()]
                } else {
                    spots
                },
                meals: meals_for(window, day),
                accommodation: if has_night(window, day) {
                    rates.accommodation_label.clone()
                } else {
                    None
                },
                costs,
                travel_tips: travel_tips_for(day),
            }
        })
        .collect()
}

/// Total cost across all days of an itinerary
pub fn itinerary_total(day_plans: &[DayPlan]) -> Cost {
    day_plans.iter().map(|day| day.costs.total).sum()
}

// Every day but the last one ends with a night of lodging
fn has_night(window: ItineraryWindow, day: usize) -> bool {
    day < window.days()
}

fn day_costs(
    plan: &TripPlan,
    window: ItineraryWindow,
    rates: &DayRates,
    day: usize,
    spot_count: usize,
) -> DayCosts {
    let days = window.days() as f64;
    let tickets = plan.total_cost.tickets;

    let transport = (plan.total_cost.transportation / days).round();
    let food = rates.food.round();
    let accommodation = if has_night(window, day) {
        rates.accommodation.round()
    } else {
        0.0
    };

    let activities = match (window, rates.free_day_activities) {
        // A single day covers every ticket
        (ItineraryWindow::OneDay, _) => tickets.round(),
        (_, Some(fallback)) if spot_count == 0 => fallback.round(),
        _ => (tickets / days * spot_count as f64).round(),
    };

    DayCosts::new(transport, food, accommodation, activities)
}

fn meals_for(window: ItineraryWindow, day: usize) -> Meals {
    match window {
        ItineraryWindow::OneDay => Meals {
            breakfast: "Local breakfast at popular café".to_string(),
            lunch: "Quick lunch near attractions".to_string(),
            dinner: "Traditional dinner experience".to_string(),
        },
        ItineraryWindow::ThreeDay => Meals {
            breakfast: format!("Day {} breakfast at recommended restaurant", day),
            lunch: format!("Day {} local cuisine lunch", day),
            dinner: format!("Day {} authentic dinner experience", day),
        },
        ItineraryWindow::SevenDay => Meals {
            breakfast: format!("Day {} breakfast option", day),
            lunch: format!("Day {} recommended lunch", day),
            dinner: format!("Day {} dinner experience", day),
        },
    }
}

fn travel_tips_for(day: usize) -> Vec<String> {
    let mut tips: Vec<String> = DAILY_TIPS.iter().map(|tip| tip.to_string()).collect();
    if day == 1 {
        tips.push(FIRST_DAY_TIP.to_string());
    }
    tips
}

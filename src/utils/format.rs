// Formatting helpers for durations and amounts

use crate::models::{Cost, Time};

/// Formats a duration in hours as "{h} hrs {m} mins"
pub fn format_duration(hours: Time) -> String {
    let total_minutes = (hours.max(0.0) * 60.0).round() as u64;
    format!("{} hrs {} mins", total_minutes / 60, total_minutes % 60)
}

/// Formats an amount in rupees, e.g. "₹1400"
pub fn format_rupees(amount: Cost) -> String {
    format!("₹{}", amount.round())
}

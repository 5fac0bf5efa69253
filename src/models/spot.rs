// Tourist spot model representing attractions that can be added to a trip

use crate::models::{CityId, Cost, Location, Review, SpotId, Time};
use jiff::civil;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed set of attraction categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpotCategory {
    Historical,
    Religious,
    Nature,
    Beach,
    Museum,
    Adventure,
    Cultural,
    Shopping,
    Food,
    Entertainment,
}

/// Background/text color pair used when a category is shown as a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    pub background: &'static str,
    pub text: &'static str,
}

// Single source of truth for category badge colors
const BADGE_STYLES: [(SpotCategory, BadgeStyle); 10] = [
    (SpotCategory::Historical, BadgeStyle { background: "amber-100", text: "amber-800" }),
    (SpotCategory::Religious, BadgeStyle { background: "purple-100", text: "purple-800" }),
    (SpotCategory::Nature, BadgeStyle { background: "green-100", text: "green-800" }),
    (SpotCategory::Beach, BadgeStyle { background: "blue-100", text: "blue-800" }),
    (SpotCategory::Museum, BadgeStyle { background: "indigo-100", text: "indigo-800" }),
    (SpotCategory::Adventure, BadgeStyle { background: "red-100", text: "red-800" }),
    (SpotCategory::Cultural, BadgeStyle { background: "pink-100", text: "pink-800" }),
    (SpotCategory::Shopping, BadgeStyle { background: "violet-100", text: "violet-800" }),
    (SpotCategory::Food, BadgeStyle { background: "orange-100", text: "orange-800" }),
    (SpotCategory::Entertainment, BadgeStyle { background: "gray-100", text: "gray-800" }),
];

impl SpotCategory {
    /// All categories in declaration order
    pub const ALL: [SpotCategory; 10] = [
        SpotCategory::Historical,
        SpotCategory::Religious,
        SpotCategory::Nature,
        SpotCategory::Beach,
        SpotCategory::Museum,
        SpotCategory::Adventure,
        SpotCategory::Cultural,
        SpotCategory::Shopping,
        SpotCategory::Food,
        SpotCategory::Entertainment,
    ];

    /// Badge colors for this category
    pub fn badge(&self) -> BadgeStyle {
        BADGE_STYLES
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, style)| *style)
            .unwrap_or(BadgeStyle {
                background: "gray-100",
                text: "gray-800",
            })
    }
}

impl fmt::Display for SpotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Represents an attraction in a city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouristSpot {
    /// Unique identifier for the spot
    pub id: SpotId,

    /// City this spot belongs to
    pub city_id: CityId,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub image_url: String,

    /// Entry ticket price per person
    pub ticket_price: Cost,

    /// Local opening time
    pub opening_time: civil::Time,

    /// Local closing time
    pub closing_time: civil::Time,

    /// Average visit duration in hours
    pub average_time_spent: Time,

    /// Rating between 0 and 5
    pub rating: f64,

    pub category: SpotCategory,

    pub location: Location,

    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl TouristSpot {
    /// Whether entry is free
    pub fn is_free(&self) -> bool {
        self.ticket_price == 0.0
    }

    /// Price label as shown next to the spot
    pub fn price_label(&self) -> String {
        if self.is_free() {
            "Free Entry".to_string()
        } else {
            format!("₹{} per person", self.ticket_price)
        }
    }

    /// Checks if the spot is open at the given local time.
    /// Closing times earlier than opening times wrap past midnight.
    pub fn is_open_at(&self, time: civil::Time) -> bool {
        if self.opening_time <= self.closing_time {
            time >= self.opening_time && time < self.closing_time
        } else {
            time >= self.opening_time || time < self.closing_time
        }
    }
}

// City model for the destinations a trip can be planned in

use crate::models::CityId;
use serde::{Deserialize, Serialize};

/// A city that groups tourist spots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// Unique identifier for the city
    pub id: CityId,

    pub name: String,

    /// State the city belongs to
    pub state: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub image_url: String,

    /// Popularity score between 0 and 5
    #[serde(default)]
    pub popularity: f64,
}

impl City {
    /// Creates a new city with empty description and image
    pub fn new<S: Into<String>>(id: S, name: S, state: S) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            state: state.into(),
            description: String::new(),
            image_url: String::new(),
            popularity: 0.0,
        }
    }
}

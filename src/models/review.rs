// Review model for user feedback on a tourist spot

use crate::models::ReviewId;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A user review of a tourist spot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,

    pub user_id: String,

    pub user_name: String,

    /// Rating from 1 to 5
    pub rating: u8,

    pub comment: String,

    /// When the review was submitted (UTC, ISO-8601 when serialized)
    pub date: Timestamp,
}

/// Identity attached to submitted reviews
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reviewer {
    pub user_id: String,
    pub user_name: String,
}

impl Reviewer {
    pub fn new<S: Into<String>>(user_id: S, user_name: S) -> Self {
        Self {
            user_id: user_id.into(),
            user_name: user_name.into(),
        }
    }
}

impl Default for Reviewer {
    fn default() -> Self {
        Self::new("user-1", "Guest User")
    }
}

// In-memory review ledger for a single tourist spot

use jiff::Timestamp;
use log::{info, warn};

use crate::error::{PlannerError, Result};
use crate::models::{Review, Reviewer, SpotId, TouristSpot};

/// Reviews of one spot, most recent first. Reviews are never updated or
/// removed once submitted.
#[derive(Debug, Clone)]
pub struct ReviewLedger {
    spot_id: SpotId,
    reviewer: Reviewer,
    reviews: Vec<Review>,
    sequence: u64,
}

impl ReviewLedger {
    /// Creates an empty ledger for the given spot
    pub fn new(spot_id: impl Into<SpotId>) -> Self {
        Self {
            spot_id: spot_id.into(),
            reviewer: Reviewer::default(),
            reviews: Vec::new(),
            sequence: 0,
        }
    }

    /// Creates a ledger seeded with the spot's existing reviews
    pub fn for_spot(spot: &TouristSpot) -> Self {
        Self {
            reviews: spot.reviews.clone(),
            ..Self::new(spot.id.clone())
        }
    }

    /// Sets who new reviews are attributed to
    pub fn with_reviewer(mut self, reviewer: Reviewer) -> Self {
        self.reviewer = reviewer;
        self
    }

    pub fn spot_id(&self) -> &str {
        &self.spot_id
    }

    /// Reviews, most recent first
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Mean rating of all reviews, `None` without reviews
    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let sum: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        Some(f64::from(sum) / self.reviews.len() as f64)
    }

    /// Submits a review stamped with the current time
    pub fn submit_review(&mut self, rating: u8, comment: &str) -> Result<Review> {
        self.submit_review_at(rating, comment, Timestamp::now())
    }

    /// Submits a review with an explicit timestamp.
    ///
    /// The ledger is left untouched when validation fails.
    pub fn submit_review_at(&mut self, rating: u8, comment: &str, at: Timestamp) -> Result<Review> {
        if rating == 0 {
            warn!("Rejected review for {} without rating", self.spot_id);
            return Err(PlannerError::invalid_input("rating")
                .with_reason("Please select a rating before submitting your review."));
        }
        if rating > 5 {
            warn!("Rejected review for {} with rating {}", self.spot_id, rating);
            return Err(PlannerError::invalid_input("rating")
                .with_reason("Rating must be between 1 and 5 stars."));
        }
        if comment.trim().is_empty() {
            warn!("Rejected review for {} without comment", self.spot_id);
            return Err(PlannerError::invalid_input("comment")
                .with_reason("Please enter your review comment."));
        }

        self.sequence += 1;
        let review = Review {
            id: format!("review-{}-{}", at.as_millisecond(), self.sequence),
            user_id: self.reviewer.user_id.clone(),
            user_name: self.reviewer.user_name.clone(),
            rating,
            comment: comment.to_string(),
            date: at,
        };

        self.reviews.insert(0, review.clone());
        info!(
            "Review {} submitted for {} ({} stars)",
            review.id, self.spot_id, rating
        );

        Ok(review)
    }
}

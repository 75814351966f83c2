//! Review and rating records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A review as returned by `/api/frontend/data/reviews`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Backend-assigned review id.
    pub id: i64,
    /// Reviewer username, when known.
    #[serde(default)]
    pub username: Option<String>,
    /// Reviewer first name, when known.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Star rating, 1 through 5.
    #[serde(default)]
    pub rating: u8,
    /// Free-form review text.
    #[serde(default)]
    pub comment: String,
    /// Raw timestamp in whatever shape the backend sent.
    #[serde(default)]
    pub timestamp: Value,
}

impl Review {
    /// Best available display name for the reviewer.
    pub fn reviewer_name(&self) -> String {
        super::display_name(&self.username, &self.first_name)
    }
}

/// Aggregate rating as returned by `/api/frontend/data/average_rating`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RatingSummary {
    /// Mean star rating across all reviews.
    #[serde(default)]
    pub average_rating: f64,
    /// Total number of reviews.
    #[serde(default)]
    pub total_reviews: u64,
}

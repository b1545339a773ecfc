//! Star ratings per restaurant.
//!
//! Ratings are validated on construction. Out-of-range input fails fast
//! instead of being clamped.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

/// A one-to-five star rating.
///
/// # Examples
/// ```
/// use gurmao_core::{RatingError, StarRating};
///
/// assert_eq!(StarRating::new(5).map(StarRating::stars), Ok(5));
/// assert_eq!(StarRating::new(0), Err(RatingError::OutOfRange { stars: 0 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct StarRating(u8);

/// Errors returned by [`StarRating::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    /// The rating was outside `1..=5`.
    #[error("rating must be between 1 and 5, got {stars}")]
    OutOfRange {
        /// Rejected star count.
        stars: u8,
    },
}

impl StarRating {
    /// Validates and constructs a [`StarRating`].
    pub const fn new(stars: u8) -> Result<Self, RatingError> {
        if stars < 1 || stars > 5 {
            return Err(RatingError::OutOfRange { stars });
        }
        Ok(Self(stars))
    }

    /// Number of stars.
    pub const fn stars(self) -> u8 {
        self.0
    }
}

/// Count and mean of the ratings recorded for one restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RatingSummary {
    /// Mean stars, rounded to one decimal place; `0.0` when unrated.
    pub average: f32,
    /// Number of ratings.
    pub count: usize,
}

/// Ratings recorded per restaurant id.
///
/// # Examples
/// ```
/// use gurmao_core::{RatingLedger, StarRating};
///
/// # fn main() -> Result<(), gurmao_core::RatingError> {
/// let mut ledger = RatingLedger::default();
/// ledger.rate("noir-table", StarRating::new(5)?);
/// let summary = ledger.rate("noir-table", StarRating::new(4)?);
/// assert_eq!(summary.count, 2);
/// assert_eq!(summary.average, 4.5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingLedger {
    ratings: HashMap<String, Vec<StarRating>>,
}

impl RatingLedger {
    /// Record a rating and return the updated summary.
    pub fn rate(&mut self, id: &str, rating: StarRating) -> RatingSummary {
        self.ratings.entry(id.to_owned()).or_default().push(rating);
        self.summary(id)
    }

    /// Summary for `id`; zeroed when it has no ratings.
    pub fn summary(&self, id: &str) -> RatingSummary {
        let Some(ratings) = self.ratings.get(id).filter(|r| !r.is_empty()) else {
            return RatingSummary::default();
        };
        let total: u32 = ratings.iter().map(|r| u32::from(r.stars())).sum();
        let count = ratings.len();
        let average = ((total as f32 / count as f32) * 10.0).round() / 10.0;
        RatingSummary { average, count }
    }

    /// Mean stars for `id`, rounded to one decimal.
    pub fn average(&self, id: &str) -> f32 {
        self.summary(id).average
    }

    /// Number of ratings for `id`.
    pub fn count(&self, id: &str) -> usize {
        self.ratings.get(id).map_or(0, Vec::len)
    }
}

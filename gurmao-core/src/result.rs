//! Scored results and confidence banding.

use serde::Serialize;

use crate::Restaurant;

/// Maximum number of match reasons kept per result.
pub const MAX_MATCH_REASONS: usize = 3;

/// A restaurant annotated with its score for one query.
///
/// Only the first [`MAX_MATCH_REASONS`] reasons are kept; the order in which
/// the scorer records them decides which survive.
///
/// # Examples
/// ```
/// use gurmao_core::{PriceLevel, Restaurant, ScoredResult, Vibe};
///
/// # fn main() -> Result<(), gurmao_core::PriceLevelError> {
/// let restaurant = Restaurant::new("a", "A", Vibe::Calm, "Brno", PriceLevel::new(2)?);
/// let reasons = vec!["1".to_string(), "2".into(), "3".into(), "4".into()];
/// let result = ScoredResult::new(restaurant, 42, reasons);
/// assert_eq!(result.score(), 42);
/// assert_eq!(result.match_reasons().len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult {
    #[serde(flatten)]
    restaurant: Restaurant,
    score: i32,
    match_reasons: Vec<String>,
}

impl ScoredResult {
    /// Construct a result, truncating `reasons` to the first three.
    pub fn new(restaurant: Restaurant, score: i32, mut reasons: Vec<String>) -> Self {
        reasons.truncate(MAX_MATCH_REASONS);
        Self {
            restaurant,
            score,
            match_reasons: reasons,
        }
    }

    /// The scored restaurant.
    pub const fn restaurant(&self) -> &Restaurant {
        &self.restaurant
    }

    /// The rounded score. Negative when a city penalty outweighs every match.
    pub const fn score(&self) -> i32 {
        self.score
    }

    /// Human-readable reasons, at most three.
    pub fn match_reasons(&self) -> &[String] {
        &self.match_reasons
    }

    /// Confidence band for the score.
    pub const fn confidence(&self) -> ConfidenceTier {
        ConfidenceTier::from_score(self.score)
    }
}

/// Four ordinal bands of trust in a score.
///
/// Lower bounds are inclusive: 80 and up is [`High`](Self::High), 60 and up
/// [`Medium`](Self::Medium), 40 and up [`Low`](Self::Low), anything else
/// [`VeryLow`](Self::VeryLow).
///
/// # Examples
/// ```
/// use gurmao_core::ConfidenceTier;
///
/// assert_eq!(ConfidenceTier::from_score(80), ConfidenceTier::High);
/// assert_eq!(ConfidenceTier::from_score(79), ConfidenceTier::Medium);
/// assert_eq!(ConfidenceTier::from_score(-5), ConfidenceTier::VeryLow);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    /// Below 40.
    VeryLow,
    /// 40 to 59.
    Low,
    /// 60 to 79.
    Medium,
    /// 80 and above.
    High,
}

impl ConfidenceTier {
    /// Band a score. Total over `i32`.
    pub const fn from_score(score: i32) -> Self {
        if score >= 80 {
            Self::High
        } else if score >= 60 {
            Self::Medium
        } else if score >= 40 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    /// User-facing label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "Vysoká",
            Self::Medium => "Střední",
            Self::Low => "Nízká",
            Self::VeryLow => "Velmi nízká",
        }
    }

    /// Heart symbol shown next to the label.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::High => "💚",
            Self::Medium => "💛",
            Self::Low => "🧡",
            Self::VeryLow => "❤️",
        }
    }
}

impl std::fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PriceLevel, Vibe};
    use rstest::rstest;

    #[rstest]
    #[case(i32::MAX, ConfidenceTier::High)]
    #[case(80, ConfidenceTier::High)]
    #[case(79, ConfidenceTier::Medium)]
    #[case(60, ConfidenceTier::Medium)]
    #[case(59, ConfidenceTier::Low)]
    #[case(40, ConfidenceTier::Low)]
    #[case(39, ConfidenceTier::VeryLow)]
    #[case(0, ConfidenceTier::VeryLow)]
    #[case(i32::MIN, ConfidenceTier::VeryLow)]
    fn bands_scores_at_boundaries(#[case] score: i32, #[case] expected: ConfidenceTier) {
        assert_eq!(ConfidenceTier::from_score(score), expected);
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(ConfidenceTier::High > ConfidenceTier::Medium);
        assert!(ConfidenceTier::Low > ConfidenceTier::VeryLow);
    }

    #[test]
    fn keeps_reasons_in_recorded_order() {
        let restaurant = Restaurant::new(
            "a",
            "A",
            Vibe::Pure,
            "Praha",
            PriceLevel::new(1).expect("valid level"),
        );
        let reasons = ["first", "second", "third", "fourth"]
            .map(str::to_owned)
            .to_vec();
        let result = ScoredResult::new(restaurant, 10, reasons);
        assert_eq!(result.match_reasons(), ["first", "second", "third"]);
        assert_eq!(result.confidence(), ConfidenceTier::VeryLow);
    }

    #[test]
    fn serialises_flat_with_camel_case() {
        let restaurant = Restaurant::new(
            "a",
            "A",
            Vibe::Pure,
            "Praha",
            PriceLevel::new(1).expect("valid level"),
        );
        let value = serde_json::to_value(ScoredResult::new(restaurant, 5, Vec::new()))
            .expect("serialise");
        assert_eq!(value["id"], "a");
        assert_eq!(value["score"], 5);
        assert_eq!(value["priceLevel"], 1);
        assert!(value["matchReasons"].as_array().is_some_and(Vec::is_empty));
    }
}

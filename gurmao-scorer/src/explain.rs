//! Natural-language explanation of the top recommendation.

use std::fmt;

use gurmao_core::{Query, ScoredResult};
use serde::Serialize;

/// Text shown when there is nothing to recommend.
pub const NO_RESULTS_TEXT: &str = "Žádné doporučení nenalezeno. Zkus změnit filtry.";

/// Czech plural for "people" after a party size.
pub(crate) const fn people(size: u8) -> &'static str {
    if size == 2 { "lidi" } else { "lidí" }
}

/// Explanation attached to a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Explanation {
    /// Sentence describing why the top pick was chosen.
    Explained(String),
    /// The ranking was empty.
    NoResults,
}

impl Explanation {
    /// Display text for either outcome.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Explained(text) => text,
            Self::NoResults => NO_RESULTS_TEXT,
        }
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Explain the first entry of `ranked`, or report that there is none.
///
/// # Examples
///
/// ```rust
/// use gurmao_core::Query;
/// use gurmao_scorer::{Explanation, explain};
///
/// assert_eq!(explain(&Query::new(), &[]), Explanation::NoResults);
/// ```
#[must_use]
pub fn explain(query: &Query, ranked: &[ScoredResult]) -> Explanation {
    ranked.first().map_or(Explanation::NoResults, |top| {
        Explanation::Explained(explain_top(query, top))
    })
}

/// Compose the sentence for `top` from the query clauses that are set.
///
/// Clauses appear in a fixed order: mood, occasion, party size, then the
/// restaurant itself and, when any were recorded, its reasons.
#[must_use]
pub fn explain_top(query: &Query, top: &ScoredResult) -> String {
    let mut text = String::from("Na základě tvých preferencí ");
    if let Some(mood) = query.mood {
        text.push_str(&format!("(nálada: {mood}) "));
    }
    if let Some(occasion) = query.occasion {
        text.push_str(&format!("a příležitosti \"{occasion}\" "));
    }
    if let Some(size) = query.group_size {
        text.push_str(&format!("pro {size} {} ", people(size)));
    }
    let restaurant = top.restaurant();
    text.push_str(&format!(
        "ti doporučuji **{}** v {}. ",
        restaurant.name, restaurant.city
    ));
    if !top.match_reasons().is_empty() {
        text.push_str(&format!("Důvody: {}.", top.match_reasons().join(", ")));
    }
    text
}

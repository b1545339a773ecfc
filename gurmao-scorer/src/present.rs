//! Display-ready recommendation cards.
//!
//! Cards combine a scored result with its confidence band and the user's
//! saved state. A collection that cannot be read never blocks rendering:
//! the failure is logged and every card shows as unsaved.

use std::collections::BTreeSet;

use gurmao_core::{ConfidenceTier, Query, SavedCollection, ScoredResult};
use log::warn;
use serde::Serialize;

use crate::explain::{Explanation, explain};

/// One result as shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationCard {
    /// The scored restaurant.
    #[serde(flatten)]
    pub result: ScoredResult,
    /// Confidence band of the score.
    pub confidence: ConfidenceTier,
    /// Localised label for `confidence`.
    pub confidence_label: &'static str,
    /// Symbol for `confidence`.
    pub confidence_symbol: &'static str,
    /// Set on the first card only.
    pub is_top_pick: bool,
    /// Whether the restaurant is in the user's saved collection.
    pub is_saved: bool,
}

impl RecommendationCard {
    /// Build a card for `result`.
    #[must_use]
    pub fn new(result: ScoredResult, is_top_pick: bool, is_saved: bool) -> Self {
        let confidence = result.confidence();
        Self {
            result,
            confidence,
            confidence_label: confidence.label(),
            confidence_symbol: confidence.symbol(),
            is_top_pick,
            is_saved,
        }
    }
}

/// An explanation followed by one card per ranked restaurant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedRecommendations {
    /// Explanation of the top pick.
    pub explanation: Explanation,
    /// Cards in rank order.
    pub cards: Vec<RecommendationCard>,
}

impl RenderedRecommendations {
    /// The first card, if any.
    #[must_use]
    pub fn top_pick(&self) -> Option<&RecommendationCard> {
        self.cards.first()
    }
}

/// Turn a ranking into cards, marking saved restaurants from `saved`.
///
/// # Examples
///
/// ```rust
/// use gurmao_core::{Catalog, MemoryCollection, Query};
/// use gurmao_scorer::{NoJitter, present, rank};
///
/// let catalog = Catalog::builtin();
/// let query = Query::new().with_city("Ostrava");
/// let saved = MemoryCollection::with_ids(["la-calle"]);
/// let rendered = present(&query, rank(&catalog, &query, &mut NoJitter), Some(&saved));
/// let top = rendered.top_pick().expect("three restaurants ranked");
/// assert_eq!(top.result.restaurant().id, "la-calle");
/// assert!(top.is_top_pick && top.is_saved);
/// ```
#[must_use]
pub fn present(
    query: &Query,
    ranked: Vec<ScoredResult>,
    saved: Option<&dyn SavedCollection>,
) -> RenderedRecommendations {
    let explanation = explain(query, &ranked);
    let saved_ids = saved.map_or_else(BTreeSet::new, read_saved_ids);
    let cards = ranked
        .into_iter()
        .enumerate()
        .map(|(position, result)| {
            let is_saved = saved_ids.contains(&result.restaurant().id);
            RecommendationCard::new(result, position == 0, is_saved)
        })
        .collect();
    RenderedRecommendations { explanation, cards }
}

fn read_saved_ids(collection: &dyn SavedCollection) -> BTreeSet<String> {
    collection.saved_ids().unwrap_or_else(|err| {
        warn!("rendering every card as unsaved: {err}");
        BTreeSet::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gurmao_core::test_support::{UnavailableCollection, anniversary_restaurant, restaurant};
    use gurmao_core::{MemoryCollection, Vibe};
    use rstest::{fixture, rstest};

    #[fixture]
    fn ranked() -> Vec<ScoredResult> {
        vec![
            ScoredResult::new(anniversary_restaurant(), 85, vec!["Atmosféra sedí".into()]),
            ScoredResult::new(restaurant("b", Vibe::Calm, "Brno", 2), 41, Vec::new()),
        ]
    }

    #[rstest]
    fn only_first_card_is_top_pick(ranked: Vec<ScoredResult>) {
        let rendered = present(&Query::new(), ranked, None);
        let flags: Vec<_> = rendered.cards.iter().map(|c| c.is_top_pick).collect();
        assert_eq!(flags, [true, false]);
        assert_eq!(rendered.cards[0].confidence, ConfidenceTier::High);
        assert_eq!(rendered.cards[1].confidence_label, "Nízká");
    }

    #[rstest]
    fn saved_state_comes_from_collection(ranked: Vec<ScoredResult>) {
        let saved = MemoryCollection::with_ids(["b"]);
        let rendered = present(&Query::new(), ranked, Some(&saved));
        let flags: Vec<_> = rendered.cards.iter().map(|c| c.is_saved).collect();
        assert_eq!(flags, [false, true]);
    }

    #[rstest]
    fn unavailable_collection_renders_unsaved(ranked: Vec<ScoredResult>) {
        let rendered = present(&Query::new(), ranked, Some(&UnavailableCollection));
        assert_eq!(rendered.cards.len(), 2);
        assert!(rendered.cards.iter().all(|c| !c.is_saved));
        assert!(matches!(rendered.explanation, Explanation::Explained(_)));
    }

    #[rstest]
    fn empty_ranking_renders_no_results() {
        let rendered = present(&Query::new(), Vec::new(), None);
        assert_eq!(rendered.explanation, Explanation::NoResults);
        assert!(rendered.top_pick().is_none());
    }

    #[rstest]
    fn card_serialises_flat(ranked: Vec<ScoredResult>) {
        let rendered = present(&Query::new(), ranked, None);
        let value = serde_json::to_value(&rendered.cards[0]).expect("serialise card");
        assert_eq!(value["id"], "a");
        assert_eq!(value["score"], 85);
        assert_eq!(value["confidence"], "high");
        assert_eq!(value["confidenceSymbol"], "💚");
        assert_eq!(value["isTopPick"], true);
    }
}

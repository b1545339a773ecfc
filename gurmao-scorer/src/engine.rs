//! Recommendation context object.

use gurmao_core::{CatalogStore, Query, SavedCollection, ScoredResult};

use crate::jitter::Jitter;
use crate::present::{RenderedRecommendations, present};
use crate::scoring::rank;

/// Catalog-bound recommender.
///
/// The engine owns its catalog and never mutates it, so a single instance
/// can serve concurrent callers as long as each brings its own [`Jitter`].
///
/// # Examples
///
/// ```rust
/// use gurmao_core::{Catalog, Mood, Query};
/// use gurmao_scorer::{Explanation, RecommendationEngine, SeededJitter};
///
/// let engine = RecommendationEngine::new(Catalog::builtin());
/// let query = Query::new().with_mood(Mood::Oslava).with_group_size(6);
/// let rendered = engine.render_recommendations(&query, &mut SeededJitter::new(1), None);
/// assert_eq!(rendered.cards.len(), 3);
/// assert!(matches!(rendered.explanation, Explanation::Explained(_)));
/// ```
#[derive(Debug, Clone)]
pub struct RecommendationEngine<S> {
    store: S,
}

impl<S: CatalogStore> RecommendationEngine<S> {
    /// Bind an engine to `store`.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying catalog.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Score and rank every restaurant for `query`.
    #[must_use]
    pub fn recommend(&self, query: &Query, jitter: &mut dyn Jitter) -> Vec<ScoredResult> {
        rank(&self.store, query, jitter)
    }

    /// Rank, explain and build cards in one step.
    #[must_use]
    pub fn render_recommendations(
        &self,
        query: &Query,
        jitter: &mut dyn Jitter,
        saved: Option<&dyn SavedCollection>,
    ) -> RenderedRecommendations {
        present(query, self.recommend(query, jitter), saved)
    }
}

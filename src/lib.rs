//! Facade crate for the Gurmao restaurant recommendation engine.
//!
//! This crate re-exports the core domain types and the scoring engine, and
//! exposes the JSON-backed saved collection behind a feature flag.
//!
//! # Examples
//!
//! ```rust
//! use gurmao_engine::{Catalog, Explanation, NoJitter, Query, RecommendationEngine};
//!
//! let engine = RecommendationEngine::new(Catalog::builtin());
//! let rendered = engine.render_recommendations(&Query::new(), &mut NoJitter, None);
//! assert_eq!(rendered.cards.len(), 3);
//! assert!(matches!(rendered.explanation, Explanation::Explained(_)));
//! ```

#![forbid(unsafe_code)]

pub use gurmao_core::{
    Catalog, CatalogError, CatalogStore, CollectionError, ConfidenceTier, GroupSizes,
    IntentParseError, MAX_MATCH_REASONS, MemoryCollection, Mood, MoodProfile, Occasion,
    OccasionProfile, PriceLevel, PriceLevelError, Query, RatingError, RatingLedger, RatingSummary,
    RawQuery, Restaurant, SavedCollection, ScoredResult, StarRating, Vibe,
};
pub use gurmao_scorer::{
    Explanation, FixedJitter, Jitter, JitterStrategy, NO_RESULTS_TEXT, NoJitter,
    RecommendationCard, RecommendationEngine, RenderedRecommendations, SeededJitter, SystemJitter,
    explain, explain_top, present, rank, score,
};

#[cfg(feature = "store-json")]
pub use gurmao_core::{DEFAULT_SAVED_FILE, JsonFileCollection};

//! Recommendation scoring for the Gurmao restaurant catalog.
//!
//! Given a [`Query`](gurmao_core::Query) and a catalog implementing
//! [`CatalogStore`](gurmao_core::CatalogStore), the crate:
//! - scores each restaurant with an additive heuristic over mood, occasion,
//!   party size, city, price and free text, plus a small injected
//!   [`Jitter`] bonus;
//! - ranks the results best first, keeping catalog order for ties;
//! - explains the top pick in one Czech sentence;
//! - builds display cards carrying the confidence band and saved state.
//!
//! Scoring is a pure function of its inputs once the jitter source is fixed.
//! Pass [`NoJitter`] or a [`SeededJitter`] for reproducible rankings.
//!
//! # Examples
//!
//! ```rust
//! use gurmao_core::{Catalog, Mood, Occasion, PriceLevel, Query};
//! use gurmao_scorer::{NoJitter, RecommendationEngine};
//!
//! # fn main() -> Result<(), gurmao_core::PriceLevelError> {
//! let engine = RecommendationEngine::new(Catalog::builtin());
//! let query = Query::new()
//!     .with_mood(Mood::Romantika)
//!     .with_occasion(Occasion::Vyroci)
//!     .with_group_size(2)
//!     .with_city("Praha")
//!     .with_price_level(PriceLevel::new(4)?);
//! let ranked = engine.recommend(&query, &mut NoJitter);
//! assert_eq!(ranked.first().map(|r| r.restaurant().id.as_str()), Some("noir-table"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod engine;
mod explain;
mod jitter;
mod present;
mod scoring;

pub use engine::RecommendationEngine;
pub use explain::{Explanation, NO_RESULTS_TEXT, explain, explain_top};
pub use jitter::{
    FixedJitter, Jitter, JitterStrategy, MAX_JITTER, NoJitter, SeededJitter, SystemJitter,
};
pub use present::{RecommendationCard, RenderedRecommendations, present};
pub use scoring::{
    CITY_MATCH_POINTS, CITY_MISMATCH_PENALTY, DESCRIPTION_POINTS, GROUP_SIZE_POINTS,
    KEYWORD_POINTS, MOOD_ATMOSPHERE_POINTS, MOOD_GROUP_POINTS, MOOD_VIBE_POINTS,
    OCCASION_LISTED_POINTS, OCCASION_VIBE_POINTS, PRICE_POINTS, rank, score,
};

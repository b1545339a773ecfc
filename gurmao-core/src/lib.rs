//! Core domain types for the Gurmao recommendation engine.
//!
//! These models describe the restaurant catalog, the mood and occasion
//! profiles that parameterise scoring, and the queries and results that flow
//! through it. Constructors that enforce invariants return `Result` so
//! invalid data is rejected at the edge rather than inside the scorer.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod collection;
mod group;
mod mood;
mod price;
pub mod profile;
mod query;
mod rating;
mod restaurant;
mod result;
mod vibe;

pub use catalog::{Catalog, CatalogError, CatalogStore};
pub use collection::{CollectionError, MemoryCollection, SavedCollection};
#[cfg(feature = "store-json")]
pub use collection::{DEFAULT_SAVED_FILE, JsonFileCollection};
pub use group::GroupSizes;
pub use mood::{IntentParseError, Mood, Occasion};
pub use price::{PriceLevel, PriceLevelError};
pub use profile::{MoodProfile, OccasionProfile};
pub use query::{Query, RawQuery};
pub use rating::{RatingError, RatingLedger, RatingSummary, StarRating};
pub use restaurant::Restaurant;
pub use result::{ConfidenceTier, MAX_MATCH_REASONS, ScoredResult};
pub use vibe::Vibe;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

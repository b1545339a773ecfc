//! Heuristic relevance scoring.
//!
//! Factors are evaluated in a fixed order and each may add points and a
//! reason. The order matters twice: only the first three reasons survive,
//! and the city factor is the only one that subtracts.

use gurmao_core::{CatalogStore, Query, Restaurant, ScoredResult};
use log::debug;

use crate::explain::people;
use crate::jitter::{Jitter, MAX_JITTER};

/// Points for a vibe the selected mood favours.
pub const MOOD_VIBE_POINTS: i32 = 30;
/// Points when the mood suits the requested party size.
pub const MOOD_GROUP_POINTS: i32 = 15;
/// Points for sharing an atmosphere tag with the mood.
pub const MOOD_ATMOSPHERE_POINTS: i32 = 20;
/// Points when the restaurant lists the occasion itself.
pub const OCCASION_LISTED_POINTS: i32 = 35;
/// Points for a vibe the occasion favours.
pub const OCCASION_VIBE_POINTS: i32 = 25;
/// Points when the restaurant seats the requested party size.
pub const GROUP_SIZE_POINTS: i32 = 20;
/// Points for a city match.
pub const CITY_MATCH_POINTS: i32 = 15;
/// Points deducted when a city was requested and does not match.
pub const CITY_MISMATCH_PENALTY: i32 = 10;
/// Points for an exact price-level match.
pub const PRICE_POINTS: i32 = 15;
/// Points per keyword found in the free text.
pub const KEYWORD_POINTS: i32 = 10;
/// Points when the description contains the first word of the free text.
pub const DESCRIPTION_POINTS: i32 = 5;

#[derive(Debug, Default)]
struct Tally {
    points: i32,
    reasons: Vec<String>,
}

impl Tally {
    fn award(&mut self, points: i32, reason: Option<String>) {
        self.points = self.points.saturating_add(points);
        self.reasons.extend(reason);
    }
}

/// Score one restaurant against `query`.
///
/// Profiles are looked up in `store`; a mood or occasion without a profile
/// contributes nothing. The jitter bonus is drawn exactly once.
///
/// # Examples
///
/// ```rust
/// use gurmao_core::{Catalog, Query};
/// use gurmao_scorer::{NoJitter, score};
///
/// let catalog = Catalog::builtin();
/// let ember = catalog.restaurant("ember-steak").expect("built-in restaurant");
/// let result = score(&catalog, ember, &Query::new().with_city("BRNO"), &mut NoJitter);
/// assert_eq!(result.score(), 15);
/// assert_eq!(result.match_reasons(), ["Ve tvém městě: BRNO"]);
/// ```
#[must_use]
pub fn score<S>(
    store: &S,
    restaurant: &Restaurant,
    query: &Query,
    jitter: &mut dyn Jitter,
) -> ScoredResult
where
    S: CatalogStore + ?Sized,
{
    let mut tally = Tally::default();
    score_mood(store, restaurant, query, &mut tally);
    score_occasion(store, restaurant, query, &mut tally);
    score_group_size(restaurant, query, &mut tally);
    score_city(restaurant, query, &mut tally);
    score_price(restaurant, query, &mut tally);
    score_free_text(restaurant, query, &mut tally);
    let total = tally
        .points
        .saturating_add(round_bonus(jitter.next_bonus()));
    ScoredResult::new(restaurant.clone(), total, tally.reasons)
}

/// Score every restaurant in `store` and order the results best first.
///
/// Nothing is filtered out. Equal scores keep catalog order.
#[must_use]
pub fn rank<S>(store: &S, query: &Query, jitter: &mut dyn Jitter) -> Vec<ScoredResult>
where
    S: CatalogStore + ?Sized,
{
    let mut results: Vec<ScoredResult> = store
        .restaurants()
        .iter()
        .map(|restaurant| score(store, restaurant, query, jitter))
        .collect();
    results.sort_by(|a, b| b.score().cmp(&a.score()));
    if let Some(top) = results.first() {
        debug!(
            "ranked {} restaurants; top pick {} with {}",
            results.len(),
            top.restaurant().id,
            top.score()
        );
    }
    results
}

fn score_mood<S>(store: &S, restaurant: &Restaurant, query: &Query, tally: &mut Tally)
where
    S: CatalogStore + ?Sized,
{
    let Some(mood) = query.mood else { return };
    let Some(profile) = store.mood_profile(mood) else {
        return;
    };
    if profile.accepts_vibe(&restaurant.vibe) {
        tally.award(
            MOOD_VIBE_POINTS,
            Some(format!("Perfektní {} vibe pro {mood}", restaurant.vibe)),
        );
    }
    if profile.fits_group(query.group_size) {
        tally.award(MOOD_GROUP_POINTS, None);
    }
    if profile.shares_atmosphere(&restaurant.atmosphere) {
        tally.award(MOOD_ATMOSPHERE_POINTS, Some("Atmosféra sedí".to_owned()));
    }
}

fn score_occasion<S>(store: &S, restaurant: &Restaurant, query: &Query, tally: &mut Tally)
where
    S: CatalogStore + ?Sized,
{
    let Some(occasion) = query.occasion else {
        return;
    };
    let Some(profile) = store.occasion_profile(occasion) else {
        return;
    };
    if restaurant.lists_occasion(occasion.as_str()) {
        tally.award(
            OCCASION_LISTED_POINTS,
            Some(format!("Doporučeno pro {occasion}")),
        );
    }
    if profile.accepts_vibe(&restaurant.vibe) {
        tally.award(OCCASION_VIBE_POINTS, None);
    }
}

fn score_group_size(restaurant: &Restaurant, query: &Query, tally: &mut Tally) {
    let Some(size) = query.group_size else { return };
    if restaurant.group_sizes.contains(Some(size)) {
        tally.award(
            GROUP_SIZE_POINTS,
            Some(format!("Ideální pro {size} {}", people(size))),
        );
    }
}

fn score_city(restaurant: &Restaurant, query: &Query, tally: &mut Tally) {
    let Some(city) = query.city() else { return };
    if restaurant.city.to_lowercase() == city.to_lowercase() {
        tally.award(CITY_MATCH_POINTS, Some(format!("Ve tvém městě: {city}")));
    } else {
        tally.award(-CITY_MISMATCH_PENALTY, None);
    }
}

fn score_price(restaurant: &Restaurant, query: &Query, tally: &mut Tally) {
    if query.price_level == Some(restaurant.price_level) {
        tally.award(PRICE_POINTS, Some("Cenová relace sedí".to_owned()));
    }
}

fn score_free_text(restaurant: &Restaurant, query: &Query, tally: &mut Tally) {
    let Some(text) = query.free_text() else { return };
    let lowered = text.to_lowercase();

    let mut matches: u32 = 0;
    for keyword in &restaurant.keywords {
        if lowered.contains(&keyword.to_lowercase()) {
            matches = matches.saturating_add(1);
            tally.award(KEYWORD_POINTS, None);
        }
    }
    if matches > 0 {
        let noun = if matches == 1 { "match" } else { "matches" };
        tally.reasons.push(format!("{matches} keyword {noun}"));
    }

    // Only the first word of the wish is compared with the description.
    if let Some(first_word) = lowered.split_whitespace().next()
        && restaurant.description.to_lowercase().contains(first_word)
    {
        tally.award(DESCRIPTION_POINTS, None);
    }
}

/// Round a jitter bonus half-up to whole points.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    reason = "bonus is clamped to [0, 5] before the cast"
)]
fn round_bonus(bonus: f64) -> i32 {
    let clamped = if bonus.is_finite() {
        bonus.clamp(0.0, MAX_JITTER)
    } else {
        0.0
    };
    (clamped + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0)]
    #[case(0.49, 0)]
    #[case(0.5, 1)]
    #[case(2.5, 3)]
    #[case(4.49, 4)]
    #[case(4.99, 5)]
    #[case(-3.0, 0)]
    #[case(12.0, 5)]
    #[case(f64::NAN, 0)]
    #[case(f64::INFINITY, 0)]
    fn bonus_rounds_half_up_within_range(#[case] bonus: f64, #[case] expected: i32) {
        assert_eq!(round_bonus(bonus), expected);
    }

    #[test]
    fn tally_keeps_reasons_in_award_order() {
        let mut tally = Tally::default();
        tally.award(10, Some("first".into()));
        tally.award(5, None);
        tally.award(-3, Some("second".into()));
        assert_eq!(tally.points, 12);
        assert_eq!(tally.reasons, ["first", "second"]);
    }
}

#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Property coverage for scoring invariants.

use gurmao_core::{
    Catalog, CatalogStore, ConfidenceTier, MAX_MATCH_REASONS, Mood, Occasion, PriceLevel, Query,
};
use gurmao_scorer::{CITY_MISMATCH_PENALTY, FixedJitter, MAX_JITTER, NoJitter, rank, score};
use proptest::prelude::*;

fn mood() -> impl Strategy<Value = Option<Mood>> {
    proptest::option::of(proptest::sample::select(Mood::ALL.to_vec()))
}

fn occasion() -> impl Strategy<Value = Option<Occasion>> {
    proptest::option::of(proptest::sample::select(Occasion::ALL.to_vec()))
}

fn city() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(proptest::sample::select(vec![
        "Praha".to_owned(),
        "brno".to_owned(),
        "OSTRAVA".to_owned(),
        "Plzeň".to_owned(),
    ]))
}

prop_compose! {
    fn query()(
        mood in mood(),
        occasion in occasion(),
        group_size in proptest::option::of(1_u8..=10),
        city in city(),
        price_level in proptest::option::of(1_u8..=4),
        free_text in proptest::option::of("[a-zá-ž ]{0,24}"),
    ) -> Query {
        Query {
            mood,
            occasion,
            group_size,
            city,
            price_level: price_level.map(|p| PriceLevel::new(p).expect("generated in range")),
            free_text,
        }
    }
}

fn bonus() -> impl Strategy<Value = f64> {
    0.0..MAX_JITTER
}

proptest! {
    #[test]
    fn reasons_never_exceed_cap(query in query(), jitter in bonus()) {
        let catalog = Catalog::builtin();
        for result in rank(&catalog, &query, &mut FixedJitter(jitter)) {
            prop_assert!(result.match_reasons().len() <= MAX_MATCH_REASONS);
        }
    }

    #[test]
    fn ranking_is_sorted_and_complete(query in query(), jitter in bonus()) {
        let catalog = Catalog::builtin();
        let ranked = rank(&catalog, &query, &mut FixedJitter(jitter));
        prop_assert_eq!(ranked.len(), catalog.restaurants().len());
        for pair in ranked.windows(2) {
            if let [first, second] = pair {
                prop_assert!(first.score() >= second.score());
            }
        }
    }

    #[test]
    fn ranking_is_idempotent_without_jitter(query in query()) {
        let catalog = Catalog::builtin();
        prop_assert_eq!(
            rank(&catalog, &query, &mut NoJitter),
            rank(&catalog, &query, &mut NoJitter)
        );
    }

    #[test]
    fn matching_keyword_never_lowers_a_score(query in query(), jitter in bonus()) {
        let catalog = Catalog::builtin();
        for restaurant in catalog.restaurants() {
            let Some(keyword) = restaurant.keywords.first() else { continue };
            let base_text = query.free_text.clone().unwrap_or_default();
            let enriched = query.clone().with_free_text(format!("{base_text} {keyword}"));
            let without = score(&catalog, restaurant, &query, &mut FixedJitter(jitter));
            let with = score(&catalog, restaurant, &enriched, &mut FixedJitter(jitter));
            prop_assert!(
                with.score() >= without.score(),
                "{} lost points for keyword {keyword:?}",
                restaurant.id
            );
        }
    }

    #[test]
    fn foreign_city_costs_exactly_ten(query in query(), jitter in bonus()) {
        let catalog = Catalog::builtin();
        let unset = Query { city: None, ..query };
        let foreign = unset.clone().with_city("Plzeň");
        for restaurant in catalog.restaurants() {
            let without = score(&catalog, restaurant, &unset, &mut FixedJitter(jitter));
            let with = score(&catalog, restaurant, &foreign, &mut FixedJitter(jitter));
            prop_assert_eq!(without.score() - with.score(), CITY_MISMATCH_PENALTY);
        }
    }

    #[test]
    fn confidence_is_total_and_monotone(a in any::<i32>(), b in any::<i32>()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(ConfidenceTier::from_score(low) <= ConfidenceTier::from_score(high));
    }
}

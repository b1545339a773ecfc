//! Catalog data shipped with the site.

use std::collections::HashMap;

use crate::{GroupSizes, Mood, MoodProfile, Occasion, OccasionProfile, PriceLevel, Restaurant, Vibe};

const DETAIL_PAGE: &str = "restaurace-noir-table.html";

const fn level(value: u8) -> PriceLevel {
    match PriceLevel::new(value) {
        Ok(level) => level,
        Err(_) => panic!("built-in price levels lie within 1..=4"),
    }
}

// Evaluated at compile time, so a bad literal fails the build.
const BUDGET: PriceLevel = level(1);
const MODERATE: PriceLevel = level(2);
const UPSCALE: PriceLevel = level(3);
const LUXURY: PriceLevel = level(4);

pub(super) fn restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant::new("noir-table", "Noir Table", Vibe::Luxe, "Praha", LUXURY)
            .with_vibe_emoji("🍷")
            .with_tag("fine dining")
            .with_description("Místo, kde se čas zpomalí. Oheň, ticho, precizní servis.")
            .with_href(DETAIL_PAGE)
            .with_moods(["romantika", "oslava", "business"])
            .with_cuisines(["modern european", "fine dining"])
            .with_atmosphere(["klidná", "elegantní", "intimní"])
            .with_occasions(["výročí", "rande", "business dinner"])
            .with_group_sizes(GroupSizes::from([2, 4]))
            .with_keywords(["oheň", "ticho", "luxus", "wine pairing", "degustační menu"]),
        Restaurant::new("ember-steak", "Ember Steak", Vibe::Drama, "Brno", UPSCALE)
            .with_vibe_emoji("🔥")
            .with_tag("steakhouse")
            .with_description("Oheň, kouř, maso. Žádné výmluvy.")
            .with_href(DETAIL_PAGE)
            .with_moods(["hlad", "kamarádi", "oslava"])
            .with_cuisines(["steakhouse", "grill"])
            .with_atmosphere(["živá", "masivní", "dominantní"])
            .with_occasions(["narozeniny", "party", "páteční večer"])
            .with_group_sizes(GroupSizes::from([2, 4, 6, 8]))
            .with_keywords(["maso", "grill", "steaky", "bourbon", "craft beer"]),
        Restaurant::new("la-calle", "La Calle", Vibe::Chaos, "Ostrava", MODERATE)
            .with_vibe_emoji("🌮")
            .with_tag("street food")
            .with_description("Chaos s chuťovým smyslem.")
            .with_href(DETAIL_PAGE)
            .with_moods(["zábava", "kamarádi", "rychlé jídlo"])
            .with_cuisines(["mexican", "street food"])
            .with_atmosphere(["rušná", "casual", "energická"])
            .with_occasions(["oběd", "rychlá večeře", "after party"])
            .with_group_sizes(GroupSizes::from([2, 4, 6]))
            .with_keywords(["tacos", "street food", "rychlé", "casual", "mexická kuchyně"]),
    ]
}

pub(super) fn mood_profiles() -> HashMap<Mood, MoodProfile> {
    HashMap::from([
        (
            Mood::Romantika,
            MoodProfile::new([Vibe::Luxe, Vibe::Pure])
                .with_group_sizes(GroupSizes::single(2))
                .with_atmosphere(["intimní", "klidná", "elegantní"]),
        ),
        (
            Mood::Oslava,
            MoodProfile::new([Vibe::Drama, Vibe::Chaos])
                .with_group_sizes(GroupSizes::from([4, 6, 8]))
                .with_atmosphere(["živá", "energická"]),
        ),
        (
            Mood::Business,
            MoodProfile::new([Vibe::Luxe, Vibe::Calm])
                .with_group_sizes(GroupSizes::from([2, 4]))
                .with_atmosphere(["klidná", "elegantní"]),
        ),
        (
            Mood::Kamaradi,
            MoodProfile::new([Vibe::Drama, Vibe::Chaos])
                .with_group_sizes(GroupSizes::from([4, 6]))
                .with_atmosphere(["živá", "casual"]),
        ),
        // A quick bite has no party-size preference.
        (
            Mood::Rychle,
            MoodProfile::new([Vibe::Chaos]).with_atmosphere(["casual", "rušná"]),
        ),
        (
            Mood::Klid,
            MoodProfile::new([Vibe::Calm, Vibe::Pure])
                .with_group_sizes(GroupSizes::from([1, 2]))
                .with_atmosphere(["klidná", "intimní"]),
        ),
    ])
}

pub(super) fn occasion_profiles() -> HashMap<Occasion, OccasionProfile> {
    HashMap::from([
        (
            Occasion::Rande,
            OccasionProfile::new(Mood::Romantika, [Vibe::Luxe])
                .with_price_levels([UPSCALE, LUXURY]),
        ),
        (
            Occasion::Vyroci,
            OccasionProfile::new(Mood::Romantika, [Vibe::Luxe]).with_price_levels([LUXURY]),
        ),
        (
            Occasion::Narozeniny,
            OccasionProfile::new(Mood::Oslava, [Vibe::Drama, Vibe::Chaos])
                .with_group_sizes(GroupSizes::from([4, 6, 8])),
        ),
        (
            Occasion::BusinessDinner,
            OccasionProfile::new(Mood::Business, [Vibe::Luxe, Vibe::Calm])
                .with_price_levels([UPSCALE, LUXURY]),
        ),
        (
            Occasion::Obed,
            OccasionProfile::new(Mood::Rychle, [Vibe::Chaos])
                .with_price_levels([BUDGET, MODERATE]),
        ),
        (
            Occasion::PatecniVecer,
            OccasionProfile::new(Mood::Kamaradi, [Vibe::Drama])
                .with_group_sizes(GroupSizes::from([4, 6])),
        ),
        (
            Occasion::Party,
            OccasionProfile::new(Mood::Oslava, [Vibe::Chaos, Vibe::Drama])
                .with_group_sizes(GroupSizes::from([6, 8])),
        ),
    ])
}

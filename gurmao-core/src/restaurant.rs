use serde::{Deserialize, Serialize};

use crate::{GroupSizes, PriceLevel, Vibe};

/// A restaurant in the catalog.
///
/// Catalog files use the camelCase field names of the published site data
/// (`priceLevel`, `groupSize`, `vibeEmoji`) and singular list keys
/// (`mood`, `cuisine`, `occasion`).
///
/// # Examples
/// ```
/// use gurmao_core::{GroupSizes, PriceLevel, Restaurant, Vibe};
///
/// # fn main() -> Result<(), gurmao_core::PriceLevelError> {
/// let restaurant = Restaurant::new("noir-table", "Noir Table", Vibe::Luxe, "Praha", PriceLevel::new(4)?)
///     .with_group_sizes(GroupSizes::from([2, 4]))
///     .with_occasions(["výročí"]);
/// assert!(restaurant.group_sizes.contains(Some(2)));
/// assert!(restaurant.lists_occasion("výročí"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    /// Stable identifier, unique within a catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Vibe tag compared against mood and occasion profiles.
    pub vibe: Vibe,
    /// Emoji shown next to the vibe.
    #[serde(default)]
    pub vibe_emoji: String,
    /// City, compared case-insensitively.
    pub city: String,
    /// Short category label.
    #[serde(default)]
    pub tag: String,
    /// One-line description searched by free text.
    #[serde(default)]
    pub description: String,
    /// Detail page link.
    #[serde(default)]
    pub href: String,
    /// Price level from 1 to 4.
    pub price_level: PriceLevel,
    /// Mood labels. Descriptive only.
    #[serde(rename = "mood", default)]
    pub moods: Vec<String>,
    /// Cuisine labels. Descriptive only.
    #[serde(rename = "cuisine", default)]
    pub cuisines: Vec<String>,
    /// Atmosphere tags matched against the mood profile.
    #[serde(default)]
    pub atmosphere: Vec<String>,
    /// Occasion labels matched verbatim against the query.
    #[serde(rename = "occasion", default)]
    pub occasions: Vec<String>,
    /// Party sizes the restaurant seats.
    #[serde(rename = "groupSize", default)]
    pub group_sizes: GroupSizes,
    /// Keywords searched for in the free text.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Restaurant {
    /// Construct a restaurant with the identifying fields and empty
    /// descriptor lists.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        vibe: Vibe,
        city: impl Into<String>,
        price_level: PriceLevel,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            vibe,
            vibe_emoji: String::new(),
            city: city.into(),
            tag: String::new(),
            description: String::new(),
            href: String::new(),
            price_level,
            moods: Vec::new(),
            cuisines: Vec::new(),
            atmosphere: Vec::new(),
            occasions: Vec::new(),
            group_sizes: GroupSizes::new(),
            keywords: Vec::new(),
        }
    }

    /// Set the emoji shown next to the vibe tag.
    pub fn with_vibe_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.vibe_emoji = emoji.into();
        self
    }

    /// Set the short category label.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Set the free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the detail page reference.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = href.into();
        self
    }

    /// Replace the mood labels.
    pub fn with_moods<I, S>(mut self, moods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.moods = moods.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the cuisine labels.
    pub fn with_cuisines<I, S>(mut self, cuisines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cuisines = cuisines.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the atmosphere descriptors.
    pub fn with_atmosphere<I, S>(mut self, atmosphere: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.atmosphere = atmosphere.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the occasion labels.
    pub fn with_occasions<I, S>(mut self, occasions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.occasions = occasions.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the supported group sizes.
    pub fn with_group_sizes(mut self, sizes: GroupSizes) -> Self {
        self.group_sizes = sizes;
        self
    }

    /// Replace the search keywords.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Report whether the restaurant lists `occasion` verbatim.
    pub fn lists_occasion(&self, occasion: &str) -> bool {
        self.occasions.iter().any(|o| o == occasion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(value: u8) -> PriceLevel {
        PriceLevel::new(value).expect("valid price level")
    }

    #[test]
    fn deserialises_site_data_layout() {
        let json = r#"{
            "id": "la-calle",
            "name": "La Calle",
            "vibe": "CHAOS",
            "vibeEmoji": "🌮",
            "city": "Ostrava",
            "priceLevel": 2,
            "mood": ["zábava"],
            "occasion": ["oběd"],
            "groupSize": [2, 4, 6],
            "keywords": ["tacos"]
        }"#;
        let restaurant: Restaurant = serde_json::from_str(json).expect("parse restaurant");
        assert_eq!(restaurant.vibe, Vibe::Chaos);
        assert_eq!(restaurant.price_level, level(2));
        assert!(restaurant.group_sizes.contains(Some(6)));
        assert!(restaurant.lists_occasion("oběd"));
        assert!(restaurant.atmosphere.is_empty());
    }

    #[test]
    fn rejects_out_of_range_price() {
        let json = r#"{"id": "x", "name": "X", "vibe": "LUXE", "city": "Praha", "priceLevel": 7}"#;
        assert!(serde_json::from_str::<Restaurant>(json).is_err());
    }

    #[test]
    fn occasion_match_is_verbatim() {
        let restaurant =
            Restaurant::new("a", "A", Vibe::Luxe, "Praha", level(3)).with_occasions(["rande"]);
        assert!(restaurant.lists_occasion("rande"));
        assert!(!restaurant.lists_occasion("Rande"));
    }
}

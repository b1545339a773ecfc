//! Mood and occasion profiles: the lookup tables that parameterise scoring.
//!
//! Profiles are static data. They only describe what a mood or occasion
//! favours; the weighting lives in the scorer.

use serde::{Deserialize, Serialize};

use crate::{GroupSizes, Mood, PriceLevel, Vibe};

/// What a mood favours.
///
/// # Examples
/// ```
/// use gurmao_core::{GroupSizes, MoodProfile, Vibe};
///
/// let profile = MoodProfile::new([Vibe::Luxe, Vibe::Pure])
///     .with_group_sizes(GroupSizes::single(2))
///     .with_atmosphere(["intimní", "klidná"]);
/// assert!(profile.accepts_vibe(&Vibe::Luxe));
/// assert!(profile.fits_group(Some(2)));
/// assert!(profile.shares_atmosphere(&["klidná".to_string()]));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodProfile {
    /// Compatible vibes.
    pub vibes: Vec<Vibe>,
    /// Party sizes the mood suits; empty when the mood has no preference.
    #[serde(rename = "groupSize", default)]
    pub group_sizes: GroupSizes,
    /// Compatible atmosphere descriptors.
    #[serde(default)]
    pub atmosphere: Vec<String>,
}

impl MoodProfile {
    /// Construct a profile favouring `vibes`.
    pub fn new(vibes: impl IntoIterator<Item = Vibe>) -> Self {
        Self {
            vibes: vibes.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Set the preferred party sizes.
    pub fn with_group_sizes(mut self, sizes: GroupSizes) -> Self {
        self.group_sizes = sizes;
        self
    }

    /// Set the compatible atmosphere descriptors.
    pub fn with_atmosphere<I, S>(mut self, atmosphere: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.atmosphere = atmosphere.into_iter().map(Into::into).collect();
        self
    }

    /// Report whether `vibe` is compatible with the mood.
    pub fn accepts_vibe(&self, vibe: &Vibe) -> bool {
        self.vibes.contains(vibe)
    }

    /// Report whether the requested party size is one the mood suits.
    pub fn fits_group(&self, size: Option<u8>) -> bool {
        self.group_sizes.contains(size)
    }

    /// Report whether any of `atmosphere` is compatible with the mood.
    pub fn shares_atmosphere(&self, atmosphere: &[String]) -> bool {
        atmosphere.iter().any(|a| self.atmosphere.contains(a))
    }
}

/// What an occasion favours.
///
/// Only `vibes` feeds the score. The associated mood, party sizes and price
/// levels are carried as catalog data and are not consulted by the scorer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccasionProfile {
    /// Mood usually associated with the occasion.
    #[serde(default)]
    pub mood: Option<Mood>,
    /// Compatible vibes.
    pub vibes: Vec<Vibe>,
    /// Typical party sizes.
    #[serde(rename = "groupSize", default)]
    pub group_sizes: GroupSizes,
    /// Typical price levels.
    #[serde(rename = "priceLevel", default)]
    pub price_levels: Vec<PriceLevel>,
}

impl OccasionProfile {
    /// Construct a profile tied to `mood` and favouring `vibes`.
    pub fn new(mood: Mood, vibes: impl IntoIterator<Item = Vibe>) -> Self {
        Self {
            mood: Some(mood),
            vibes: vibes.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Set the typical party sizes.
    pub fn with_group_sizes(mut self, sizes: GroupSizes) -> Self {
        self.group_sizes = sizes;
        self
    }

    /// Set the typical price levels.
    pub fn with_price_levels(mut self, levels: impl IntoIterator<Item = PriceLevel>) -> Self {
        self.price_levels = levels.into_iter().collect();
        self
    }

    /// Report whether `vibe` is compatible with the occasion.
    pub fn accepts_vibe(&self, vibe: &Vibe) -> bool {
        self.vibes.contains(vibe)
    }
}

//! Vibes: the single categorical atmosphere tag carried by each restaurant.
//!
//! Profiles reference vibes by exact match. The set is open for extension:
//! a catalog may introduce a vibe the profile tables do not know, which is
//! kept as [`Vibe::Other`] and simply never matches a profile.
//!
//! # Examples
//! ```
//! use gurmao_core::Vibe;
//!
//! assert_eq!(Vibe::Luxe.as_str(), "LUXE");
//! assert_eq!("drama".parse::<Vibe>(), Ok(Vibe::Drama));
//! assert_eq!("NEON".parse::<Vibe>(), Ok(Vibe::Other("NEON".into())));
//! ```
use std::convert::Infallible;

use serde::{Deserialize, Serialize};

/// Categorical atmosphere tag attached to a restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Vibe {
    /// Fine dining, quiet luxury.
    Luxe,
    /// Fire, smoke and a loud room.
    Drama,
    /// Busy street-food energy.
    Chaos,
    /// Relaxed and unhurried.
    Calm,
    /// Minimal, ingredient-first.
    Pure,
    /// A vibe outside the known set, stored uppercase.
    Other(String),
}

impl Vibe {
    /// Return the canonical uppercase tag.
    ///
    /// # Examples
    /// ```
    /// use gurmao_core::Vibe;
    ///
    /// assert_eq!(Vibe::Chaos.as_str(), "CHAOS");
    /// ```
    pub fn as_str(&self) -> &str {
        match self {
            Self::Luxe => "LUXE",
            Self::Drama => "DRAMA",
            Self::Chaos => "CHAOS",
            Self::Calm => "CALM",
            Self::Pure => "PURE",
            Self::Other(tag) => tag.as_str(),
        }
    }

    /// Report whether the vibe belongs to the known set.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl std::fmt::Display for Vibe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Vibe {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_uppercase();
        Ok(match tag.as_str() {
            "LUXE" => Self::Luxe,
            "DRAMA" => Self::Drama,
            "CHAOS" => Self::Chaos,
            "CALM" => Self::Calm,
            "PURE" => Self::Pure,
            _ => Self::Other(tag),
        })
    }
}

impl From<String> for Vibe {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(vibe) => vibe,
            Err(never) => match never {},
        }
    }
}

impl From<Vibe> for String {
    fn from(value: Vibe) -> Self {
        match value {
            Vibe::Other(tag) => tag,
            known => known.as_str().to_owned(),
        }
    }
}

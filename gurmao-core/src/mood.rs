//! Moods and occasions: the closed sets of user intents that select a
//! scoring profile.
//!
//! Both enums keep a string parsing boundary for form input. Parsing is
//! case-insensitive and rejects anything outside the profile tables.
//!
//! # Examples
//! ```
//! use gurmao_core::{Mood, Occasion};
//!
//! assert_eq!("Romantika".parse::<Mood>(), Ok(Mood::Romantika));
//! assert_eq!(Occasion::Vyroci.to_string(), "výročí");
//! ```
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A user-stated emotional or social intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Mood {
    /// Romance.
    Romantika,
    /// Celebration.
    Oslava,
    /// Business meeting.
    Business,
    /// Out with friends.
    Kamaradi,
    /// Something quick.
    Rychle,
    /// Peace and quiet.
    Klid,
}

/// A user-stated event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Occasion {
    /// Date night.
    Rande,
    /// Anniversary.
    Vyroci,
    /// Birthday.
    Narozeniny,
    /// Business dinner.
    BusinessDinner,
    /// Lunch.
    Obed,
    /// Friday evening.
    PatecniVecer,
    /// Party.
    Party,
}

/// Errors returned when parsing a [`Mood`] or an [`Occasion`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntentParseError {
    /// The mood name is not in the profile table.
    #[error("unknown mood '{0}'")]
    UnknownMood(String),
    /// The occasion name is not in the profile table.
    #[error("unknown occasion '{0}'")]
    UnknownOccasion(String),
}

impl Mood {
    /// Every mood, in profile-table order.
    pub const ALL: [Self; 6] = [
        Self::Romantika,
        Self::Oslava,
        Self::Business,
        Self::Kamaradi,
        Self::Rychle,
        Self::Klid,
    ];

    /// Return the mood key as used in forms and catalog files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Romantika => "romantika",
            Self::Oslava => "oslava",
            Self::Business => "business",
            Self::Kamaradi => "kamarádi",
            Self::Rychle => "rychle",
            Self::Klid => "klid",
        }
    }
}

impl Occasion {
    /// Every occasion, in profile-table order.
    pub const ALL: [Self; 7] = [
        Self::Rande,
        Self::Vyroci,
        Self::Narozeniny,
        Self::BusinessDinner,
        Self::Obed,
        Self::PatecniVecer,
        Self::Party,
    ];

    /// Return the occasion key as used in forms and catalog files.
    ///
    /// Restaurants list their occasions with the same spelling, so this is
    /// also the label compared against [`crate::Restaurant::occasions`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rande => "rande",
            Self::Vyroci => "výročí",
            Self::Narozeniny => "narozeniny",
            Self::BusinessDinner => "business dinner",
            Self::Obed => "oběd",
            Self::PatecniVecer => "páteční večer",
            Self::Party => "party",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Occasion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mood {
    type Err = IntentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mood| mood.as_str() == key)
            .ok_or_else(|| IntentParseError::UnknownMood(s.to_owned()))
    }
}

impl std::str::FromStr for Occasion {
    type Err = IntentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|occasion| occasion.as_str() == key)
            .ok_or_else(|| IntentParseError::UnknownOccasion(s.to_owned()))
    }
}

impl TryFrom<String> for Mood {
    type Error = IntentParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Occasion {
    type Error = IntentParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Mood> for String {
    fn from(value: Mood) -> Self {
        value.as_str().to_owned()
    }
}

impl From<Occasion> for String {
    fn from(value: Occasion) -> Self {
        value.as_str().to_owned()
    }
}

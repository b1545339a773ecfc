//! Recommendation queries and the form-input boundary that produces them.
//!
//! Every field is optional; an empty [`Query`] is legal and scores each
//! restaurant on jitter alone. [`RawQuery`] carries untrusted strings as they
//! arrive from a form and never fails to convert: anything it cannot
//! interpret becomes an absent field.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Mood, Occasion, PriceLevel};

/// A structured recommendation request.
///
/// # Examples
/// ```
/// use gurmao_core::{Mood, Occasion, PriceLevel, Query};
///
/// # fn main() -> Result<(), gurmao_core::PriceLevelError> {
/// let query = Query::new()
///     .with_mood(Mood::Romantika)
///     .with_occasion(Occasion::Vyroci)
///     .with_group_size(2)
///     .with_city("Praha")
///     .with_price_level(PriceLevel::new(4)?);
/// assert_eq!(query.group_size, Some(2));
/// assert!(Query::new().is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Selected mood.
    pub mood: Option<Mood>,
    /// Selected occasion.
    pub occasion: Option<Occasion>,
    /// Party size.
    pub group_size: Option<u8>,
    /// City, compared case-insensitively.
    pub city: Option<String>,
    /// Preferred price level.
    pub price_level: Option<PriceLevel>,
    /// Free-text wishes.
    pub free_text: Option<String>,
}

impl Query {
    /// Construct an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mood.
    pub const fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    /// Set the occasion.
    pub const fn with_occasion(mut self, occasion: Occasion) -> Self {
        self.occasion = Some(occasion);
        self
    }

    /// Set the party size.
    pub const fn with_group_size(mut self, size: u8) -> Self {
        self.group_size = Some(size);
        self
    }

    /// Set the city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Set the preferred price level.
    pub const fn with_price_level(mut self, level: PriceLevel) -> Self {
        self.price_level = Some(level);
        self
    }

    /// Set the free-text wishes.
    pub fn with_free_text(mut self, text: impl Into<String>) -> Self {
        self.free_text = Some(text.into());
        self
    }

    /// Report whether no field is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Return the city when it is present and non-empty.
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref().filter(|c| !c.is_empty())
    }

    /// Return the free text when it is present and non-empty.
    pub fn free_text(&self) -> Option<&str> {
        self.free_text.as_deref().filter(|t| !t.is_empty())
    }
}

/// Untrusted form input, one optional string per [`Query`] field.
///
/// # Examples
/// ```
/// use gurmao_core::{Mood, Query, RawQuery};
///
/// let raw = RawQuery {
///     mood: Some("romantika".into()),
///     group_size: Some("two".into()),
///     price_level: Some("9".into()),
///     ..RawQuery::default()
/// };
/// let query = Query::from(raw);
/// assert_eq!(query.mood, Some(Mood::Romantika));
/// assert_eq!(query.group_size, None);
/// assert_eq!(query.price_level, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuery {
    /// Mood name.
    #[serde(default)]
    pub mood: Option<String>,
    /// Occasion name.
    #[serde(default)]
    pub occasion: Option<String>,
    /// Party size as typed.
    #[serde(default)]
    pub group_size: Option<String>,
    /// City as typed.
    #[serde(default)]
    pub city: Option<String>,
    /// Price level as typed.
    #[serde(default)]
    pub price_level: Option<String>,
    /// Free text as typed.
    #[serde(default)]
    pub free_text: Option<String>,
}

impl From<RawQuery> for Query {
    fn from(raw: RawQuery) -> Self {
        Self {
            mood: non_empty(raw.mood).and_then(|name| parse_or_skip("mood", &name)),
            occasion: non_empty(raw.occasion).and_then(|name| parse_or_skip("occasion", &name)),
            group_size: non_empty(raw.group_size)
                .and_then(|n| parse_or_skip::<u8>("group size", &n))
                .filter(|&n| n > 0),
            city: non_empty(raw.city),
            price_level: non_empty(raw.price_level)
                .and_then(|n| parse_or_skip::<u8>("price level", &n))
                .and_then(|n| {
                    PriceLevel::new(n)
                        .inspect_err(|err| debug!("ignoring price level: {err}"))
                        .ok()
                }),
            free_text: raw.free_text.filter(|t| !t.is_empty()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn parse_or_skip<T>(field: &str, value: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .inspect_err(|err| debug!("ignoring {field} {value:?}: {err}"))
        .ok()
}

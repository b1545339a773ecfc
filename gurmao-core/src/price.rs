//! Price levels on the one-to-four scale used across the catalog.
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A restaurant price level in `1..=4`.
///
/// # Examples
/// ```
/// use gurmao_core::PriceLevel;
///
/// # fn main() -> Result<(), gurmao_core::PriceLevelError> {
/// let level = PriceLevel::new(4)?;
/// assert_eq!(level.get(), 4);
/// assert!(PriceLevel::new(5).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PriceLevel(u8);

/// Errors returned by [`PriceLevel::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceLevelError {
    /// The value was outside `1..=4`.
    #[error("price level must be between 1 and 4, got {0}")]
    OutOfRange(u8),
}

impl PriceLevel {
    /// Cheapest level.
    pub const MIN: u8 = 1;
    /// Most expensive level.
    pub const MAX: u8 = 4;

    /// Validates and constructs a [`PriceLevel`].
    pub const fn new(value: u8) -> Result<Self, PriceLevelError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(PriceLevelError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Return the numeric level.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for PriceLevel {
    type Error = PriceLevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PriceLevel> for u8 {
    fn from(value: PriceLevel) -> Self {
        value.0
    }
}

impl std::fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

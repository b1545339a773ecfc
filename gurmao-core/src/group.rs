//! Group-size sets.
//!
//! Profiles historically stored a group-size constraint either as a single
//! number or as a list. Both forms deserialise into the same set type; a
//! scalar is a singleton set.
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A set of supported party sizes.
///
/// # Examples
/// ```
/// use gurmao_core::GroupSizes;
///
/// let sizes = GroupSizes::from([2, 4]);
/// assert!(sizes.contains(Some(2)));
/// assert!(!sizes.contains(Some(3)));
/// assert!(!sizes.contains(None));
///
/// let scalar: GroupSizes = serde_json::from_str("2").unwrap();
/// assert_eq!(scalar, GroupSizes::single(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "GroupSizesRepr", into = "Vec<u8>")]
pub struct GroupSizes(BTreeSet<u8>);

#[derive(Deserialize)]
#[serde(untagged)]
enum GroupSizesRepr {
    One(u8),
    Many(Vec<u8>),
}

impl GroupSizes {
    /// Construct an empty set, meaning "no constraint to satisfy".
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Construct a singleton set.
    pub fn single(size: u8) -> Self {
        Self(BTreeSet::from([size]))
    }

    /// Report whether `size` is present and a member of the set.
    ///
    /// An absent size never matches, mirroring a form left blank.
    pub fn contains(&self, size: Option<u8>) -> bool {
        size.is_some_and(|n| self.0.contains(&n))
    }

    /// Report whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the sizes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }
}

impl<const N: usize> From<[u8; N]> for GroupSizes {
    fn from(sizes: [u8; N]) -> Self {
        Self(sizes.into_iter().collect())
    }
}

impl FromIterator<u8> for GroupSizes {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<GroupSizesRepr> for GroupSizes {
    fn from(repr: GroupSizesRepr) -> Self {
        match repr {
            GroupSizesRepr::One(size) => Self::single(size),
            GroupSizesRepr::Many(sizes) => sizes.into_iter().collect(),
        }
    }
}

impl From<GroupSizes> for Vec<u8> {
    fn from(sizes: GroupSizes) -> Self {
        sizes.0.into_iter().collect()
    }
}

//! Member visibility levels and the configurable set of eligible levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Declared accessibility of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Visibility {
    Public,
    Internal,
    Protected,
    Private,
    ProtectedInternal,
    PrivateProtected,
}

impl Visibility {
    pub const ALL: [Visibility; 6] = [
        Visibility::Public,
        Visibility::Internal,
        Visibility::Protected,
        Visibility::Private,
        Visibility::ProtectedInternal,
        Visibility::PrivateProtected,
    ];

    /// Source keyword(s) used when declaring a member with this visibility.
    pub fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Internal => "internal",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
            Visibility::ProtectedInternal => "protected internal",
            Visibility::PrivateProtected => "private protected",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Visibility {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "public" => Ok(Visibility::Public),
            "internal" => Ok(Visibility::Internal),
            "protected" => Ok(Visibility::Protected),
            "private" => Ok(Visibility::Private),
            "protectedinternal" => Ok(Visibility::ProtectedInternal),
            "privateprotected" => Ok(Visibility::PrivateProtected),
            _ => Err(ConfigError::invalid_value(
                "visibility",
                format!("unknown visibility '{s}'"),
            )),
        }
    }
}

/// A set of [`Visibility`] levels stored as a bitmask.
///
/// Serialized as a list. The default set contains only [`Visibility::Public`];
/// an explicitly configured set is used as given.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Visibility>", into = "Vec<Visibility>")]
pub struct VisibilitySet(u8);

impl VisibilitySet {
    pub const EMPTY: VisibilitySet = VisibilitySet(0);

    pub fn all() -> Self {
        Visibility::ALL.into_iter().collect()
    }

    pub fn contains(self, visibility: Visibility) -> bool {
        self.0 & visibility.bit() != 0
    }

    pub fn insert(&mut self, visibility: Visibility) {
        self.0 |= visibility.bit();
    }

    pub fn with(mut self, visibility: Visibility) -> Self {
        self.insert(visibility);
        self
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate members in declaration order of [`Visibility::ALL`].
    pub fn iter(self) -> impl Iterator<Item = Visibility> {
        Visibility::ALL.into_iter().filter(move |v| self.contains(*v))
    }
}

impl Default for VisibilitySet {
    fn default() -> Self {
        VisibilitySet::EMPTY.with(Visibility::Public)
    }
}

impl fmt::Debug for VisibilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Visibility> for VisibilitySet {
    fn from_iter<I: IntoIterator<Item = Visibility>>(iter: I) -> Self {
        let mut set = VisibilitySet::EMPTY;
        for visibility in iter {
            set.insert(visibility);
        }
        set
    }
}

impl From<Vec<Visibility>> for VisibilitySet {
    fn from(value: Vec<Visibility>) -> Self {
        value.into_iter().collect()
    }
}

impl From<VisibilitySet> for Vec<Visibility> {
    fn from(value: VisibilitySet) -> Self {
        value.iter().collect()
    }
}

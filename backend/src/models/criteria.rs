//! User-selected filter predicates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sentinel used by the location selector to mean "no location predicate".
pub const ALL_LOCATIONS: &str = "ALL";

/// Single-location selector of the Home and Products pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LocationSelection {
    #[default]
    All,
    Only(String),
}

impl LocationSelection {
    /// `None`, an empty value and `ALL` all select every location.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some(ALL_LOCATIONS) => LocationSelection::All,
            Some(name) => LocationSelection::Only(name.to_string()),
        }
    }

    pub fn matches(&self, location: &str) -> bool {
        match self {
            LocationSelection::All => true,
            LocationSelection::Only(name) => name == location,
        }
    }
}

/// Conjunction of per-dimension predicates.
///
/// Each set is a disjunction over its members. An empty category or size set
/// matches nothing; `seasons: None` applies no season predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub categories: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
    pub location: LocationSelection,
    pub seasons: Option<BTreeSet<String>>,
}

impl FilterCriteria {
    pub fn new<C, S>(categories: C, sizes: S) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            sizes: sizes.into_iter().map(Into::into).collect(),
            location: LocationSelection::All,
            seasons: None,
        }
    }

    pub fn with_location(mut self, location: LocationSelection) -> Self {
        self.location = location;
        self
    }

    pub fn with_seasons<I>(mut self, seasons: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.seasons = Some(seasons.into_iter().map(Into::into).collect());
        self
    }
}

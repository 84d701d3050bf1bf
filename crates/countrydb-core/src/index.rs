// crates/countrydb-core/src/index.rs

//! # Path index
//!
//! The set of valid country identifiers, enumerated once up front, and the
//! navigation paths derived from them. Identifiers are common names; lookups
//! are accent- and case-insensitive via [`fold_key`].

use crate::text::fold_key;
use std::collections::BTreeMap;

/// Route prefix of a country detail view.
pub const COUNTRY_ROUTE: &str = "/countries";

/// Navigation path of a country's detail view.
///
/// ```rust
/// use countrydb_core::index::path_for;
///
/// assert_eq!(path_for("Germany"), "/countries/Germany");
/// ```
pub fn path_for(common_name: &str) -> String {
    format!("{COUNTRY_ROUTE}/{common_name}")
}

/// Sorted, de-duplicated identifier set.
#[derive(Debug, Clone, Default)]
pub struct CountryIndex {
    /// folded key -> canonical identifier
    by_key: BTreeMap<String, String>,
}

impl CountryIndex {
    /// Build from raw identifiers; blank entries are dropped and the first
    /// spelling of a folded duplicate wins.
    pub fn from_identifiers<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut by_key = BTreeMap::new();
        for id in identifiers {
            let id: String = id.into();
            let key = fold_key(&id);
            if key.is_empty() {
                continue;
            }
            by_key.entry(key).or_insert_with(|| id.trim().to_string());
        }
        Self { by_key }
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Canonical identifier matching `query`, if any.
    pub fn resolve(&self, query: &str) -> Option<&str> {
        self.by_key.get(&fold_key(query)).map(String::as_str)
    }

    pub fn contains(&self, query: &str) -> bool {
        self.resolve(query).is_some()
    }

    /// Identifiers in folded-key order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.by_key.values().map(String::as_str)
    }

    /// One detail-view path per identifier.
    pub fn paths(&self) -> impl Iterator<Item = String> + '_ {
        self.identifiers().map(path_for)
    }
}

// crates/countrydb-core/src/model/record.rs
use super::raw::{lenient_population, null_as_default};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Names of a country, as returned under the `name` field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub official: String,
    /// Localized names keyed by locale tag (`"deu"`, `"fra"`, ...).
    /// Ordered by key so the "first" native name is deterministic.
    #[serde(
        rename = "nativeName",
        default,
        deserialize_with = "null_as_default"
    )]
    pub native_name: BTreeMap<String, NativeName>,
}

/// One localized variant of a country's name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeName {
    #[serde(default, deserialize_with = "null_as_default")]
    pub official: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub common: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Flag image references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default, deserialize_with = "null_as_default")]
    pub png: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub svg: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// The full record behind a country detail view.
///
/// Every field except `name.common` is optional on the wire; absent or
/// `null` values decode to empty collections or strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: CountryName,
    #[serde(default)]
    pub cioc: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub capital: Vec<String>,
    #[serde(default, deserialize_with = "lenient_population")]
    pub population: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subregion: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tld: Vec<String>,
    /// Currency descriptors keyed by ISO 4217 code.
    #[serde(default, deserialize_with = "null_as_default")]
    pub currencies: BTreeMap<String, Currency>,
    /// Language names keyed by ISO 639-3 code.
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub flags: Flags,
    /// Alpha-3 codes of neighbouring countries, in service order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub borders: Vec<String>,
}

impl CountryRecord {
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    pub fn official_name(&self) -> &str {
        &self.name.official
    }

    /// Common form of the native name under the smallest locale tag.
    pub fn native_name(&self) -> Option<&str> {
        self.name
            .native_name
            .values()
            .next()
            .map(|n| n.common.as_str())
    }

    /// Name of the currency under the smallest currency code.
    pub fn currency(&self) -> Option<&str> {
        self.currencies.values().next().map(|c| c.name.as_str())
    }

    /// Language names ordered by language code.
    pub fn languages(&self) -> Vec<&str> {
        self.languages.values().map(String::as_str).collect()
    }

    /// First top-level domain (`.de`).
    pub fn domain(&self) -> Option<&str> {
        self.tld.first().map(String::as_str)
    }

    pub fn capitals(&self) -> &[String] {
        &self.capital
    }

    pub fn has_borders(&self) -> bool {
        !self.borders.is_empty()
    }
}

/// The `name`-only projection used for enumeration and border lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySummary {
    pub name: CountryName,
}

impl CountrySummary {
    pub fn common_name(&self) -> &str {
        &self.name.common
    }
}

// crates/countrydb-core/src/view.rs

//! Display strings for a country detail view.
//!
//! Every field is a ready-to-render string; absent data is replaced by
//! fixed fallback text.

use crate::index::path_for;
use crate::model::CountryRecord;
use crate::text::group_thousands;
use serde::Serialize;
use std::fmt;

pub const NO_NATIVE_NAME: &str = "No native name";
pub const NO_CAPITAL: &str = "No capital";
pub const NO_CURRENCY: &str = "No currency";
pub const NO_DOMAIN: &str = "No domain";
pub const NO_LANGUAGES: &str = "No languages";
pub const NO_BORDERS: &str = "No bordering countries";
pub const UNKNOWN_POPULATION: &str = "Unknown";
pub const DEFAULT_FLAG_ALT: &str = "Country flag";

/// A bordering country as shown in the view, with its navigation path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BorderLink {
    pub name: String,
    pub path: String,
}

impl BorderLink {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let path = path_for(&name);
        Self { name, path }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryView {
    pub title: String,
    pub description: String,
    pub official_name: String,
    pub native_name: String,
    pub capital: String,
    pub population: String,
    pub region: String,
    pub subregion: String,
    pub currency: String,
    pub domain: String,
    pub languages: String,
    pub flag_url: String,
    pub flag_alt: String,
    pub border_codes: Vec<String>,
    pub borders: Vec<BorderLink>,
}

impl CountryView {
    /// View with no resolved borders yet; see [`Self::with_borders`].
    pub fn from_record(record: &CountryRecord) -> Self {
        let common = record.common_name().to_string();
        let languages = record.languages();

        Self {
            description: format!("A handful of information about the country {common}."),
            title: common,
            official_name: record.official_name().to_string(),
            native_name: record
                .native_name()
                .filter(|n| !n.is_empty())
                .unwrap_or(NO_NATIVE_NAME)
                .to_string(),
            capital: if record.capitals().is_empty() {
                NO_CAPITAL.to_string()
            } else {
                record.capitals().join(", ")
            },
            population: record
                .population
                .map(group_thousands)
                .unwrap_or_else(|| UNKNOWN_POPULATION.to_string()),
            region: record.region.clone(),
            subregion: record.subregion.clone(),
            currency: record
                .currency()
                .filter(|c| !c.is_empty())
                .unwrap_or(NO_CURRENCY)
                .to_string(),
            domain: record.domain().unwrap_or(NO_DOMAIN).to_string(),
            languages: if languages.is_empty() {
                NO_LANGUAGES.to_string()
            } else {
                languages.join(", ")
            },
            flag_url: record.flags.png.clone(),
            flag_alt: record
                .flags
                .alt
                .as_deref()
                .filter(|a| !a.is_empty())
                .unwrap_or(DEFAULT_FLAG_ALT)
                .to_string(),
            border_codes: record.borders.clone(),
            borders: Vec::new(),
        }
    }

    /// Replace the resolved border list.
    pub fn with_borders<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.borders = names.into_iter().map(BorderLink::new).collect();
        self
    }

    pub fn borders_text(&self) -> String {
        if self.borders.is_empty() {
            NO_BORDERS.to_string()
        } else {
            self.borders
                .iter()
                .map(|b| b.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

impl fmt::Display for CountryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "Native Name: {}", self.native_name)?;
        writeln!(f, "Capital: {}", self.capital)?;
        writeln!(f, "Population: {}", self.population)?;
        writeln!(f, "Region: {}", self.region)?;
        writeln!(f, "Sub Region: {}", self.subregion)?;
        writeln!(f, "Currency: {}", self.currency)?;
        writeln!(f, "Domain: {}", self.domain)?;
        writeln!(f, "Languages: {}", self.languages)?;
        writeln!(f, "Flag: {} ({})", self.flag_url, self.flag_alt)?;
        if self.borders.is_empty() && !self.border_codes.is_empty() {
            // names not resolved yet
            write!(f, "Bordering Countries:")
        } else {
            write!(f, "Bordering Countries: {}", self.borders_text())
        }
    }
}

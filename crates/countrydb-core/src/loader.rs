// crates/countrydb-core/src/loader.rs

//! # Country Detail Loader
//!
//! Enumerates valid identifiers (done once, ahead of any view) and fetches
//! the full record behind one detail view.

use crate::client::CountryApi;
use crate::error::Result;
use crate::index::CountryIndex;
use crate::model::CountryRecord;
use crate::text::equals_folded;

/// Outcome of a detail fetch.
///
/// A missing country is a value, not an error, so a caller can render a
/// "page not found" state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(CountryRecord),
    NotFound,
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn found(self) -> Option<CountryRecord> {
        match self {
            Lookup::Found(record) => Some(record),
            Lookup::NotFound => None,
        }
    }
}

impl From<Option<CountryRecord>> for Lookup {
    fn from(record: Option<CountryRecord>) -> Self {
        record.map_or(Lookup::NotFound, Lookup::Found)
    }
}

#[derive(Debug, Clone)]
pub struct CountryLoader<A> {
    api: A,
}

impl<A: CountryApi> CountryLoader<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Common names of every country the service knows, in service order.
    ///
    /// Unlike detail fetches this propagates failures: without the list no
    /// path can be generated.
    pub async fn list_all_country_identifiers(&self) -> Result<Vec<String>> {
        let summaries = self.api.list_countries().await?;
        let identifiers: Vec<String> = summaries
            .into_iter()
            .map(|s| s.name.common)
            .filter(|name| !name.trim().is_empty())
            .collect();
        tracing::info!(count = identifiers.len(), "enumerated country identifiers");
        Ok(identifiers)
    }

    pub async fn build_index(&self) -> Result<CountryIndex> {
        Ok(CountryIndex::from_identifiers(
            self.list_all_country_identifiers().await?,
        ))
    }

    /// Fetch the record for `identifier` (a common name).
    ///
    /// Transport and decode failures are logged and reported as
    /// [`Lookup::NotFound`]. When the service returns several partial
    /// matches, the one whose common name equals `identifier` wins.
    pub async fn fetch_country_by_identifier(&self, identifier: &str) -> Lookup {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Lookup::NotFound;
        }

        match self.api.fetch_by_name(identifier).await {
            Ok(records) => pick_record(records, identifier).into(),
            Err(e) if e.is_not_found() => {
                tracing::debug!(identifier, "no country matches");
                Lookup::NotFound
            }
            Err(e) => {
                tracing::warn!(identifier, error = %e, "country fetch failed");
                Lookup::NotFound
            }
        }
    }

    /// Like [`Self::fetch_country_by_identifier`], but identifiers absent
    /// from `index` are not-found without a request.
    pub async fn fetch_indexed(&self, index: &CountryIndex, query: &str) -> Lookup {
        match index.resolve(query) {
            Some(identifier) => self.fetch_country_by_identifier(identifier).await,
            None => {
                tracing::debug!(query, "identifier not in index");
                Lookup::NotFound
            }
        }
    }
}

fn pick_record(records: Vec<CountryRecord>, identifier: &str) -> Option<CountryRecord> {
    let exact = records
        .iter()
        .position(|r| equals_folded(r.common_name(), identifier))
        .unwrap_or(0);
    records.into_iter().nth(exact)
}

// crates/countrydb-core/src/client.rs

//! # REST client
//!
//! The three call shapes the system makes against the country-data service,
//! behind the [`CountryApi`] trait so the loader and the border resolver can
//! run against a scripted API in tests.

use crate::config::ClientConfig;
use crate::error::{CountryError, Result};
use crate::model::raw::OneOrMany;
use crate::model::{CountryRecord, CountrySummary};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::future::Future;

/// `fields` projection for identifier enumeration.
pub const LIST_FIELDS: &str = "name";
/// `fields` projection for a detail record.
pub const DETAIL_FIELDS: &str =
    "name,cioc,capital,borders,region,subregion,tld,currencies,flags,population,languages";
/// `fields` projection for a border-name lookup.
pub const BORDER_FIELDS: &str = "name";

/// Read-only access to the country-data service.
///
/// Futures are `Send` so border runs can be spawned on any tokio runtime.
pub trait CountryApi: Send + Sync {
    /// `GET /all?fields=name`.
    fn list_countries(&self) -> impl Future<Output = Result<Vec<CountrySummary>>> + Send;

    /// `GET /name/{name}?fields=...`. The service matches partially, so more
    /// than one record may come back. A 404 is [`CountryError::NotFound`].
    fn fetch_by_name(&self, name: &str) -> impl Future<Output = Result<Vec<CountryRecord>>> + Send;

    /// `GET /alpha/{code}?fields=name`, reduced to the common name.
    fn fetch_name_by_code(&self, code: &str) -> impl Future<Output = Result<String>> + Send;
}

/// [`CountryApi`] over HTTP with `reqwest`.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    http: reqwest::Client,
    base: Url,
}

impl RestCountriesClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| CountryError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        if base.cannot_be_a_base() {
            return Err(CountryError::InvalidUrl(config.base_url));
        }

        let mut builder =
            reqwest::Client::builder().user_agent(concat!("countrydb/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `{base}/{segments...}?fields={fields}`, with each segment
    /// percent-encoded (`United States` -> `United%20States`).
    pub fn endpoint(&self, segments: &[&str], fields: &str) -> Url {
        let mut url = self.base.clone();
        // `new` rejects cannot-be-a-base URLs, so path segments are always available.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.query_pairs_mut().append_pair("fields", fields);
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, subject: &str) -> Result<T> {
        tracing::debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(CountryError::NotFound(subject.to_string()));
        }
        let body = response.error_for_status()?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl CountryApi for RestCountriesClient {
    async fn list_countries(&self) -> Result<Vec<CountrySummary>> {
        let url = self.endpoint(&["all"], LIST_FIELDS);
        self.get_json(url, "all countries").await
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Vec<CountryRecord>> {
        let url = self.endpoint(&["name", name], DETAIL_FIELDS);
        let body: OneOrMany<CountryRecord> = self.get_json(url, name).await?;
        Ok(body.into_vec())
    }

    async fn fetch_name_by_code(&self, code: &str) -> Result<String> {
        let url = self.endpoint(&["alpha", code], BORDER_FIELDS);
        let body: OneOrMany<CountrySummary> = self.get_json(url, code).await?;
        body.into_first()
            .map(|summary| summary.name.common)
            .filter(|common| !common.is_empty())
            .ok_or_else(|| CountryError::InvalidData(format!("no name returned for {code}")))
    }
}

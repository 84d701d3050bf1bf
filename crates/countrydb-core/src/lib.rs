// crates/countrydb-core/src/lib.rs

//! # countrydb-core
//!
//! Read-only client for the [REST Countries](https://restcountries.com)
//! service.
//!
//! - [`loader::CountryLoader`] enumerates identifiers and fetches one
//!   [`CountryRecord`] per view, surfacing a missing country as
//!   [`Lookup::NotFound`] instead of an error.
//! - [`resolver::BorderResolver`] turns a record's border codes into display
//!   names, one request at a time, publishing each name as soon as it
//!   arrives.
//! - [`view::CountryView`] derives the display strings (native name,
//!   currency, languages, ...) with their fallback text.
//!
//! ```no_run
//! use countrydb_core::prelude::*;
//!
//! # async fn run() -> countrydb_core::Result<()> {
//! let api = RestCountriesClient::new(ClientConfig::default())?;
//! let loader = CountryLoader::new(api.clone());
//!
//! if let Lookup::Found(record) = loader.fetch_country_by_identifier("Austria").await {
//!     let names = resolve_borders(&api, &record.borders, |name| println!("+ {name}")).await;
//!     println!("{}", CountryView::from_record(&record).with_borders(names));
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
pub mod resolver;
pub mod text;
pub mod view;

pub mod prelude;

// Re-exports
pub use crate::client::{CountryApi, RestCountriesClient};
pub use crate::config::ClientConfig;
pub use crate::error::{CountryError, Result};
pub use crate::index::CountryIndex;
pub use crate::loader::{CountryLoader, Lookup};
pub use crate::model::{CountryRecord, CountrySummary};
pub use crate::resolver::{resolve_borders, BorderResolver, BorderSnapshot, RunId};
pub use crate::view::CountryView;

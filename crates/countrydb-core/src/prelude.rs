// crates/countrydb-core/src/prelude.rs
pub use crate::client::{CountryApi, RestCountriesClient};
pub use crate::config::ClientConfig;
pub use crate::error::{CountryError, Result};
pub use crate::index::CountryIndex;
pub use crate::loader::{CountryLoader, Lookup};
pub use crate::model::CountryRecord;
pub use crate::resolver::{resolve_borders, BorderResolver, BorderSnapshot, RunId};
pub use crate::view::CountryView;

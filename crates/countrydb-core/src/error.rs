// crates/countrydb-core/src/error.rs
use thiserror::Error;

/// Result type for countrydb operations.
pub type Result<T> = std::result::Result<T, CountryError>;

/// Errors raised while talking to the country-data service.
///
/// Only [`CountryError::NotFound`] describes the data itself; every other
/// variant is a transient fetch failure (transport, status or decoding).
#[derive(Debug, Error)]
pub enum CountryError {
    /// No record matches the requested identifier.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Transport failure or non-success HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Body could not be decoded into the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured base URL cannot carry path segments.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Body decoded but is missing data the caller needs.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl CountryError {
    /// `true` for [`CountryError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, CountryError::NotFound(_))
    }
}

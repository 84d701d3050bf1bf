// crates/countrydb-core/src/model/mod.rs
pub mod raw;
pub mod record;

pub use record::{CountryName, CountryRecord, CountrySummary, Currency, Flags, NativeName};

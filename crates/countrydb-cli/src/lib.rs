//! countrydb-cli
//! =============
//!
//! Command-line interface for the `countrydb-core` REST Countries client.
//!
//! This crate primarily provides a binary (`countrydb`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Basic usage:
//!
//! ```text
//! countrydb --help
//! countrydb countries
//! countrydb country Austria
//! countrydb borders DEU CHE ITA
//! ```
//!
//! For programmatic access use the [`countrydb-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.

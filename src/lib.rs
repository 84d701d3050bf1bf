//! countrydb-rs
//! ============
//!
//! Workspace facade. Re-exports [`countrydb_core`] so the demos under
//! `demos/` can be run from the workspace root:
//!
//! ```text
//! cargo run --example basic_usage
//! cargo run --example error_handling
//! ```

pub use countrydb_core::*;

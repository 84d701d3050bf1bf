//! Error handling example for countrydb-rs
//!
//! Demonstrates the not-found state and tolerant border resolution.

use countrydb_core::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== countrydb-rs Error Handling Example ===\n");

    // Example 1: invalid configuration is an error up front
    println!("--- Example 1: Invalid base URL ---");
    match RestCountriesClient::new(ClientConfig::default().with_base_url("not a url")) {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(e) => println!("  rejected: {e}"),
    }
    println!();

    let api = RestCountriesClient::new(ClientConfig::from_env())?;
    let loader = CountryLoader::new(api.clone());

    // Example 2: unknown countries are a value, not an error
    println!("--- Example 2: Non-existent country ---");
    for name in ["Atlantis", "", "Germany"] {
        match loader.fetch_country_by_identifier(name).await {
            Lookup::Found(record) => println!("  Found: {}", record.common_name()),
            Lookup::NotFound => println!("  Not found: {name:?}"),
        }
    }
    println!();

    // Example 3: failed border lookups are skipped
    println!("--- Example 3: Border codes with invalid entries ---");
    let names = resolve_borders(&api, &["DEU", "XXX", "AUT"], |_| {}).await;
    println!("  resolved: {names:?}");

    // Example 4: direct client errors keep their type
    println!("--- Example 4: Typed client errors ---");
    match api.fetch_name_by_code("XXX").await {
        Ok(name) => println!("  XXX is {name}"),
        Err(e) if e.is_not_found() => println!("  XXX: {e}"),
        Err(e) => println!("  XXX failed in transit: {e}"),
    }

    Ok(())
}

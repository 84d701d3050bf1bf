//! Basic usage example for countrydb-rs
//!
//! Fetches one country, prints its details, then resolves its neighbours
//! one request at a time.

use countrydb_core::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    println!("=== countrydb-rs Basic Usage ===\n");

    let api = RestCountriesClient::new(ClientConfig::from_env())?;
    let loader = CountryLoader::new(api.clone());

    // Example 1: enumerate identifiers
    println!("--- Example 1: Enumerating countries ---");
    let index = loader.build_index().await?;
    println!("  {} countries known", index.len());
    for path in index.paths().take(5) {
        println!("  {path}");
    }
    println!();

    // Example 2: a detail view
    println!("--- Example 2: Country details ---");
    let Lookup::Found(record) = loader.fetch_country_by_identifier("Austria").await else {
        println!("  Austria not found");
        return Ok(());
    };
    println!("{}", CountryView::from_record(&record));
    println!();

    // Example 3: neighbours, printed as they arrive
    println!("--- Example 3: Bordering countries ---");
    let names = resolve_borders(&api, &record.borders, |name| println!("  + {name}")).await;
    println!("  {} of {} resolved", names.len(), record.borders.len());

    Ok(())
}

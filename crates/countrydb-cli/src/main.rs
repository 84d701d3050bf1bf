//! countrydb: command-line interface for countrydb-core
//!
//! Browse country details from the REST Countries service in the terminal.
//!
//! Usage examples
//! --------------
//!
//! - List every country, or every detail-view path
//!   $ countrydb countries
//!   $ countrydb paths
//!
//! - Show details for a country; bordering countries are printed as their
//!   names arrive
//!   $ countrydb country Austria
//!   $ countrydb --json country "United States"
//!
//! - Resolve border codes directly
//!   $ countrydb borders DEU CHE ITA
//!
//! Configuration
//! -------------
//!
//! `--base-url` / `--timeout` override `COUNTRYDB_BASE_URL` /
//! `COUNTRYDB_TIMEOUT_SECS`. Logs go to stderr; tune them with `RUST_LOG`
//! (e.g. `RUST_LOG=countrydb_core=debug`).
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use countrydb_core::prelude::*;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "countrydb=info,countrydb_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    let mut config = ClientConfig::from_env();
    if let Some(url) = args.base_url {
        config = config.with_base_url(url);
    }
    if let Some(secs) = args.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let api = RestCountriesClient::new(config).context("invalid client configuration")?;
    let loader = CountryLoader::new(api.clone());

    match args.command {
        Commands::Countries => {
            let ids = loader.list_all_country_identifiers().await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&ids)?);
            } else {
                for id in ids {
                    println!("{id}");
                }
            }
        }

        Commands::Paths => {
            let index = loader.build_index().await?;
            let paths: Vec<String> = index.paths().collect();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&paths)?);
            } else {
                for p in paths {
                    println!("{p}");
                }
            }
        }

        Commands::Country { name, strict } => {
            let lookup = if strict {
                let index = loader.build_index().await?;
                loader.fetch_indexed(&index, &name).await
            } else {
                loader.fetch_country_by_identifier(&name).await
            };
            let Lookup::Found(record) = lookup else {
                bail!("No country found for: {name}");
            };

            let view = CountryView::from_record(&record);
            if !args.json {
                println!("{view}");
            }

            let names = stream_borders(api, &record.borders, !args.json).await;
            let view = view.with_borders(names);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else if view.borders.is_empty() && !record.borders.is_empty() {
                println!("  ({})", countrydb_core::view::NO_BORDERS);
            }
        }

        Commands::Borders { codes } => {
            let names = resolve_borders(&api, &codes, |name| {
                if !args.json {
                    println!("{name}");
                }
            })
            .await;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&names)?);
            }
        }
    }

    Ok(())
}

/// Run a [`BorderResolver`] over `codes`, printing each name (with its
/// navigation path) as soon as it is published.
async fn stream_borders(api: RestCountriesClient, codes: &[String], print: bool) -> Vec<String> {
    let mut resolver = BorderResolver::new(api);
    let mut updates = resolver.subscribe();
    let run = resolver.resolve(codes);

    let mut printed = 0;
    loop {
        let snapshot = updates.borrow_and_update().clone();
        if snapshot.run == run {
            if print {
                for name in &snapshot.names[printed..] {
                    println!("  - {name} ({})", countrydb_core::index::path_for(name));
                }
            }
            printed = snapshot.names.len();
            if snapshot.is_finished() {
                if snapshot.failed() > 0 {
                    tracing::info!(failed = snapshot.failed(), "some border countries could not be resolved");
                }
                return snapshot.names;
            }
        }
        if updates.changed().await.is_err() {
            return resolver.names();
        }
    }
}

use clap::{Parser, Subcommand};

/// CLI arguments for countrydb-cli
#[derive(Debug, Parser)]
#[command(
    name = "countrydb",
    version,
    about = "CLI for browsing country details and bordering countries from the REST Countries service"
)]
pub struct CliArgs {
    /// Service root (default: $COUNTRYDB_BASE_URL or https://restcountries.com/v3.1)
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds (default: $COUNTRYDB_TIMEOUT_SECS or none; 0 disables)
    #[arg(long = "timeout", global = true)]
    pub timeout: Option<u64>,

    /// Print JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the common name of every country
    Countries,

    /// List the detail-view path of every country
    Paths,

    /// Show details for a country by common name, resolving its borders
    Country {
        /// Common name (e.g. Germany, "United States")
        name: String,

        /// Only accept names from the enumerated country list
        #[arg(long = "strict")]
        strict: bool,
    },

    /// Resolve alpha codes to country names, in order
    Borders {
        /// Alpha-2 or alpha-3 codes (e.g. DEU AUT CHE)
        #[arg(required = true)]
        codes: Vec<String>,
    },
}

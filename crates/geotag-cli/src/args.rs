use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for geotag-cli
#[derive(Debug, Parser)]
#[command(
    name = "geotag",
    version,
    about = "Annotate a headline corpus with gazetteer-matched cities and countries"
)]
pub struct CliArgs {
    /// Directory holding cities.json / countries.json (default: the data
    /// dir bundled with geotag-core)
    #[arg(short = 'd', long = "data", global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full pipeline and write the spreadsheet
    Annotate {
        /// Headline corpus, one headline per line
        #[arg(long, default_value = "data/headlines.txt")]
        headlines: PathBuf,

        /// Output spreadsheet path
        #[arg(long, default_value = "headlines_city_country.xlsx")]
        output: PathBuf,

        /// State-city cache location (read if present, else built)
        #[arg(long, default_value = "us_states_cities.bin")]
        cache: PathBuf,

        /// Number of sample rows to print
        #[arg(long, default_value_t = 5)]
        sample: usize,
    },

    /// Rebuild the US state -> cities cache via reverse geocoding
    BuildStates {
        /// Where to write the cache
        #[arg(long, default_value = "us_states_cities.bin")]
        cache: PathBuf,
    },

    /// Show gazetteer and alias-index counts
    Stats,

    /// Match a single headline and print the result
    Locate {
        /// The headline text
        headline: String,

        /// State-city cache to use for the state fallback
        #[arg(long, default_value = "us_states_cities.bin")]
        cache: PathBuf,
    },
}

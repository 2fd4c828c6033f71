//! geotag-cli — Command-line interface for geotag-core
//!
//! This binary wraps the headline annotation pipeline: load a gazetteer,
//! derive the city-alias index, load (or build) the reverse-geocoded map
//! of US states to their cities, match every headline, and write the
//! results to a spreadsheet.
//!
//! Usage examples
//! --------------
//!
//! - Annotate a corpus
//!   $ geotag-cli annotate --headlines data/headlines.txt
//!
//! - Rebuild the state-city cache (slow: one reverse-geocode call per
//!   US city; needs the 'builder' feature)
//!   $ geotag-cli build-states
//!
//! - Inspect the gazetteer
//!   $ geotag-cli stats
//!
//! - Try a single headline
//!   $ geotag-cli locate "Zika Outbreak Hits Miami"
//!
//! Data source
//! -----------
//!
//! By default the gazetteer bundled with `geotag-core` is used. Point
//! `--data <dir>` at a directory with your own geonames-style
//! `cities.json[.gz]` / `countries.json[.gz]` pair.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use geotag_core::{
    annotate, load_state_cache, normalize_headline, read_headlines, AliasIndex, Gazetteer,
    GeoTagError, HeadlineMatch, Matcher, StateCityMap,
};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let gazetteer = match &args.data {
        Some(dir) => Gazetteer::load_from_dir(dir)?,
        None => Gazetteer::load()?,
    };

    match args.command {
        Commands::Annotate {
            headlines,
            output,
            cache,
            sample,
        } => {
            let corpus = read_headlines(&headlines)?;
            let index = AliasIndex::build(&gazetteer);
            let states = load_or_build_states(&gazetteer, &cache)?;
            let matcher = Matcher::new(index, states)?;

            let report = annotate(&corpus, &matcher);

            println!("Sample of headlines with city & country:");
            for row in report.sample(sample) {
                println!("{} -- City/Country: {} / {}", row.headline, row.city, row.country);
            }

            if report.not_found > 0 {
                println!();
                println!(
                    "Headlines with no city or country match: {}",
                    report.not_found
                );
                for row in report.sample_unmatched(sample) {
                    println!("- {}", row.headline);
                }
            }

            report.write_xlsx(&output)?;
            println!();
            println!("Wrote {} rows to {}", report.rows.len(), output.display());
        }

        Commands::BuildStates { cache } => {
            let states = build_states(&gazetteer, &cache)?;
            println!("Cached {} states to {}", states.len(), cache.display());
        }

        Commands::Stats => {
            let stats = gazetteer.stats();
            let index = AliasIndex::build(&gazetteer);
            println!("Gazetteer statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Cities: {}", stats.cities);
            println!("  US cities: {}", stats.us_cities);
            println!("  City aliases: {}", index.len());
        }

        Commands::Locate { headline, cache } => {
            let headline = normalize_headline(&headline);
            let index = AliasIndex::build(&gazetteer);
            let states = match load_state_cache(&cache) {
                Ok(map) => map,
                Err(GeoTagError::CacheMissing(_)) => StateCityMap::new(),
                Err(e) => return Err(e.into()),
            };
            let matcher = Matcher::new(index, states)?;

            match matcher.locate(&headline) {
                HeadlineMatch::City { city, country } => {
                    println!("{headline} -- City/Country: {city} / {country}");
                }
                HeadlineMatch::State { state, cities } => {
                    println!("{headline} -- US state {state}: {}", cities.join(", "));
                }
                HeadlineMatch::NotFound => {
                    println!("{headline} -- no match");
                }
            }
        }
    }

    Ok(())
}

/// Read the cache when present; otherwise build and save it.
fn load_or_build_states(gazetteer: &Gazetteer, cache: &Path) -> anyhow::Result<StateCityMap> {
    match load_state_cache(cache) {
        Ok(states) => Ok(states),
        Err(GeoTagError::CacheMissing(_)) => build_states(gazetteer, cache),
        Err(e) => Err(e).with_context(|| format!("reading state cache {}", cache.display())),
    }
}

#[cfg(feature = "builder")]
fn build_states(gazetteer: &Gazetteer, cache: &Path) -> anyhow::Result<StateCityMap> {
    use geotag_core::geocode::{build_state_city_map, ReverseGeocoder};
    use geotag_core::save_state_cache;

    println!("Building the US state-city map; one reverse-geocode call per US city, this takes a while.");
    let geocoder = ReverseGeocoder::new()?;
    let states = build_state_city_map(gazetteer, &geocoder);
    save_state_cache(cache, &states)?;
    Ok(states)
}

#[cfg(not(feature = "builder"))]
fn build_states(_gazetteer: &Gazetteer, cache: &Path) -> anyhow::Result<StateCityMap> {
    anyhow::bail!(
        "state cache {} is missing and geotag-cli was built without the 'builder' feature",
        cache.display()
    )
}

// crates/geotag-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file I/O, decompression) for the gazetteer,
//! the headline corpus, and the state-city cache.

use crate::error::{GeoTagError, Result};
use crate::model::{build_gazetteer, Gazetteer};
use crate::raw::{CitiesRaw, CountriesRaw};
use crate::text::normalize_headline;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

mod state_cache;
pub use state_cache::{load_state_cache, save_state_cache, StateCityMap};

static GAZETTEER_CACHE: OnceCell<Gazetteer> = OnceCell::new();

pub const CITIES_FILE: &str = "cities.json";
pub const COUNTRIES_FILE: &str = "countries.json";

impl Gazetteer {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// Load the bundled gazetteer, memoized for the process lifetime.
    pub fn load() -> Result<Self> {
        GAZETTEER_CACHE
            .get_or_try_init(|| Self::load_from_dir(Self::default_data_dir()))
            .cloned()
    }

    /// Parse `cities.json[.gz]` and `countries.json[.gz]` from a directory.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let cities: CitiesRaw = read_json(&locate_file(dir, CITIES_FILE)?)?;
        let countries: CountriesRaw = read_json(&locate_file(dir, COUNTRIES_FILE)?)?;
        Ok(build_gazetteer(cities, countries))
    }
}

/// Read the headline corpus: one headline per line, normalized
/// (`Saint` -> `St.`, trimmed). Blank lines are skipped.
pub fn read_headlines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        GeoTagError::NotFound(format!("headline corpus not found at {}: {}", path.display(), e))
    })?;

    let mut headlines = Vec::new();
    for line in BufReader::new(file).lines() {
        let headline = normalize_headline(&line?);
        if !headline.is_empty() {
            headlines.push(headline);
        }
    }
    Ok(headlines)
}

// -----------------------------------------------------------------------
// INTERNAL TRANSPORT HELPERS
// -----------------------------------------------------------------------

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the
/// extension says so. Returns a generic reader so callers don't care
/// about the compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GeoTagError::NotFound(format!("dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    if path.extension().is_some_and(|ext| ext == "gz") {
        return Ok(Box::new(flate2::read::GzDecoder::new(reader)));
    }

    Ok(Box::new(reader))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = open_stream(path)?;
    serde_json::from_reader(reader).map_err(GeoTagError::Json)
}

/// Prefer the plain file; fall back to the `.gz` twin under `compact`.
fn locate_file(dir: &Path, name: &str) -> Result<PathBuf> {
    let plain = dir.join(name);
    if plain.is_file() {
        return Ok(plain);
    }

    #[cfg(feature = "compact")]
    {
        let gz = dir.join(format!("{name}.gz"));
        if gz.is_file() {
            return Ok(gz);
        }
    }

    Err(GeoTagError::NotFound(format!(
        "gazetteer file {} not found in {}",
        name,
        dir.display()
    )))
}

// crates/geotag-core/src/loader/state_cache.rs

//! Disk cache for the reverse-geocoded US state -> cities map.
//!
//! Building the map costs one network round-trip per US city, so the
//! result is serialized with bincode (gzipped under `compact`) and reused
//! on every later run.

use crate::error::{GeoTagError, Result};
use bincode::Options;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// US state name -> names of the gazetteer cities located in it.
pub type StateCityMap = HashMap<String, Vec<String>>;

/// Deserialization cap; the real map is a few hundred kilobytes.
const CACHE_LIMIT_BYTES: u64 = 64 * 1024 * 1024;

fn cache_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(CACHE_LIMIT_BYTES)
        .allow_trailing_bytes()
}

/// Read a previously saved state-city map.
///
/// A missing file is reported as [`GeoTagError::CacheMissing`] so callers
/// can decide to rebuild; any other failure propagates as-is.
pub fn load_state_cache(path: impl AsRef<Path>) -> Result<StateCityMap> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(GeoTagError::CacheMissing(path.display().to_string()));
    }

    let reader = BufReader::new(File::open(path)?);

    #[cfg(feature = "compact")]
    let mut reader: Box<dyn Read> = Box::new(flate2::read::GzDecoder::new(reader));
    #[cfg(not(feature = "compact"))]
    let mut reader: Box<dyn Read> = Box::new(reader);

    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let map = cache_options().deserialize(&data)?;
    Ok(map)
}

/// Serialize the state-city map to disk.
pub fn save_state_cache(path: impl AsRef<Path>, map: &StateCityMap) -> Result<()> {
    let writer = BufWriter::new(File::create(path.as_ref())?);

    #[cfg(feature = "compact")]
    let mut writer: Box<dyn Write> = Box::new(flate2::write::GzEncoder::new(
        writer,
        flate2::Compression::default(),
    ));
    #[cfg(not(feature = "compact"))]
    let mut writer: Box<dyn Write> = Box::new(writer);

    cache_options().serialize_into(&mut writer, map)?;
    writer.flush()?;
    Ok(())
}

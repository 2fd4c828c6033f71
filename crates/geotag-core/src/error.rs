// crates/geotag-core/src/error.rs

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GeoTagError>;

/// All failure modes of the annotation pipeline.
///
/// Reverse-geocoding lookups are deliberately *not* represented here:
/// a failed lookup drops the city from the state map and is never an error.
#[derive(Debug, Error)]
pub enum GeoTagError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("state-city cache missing at {0}; run `geotag-cli build-states` first")]
    CacheMissing(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("gazetteer JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cache codec error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("search pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[cfg(feature = "builder")]
    #[error("geocoder HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

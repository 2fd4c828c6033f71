// crates/geotag-core/src/lib.rs

//! Gazetteer-backed location extraction for headline corpora.
//!
//! The pipeline is linear: load a gazetteer, derive an alias index
//! (accent-stripped and suffix-stripped name variants included), compile
//! alternation patterns, then annotate each headline with its best-guess
//! city and country. A one-time reverse-geocoded map from US states to
//! their cities backs the state fallback and is cached to disk.

pub mod alias;
pub mod error;
#[cfg(feature = "builder")]
pub mod geocode;
pub mod loader;
pub mod matcher;
pub mod model;
pub mod report;
pub mod text;
// Raw gazetteer input (mirrors the external dataset)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::error::{GeoTagError, Result};

pub use crate::alias::AliasIndex;
pub use crate::loader::{load_state_cache, read_headlines, save_state_cache, StateCityMap};
pub use crate::matcher::{HeadlineMatch, Matcher, US_COUNTRY_NAME};
pub use crate::model::{City, Country, Gazetteer, GazetteerStats};
pub use crate::report::{annotate, AnnotationReport, ResultRow};
pub use crate::text::{normalize_headline, strip_accents};

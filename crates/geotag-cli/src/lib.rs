//! geotag-cli
//! ==========
//!
//! Command-line interface for the `geotag-core` headline annotation
//! pipeline.
//!
//! This crate primarily provides a binary (`geotag-cli`). We include a
//! small library target so that docs.rs renders a documentation page and
//! shows this overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! ```text
//! geotag-cli --help
//! geotag-cli annotate --headlines data/headlines.txt
//! geotag-cli locate "Zika Outbreak Hits Miami"
//! ```
//!
//! For programmatic access to the gazetteer, matcher, and reporter, use
//! the `geotag-core` crate directly.

// This library target intentionally exposes no API; the binary is the
// primary deliverable.

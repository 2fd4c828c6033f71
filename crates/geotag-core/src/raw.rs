// crates/geotag-core/src/raw.rs

use serde::Deserialize;
use std::collections::HashMap;

/// Raw city entry as it comes from a geonames-style `cities.json`:
/// a map keyed by geonameid, values like
/// `{"name": "Cali", "countrycode": "CO", "latitude": 3.43722,
///   "longitude": -76.5225, "population": 2392877, "timezone": "America/Bogota"}`
#[derive(Debug, Deserialize)]
pub struct CityRaw {
    pub name: String,
    pub countrycode: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub admin1code: Option<String>,
}

/// Raw country entry from `countries.json`, keyed by ISO2 code.
/// NOTE: This type mirrors the external dataset and may be subject to that
/// dataset's license. We do *not* expose this type from the public API.
#[derive(Debug, Deserialize)]
pub struct CountryRaw {
    pub name: String,
    pub iso: String,
    #[serde(default)]
    pub iso3: Option<String>,
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(default)]
    pub population: Option<i64>,
    #[serde(default)]
    pub continentcode: Option<String>,
    #[serde(default)]
    pub currencycode: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub areakm2: Option<f64>,
}

pub type CitiesRaw = HashMap<String, CityRaw>;
pub type CountriesRaw = HashMap<String, CountryRaw>;

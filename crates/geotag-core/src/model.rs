// crates/geotag-core/src/model.rs

use crate::raw::{CitiesRaw, CountriesRaw};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A city in the normalized gazetteer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    /// ISO2 code of the owning country, e.g. "US".
    pub country_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub population: u64,
    pub timezone: Option<String>,
}

/// A country entry in the normalized gazetteer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Country {
    pub iso2: String,
    pub name: String,
    pub iso3: Option<String>,
    pub capital: Option<String>,
    pub population: Option<i64>,
    pub continent: Option<String>,
}

/// Top-level gazetteer: every known city plus the country reference table.
#[derive(Clone, Debug, Default)]
pub struct Gazetteer {
    /// Sorted by (name, population desc) so collision handling downstream
    /// is deterministic regardless of source map iteration order.
    pub cities: Vec<City>,
    /// Keyed by ISO2 code.
    pub countries: HashMap<String, Country>,
}

/// Simple aggregate statistics for the gazetteer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GazetteerStats {
    pub countries: usize,
    pub cities: usize,
    pub us_cities: usize,
}

/// Convert raw JSON maps into a [`Gazetteer`].
pub fn build_gazetteer(cities: CitiesRaw, countries: CountriesRaw) -> Gazetteer {
    let countries: HashMap<String, Country> = countries
        .into_values()
        .map(|c| {
            let country = Country {
                iso2: c.iso.clone(),
                name: c.name,
                iso3: c.iso3,
                capital: c.capital,
                population: c.population,
                continent: c.continentcode,
            };
            (c.iso, country)
        })
        .collect();

    let mut cities: Vec<City> = cities
        .into_values()
        .map(|c| City {
            name: c.name,
            country_code: c.countrycode,
            latitude: c.latitude,
            longitude: c.longitude,
            population: c.population,
            timezone: c.timezone,
        })
        .collect();
    cities.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then_with(|| b.population.cmp(&a.population))
    });

    Gazetteer { cities, countries }
}

impl Gazetteer {
    pub fn stats(&self) -> GazetteerStats {
        GazetteerStats {
            countries: self.countries.len(),
            cities: self.cities.len(),
            us_cities: self.us_cities().count(),
        }
    }

    /// All cities in the gazetteer.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Resolve an ISO2 code to the country's display name, case-insensitive.
    pub fn country_name(&self, iso2: &str) -> Option<&str> {
        self.countries
            .get(iso2)
            .or_else(|| {
                self.countries
                    .values()
                    .find(|c| c.iso2.eq_ignore_ascii_case(iso2))
            })
            .map(|c| c.name.as_str())
    }

    /// Cities located in the United States (the state-cache build set).
    pub fn us_cities(&self) -> impl Iterator<Item = &City> {
        self.cities.iter().filter(|c| c.is_us())
    }
}

impl City {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_us(&self) -> bool {
        self.country_code.eq_ignore_ascii_case("US")
    }
}

impl Country {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn iso2(&self) -> &str {
        &self.iso2
    }
}

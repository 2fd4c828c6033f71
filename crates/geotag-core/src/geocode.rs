// crates/geotag-core/src/geocode.rs
#![cfg(feature = "builder")]

//! Reverse geocoding for the state-cache build.
//!
//! Each US gazetteer city is resolved to its state via the Nominatim
//! reverse endpoint. Lookups that fail for any reason (transport, HTTP
//! status, response shape, absent `state` field) yield `None` and the
//! city is dropped from the map; a partial map is still useful and the
//! build never aborts over one bad coordinate pair.

use crate::error::Result;
use crate::loader::StateCityMap;
use crate::model::Gazetteer;
use serde::Deserialize;

pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/reverse";

const USER_AGENT: &str = concat!("geotag-core/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Default, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: ReverseAddress,
}

#[derive(Debug, Default, Deserialize)]
struct ReverseAddress {
    #[serde(default)]
    state: Option<String>,
}

/// Blocking client around the Nominatim reverse endpoint.
pub struct ReverseGeocoder {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl ReverseGeocoder {
    pub fn new() -> Result<Self> {
        Self::with_endpoint(NOMINATIM_URL)
    }

    /// Point the geocoder at a different endpoint (self-hosted Nominatim,
    /// or a stub server in tests).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(ReverseGeocoder {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// The state name at a coordinate pair, or `None` on any failure.
    pub fn state_at(&self, latitude: f64, longitude: f64) -> Option<String> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
            ])
            .send()
            .ok()?;
        let body = response.text().ok()?;
        let parsed: ReverseResponse = serde_json::from_str(&body).ok()?;
        parsed.address.state.filter(|s| !s.is_empty())
    }
}

/// Reverse-geocode every US city and group the survivors by state.
///
/// One network call per city; callers are expected to cache the result
/// with [`crate::loader::save_state_cache`].
pub fn build_state_city_map(gazetteer: &Gazetteer, geocoder: &ReverseGeocoder) -> StateCityMap {
    let mut map = StateCityMap::new();

    for (i, city) in gazetteer.us_cities().enumerate() {
        if let Some(state) = geocoder.state_at(city.latitude, city.longitude) {
            map.entry(state).or_default().push(city.name.clone());
        }
        if (i + 1) % 100 == 0 {
            println!("reverse-geocoded {} US cities...", i + 1);
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nominatim_reverse_payload() {
        let body = r#"{"place_id": 1, "address": {"city": "Miami",
                        "state": "Florida", "country_code": "us"}}"#;
        let parsed: ReverseResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.address.state.as_deref(), Some("Florida"));
    }

    #[test]
    fn missing_state_field_degrades_to_none() {
        let body = r#"{"address": {"city": "Singapore"}}"#;
        let parsed: ReverseResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.address.state, None);

        let body = r#"{"error": "Unable to geocode"}"#;
        let parsed: ReverseResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.address.state, None);
    }
}

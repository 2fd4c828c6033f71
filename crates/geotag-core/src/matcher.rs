// crates/geotag-core/src/matcher.rs

//! Headline matching: one alternation pattern over every city alias, one
//! over every US state name. City hits win; the state pattern is a
//! fallback that attributes the whole state's city list.

use crate::alias::AliasIndex;
use crate::error::Result;
use crate::loader::StateCityMap;
use regex::{Regex, RegexBuilder};

/// Country attributed to state-level matches.
pub const US_COUNTRY_NAME: &str = "United States";

/// The full alias alternation compiles to several megabytes.
const PATTERN_SIZE_LIMIT: usize = 64 * 1024 * 1024;

/// Outcome of matching one headline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlineMatch {
    /// A city alias matched; the longest hit wins.
    City { city: String, country: String },
    /// No city, but a US state name matched; carries the state's cities.
    /// The country is implicitly [`US_COUNTRY_NAME`].
    State { state: String, cities: Vec<String> },
    NotFound,
}

pub struct Matcher {
    city_re: Regex,
    state_re: Regex,
    index: AliasIndex,
    states: StateCityMap,
}

impl Matcher {
    /// Compile the search patterns from the alias index and the state map.
    pub fn new(index: AliasIndex, states: StateCityMap) -> Result<Self> {
        let city_re = alternation(index.aliases())?;
        let state_re = alternation(states.keys().map(|k| k.as_str()))?;
        Ok(Matcher {
            city_re,
            state_re,
            index,
            states,
        })
    }

    /// Locate the best-guess city or state in one normalized headline.
    ///
    /// When several aliases match, the longest match wins; equal lengths
    /// keep the first hit in scan order.
    pub fn locate(&self, headline: &str) -> HeadlineMatch {
        let mut best: Option<&str> = None;
        for m in self.city_re.find_iter(headline) {
            if best.map_or(true, |b| m.len() > b.len()) {
                best = Some(m.as_str());
            }
        }
        if let Some(alias) = best {
            if let Some(country) = self.index.country_of(alias) {
                return HeadlineMatch::City {
                    city: alias.to_string(),
                    country: country.to_string(),
                };
            }
        }

        if let Some(m) = self.state_re.find(headline) {
            if let Some(cities) = self.states.get(m.as_str()) {
                return HeadlineMatch::State {
                    state: m.as_str().to_string(),
                    cities: cities.clone(),
                };
            }
        }

        HeadlineMatch::NotFound
    }
}

/// Build a word-bounded alternation over literal names.
///
/// Branches are sorted longest-first so the leftmost match at any position
/// is also the longest one there; ties fall back to lexical order, which
/// keeps the compiled pattern deterministic.
fn alternation<'a>(names: impl Iterator<Item = &'a str>) -> Result<Regex> {
    let mut branches: Vec<&str> = names.collect();
    branches.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let body = branches
        .iter()
        .map(|n| regex::escape(n))
        .collect::<Vec<_>>()
        .join("|");

    // An empty alternation would match the empty string everywhere;
    // substitute a pattern that can never match.
    let pattern = if body.is_empty() {
        r"[^\s\S]".to_string()
    } else {
        format!(r"\b(?:{body})\b")
    };

    let re = RegexBuilder::new(&pattern)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()?;
    Ok(re)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{City, Country, Gazetteer};

    fn city(name: &str, cc: &str, pop: u64) -> City {
        City {
            name: name.to_string(),
            country_code: cc.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            population: pop,
            timezone: None,
        }
    }

    fn country(iso2: &str, name: &str) -> (String, Country) {
        (
            iso2.to_string(),
            Country {
                iso2: iso2.to_string(),
                name: name.to_string(),
                iso3: None,
                capital: None,
                population: None,
                continent: None,
            },
        )
    }

    fn matcher() -> Matcher {
        let gazetteer = Gazetteer {
            cities: vec![
                city("Paris", "FR", 2_100_000),
                city("York", "GB", 150_000),
                city("New York", "US", 8_400_000),
                city("São Paulo", "BR", 12_000_000),
                city("Miami", "US", 441_000),
            ],
            countries: [
                country("FR", "France"),
                country("GB", "United Kingdom"),
                country("US", "United States"),
                country("BR", "Brazil"),
            ]
            .into_iter()
            .collect(),
        };
        let index = AliasIndex::build(&gazetteer);

        let mut states = StateCityMap::new();
        states.insert(
            "Florida".to_string(),
            vec!["Miami".to_string(), "Orlando".to_string()],
        );
        Matcher::new(index, states).unwrap()
    }

    #[test]
    fn exact_alias_resolves_to_its_country() {
        let m = matcher();
        assert_eq!(
            m.locate("Flu outbreak spreads in Paris"),
            HeadlineMatch::City {
                city: "Paris".to_string(),
                country: "France".to_string(),
            }
        );
    }

    #[test]
    fn longest_alias_wins() {
        let m = matcher();
        // "New York" and "York" both occur; the longer one is taken.
        assert_eq!(
            m.locate("Measles cases confirmed in New York"),
            HeadlineMatch::City {
                city: "New York".to_string(),
                country: "United States".to_string(),
            }
        );
    }

    #[test]
    fn accented_and_stripped_variants_agree() {
        let m = matcher();
        let expected = HeadlineMatch::City {
            city: "Sao Paulo".to_string(),
            country: "Brazil".to_string(),
        };
        assert_eq!(m.locate("Dengue reported in Sao Paulo"), expected);

        match m.locate("Dengue reported in São Paulo") {
            HeadlineMatch::City { country, .. } => assert_eq!(country, "Brazil"),
            other => panic!("expected city match, got {other:?}"),
        }
    }

    #[test]
    fn state_fallback_returns_all_its_cities() {
        let m = matcher();
        assert_eq!(
            m.locate("Florida braces for hurricane season"),
            HeadlineMatch::State {
                state: "Florida".to_string(),
                cities: vec!["Miami".to_string(), "Orlando".to_string()],
            }
        );
    }

    #[test]
    fn city_hit_takes_precedence_over_state() {
        let m = matcher();
        // Both "Miami" and "Florida" appear; the city wins.
        assert_eq!(
            m.locate("Zika hits Miami as Florida responds"),
            HeadlineMatch::City {
                city: "Miami".to_string(),
                country: "United States".to_string(),
            }
        );
    }

    #[test]
    fn word_boundaries_block_partial_hits() {
        let m = matcher();
        assert_eq!(m.locate("Parisian fashion week opens"), HeadlineMatch::NotFound);
    }

    #[test]
    fn no_match_is_not_found() {
        let m = matcher();
        assert_eq!(m.locate("Nothing geographic here"), HeadlineMatch::NotFound);
    }

    #[test]
    fn empty_inputs_still_compile() {
        let m = Matcher::new(AliasIndex::default(), StateCityMap::new()).unwrap();
        assert_eq!(m.locate("Paris"), HeadlineMatch::NotFound);
    }
}

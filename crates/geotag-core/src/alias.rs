// crates/geotag-core/src/alias.rs

//! The alias index: every searchable city-name string mapped to a country.
//!
//! One city contributes up to four keys: the canonical name, the
//! accent-stripped form, and suffix-stripped variants of both. Collisions
//! between gazetteer entries are resolved by population: the more populous
//! source city keeps the key.

use crate::model::Gazetteer;
use crate::text::{strip_accents, suffix_variants};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct AliasEntry {
    country: String,
    population: u64,
}

/// City-alias string -> country name lookup.
#[derive(Debug, Default)]
pub struct AliasIndex {
    entries: HashMap<String, AliasEntry>,
}

impl AliasIndex {
    /// Build the index from every gazetteer city.
    ///
    /// Cities whose country code has no entry in the country table are
    /// skipped; an alias without a resolvable country is useless.
    pub fn build(gazetteer: &Gazetteer) -> Self {
        let mut index = AliasIndex::default();

        for city in gazetteer.cities() {
            let Some(country) = gazetteer.country_name(&city.country_code) else {
                continue;
            };

            index.insert(city.name.clone(), country, city.population);

            let stripped = strip_accents(&city.name);
            let has_stripped_form = stripped != city.name;
            if has_stripped_form {
                index.insert(stripped.clone(), country, city.population);
            }

            for variant in suffix_variants(&city.name) {
                index.insert(variant, country, city.population);
            }
            if has_stripped_form {
                for variant in suffix_variants(&stripped) {
                    index.insert(variant, country, city.population);
                }
            }
        }

        index
    }

    /// Insert keeping the more populous source entry on collision.
    /// Equal populations keep the incumbent, which is deterministic because
    /// the gazetteer city list is sorted.
    fn insert(&mut self, alias: String, country: &str, population: u64) {
        match self.entries.entry(alias) {
            Entry::Vacant(v) => {
                v.insert(AliasEntry {
                    country: country.to_string(),
                    population,
                });
            }
            Entry::Occupied(mut o) => {
                if population > o.get().population {
                    o.insert(AliasEntry {
                        country: country.to_string(),
                        population,
                    });
                }
            }
        }
    }

    /// The country an alias resolves to, if known.
    pub fn country_of(&self, alias: &str) -> Option<&str> {
        self.entries.get(alias).map(|e| e.country.as_str())
    }

    /// All alias strings, in arbitrary order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// crates/geotag-core/src/report.rs

//! Result rows and the spreadsheet export.

use crate::error::Result;
use crate::matcher::{HeadlineMatch, Matcher, US_COUNTRY_NAME};
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// One output row. A state-level match fills `city` with the state's
/// comma-joined city list; a miss leaves both cells empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub headline: String,
    pub city: String,
    pub country: String,
}

impl ResultRow {
    pub fn is_unmatched(&self) -> bool {
        self.city.is_empty() && self.country.is_empty()
    }
}

/// The annotated corpus, rows in input order.
#[derive(Debug, Default)]
pub struct AnnotationReport {
    pub rows: Vec<ResultRow>,
    pub not_found: usize,
}

/// Match every headline and collect the result rows.
pub fn annotate(headlines: &[String], matcher: &Matcher) -> AnnotationReport {
    let mut report = AnnotationReport::default();

    for headline in headlines {
        let row = match matcher.locate(headline) {
            HeadlineMatch::City { city, country } => ResultRow {
                headline: headline.clone(),
                city,
                country,
            },
            HeadlineMatch::State { cities, .. } => ResultRow {
                headline: headline.clone(),
                city: cities.join(", "),
                country: US_COUNTRY_NAME.to_string(),
            },
            HeadlineMatch::NotFound => {
                report.not_found += 1;
                ResultRow {
                    headline: headline.clone(),
                    city: String::new(),
                    country: String::new(),
                }
            }
        };
        report.rows.push(row);
    }

    report
}

impl AnnotationReport {
    /// Leading rows, for console display.
    pub fn sample(&self, n: usize) -> &[ResultRow] {
        &self.rows[..self.rows.len().min(n)]
    }

    /// Leading unmatched rows, for console display.
    pub fn sample_unmatched(&self, n: usize) -> Vec<&ResultRow> {
        self.rows.iter().filter(|r| r.is_unmatched()).take(n).collect()
    }

    /// Write `headline | city | country` to an xlsx workbook.
    pub fn write_xlsx(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();

        sheet.write_string(0, 0, "headline")?;
        sheet.write_string(0, 1, "city")?;
        sheet.write_string(0, 2, "country")?;

        for (i, row) in self.rows.iter().enumerate() {
            let r = (i + 1) as u32;
            sheet.write_string(r, 0, row.headline.as_str())?;
            sheet.write_string(r, 1, row.city.as_str())?;
            sheet.write_string(r, 2, row.country.as_str())?;
        }

        workbook.save(path.as_ref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::AliasIndex;
    use crate::loader::StateCityMap;
    use crate::model::{City, Country, Gazetteer};

    fn matcher() -> Matcher {
        let gazetteer = Gazetteer {
            cities: vec![City {
                name: "Miami".to_string(),
                country_code: "US".to_string(),
                latitude: 25.77,
                longitude: -80.19,
                population: 441_000,
                timezone: None,
            }],
            countries: [(
                "US".to_string(),
                Country {
                    iso2: "US".to_string(),
                    name: "United States".to_string(),
                    iso3: None,
                    capital: None,
                    population: None,
                    continent: None,
                },
            )]
            .into_iter()
            .collect(),
        };
        let index = AliasIndex::build(&gazetteer);

        let mut states = StateCityMap::new();
        states.insert(
            "Texas".to_string(),
            vec!["Austin".to_string(), "Dallas".to_string()],
        );
        Matcher::new(index, states).unwrap()
    }

    fn corpus() -> Vec<String> {
        vec![
            "Zika Outbreak Hits Miami".to_string(),
            "Texas reports record heat".to_string(),
            "Nothing geographic here".to_string(),
        ]
    }

    #[test]
    fn rows_follow_input_order_and_count_misses() {
        let report = annotate(&corpus(), &matcher());
        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.not_found, 1);

        assert_eq!(report.rows[0].city, "Miami");
        assert_eq!(report.rows[0].country, "United States");

        // State fallback: joined city list, fixed country.
        assert_eq!(report.rows[1].city, "Austin, Dallas");
        assert_eq!(report.rows[1].country, "United States");

        assert!(report.rows[2].is_unmatched());
    }

    #[test]
    fn samples_cap_at_row_count() {
        let report = annotate(&corpus(), &matcher());
        assert_eq!(report.sample(2).len(), 2);
        assert_eq!(report.sample(99).len(), 3);
        assert_eq!(report.sample_unmatched(99).len(), 1);
    }

    #[test]
    fn writes_a_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("headlines_city_country.xlsx");

        let report = annotate(&corpus(), &matcher());
        report.write_xlsx(&path).unwrap();
        assert!(path.is_file());
    }
}

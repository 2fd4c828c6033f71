// crates/geotag-core/src/text.rs

//! Text normalization helpers shared by the alias index and the corpus
//! loader.

/// Transliterate Unicode to ASCII (e.g. `São Paulo` -> `Sao Paulo`).
///
/// Uses the `deunicode` crate for a best-effort transliteration; case is
/// preserved because the matcher is case-sensitive.
pub fn strip_accents(s: &str) -> String {
    deunicode::deunicode(s)
}

/// Normalize one corpus line: rewrite every `Saint` to `St.` and trim
/// surrounding whitespace. Headlines spell the abbreviated form
/// inconsistently ("St. Louis" vs "Saint Louis"); the gazetteer uses "St.".
pub fn normalize_headline(line: &str) -> String {
    line.replace("Saint", "St.").trim().to_string()
}

/// Suffix-stripped alias variants of a city name.
///
/// Headlines often omit a trailing "Beach"/"Beaches" or "City"
/// ("Cebu" for "Cebu City"), so those shortened forms become extra alias
/// keys. Variants that collapse to an empty string are discarded.
pub fn suffix_variants(name: &str) -> Vec<String> {
    let mut out = Vec::new();

    if name.contains("Beach") {
        let v = name.replace("Beaches", "");
        let v = v.replace("Beach", "");
        let v = v.trim().to_string();
        if !v.is_empty() && v != name {
            out.push(v);
        }
    }
    if name.contains("City") {
        let v = name.replace("City", "").trim().to_string();
        if !v.is_empty() && v != name {
            out.push(v);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_preserving_case() {
        assert_eq!(strip_accents("São Paulo"), "Sao Paulo");
        assert_eq!(strip_accents("Łódź"), "Lodz");
        assert_eq!(strip_accents("Quebec"), "Quebec");
    }

    #[test]
    fn normalizes_saint_and_whitespace() {
        assert_eq!(
            normalize_headline("  Saint Louis flu cases rise \n"),
            "St. Louis flu cases rise"
        );
        assert_eq!(normalize_headline("Plain headline"), "Plain headline");
    }

    #[test]
    fn derives_suffix_variants() {
        assert_eq!(suffix_variants("Miami Beach"), vec!["Miami"]);
        assert_eq!(suffix_variants("Cebu City"), vec!["Cebu"]);
        assert!(suffix_variants("Paris").is_empty());
        // A bare suffix collapses to nothing and is dropped.
        assert!(suffix_variants("Beach").is_empty());
    }

    #[test]
    fn beach_and_city_both_apply() {
        let vs = suffix_variants("Panama City Beach");
        assert!(vs.contains(&"Panama City".to_string()));
    }
}

//! Fixture generation data
//!
//! Representative daily generation mixes for the supported countries, served
//! when the data service runs in mock mode. Values pass through
//! [`summarize`] so fixtures obey the same invariants as parsed documents
//! (Italy's 0 MW nuclear entry is dropped, totals and percentages are derived).

use crate::aggregation::CategoryTotals;
use crate::classifier::GenerationKind;
use crate::error::ApiError;
use crate::summary::summarize;
use crate::types::GenerationSummary;

const ITALY: &[(GenerationKind, f64)] = &[
    (GenerationKind::NaturalGas, 18500.0),
    (GenerationKind::Hydro, 12300.0),
    (GenerationKind::Nuclear, 0.0),
    (GenerationKind::Solar, 8900.0),
    (GenerationKind::Wind, 6200.0),
    (GenerationKind::HardCoal, 4100.0),
    (GenerationKind::Oil, 2800.0),
    (GenerationKind::Biomass, 2100.0),
    (GenerationKind::Geothermal, 900.0),
    (GenerationKind::Other, 800.0),
];

const GERMANY: &[(GenerationKind, f64)] = &[
    (GenerationKind::Wind, 28400.0),
    (GenerationKind::NaturalGas, 22100.0),
    (GenerationKind::Nuclear, 18900.0),
    (GenerationKind::Lignite, 15600.0),
    (GenerationKind::Solar, 12800.0),
    (GenerationKind::HardCoal, 8900.0),
    (GenerationKind::Hydro, 7200.0),
    (GenerationKind::Biomass, 6800.0),
    (GenerationKind::Oil, 1200.0),
    (GenerationKind::Other, 900.0),
];

const FRANCE: &[(GenerationKind, f64)] = &[
    (GenerationKind::Nuclear, 42800.0),
    (GenerationKind::Hydro, 14200.0),
    (GenerationKind::NaturalGas, 8900.0),
    (GenerationKind::Wind, 7600.0),
    (GenerationKind::Solar, 4100.0),
    (GenerationKind::HardCoal, 2800.0),
    (GenerationKind::Oil, 1900.0),
    (GenerationKind::Biomass, 1600.0),
    (GenerationKind::Other, 1000.0),
];

/// Country codes with fixture data
pub const FIXTURE_COUNTRIES: &[&str] = &["IT", "DE", "FR"];

fn fixture_mix(country: &str) -> Option<&'static [(GenerationKind, f64)]> {
    match country {
        "IT" => Some(ITALY),
        "DE" => Some(GERMANY),
        "FR" => Some(FRANCE),
        _ => None,
    }
}

/// Fixture summary for a country, stamped with the caller's date
///
/// # Returns
///
/// * `Ok(GenerationSummary)` - Fixture data
/// * `Err(ApiError::UnsupportedCountry)` - No fixture for this country
///
/// # Example
///
/// ```
/// # use entsoe_generation::fixtures::fixture_summary;
/// let summary = fixture_summary("FR", "20231201").unwrap();
/// assert_eq!(summary.top_sources[0].category_type, "Nuclear");
///
/// let err = fixture_summary("XX", "20231201").unwrap_err();
/// assert_eq!(err.to_string(), "No data available for country: XX");
/// ```
pub fn fixture_summary(country: &str, date: &str) -> Result<GenerationSummary, ApiError> {
    let mix = fixture_mix(country)
        .ok_or_else(|| ApiError::UnsupportedCountry(country.to_string()))?;
    let totals: CategoryTotals = mix.iter().copied().collect();
    Ok(summarize(&totals, country, date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_italy() {
        let summary = fixture_summary("IT", "2023-12-01").unwrap();

        assert_eq!(summary.country, "IT");
        assert_eq!(summary.date, "2023-12-01");
        assert_eq!(summary.total_generation, 56600.0);
        assert_eq!(summary.renewable_percentage, 53.7);
        assert_eq!(summary.top_sources.len(), 2);
        assert_eq!(summary.top_sources[0].category_type, "Natural Gas");
        assert_eq!(summary.top_sources[1].category_type, "Hydro");
        // 0 MW nuclear is not listed
        assert!(summary.category("Nuclear").is_none());
    }

    #[test]
    fn test_fixture_germany() {
        let summary = fixture_summary("DE", "20231201").unwrap();

        assert_eq!(summary.total_generation, 122800.0);
        assert_eq!(summary.top_sources[0].category_type, "Wind");
        assert_eq!(summary.top_sources[1].category_type, "Natural Gas");
        assert!(summary.category("Lignite").is_some());
    }

    #[test]
    fn test_fixture_france() {
        let summary = fixture_summary("FR", "20231201").unwrap();

        assert_eq!(summary.total_generation, 84900.0);
        assert_eq!(summary.top_sources[0].category_type, "Nuclear");
        assert_eq!(summary.top_sources[1].category_type, "Hydro");
    }

    #[test]
    fn test_fixture_unknown_country() {
        match fixture_summary("XX", "20231201") {
            Err(ApiError::UnsupportedCountry(code)) => assert_eq!(code, "XX"),
            other => panic!("Expected UnsupportedCountry, got {:?}", other),
        }
    }

    #[test]
    fn test_fixtures_consistent() {
        for country in FIXTURE_COUNTRIES {
            let summary = fixture_summary(country, "20231201").unwrap();

            assert_eq!(summary.country, *country);
            assert!(summary.total_generation > 0.0);
            assert!(summary.renewable_percentage > 0.0);
            assert!(summary.renewable_percentage <= 100.0);
            assert_eq!(summary.top_sources.len(), 2);
            assert!(summary.generation_by_type.iter().any(|c| c.is_renewable));
            assert!(summary.generation_by_type.iter().any(|c| !c.is_renewable));

            for category in &summary.generation_by_type {
                assert!(category.value > 0.0);
                assert_eq!(category.unit, "MW");
                assert!(!category.color.is_empty());
            }

            let sum: f64 = summary.generation_by_type.iter().map(|c| c.value).sum();
            assert_eq!(summary.total_generation, sum);
        }
    }
}

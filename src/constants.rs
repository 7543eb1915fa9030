//! Fixed configuration tables
//!
//! Process-wide constants shared by the pipeline. None of these are ever
//! mutated at runtime.

use crate::classifier::GenerationKind;
use crate::types::Country;

/// Countries with ENTSO-E bidding-zone area codes
pub const COUNTRIES: &[Country] = &[
    Country {
        code: "IT",
        name: "Italy",
        entsoe_code: "10YIT-GRTN-----B",
    },
    Country {
        code: "DE",
        name: "Germany",
        entsoe_code: "10Y1001A1001A83F",
    },
    Country {
        code: "FR",
        name: "France",
        entsoe_code: "10YFR-RTE------C",
    },
];

/// Country selected when the caller has no preference (Italy)
pub const DEFAULT_COUNTRY: &Country = &COUNTRIES[0];

/// Category name → display color
pub const GENERATION_TYPE_COLORS: &[(&str, &str)] = &[
    ("Nuclear", "#FF6B6B"),
    ("Lignite", "#8B4513"),
    ("Hard coal", "#2F2F2F"),
    ("Natural Gas", "#4ECDC4"),
    ("Oil", "#45B7D1"),
    ("Hydro", "#96CEB4"),
    ("Wind", "#FFEAA7"),
    ("Solar", "#FDCB6E"),
    ("Geothermal", "#E17055"),
    ("Biomass", "#74B9FF"),
    ("Waste", "#A29BFE"),
    ("Other", "#DCDDE1"),
];

/// Color for categories missing from [`GENERATION_TYPE_COLORS`]
pub const FALLBACK_COLOR: &str = "#DCDDE1";

/// Categories counted as renewable
pub const RENEWABLE_TYPES: [GenerationKind; 5] = [
    GenerationKind::Hydro,
    GenerationKind::Wind,
    GenerationKind::Solar,
    GenerationKind::Geothermal,
    GenerationKind::Biomass,
];

/// Number of entries in `GenerationSummary::top_sources`
pub const TOP_SOURCES_LIMIT: usize = 2;

/// Unit of every generation value
pub const POWER_UNIT: &str = "MW";

/// Resolve the display color of a category name
///
/// # Examples
///
/// ```
/// # use entsoe_generation::constants::{category_color, FALLBACK_COLOR};
/// assert_eq!(category_color("Solar"), "#FDCB6E");
/// assert_eq!(category_color("Battery"), FALLBACK_COLOR);
/// ```
pub fn category_color(name: &str) -> &'static str {
    GENERATION_TYPE_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

/// Find a supported country by its 2-letter code
pub fn find_country(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|c| c.code == code)
}

/// Resolve the ENTSO-E area code for a country
///
/// Unknown countries fall back to the input code, which the API will reject
/// on its own terms.
///
/// # Examples
///
/// ```
/// # use entsoe_generation::constants::area_code;
/// assert_eq!(area_code("DE"), "10Y1001A1001A83F");
/// assert_eq!(area_code("ES"), "ES");
/// ```
pub fn area_code(code: &str) -> &str {
    find_country(code).map(|c| c.entsoe_code).unwrap_or(code)
}

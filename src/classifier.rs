//! Production-source-type classification
//!
//! Maps ENTSO-E PSR type codes (e.g. `B16`) to the coarse display categories
//! used throughout the crate.
//!
//! # Two-stage lookup
//!
//! 1. **Code → label**: `"B19"` → `"Wind Onshore"` (unknown codes → `"Other"`)
//! 2. **Label → category**: keyword rules checked in a fixed priority order,
//!    first match wins (`"Wind Onshore"` → [`GenerationKind::Wind`])
//!
//! # Example
//!
//! ```rust
//! use entsoe_generation::classifier::{classify, GenerationKind};
//!
//! let c = classify("B18");
//! assert_eq!(c.category, GenerationKind::Wind);
//! assert!(c.is_renewable);
//!
//! let unknown = classify("Z99");
//! assert_eq!(unknown.category, GenerationKind::Other);
//! assert!(!unknown.is_renewable);
//! ```

use std::fmt;

use crate::constants::RENEWABLE_TYPES;

/// Simplified generation category
///
/// Variant order is the order categories appear in aggregation output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GenerationKind {
    Solar,
    Wind,
    Hydro,
    Nuclear,
    Biomass,
    Geothermal,
    NaturalGas,
    Lignite,
    HardCoal,
    Oil,
    Waste,
    Battery,
    Other,
}

impl GenerationKind {
    /// Canonical category key, also used as display name and color-table key
    pub fn name(&self) -> &'static str {
        match self {
            GenerationKind::Solar => "Solar",
            GenerationKind::Wind => "Wind",
            GenerationKind::Hydro => "Hydro",
            GenerationKind::Nuclear => "Nuclear",
            GenerationKind::Biomass => "Biomass",
            GenerationKind::Geothermal => "Geothermal",
            GenerationKind::NaturalGas => "Natural Gas",
            GenerationKind::Lignite => "Lignite",
            GenerationKind::HardCoal => "Hard coal",
            GenerationKind::Oil => "Oil",
            GenerationKind::Waste => "Waste",
            GenerationKind::Battery => "Battery",
            GenerationKind::Other => "Other",
        }
    }

    /// Whether this category belongs to the renewable set
    pub fn is_renewable(&self) -> bool {
        RENEWABLE_TYPES.contains(self)
    }
}

impl fmt::Display for GenerationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of classifying a PSR type code
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub category: GenerationKind,
    pub is_renewable: bool,
}

/// ENTSO-E PSR type code → full label
const PSR_TYPE_LABELS: &[(&str, &str)] = &[
    ("B01", "Biomass"),
    ("B02", "Fossil Brown coal/Lignite"),
    ("B03", "Fossil Coal-derived gas"),
    ("B04", "Fossil Gas"),
    ("B05", "Fossil Hard coal"),
    ("B06", "Fossil Oil"),
    ("B07", "Fossil Oil shale"),
    ("B08", "Fossil Peat"),
    ("B09", "Geothermal"),
    ("B10", "Hydro Pumped Storage"),
    ("B11", "Hydro Run-of-river and poundage"),
    ("B12", "Hydro Water Reservoir"),
    ("B13", "Marine"),
    ("B14", "Nuclear"),
    ("B15", "Other renewable"),
    ("B16", "Solar"),
    ("B17", "Waste"),
    ("B18", "Wind Offshore"),
    ("B19", "Wind Onshore"),
    ("B20", "Other"),
    ("B25", "Energy storage"),
];

/// Label keyword rules in priority order (lowercase keywords)
///
/// Lignite precedes coal so brown coal keeps its own category.
const CATEGORY_RULES: &[(&[&str], GenerationKind)] = &[
    (&["solar"], GenerationKind::Solar),
    (&["wind"], GenerationKind::Wind),
    (&["hydro"], GenerationKind::Hydro),
    (&["nuclear"], GenerationKind::Nuclear),
    (&["biomass"], GenerationKind::Biomass),
    (&["geothermal"], GenerationKind::Geothermal),
    (&["gas"], GenerationKind::NaturalGas),
    (&["lignite"], GenerationKind::Lignite),
    (&["coal"], GenerationKind::HardCoal),
    (&["oil"], GenerationKind::Oil),
    (&["waste"], GenerationKind::Waste),
    (&["battery", "energy storage"], GenerationKind::Battery),
];

/// Look up the full label for a PSR type code
///
/// Surrounding whitespace is ignored. Unknown codes yield `"Other"`.
///
/// # Examples
///
/// ```
/// # use entsoe_generation::classifier::source_label;
/// assert_eq!(source_label("B16"), "Solar");
/// assert_eq!(source_label(" B02 "), "Fossil Brown coal/Lignite");
/// assert_eq!(source_label("B99"), "Other");
/// ```
pub fn source_label(code: &str) -> &'static str {
    let code = code.trim();
    PSR_TYPE_LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or("Other")
}

/// Reduce a full label to its display category
///
/// Matching is case-insensitive substring search over [`CATEGORY_RULES`].
pub fn simplify_label(label: &str) -> GenerationKind {
    let lower = label.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, kind)| *kind)
        .unwrap_or(GenerationKind::Other)
}

/// Classify a PSR type code into category and renewability
///
/// Total function: unrecognized input degrades to `Other`, non-renewable.
pub fn classify(code: &str) -> Classification {
    let category = simplify_label(source_label(code));
    Classification {
        category,
        is_renewable: category.is_renewable(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_solar() {
        let c = classify("B16");
        assert_eq!(c.category, GenerationKind::Solar);
        assert!(c.is_renewable);
    }

    #[test]
    fn test_classify_wind_variants_merge() {
        assert_eq!(classify("B18").category, GenerationKind::Wind);
        assert_eq!(classify("B19").category, GenerationKind::Wind);
    }

    #[test]
    fn test_classify_hydro_variants_merge() {
        for code in ["B10", "B11", "B12"] {
            let c = classify(code);
            assert_eq!(c.category, GenerationKind::Hydro, "code {}", code);
            assert!(c.is_renewable);
        }
    }

    #[test]
    fn test_classify_fossil() {
        assert_eq!(classify("B04").category, GenerationKind::NaturalGas);
        assert_eq!(classify("B02").category, GenerationKind::Lignite);
        assert_eq!(classify("B05").category, GenerationKind::HardCoal);
        assert_eq!(classify("B06").category, GenerationKind::Oil);
        assert_eq!(classify("B07").category, GenerationKind::Oil);
        assert!(!classify("B04").is_renewable);
        assert!(!classify("B02").is_renewable);
    }

    #[test]
    fn test_gas_rule_precedes_coal() {
        // "Fossil Coal-derived gas"
        assert_eq!(classify("B03").category, GenerationKind::NaturalGas);
    }

    #[test]
    fn test_classify_other_sources() {
        assert_eq!(classify("B14").category, GenerationKind::Nuclear);
        assert_eq!(classify("B17").category, GenerationKind::Waste);
        assert_eq!(classify("B25").category, GenerationKind::Battery);
        assert_eq!(classify("B08").category, GenerationKind::Other);
        assert_eq!(classify("B13").category, GenerationKind::Other);
        assert_eq!(classify("B15").category, GenerationKind::Other);
        assert_eq!(classify("B20").category, GenerationKind::Other);
    }

    #[test]
    fn test_classify_unknown_code() {
        let c = classify("XYZ");
        assert_eq!(c.category, GenerationKind::Other);
        assert!(!c.is_renewable);

        let empty = classify("");
        assert_eq!(empty.category, GenerationKind::Other);
    }

    #[test]
    fn test_simplify_label_case_insensitive() {
        assert_eq!(simplify_label("OFFSHORE WIND"), GenerationKind::Wind);
        assert_eq!(simplify_label("battery storage"), GenerationKind::Battery);
        assert_eq!(simplify_label("Marine"), GenerationKind::Other);
    }

    #[test]
    fn test_renewable_set() {
        let renewable: Vec<_> = [
            GenerationKind::Solar,
            GenerationKind::Wind,
            GenerationKind::Hydro,
            GenerationKind::Nuclear,
            GenerationKind::Biomass,
            GenerationKind::Geothermal,
            GenerationKind::Battery,
            GenerationKind::Other,
        ]
        .into_iter()
        .filter(|k| k.is_renewable())
        .collect();

        assert_eq!(
            renewable,
            vec![
                GenerationKind::Solar,
                GenerationKind::Wind,
                GenerationKind::Hydro,
                GenerationKind::Biomass,
                GenerationKind::Geothermal,
            ]
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(GenerationKind::NaturalGas.to_string(), "Natural Gas");
        assert_eq!(GenerationKind::HardCoal.to_string(), "Hard coal");
    }
}

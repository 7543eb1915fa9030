//! Data structures for generation summaries
//!
//! These structs are the normalized output of the pipeline, serialized with
//! camelCase keys for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::classifier::GenerationKind;
use crate::constants::{category_color, POWER_UNIT};
use crate::error::GenerationError;

/// Generation of one simplified category
///
/// Immutable once constructed; `value` is never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationCategory {
    /// Canonical category key
    /// Example: "Natural Gas"
    #[serde(rename = "type")]
    pub category_type: String,

    /// Label shown to users (same as the key for built-in categories)
    pub display_name: String,

    /// Generation in MW
    pub value: f64,

    /// Always "MW"
    pub unit: String,

    pub is_renewable: bool,

    /// Display hint, opaque to the pipeline
    /// Example: "#FDCB6E"
    pub color: String,
}

impl GenerationCategory {
    /// Build a category entry with name, renewability and color resolved
    /// from the fixed tables
    ///
    /// Negative values are clamped to 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use entsoe_generation::{GenerationCategory, classifier::GenerationKind};
    /// let wind = GenerationCategory::new(GenerationKind::Wind, 1200.0);
    /// assert_eq!(wind.category_type, "Wind");
    /// assert_eq!(wind.unit, "MW");
    /// assert!(wind.is_renewable);
    /// assert_eq!(wind.color, "#FFEAA7");
    /// ```
    pub fn new(kind: GenerationKind, value: f64) -> Self {
        let name = kind.name();
        GenerationCategory {
            category_type: name.to_string(),
            display_name: name.to_string(),
            value: value.max(0.0),
            unit: POWER_UNIT.to_string(),
            is_renewable: kind.is_renewable(),
            color: category_color(name).to_string(),
        }
    }
}

/// Normalized generation data for one country and day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSummary {
    /// 2-letter country code
    pub country: String,

    /// Caller-supplied date key (opaque, usually yyyyMMdd)
    pub date: String,

    /// One entry per category with a positive value, aggregation order
    pub generation_by_type: Vec<GenerationCategory>,

    /// Sum of `generation_by_type` values in MW
    pub total_generation: f64,

    /// Renewable share, 0..=100 with one decimal
    pub renewable_percentage: f64,

    /// Largest categories, descending by value
    pub top_sources: Vec<GenerationCategory>,
}

impl GenerationSummary {
    /// Summary with no data, returned when a document cannot be decoded
    pub fn empty(country: &str, date: &str) -> Self {
        GenerationSummary {
            country: country.to_string(),
            date: date.to_string(),
            generation_by_type: Vec::new(),
            total_generation: 0.0,
            renewable_percentage: 0.0,
            top_sources: Vec::new(),
        }
    }

    /// True when no category carries generation
    ///
    /// Callers should treat this as a valid "no data" state, not a failure.
    pub fn is_empty(&self) -> bool {
        self.generation_by_type.is_empty()
    }

    /// Look up a category entry by its key
    pub fn category(&self, category_type: &str) -> Option<&GenerationCategory> {
        self.generation_by_type
            .iter()
            .find(|c| c.category_type == category_type)
    }

    /// Serialize for the presentation layer
    pub fn to_json(&self) -> Result<String, GenerationError> {
        serde_json::to_string(self)
            .map_err(|e| GenerationError::Generic(format!("Failed to serialize summary: {}", e)))
    }
}

/// One decoded `TimeSeries` block
///
/// Transient: produced by the document parser, consumed by the aggregator.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTimeSeriesEntry {
    /// PSR type code, e.g. "B16"
    pub psr_type: String,

    /// Point quantities in document order (MW)
    pub quantities: Vec<f64>,
}

impl RawTimeSeriesEntry {
    /// Mean of the point quantities, 0.0 when the series has no points
    ///
    /// # Examples
    ///
    /// ```
    /// # use entsoe_generation::RawTimeSeriesEntry;
    /// let entry = RawTimeSeriesEntry {
    ///     psr_type: "B16".to_string(),
    ///     quantities: vec![100.0, 200.0],
    /// };
    /// assert_eq!(entry.representative_quantity(), 150.0);
    /// ```
    pub fn representative_quantity(&self) -> f64 {
        if self.quantities.is_empty() {
            return 0.0;
        }
        let mean = self.quantities.iter().sum::<f64>() / self.quantities.len() as f64;
        // finite points can still overflow the sum
        if mean.is_finite() {
            mean
        } else {
            0.0
        }
    }
}

/// Generation split by renewability (MW)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewableSplit {
    pub renewable: f64,
    pub non_renewable: f64,
}

/// Flattened category for chart rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataPoint {
    pub label: String,
    pub value: f64,
    pub color: String,
    pub is_renewable: bool,
}

/// Supported country with its ENTSO-E area code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    /// Bidding-zone EIC code, e.g. "10YIT-GRTN-----B"
    pub entsoe_code: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_representative_quantity_mean() {
        let entry = RawTimeSeriesEntry {
            psr_type: "B19".to_string(),
            quantities: vec![10.0, 20.0, 30.0, 40.0],
        };
        assert_eq!(entry.representative_quantity(), 25.0);
    }

    #[test]
    fn test_representative_quantity_no_points() {
        let entry = RawTimeSeriesEntry {
            psr_type: "B19".to_string(),
            quantities: vec![],
        };
        assert_eq!(entry.representative_quantity(), 0.0);
    }

    #[test]
    fn test_representative_quantity_overflow_is_zero() {
        let entry = RawTimeSeriesEntry {
            psr_type: "B16".to_string(),
            quantities: vec![1e308, 1e308],
        };
        assert_eq!(entry.representative_quantity(), 0.0);
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_output_types_are_send_sync() {
        assert_send_sync::<GenerationSummary>();
        assert_send_sync::<GenerationCategory>();
        assert_send_sync::<RawTimeSeriesEntry>();
    }

    #[test]
    fn test_category_new_unknown_color_falls_back() {
        let battery = GenerationCategory::new(GenerationKind::Battery, 50.0);
        assert_eq!(battery.color, "#DCDDE1");
        assert!(!battery.is_renewable);
    }

    #[test]
    fn test_category_new_clamps_negative() {
        let hydro = GenerationCategory::new(GenerationKind::Hydro, -12.0);
        assert_eq!(hydro.value, 0.0);
    }

    #[test]
    fn test_empty_summary() {
        let summary = GenerationSummary::empty("IT", "20231201");
        assert!(summary.is_empty());
        assert_eq!(summary.total_generation, 0.0);
        assert_eq!(summary.renewable_percentage, 0.0);
        assert!(summary.top_sources.is_empty());
        assert_eq!(summary.country, "IT");
        assert_eq!(summary.date, "20231201");
    }

    #[test]
    fn test_summary_json_uses_camel_case() {
        let mut summary = GenerationSummary::empty("DE", "20231201");
        summary
            .generation_by_type
            .push(GenerationCategory::new(GenerationKind::NaturalGas, 300.0));
        summary.total_generation = 300.0;

        let json = summary.to_json().unwrap();
        assert!(json.contains("\"generationByType\""));
        assert!(json.contains("\"totalGeneration\":300.0"));
        assert!(json.contains("\"renewablePercentage\""));
        assert!(json.contains("\"topSources\""));
        assert!(json.contains("\"type\":\"Natural Gas\""));
        assert!(json.contains("\"displayName\""));
        assert!(json.contains("\"isRenewable\":false"));
    }

    #[test]
    fn test_summary_json_roundtrip() {
        let mut summary = GenerationSummary::empty("FR", "20240101");
        summary
            .generation_by_type
            .push(GenerationCategory::new(GenerationKind::Nuclear, 42800.0));
        let json = summary.to_json().unwrap();
        let back: GenerationSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }

    #[test]
    fn test_summary_category_lookup() {
        let mut summary = GenerationSummary::empty("IT", "20231201");
        summary
            .generation_by_type
            .push(GenerationCategory::new(GenerationKind::Solar, 10.0));
        assert_eq!(summary.category("Solar").map(|c| c.value), Some(10.0));
        assert!(summary.category("Wind").is_none());
    }
}

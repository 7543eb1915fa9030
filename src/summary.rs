//! Summary computation
//!
//! Turns per-category totals into a [`GenerationSummary`].
//!
//! # Rounding order
//!
//! Category values are rounded to integer MW first. The total and the
//! renewable percentage are then computed from the rounded values, so the
//! figures shown to users always add up.

use crate::aggregation::CategoryTotals;
use crate::constants::TOP_SOURCES_LIMIT;
use crate::formatting::{
    aggregate_generation_by_renewable, calculate_percentage, sort_generation_by_value,
};
use crate::types::{GenerationCategory, GenerationSummary};

/// Build the summary for one country and date
///
/// Categories whose rounded value is not positive are dropped, so
/// `generation_by_type` never holds zero entries. `top_sources` is taken from
/// a sorted copy; `generation_by_type` keeps aggregation order.
///
/// # Examples
///
/// ```
/// # use entsoe_generation::{summarize, aggregation::CategoryTotals, classifier::GenerationKind};
/// let mut totals = CategoryTotals::new();
/// totals.insert(GenerationKind::Solar, 300.4);
/// totals.insert(GenerationKind::NaturalGas, 699.6);
///
/// let summary = summarize(&totals, "IT", "20231201");
/// assert_eq!(summary.total_generation, 1000.0);
/// assert_eq!(summary.renewable_percentage, 30.0);
/// assert_eq!(summary.top_sources[0].category_type, "Natural Gas");
/// ```
pub fn summarize(totals: &CategoryTotals, country: &str, date: &str) -> GenerationSummary {
    let generation_by_type: Vec<GenerationCategory> = totals
        .iter()
        .map(|(kind, value)| (kind, value.round()))
        .filter(|(_, rounded)| rounded.is_finite() && *rounded > 0.0)
        .map(|(kind, rounded)| GenerationCategory::new(*kind, rounded))
        .collect();

    let total_generation: f64 = generation_by_type.iter().map(|c| c.value).sum();
    let split = aggregate_generation_by_renewable(&generation_by_type);
    let renewable_percentage = calculate_percentage(split.renewable, total_generation);

    let top_sources = sort_generation_by_value(&generation_by_type)
        .into_iter()
        .take(TOP_SOURCES_LIMIT)
        .collect();

    GenerationSummary {
        country: country.to_string(),
        date: date.to_string(),
        generation_by_type,
        total_generation,
        renewable_percentage,
        top_sources,
    }
}

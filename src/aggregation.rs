//! Series aggregation
//!
//! Collapses decoded time series into one MW figure per category. Each series
//! contributes the mean of its points (an ENTSO-E series reports several
//! readings per period; the mean approximates the generation level over the
//! period). Contributions of series sharing a category are summed.

use std::collections::BTreeMap;

use crate::classifier::{classify, GenerationKind};
use crate::types::RawTimeSeriesEntry;

/// Summed representative quantity per category
///
/// Iteration follows [`GenerationKind`] declaration order.
pub type CategoryTotals = BTreeMap<GenerationKind, f64>;

/// Aggregate decoded series into per-category totals
///
/// Series with no points still register their category with 0.0; the summary
/// step drops it.
///
/// # Examples
///
/// ```
/// # use entsoe_generation::{aggregate, RawTimeSeriesEntry, classifier::GenerationKind};
/// let entries = vec![
///     RawTimeSeriesEntry { psr_type: "B18".to_string(), quantities: vec![100.0, 300.0] },
///     RawTimeSeriesEntry { psr_type: "B19".to_string(), quantities: vec![50.0] },
/// ];
/// let totals = aggregate(&entries);
/// assert_eq!(totals[&GenerationKind::Wind], 250.0);
/// ```
pub fn aggregate(entries: &[RawTimeSeriesEntry]) -> CategoryTotals {
    let mut totals = CategoryTotals::new();

    for entry in entries {
        let category = classify(&entry.psr_type).category;
        *totals.entry(category).or_insert(0.0) += entry.representative_quantity();
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str, quantities: &[f64]) -> RawTimeSeriesEntry {
        RawTimeSeriesEntry {
            psr_type: code.to_string(),
            quantities: quantities.to_vec(),
        }
    }

    #[test]
    fn test_aggregate_uses_mean_per_series() {
        let totals = aggregate(&[entry("B16", &[100.0, 200.0])]);
        assert_eq!(totals[&GenerationKind::Solar], 150.0);
    }

    #[test]
    fn test_aggregate_sums_hydro_subtypes() {
        let totals = aggregate(&[
            entry("B10", &[10.0, 30.0]),
            entry("B11", &[100.0]),
            entry("B12", &[5.0, 5.0, 5.0]),
        ]);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[&GenerationKind::Hydro], 125.0);
    }

    #[test]
    fn test_aggregate_unknown_code_counts_as_other() {
        let totals = aggregate(&[entry("B99", &[42.0]), entry("B20", &[8.0])]);
        assert_eq!(totals[&GenerationKind::Other], 50.0);
    }

    #[test]
    fn test_aggregate_zero_point_series() {
        let totals = aggregate(&[entry("B14", &[])]);
        assert_eq!(totals[&GenerationKind::Nuclear], 0.0);
    }

    #[test]
    fn test_aggregate_empty_input() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn test_aggregate_order_independent() {
        let forward = vec![
            entry("B18", &[1.5, 2.5]),
            entry("B04", &[700.0]),
            entry("B19", &[3.0]),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(aggregate(&forward), aggregate(&reversed));
    }
}

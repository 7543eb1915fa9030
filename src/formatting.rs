//! Display formatting and category utilities
//!
//! Pure helpers shared by the summary step and the presentation layer.
//!
//! # Utilities
//!
//! 1. **Power formatting**: `2250.0` → `"2.3 GW"`, `999.9` → `"1000 MW"`
//! 2. **Percentage**: `(1, 3)` → `33.3`, `(x, 0)` → `0`
//! 3. **Descending sort**: non-destructive, stable
//! 4. **Renewable split**: sums partitioned by `is_renewable`
//! 5. **Chart points**: categories flattened for rendering
//! 6. **Date key display**: `"20231201"` → `"01/12/2023"`
//!
//! Rounding is half-up at the stated precision (inputs are non-negative, so
//! `f64::round` gives the same result).
//!
//! # Example
//!
//! ```rust
//! use entsoe_generation::formatting::*;
//!
//! assert_eq!(format_power_value(1000.0, "MW"), "1.0 GW");
//! assert_eq!(calculate_percentage(2.0, 3.0), 66.7);
//! assert_eq!(format_date_string("20231201"), "01/12/2023");
//! ```

use chrono::NaiveDate;

use crate::types::{ChartDataPoint, GenerationCategory, RenewableSplit};

// ============================================================================
// Rounding
// ============================================================================

/// Round to a fixed number of decimal places
///
/// # Examples
///
/// ```
/// # use entsoe_generation::formatting::round_to;
/// assert_eq!(round_to(2.25, 1), 2.3);
/// assert_eq!(round_to(33.333, 1), 33.3);
/// assert_eq!(round_to(999.5, 0), 1000.0);
/// ```
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

// ============================================================================
// Utility 1: Power Formatting
// ============================================================================

/// Format a power value with MW/GW magnitude selection
///
/// Values of 1000 and above are shown in giga units with one decimal, smaller
/// values as integers in the given unit. A leading mega prefix is swapped for
/// giga (`MW` → `GW`); any other unit is prefixed with `G` as-is.
///
/// # Examples
///
/// ```
/// # use entsoe_generation::formatting::format_power_value;
/// assert_eq!(format_power_value(500.0, "MW"), "500 MW");
/// assert_eq!(format_power_value(999.9, "MW"), "1000 MW");
/// assert_eq!(format_power_value(1000.0, "MW"), "1.0 GW");
/// assert_eq!(format_power_value(2250.0, "MW"), "2.3 GW");
/// assert_eq!(format_power_value(1000.0, "kW"), "1.0 GkW");
/// ```
pub fn format_power_value(value: f64, unit: &str) -> String {
    if value >= 1000.0 {
        let giga_unit = match unit.strip_prefix('M') {
            Some(base) => format!("G{}", base),
            None => format!("G{}", unit),
        };
        return format!("{:.1} {}", round_to(value / 1000.0, 1), giga_unit);
    }

    format!("{:.0} {}", value.round(), unit)
}

/// [`format_power_value`] with the default `MW` unit
pub fn format_power_mw(value: f64) -> String {
    format_power_value(value, "MW")
}

// ============================================================================
// Utility 2: Percentage
// ============================================================================

/// Share of `value` in `total` as a percentage with one decimal
///
/// A zero or non-finite total yields 0 instead of NaN.
///
/// # Examples
///
/// ```
/// # use entsoe_generation::formatting::calculate_percentage;
/// assert_eq!(calculate_percentage(25.0, 100.0), 25.0);
/// assert_eq!(calculate_percentage(1.0, 7.0), 14.3);
/// assert_eq!(calculate_percentage(10.0, 0.0), 0.0);
/// ```
pub fn calculate_percentage(value: f64, total: f64) -> f64 {
    if total == 0.0 || !total.is_finite() {
        return 0.0;
    }
    let percentage = round_to((value / total) * 100.0, 1);
    if percentage.is_finite() {
        percentage
    } else {
        0.0
    }
}

// ============================================================================
// Utility 3: Descending Sort
// ============================================================================

/// Sorted copy of `categories`, largest value first
///
/// The input slice is left untouched. Equal values keep their relative order.
pub fn sort_generation_by_value(categories: &[GenerationCategory]) -> Vec<GenerationCategory> {
    let mut sorted = categories.to_vec();
    sorted.sort_by(|a, b| b.value.total_cmp(&a.value));
    sorted
}

// ============================================================================
// Utility 4: Renewable Split
// ============================================================================

/// Sum values partitioned by renewability
///
/// # Examples
///
/// ```
/// # use entsoe_generation::formatting::aggregate_generation_by_renewable;
/// let split = aggregate_generation_by_renewable(&[]);
/// assert_eq!(split.renewable, 0.0);
/// assert_eq!(split.non_renewable, 0.0);
/// ```
pub fn aggregate_generation_by_renewable(categories: &[GenerationCategory]) -> RenewableSplit {
    categories
        .iter()
        .fold(RenewableSplit::default(), |mut split, category| {
            if category.is_renewable {
                split.renewable += category.value;
            } else {
                split.non_renewable += category.value;
            }
            split
        })
}

// ============================================================================
// Utility 5: Chart Points
// ============================================================================

/// Flatten categories into chart points, largest first
pub fn to_chart_data(categories: &[GenerationCategory]) -> Vec<ChartDataPoint> {
    sort_generation_by_value(categories)
        .into_iter()
        .map(|c| ChartDataPoint {
            label: c.display_name,
            value: c.value,
            color: c.color,
            is_renewable: c.is_renewable,
        })
        .collect()
}

// ============================================================================
// Utility 6: Date Key Display
// ============================================================================

/// Render a `yyyyMMdd` date key as `dd/MM/yyyy`
///
/// Keys that are not valid dates are returned unchanged.
///
/// # Examples
///
/// ```
/// # use entsoe_generation::formatting::format_date_string;
/// assert_eq!(format_date_string("20240229"), "29/02/2024");
/// assert_eq!(format_date_string("2024-02-29"), "2024-02-29");
/// ```
pub fn format_date_string(date_key: &str) -> String {
    match NaiveDate::parse_from_str(date_key, "%Y%m%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => date_key.to_string(),
    }
}

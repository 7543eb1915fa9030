//! XML parser for ENTSO-E "Actual Generation per Type" documents
//!
//! This module decodes A75 market documents into [`RawTimeSeriesEntry`] values
//! using quick-xml's serde deserializer, then runs aggregation and summary.
//!
//! # Document Shape
//!
//! Only this subset of the schema is interpreted; everything else is ignored:
//!
//! ```text
//! GL_MarketDocument
//! └── TimeSeries*
//!     ├── MktPSRType/psrType       production-source-type code (B01..B25)
//!     └── Period*
//!         └── Point*
//!             └── quantity         MW, decimal
//! ```
//!
//! # Failure Policy
//!
//! - Malformed XML: [`parse_generation_data`] logs a warning and returns an
//!   empty summary. [`decode_document`] exposes the typed error.
//! - Missing or unparsable `quantity`: counted as 0
//! - `TimeSeries` without a `psrType`: skipped
//! - `Acknowledgement_MarketDocument` (no data for the query): zero series,
//!   the reason text is logged
//!
//! # Examples
//!
//! ```rust
//! use entsoe_generation::xml_parser::parse_generation_data;
//!
//! let xml = r#"<GL_MarketDocument>
//!   <TimeSeries>
//!     <MktPSRType><psrType>B16</psrType></MktPSRType>
//!     <Period>
//!       <Point><position>1</position><quantity>100</quantity></Point>
//!       <Point><position>2</position><quantity>200</quantity></Point>
//!     </Period>
//!   </TimeSeries>
//! </GL_MarketDocument>"#;
//!
//! let summary = parse_generation_data(xml, "IT", "20231201");
//! assert_eq!(summary.total_generation, 150.0);
//! assert_eq!(summary.renewable_percentage, 100.0);
//! ```

use log::{debug, info, warn};
use serde::Deserialize;

use crate::aggregation::aggregate;
use crate::error::{ApiError, GenerationError, ParseError};
use crate::summary::summarize;
use crate::types::{GenerationSummary, RawTimeSeriesEntry};

// ============================================================================
// Wire Structures
// ============================================================================

/// Root element (`GL_MarketDocument` or `Acknowledgement_MarketDocument`)
#[derive(Debug, Default, Deserialize)]
struct MarketDocument {
    #[serde(rename = "TimeSeries", default)]
    time_series: Vec<TimeSeriesBlock>,

    /// Only present on acknowledgement documents
    #[serde(rename = "Reason", default)]
    reasons: Vec<Reason>,
}

#[derive(Debug, Default, Deserialize)]
struct TimeSeriesBlock {
    #[serde(rename = "MktPSRType", default)]
    psr: Option<MktPsrType>,

    #[serde(rename = "Period", default)]
    periods: Vec<Period>,

    /// Points placed directly under the series (flattened documents)
    #[serde(rename = "Point", default)]
    points: Vec<Point>,
}

#[derive(Debug, Default, Deserialize)]
struct MktPsrType {
    #[serde(rename = "psrType", default)]
    psr_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Period {
    #[serde(rename = "Point", default)]
    points: Vec<Point>,
}

#[derive(Debug, Default, Deserialize)]
struct Point {
    #[serde(default)]
    quantity: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Reason {
    #[serde(default)]
    code: Option<String>,

    #[serde(default)]
    text: Option<String>,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Parse a point quantity, falling back to 0.0
///
/// Missing, empty, unparsable and non-finite values (`NaN`, `inf`) all yield
/// 0.0.
///
/// # Examples
///
/// ```
/// # use entsoe_generation::xml_parser::parse_quantity;
/// assert_eq!(parse_quantity(Some("1234.5")), 1234.5);
/// assert_eq!(parse_quantity(Some(" 42 ")), 42.0);
/// assert_eq!(parse_quantity(Some("n/a")), 0.0);
/// assert_eq!(parse_quantity(Some("NaN")), 0.0);
/// assert_eq!(parse_quantity(None), 0.0);
/// ```
pub fn parse_quantity(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Lower one decoded block, `None` when it has no source-type code
fn to_entry(block: TimeSeriesBlock) -> Option<RawTimeSeriesEntry> {
    let psr_type = block
        .psr
        .and_then(|p| p.psr_type)
        .map(|code| code.trim().to_string())
        .filter(|code| !code.is_empty())?;

    let quantities = block
        .periods
        .iter()
        .flat_map(|period| period.points.iter())
        .chain(block.points.iter())
        .map(|point| parse_quantity(point.quantity.as_deref()))
        .collect();

    Some(RawTimeSeriesEntry {
        psr_type,
        quantities,
    })
}

// ============================================================================
// Main Parsing Functions
// ============================================================================

/// Decode a document into time-series entries
///
/// # Returns
///
/// * `Ok(Vec<RawTimeSeriesEntry>)` - One entry per series with a source-type code
/// * `Err(GenerationError::Api(EmptyResponse))` - Blank document
/// * `Err(GenerationError::Parse(XmlFormat))` - Malformed XML
pub fn decode_document(xml: &str) -> Result<Vec<RawTimeSeriesEntry>, GenerationError> {
    if xml.trim().is_empty() {
        return Err(ApiError::EmptyResponse.into());
    }

    let document: MarketDocument = quick_xml::de::from_str(xml)
        .map_err(|e| ParseError::XmlFormat(e.to_string()))?;

    if document.time_series.is_empty() {
        for reason in &document.reasons {
            info!(
                "ENTSO-E returned no time series (reason {}): {}",
                reason.code.as_deref().unwrap_or("?"),
                reason.text.as_deref().unwrap_or("")
            );
        }
    }

    let block_count = document.time_series.len();
    let entries: Vec<RawTimeSeriesEntry> = document
        .time_series
        .into_iter()
        .filter_map(to_entry)
        .collect();

    if entries.len() < block_count {
        debug!(
            "Skipped {} time series without a source-type code",
            block_count - entries.len()
        );
    }

    Ok(entries)
}

/// Parse a document into a [`GenerationSummary`]
///
/// Never fails: a document that cannot be decoded yields
/// [`GenerationSummary::empty`] and a warning on the log.
pub fn parse_generation_data(xml: &str, country: &str, date: &str) -> GenerationSummary {
    match decode_document(xml) {
        Ok(entries) => summarize(&aggregate(&entries), country, date),
        Err(e) => {
            warn!(
                "Failed to decode generation document for {} on {}: {}",
                country, date, e
            );
            GenerationSummary::empty(country, date)
        }
    }
}

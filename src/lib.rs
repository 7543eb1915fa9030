//! ENTSO-E Generation - normalization of "Actual Generation per Type" data
//!
//! This crate turns ENTSO-E transparency platform A75 documents into
//! per-country/day generation summaries: MW per category, total generation,
//! renewable share and the largest sources.
//!
//! # Features
//! - Tolerant XML decoding (unknown codes, missing quantities, empty series)
//! - PSR type classification into display categories with renewability
//! - Integral-MW summaries with one-decimal renewable percentages
//! - MW/GW display formatting
//! - Request planning and a transport-agnostic data service with fixtures
//!
//! # Pipeline
//!
//! ```text
//! XML ──▶ xml_parser ──▶ RawTimeSeriesEntry* ──▶ aggregation ──▶ summary
//!                                                   │             │
//!                                               classifier        ▼
//!                                                          GenerationSummary
//! ```
//!
//! Every pipeline step is a pure function over static tables, safe to call
//! from any number of threads.
//!
//! # Example
//!
//! ```rust
//! use entsoe_generation::{parse_generation_data, formatting::format_power_mw};
//!
//! let xml = "<GL_MarketDocument>\
//!     <TimeSeries><MktPSRType><psrType>B19</psrType></MktPSRType>\
//!     <Period><Point><quantity>2250</quantity></Point></Period></TimeSeries>\
//!     </GL_MarketDocument>";
//!
//! let summary = parse_generation_data(xml, "DE", "20231201");
//! assert_eq!(format_power_mw(summary.total_generation), "2.3 GW");
//! ```

pub mod aggregation;
pub mod classifier;
pub mod config;
pub mod constants;
mod error;
pub mod fixtures;
pub mod formatting;
pub mod request;
mod service;
pub mod summary;
mod types;
pub mod xml_parser;

// Re-export public types for easier access
pub use aggregation::aggregate;
pub use classifier::{classify, Classification, GenerationKind};
pub use config::ApiConfig;
pub use error::{ApiError, GenerationError, ParseError};
pub use request::GenerationRequest;
pub use service::{DocumentSource, GenerationService};
pub use summary::summarize;
pub use types::{
    ChartDataPoint, Country, GenerationCategory, GenerationSummary, RawTimeSeriesEntry,
    RenewableSplit,
};
pub use xml_parser::parse_generation_data;

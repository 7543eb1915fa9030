//! Request planning for the ENTSO-E generation endpoint
//!
//! Turns a country and a `yyyyMMdd` date key into the logical A75 request.
//! Sending it is left to a [`crate::DocumentSource`].
//!
//! # Parameters
//!
//! - `documentType=A75` - actual generation per type
//! - `processType=A16` - realised
//! - `in_Domain` - bidding-zone area code of the country
//! - `periodStart` / `periodEnd` - `yyyyMMddHHmm`, one full day
//!
//! # Example
//!
//! ```rust
//! use entsoe_generation::request::GenerationRequest;
//!
//! let request = GenerationRequest::new("IT", "20231231").unwrap();
//! assert_eq!(request.in_domain, "10YIT-GRTN-----B");
//! assert_eq!(request.period_start, "202312310000");
//! assert_eq!(request.period_end, "202401010000");
//! ```

use chrono::{Duration, NaiveDate};

use crate::config::ApiConfig;
use crate::constants::area_code;
use crate::error::ParseError;

/// Actual generation per type
pub const DOCUMENT_TYPE_ACTUAL_GENERATION: &str = "A75";

/// Realised
pub const PROCESS_TYPE_REALISED: &str = "A16";

/// One planned HTTP GET to the generation endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// 2-letter country code the request was planned for
    pub country: String,

    pub document_type: String,

    pub process_type: String,

    /// Area code, e.g. "10YFR-RTE------C"
    pub in_domain: String,

    /// Window start, `yyyyMMdd0000`
    pub period_start: String,

    /// Window end (exclusive), start of the following day
    pub period_end: String,
}

/// Parse a `yyyyMMdd` date key
///
/// # Examples
///
/// ```
/// # use entsoe_generation::request::parse_date_key;
/// assert!(parse_date_key("20231201").is_ok());
/// assert!(parse_date_key("2023-12-01").is_err());
/// assert!(parse_date_key("20230231").is_err());
/// ```
pub fn parse_date_key(date: &str) -> Result<NaiveDate, ParseError> {
    if date.len() != 8 {
        return Err(ParseError::InvalidDate(date.to_string()));
    }
    NaiveDate::parse_from_str(date, "%Y%m%d")
        .map_err(|_| ParseError::InvalidDate(date.to_string()))
}

impl GenerationRequest {
    /// Plan the request for one country and day
    ///
    /// # Returns
    ///
    /// * `Ok(GenerationRequest)` - Planned request
    /// * `Err(ParseError::InvalidDate)` - Date key is not a valid `yyyyMMdd` date
    pub fn new(country: &str, date: &str) -> Result<Self, ParseError> {
        let day = parse_date_key(date)?;
        let next_day = day
            .checked_add_signed(Duration::days(1))
            .ok_or_else(|| ParseError::InvalidDate(date.to_string()))?;

        Ok(GenerationRequest {
            country: country.to_string(),
            document_type: DOCUMENT_TYPE_ACTUAL_GENERATION.to_string(),
            process_type: PROCESS_TYPE_REALISED.to_string(),
            in_domain: area_code(country).to_string(),
            period_start: format!("{}0000", day.format("%Y%m%d")),
            period_end: format!("{}0000", next_day.format("%Y%m%d")),
        })
    }

    /// Query parameters in request order
    ///
    /// `securityToken` is appended when a token is given.
    pub fn query_pairs(&self, token: Option<&str>) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("documentType", self.document_type.clone()),
            ("processType", self.process_type.clone()),
            ("in_Domain", self.in_domain.clone()),
            ("periodStart", self.period_start.clone()),
            ("periodEnd", self.period_end.clone()),
        ];

        if let Some(token) = token {
            pairs.push(("securityToken", token.to_string()));
        }

        pairs
    }

    /// Endpoint URL without query string
    pub fn url(&self, config: &ApiConfig) -> String {
        config.generation_url()
    }
}

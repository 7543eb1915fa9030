//! Error types for the generation pipeline
//!
//! Only two situations are genuine failures:
//! - Document decode errors (malformed XML, unusable date keys)
//! - Data-service errors (unsupported fixture country, failed fetch)
//!
//! Everything else (unknown codes, missing quantities, zero totals) is handled
//! by fallback values and never reaches these types.

use std::fmt;

/// Top-level error type for the crate
///
/// Supports automatic conversion from specific error types via From trait
#[derive(Debug)]
pub enum GenerationError {
    /// Document or input parsing error
    Parse(ParseError),

    /// Data-service error
    Api(ApiError),

    /// Generic error with message
    Generic(String),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::Parse(e) => write!(f, "Parse error: {}", e),
            GenerationError::Api(e) => write!(f, "{}", e),
            GenerationError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for GenerationError {}

impl From<ParseError> for GenerationError {
    fn from(err: ParseError) -> Self {
        GenerationError::Parse(err)
    }
}

impl From<ApiError> for GenerationError {
    fn from(err: ApiError) -> Self {
        GenerationError::Api(err)
    }
}

impl From<String> for GenerationError {
    fn from(msg: String) -> Self {
        GenerationError::Generic(msg)
    }
}

impl From<&str> for GenerationError {
    fn from(msg: &str) -> Self {
        GenerationError::Generic(msg.to_string())
    }
}

/// Parsing errors
///
/// Occurs while decoding the ENTSO-E XML document or caller-supplied keys
#[derive(Debug, Clone)]
pub enum ParseError {
    /// The document is not well-formed XML or does not fit the expected shape
    ///
    /// Example: `"<not-xml"` (unclosed tag)
    XmlFormat(String),

    /// Date key is not in `yyyyMMdd` form
    ///
    /// Example: "2023-12-01"
    InvalidDate(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::XmlFormat(msg) => write!(f, "XML format error: {}", msg),
            ParseError::InvalidDate(val) => {
                write!(f, "Invalid date key: '{}' (expected yyyyMMdd)", val)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Data-service errors
///
/// Surfaced to callers of [`crate::GenerationService`] and the fixture source
#[derive(Debug, Clone)]
pub enum ApiError {
    /// No fixture data exists for the requested country
    ///
    /// Indicates a caller configuration problem, not a data-quality problem
    UnsupportedCountry(String),

    /// Response body is empty when a document was expected
    EmptyResponse,

    /// Live mode requested without a security token
    MissingToken,

    /// Fetching or planning the request failed
    ///
    /// `code` is always `FETCH_ERROR`; `details` carries the underlying cause
    FetchFailed { code: String, details: String },
}

impl ApiError {
    /// Wrap an underlying cause as a `FETCH_ERROR`
    pub fn fetch_failed(details: impl Into<String>) -> Self {
        ApiError::FetchFailed {
            code: "FETCH_ERROR".to_string(),
            details: details.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::UnsupportedCountry(code) => {
                write!(f, "No data available for country: {}", code)
            }
            ApiError::EmptyResponse => write!(f, "API returned empty response"),
            ApiError::MissingToken => {
                write!(f, "No ENTSO-E security token configured (set ENTSOE_API_TOKEN)")
            }
            ApiError::FetchFailed { code, details } => {
                write!(f, "Failed to fetch generation data [{}]: {}", code, details)
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_conversion() {
        let err = ParseError::InvalidDate("2023-12-01".to_string());
        let gen_err: GenerationError = err.into();

        match gen_err {
            GenerationError::Parse(ParseError::InvalidDate(val)) => {
                assert_eq!(val, "2023-12-01");
            }
            _ => panic!("Expected Parse error"),
        }
    }

    #[test]
    fn test_api_error_conversion() {
        let err = ApiError::EmptyResponse;
        let gen_err: GenerationError = err.into();

        match gen_err {
            GenerationError::Api(ApiError::EmptyResponse) => {
                // Success
            }
            _ => panic!("Expected Api error"),
        }
    }

    #[test]
    fn test_unsupported_country_message_names_country() {
        let err: GenerationError = ApiError::UnsupportedCountry("XX".to_string()).into();
        assert_eq!(format!("{}", err), "No data available for country: XX");
    }

    #[test]
    fn test_fetch_failed_formatting() {
        let err = ApiError::fetch_failed("connection refused");
        let msg = format!("{}", err);
        assert!(msg.contains("Failed to fetch generation data"));
        assert!(msg.contains("FETCH_ERROR"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_xml_format_display() {
        let err = ParseError::XmlFormat("unclosed tag".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("XML format error"));
        assert!(msg.contains("unclosed tag"));
    }

    #[test]
    fn test_string_conversion() {
        let err: GenerationError = "boom".into();
        assert_eq!(format!("{}", err), "boom");
    }
}

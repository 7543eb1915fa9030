//! Generation data service
//!
//! Ties configuration, request planning, the transport and the parser
//! together. The transport itself (HTTP client, timeouts, retries) sits behind
//! [`DocumentSource`] and is supplied by the embedding application.
//!
//! # Modes
//!
//! - **Mock** (`use_mock_data`): answers from [`crate::fixtures`]; an
//!   unsupported country is reported as [`ApiError::UnsupportedCountry`]
//! - **Live**: plans an A75 request, fetches the XML through the source and
//!   parses it; any planning or transport failure becomes `FETCH_ERROR`

use log::{error, info};

use crate::config::ApiConfig;
use crate::error::{ApiError, GenerationError};
use crate::fixtures::fixture_summary;
use crate::request::GenerationRequest;
use crate::types::GenerationSummary;
use crate::xml_parser::parse_generation_data;

/// Transport seam for fetching raw ENTSO-E documents
pub trait DocumentSource {
    /// Perform the request and return the response body
    fn fetch(&self, request: &GenerationRequest, config: &ApiConfig) -> Result<String, ApiError>;

    /// Check that the API is reachable
    fn ping(&self, config: &ApiConfig) -> Result<(), ApiError>;
}

/// Fetches and normalizes generation data for a country and day
pub struct GenerationService<S> {
    config: ApiConfig,
    source: S,
}

impl<S: DocumentSource> GenerationService<S> {
    /// Create a service over a transport
    pub fn new(config: ApiConfig, source: S) -> Self {
        GenerationService { config, source }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Generation summary for `country` on `date` (`yyyyMMdd`)
    ///
    /// # Returns
    ///
    /// * `Ok(GenerationSummary)` - Possibly empty when the document was unusable
    /// * `Err(GenerationError::Api(UnsupportedCountry))` - Mock mode, no fixture
    /// * `Err(GenerationError::Api(FetchFailed))` - Live mode planning or transport failure
    pub fn get_generation_data(
        &self,
        country: &str,
        date: &str,
    ) -> Result<GenerationSummary, GenerationError> {
        if self.config.use_mock_data {
            info!("[MOCK] Fetching generation data for {} on {}", country, date);
            return Ok(fixture_summary(country, date)?);
        }

        let body = self.fetch_document(country, date).map_err(|e| {
            error!("Error fetching generation data: {}", e);
            ApiError::fetch_failed(e.to_string())
        })?;

        Ok(parse_generation_data(&body, country, date))
    }

    fn fetch_document(&self, country: &str, date: &str) -> Result<String, GenerationError> {
        if self.config.token.is_none() {
            return Err(ApiError::MissingToken.into());
        }
        let request = GenerationRequest::new(country, date)?;
        Ok(self.source.fetch(&request, &self.config)?)
    }

    /// Whether the data source is reachable
    pub fn health_check(&self) -> bool {
        if self.config.use_mock_data {
            info!("[MOCK] Health check successful");
            return true;
        }
        self.source.ping(&self.config).is_ok()
    }
}

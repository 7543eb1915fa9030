//! Data-service configuration
//!
//! Read by [`crate::GenerationService`] only; the parsing pipeline never looks
//! at configuration.
//!
//! # Environment
//!
//! - `ENTSOE_API_BASE_URL` - API host (default `https://web-api.tp.entsoe.eu`)
//! - `ENTSOE_API_TOKEN` - security token (sensitive!)
//! - `ENTSOE_USE_MOCK_DATA` - `"true"` serves fixtures instead of live data

/// Default ENTSO-E transparency platform host
pub const DEFAULT_BASE_URL: &str = "https://web-api.tp.entsoe.eu";

/// Path of the generation endpoint
pub const GENERATION_ENDPOINT: &str = "/api";

/// Request timeout applied by transports
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// ENTSO-E API configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// API host
    ///
    /// Example: `https://web-api.tp.entsoe.eu`
    pub base_url: String,

    /// Endpoint path appended to `base_url`
    pub endpoint: String,

    /// Security token sent as `securityToken` (sensitive!)
    pub token: Option<String>,

    /// Serve fixture data instead of calling the API
    pub use_mock_data: bool,

    /// Timeout for transports, in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: GENERATION_ENDPOINT.to_string(),
            token: None,
            use_mock_data: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    ///
    /// # Example
    /// ```
    /// # use entsoe_generation::ApiConfig;
    /// let config = ApiConfig::from_lookup(|key| match key {
    ///     "ENTSOE_USE_MOCK_DATA" => Some("true".to_string()),
    ///     _ => None,
    /// });
    /// assert!(config.use_mock_data);
    /// assert_eq!(config.base_url, "https://web-api.tp.entsoe.eu");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        ApiConfig {
            base_url: get("ENTSOE_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            token: get("ENTSOE_API_TOKEN"),
            use_mock_data: get("ENTSOE_USE_MOCK_DATA").is_some_and(|v| v == "true"),
            ..ApiConfig::default()
        }
    }

    /// Full URL of the generation endpoint
    pub fn generation_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.endpoint)
    }
}

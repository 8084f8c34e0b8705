//! Client configuration
//!
//! All configuration is code-level: the production origin is a hardcoded
//! constant and callers override pieces through the builder methods. There
//! is no config file, CLI flag or environment variable surface.

/// Production API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.rahal-travel.com";

/// Currency the payment gateway charges in.
pub const DEFAULT_CURRENCY: &str = "IQD";

/// Locale of the externally hosted payment form.
pub const DEFAULT_LOCALE: &str = "ar_IQ";

/// Client configuration for talking to the travel API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "https://api.rahal-travel.com")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Language preference for i18n packs ("ar", "en", ...)
    pub language: String,

    /// Origin the payment gateway redirects back to after the hosted form.
    /// Defaults to the API origin's public-site counterpart.
    pub return_url_base: String,

    /// Currency sent to the payment gateway
    pub currency: String,

    /// Locale of the hosted payment form
    pub locale: String,
}

impl ClientConfig {
    /// Create a new configuration against the given API origin
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            return_url_base: base_url.clone(),
            base_url,
            timeout: 30,
            language: "ar".to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the language preference
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the post-payment return origin
    pub fn with_return_url_base(mut self, base: impl Into<String>) -> Self {
        self.return_url_base = base.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the payment currency
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Set the hosted-form locale
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

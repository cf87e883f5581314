//! Runtime configuration.
//!
//! Credentials are read once and threaded into the orchestrators and the
//! web state as plain values, so tests can build a config without touching
//! the process environment.

use std::time::Duration;
use tracing::debug;

use crate::error::{HunterError, HunterResult};

/// Default Gemini API URL.
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com";

/// Default generation model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Default timeout for a single generation call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Settings for the Gemini generation backend.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Create a config with the default model, URL and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Naver search-ad credentials. Only their presence matters here: a complete
/// set unlocks the `api` analysis mode.
#[derive(Debug, Clone)]
pub struct NaverCredentials {
    pub access_key: String,
    pub secret_key: String,
    pub customer_id: String,
}

impl NaverCredentials {
    /// Build the credential set, or `None` if any of the three values is
    /// missing or blank.
    pub fn from_parts(
        access_key: Option<String>,
        secret_key: Option<String>,
        customer_id: Option<String>,
    ) -> Option<Self> {
        let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Some(Self {
            access_key: non_blank(access_key)?,
            secret_key: non_blank(secret_key)?,
            customer_id: non_blank(customer_id)?,
        })
    }
}

/// Full server-side configuration.
#[derive(Debug, Clone)]
pub struct HunterConfig {
    pub gemini: GeminiConfig,
    pub naver: Option<NaverCredentials>,
}

impl HunterConfig {
    pub fn new(gemini: GeminiConfig) -> Self {
        Self { gemini, naver: None }
    }

    pub fn with_naver(mut self, naver: NaverCredentials) -> Self {
        self.naver = Some(naver);
        self
    }

    /// Load configuration from the environment, reading a `.env` file first
    /// when one is present.
    ///
    /// Fails when `GEMINI_API_KEY` is not set.
    pub fn from_env() -> HunterResult<Self> {
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> HunterResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                HunterError::config("GEMINI_API_KEY is not defined in the environment variables.")
            })?;

        let mut gemini = GeminiConfig::new(api_key);
        if let Some(model) = lookup("GEMINI_MODEL").filter(|m| !m.is_empty()) {
            gemini.model = model;
        }
        if let Some(url) = lookup("GEMINI_BASE_URL").filter(|u| !u.is_empty()) {
            gemini.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(raw) = lookup("GEMINI_TIMEOUT_SECS").filter(|s| !s.trim().is_empty()) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                HunterError::config(format!(
                    "GEMINI_TIMEOUT_SECS must be a whole number of seconds, got '{}'.",
                    raw
                ))
            })?;
            gemini.timeout = Duration::from_secs(secs);
        }

        let naver = NaverCredentials::from_parts(
            lookup("NAVER_ACCESS_KEY"),
            lookup("NAVER_SECRET_KEY"),
            lookup("NAVER_CUSTOMER_ID"),
        );

        debug!(
            model = %gemini.model,
            naver_configured = naver.is_some(),
            "Configuration loaded"
        );

        Ok(Self { gemini, naver })
    }

    /// Whether the `api` analysis mode can be offered.
    pub fn external_api_configured(&self) -> bool {
        self.naver.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_gemini_key_fails() {
        let err = HunterConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, HunterError::Config(_)));
    }

    #[test]
    fn test_defaults() {
        let config = HunterConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "k")])).unwrap();
        assert_eq!(config.gemini.model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.gemini.base_url, DEFAULT_GEMINI_URL);
        assert!(!config.external_api_configured());
    }

    #[test]
    fn test_timeout_override() {
        let config = HunterConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("GEMINI_TIMEOUT_SECS", " 30 "),
        ]))
        .unwrap();
        assert_eq!(config.gemini.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_unparseable_timeout_fails() {
        let err = HunterConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("GEMINI_TIMEOUT_SECS", "2m"),
        ]))
        .unwrap_err();
        assert!(matches!(err, HunterError::Config(_)));
        assert!(err.to_string().contains("GEMINI_TIMEOUT_SECS"));
    }

    #[test]
    fn test_naver_all_or_nothing() {
        let partial = HunterConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("NAVER_ACCESS_KEY", "a"),
            ("NAVER_SECRET_KEY", "s"),
        ]))
        .unwrap();
        assert!(!partial.external_api_configured());

        let full = HunterConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("NAVER_ACCESS_KEY", "a"),
            ("NAVER_SECRET_KEY", "s"),
            ("NAVER_CUSTOMER_ID", "c"),
        ]))
        .unwrap();
        assert!(full.external_api_configured());
    }

    #[test]
    fn test_blank_naver_value_disables_mode() {
        assert!(NaverCredentials::from_parts(
            Some("a".into()),
            Some("  ".into()),
            Some("c".into())
        )
        .is_none());
    }
}

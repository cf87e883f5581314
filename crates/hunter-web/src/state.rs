//! Application state.

use hunter_core::{Analyzer, GeminiClient, GenerationBackend, HunterConfig, HunterResult, PostWriter};
use std::sync::Arc;

/// Application state shared across handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
    pub writer: PostWriter,
    pub external_api_configured: bool,
}

impl AppState {
    /// Build state around any generation backend.
    pub fn new(backend: Arc<dyn GenerationBackend>, external_api_configured: bool) -> Self {
        Self {
            analyzer: Analyzer::new(backend.clone()),
            writer: PostWriter::new(backend),
            external_api_configured,
        }
    }

    /// Build state backed by the Gemini API.
    pub fn from_config(config: &HunterConfig) -> HunterResult<Self> {
        let backend = Arc::new(GeminiClient::new(&config.gemini)?);
        Ok(Self::new(backend, config.external_api_configured()))
    }
}

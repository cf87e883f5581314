//! Generation backend abstraction.
//!
//! The orchestrators only see [`GenerationBackend`]; the Gemini client is
//! one implementation, and tests plug in canned responses.

pub mod gemini;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{HunterError, HunterResult};

pub use gemini::GeminiClient;

/// Temperature for analytic output, where consistency matters most.
pub const ANALYSIS_TEMPERATURE: f32 = 0.5;

/// Temperature for prose, where some variation is welcome.
pub const POST_TEMPERATURE: f32 = 0.7;

/// A single structured generation call.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub schema: Value,
    pub temperature: f32,
}

/// A text model that answers a prompt with JSON text shaped by a schema.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Run the prompt and return the raw text of the answer. An answer with
    /// no text is returned as an empty string, not as an error.
    async fn generate(&self, request: &GenerationRequest) -> HunterResult<String>;
}

/// Parse backend text into a typed result.
///
/// Blank text is an [`HunterError::EmptyResponse`]; anything that does not
/// parse as `T` is [`HunterError::MalformedOutput`].
pub fn parse_response<T: DeserializeOwned>(text: &str) -> HunterResult<T> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(HunterError::EmptyResponse);
    }
    Ok(serde_json::from_str(trimmed)?)
}

/// Send a request to the backend and parse its answer.
pub async fn generate_structured<T: DeserializeOwned>(
    backend: &dyn GenerationBackend,
    request: &GenerationRequest,
) -> HunterResult<T> {
    debug!(
        prompt_len = request.prompt.len(),
        temperature = request.temperature,
        "Calling generation backend"
    );
    let text = backend.generate(request).await?;
    debug!(response_len = text.len(), "Generation backend answered");
    parse_response(&text)
}

//! Blog post generation.

pub mod model;

use std::sync::Arc;
use tracing::{info, warn};

use crate::error::{HunterError, HunterResult};
use crate::generation::{self, GenerationBackend, GenerationRequest, POST_TEMPERATURE};
use crate::prompt;
use crate::schema;

use model::{BlogPostResult, PostGenerationOptions};

/// Post orchestrator. Same contract as [`crate::analysis::Analyzer`], with a
/// higher temperature.
#[derive(Clone)]
pub struct PostWriter {
    backend: Arc<dyn GenerationBackend>,
    temperature: f32,
}

impl PostWriter {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self {
            backend,
            temperature: POST_TEMPERATURE,
        }
    }

    /// Generate a post from raw option keys. Unknown style or length keys
    /// fall back to defaults.
    pub async fn generate_post(
        &self,
        keyword: &str,
        style: &str,
        length: &str,
    ) -> HunterResult<BlogPostResult> {
        self.generate(keyword, &PostGenerationOptions::from_keys(style, length))
            .await
    }

    pub async fn generate(
        &self,
        keyword: &str,
        options: &PostGenerationOptions,
    ) -> HunterResult<BlogPostResult> {
        if keyword.trim().is_empty() {
            return Err(HunterError::validation("글을 생성할 키워드를 입력해주세요."));
        }

        let generation = GenerationRequest {
            prompt: prompt::post_prompt(keyword, options),
            schema: schema::post_schema(),
            temperature: self.temperature,
        };

        let post: BlogPostResult =
            generation::generate_structured(self.backend.as_ref(), &generation).await?;

        for advisory in post.advisories() {
            warn!(%advisory, "Post result outside requested bounds");
        }
        info!(
            style = ?options.style,
            length = ?options.length,
            chars = post.content.chars().count(),
            "Post generated"
        );

        Ok(post)
    }
}

/// Parse backend text as a blog post.
pub fn parse_post(text: &str) -> HunterResult<BlogPostResult> {
    generation::parse_response(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::generation::stub::StubBackend;
    use model::{PostLength, PostStyle};

    const CANNED: &str = r#"{
        "title": "캠핑 의자 고르는 법",
        "content": "첫 문단입니다.\n\n두 번째 문단입니다.",
        "tags": ["캠핑", "캠핑의자", "캠핑용품", "아웃도어", "리뷰"]
    }"#;

    #[tokio::test]
    async fn test_generate_post() {
        let backend = Arc::new(StubBackend::answering(CANNED));
        let writer = PostWriter::new(backend.clone());
        let post = writer.generate_post("캠핑 의자", "review", "500").await.unwrap();

        assert_eq!(post.title, "캠핑 의자 고르는 법");
        assert_eq!(post.paragraphs().count(), 2);

        let sent = backend.last();
        assert_eq!(sent.temperature, POST_TEMPERATURE);
        assert_eq!(sent.schema, schema::post_schema());
        assert!(sent.prompt.contains(PostStyle::Review.descriptor()));
        assert!(sent.prompt.contains(PostLength::Short.descriptor()));
    }

    #[tokio::test]
    async fn test_unknown_style_and_length_do_not_fail() {
        let backend = Arc::new(StubBackend::answering(CANNED));
        let writer = PostWriter::new(backend.clone());
        writer.generate_post("camping gear", "foo", "bar").await.unwrap();

        let prompt = backend.last().prompt;
        assert!(prompt.contains(PostStyle::Natural.descriptor()));
        assert!(prompt.contains(PostLength::Unspecified.descriptor()));
    }

    #[tokio::test]
    async fn test_failure_taxonomy() {
        let writer = PostWriter::new(Arc::new(StubBackend::answering("   ")));
        let err = writer.generate_post("k", "info", "1000").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyResponse);

        let writer = PostWriter::new(Arc::new(StubBackend::answering("[1, 2")));
        let err = writer.generate_post("k", "info", "1000").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedOutput);

        let writer = PostWriter::new(Arc::new(StubBackend::failing("timeout")));
        let err = writer.generate_post("k", "info", "1000").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Upstream);
    }

    #[tokio::test]
    async fn test_blank_keyword_rejected() {
        let backend = Arc::new(StubBackend::answering(CANNED));
        let writer = PostWriter::new(backend.clone());
        let err = writer.generate_post(" ", "info", "1000").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(!backend.was_called());
    }

    #[test]
    fn test_parse_post() {
        assert_eq!(parse_post(CANNED).unwrap().tags.len(), 5);
    }
}

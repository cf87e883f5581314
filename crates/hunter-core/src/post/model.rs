//! Blog post model and generation options.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::contract::{self, check_count, Advisory};

/// A generated blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BlogPostResult {
    #[schemars(description = "생성된 블로그 게시물의 SEO에 최적화된 제목.")]
    pub title: String,

    #[schemars(
        description = "생성된 블로그 게시물의 전체 본문. 지정된 길이에 맞춰서, 그리고 문단을 구분하여 작성되어야 합니다."
    )]
    pub content: String,

    #[schemars(description = "게시물과 관련된 추천 블로그 태그 5-7개.")]
    pub tags: Vec<String>,
}

impl BlogPostResult {
    /// Non-empty paragraphs of the body.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content
            .split('\n')
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    pub fn advisories(&self) -> Vec<Advisory> {
        check_count(self.tags.len(), &contract::TAG_COUNT, Advisory::TagCount)
            .into_iter()
            .collect()
    }
}

/// Writing style of a generated post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PostStyle {
    Review,
    Info,
    Marketing,
    /// Neutral style used for unrecognized keys.
    #[default]
    Natural,
}

impl PostStyle {
    /// Resolve a style key. Unknown keys map to [`PostStyle::Natural`].
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "review" => Self::Review,
            "info" => Self::Info,
            "marketing" => Self::Marketing,
            _ => Self::Natural,
        }
    }

    /// Descriptor inserted verbatim into the prompt.
    pub fn descriptor(&self) -> &'static str {
        match self {
            Self::Review => "실제 사용자가 작성한 것처럼 생생하고 친근한 후기 스타일",
            Self::Info => "객관적인 정보를 체계적으로 정리하여 전달하는 정보성 스타일",
            Self::Marketing => {
                "독자의 흥미를 유발하고 구매나 행동으로 이어지게 만드는 설득적인 마케팅 스타일"
            }
            Self::Natural => "자연스러운 블로그 포스트 스타일",
        }
    }
}

/// Target length of a generated post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PostLength {
    Short,
    Medium,
    Long,
    /// Used for unrecognized keys.
    #[default]
    Unspecified,
}

impl PostLength {
    /// Resolve a length key (`"500"`, `"1000"`, `"1500"`). Unknown keys map
    /// to [`PostLength::Unspecified`].
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "500" => Self::Short,
            "1000" => Self::Medium,
            "1500" => Self::Long,
            _ => Self::Unspecified,
        }
    }

    pub fn descriptor(&self) -> &'static str {
        match self {
            Self::Short => "약 500자 내외",
            Self::Medium => "약 1000자 내외",
            Self::Long => "약 1500자 이상",
            Self::Unspecified => "약 1000자",
        }
    }
}

/// Style and length of a post request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PostGenerationOptions {
    pub style: PostStyle,
    pub length: PostLength,
}

impl PostGenerationOptions {
    pub fn new(style: PostStyle, length: PostLength) -> Self {
        Self { style, length }
    }

    /// Resolve raw option keys. Never fails.
    pub fn from_keys(style: &str, length: &str) -> Self {
        Self {
            style: PostStyle::from_key(style),
            length: PostLength::from_key(length),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_lookup_with_fallback() {
        assert_eq!(PostStyle::from_key("review"), PostStyle::Review);
        assert_eq!(PostStyle::from_key("marketing"), PostStyle::Marketing);
        assert_eq!(PostStyle::from_key("foo"), PostStyle::Natural);
        assert_eq!(PostStyle::from_key(""), PostStyle::Natural);
        assert_eq!(PostStyle::Natural.descriptor(), "자연스러운 블로그 포스트 스타일");
    }

    #[test]
    fn test_length_lookup_with_fallback() {
        assert_eq!(PostLength::from_key("1500"), PostLength::Long);
        assert_eq!(PostLength::from_key("2000"), PostLength::Unspecified);
        assert_eq!(PostLength::Unspecified.descriptor(), "약 1000자");
        assert_ne!(PostLength::Medium.descriptor(), PostLength::Unspecified.descriptor());
    }

    #[test]
    fn test_paragraphs() {
        let post = BlogPostResult {
            title: "t".to_string(),
            content: "첫 문단\n\n둘째 문단\n  \n셋째".to_string(),
            tags: vec![],
        };
        assert_eq!(post.paragraphs().collect::<Vec<_>>(), vec!["첫 문단", "둘째 문단", "셋째"]);
        assert_eq!(post.advisories(), vec![Advisory::TagCount(0)]);
    }
}

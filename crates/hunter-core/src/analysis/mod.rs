//! SEO keyword analysis.
//!
//! [`Analyzer`] turns raw input and a mode into a typed
//! [`model::SeoAnalysisResult`] by way of the generation backend.

pub mod mode;
pub mod model;

use std::sync::Arc;
use tracing::{info, warn};

use crate::error::HunterResult;
use crate::generation::{self, GenerationBackend, GenerationRequest, ANALYSIS_TEMPERATURE};
use crate::schema;

use mode::{AnalysisMode, AnalysisRequest};
use model::SeoAnalysisResult;

/// Analysis orchestrator. Stateless between calls; never retries.
#[derive(Clone)]
pub struct Analyzer {
    backend: Arc<dyn GenerationBackend>,
    temperature: f32,
}

impl Analyzer {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self {
            backend,
            temperature: ANALYSIS_TEMPERATURE,
        }
    }

    /// Analyze raw input in the given mode.
    pub async fn analyze(&self, input: &str, mode: AnalysisMode) -> HunterResult<SeoAnalysisResult> {
        let request = AnalysisRequest::new(mode, input)?;
        self.run(&request).await
    }

    /// Analyze an already validated request.
    pub async fn run(&self, request: &AnalysisRequest) -> HunterResult<SeoAnalysisResult> {
        let generation = GenerationRequest {
            prompt: request.prompt(),
            schema: schema::analysis_schema(),
            temperature: self.temperature,
        };

        let result: SeoAnalysisResult =
            generation::generate_structured(self.backend.as_ref(), &generation).await?;

        for advisory in result.advisories() {
            warn!(mode = %request.mode(), %advisory, "Analysis result outside requested bounds");
        }
        info!(
            mode = %request.mode(),
            search_volume = result.search_volume,
            niche_keywords = result.niche_keywords.len(),
            "Analysis completed"
        );

        Ok(result)
    }
}

/// Parse backend text as an analysis result.
pub fn parse_analysis(text: &str) -> HunterResult<SeoAnalysisResult> {
    generation::parse_response(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, HunterError};
    use crate::generation::stub::StubBackend;
    use crate::prompt::analysis::{MANUAL_DATA_END, MANUAL_DATA_START, SIMULATION_INSTRUCTION};
    use model::CompetitionRate;

    const CANNED: &str = r#"{
        "searchVolume": 50000,
        "pcSearchVolume": 15000,
        "mobileSearchVolume": 35000,
        "competitionRate": "중간",
        "topExposureRecommendation": {
            "recommendedPostCount": {"min": 3, "max": 5},
            "strategy": "모바일 비중이 높으므로 짧은 문단 위주로 작성",
            "reason": "중간 수준의 경쟁"
        },
        "nicheKeywords": [
            {"keyword": "캠핑 의자 추천", "searchVolume": 900, "competitionScore": 25, "reason": "검색량 대비 경쟁 낮음"},
            {"keyword": "경량 텐트", "searchVolume": 700, "competitionScore": 30, "reason": "세부 키워드, 구매 의도"},
            {"keyword": "캠핑 랜턴", "searchVolume": 1200, "competitionScore": 40, "reason": "꾸준한 수요"}
        ],
        "seoChecklist": [
            {"task": "제목에 키워드 1회 포함", "details": "제목은 50자 내외로 작성"}
        ],
        "relatedKeywords": ["텐트", "타프", "코펠", "버너", "침낭", "매트", "랜턴", "의자", "테이블", "아이스박스", "화로대", "캠핑장"]
    }"#;

    fn analyzer(backend: &Arc<StubBackend>) -> Analyzer {
        Analyzer::new(backend.clone())
    }

    #[tokio::test]
    async fn test_simulation_end_to_end() {
        let backend = Arc::new(StubBackend::answering(CANNED));
        let result = analyzer(&backend)
            .analyze("camping gear", AnalysisMode::Simulation)
            .await
            .unwrap();

        let sent = backend.last();
        assert!(sent.prompt.contains("camping gear"));
        assert!(sent.prompt.contains(SIMULATION_INSTRUCTION));
        assert_eq!(sent.temperature, ANALYSIS_TEMPERATURE);
        assert_eq!(sent.schema, schema::analysis_schema());

        assert_eq!(result.competition_rate, CompetitionRate::Medium);
        assert_eq!(
            result.search_volume,
            result.pc_search_volume.unwrap() + result.mobile_search_volume.unwrap()
        );
        assert_eq!(result.niche_keywords.len(), 3);
        assert_eq!(result.related_keywords.len(), 12);
        assert!(result.main_theme.is_none());
        assert!(result.advisories().is_empty());
    }

    #[tokio::test]
    async fn test_manual_prompt_carries_data_block() {
        let data = "캠핑용품,15000,40000\n제주도맛집,10000,200000";
        let backend = Arc::new(StubBackend::answering(CANNED));
        analyzer(&backend).analyze(data, AnalysisMode::Manual).await.unwrap();

        let prompt = backend.last().prompt;
        assert!(prompt.contains(&format!("{}\n{}\n{}", MANUAL_DATA_START, data, MANUAL_DATA_END)));
    }

    #[tokio::test]
    async fn test_empty_response_kind() {
        let backend = Arc::new(StubBackend::answering(""));
        let err = analyzer(&backend)
            .analyze("camping gear", AnalysisMode::Simulation)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyResponse);
    }

    #[tokio::test]
    async fn test_malformed_response_kind() {
        let backend = Arc::new(StubBackend::answering("{not json"));
        let err = analyzer(&backend)
            .analyze("camping gear", AnalysisMode::Api)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedOutput);
    }

    #[tokio::test]
    async fn test_missing_required_field_is_malformed() {
        let backend = Arc::new(StubBackend::answering(r#"{"searchVolume": 10}"#));
        let err = analyzer(&backend)
            .analyze("camping gear", AnalysisMode::Simulation)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedOutput);
    }

    #[tokio::test]
    async fn test_upstream_failure_kind() {
        let backend = Arc::new(StubBackend::failing("quota exceeded"));
        let err = analyzer(&backend)
            .analyze("camping gear", AnalysisMode::Simulation)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Upstream);
    }

    #[tokio::test]
    async fn test_blank_input_never_reaches_backend() {
        let backend = Arc::new(StubBackend::answering(CANNED));
        let err = analyzer(&backend)
            .analyze("   ", AnalysisMode::Simulation)
            .await
            .unwrap_err();
        assert!(matches!(err, HunterError::ValidationError(_)));
        assert!(!backend.was_called());
    }

    #[tokio::test]
    async fn test_out_of_range_result_is_still_returned() {
        let mut value: serde_json::Value = serde_json::from_str(CANNED).unwrap();
        value["relatedKeywords"] = serde_json::json!(["only one"]);
        let backend = Arc::new(StubBackend::answering(value.to_string()));

        let result = analyzer(&backend)
            .analyze("camping gear", AnalysisMode::Simulation)
            .await
            .unwrap();
        assert_eq!(result.related_keywords, vec!["only one"]);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let first = parse_analysis(CANNED).unwrap();
        let second = parse_analysis(CANNED).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_display_title() {
        let mut result = parse_analysis(CANNED).unwrap();

        let simulation = AnalysisRequest::new(AnalysisMode::Simulation, "camping gear").unwrap();
        assert_eq!(simulation.display_title(&result), "camping gear");

        let manual = AnalysisRequest::new(AnalysisMode::Manual, "a,1,2").unwrap();
        assert_eq!(manual.display_title(&result), mode::MANUAL_FALLBACK_TITLE);

        result.main_theme = Some("캠핑 장비".to_string());
        assert_eq!(manual.display_title(&result), "캠핑 장비");
    }
}

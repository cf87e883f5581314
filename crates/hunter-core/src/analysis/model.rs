//! Analysis result model.
//!
//! The `schemars` descriptions double as instructions to the generation
//! backend: [`crate::schema`] turns these types into the response schema sent
//! with every analysis request.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::contract::{self, check_count, Advisory};

/// Structured SEO keyword analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeoAnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(
        description = "분석된 키워드 또는 데이터의 핵심 주제 (예: '캠핑 장비'). '데이터 직접 입력' 모드에서 특히 중요."
    )]
    pub main_theme: Option<String>,

    #[schemars(
        description = "해당 키워드의 총 월간 검색량 (PC+모바일 합산). '데이터 직접 입력' 모드에서는 제공된 모든 키워드의 검색량 합계."
    )]
    pub search_volume: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "월간 PC 검색량 합계. 모든 모드에서 추정치 또는 실제 값 기반으로 생성.")]
    pub pc_search_volume: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "월간 모바일 검색량 합계. 모든 모드에서 추정치 또는 실제 값 기반으로 생성.")]
    pub mobile_search_volume: Option<u64>,

    #[schemars(
        description = "경쟁 강도 (매우 높음, 높음, 중간, 낮음, 매우 낮음 중 하나). '데이터 직접 입력' 모드에서는 전반적인 경쟁 강도."
    )]
    pub competition_rate: CompetitionRate,

    #[schemars(
        description = "상위 노출(검색 결과 첫 페이지)을 위한 구체적인 시뮬레이션 결과. 예상 포스팅 개수와 전략을 포함해야 함."
    )]
    pub top_exposure_recommendation: TopExposureRecommendation,

    #[schemars(
        description = "경쟁은 낮으면서 중간 수준의 검색량(월 수백~수천 건)을 가진 틈새 키워드 3-5개 추천. 너무 검색량이 적은 키워드는 피해주세요. 제공된 데이터 기반으로 추천."
    )]
    pub niche_keywords: Vec<NicheKeyword>,

    #[schemars(description = "해당 키워드/주제로 글 작성 시 지켜야 할 SEO 체크리스트")]
    pub seo_checklist: Vec<SeoChecklistItem>,

    #[schemars(description = "워드클라우드 시각화를 위한 연관 키워드 10-15개")]
    pub related_keywords: Vec<String>,
}

/// Competition level of a keyword or keyword set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum CompetitionRate {
    #[serde(rename = "매우 높음", alias = "very-high")]
    VeryHigh,
    #[serde(rename = "높음", alias = "high")]
    High,
    #[serde(rename = "중간", alias = "medium")]
    Medium,
    #[serde(rename = "낮음", alias = "low")]
    Low,
    #[serde(rename = "매우 낮음", alias = "very-low")]
    VeryLow,
}

impl CompetitionRate {
    pub const ALL: [CompetitionRate; 5] = [
        Self::VeryHigh,
        Self::High,
        Self::Medium,
        Self::Low,
        Self::VeryLow,
    ];

    /// Label as emitted by the model and shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryHigh => "매우 높음",
            Self::High => "높음",
            Self::Medium => "중간",
            Self::Low => "낮음",
            Self::VeryLow => "매우 낮음",
        }
    }

    /// Stable English key.
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::VeryHigh => "very-high",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::VeryLow => "very-low",
        }
    }
}

impl fmt::Display for CompetitionRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Estimated effort to reach the first results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopExposureRecommendation {
    #[schemars(description = "상위 노출을 위해 필요한 고품질 포스팅의 예상 개수 범위.")]
    pub recommended_post_count: PostCountRange,

    #[schemars(
        description = "상위 노출을 위한 블로그 글 작성 전략. PC/모바일 비중, 콘텐츠 유형 등을 고려하여 구체적으로 추천."
    )]
    pub strategy: String,

    #[schemars(description = "왜 해당 개수의 포스팅이 필요하다고 판단했는지에 대한 논리적인 근거.")]
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PostCountRange {
    #[schemars(description = "최소 추천 개수")]
    pub min: u32,
    #[schemars(description = "최대 추천 개수")]
    pub max: u32,
}

/// A recommended keyword with moderate volume and low competition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NicheKeyword {
    pub keyword: String,

    #[schemars(description = "틈새 키워드의 월간 검색량")]
    pub search_volume: u64,

    #[schemars(description = "틈새 키워드의 경쟁 점수 (0-100, 낮을수록 좋음)")]
    pub competition_score: u32,

    #[schemars(description = "이 키워드가 왜 좋은 틈새 키워드인지에 대한 간략한 설명")]
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SeoChecklistItem {
    #[schemars(description = "체크리스트 항목 (예: 제목에 키워드 1회 포함)")]
    pub task: String,

    #[schemars(description = "항목에 대한 구체적인 설명 (예: 제목은 50자 내외로 작성)")]
    pub details: String,
}

impl SeoAnalysisResult {
    /// PC and mobile volumes, when the model provided both.
    pub fn volume_split(&self) -> Option<(u64, u64)> {
        Some((self.pc_search_volume?, self.mobile_search_volume?))
    }

    /// Whether there is any PC/mobile data worth charting.
    pub fn has_device_split(&self) -> bool {
        self.pc_search_volume.unwrap_or(0) > 0 || self.mobile_search_volume.unwrap_or(0) > 0
    }

    /// Share of mobile searches in percent, if the split is known and non-zero.
    pub fn mobile_share(&self) -> Option<f64> {
        let (pc, mobile) = self.volume_split()?;
        // Summed as floats: both volumes come straight from the model.
        let total = pc as f64 + mobile as f64;
        (total > 0.0).then(|| mobile as f64 * 100.0 / total)
    }

    /// Deviations from the requested output contract. Empty when the result
    /// matches every advisory bound.
    pub fn advisories(&self) -> Vec<Advisory> {
        let mut out = Vec::new();

        out.extend(check_count(
            self.niche_keywords.len(),
            &contract::NICHE_KEYWORD_COUNT,
            Advisory::NicheKeywordCount,
        ));
        out.extend(check_count(
            self.related_keywords.len(),
            &contract::RELATED_KEYWORD_COUNT,
            Advisory::RelatedKeywordCount,
        ));

        for niche in &self.niche_keywords {
            if !contract::COMPETITION_SCORE.contains(&niche.competition_score) {
                out.push(Advisory::CompetitionScoreOutOfRange {
                    keyword: niche.keyword.clone(),
                    score: niche.competition_score,
                });
            }
        }

        let range = self.top_exposure_recommendation.recommended_post_count;
        if range.min > range.max {
            out.push(Advisory::PostCountRangeInverted {
                min: range.min,
                max: range.max,
            });
        }

        if let Some((pc, mobile)) = self.volume_split() {
            if pc.saturating_add(mobile) != self.search_volume {
                out.push(Advisory::VolumeSplitMismatch {
                    total: self.search_volume,
                    pc,
                    mobile,
                });
            }
        }

        out
    }
}

//! Analysis modes and mode-tagged requests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{HunterError, HunterResult};
use crate::prompt;

use super::model::SeoAnalysisResult;

/// How the analysis input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// A single keyword; all figures are invented by the model.
    Simulation,
    /// Caller-supplied `keyword,pc,mobile` records the model aggregates.
    Manual,
    /// A single keyword analysed as if fetched from the Naver ad API.
    Api,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 3] = [Self::Simulation, Self::Manual, Self::Api];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simulation => "simulation",
            Self::Manual => "manual",
            Self::Api => "api",
        }
    }

    /// Heading shown above an analysis produced in this mode.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Simulation => "AI 시뮬레이션",
            Self::Manual => "가져온 데이터 분석",
            Self::Api => "네이버 API 직접 분석",
        }
    }

    /// Whether this mode needs the Naver credential set on the server.
    pub fn requires_external_api(&self) -> bool {
        matches!(self, Self::Api)
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisMode {
    type Err = HunterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simulation" => Ok(Self::Simulation),
            "manual" => Ok(Self::Manual),
            "api" => Ok(Self::Api),
            other => Err(HunterError::validation(format!(
                "Unknown analysis mode '{}'. Expected simulation, manual or api.",
                other
            ))),
        }
    }
}

/// A validated analysis request. Each variant carries only what its mode
/// needs, and builds its own prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisRequest {
    Simulation { keyword: String },
    Manual { data: String },
    Api { keyword: String },
}

impl AnalysisRequest {
    /// Tag raw input with a mode. The input is kept exactly as given; it is
    /// only rejected when blank.
    pub fn new(mode: AnalysisMode, input: impl Into<String>) -> HunterResult<Self> {
        let input = input.into();
        if input.trim().is_empty() {
            return Err(HunterError::validation("분석할 키워드나 데이터를 입력해주세요."));
        }

        Ok(match mode {
            AnalysisMode::Simulation => Self::Simulation { keyword: input },
            AnalysisMode::Manual => Self::Manual { data: input },
            AnalysisMode::Api => Self::Api { keyword: input },
        })
    }

    pub fn mode(&self) -> AnalysisMode {
        match self {
            Self::Simulation { .. } => AnalysisMode::Simulation,
            Self::Manual { .. } => AnalysisMode::Manual,
            Self::Api { .. } => AnalysisMode::Api,
        }
    }

    /// The raw input this request was built from.
    pub fn input(&self) -> &str {
        match self {
            Self::Simulation { keyword } | Self::Api { keyword } => keyword,
            Self::Manual { data } => data,
        }
    }

    /// Instruction text for the generation backend.
    pub fn prompt(&self) -> String {
        match self {
            Self::Simulation { keyword } => prompt::analysis::simulation_prompt(keyword),
            Self::Manual { data } => prompt::analysis::manual_prompt(data),
            Self::Api { keyword } => prompt::analysis::api_prompt(keyword),
        }
    }

    /// Title to show for a result of this request: the keyword itself, or
    /// the model's theme for imported data.
    pub fn display_title(&self, result: &SeoAnalysisResult) -> String {
        match self {
            Self::Simulation { keyword } | Self::Api { keyword } => keyword.clone(),
            Self::Manual { .. } => result
                .main_theme
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .unwrap_or(MANUAL_FALLBACK_TITLE)
                .to_string(),
        }
    }
}

/// Title used for imported data when the model returned no theme.
pub const MANUAL_FALLBACK_TITLE: &str = "직접 입력 데이터";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("simulation".parse::<AnalysisMode>().unwrap(), AnalysisMode::Simulation);
        assert_eq!(" API ".parse::<AnalysisMode>().unwrap(), AnalysisMode::Api);
        assert!("naver".parse::<AnalysisMode>().is_err());
    }

    #[test]
    fn test_mode_serde() {
        let mode: AnalysisMode = serde_json::from_str("\"manual\"").unwrap();
        assert_eq!(mode, AnalysisMode::Manual);
        assert_eq!(serde_json::to_string(&AnalysisMode::Api).unwrap(), "\"api\"");
    }

    #[test]
    fn test_blank_input_rejected() {
        let err = AnalysisRequest::new(AnalysisMode::Simulation, "  \n ").unwrap_err();
        assert!(matches!(err, HunterError::ValidationError(_)));
    }

    #[test]
    fn test_input_kept_verbatim() {
        let request = AnalysisRequest::new(AnalysisMode::Manual, "  캠핑용품,15000,40000\n").unwrap();
        assert_eq!(request.input(), "  캠핑용품,15000,40000\n");
        assert_eq!(request.mode(), AnalysisMode::Manual);
    }

    #[test]
    fn test_only_api_requires_external_api() {
        let gated: Vec<_> = AnalysisMode::ALL
            .iter()
            .filter(|m| m.requires_external_api())
            .collect();
        assert_eq!(gated, vec![&AnalysisMode::Api]);
    }
}

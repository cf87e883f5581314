//! Logic Hunter Core Library
//!
//! Prompt construction, response schemas and the two orchestrators
//! (keyword analysis and blog post generation) that delegate content
//! generation to a text model.

pub mod analysis;
pub mod config;
pub mod contract;
pub mod error;
pub mod export;
pub mod generation;
pub mod post;
pub mod prompt;
pub mod schema;

pub use analysis::mode::{AnalysisMode, AnalysisRequest};
pub use analysis::model::{CompetitionRate, SeoAnalysisResult};
pub use analysis::Analyzer;
pub use config::HunterConfig;
pub use error::{ErrorKind, HunterError, HunterResult};
pub use generation::{GeminiClient, GenerationBackend, GenerationRequest};
pub use post::model::{BlogPostResult, PostGenerationOptions};
pub use post::PostWriter;

//! Prompt construction.
//!
//! Every function here is pure and total: unknown options fall back to
//! defaults instead of failing.

pub mod analysis;
pub mod post;

/// Closing requirement shared by every prompt.
pub const SCHEMA_REQUIREMENT: &str =
    "최종 결과는 반드시 아래에 정의된 JSON 스키마에 정확히 맞춰서 생성해주세요.";

pub use analysis::{api_prompt, manual_prompt, simulation_prompt};
pub use post::post_prompt;

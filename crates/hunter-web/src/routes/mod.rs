//! Route handlers.

pub mod analyze;
pub mod post;
pub mod status;

use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use hunter_core::{ErrorKind, HunterError};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Error payload returned with every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

pub fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
}

pub fn bad_request(message: impl Into<String>) -> ApiError {
    api_error(StatusCode::BAD_REQUEST, message)
}

/// Reject bodies that are not JSON objects with the same `{error}` shape
/// as every other failure.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| bad_request(rejection.body_text()))
}

/// A field value that is present and not blank.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Map an orchestrator failure onto a status code and message. Backend
/// failures get `generic`, except an empty answer, which keeps its own
/// message.
pub(crate) fn orchestrator_error(err: HunterError, generic: &str) -> ApiError {
    error!(error = %err, kind = ?err.kind(), "Request failed");
    match err.kind() {
        ErrorKind::Validation | ErrorKind::Unavailable => bad_request(err.to_string()),
        ErrorKind::EmptyResponse => api_error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        _ => api_error(StatusCode::INTERNAL_SERVER_ERROR, generic),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present() {
        assert_eq!(present(Some("x".into())), Some("x".to_string()));
        assert_eq!(present(Some("  ".into())), None);
        assert_eq!(present(None), None);
    }

    #[test]
    fn test_orchestrator_error_mapping() {
        let (status, body) = orchestrator_error(HunterError::EmptyResponse, "generic");
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "AI 모델로부터 비어있는 응답을 받았습니다.");

        let (status, body) = orchestrator_error(HunterError::upstream("401"), "generic");
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "generic");

        let (status, _) = orchestrator_error(HunterError::validation("blank"), "generic");
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

//! API error bodies

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::error::BodaiError;
use crate::onboarding::FieldErrors;

/// JSON error body: `{"error": ...}`, plus per-field messages for profiles
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

/// Result type for handlers
pub type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fields: None,
        }
    }

    /// A 400 response carrying field errors
    pub fn invalid_fields(fields: FieldErrors) -> (StatusCode, Json<ApiError>) {
        (
            StatusCode::BAD_REQUEST,
            Json(Self {
                error: "Profile is incomplete".into(),
                fields: Some(fields),
            }),
        )
    }

    pub fn bad_request(error: impl Into<String>) -> (StatusCode, Json<ApiError>) {
        (StatusCode::BAD_REQUEST, Json(Self::new(error)))
    }

    pub fn internal() -> (StatusCode, Json<ApiError>) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(Self::new("Internal server error")),
        )
    }
}

impl From<BodaiError> for (StatusCode, Json<ApiError>) {
    fn from(err: BodaiError) -> Self {
        match err {
            BodaiError::Validation(message) => ApiError::bad_request(message),
            BodaiError::Duplicate { entity_type, .. } => {
                ApiError::bad_request(format!("{} already exists", entity_type))
            }
            other => {
                tracing::error!(error = %other, "request failed");
                ApiError::internal()
            }
        }
    }
}

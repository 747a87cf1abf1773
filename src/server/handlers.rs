//! Request handlers

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::BodaiResult;
use crate::models::{Profile, ProfileId, PublicUser};
use crate::onboarding::validate_profile;
use crate::services::{ProfileService, RegisterRequest, RegistrationService};

use super::error::{ApiError, ApiResult};
use super::AppState;

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to the AI Fitness API" }))
}

pub async fn healthz() -> &'static str {
    "ok"
}

/// Run a blocking service call off the async workers
async fn blocking<T, F>(state: Arc<AppState>, work: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&AppState) -> BodaiResult<T> + Send + 'static,
{
    tokio::task::spawn_blocking(move || work(state.as_ref()))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "service task panicked");
            ApiError::internal()
        })?
        .map_err(Into::into)
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<Json<PublicUser>> {
    let Json(request) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let user = blocking(state, move |state| {
        RegistrationService::new(&state.storage, &state.settings.password_hashing)
            .register(&request)
    })
    .await?;

    Ok(Json(user))
}

/// Profile answers plus the submitter's email
#[derive(Debug, Deserialize)]
pub struct ProfileSubmission {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(flatten)]
    pub profile: Profile,
}

#[derive(Debug, Serialize)]
pub struct ProfileCreated {
    pub id: ProfileId,
}

pub async fn submit_profile(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProfileSubmission>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ProfileCreated>)> {
    let Json(ProfileSubmission { email, mut profile }) =
        payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    profile.normalize();
    let errors = validate_profile(&profile);
    if !errors.is_empty() {
        return Err(ApiError::invalid_fields(errors));
    }

    let submitted = blocking(state, move |state| {
        ProfileService::new(&state.storage).submit(profile, email)
    })
    .await?;

    Ok((StatusCode::CREATED, Json(ProfileCreated { id: submitted.id })))
}

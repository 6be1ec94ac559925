use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::profile::ApplicantProfile;
use super::service::RecommendationService;

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: ApplicantProfile,
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub query: String,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Router builder exposing profile extraction and scheme recommendation.
pub fn recommendation_router(service: Arc<RecommendationService>) -> Router {
    Router::new()
        .route("/api/v1/profile", post(profile_handler))
        .route("/api/v1/recommendations", post(recommendation_handler))
        .with_state(service)
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, axum::Json(json!({ "error": message }))).into_response()
}

fn empty_text(field: &str) -> Response {
    error_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        format!("`{field}` must not be empty"),
    )
}

/// Malformed or incomplete bodies keep axum's status but use the JSON error shape.
fn rejected_body(rejection: JsonRejection) -> Response {
    error_response(rejection.status(), rejection.body_text())
}

pub(crate) async fn profile_handler(
    State(service): State<Arc<RecommendationService>>,
    body: Result<axum::Json<ProfileRequest>, JsonRejection>,
) -> Response {
    let axum::Json(request) = match body {
        Ok(request) => request,
        Err(rejection) => return rejected_body(rejection),
    };
    if request.text.trim().is_empty() {
        return empty_text("text");
    }

    let profile = service.extract(&request.text);
    let response = ProfileResponse {
        summary: profile.summary(),
        profile,
    };
    (StatusCode::OK, axum::Json(response)).into_response()
}

pub(crate) async fn recommendation_handler(
    State(service): State<Arc<RecommendationService>>,
    body: Result<axum::Json<RecommendationRequest>, JsonRejection>,
) -> Response {
    let axum::Json(request) = match body {
        Ok(request) => request,
        Err(rejection) => return rejected_body(rejection),
    };
    if request.query.trim().is_empty() {
        return empty_text("query");
    }

    let recommendation = service
        .recommend_with_limit(&request.query, request.limit)
        .await;
    (StatusCode::OK, axum::Json(recommendation)).into_response()
}

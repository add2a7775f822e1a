use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value as JsonValue;

use crate::dto::candidate_dto::{CreateCandidateRequest, UpdateCandidateRequest};
use crate::error::Result;
use crate::models::candidate::Candidate;
use crate::utils::validation;
use crate::AppState;

pub async fn list_candidates(State(state): State<AppState>) -> Result<Json<Vec<Candidate>>> {
    let candidates = state.candidate_service.list_candidates().await?;
    Ok(Json(candidates))
}

pub async fn create_candidate(
    State(state): State<AppState>,
    Json(payload): Json<JsonValue>,
) -> Result<impl IntoResponse> {
    let request: CreateCandidateRequest = serde_json::from_value(payload)?;
    validation::validate(&request)?;

    let candidate = state
        .candidate_service
        .create_candidate(request.normalize())
        .await?;
    Ok((StatusCode::CREATED, Json(candidate)))
}

pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCandidateRequest>,
) -> Result<impl IntoResponse> {
    let candidate = state.candidate_service.update_candidate(id, payload).await?;

    // An unmatched id responds 200 with no body, matching the existing contract.
    Ok(match candidate {
        Some(candidate) => (StatusCode::OK, Json(candidate)).into_response(),
        None => StatusCode::OK.into_response(),
    })
}

pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    state.candidate_service.delete_candidate(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

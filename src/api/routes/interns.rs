//! Intern Routes
//!
//! POST /api/intern/create/ - register a new intern.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::{CreateInternRequest, CreateInternResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// POST /api/intern/create/
///
/// Presence checks only; the dashboard performs no deeper validation.
pub async fn create_intern(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateInternRequest>,
) -> ApiResult<(StatusCode, Json<CreateInternResponse>)> {
    let name = request.name.trim();
    let email = request.email.trim();

    if name.is_empty() || email.is_empty() {
        return Err(ApiError::Validation(
            "Name and email are required".to_string(),
        ));
    }

    let intern = state.registry.create(name, email);
    tracing::info!(intern_id = intern.id, name = %intern.name, "intern created");

    Ok((
        StatusCode::CREATED,
        Json(CreateInternResponse {
            message: "Intern created successfully".to_string(),
            intern,
        }),
    ))
}

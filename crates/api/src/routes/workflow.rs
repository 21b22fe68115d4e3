//! Expense workflow routes.
//!
//! One transition endpoint replaces the separate "log action" and
//! "change status" calls, so the status change and its audit entry are
//! applied together or not at all.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{
    AppState,
    error::{error_response, workflow_error_response},
    extract::{JsonBody, PathParam},
    middleware::AuthUser,
};
use expensa_core::workflow::{ExpenseStatus, TransitionKind};
use expensa_db::repositories::WorkflowRepository;

/// Creates the workflow routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/Expense/{id}/available-actions", get(available_actions))
        .route("/Expense/{id}/transition", post(transition))
        .route("/Expense/{id}/actions", get(history))
}

/// Request body for a transition.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionRequest {
    /// `approval` or `return`.
    pub action: String,
    /// Note recorded with the action.
    #[serde(default)]
    pub notes: String,
    /// Status the client saw when it decided; rejected as stale if it moved.
    pub expected_status: Option<ExpenseStatus>,
}

/// POST `/Expense/{id}/transition` - Approve or return a record.
async fn transition(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(id): PathParam<Uuid>,
    JsonBody(payload): JsonBody<TransitionRequest>,
) -> impl IntoResponse {
    let Some(kind) = TransitionKind::parse(&payload.action) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "INVALID_ACTION",
            "Action must be 'approval' or 'return'",
            false,
        );
    };

    let repo = WorkflowRepository::new(Arc::clone(&state.db));
    match repo
        .record_transition(
            id,
            kind,
            &auth.actor(),
            &payload.notes,
            payload.expected_status,
        )
        .await
    {
        Ok(outcome) => {
            info!(
                expense_id = %id,
                from = %outcome.from,
                to = %outcome.to,
                profile_id = %auth.profile_id(),
                "transition recorded"
            );
            (StatusCode::OK, Json(outcome)).into_response()
        }
        Err(e) => workflow_error_response(&e),
    }
}

/// GET `/Expense/{id}/available-actions` - What the caller may do now.
async fn available_actions(
    State(state): State<AppState>,
    auth: AuthUser,
    PathParam(id): PathParam<Uuid>,
) -> impl IntoResponse {
    let repo = WorkflowRepository::new(Arc::clone(&state.db));

    match repo.available_actions(id, &auth.actor()).await {
        Ok(actions) => (StatusCode::OK, Json(actions)).into_response(),
        Err(e) => workflow_error_response(&e),
    }
}

/// GET `/Expense/{id}/actions` - Audit trail, oldest first.
async fn history(
    State(state): State<AppState>,
    _auth: AuthUser,
    PathParam(id): PathParam<Uuid>,
) -> impl IntoResponse {
    let repo = WorkflowRepository::new(Arc::clone(&state.db));

    match repo.history(id).await {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(e) => workflow_error_response(&e),
    }
}

//! Error responses.
//!
//! Every failure leaves a handler as
//! `{ "error": CODE, "message": text, "severity": "warning" | "error" }`.
//! Malformed input is caught by the extractors in [`crate::extract`],
//! which answer in the same shape.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use expensa_core::workflow::WorkflowError;
use expensa_db::repositories::ExpenseError;
use expensa_shared::AppError;

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    /// Machine-readable code.
    pub error: &'a str,
    /// Text safe to show to the user.
    pub message: &'a str,
    /// `warning` or `error`.
    pub severity: &'static str,
}

/// Builds an error response.
pub fn error_response(status: StatusCode, code: &str, message: &str, warning: bool) -> Response {
    let body = ErrorBody {
        error: code,
        message,
        severity: if warning { "warning" } else { "error" },
    };
    (status, Json(body)).into_response()
}

fn status_from(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Maps a workflow error to its response.
pub fn workflow_error_response(e: &WorkflowError) -> Response {
    match e {
        WorkflowError::PersistenceFailure(detail) => {
            tracing::error!(error = %detail, "workflow persistence failure");
        }
        WorkflowError::IllegalTransition { .. } | WorkflowError::StaleStatus { .. } => {
            tracing::info!(error = %e, "workflow transition refused");
        }
        _ => tracing::debug!(error = %e, "workflow request rejected"),
    }

    error_response(
        status_from(e.status_code()),
        e.error_code(),
        e.user_message(),
        e.is_warning(),
    )
}

/// Maps an expense repository error to its response.
pub fn expense_error_response(e: ExpenseError) -> Response {
    app_error_response(&AppError::from(e))
}

/// Maps a general application error to its response.
pub fn app_error_response(e: &AppError) -> Response {
    if e.is_internal() {
        tracing::error!(error = %e, "request failed");
        return error_response(
            status_from(e.status_code()),
            e.error_code(),
            "The request could not be completed. Please try again.",
            false,
        );
    }

    tracing::debug!(error = %e, "request rejected");
    error_response(
        status_from(e.status_code()),
        e.error_code(),
        e.detail(),
        false,
    )
}

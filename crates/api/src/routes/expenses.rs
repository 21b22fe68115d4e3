//! Monthly expense routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{
    AppState,
    error::{app_error_response, expense_error_response},
    extract::{JsonBody, PathParam, QueryParams},
    middleware::AuthUser,
};
use expensa_core::expense::{NewDailyExpense, NewMonthlyExpense};
use expensa_core::workflow::ExpenseStatus;
use expensa_db::repositories::{ExpenseFilter, ExpenseRepository};
use expensa_shared::AppError;
use expensa_shared::types::PageRequest;

/// Creates the expense routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/Expense", get(list_expenses).post(create_expense))
        .route("/Expense/pending", get(pending_expenses))
        .route("/Expense/{id}", get(get_expense))
}

// ============================================================================
// Request Types
// ============================================================================

/// Request body for a new record.
///
/// The record belongs to the caller: owner ID and name come from the token.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    /// Owning office.
    pub office: String,
    /// Governorate the office belongs to.
    pub governorate: String,
    /// Daily line items.
    #[serde(default)]
    pub daily_expenses: Vec<NewDailyExpense>,
    /// Free-text notes.
    pub notes: Option<String>,
}

impl CreateExpenseRequest {
    fn owned_by(self, auth: &AuthUser) -> NewMonthlyExpense {
        NewMonthlyExpense {
            office: self.office,
            governorate: self.governorate,
            supervisor_profile_id: auth.profile_id(),
            supervisor_name: auth.0.name.clone(),
            daily_expenses: self.daily_expenses,
            notes: self.notes,
        }
    }
}

/// Query parameters for listing records.
#[derive(Debug, Default, Deserialize)]
pub struct ListExpensesQuery {
    /// Status code (`3`) or name (`SentToManager`).
    pub status: Option<String>,
    /// Office, exact match.
    pub office: Option<String>,
    /// Owning supervisor.
    pub supervisor: Option<Uuid>,
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Page size (default: 20, max: 100).
    pub per_page: Option<u32>,
}

/// Reads a status given either as its wire code or its name.
fn parse_status(raw: &str) -> Option<ExpenseStatus> {
    let raw = raw.trim();
    raw.parse::<i16>()
        .ok()
        .map_or_else(|| ExpenseStatus::parse(raw), ExpenseStatus::from_code)
}

// ============================================================================
// Handlers
// ============================================================================

/// POST `/Expense` - Create a record in `New`, owned by the caller.
async fn create_expense(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(payload): JsonBody<CreateExpenseRequest>,
) -> impl IntoResponse {
    let repo = ExpenseRepository::new(Arc::clone(&state.db));
    let input = payload.owned_by(&auth);

    match repo.create(&input).await {
        Ok(record) => {
            info!(
                expense_id = %record.id,
                profile_id = %auth.profile_id(),
                "expense record submitted"
            );
            (StatusCode::CREATED, Json(record)).into_response()
        }
        Err(e) => expense_error_response(e),
    }
}

/// GET `/Expense` - List records with filters.
async fn list_expenses(
    State(state): State<AppState>,
    _auth: AuthUser,
    QueryParams(query): QueryParams<ListExpensesQuery>,
) -> impl IntoResponse {
    let status = match query.status.as_deref() {
        None => None,
        Some(raw) => match parse_status(raw) {
            Some(status) => Some(status),
            None => {
                let err = AppError::Validation(format!("Unknown status '{raw}'"));
                return app_error_response(&err);
            }
        },
    };

    let filter = ExpenseFilter {
        status,
        office: query.office,
        supervisor_profile_id: query.supervisor,
    };
    let defaults = PageRequest::default();
    let page = PageRequest {
        page: query.page.unwrap_or(defaults.page),
        per_page: query.per_page.unwrap_or(defaults.per_page),
    };

    let repo = ExpenseRepository::new(Arc::clone(&state.db));
    match repo.list(&filter, page).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => expense_error_response(e),
    }
}

/// GET `/Expense/pending` - Records the caller can approve or return.
async fn pending_expenses(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    let repo = ExpenseRepository::new(Arc::clone(&state.db));

    match repo.pending_for_actor(&auth.actor()).await {
        Ok(pending) => (StatusCode::OK, Json(pending)).into_response(),
        Err(e) => expense_error_response(e),
    }
}

/// GET `/Expense/{id}` - Record with its daily lines.
async fn get_expense(
    State(state): State<AppState>,
    _auth: AuthUser,
    PathParam(id): PathParam<Uuid>,
) -> impl IntoResponse {
    let repo = ExpenseRepository::new(Arc::clone(&state.db));

    match repo.get(id).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => expense_error_response(e),
    }
}

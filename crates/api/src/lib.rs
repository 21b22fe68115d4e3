//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - Expense record routes
//! - Workflow transition routes
//! - Authentication middleware
//! - Error response mapping, including extractor rejections

pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;

use axum::{Router, http::header::AUTHORIZATION};
use expensa_shared::JwtService;
use sea_orm::DatabaseConnection;
use std::{iter::once, sync::Arc};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// JWT service for token validation.
    pub jwt_service: Arc<JwtService>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::api_routes_with_state(state.clone()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(SetSensitiveRequestHeadersLayer::new(once(AUTHORIZATION)))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::{AppState, create_router};
    use axum::{body::Body, http::Request, response::Response};
    use expensa_shared::{JwtConfig, JwtService};
    use http_body_util::BodyExt;
    use sea_orm::MockDatabase;
    use std::sync::Arc;
    use tower::ServiceExt;
    use uuid::Uuid;

    pub fn mock_state(db: MockDatabase) -> AppState {
        AppState {
            db: Arc::new(db.into_connection()),
            jwt_service: Arc::new(JwtService::new(JwtConfig::default())),
        }
    }

    /// Authorization header value for a fresh profile holding `position`.
    pub fn bearer(state: &AppState, position: &str) -> String {
        bearer_for(state, Uuid::new_v4(), position)
    }

    /// Authorization header value for `profile_id`.
    pub fn bearer_for(state: &AppState, profile_id: Uuid, position: &str) -> String {
        let token = state
            .jwt_service
            .generate_access_token(profile_id, "Test Profile", position)
            .unwrap();
        format!("Bearer {token}")
    }

    pub async fn send(state: AppState, request: Request<Body>) -> Response {
        create_router(state).oneshot(request).await.unwrap()
    }

    pub async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }
}

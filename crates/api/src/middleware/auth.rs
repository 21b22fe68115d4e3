//! Authentication middleware for protected routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::AppState;
use crate::error::{app_error_response, error_response};
use expensa_core::workflow::ActorContext;
use expensa_shared::{AppError, Claims, JwtError};

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Authentication middleware that validates JWT tokens.
///
/// This middleware:
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Validates the token using the JWT service
/// 3. Stores the claims in request extensions for handlers to access
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(token) = auth_header.and_then(extract_bearer_token) else {
        return error_response(
            StatusCode::UNAUTHORIZED,
            "MISSING_TOKEN",
            "Authorization header with Bearer token is required",
            false,
        );
    };

    match state.jwt_service.validate_token(token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(e) => {
            tracing::debug!(error = %e, "rejected access token");
            let (code, message) = match e {
                JwtError::Expired => ("TOKEN_EXPIRED", "Token has expired"),
                _ => ("INVALID_TOKEN", "Invalid or malformed token"),
            };
            error_response(StatusCode::UNAUTHORIZED, code, message, false)
        }
    }
}

/// Extractor for the authenticated profile.
///
/// ```ignore
/// async fn handler(auth: AuthUser) -> impl IntoResponse {
///     let actor = auth.actor();
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Returns the profile ID from the claims.
    #[must_use]
    pub fn profile_id(&self) -> uuid::Uuid {
        self.0.profile_id()
    }

    /// Builds the actor passed to workflow calls.
    #[must_use]
    pub fn actor(&self) -> ActorContext {
        ActorContext::new(self.0.sub, self.0.name.clone(), self.0.position.clone())
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                app_error_response(&AppError::Unauthorized(
                    "Authentication required".to_string(),
                ))
            })
    }
}

//! Request extractors that answer in the API error shape.
//!
//! axum rejects a malformed body, path segment or query string with a
//! plain-text response. These wrappers run the same extractors and turn the
//! rejection into the usual `{ error, message, severity }` body, keeping
//! axum's status code (400, 415 or 422).

use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Query, Request,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, request::Parts},
    response::Response,
};
use serde::de::DeserializeOwned;

use crate::error::error_response;

fn rejected(code: &str, status: StatusCode, detail: &str) -> Response {
    tracing::debug!(%status, code, detail, "request rejected before the handler");
    error_response(status, code, detail, false)
}

/// JSON request body.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(|e: JsonRejection| rejected("INVALID_BODY", e.status(), &e.body_text()))
    }
}

/// Path parameters.
#[derive(Debug)]
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| Self(value))
            .map_err(|e: PathRejection| rejected("INVALID_PATH", e.status(), &e.body_text()))
    }
}

/// Query string parameters.
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| Self(value))
            .map_err(|e: QueryRejection| rejected("INVALID_QUERY", e.status(), &e.body_text()))
    }
}

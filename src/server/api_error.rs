//! JSON error responses and the extractors that produce them.
//!
//! Every error leaves the server as `{"detail": ["..."]}`. Rejections from
//! body, path and query extraction are reported as 422 so that malformed
//! input is always distinguishable from a missing entity.

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, FromRequest, FromRequestParts},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::QueryRejection;
use serde::Serialize;
use tracing::{debug, error};

use super::metrics::record_error;
use crate::shop_store::StoreError;

#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    NotFound(String),
    MethodNotAllowed,
    Unprocessable(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: Vec<String>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "not_found",
            ApiError::MethodNotAllowed => "method_not_allowed",
            ApiError::Unprocessable(_) => "validation",
            ApiError::Internal(_) => "internal",
        }
    }

    fn message(self) -> String {
        match self {
            ApiError::NotFound(m) | ApiError::Unprocessable(m) | ApiError::Internal(m) => m,
            ApiError::MethodNotAllowed => "Method Not Allowed".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        record_error(self.kind());
        if status.is_server_error() {
            error!("Request failed: {:?}", self);
        } else {
            debug!("Request rejected: {:?}", self);
        }
        let body = ErrorBody {
            detail: vec![self.message()],
        };
        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MovieNotFound(_) | StoreError::ShopNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            StoreError::Validation(_) => ApiError::Unprocessable(err.to_string()),
            StoreError::LockPoisoned => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Unprocessable(rejection.to_string())
    }
}

/// `axum::Json` with rejections turned into [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` with rejections turned into [`ApiError`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// Multi-value query extractor with rejections turned into [`ApiError`].
#[derive(FromRequestParts)]
#[from_request(via(axum_extra::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

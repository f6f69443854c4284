// src/server/problem.rs

//! RFC 7807 problem responses and the handler error type

use crate::catalog::FieldErrors;
use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Error response format (RFC 7807)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiProblem {
    /// Error type URI
    #[serde(rename = "type")]
    pub error_type: String,
    /// Human-readable title
    pub title: String,
    /// HTTP status code
    pub status: u16,
    /// Detailed description
    pub detail: String,
    /// Instance URI (the request that caused the error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    /// Additional error-specific data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}

impl ApiProblem {
    pub fn new(error_type: &str, title: &str, status: u16, detail: &str) -> Self {
        Self {
            error_type: format!("urn:larder:error:{}", error_type),
            title: title.to_string(),
            status,
            detail: detail.to_string(),
            instance: None,
            extensions: None,
        }
    }

    pub fn not_found(resource: &str) -> Self {
        Self::new("not_found", "Not Found", 404, &format!("{} not found", resource))
    }

    pub fn bad_request(detail: &str) -> Self {
        Self::new("bad_request", "Bad Request", 400, detail)
    }

    pub fn internal(detail: &str) -> Self {
        Self::new("internal", "Internal Error", 500, detail)
    }

    /// Validation failure listing every offending field under `extensions.fields`
    pub fn validation(fields: &FieldErrors) -> Self {
        let mut problem = Self::new("validation", "Validation Failed", 400, &fields.to_string());
        problem.extensions = Some(serde_json::json!({ "fields": fields }));
        problem
    }
}

/// Error returned by every handler
#[derive(Debug)]
pub struct ApiError(pub ApiProblem);

impl From<ApiProblem> for ApiError {
    fn from(problem: ApiProblem) -> Self {
        ApiError(problem)
    }
}

impl From<crate::Error> for ApiError {
    fn from(err: crate::Error) -> Self {
        match err {
            crate::Error::NotFoundError(msg) => ApiError(ApiProblem::new(
                "not_found",
                "Not Found",
                404,
                &msg,
            )),
            crate::Error::ValidationError(fields) => {
                warn!("Rejected request: {}", fields);
                ApiError(ApiProblem::validation(&fields))
            }
            other => {
                error!("Request failed: {}", other);
                ApiError(ApiProblem::internal(&other.to_string()))
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("Rejected request body: {}", rejection.body_text());
        ApiError(ApiProblem::bad_request(&rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        warn!("Rejected query string: {}", rejection.body_text());
        ApiError(ApiProblem::bad_request(&rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (
            status,
            [("content-type", "application/problem+json")],
            Json(&self.0),
        )
            .into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// JSON body extractor whose rejections are problem responses
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor whose rejections are problem responses
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

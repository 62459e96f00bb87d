//! Response envelope and error mapping.
//!
//! Every response — success or failure — is wrapped in one envelope shape:
//! a success carries `httpStatus` + `data`, a failure carries `httpStatus` +
//! `exceptionMessages.errors`. Exactly one of the two payload fields is
//! serialized per response.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use userd_core::DomainError;

/// Tagged response envelope.
pub enum ApiResult<T> {
    Success { status: StatusCode, data: T },
    Failure { status: StatusCode, errors: Vec<String> },
}

impl<T> ApiResult<T> {
    pub fn ok(data: T) -> Self {
        Self::Success {
            status: StatusCode::OK,
            data,
        }
    }

    pub fn created(data: T) -> Self {
        Self::Success {
            status: StatusCode::CREATED,
            data,
        }
    }

    pub fn failure(status: StatusCode, errors: Vec<String>) -> Self {
        Self::Failure { status, errors }
    }
}

impl<T> From<DomainError> for ApiResult<T> {
    fn from(err: DomainError) -> Self {
        Self::Failure {
            status: status_for(&err),
            errors: vec![err.to_string()],
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResult<T> {
    fn into_response(self) -> Response {
        match self {
            ApiResult::Success { status, data } => (
                status,
                Json(json!({
                    "httpStatus": status.as_u16(),
                    "data": data,
                })),
            )
                .into_response(),
            ApiResult::Failure { status, errors } => failure_response(status, errors),
        }
    }
}

/// One status code per error taxonomy entry; message strings only, no
/// internal detail crosses the boundary.
pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Unsupported(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn failure_response(status: StatusCode, errors: Vec<String>) -> Response {
    (
        status,
        Json(json!({
            "httpStatus": status.as_u16(),
            "exceptionMessages": { "errors": errors },
        })),
    )
        .into_response()
}

/// Map a body-extraction rejection into the envelope: missing/unsupported
/// content type is 415, malformed JSON (syntax or types) is 400.
pub fn rejection_response(rej: JsonRejection) -> Response {
    let status = if matches!(rej, JsonRejection::MissingJsonContentType(_)) {
        StatusCode::UNSUPPORTED_MEDIA_TYPE
    } else {
        StatusCode::BAD_REQUEST
    };
    failure_response(status, vec![rej.body_text()])
}

//! JSON envelope shared by every storefront endpoint:
//! `{ "success": bool, "data"?: T, "error"?: { code, message, details? } }`.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

/// Failure part of the envelope.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable, e.g. `NOT_FOUND` or `BAD_REQUEST`.
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetail>,
}

/// Points a client at the part of a navigate body it got wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    /// Body field: `action`, `key` or `value`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorDetail {
    pub fn field(path: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            hint: Some(hint.into()),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Render with an explicit status.
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }

    /// `303 See Other` to `location`. The body repeats the target for
    /// clients that do not follow redirects.
    pub fn see_other(self, location: &str) -> Response {
        (
            StatusCode::SEE_OTHER,
            [(header::LOCATION, location.to_string())],
            Json(self),
        )
            .into_response()
    }
}

impl ApiResponse<()> {
    pub fn fail(code: &'static str, message: impl Into<String>, details: Vec<ErrorDetail>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorBody {
                code,
                message: message.into(),
                details,
            }),
        }
    }
}

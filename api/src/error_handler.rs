use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog::CatalogError;
use query_view::UnknownKey;
use thiserror::Error;
use tracing::{error, warn};

use crate::core::{
    app_config::ConfigError,
    http::response_envelope::{ApiResponse, ErrorDetail},
};

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error(transparent)]
    Config(#[from] ConfigError),

    // --- IO / server ---
    #[error("failed to bind listener on {address}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    #[error("{message}")]
    BadRequest {
        message: String,
        details: Vec<ErrorDetail>,
    },

    /// Unknown listing slug, or a catalog built with inconsistent data.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("no route for {0}")]
    RouteNotFound(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // 4xx
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Catalog(CatalogError::NotFound(_)) | AppError::RouteNotFound(_) => {
                StatusCode::NOT_FOUND
            }

            // 5xx
            AppError::Catalog(_)
            | AppError::Config(_)
            | AppError::Bind { .. }
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Bind { .. } => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::BadRequest { .. } => "BAD_REQUEST",
            AppError::Catalog(CatalogError::NotFound(_)) | AppError::RouteNotFound(_) => {
                "NOT_FOUND"
            }
            AppError::Catalog(_) => "CATALOG_ERROR",
        }
    }

    pub fn bad_request(message: impl Into<String>, details: Vec<ErrorDetail>) -> Self {
        AppError::BadRequest {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(code = self.error_code(), error = %self, "request failed");
        } else {
            warn!(code = self.error_code(), error = %self, "request rejected");
        }

        let message = self.to_string();
        let code = self.error_code();
        let details = match self {
            AppError::BadRequest { details, .. } => details,
            _ => Vec::new(),
        };

        ApiResponse::fail(code, message, details).with_status(status)
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

impl From<UnknownKey> for AppError {
    fn from(err: UnknownKey) -> Self {
        AppError::bad_request(
            err.to_string(),
            vec![ErrorDetail::field(
                "key",
                "Use `color` or `shape` for toggle and clear actions.",
            )],
        )
    }
}

/// Map a JSON body rejection to a 400 with a best-effort field hint.
impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        let message = err.body_text();
        let detail = ErrorDetail {
            path: guess_path_from_serde_msg(&message),
            hint: if message.contains("unknown variant") || message.contains("missing field `action`") {
                Some(
                    "Field `action` must be one of toggle, clear, set_min, set_max, sort, currency."
                        .into(),
                )
            } else if message.contains("invalid type: string") {
                Some("Price values must be JSON numbers (e.g. { \"value\": 25000 }).".into())
            } else if message.contains("Content-Type") {
                Some("Send the action as `application/json`.".into())
            } else {
                None
            },
        };
        AppError::bad_request(message, vec![detail])
    }
}

fn guess_path_from_serde_msg(msg: &str) -> Option<String> {
    for key in ["action", "key", "value"] {
        if msg.contains(&format!("`{key}`")) {
            return Some(key.to_string());
        }
    }
    None
}

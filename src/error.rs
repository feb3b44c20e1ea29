use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    /// Required field missing or empty on an inbound request. The spreadsheet
    /// backend is never contacted on this path.
    Validation(String),
    /// The target document is missing an expected tab. Surfaced before any
    /// write is attempted.
    Configuration(String),
    /// Metadata load or append failed at the backend. `details`, when set,
    /// carries the underlying error text for diagnostics.
    Backend {
        message: String,
        details: Option<String>,
    },
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation: {msg}"),
            AppError::Configuration(msg) => write!(f, "Configuration: {msg}"),
            AppError::Backend { message, details } => match details {
                Some(d) => write!(f, "Backend: {message} ({d})"),
                None => write!(f, "Backend: {message}"),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::Configuration(msg) => {
                tracing::error!("Spreadsheet configuration error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg, None)
            }
            AppError::Backend { message, details } => {
                tracing::error!(
                    "Google Sheets error: {message}{}",
                    details
                        .as_deref()
                        .map(|d| format!(" ({d})"))
                        .unwrap_or_default()
                );
                (StatusCode::INTERNAL_SERVER_ERROR, message, details)
            }
        };

        let mut body = json!({ "success": false, "message": message });
        if let Some(d) = details {
            body["details"] = json!(d);
        }
        (status, axum::Json(body)).into_response()
    }
}

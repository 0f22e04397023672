//! Mapping of extraction errors onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sitemeta_core::SitemetaError;

/// Error returned by request handlers.
#[derive(Debug)]
pub struct ApiError(pub SitemetaError);

impl From<SitemetaError> for ApiError {
    fn from(err: SitemetaError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            SitemetaError::MissingUrl | SitemetaError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            SitemetaError::HttpError(_) => StatusCode::BAD_GATEWAY,
            SitemetaError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            SitemetaError::HtmlParseError(_) | SitemetaError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // A request without a url produces no output at all.
        if matches!(self.0, SitemetaError::MissingUrl) {
            return status.into_response();
        }

        if self.0.is_fetch_error() {
            tracing::warn!(error = %self.0, %status, "upstream fetch failed");
        } else {
            tracing::error!(error = %self.0, %status, "request failed");
        }

        (status, Json(serde_json::json!({ "error": self.0.to_string() }))).into_response()
    }
}

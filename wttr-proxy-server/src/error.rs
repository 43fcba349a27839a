use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::warn;
use wttr_proxy_core::{FetchError, ShapeError};

/// Request-level failures, mapped onto an HTTP status and a one-field
/// `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            // Surface the upstream status verbatim; 502 if it is not a
            // representable response status.
            ApiError::Fetch(FetchError::UpstreamStatus { status }) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.to_string();
        if status.is_server_error() {
            warn!("request failed with {status}: {message}");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_passes_through() {
        let response =
            ApiError::Fetch(FetchError::UpstreamStatus { status: 404 }).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unrepresentable_upstream_status_becomes_bad_gateway() {
        let response =
            ApiError::Fetch(FetchError::UpstreamStatus { status: 42 }).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn shape_errors_are_internal() {
        let response = ApiError::Shape(ShapeError::FieldMissing("astronomy")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

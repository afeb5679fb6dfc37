//! Wire envelope for the portal API.
//!
//! The original contract always answers HTTP 200 and signals failure in the
//! response body; these types are the single place that shape is encoded.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// `{"success": true, "message": ...}` for the write endpoints.
pub struct ActionSuccess(pub &'static str);

/// `{"success": false, "message": ...}` for the write endpoints.
pub struct ActionFailure(pub String);

/// `{"error": ...}` for the read endpoints.
pub struct ReadFailure(pub String);

impl IntoResponse for ActionSuccess {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            Json(json!({ "success": true, "message": self.0 })),
        )
            .into_response()
    }
}

impl IntoResponse for ActionFailure {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            Json(json!({ "success": false, "message": self.0 })),
        )
            .into_response()
    }
}

impl IntoResponse for ReadFailure {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(json!({ "error": self.0 }))).into_response()
    }
}

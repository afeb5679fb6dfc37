//! Registration and login endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use sha2::{Digest, Sha256};
use tracing::{error, info};

use crate::error::{is_unique_violation, ApiError};
use crate::server::types::{ActionFailure, ActionSuccess};
use crate::types::PortalState;

#[derive(Debug, Deserialize)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "student".to_string()
}

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

/// Hex SHA-256 digest; this is the stored form of every password.
fn password_digest(password: &str) -> String {
    Sha256::digest(password.as_bytes())
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// POST /api/register
pub async fn post_register(
    State(s): State<Arc<PortalState>>,
    payload: Result<Json<RegisterPayload>, JsonRejection>,
) -> Response {
    info!("POST /api/register");

    let Json(payload) = match payload {
        Ok(p) => p,
        Err(e) => return ActionFailure(format!("Error: {}", e.body_text())).into_response(),
    };

    match register_user(&s, &payload) {
        Ok(()) => {
            ActionSuccess("Registration successful! You can now login.").into_response()
        }
        Err(e @ (ApiError::Validation(_) | ApiError::DuplicateUsername)) => {
            ActionFailure(e.to_string()).into_response()
        }
        Err(e) => {
            error!("registration failed: {e}");
            ActionFailure(format!("Registration failed: {e}")).into_response()
        }
    }
}

fn register_user(s: &PortalState, payload: &RegisterPayload) -> Result<(), ApiError> {
    let username = payload.username.trim();
    let email = payload.email.trim();
    if username.is_empty() || email.is_empty() || payload.password.trim().is_empty() {
        return Err(ApiError::Validation("All fields are required".to_string()));
    }

    let digest = password_digest(&payload.password);
    s.db.create_user(username, &digest, &payload.role, email)
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::DuplicateUsername
            } else {
                ApiError::Database(e)
            }
        })
}

/// POST /api/login
pub async fn post_login(
    State(s): State<Arc<PortalState>>,
    payload: Result<Json<LoginPayload>, JsonRejection>,
) -> Response {
    info!("POST /api/login");

    let Json(payload) = match payload {
        Ok(p) => p,
        Err(e) => return ActionFailure(format!("Login error: {}", e.body_text())).into_response(),
    };

    let digest = password_digest(&payload.password);
    match s.db.find_user(&payload.username, &digest) {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "user": {
                    "id": user.id,
                    "username": user.username,
                    "role": user.role,
                }
            })),
        )
            .into_response(),
        // Deliberately the same message for unknown user and wrong password.
        Ok(None) => ActionFailure("Invalid username or password".to_string()).into_response(),
        Err(e) => {
            error!("login failed: {e}");
            ActionFailure(format!("Login error: {e}")).into_response()
        }
    }
}

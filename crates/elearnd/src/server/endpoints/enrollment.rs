//! Enrollment and progress endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Local;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::server::types::{ActionFailure, ActionSuccess, ReadFailure};
use crate::types::PortalState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollPayload {
    pub user_id: i64,
    pub course_id: i64,
}

/// Query parameters for the per-user read endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub user_id: i64,
}

/// POST /api/enroll
pub async fn post_enroll(
    State(s): State<Arc<PortalState>>,
    payload: Result<Json<EnrollPayload>, JsonRejection>,
) -> Response {
    info!("POST /api/enroll");

    let Json(payload) = match payload {
        Ok(p) => p,
        Err(e) => return ActionFailure(e.body_text()).into_response(),
    };

    let today = Local::now().date_naive().to_string();
    match s.db.enroll(payload.user_id, payload.course_id, &today) {
        Ok(()) => ActionSuccess("Enrolled successfully").into_response(),
        Err(e) => {
            error!("failed to enroll user {}: {e}", payload.user_id);
            ActionFailure(e.to_string()).into_response()
        }
    }
}

/// GET /api/progress?userId=N
pub async fn get_progress(
    State(s): State<Arc<PortalState>>,
    Query(q): Query<UserQuery>,
) -> Response {
    info!("GET /api/progress?userId={}", q.user_id);

    match s.db.enrolled_courses(q.user_id) {
        Ok(rows) => {
            let enrolled: Vec<_> = rows
                .into_iter()
                .map(|r| {
                    json!({
                        "id": r.course_id,
                        "title": r.title,
                        "instructor": r.instructor,
                        "credits": r.credits,
                        "progress": r.progress,
                        "enrollmentDate": r.enrollment_date,
                    })
                })
                .collect();

            (StatusCode::OK, Json(json!({ "enrolled": enrolled }))).into_response()
        }
        Err(e) => {
            error!("failed to fetch progress for user {}: {e}", q.user_id);
            ReadFailure(e.to_string()).into_response()
        }
    }
}

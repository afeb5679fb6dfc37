//! Attendance marking and retrieval endpoints.

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

use crate::server::endpoints::enrollment::UserQuery;
use crate::server::types::{ActionFailure, ActionSuccess, ReadFailure};
use crate::types::PortalState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendancePayload {
    pub user_id: i64,
    pub course_id: i64,
    pub status: String,
}

/// POST /api/mark-attendance
///
/// Appends a record dated today. Repeated marks for the same day are kept.
pub async fn post_mark_attendance(
    State(s): State<Arc<PortalState>>,
    payload: Result<Json<MarkAttendancePayload>, JsonRejection>,
) -> Response {
    info!("POST /api/mark-attendance");

    let Json(payload) = match payload {
        Ok(p) => p,
        Err(e) => return ActionFailure(e.body_text()).into_response(),
    };

    let now = Local::now();
    let date = now.date_naive().to_string();
    let marked_at = now.naive_local().to_string();

    match s.db.mark_attendance(
        payload.user_id,
        payload.course_id,
        &date,
        &payload.status,
        &marked_at,
    ) {
        Ok(()) => ActionSuccess("Attendance marked").into_response(),
        Err(e) => {
            error!("failed to mark attendance for user {}: {e}", payload.user_id);
            ActionFailure(e.to_string()).into_response()
        }
    }
}

/// GET /api/attendance?userId=N
pub async fn get_attendance(
    State(s): State<Arc<PortalState>>,
    Query(q): Query<UserQuery>,
) -> Response {
    info!("GET /api/attendance?userId={}", q.user_id);

    match s.db.attendance_for_user(q.user_id) {
        Ok(rows) => {
            let records: Vec<_> = rows
                .into_iter()
                .map(|r| {
                    json!({
                        "courseTitle": r.course_title,
                        "date": r.date,
                        "status": r.status,
                    })
                })
                .collect();

            (StatusCode::OK, Json(json!({ "attendance": records }))).into_response()
        }
        Err(e) => {
            error!("failed to fetch attendance for user {}: {e}", q.user_id);
            ReadFailure(e.to_string()).into_response()
        }
    }
}

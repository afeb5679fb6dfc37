//! Timetable listing and management endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::db::NewTimetableEntry;
use crate::server::types::{ActionFailure, ActionSuccess, ReadFailure};
use crate::types::PortalState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableQuery {
    pub user_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTimetablePayload {
    pub course_id: i64,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub room: String,
    pub instructor: String,
}

/// GET /api/timetable[?userId=N]
///
/// Without `userId`, every entry is returned; with it, only entries for
/// courses the user is enrolled in. Both forms are ordered Monday..Sunday,
/// then by start time.
pub async fn get_timetable(
    State(s): State<Arc<PortalState>>,
    Query(q): Query<TimetableQuery>,
) -> Response {
    match q.user_id {
        Some(user_id) => {
            info!("GET /api/timetable?userId={user_id}");
            match s.db.timetable_for_user(user_id) {
                Ok(entries) => {
                    let schedule: Vec<_> = entries
                        .into_iter()
                        .map(|e| {
                            json!({
                                "courseTitle": e.course_title,
                                "day": e.day,
                                "startTime": e.start_time,
                                "endTime": e.end_time,
                                "room": e.room,
                                "instructor": e.instructor,
                            })
                        })
                        .collect();

                    (StatusCode::OK, Json(json!({ "timetable": schedule }))).into_response()
                }
                Err(e) => {
                    error!("failed to fetch timetable for user {user_id}: {e}");
                    ReadFailure(e.to_string()).into_response()
                }
            }
        }
        None => {
            info!("GET /api/timetable");
            match s.db.timetable_all() {
                Ok(entries) => {
                    let schedule: Vec<_> = entries
                        .into_iter()
                        .map(|e| {
                            json!({
                                "id": e.id,
                                "courseId": e.course_id,
                                "courseTitle": e.course_title,
                                "day": e.day,
                                "startTime": e.start_time,
                                "endTime": e.end_time,
                                "room": e.room,
                                "instructor": e.instructor,
                            })
                        })
                        .collect();

                    (StatusCode::OK, Json(json!({ "timetable": schedule }))).into_response()
                }
                Err(e) => {
                    error!("failed to fetch timetable: {e}");
                    ReadFailure(e.to_string()).into_response()
                }
            }
        }
    }
}

/// POST /api/add-timetable
pub async fn post_add_timetable(
    State(s): State<Arc<PortalState>>,
    payload: Result<Json<AddTimetablePayload>, JsonRejection>,
) -> Response {
    info!("POST /api/add-timetable");

    let Json(payload) = match payload {
        Ok(p) => p,
        Err(e) => return ActionFailure(e.body_text()).into_response(),
    };

    let entry = NewTimetableEntry {
        course_id: payload.course_id,
        day: payload.day,
        start_time: payload.start_time,
        end_time: payload.end_time,
        room: payload.room,
        instructor: payload.instructor,
    };

    match s.db.add_timetable_entry(&entry) {
        Ok(()) => ActionSuccess("Timetable entry added").into_response(),
        Err(e) => {
            error!("failed to add timetable entry: {e}");
            ActionFailure(e.to_string()).into_response()
        }
    }
}

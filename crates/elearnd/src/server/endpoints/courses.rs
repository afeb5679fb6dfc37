//! Course listing and management endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::db::NewCourse;
use crate::server::types::{ActionFailure, ActionSuccess, ReadFailure};
use crate::types::PortalState;

#[derive(Debug, Deserialize)]
pub struct AddCoursePayload {
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub duration: String,
    pub credits: i64,
    pub category: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCoursePayload {
    pub course_id: i64,
}

/// GET /api/courses
pub async fn get_courses(State(s): State<Arc<PortalState>>) -> Response {
    info!("GET /api/courses");

    match s.db.list_courses() {
        Ok(courses) => {
            let rows: Vec<_> = courses
                .into_iter()
                .map(|c| {
                    json!({
                        "id": c.id,
                        "title": c.title,
                        "description": c.description,
                        "instructor": c.instructor,
                        "duration": c.duration,
                        "credits": c.credits,
                        "category": c.category,
                    })
                })
                .collect();

            (StatusCode::OK, Json(json!({ "courses": rows }))).into_response()
        }
        Err(e) => {
            error!("failed to list courses: {e}");
            ReadFailure(e.to_string()).into_response()
        }
    }
}

/// POST /api/add-course
pub async fn post_add_course(
    State(s): State<Arc<PortalState>>,
    payload: Result<Json<AddCoursePayload>, JsonRejection>,
) -> Response {
    info!("POST /api/add-course");

    let Json(payload) = match payload {
        Ok(p) => p,
        Err(e) => return ActionFailure(e.body_text()).into_response(),
    };

    let course = NewCourse {
        title: payload.title,
        description: payload.description,
        instructor: payload.instructor,
        duration: payload.duration,
        credits: payload.credits,
        category: payload.category,
    };

    match s.db.add_course(&course) {
        Ok(()) => ActionSuccess("Course added successfully").into_response(),
        Err(e) => {
            error!("failed to add course: {e}");
            ActionFailure(e.to_string()).into_response()
        }
    }
}

/// POST /api/delete-course
///
/// Removes the course row only; enrollments, quizzes and timetable rows
/// referencing it stay behind.
pub async fn post_delete_course(
    State(s): State<Arc<PortalState>>,
    payload: Result<Json<DeleteCoursePayload>, JsonRejection>,
) -> Response {
    info!("POST /api/delete-course");

    let Json(payload) = match payload {
        Ok(p) => p,
        Err(e) => return ActionFailure(e.body_text()).into_response(),
    };

    match s.db.delete_course(payload.course_id) {
        Ok(_) => ActionSuccess("Course deleted").into_response(),
        Err(e) => {
            error!("failed to delete course {}: {e}", payload.course_id);
            ActionFailure(e.to_string()).into_response()
        }
    }
}

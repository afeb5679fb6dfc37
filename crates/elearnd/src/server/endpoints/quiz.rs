//! Quiz retrieval endpoint.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::server::types::ReadFailure;
use crate::types::PortalState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseQuery {
    pub course_id: i64,
}

/// GET /api/quiz?courseId=N
///
/// The stored answer index stays server-side.
pub async fn get_quiz(
    State(s): State<Arc<PortalState>>,
    Query(q): Query<CourseQuery>,
) -> Response {
    info!("GET /api/quiz?courseId={}", q.course_id);

    match s.db.quizzes_for_course(q.course_id) {
        Ok(quizzes) => {
            let rows: Vec<_> = quizzes
                .into_iter()
                .map(|quiz| {
                    json!({
                        "id": quiz.id,
                        "question": quiz.question,
                        "options": quiz.options,
                    })
                })
                .collect();

            (StatusCode::OK, Json(json!({ "quizzes": rows }))).into_response()
        }
        Err(e) => {
            error!("failed to fetch quizzes for course {}: {e}", q.course_id);
            ReadFailure(e.to_string()).into_response()
        }
    }
}

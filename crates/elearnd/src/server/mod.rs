use std::sync::Arc;
use std::time::Duration;

use axum::middleware as mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::server::endpoints::{attendance, auth, courses, enrollment, quiz, status, timetable};
use crate::server::middleware::cors;
use crate::types::PortalState;

mod endpoints;
mod middleware;
mod types;

/// Creates a router that can be used by `axum`.
///
/// # Parameters
/// - `app_state`: The app server state.
///
/// # Returns
/// The router.
pub fn create_router(app_state: Arc<PortalState>) -> Router {
    let api_router = Router::new()
        .route("/api/register", post(auth::post_register))
        .route("/api/login", post(auth::post_login))
        .route("/api/courses", get(courses::get_courses))
        .route("/api/add-course", post(courses::post_add_course))
        .route("/api/delete-course", post(courses::post_delete_course))
        .route("/api/enroll", post(enrollment::post_enroll))
        .route("/api/progress", get(enrollment::get_progress))
        .route("/api/quiz", get(quiz::get_quiz))
        .route("/api/attendance", get(attendance::get_attendance))
        .route("/api/mark-attendance", post(attendance::post_mark_attendance))
        .route("/api/timetable", get(timetable::get_timetable))
        .route("/api/add-timetable", post(timetable::post_add_timetable));

    Router::new()
        .route("/", get(status::get_index))
        .route("/health", get(status::get_health))
        .merge(api_router)
        .layer(mw::from_fn(cors::allow_any_origin))
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub mod attendance;
pub mod auth;
pub mod courses;
pub mod enrollment;
pub mod quiz;
pub mod status;
pub mod timetable;

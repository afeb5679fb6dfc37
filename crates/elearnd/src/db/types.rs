//! Database row types for the portal tables.

#[derive(Debug, Clone)]
pub struct DbUser {
    pub id: i64,
    pub username: String,
    pub role: String,
}

#[derive(Debug, Clone)]
pub struct DbCourse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub duration: String,
    pub credits: i64,
    pub category: String,
}

#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub duration: String,
    pub credits: i64,
    pub category: String,
}

#[derive(Debug, Clone)]
pub struct NewTimetableEntry {
    pub course_id: i64,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub room: String,
    pub instructor: String,
}

#[derive(Debug, Clone)]
pub struct EnrolledCourse {
    pub course_id: i64,
    pub title: String,
    pub instructor: String,
    pub credits: i64,
    pub progress: i64,
    pub enrollment_date: String,
}

#[derive(Debug, Clone)]
pub struct DbQuiz {
    pub id: i64,
    pub question: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AttendanceRow {
    pub course_title: String,
    pub date: String,
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct DbTimetableEntry {
    pub id: i64,
    pub course_id: i64,
    pub course_title: String,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub room: String,
    pub instructor: String,
}

/// Quiz options are persisted as a single pipe-delimited string. These two
/// functions are the only code that knows about the delimiter.
pub fn encode_options(options: &[String]) -> String {
    options.join("|")
}

pub fn decode_options(raw: &str) -> Vec<String> {
    raw.split('|').map(str::to_string).collect()
}

//! Database module for the portal's users, courses, enrollments, quizzes,
//! attendance records and timetable entries.

mod types;

pub use types::{
    decode_options, encode_options, AttendanceRow, DbCourse, DbQuiz, DbTimetableEntry, DbUser,
    EnrolledCourse, NewCourse, NewTimetableEntry,
};

use rusqlite::{Connection, OptionalExtension, Result};
use std::sync::Mutex;

const SCHEMA_SQL: &str = include_str!("../../../../sql/init_elearning.sql");

// Weekday rank used by the timetable queries (Monday=1 ... Sunday=7).
const WEEKDAY_RANK: &str = "CASE t.day \
     WHEN 'Monday' THEN 1 WHEN 'Tuesday' THEN 2 WHEN 'Wednesday' THEN 3 \
     WHEN 'Thursday' THEN 4 WHEN 'Friday' THEN 5 WHEN 'Saturday' THEN 6 \
     WHEN 'Sunday' THEN 7 END";

const SEED_SQL: &str = "\
    INSERT INTO courses VALUES (1, 'Java Programming', 'Learn Java from basics to advanced', 'Dr. Smith', '8 weeks', 4, 'Programming');
    INSERT INTO courses VALUES (2, 'Web Development', 'HTML, CSS, JavaScript fundamentals', 'Prof. Johnson', '6 weeks', 3, 'Web');
    INSERT INTO courses VALUES (3, 'Database Systems', 'SQL and database design principles', 'Dr. Williams', '10 weeks', 4, 'Database');
    INSERT INTO courses VALUES (4, 'Data Structures', 'Learn algorithms and data structures', 'Dr. Anderson', '12 weeks', 5, 'Programming');
    INSERT INTO courses VALUES (5, 'Machine Learning', 'Introduction to ML and AI concepts', 'Prof. Martinez', '10 weeks', 4, 'AI');

    INSERT INTO quizzes VALUES (1, 1, 'What is Java?', 'Programming Language|Database|Operating System|Web Browser', 0);
    INSERT INTO quizzes VALUES (2, 1, 'Java is platform independent?', 'True|False', 0);
    INSERT INTO quizzes VALUES (3, 2, 'What does HTML stand for?', 'Hyper Text Markup Language|High Tech Modern Language|Home Tool Markup Language|Hyperlinks and Text Markup Language', 0);

    INSERT INTO timetable VALUES (1, 1, 'Monday', '09:00', '11:00', 'Room 101', 'Dr. Smith');
    INSERT INTO timetable VALUES (2, 1, 'Wednesday', '09:00', '11:00', 'Room 101', 'Dr. Smith');
    INSERT INTO timetable VALUES (3, 2, 'Tuesday', '14:00', '16:00', 'Lab 201', 'Prof. Johnson');
    INSERT INTO timetable VALUES (4, 2, 'Thursday', '14:00', '16:00', 'Lab 201', 'Prof. Johnson');
    INSERT INTO timetable VALUES (5, 3, 'Monday', '11:00', '13:00', 'Room 102', 'Dr. Williams');
    INSERT INTO timetable VALUES (6, 3, 'Friday', '11:00', '13:00', 'Room 102', 'Dr. Williams');
    INSERT INTO timetable VALUES (7, 4, 'Tuesday', '09:00', '11:00', 'Room 103', 'Dr. Anderson');
    INSERT INTO timetable VALUES (8, 5, 'Wednesday', '14:00', '16:00', 'Lab 202', 'Prof. Martinez');
    ";

pub struct PortalDbManager {
    db: Mutex<Connection>,
}

impl PortalDbManager {
    /// Opens (or creates) the portal database, initializes the schema and
    /// seeds the sample data on first run.
    pub fn open(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        conn.execute_batch(SCHEMA_SQL)?;
        seed_if_empty(&conn)?;

        Ok(Self {
            db: Mutex::new(conn),
        })
    }

    /// Inserts a new user row. `password_digest` is the stored credential.
    pub fn create_user(
        &self,
        username: &str,
        password_digest: &str,
        role: &str,
        email: &str,
    ) -> Result<()> {
        let db = self.db.lock().unwrap();
        db.execute(
            "INSERT INTO users (username, password, role, email) VALUES (?1, ?2, ?3, ?4)",
            (username, password_digest, role, email),
        )?;
        Ok(())
    }

    /// Looks up a user by exact username + password digest match.
    pub fn find_user(&self, username: &str, password_digest: &str) -> Result<Option<DbUser>> {
        let db = self.db.lock().unwrap();
        db.query_row(
            "SELECT id, username, role FROM users WHERE username = ?1 AND password = ?2",
            (username, password_digest),
            |row| {
                Ok(DbUser {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    role: row.get(2)?,
                })
            },
        )
        .optional()
    }

    /// Returns every course row, unfiltered.
    pub fn list_courses(&self) -> Result<Vec<DbCourse>> {
        let db = self.db.lock().unwrap();
        let mut stmt = db.prepare(
            "SELECT id, title, description, instructor, duration, credits, category
             FROM courses",
        )?;

        let courses = stmt.query_map([], |row| {
            Ok(DbCourse {
                id: row.get(0)?,
                title: row.get(1)?,
                description: row.get(2)?,
                instructor: row.get(3)?,
                duration: row.get(4)?,
                credits: row.get(5)?,
                category: row.get(6)?,
            })
        })?;

        courses.collect()
    }

    pub fn add_course(&self, course: &NewCourse) -> Result<()> {
        let db = self.db.lock().unwrap();
        db.execute(
            "INSERT INTO courses (title, description, instructor, duration, credits, category)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            (
                &course.title,
                &course.description,
                &course.instructor,
                &course.duration,
                course.credits,
                &course.category,
            ),
        )?;
        Ok(())
    }

    /// Deletes the course row only. Enrollments, quizzes and timetable rows
    /// referencing the course are left in place (original contract).
    pub fn delete_course(&self, course_id: i64) -> Result<usize> {
        let db = self.db.lock().unwrap();
        db.execute("DELETE FROM courses WHERE id = ?1", [course_id])
    }

    /// Inserts an enrollment with progress 0. Duplicate enrollments for the
    /// same user/course pair are permitted.
    pub fn enroll(&self, user_id: i64, course_id: i64, enrollment_date: &str) -> Result<()> {
        let db = self.db.lock().unwrap();
        db.execute(
            "INSERT INTO enrollments (user_id, course_id, progress, enrollment_date)
             VALUES (?1, ?2, 0, ?3)",
            (user_id, course_id, enrollment_date),
        )?;
        Ok(())
    }

    /// Joins enrollments with courses for one user.
    pub fn enrolled_courses(&self, user_id: i64) -> Result<Vec<EnrolledCourse>> {
        let db = self.db.lock().unwrap();
        let mut stmt = db.prepare(
            "SELECT c.id, c.title, c.instructor, c.credits, e.progress, e.enrollment_date
             FROM enrollments e
             JOIN courses c ON e.course_id = c.id
             WHERE e.user_id = ?1",
        )?;

        let rows = stmt.query_map([user_id], |row| {
            Ok(EnrolledCourse {
                course_id: row.get(0)?,
                title: row.get(1)?,
                instructor: row.get(2)?,
                credits: row.get(3)?,
                progress: row.get(4)?,
                enrollment_date: row.get(5)?,
            })
        })?;

        rows.collect()
    }

    /// Returns all quizzes for a course with their options decoded. The
    /// stored answer index is deliberately not read.
    pub fn quizzes_for_course(&self, course_id: i64) -> Result<Vec<DbQuiz>> {
        let db = self.db.lock().unwrap();
        let mut stmt =
            db.prepare("SELECT id, question, options FROM quizzes WHERE course_id = ?1")?;

        let quizzes = stmt.query_map([course_id], |row| {
            let raw: String = row.get(2)?;
            Ok(DbQuiz {
                id: row.get(0)?,
                question: row.get(1)?,
                options: decode_options(&raw),
            })
        })?;

        quizzes.collect()
    }

    /// Appends an attendance record. No enrollment check, no per-day dedup.
    pub fn mark_attendance(
        &self,
        user_id: i64,
        course_id: i64,
        date: &str,
        status: &str,
        marked_at: &str,
    ) -> Result<()> {
        let db = self.db.lock().unwrap();
        db.execute(
            "INSERT INTO attendance (user_id, course_id, date, status, marked_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            (user_id, course_id, date, status, marked_at),
        )?;
        Ok(())
    }

    /// Attendance rows for one user joined with course titles, newest first.
    pub fn attendance_for_user(&self, user_id: i64) -> Result<Vec<AttendanceRow>> {
        let db = self.db.lock().unwrap();
        let mut stmt = db.prepare(
            "SELECT c.title, a.date, a.status
             FROM attendance a
             JOIN courses c ON a.course_id = c.id
             WHERE a.user_id = ?1
             ORDER BY a.date DESC",
        )?;

        let rows = stmt.query_map([user_id], |row| {
            Ok(AttendanceRow {
                course_title: row.get(0)?,
                date: row.get(1)?,
                status: row.get(2)?,
            })
        })?;

        rows.collect()
    }

    /// All timetable entries joined with course titles, ordered by weekday
    /// rank then start time.
    pub fn timetable_all(&self) -> Result<Vec<DbTimetableEntry>> {
        let db = self.db.lock().unwrap();
        let mut stmt = db.prepare(&format!(
            "SELECT t.id, t.course_id, c.title, t.day, t.start_time, t.end_time, t.room, t.instructor
             FROM timetable t
             JOIN courses c ON t.course_id = c.id
             ORDER BY {WEEKDAY_RANK}, t.start_time"
        ))?;

        let entries = stmt.query_map([], map_timetable_row)?;
        entries.collect()
    }

    /// Same join as [`timetable_all`](Self::timetable_all), filtered to the
    /// courses the user is enrolled in.
    pub fn timetable_for_user(&self, user_id: i64) -> Result<Vec<DbTimetableEntry>> {
        let db = self.db.lock().unwrap();
        let mut stmt = db.prepare(&format!(
            "SELECT t.id, t.course_id, c.title, t.day, t.start_time, t.end_time, t.room, t.instructor
             FROM timetable t
             JOIN courses c ON t.course_id = c.id
             JOIN enrollments e ON c.id = e.course_id
             WHERE e.user_id = ?1
             ORDER BY {WEEKDAY_RANK}, t.start_time"
        ))?;

        let entries = stmt.query_map([user_id], map_timetable_row)?;
        entries.collect()
    }

    pub fn add_timetable_entry(&self, entry: &NewTimetableEntry) -> Result<()> {
        let db = self.db.lock().unwrap();
        db.execute(
            "INSERT INTO timetable (course_id, day, start_time, end_time, room, instructor)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            (
                entry.course_id,
                &entry.day,
                &entry.start_time,
                &entry.end_time,
                &entry.room,
                &entry.instructor,
            ),
        )?;
        Ok(())
    }
}

fn map_timetable_row(row: &rusqlite::Row<'_>) -> Result<DbTimetableEntry> {
    Ok(DbTimetableEntry {
        id: row.get(0)?,
        course_id: row.get(1)?,
        course_title: row.get(2)?,
        day: row.get(3)?,
        start_time: row.get(4)?,
        end_time: row.get(5)?,
        room: row.get(6)?,
        instructor: row.get(7)?,
    })
}

fn seed_if_empty(conn: &Connection) -> Result<()> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM courses", [], |row| row.get(0))?;
    if count > 0 {
        return Ok(());
    }
    conn.execute_batch(SEED_SQL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_in_memory() -> PortalDbManager {
        PortalDbManager::open(":memory:").expect("open in-memory db")
    }

    #[test]
    fn seeds_sample_data_once() {
        let db = open_in_memory();
        let courses = db.list_courses().unwrap();
        assert_eq!(courses.len(), 5);
        assert_eq!(courses[0].title, "Java Programming");
        assert_eq!(courses[4].category, "AI");
    }

    #[test]
    fn enrollment_rows_survive_course_deletion() {
        let db = open_in_memory();
        db.enroll(1, 2, "2026-08-27").unwrap();
        assert_eq!(db.delete_course(2).unwrap(), 1);

        // The join drops the dangling row from the progress view, but the
        // enrollment itself is not cascaded away.
        assert!(db.enrolled_courses(1).unwrap().is_empty());
        let conn = db.db.lock().unwrap();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM enrollments WHERE course_id = 2",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn timetable_sorted_by_weekday_then_start_time() {
        let db = open_in_memory();
        db.add_timetable_entry(&NewTimetableEntry {
            course_id: 1,
            day: "Sunday".to_string(),
            start_time: "10:00".to_string(),
            end_time: "12:00".to_string(),
            room: "Room 1".to_string(),
            instructor: "Dr. Smith".to_string(),
        })
        .unwrap();
        db.add_timetable_entry(&NewTimetableEntry {
            course_id: 1,
            day: "Monday".to_string(),
            start_time: "08:00".to_string(),
            end_time: "09:00".to_string(),
            room: "Room 1".to_string(),
            instructor: "Dr. Smith".to_string(),
        })
        .unwrap();

        let entries = db.timetable_all().unwrap();
        assert_eq!(entries.first().unwrap().start_time, "08:00");
        assert_eq!(entries.first().unwrap().day, "Monday");
        assert_eq!(entries.last().unwrap().day, "Sunday");

        let ranks: Vec<usize> = entries
            .iter()
            .map(|e| {
                [
                    "Monday",
                    "Tuesday",
                    "Wednesday",
                    "Thursday",
                    "Friday",
                    "Saturday",
                    "Sunday",
                ]
                .iter()
                .position(|d| *d == e.day)
                .unwrap()
            })
            .collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        assert_eq!(ranks, sorted);
    }

    #[test]
    fn quiz_options_decoded_from_stored_string() {
        let db = open_in_memory();
        let quizzes = db.quizzes_for_course(1).unwrap();
        assert_eq!(quizzes.len(), 2);
        assert_eq!(quizzes[0].options.len(), 4);
        assert_eq!(quizzes[1].options, vec!["True", "False"]);
    }
}

//! Backend API server for a small e-learning portal.
//!
//! Exposes registration/login, course management, enrollment, progress,
//! quizzes, attendance and timetable endpoints over HTTP, backed by a
//! single SQLite database.

pub mod config;
pub mod db;
pub mod error;
pub mod server;
pub mod types;

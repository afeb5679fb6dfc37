mod common;

use serde_json::{json, Value};

#[tokio::test]
async fn fresh_portal_lists_the_five_seeded_courses() {
    let (base, _db) = common::spawn_portal("elearnd-courses-seed").await;
    let client = reqwest::Client::new();

    let resp: Value = client
        .get(format!("{base}/api/courses"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let courses = resp["courses"].as_array().unwrap();
    assert_eq!(courses.len(), 5);

    assert_eq!(courses[0]["id"], 1);
    assert_eq!(courses[0]["title"], "Java Programming");
    assert_eq!(courses[0]["instructor"], "Dr. Smith");
    assert_eq!(courses[0]["duration"], "8 weeks");
    assert_eq!(courses[0]["credits"], 4);
    assert_eq!(courses[0]["category"], "Programming");

    assert_eq!(courses[4]["title"], "Machine Learning");
    assert_eq!(courses[4]["category"], "AI");
}

#[tokio::test]
async fn added_course_appears_in_listing() {
    let (base, _db) = common::spawn_portal("elearnd-courses-add").await;
    let client = reqwest::Client::new();

    let resp: Value = client
        .post(format!("{base}/api/add-course"))
        .json(&json!({
            "title": "Rust Programming",
            "description": "Ownership, borrowing and fearless concurrency",
            "instructor": "Dr. Hoare",
            "duration": "9 weeks",
            "credits": 4,
            "category": "Programming",
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(resp["success"], true);
    assert_eq!(resp["message"], "Course added successfully");

    let resp: Value = client
        .get(format!("{base}/api/courses"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let courses = resp["courses"].as_array().unwrap();
    assert_eq!(courses.len(), 6);
    assert!(courses
        .iter()
        .any(|c| c["title"] == "Rust Programming"));
}

#[tokio::test]
async fn add_course_with_missing_field_fails() {
    let (base, _db) = common::spawn_portal("elearnd-courses-missing").await;
    let client = reqwest::Client::new();

    // No credits field.
    let resp: Value = client
        .post(format!("{base}/api/add-course"))
        .json(&json!({
            "title": "Incomplete",
            "description": "x",
            "instructor": "y",
            "duration": "z",
            "category": "w",
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(resp["success"], false);
    assert!(resp["message"].as_str().unwrap().contains("credits"));

    let resp: Value = client
        .get(format!("{base}/api/courses"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(resp["courses"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn delete_course_leaves_dangling_references() {
    let (base, db_path) = common::spawn_portal("elearnd-courses-delete").await;
    let client = reqwest::Client::new();

    let user_id = common::register_and_login(&client, &base, "frank").await;
    let resp: Value = client
        .post(format!("{base}/api/enroll"))
        .json(&json!({ "userId": user_id, "courseId": 2 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(resp["success"], true);

    let resp: Value = client
        .post(format!("{base}/api/delete-course"))
        .json(&json!({ "courseId": 2 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(resp["success"], true);
    assert_eq!(resp["message"], "Course deleted");

    let resp: Value = client
        .get(format!("{base}/api/courses"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let courses = resp["courses"].as_array().unwrap();
    assert_eq!(courses.len(), 4);
    assert!(courses.iter().all(|c| c["id"] != 2));

    // The enrollment row referencing course 2 must survive the delete.
    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let dangling: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM enrollments WHERE course_id = 2 AND user_id = ?1",
            [user_id],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(dangling, 1);

    // Its timetable rows stay behind as well.
    let timetable_rows: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM timetable WHERE course_id = 2",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(timetable_rows, 2);
}

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use elearnd::config::ServerConfig;
use elearnd::db::PortalDbManager;
use elearnd::server::create_router;
use elearnd::types::PortalState;

/// Path to a fresh database file unique to this test.
pub fn temp_db_path(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "{}-{}",
        prefix,
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir.join("elearning.db")
}

/// Boots the portal on an ephemeral port over a fresh seeded database and
/// returns its base URL plus the database path for direct inspection.
pub async fn spawn_portal(prefix: &str) -> (String, PathBuf) {
    let db_path = temp_db_path(prefix);
    let config = ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        db_path: db_path.to_string_lossy().into_owned(),
    };

    let db = PortalDbManager::open(&config.db_path).expect("open portal db");
    let state = Arc::new(PortalState { db, config });
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });

    (format!("http://{addr}"), db_path)
}

/// Registers a user and logs in, returning the assigned user id.
pub async fn register_and_login(
    client: &reqwest::Client,
    base: &str,
    username: &str,
) -> i64 {
    let resp: serde_json::Value = client
        .post(format!("{base}/api/register"))
        .json(&serde_json::json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "secret",
        }))
        .send()
        .await
        .expect("register request")
        .json()
        .await
        .expect("register body");
    assert_eq!(resp["success"], true, "register failed: {resp}");

    let resp: serde_json::Value = client
        .post(format!("{base}/api/login"))
        .json(&serde_json::json!({ "username": username, "password": "secret" }))
        .send()
        .await
        .expect("login request")
        .json()
        .await
        .expect("login body");
    assert_eq!(resp["success"], true, "login failed: {resp}");
    resp["user"]["id"].as_i64().expect("user id")
}

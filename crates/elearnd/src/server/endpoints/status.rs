//! Root and health endpoints.

use axum::http::header;
use axum::response::{IntoResponse, Response};

const INDEX_STUB: &str = "<!DOCTYPE html><html><head><title>Redirect</title></head>\
<body><script>window.location.href='index.html';</script></body></html>";

/// GET /
///
/// HTML stub that redirects the browser to the static frontend.
pub async fn get_index() -> Response {
    ([(header::CONTENT_TYPE, "text/html")], INDEX_STUB).into_response()
}

/// GET /health
pub async fn get_health() -> &'static str {
    "OK"
}

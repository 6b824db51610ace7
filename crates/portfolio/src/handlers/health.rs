//! Health check endpoint.

use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Does not touch the database.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

//! Static file serving handler for stylesheets, images and documents.

use std::path::{Component, Path as FsPath, PathBuf};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::state::AppState;

/// Serve static files from the configured static directory (GET /static/{*path}).
pub async fn serve_static(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Response {
    let Some(file_path) = resolve(&state.static_dir, &filename) else {
        tracing::debug!(filename = %filename, "Rejected static path");
        return (StatusCode::NOT_FOUND, "Not found").into_response();
    };

    match tokio::fs::read(&file_path).await {
        Ok(contents) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, content_type(&filename)),
                (header::CACHE_CONTROL, "public, max-age=3600"),
            ],
            contents,
        )
            .into_response(),
        Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}

/// Joins a request path onto `root`, refusing anything that could escape it.
fn resolve(root: &FsPath, filename: &str) -> Option<PathBuf> {
    let relative = FsPath::new(filename);
    if filename.is_empty()
        || !relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
    {
        return None;
    }
    Some(root.join(relative))
}

/// Determine content type based on extension.
fn content_type(filename: &str) -> &'static str {
    let extension = FsPath::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

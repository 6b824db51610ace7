use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{
        health::livez,
        pages::{about, contact, index, not_found, resume, thank_you},
        projects::{add_project, add_project_form, delete_project, list_projects},
        static_files::serve_static,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Static pages
        .route("/", get(index))
        .route("/index", get(index))
        .route("/about", get(about))
        .route("/contact", get(contact))
        .route("/resume", get(resume))
        .route("/thankyou", get(thank_you))
        // Projects
        .route("/projects", get(list_projects))
        .route("/projects/add", get(add_project_form).post(add_project))
        .route("/projects/{id}/delete", post(delete_project))
        // Assets and probes
        .route("/static/{*filename}", get(serve_static))
        .route("/livez", get(livez))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

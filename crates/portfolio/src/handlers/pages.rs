//! Static informational pages.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Template wrapper that converts Askama templates into HTML responses.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render template");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

/// Page templates only carry the navigation entry to highlight.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    active: &'static str,
}

#[derive(Template)]
#[template(path = "about.html")]
struct AboutTemplate {
    active: &'static str,
}

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate {
    active: &'static str,
}

#[derive(Template)]
#[template(path = "resume.html")]
struct ResumeTemplate {
    active: &'static str,
}

#[derive(Template)]
#[template(path = "thankyou.html")]
struct ThankYouTemplate {
    active: &'static str,
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {
    active: &'static str,
}

/// Handler for the home page (GET / and GET /index).
pub async fn index() -> impl IntoResponse {
    HtmlTemplate(IndexTemplate { active: "home" })
}

/// Handler for GET /about.
pub async fn about() -> impl IntoResponse {
    HtmlTemplate(AboutTemplate { active: "about" })
}

/// Handler for GET /contact.
pub async fn contact() -> impl IntoResponse {
    HtmlTemplate(ContactTemplate { active: "contact" })
}

/// Handler for GET /resume.
pub async fn resume() -> impl IntoResponse {
    HtmlTemplate(ResumeTemplate { active: "resume" })
}

/// Handler for GET /thankyou.
pub async fn thank_you() -> impl IntoResponse {
    HtmlTemplate(ThankYouTemplate { active: "contact" })
}

/// Fallback for unknown paths.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, HtmlTemplate(NotFoundTemplate { active: "" }))
}

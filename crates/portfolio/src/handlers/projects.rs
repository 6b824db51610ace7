//! Project listing, creation and deletion handlers.

use askama::Template;
use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form,
};

use portfolio_core::project::Project;

use crate::{
    handlers::{pages::HtmlTemplate, AppError},
    models::AddProjectForm,
    state::AppState,
};

/// Path of the project listing; target of every redirect in this module.
const PROJECTS_PATH: &str = "/projects";

/// Project listing template.
#[derive(Template)]
#[template(path = "projects.html")]
struct ProjectsTemplate {
    active: &'static str,
    projects: Vec<Project>,
}

/// Add-project form template.
///
/// Empty for a fresh form; carries the submitted values and an error when
/// validation fails.
#[derive(Template)]
#[template(path = "add_project.html")]
struct AddProjectTemplate {
    active: &'static str,
    error: Option<String>,
    title: String,
    description: String,
    image: String,
}

impl AddProjectTemplate {
    fn empty() -> Self {
        Self::with_values(None, String::new(), String::new(), String::new())
    }

    fn with_values(
        error: Option<String>,
        title: String,
        description: String,
        image: String,
    ) -> Self {
        Self {
            active: "projects",
            error,
            title,
            description,
            image,
        }
    }
}

/// A `302 Found` redirect to `location`.
fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// Handler for the project listing (GET /projects).
pub async fn list_projects(State(state): State<AppState>) -> Result<Response, AppError> {
    let projects = state.projects.list_projects().await?;

    tracing::debug!(count = projects.len(), "Listing projects");

    Ok(HtmlTemplate(ProjectsTemplate {
        active: "projects",
        projects,
    })
    .into_response())
}

/// Handler for the empty add-project form (GET /projects/add).
pub async fn add_project_form() -> impl IntoResponse {
    HtmlTemplate(AddProjectTemplate::empty())
}

/// Handler for add-project submissions (POST /projects/add).
///
/// A blank title re-renders the form with the submitted values and a 200
/// status. A body that is not a url-encoded form counts as an empty form.
/// Store failures propagate as a 500.
pub async fn add_project(
    State(state): State<AppState>,
    form: Result<Form<AddProjectForm>, FormRejection>,
) -> Result<Response, AppError> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable project submission");
            AddProjectForm::default()
        }
    };

    let project = match form.to_new_project() {
        Ok(project) => project,
        Err(err) => {
            tracing::info!(error = %err, "Rejected project submission");

            let AddProjectForm {
                title,
                description,
                image,
            } = form;
            return Ok(HtmlTemplate(AddProjectTemplate::with_values(
                Some(err.to_string()),
                title,
                description,
                image,
            ))
            .into_response());
        }
    };

    let id = state.projects.create_project(&project).await?;

    tracing::info!(project_id = id, title = %project.title, "Created new project");

    Ok(found(PROJECTS_PATH))
}

/// Handler for project deletion (POST /projects/{id}/delete).
///
/// Unknown ids are ignored; the response is always a redirect to the listing.
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    state.projects.delete_project(id).await?;

    tracing::info!(project_id = id, "Deleted project");

    Ok(found(PROJECTS_PATH))
}

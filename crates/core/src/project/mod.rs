mod error;
mod operations;
mod types;

pub use error::ProjectError;
pub use operations::{validate_new_project, validate_title};
pub use types::{NewProject, Project};

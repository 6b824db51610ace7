use thiserror::Error;

/// Errors that can occur when validating a project submission.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProjectError {
    #[error("Title is required")]
    TitleRequired,
}

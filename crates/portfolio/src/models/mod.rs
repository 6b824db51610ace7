mod project;

pub use project::AddProjectForm;

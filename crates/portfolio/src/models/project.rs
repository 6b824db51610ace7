use serde::Deserialize;

use portfolio_core::project::{validate_new_project, NewProject, ProjectError};

/// Form payload submitted by the add-project page.
///
/// Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddProjectForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

impl AddProjectForm {
    /// Validates the submission and converts it into a NewProject.
    pub fn to_new_project(&self) -> Result<NewProject, ProjectError> {
        validate_new_project(&self.title, &self.description, &self.image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let form: AddProjectForm = serde_json::from_str(r#"{"title": "Test Project"}"#).unwrap();

        assert_eq!(form.title, "Test Project");
        assert_eq!(form.description, "");
        assert_eq!(form.image, "");
    }

    #[test]
    fn test_to_new_project_trims_title_only() {
        let form = AddProjectForm {
            title: "  Fixed Title  ".to_string(),
            description: " d ".to_string(),
            image: "i.jpg".to_string(),
        };

        let project = form.to_new_project().unwrap();
        assert_eq!(project.title, "Fixed Title");
        assert_eq!(project.description, " d ");
        assert_eq!(project.image_filename.as_deref(), Some("i.jpg"));
    }

    #[test]
    fn test_to_new_project_requires_title() {
        let form = AddProjectForm {
            title: "   ".to_string(),
            ..Default::default()
        };

        assert_eq!(form.to_new_project(), Err(ProjectError::TitleRequired));
    }
}

use super::error::ProjectError;
use super::types::NewProject;

/// Validates a submitted title and returns it trimmed.
///
/// A title that is empty after trimming whitespace is rejected.
pub fn validate_title(title: &str) -> Result<&str, ProjectError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ProjectError::TitleRequired);
    }
    Ok(trimmed)
}

/// Builds a project submission from raw form values.
///
/// Only the title is trimmed. Description and image are kept as submitted,
/// and an empty image means "no image".
pub fn validate_new_project(
    title: &str,
    description: &str,
    image: &str,
) -> Result<NewProject, ProjectError> {
    let title = validate_title(title)?;

    let mut project = NewProject::new(title, description);
    if !image.is_empty() {
        project = project.with_image(image);
    }
    Ok(project)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title_trims() {
        assert_eq!(validate_title("  Fixed Title \t"), Ok("Fixed Title"));
    }

    #[test]
    fn test_validate_title_rejects_empty() {
        assert_eq!(validate_title(""), Err(ProjectError::TitleRequired));
    }

    #[test]
    fn test_validate_title_rejects_whitespace_only() {
        assert_eq!(validate_title("   "), Err(ProjectError::TitleRequired));
        assert_eq!(validate_title("\n\t "), Err(ProjectError::TitleRequired));
    }

    #[test]
    fn test_validate_new_project_keeps_description_and_image() {
        let project = validate_new_project(" Fixed Title ", "  d  ", " i.jpg").unwrap();
        assert_eq!(project.title, "Fixed Title");
        assert_eq!(project.description, "  d  ");
        assert_eq!(project.image_filename.as_deref(), Some(" i.jpg"));
    }

    #[test]
    fn test_validate_new_project_without_image() {
        let project = validate_new_project("Minimal", "", "").unwrap();
        assert_eq!(project.image_filename, None);
        assert_eq!(project.stored_image_filename(), "");
    }

    #[test]
    fn test_validate_new_project_rejects_blank_title() {
        let result = validate_new_project("   ", "Some description", "test.jpg");
        assert_eq!(result, Err(ProjectError::TitleRequired));
    }
}

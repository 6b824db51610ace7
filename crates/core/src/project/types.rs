use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A portfolio item as persisted by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Assigned by the store on creation; never reused.
    pub id: i64,
    pub title: String,
    /// Empty when the project has no description.
    pub description: String,
    /// File name under `/static/images`. Empty when the project has no image.
    pub image_filename: String,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Returns true if the project carries its own image.
    pub fn has_image(&self) -> bool {
        !self.image_filename.is_empty()
    }
}

/// The fields supplied when creating a project.
///
/// The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub image_filename: Option<String>,
}

impl NewProject {
    /// Creates a new project submission without an image.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_filename: None,
        }
    }

    /// Sets the image file name for this project.
    pub fn with_image(mut self, image_filename: impl Into<String>) -> Self {
        self.image_filename = Some(image_filename.into());
        self
    }

    /// The image file name as it is persisted: absent becomes empty.
    pub fn stored_image_filename(&self) -> &str {
        self.image_filename.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_project_defaults_to_no_image() {
        let project = NewProject::new("Portfolio", "My site");
        assert_eq!(project.title, "Portfolio");
        assert_eq!(project.description, "My site");
        assert_eq!(project.image_filename, None);
        assert_eq!(project.stored_image_filename(), "");
    }

    #[test]
    fn test_new_project_with_image() {
        let project = NewProject::new("Portfolio", "").with_image("site.png");
        assert_eq!(project.image_filename.as_deref(), Some("site.png"));
        assert_eq!(project.stored_image_filename(), "site.png");
    }

    #[test]
    fn test_has_image() {
        let mut project = Project {
            id: 1,
            title: "Portfolio".to_string(),
            description: String::new(),
            image_filename: String::new(),
            created_at: Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap(),
        };
        assert!(!project.has_image());

        project.image_filename = "site.png".to_string();
        assert!(project.has_image());
    }

    #[test]
    fn test_project_serializes_fields() {
        let project = Project {
            id: 7,
            title: "Portfolio".to_string(),
            description: "My site".to_string(),
            image_filename: "site.png".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap(),
        };

        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Portfolio");
        assert_eq!(json["image_filename"], "site.png");
        assert_eq!(json["created_at"], "2024-06-15T10:30:00Z");
    }
}

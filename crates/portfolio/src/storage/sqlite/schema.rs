//! SQLite schema definitions and SQL query constants.
//!
//! Column names match the layout existing `projects.db` files already use.

/// SQL statement to create the projects table.
///
/// `AUTOINCREMENT` keeps ids of deleted rows from being handed out again.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    Title TEXT NOT NULL,
    Description TEXT,
    ImageFileName TEXT,
    CreatedAt TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
"#;

pub const INSERT_PROJECT: &str = r#"
INSERT INTO projects (Title, Description, ImageFileName)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_ALL_PROJECTS: &str = r#"
SELECT id, Title, Description, ImageFileName, CreatedAt
FROM projects
ORDER BY id DESC
"#;

pub const SELECT_PROJECT_BY_ID: &str = r#"
SELECT id, Title, Description, ImageFileName, CreatedAt
FROM projects
WHERE id = ?1
"#;

pub const DELETE_PROJECT: &str = r#"
DELETE FROM projects
WHERE id = ?1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_idempotent_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS projects"));
        assert!(CREATE_TABLES.contains("AUTOINCREMENT"));
        assert!(CREATE_TABLES.contains("DEFAULT CURRENT_TIMESTAMP"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(INSERT_PROJECT.contains("INSERT"));
        assert!(SELECT_ALL_PROJECTS.contains("ORDER BY id DESC"));
        assert!(SELECT_PROJECT_BY_ID.contains("WHERE id = ?1"));
        assert!(DELETE_PROJECT.contains("DELETE"));
    }

    #[test]
    fn test_create_tables_executes_twice() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(CREATE_TABLES).unwrap();
        conn.execute_batch(CREATE_TABLES).unwrap();

        let columns: Vec<String> = conn
            .prepare("PRAGMA table_info(projects)")
            .unwrap()
            .query_map([], |row| row.get(1))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();

        assert_eq!(
            columns,
            vec!["id", "Title", "Description", "ImageFileName", "CreatedAt"]
        );
    }
}

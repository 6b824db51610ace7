//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, NaiveDateTime, Utc};
use portfolio_core::project::Project;
use rusqlite::Row;

/// Format SQLite's `CURRENT_TIMESTAMP` writes (always UTC).
const SQLITE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Convert a SQLite row to a Project.
///
/// Expected columns: id, Title, Description, ImageFileName, CreatedAt
pub fn row_to_project(row: &Row) -> rusqlite::Result<Project> {
    let id: i64 = row.get(0)?;
    let title: String = row.get(1)?;
    let description: Option<String> = row.get(2)?;
    let image_filename: Option<String> = row.get(3)?;
    let created_at: String = row.get(4)?;

    Ok(Project {
        id,
        title,
        description: description.unwrap_or_default(),
        image_filename: image_filename.unwrap_or_default(),
        created_at: parse_timestamp(&created_at).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
        })?,
    })
}

/// Parse a creation timestamp.
///
/// Accepts SQLite's `YYYY-MM-DD HH:MM:SS` (with optional fractional seconds)
/// and RFC 3339.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match NaiveDateTime::parse_from_str(s, SQLITE_TIMESTAMP_FORMAT) {
        Ok(naive) => Ok(naive.and_utc()),
        Err(_) => match NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
            Ok(naive) => Ok(naive.and_utc()),
            Err(_) => DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc)),
        },
    }
}

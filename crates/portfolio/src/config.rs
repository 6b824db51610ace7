use std::{env, path::PathBuf};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file (default: "projects.db")
    pub database_path: PathBuf,
    /// Directory served under `/static` (default: the crate's `static/` directory)
    pub static_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORTFOLIO_DATABASE` - SQLite database path (default: "projects.db")
    /// - `PORTFOLIO_STATIC_DIR` - Static asset directory
    pub fn from_env() -> Self {
        Self {
            database_path: env::var("PORTFOLIO_DATABASE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("projects.db")),
            static_dir: env::var("PORTFOLIO_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_static_dir()),
        }
    }

    /// Replace the database path (e.g. from a command-line flag).
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

pub mod error;
pub mod health;
pub mod pages;
pub mod projects;
pub mod static_files;

pub use error::AppError;

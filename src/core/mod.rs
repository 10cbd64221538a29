//! Core module - fundamental types and utilities

pub mod config;
pub mod identity;
pub mod loader;
pub mod project;
pub mod report;

pub use config::Config;
pub use identity::{IdParseError, ReportId, ReportKind};
pub use project::{Project, ProjectError};
pub use report::{Report, Status};

//! Access to fixed-path text files owned by the installed application.

use std::path::Path;

use crate::domain::AppError;

/// Port for reading and rewriting configuration and credential files.
pub trait ConfigFileStore {
    /// Read a file as UTF-8 text.
    fn read(&self, path: &Path) -> Result<String, AppError>;

    /// Replace a file's content. The file is not created atomically.
    fn write(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Check whether a file exists.
    fn exists(&self, path: &Path) -> bool;
}

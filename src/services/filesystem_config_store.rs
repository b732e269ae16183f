use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::ConfigFileStore;

/// Config file store operating directly on the host filesystem.
#[derive(Debug, Clone, Default)]
pub struct FilesystemConfigStore;

impl FilesystemConfigStore {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigFileStore for FilesystemConfigStore {
    fn read(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(|err| AppError::config_file(path, err))
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content).map_err(|err| AppError::config_file(path, err))
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

//! Env file loading from local disk

use std::path::Path;

use crate::domain::entities::EnvFile;
use crate::error::ConfigurationError;

/// Read and parse an env file
pub fn read_env_file(path: &Path) -> Result<EnvFile, ConfigurationError> {
    if !path.exists() {
        return Err(ConfigurationError::MissingEnvFile {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(EnvFile::parse(&content))
}

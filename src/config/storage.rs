//! Storage locations

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where profiles are kept and reports are written.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// One YAML file per profile
    #[serde(default = "default_profiles_dir")]
    pub profiles_dir: PathBuf,

    /// Default destination for generated files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.profiles_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyPath("profiles_dir"));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyPath("output_dir"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            profiles_dir: default_profiles_dir(),
            output_dir: default_output_dir(),
        }
    }
}

fn base_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".skskyforge")
}

fn default_profiles_dir() -> PathBuf {
    base_dir().join("profiles")
}

fn default_output_dir() -> PathBuf {
    base_dir().join("output")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_defaults_share_base() {
        let config = StorageConfig::default();
        assert!(config.profiles_dir.ends_with(".skskyforge/profiles"));
        assert!(config.output_dir.ends_with(".skskyforge/output"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_path_is_invalid() {
        let config = StorageConfig {
            profiles_dir: PathBuf::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::EmptyPath("profiles_dir"))
        ));
    }
}

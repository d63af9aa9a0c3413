//! Filesystem repository adapter for YAML profile files

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::DomainError;
use crate::domain::profile::{validate_profile_name, UserProfile};
use crate::ports::{ProfileRepository, StorageError};

const PROFILE_EXTENSION: &str = "yaml";

/// Filesystem-based profile repository
///
/// Stores one YAML file per profile in a configurable directory:
/// {profiles_dir}/{name}.yaml
pub struct FsProfileRepository {
    profiles_dir: PathBuf,
}

impl FsProfileRepository {
    /// Create new repository rooted at `profiles_dir`
    pub fn new(profiles_dir: impl AsRef<Path>) -> Self {
        Self {
            profiles_dir: profiles_dir.as_ref().to_path_buf(),
        }
    }

    pub fn profiles_dir(&self) -> &Path {
        &self.profiles_dir
    }

    /// Get full path to a profile file
    pub fn profile_path(&self, name: &str) -> Result<PathBuf, StorageError> {
        validate_profile_name(name).map_err(|e| StorageError::InvalidPath(e.to_string()))?;
        Ok(self
            .profiles_dir
            .join(format!("{}.{}", name, PROFILE_EXTENSION)))
    }

    /// Ensure the profiles directory exists
    async fn ensure_dir_exists(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.profiles_dir)
            .await
            .map_err(|e| StorageError::IoError(format!("Failed to create directory: {}", e)))
    }

    async fn write(&self, profile: &UserProfile) -> Result<PathBuf, StorageError> {
        let file_path = self.profile_path(&profile.name)?;
        self.ensure_dir_exists().await?;

        let content = serde_yaml::to_string(profile)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        // Write file atomically using a temporary file
        let temp_path = file_path.with_extension("yaml.tmp");
        fs::write(&temp_path, content).await.map_err(|e| {
            StorageError::IoError(format!("Failed to write temporary file: {}", e))
        })?;

        // Rename to final location (atomic operation on Unix)
        fs::rename(&temp_path, &file_path).await.map_err(|e| {
            StorageError::IoError(format!("Failed to rename file: {}", e))
        })?;

        Ok(file_path)
    }

    async fn read(&self, path: &Path) -> Result<UserProfile, StorageError> {
        let content = fs::read_to_string(path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::NotFound(path.display().to_string()),
            std::io::ErrorKind::PermissionDenied => {
                StorageError::PermissionDenied(format!("Cannot read file: {}", e))
            }
            _ => StorageError::IoError(format!("Failed to read file: {}", e)),
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            StorageError::Serialization(format!("{}: {}", path.display(), e))
        })
    }

    async fn profile_files(&self) -> Result<Vec<(String, PathBuf)>, StorageError> {
        self.ensure_dir_exists().await?;

        let mut dir = fs::read_dir(&self.profiles_dir)
            .await
            .map_err(|e| StorageError::IoError(format!("Failed to read directory: {}", e)))?;

        let mut files = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| StorageError::IoError(format!("Failed to read directory: {}", e)))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(PROFILE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                files.push((stem.to_string(), path.clone()));
            }
        }
        files.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(files)
    }
}

#[async_trait]
impl ProfileRepository for FsProfileRepository {
    async fn create(&self, profile: &UserProfile) -> Result<(), DomainError> {
        if self.exists(&profile.name).await? {
            return Err(DomainError::conflict(format!(
                "Profile '{}' already exists",
                profile.name
            ))
            .with_detail("profile", profile.name.clone()));
        }
        let path = self.write(profile).await?;
        tracing::info!(profile = %profile.name, path = %path.display(), "profile created");
        Ok(())
    }

    async fn update(&self, profile: &UserProfile) -> Result<(), DomainError> {
        let path = self.write(profile).await?;
        tracing::info!(profile = %profile.name, path = %path.display(), "profile saved");
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<UserProfile>, DomainError> {
        let path = self.profile_path(name)?;
        if !path.exists() {
            return Ok(None);
        }
        match self.read(&path).await {
            Ok(profile) => Ok(Some(profile)),
            Err(StorageError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn list(&self) -> Result<Vec<UserProfile>, DomainError> {
        let mut profiles = Vec::new();
        for (name, path) in self.profile_files().await? {
            match self.read(&path).await {
                Ok(profile) => profiles.push(profile),
                Err(e) => tracing::warn!(profile = %name, error = %e, "skipping unreadable profile"),
            }
        }
        Ok(profiles)
    }

    async fn list_names(&self) -> Result<Vec<String>, DomainError> {
        Ok(self
            .profile_files()
            .await?
            .into_iter()
            .map(|(name, _)| name)
            .collect())
    }

    async fn delete(&self, name: &str) -> Result<(), DomainError> {
        let path = self.profile_path(name)?;
        if !path.exists() {
            return Err(DomainError::profile_not_found(name));
        }

        fs::remove_file(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                StorageError::PermissionDenied(format!("Cannot delete file: {}", e))
            } else {
                StorageError::IoError(format!("Failed to delete file: {}", e))
            }
        })?;

        tracing::info!(profile = %name, "profile deleted");
        Ok(())
    }

    async fn exists(&self, name: &str) -> Result<bool, DomainError> {
        Ok(self.profile_path(name)?.exists())
    }
}

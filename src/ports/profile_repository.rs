//! ProfileRepository port for profile persistence operations

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::profile::UserProfile;

/// Errors that can occur during profile storage operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// File not found
    NotFound(String),
    /// Permission denied
    PermissionDenied(String),
    /// IO error
    IoError(String),
    /// Invalid path
    InvalidPath(String),
    /// Record could not be encoded or decoded
    Serialization(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "File not found: {}", msg),
            Self::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            Self::IoError(msg) => write!(f, "IO error: {}", msg),
            Self::InvalidPath(msg) => write!(f, "Invalid path: {}", msg),
            Self::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        let code = match &err {
            StorageError::NotFound(_) => ErrorCode::NotFound,
            StorageError::InvalidPath(_) => ErrorCode::InvalidFormat,
            _ => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Repository for user profiles, keyed by profile name.
///
/// Writes for the same name are last-writer-wins; implementations do not
/// coordinate concurrent writers.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Persist a new profile. Fails with `Conflict` if the name is taken.
    async fn create(&self, profile: &UserProfile) -> Result<(), DomainError>;

    /// Persist a profile, replacing any stored record with the same name.
    async fn update(&self, profile: &UserProfile) -> Result<(), DomainError>;

    /// Find profile by name
    async fn find_by_name(&self, name: &str) -> Result<Option<UserProfile>, DomainError>;

    /// All readable profiles, sorted by name
    async fn list(&self) -> Result<Vec<UserProfile>, DomainError>;

    /// Names of every stored record, readable or not, sorted
    async fn list_names(&self) -> Result<Vec<String>, DomainError>;

    /// Delete a profile. Fails with `ProfileNotFound` if it does not exist.
    async fn delete(&self, name: &str) -> Result<(), DomainError>;

    /// Check if a profile exists
    async fn exists(&self, name: &str) -> Result<bool, DomainError>;
}

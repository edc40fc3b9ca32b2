//! Repository factory for dependency injection.
//!
//! This module creates repository instances from runtime configuration.

use chrono::{DateTime, Utc};
use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositorySettings;
use super::repositories::LocalRepository;
use super::repository::{DashboardRepository, RepositoryError, RepositoryResult};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string ("local", "memory").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" | "memory" | "in-memory" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```
/// use isp_dashboard::db::{RepositoryFactory, RepositoryType};
///
/// let repo = RepositoryFactory::create(RepositoryType::Local);
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an empty repository of the given type.
    pub fn create(repo_type: RepositoryType) -> Arc<dyn DashboardRepository> {
        match repo_type {
            RepositoryType::Local => Self::create_local(),
        }
    }

    /// Create an empty in-memory local repository.
    pub fn create_local() -> Arc<dyn DashboardRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create a repository from the `[repository]` settings.
    ///
    /// When `seed_sample_data` is set, the local repository is filled with the
    /// reference dashboard data laid out around `now`.
    pub fn from_settings(
        settings: &RepositorySettings,
        now: DateTime<Utc>,
    ) -> RepositoryResult<Arc<dyn DashboardRepository>> {
        let repo_type = settings.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        match repo_type {
            RepositoryType::Local if settings.seed_sample_data => {
                log::info!("Seeding local repository with sample dashboard data");
                Ok(Arc::new(LocalRepository::with_sample_data(now)))
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }
}

//! Repository section of the dashboard configuration file.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::factory::RepositoryType;

/// Repository settings, the `[repository]` table of `dashboard.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type", default = "default_repo_type")]
    pub repo_type: String,
    /// Seed the in-memory repository with the reference dashboard data.
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,
}

fn default_repo_type() -> String {
    "local".to_string()
}

fn default_seed_sample_data() -> bool {
    true
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            repo_type: default_repo_type(),
            seed_sample_data: default_seed_sample_data(),
        }
    }
}

impl RepositorySettings {
    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repo_type)
    }
}

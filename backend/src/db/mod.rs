//! Data-source layer for the dashboard.
//!
//! Raw records come from upstream collaborators (subscription store, billing,
//! monitoring, alert source). This module abstracts them behind the
//! Repository pattern so storage backends can be swapped easily.
//!
//! - `services`: Repository-agnostic operations (use these in your application!)
//! - `repository`: Trait definition and error types
//! - `repositories::local`: In-memory implementation for tests and local development
//! - `factory`: Factory for creating repository instances
//! - `repo_config`: The `[repository]` configuration section
//!
//! # Recommended Usage
//!
//! ```
//! use isp_dashboard::db::{repositories::LocalRepository, services};
//!
//! # async fn example() {
//! let repo = LocalRepository::with_sample_data(chrono::Utc::now());
//! let inputs = services::load_inputs(&repo).await;
//! assert!(inputs.customers.is_some());
//! # }
//! ```

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;

pub use services::{health_check, load_inputs};

pub use repo_config::RepositorySettings;

pub use factory::{RepositoryFactory, RepositoryType};
pub use repositories::LocalRepository;
pub use repository::{DashboardRepository, ErrorContext, RepositoryError, RepositoryResult};

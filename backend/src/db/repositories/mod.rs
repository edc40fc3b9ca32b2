//! Repository implementations module.
//!
//! - `local`: In-memory implementation for unit testing and local development
//! - `sample`: Reference dashboard data used to seed the local repository
pub mod local;
pub mod sample;

pub use local::LocalRepository;

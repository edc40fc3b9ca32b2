//! # ISP Dashboard Backend
//!
//! Snapshot aggregation for an ISP operations dashboard.
//!
//! The crate turns raw operational records (customers, billing items, router
//! pings, subscriptions, alerts and router inventory) into one consistent,
//! point-in-time [`api::DashboardSnapshot`]: headline metric cards, a monthly
//! revenue trend, the plan mix, a day of bandwidth usage, a recent-alert feed
//! and per-router status.
//!
//! ## Architecture
//!
//! - [`models`]: raw input records and calendar helpers
//! - [`routes`]: display types of each dashboard panel
//! - [`api`]: flat re-export of the display types
//! - [`services`]: pure aggregation, one module per panel
//! - [`db`]: repository trait, in-memory repository and sample data
//! - [`render`]: presentation contract and the built-in formatted view
//! - [`config`]: `dashboard.toml` and environment settings
//! - [`http`]: Axum REST API (feature `http-server`)
//!
//! ## Example
//!
//! ```
//! use chrono::Utc;
//! use isp_dashboard::config::AggregatorConfig;
//! use isp_dashboard::models::DashboardInputs;
//! use isp_dashboard::services::build_snapshot;
//!
//! let inputs = DashboardInputs::new()
//!     .with_customers(Vec::new())
//!     .with_billing_records(Vec::new())
//!     .with_subscriptions(Vec::new());
//! let snapshot = build_snapshot(&inputs, Utc::now(), &AggregatorConfig::default()).unwrap();
//! assert_eq!(snapshot.metrics.len(), 4);
//! ```

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod render;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

//! HTTP server module for the dashboard backend.
//!
//! Exposes the snapshot aggregator as a small read-only REST API. Handlers
//! fetch inputs through the repository layer, build a snapshot and return it
//! either raw or as a pre-formatted [`crate::render::DashboardView`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Query parsing                                          │
//! │  - JSON serialization                                     │
//! │  - CORS, compression, error mapping                       │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Snapshot aggregation                                   │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Repository Layer (db/)                                   │
//! │  - LocalRepository                                        │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;

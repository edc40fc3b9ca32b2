pub mod alerts;
pub mod metrics;
pub mod plans;
pub mod revenue;
pub mod routers;
pub mod snapshot;
pub mod usage;

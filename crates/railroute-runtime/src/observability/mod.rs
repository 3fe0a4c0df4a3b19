//! Observability for routing decisions

pub mod metrics;

pub use metrics::{Counter, Histogram, Metrics, MetricsCollector};

//! railroute runtime - rule evaluation for payment routing
//!
//! This crate provides the pure routing decision engine and an in-process
//! metrics collector that callers can feed with decision outcomes.

pub mod engine;
pub mod observability;

pub use engine::{evaluate, rules, RoutingDecisionEngine};
pub use observability::{Counter, Histogram, Metrics, MetricsCollector};

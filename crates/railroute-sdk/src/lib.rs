//! railroute SDK
//!
//! High-level API for routing payment instructions to a settlement rail.

pub mod builder;
pub mod config;
pub mod error;
pub mod query;
pub mod render;
pub mod routing_service;

// Re-export main types
pub use builder::RoutingServiceBuilder;
pub use config::EngineConfig;
pub use error::{Result, SdkError};
pub use query::{from_query_string, share_link, to_query_string};
pub use render::render_decision_path;
pub use routing_service::{RouteResponse, RoutingService};

// Re-export commonly used types from dependencies
pub use railroute_core::{LogicStepResult, RouteType, RoutingInputs, RoutingResult};
pub use railroute_runtime::MetricsCollector;

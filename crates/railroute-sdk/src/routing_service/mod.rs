//! RoutingService - main API for routing payment instructions
//!
//! Wraps the pure routing engine with request ids, timing, metrics,
//! invariant checks and decision logging.
//!
//! - `types`: response type
//! - `service`: RoutingService implementation

mod service;
mod types;

pub use service::RoutingService;
pub use types::RouteResponse;

//! railroute core - types shared across the railroute payment routing engine
//!
//! This crate provides:
//! - Raw routing inputs and their defaults
//! - Canonical tags for payment method, currency and settlement rail
//! - The single normalization pass every rule step reads from
//! - Routing result and audit trail types
//! - Error types

pub mod error;
pub mod result;
pub mod types;

pub use error::CoreError;
pub use result::{Criterion, LogicStepResult, RoutingResult};
pub use types::{
    Currency, NormalizedInputs, PaymentMethod, RouteProfile, RouteType, RoutingInputs,
    CNH_FPS_LIMIT, DBS_HK_SWIFT, DEFAULT_BENEFICIARY_SWIFT, HKG,
};

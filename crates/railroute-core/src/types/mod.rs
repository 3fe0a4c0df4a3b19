//! Routing input and tag types

pub mod currency;
pub mod inputs;
pub mod method;
pub mod normalized;
pub mod route;

pub use currency::Currency;
pub use inputs::{
    parse_amount, RoutingInputs, CNH_FPS_LIMIT, DBS_HK_SWIFT, DEFAULT_AMOUNT,
    DEFAULT_BENEFICIARY_SWIFT, HKG,
};
pub use method::PaymentMethod;
pub use normalized::NormalizedInputs;
pub use route::{RouteProfile, RouteType};

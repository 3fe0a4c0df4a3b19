//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use railroute_sdk::{RouteResponse, RouteType, RoutingInputs, RoutingService};

/// Service with metrics enabled and decision logging off
pub fn test_service() -> RoutingService {
    RoutingService::builder()
        .log_decisions(false)
        .build()
        .expect("default service config is valid")
}

/// In-scope SWIFT payment to Hong Kong, not same bank, not POBO
pub fn swift_hkg(currency: &str, amount: f64) -> RoutingInputs {
    RoutingInputs::new("SWIFT", "HKG", currency, "HSBCHKHHAXXX", amount, false)
}

/// Assertions over routing responses
pub trait ResponseAssertions {
    fn assert_route(&self, expected: RouteType);
    fn assert_step_count(&self, count: usize);
    fn assert_step_names(&self, expected: &[&str]);
}

impl ResponseAssertions for RouteResponse {
    fn assert_route(&self, expected: RouteType) {
        assert_eq!(
            self.result.route, expected,
            "Expected route {}, got {}",
            expected, self.result.route
        );
    }

    fn assert_step_count(&self, count: usize) {
        assert_eq!(
            self.result.steps.len(),
            count,
            "Expected {} evaluated steps, got {:?}",
            count,
            self.result.steps
        );
    }

    fn assert_step_names(&self, expected: &[&str]) {
        let actual: Vec<&str> = self
            .result
            .steps
            .iter()
            .map(|s| s.step_name.as_str())
            .collect();
        assert_eq!(actual, expected);
    }
}

//! Properties that hold across the whole input domain

use crate::engine::RoutingDecisionEngine;
use railroute_core::{NormalizedInputs, RouteType, RoutingInputs, DBS_HK_SWIFT};

const METHODS: [&str; 6] = ["LOCAL", "swift", "", "WIRE", " ", "Local"];
const COUNTRIES: [&str; 4] = ["HKG", "hkg", "USA", ""];
const CURRENCIES: [&str; 6] = ["HKD", "CNH", "USD", "EUR", "GBP", "hkd"];
const SWIFTS: [&str; 4] = [DBS_HK_SWIFT, "HSBCHKHHAXXX", "", "  "];
const AMOUNTS: [f64; 6] = [0.0, 10_000.0, 5_000_000.0, 5_000_000.5, 5_000_001.0, f64::NAN];

fn all_inputs() -> Vec<RoutingInputs> {
    let mut out = Vec::new();
    for method in METHODS {
        for country in COUNTRIES {
            for currency in CURRENCIES {
                for swift in SWIFTS {
                    for amount in AMOUNTS {
                        for pobo in [false, true] {
                            out.push(RoutingInputs::new(method, country, currency, swift, amount, pobo));
                        }
                    }
                }
            }
        }
    }
    out
}

#[test]
fn test_every_result_is_well_formed() {
    let engine = RoutingDecisionEngine::new();

    for inputs in all_inputs() {
        let result = engine.evaluate(&inputs);
        assert!(
            result.validate().is_ok(),
            "invalid result {:?} for {:?}",
            result,
            inputs
        );
        assert!(!result.steps.is_empty() && result.steps.len() <= 5);
    }
}

#[test]
fn test_route_matches_deciding_step() {
    let engine = RoutingDecisionEngine::new();

    for inputs in all_inputs() {
        let result = engine.evaluate(&inputs);
        let expected = match result.steps.len() {
            1 | 5 => RouteType::Tt,
            2 => RouteType::Fps,
            3 => RouteType::Act,
            4 => RouteType::Rtgs,
            n => panic!("unexpected step count {}", n),
        };
        assert_eq!(result.route, expected, "{:?}", inputs);
    }
}

#[test]
fn test_evaluation_is_deterministic() {
    let engine = RoutingDecisionEngine::new();

    for inputs in all_inputs() {
        assert_eq!(engine.evaluate(&inputs), engine.evaluate(&inputs));
    }
}

/// FPS and the RTGS non-SWIFT branch must together cover every valid currency
/// for a local, in-scope, non-POBO, different-bank HKG payment.
#[test]
fn test_fps_and_rtgs_cover_local_valid_currencies() {
    let engine = RoutingDecisionEngine::new();

    for method in ["LOCAL", ""] {
        for currency in ["HKD", "CNH", "USD", "EUR"] {
            for amount in AMOUNTS.iter().copied().filter(|a| !a.is_nan()) {
                let inputs =
                    RoutingInputs::new(method, "HKG", currency, "HSBCHKHHAXXX", amount, false);
                let route = engine.evaluate(&inputs).route;
                assert!(
                    matches!(route, RouteType::Fps | RouteType::Rtgs),
                    "{} {} {} fell through to {}",
                    method,
                    currency,
                    amount,
                    route
                );
            }
        }
    }
}

#[test]
fn test_fps_and_rtgs_local_bands_partition_valid_currencies() {
    for currency in ["HKD", "CNH", "USD", "EUR", "GBP"] {
        for amount in AMOUNTS {
            let inputs = RoutingInputs::default().with_currency(currency).with_amount(amount);
            let normalized = NormalizedInputs::from_inputs(&inputs);
            assert!(
                !(normalized.fps_currency_band && normalized.rtgs_local_currency_band()),
                "{} {}",
                currency,
                amount
            );
            if !amount.is_nan() {
                assert_eq!(
                    normalized.fps_currency_band || normalized.rtgs_local_currency_band(),
                    normalized.is_valid_currency,
                    "{} {}",
                    currency,
                    amount
                );
            }
        }
    }
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = RoutingDecisionEngine::new();
    let inputs = RoutingInputs::default().with_payment_method("LOCAL");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let inputs = inputs.clone();
            std::thread::spawn(move || engine.evaluate(&inputs).route)
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), RouteType::Fps);
    }
}

//! Routing decision engine
//!
//! Runs the fixed rule sequence over one set of inputs:
//!
//! 1. Scope check. A miss ends evaluation with TT.
//! 2. FPS
//! 3. ACT
//! 4. RTGS
//! 5. Fallback to TT
//!
//! Steps 2-5 are first-match-wins. Every evaluated step is appended to the
//! result; steps after the deciding one are never evaluated.

pub mod rules;
mod step_builder;

#[cfg(test)]
mod tests;

use railroute_core::{LogicStepResult, NormalizedInputs, RouteType, RoutingInputs, RoutingResult};

type RuleFn = fn(&NormalizedInputs) -> LogicStepResult;

/// Routing steps after the scope gate, in priority order
const ROUTING_RULES: [(RouteType, RuleFn); 3] = [
    (RouteType::Fps, rules::fps),
    (RouteType::Act, rules::act),
    (RouteType::Rtgs, rules::rtgs),
];

/// Stateless, pure routing engine. Safe to share and call from any thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoutingDecisionEngine;

impl RoutingDecisionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Classify one payment instruction. Never fails.
    pub fn evaluate(&self, inputs: &RoutingInputs) -> RoutingResult {
        let normalized = NormalizedInputs::from_inputs(inputs);
        self.evaluate_normalized(&normalized)
    }

    /// Classify an already normalized instruction
    pub fn evaluate_normalized(&self, normalized: &NormalizedInputs) -> RoutingResult {
        let mut steps = Vec::with_capacity(5);

        let scope = rules::scope_check(normalized);
        let in_scope = scope.is_match;
        steps.push(scope);

        if !in_scope {
            return RoutingResult::new(RouteType::Tt, steps);
        }

        for (route, rule) in ROUTING_RULES {
            let step = rule(normalized);
            let matched = step.is_match;
            steps.push(step);

            if matched {
                return RoutingResult::new(route, steps);
            }
        }

        steps.push(rules::fallback());
        RoutingResult::new(RouteType::Tt, steps)
    }
}

/// Convenience wrapper around [`RoutingDecisionEngine::evaluate`]
pub fn evaluate(inputs: &RoutingInputs) -> RoutingResult {
    RoutingDecisionEngine::new().evaluate(inputs)
}

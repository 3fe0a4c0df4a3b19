//! Routing result and audit trail types
//!
//! These structures capture which rule steps were evaluated, which
//! sub-conditions held, and the rail that was finally chosen.

use crate::error::{CoreError, Result};
use crate::types::RouteType;
use serde::{Deserialize, Serialize};

/// A single named sub-condition of a rule step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub label: String,
    pub met: bool,
}

impl Criterion {
    pub fn new(label: impl Into<String>, met: bool) -> Self {
        Self {
            label: label.into(),
            met,
        }
    }
}

/// Audit record of one evaluated rule step.
///
/// Serialized in camelCase (`stepName`, `isMatch`) like [`RoutingInputs`](crate::RoutingInputs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicStepResult {
    pub step_name: String,

    /// Whether the step's combined conditions held
    pub is_match: bool,

    pub reason: String,

    /// Criteria in evaluation order, recorded whether met or not
    pub criteria: Vec<Criterion>,
}

impl LogicStepResult {
    /// Number of criteria that held
    pub fn met_count(&self) -> usize {
        self.criteria.iter().filter(|c| c.met).count()
    }
}

/// Scope check, three routing steps and the fallback
const MAX_STEPS: usize = 5;

/// Outcome of routing one payment instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingResult {
    pub route: RouteType,

    /// Evaluated steps in order; evaluation stops at the first match
    pub steps: Vec<LogicStepResult>,
}

impl RoutingResult {
    pub fn new(route: RouteType, steps: Vec<LogicStepResult>) -> Self {
        Self { route, steps }
    }

    /// The step that ended evaluation and decided the route
    pub fn decisive_step(&self) -> Option<&LogicStepResult> {
        self.steps.last()
    }

    /// True when the scope check rejected the instruction outright
    pub fn is_out_of_scope(&self) -> bool {
        self.steps.len() == 1 && !self.steps[0].is_match
    }

    /// Check the audit trail is well formed.
    ///
    /// Either the single scope step failed and the route is TT, or the scope
    /// step passed, the last step is the only routing step that matched, and
    /// the route is the one that position decides (2 FPS, 3 ACT, 4 RTGS,
    /// 5 TT). The scope step is a gate, not a routing step, so its own
    /// `is_match` is not counted as a routing match.
    pub fn validate(&self) -> Result<()> {
        let Some(last) = self.steps.last() else {
            return Err(CoreError::InvariantViolation("result has no steps".to_string()));
        };

        if self.is_out_of_scope() {
            if self.route != RouteType::Tt {
                return Err(CoreError::InvariantViolation(format!(
                    "out-of-scope instruction routed to {}",
                    self.route
                )));
            }
            return Ok(());
        }

        if self.steps.len() > MAX_STEPS {
            return Err(CoreError::InvariantViolation(format!(
                "{} steps recorded, at most {} exist",
                self.steps.len(),
                MAX_STEPS
            )));
        }

        if !self.steps[0].is_match {
            return Err(CoreError::InvariantViolation(format!(
                "routing steps recorded after failed scope step '{}'",
                self.steps[0].step_name
            )));
        }

        if !last.is_match {
            return Err(CoreError::InvariantViolation(format!(
                "last step '{}' did not match",
                last.step_name
            )));
        }

        // Step 0 is the scope gate; among the routing steps only the last may match
        let decisive = self.steps.iter().skip(1).filter(|s| s.is_match).count();
        if decisive != 1 {
            return Err(CoreError::InvariantViolation(format!(
                "expected exactly one matching routing step, found {}",
                decisive
            )));
        }

        let expected = match self.steps.len() {
            2 => RouteType::Fps,
            3 => RouteType::Act,
            4 => RouteType::Rtgs,
            _ => RouteType::Tt,
        };
        if self.route != expected {
            return Err(CoreError::InvariantViolation(format!(
                "route {} disagrees with deciding step '{}' (expected {})",
                self.route, last.step_name, expected
            )));
        }

        Ok(())
    }
}

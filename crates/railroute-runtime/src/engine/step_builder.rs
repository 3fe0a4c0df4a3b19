//! Construction of per-step audit records

use railroute_core::{Criterion, LogicStepResult};

/// How a step combines its criteria into `is_match`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Combinator {
    /// Every criterion must hold
    All,
    /// At least one criterion must hold
    Any,
}

/// Builder for a [`LogicStepResult`].
///
/// Criteria are recorded in the order they are added, met or not, and
/// `is_match` is always derived from them so the two cannot disagree.
pub(crate) struct StepBuilder {
    step_name: &'static str,
    combinator: Combinator,
    criteria: Vec<Criterion>,
    match_reason: &'static str,
    miss_reason: &'static str,
}

impl StepBuilder {
    pub(crate) fn all(step_name: &'static str) -> Self {
        Self::new(step_name, Combinator::All)
    }

    pub(crate) fn any(step_name: &'static str) -> Self {
        Self::new(step_name, Combinator::Any)
    }

    fn new(step_name: &'static str, combinator: Combinator) -> Self {
        Self {
            step_name,
            combinator,
            criteria: Vec::new(),
            match_reason: "",
            miss_reason: "",
        }
    }

    pub(crate) fn criterion(mut self, label: &str, met: bool) -> Self {
        self.criteria.push(Criterion::new(label, met));
        self
    }

    pub(crate) fn reasons(mut self, on_match: &'static str, on_miss: &'static str) -> Self {
        self.match_reason = on_match;
        self.miss_reason = on_miss;
        self
    }

    pub(crate) fn build(self) -> LogicStepResult {
        let is_match = match self.combinator {
            Combinator::All => self.criteria.iter().all(|c| c.met),
            Combinator::Any => self.criteria.iter().any(|c| c.met),
        };

        LogicStepResult {
            step_name: self.step_name.to_string(),
            is_match,
            reason: if is_match { self.match_reason } else { self.miss_reason }.to_string(),
            criteria: self.criteria,
        }
    }
}

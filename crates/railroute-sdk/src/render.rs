//! Plain-text rendering of a routing decision

use railroute_core::{RouteType, RoutingResult};
use std::fmt::Write as _;

/// Render the decision path as a compliance-readable report.
///
/// Only evaluated steps are listed; a step that was never reached does not
/// appear, not even as pending.
pub fn render_decision_path(result: &RoutingResult) -> String {
    let mut out = String::new();
    let profile = result.route.profile();

    let _ = writeln!(out, "Route: {} - {}", result.route, profile.title);
    let _ = writeln!(out, "  {}", profile.description);
    let _ = writeln!(out, "Priority: {}", priority_line());
    out.push('\n');

    for step in &result.steps {
        let marker = if step.is_match { "MATCH" } else { "NO MATCH" };
        let _ = writeln!(out, "[{}] {}: {}", marker, step.step_name, step.reason);
        for criterion in &step.criteria {
            let mark = if criterion.met { 'x' } else { ' ' };
            let _ = writeln!(out, "    [{}] {}", mark, criterion.label);
        }
    }

    out
}

fn priority_line() -> String {
    RouteType::PRIORITY
        .iter()
        .map(RouteType::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

//! The five routing rule steps, in evaluation order
//!
//! Each function reads only the normalized view and returns the full audit
//! record for its step. Ordering and short-circuiting live in the engine.

use super::step_builder::StepBuilder;
use railroute_core::{LogicStepResult, NormalizedInputs};

pub const SCOPE_STEP: &str = "1. Scope Check";
pub const FPS_STEP: &str = "2. FPS";
pub const ACT_STEP: &str = "3. ACT";
pub const RTGS_STEP: &str = "4. RTGS (CHATS)";
pub const FALLBACK_STEP: &str = "5. TT (Fallback)";

/// Gate: method must be LOCAL, SWIFT or blank, unless the payment is POBO eligible
pub fn scope_check(n: &NormalizedInputs) -> LogicStepResult {
    StepBuilder::any(SCOPE_STEP)
        .criterion("Payment method is LOCAL, SWIFT or blank", n.method.is_in_scope())
        .criterion(
            "Or POBO eligible (HKG + valid currency + beneficiary SWIFT present)",
            n.is_pobo_eligible,
        )
        .reasons(
            "Transaction is within routing scope",
            "Transaction is out of routing scope, defaulting to TT",
        )
        .build()
}

pub fn fps(n: &NormalizedInputs) -> LogicStepResult {
    StepBuilder::all(FPS_STEP)
        .criterion("Payment method is not SWIFT", !n.method.is_swift())
        .criterion("Destination country = HKG", n.is_hkg)
        .criterion("Beneficiary bank is not DBS HK (different bank)", !n.is_same_bank)
        .criterion("POBO not enabled", !n.is_pobo)
        .criterion(
            "Currency HKD, or CNH with amount <= 5,000,000",
            n.fps_currency_band,
        )
        .reasons("Meets FPS routing criteria", "Does not meet FPS criteria")
        .build()
}

/// Same-bank transfer; currency and amount play no part
pub fn act(n: &NormalizedInputs) -> LogicStepResult {
    StepBuilder::all(ACT_STEP)
        .criterion("Destination country = HKG", n.is_hkg)
        .criterion("Beneficiary bank = DBS HK (same bank)", n.is_same_bank)
        .criterion("POBO not enabled", !n.is_pobo)
        .reasons("Meets ACT same-bank transfer criteria", "Does not meet ACT criteria")
        .build()
}

pub fn rtgs(n: &NormalizedInputs) -> LogicStepResult {
    StepBuilder::any(RTGS_STEP)
        .criterion(
            "Normal: HKG + not DBS + [SWIFT with valid currency, or non-SWIFT with USD/EUR/CNH above 5,000,000]",
            rtgs_normal_path(n),
        )
        .criterion("Or POBO: enabled and eligible", n.is_pobo_eligible)
        .reasons("Meets RTGS routing criteria", "Does not meet RTGS criteria")
        .build()
}

/// Non-SWIFT payments only reach RTGS with currencies FPS did not claim
pub(crate) fn rtgs_normal_path(n: &NormalizedInputs) -> bool {
    let swift_branch = n.method.is_swift() && n.is_valid_currency;
    let local_branch = !n.method.is_swift() && n.rtgs_local_currency_band();

    n.is_hkg && !n.is_same_bank && (swift_branch || local_branch)
}

pub fn fallback() -> LogicStepResult {
    StepBuilder::all(FALLBACK_STEP)
        .criterion("Default fallback route", true)
        .reasons("No local rail matched, defaulting to TT", "")
        .build()
}

//! Single normalization pass over raw routing inputs
//!
//! Every rule step reads from the same [`NormalizedInputs`]; no step compares
//! raw strings itself.

use super::currency::Currency;
use super::inputs::{RoutingInputs, CNH_FPS_LIMIT, DBS_HK_SWIFT, HKG};
use super::method::PaymentMethod;
use serde::Serialize;

/// Canonical view of a [`RoutingInputs`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedInputs {
    pub method: PaymentMethod,
    pub currency: Currency,
    pub amount: f64,
    pub is_pobo: bool,

    /// Destination country equals HKG, ignoring case
    pub is_hkg: bool,

    /// Beneficiary SWIFT equals the DBS HK code, ignoring case
    pub is_same_bank: bool,

    /// Beneficiary SWIFT is non-blank after trimming
    pub has_swift: bool,

    pub is_valid_currency: bool,

    /// POBO requested and allowed: SWIFT present, HKG, valid currency
    pub is_pobo_eligible: bool,

    /// HKD, or CNH up to and including the FPS limit
    pub fps_currency_band: bool,
}

impl NormalizedInputs {
    pub fn from_inputs(inputs: &RoutingInputs) -> Self {
        let method = PaymentMethod::parse(&inputs.payment_method);
        let currency = Currency::parse(&inputs.currency);
        let amount = inputs.amount;

        let is_hkg = inputs.destination_country.eq_ignore_ascii_case(HKG);
        let is_same_bank = inputs.beneficiary_swift.eq_ignore_ascii_case(DBS_HK_SWIFT);
        let has_swift = !inputs.beneficiary_swift.trim().is_empty();
        let is_valid_currency = currency.is_valid();
        let is_pobo_eligible = inputs.is_pobo && has_swift && is_hkg && is_valid_currency;

        let fps_currency_band = match currency {
            Currency::Hkd => true,
            Currency::Cnh => amount <= CNH_FPS_LIMIT,
            _ => false,
        };

        Self {
            method,
            currency,
            amount,
            is_pobo: inputs.is_pobo,
            is_hkg,
            is_same_bank,
            has_swift,
            is_valid_currency,
            is_pobo_eligible,
            fps_currency_band,
        }
    }

    /// Currencies RTGS accepts for non-SWIFT payments: USD, EUR, or CNH above
    /// the FPS limit. HKD is absent because FPS already claims it; for any
    /// comparable amount this is exactly the valid currencies outside
    /// `fps_currency_band`.
    pub fn rtgs_local_currency_band(&self) -> bool {
        match self.currency {
            Currency::Usd | Currency::Eur => true,
            Currency::Cnh => self.amount > CNH_FPS_LIMIT,
            _ => false,
        }
    }
}

impl From<&RoutingInputs> for NormalizedInputs {
    fn from(inputs: &RoutingInputs) -> Self {
        Self::from_inputs(inputs)
    }
}

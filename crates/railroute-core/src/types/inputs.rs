//! Transaction attributes supplied by the caller

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// SWIFT code of DBS Hong Kong; a beneficiary with this code is a same-bank transfer
pub const DBS_HK_SWIFT: &str = "DHBKHKHHXXX";

/// Beneficiary SWIFT code pre-filled for a fresh form (HSBC Hong Kong)
pub const DEFAULT_BENEFICIARY_SWIFT: &str = "HSBCHKHHAXXX";

/// Destination country code for local Hong Kong rails
pub const HKG: &str = "HKG";

/// Largest CNH amount that may still settle over FPS (inclusive)
pub const CNH_FPS_LIMIT: f64 = 5_000_000.0;

/// Amount pre-filled for a fresh form
pub const DEFAULT_AMOUNT: f64 = 10_000.0;

/// Raw routing inputs, exactly as entered.
///
/// Text fields are kept verbatim so they survive a query-string round trip;
/// all interpretation happens in [`NormalizedInputs`](super::NormalizedInputs).
///
/// Deserialization never rejects a field's value: missing fields take the
/// defaults, null or non-text values become "", a textual amount goes
/// through [`parse_amount`], and `isPOBO` is true only for `true` or "true".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoutingInputs {
    #[serde(deserialize_with = "lenient_text")]
    pub payment_method: String,
    #[serde(deserialize_with = "lenient_text")]
    pub destination_country: String,
    #[serde(deserialize_with = "lenient_text")]
    pub currency: String,
    #[serde(deserialize_with = "lenient_text")]
    pub beneficiary_swift: String,
    #[serde(deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(rename = "isPOBO", deserialize_with = "lenient_flag")]
    pub is_pobo: bool,
}

impl RoutingInputs {
    /// Create inputs with every field set explicitly
    pub fn new(
        payment_method: impl Into<String>,
        destination_country: impl Into<String>,
        currency: impl Into<String>,
        beneficiary_swift: impl Into<String>,
        amount: f64,
        is_pobo: bool,
    ) -> Self {
        Self {
            payment_method: payment_method.into(),
            destination_country: destination_country.into(),
            currency: currency.into(),
            beneficiary_swift: beneficiary_swift.into(),
            amount,
            is_pobo,
        }
    }

    pub fn with_payment_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = method.into();
        self
    }

    pub fn with_destination_country(mut self, country: impl Into<String>) -> Self {
        self.destination_country = country.into();
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_beneficiary_swift(mut self, swift: impl Into<String>) -> Self {
        self.beneficiary_swift = swift.into();
        self
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_pobo(mut self, is_pobo: bool) -> Self {
        self.is_pobo = is_pobo;
        self
    }
}

impl Default for RoutingInputs {
    fn default() -> Self {
        Self {
            payment_method: String::new(),
            destination_country: HKG.to_string(),
            currency: "HKD".to_string(),
            beneficiary_swift: DEFAULT_BENEFICIARY_SWIFT.to_string(),
            amount: DEFAULT_AMOUNT,
            is_pobo: false,
        }
    }
}

/// Parse a free-text amount. Missing, blank, unparsable and NaN all become 0.
pub fn parse_amount(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if !value.is_nan() => value,
        _ => {
            log::debug!("Unparsable amount '{}', treating as 0", raw);
            0.0
        }
    }
}

/// Any JSON value, as far as a routing field cares
#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Flag(bool),
    Number(f64),
    Text(String),
    #[allow(dead_code)]
    Other(IgnoredAny),
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawField::deserialize(deserializer)? {
        RawField::Text(text) => text,
        _ => {
            log::debug!("Non-text routing field, treating as blank");
            String::new()
        }
    })
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawField::deserialize(deserializer)? {
        RawField::Number(value) if !value.is_nan() => value,
        RawField::Text(text) => parse_amount(Some(&text)),
        _ => {
            log::debug!("Non-numeric amount, treating as 0");
            0.0
        }
    })
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawField::deserialize(deserializer)? {
        RawField::Flag(flag) => flag,
        RawField::Text(text) => text == "true",
        _ => false,
    })
}

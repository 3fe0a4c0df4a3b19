//! Flat query-string persistence of routing inputs
//!
//! Inputs are stored as six string parameters so a routing scenario can be
//! bookmarked or shared as a link:
//!
//! `paymentMethod`, `destinationCountry`, `currency`, `beneficiarySwift`,
//! `amount`, `isPOBO`
//!
//! Decoding never fails. A query with no `currency` parameter at all is
//! treated as "no saved scenario" and yields the full default inputs.

use railroute_core::types::parse_amount;
use railroute_core::RoutingInputs;
use std::borrow::Cow;
use std::collections::HashMap;

pub const PAYMENT_METHOD: &str = "paymentMethod";
pub const DESTINATION_COUNTRY: &str = "destinationCountry";
pub const CURRENCY: &str = "currency";
pub const BENEFICIARY_SWIFT: &str = "beneficiarySwift";
pub const AMOUNT: &str = "amount";
pub const IS_POBO: &str = "isPOBO";

/// Serialize inputs as `key=value` pairs joined by `&`, without a leading `?`
pub fn to_query_string(inputs: &RoutingInputs) -> String {
    let pairs: [(&str, Cow<'_, str>); 6] = [
        (PAYMENT_METHOD, Cow::Borrowed(inputs.payment_method.as_str())),
        (DESTINATION_COUNTRY, Cow::Borrowed(inputs.destination_country.as_str())),
        (CURRENCY, Cow::Borrowed(inputs.currency.as_str())),
        (BENEFICIARY_SWIFT, Cow::Borrowed(inputs.beneficiary_swift.as_str())),
        (AMOUNT, Cow::Owned(inputs.amount.to_string())),
        (IS_POBO, Cow::Borrowed(if inputs.is_pobo { "true" } else { "false" })),
    ];

    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parse a query string (with or without the leading `?`) into inputs
pub fn from_query_string(query: &str) -> RoutingInputs {
    let params = parse_params(query);

    if !params.contains_key(CURRENCY) {
        tracing::debug!("No currency parameter in query, using default inputs");
        return RoutingInputs::default();
    }

    let text = |key: &str| params.get(key).cloned().unwrap_or_default();

    RoutingInputs {
        payment_method: text(PAYMENT_METHOD),
        destination_country: text(DESTINATION_COUNTRY),
        currency: text(CURRENCY),
        beneficiary_swift: text(BENEFICIARY_SWIFT),
        amount: parse_amount(params.get(AMOUNT).map(String::as_str)),
        is_pobo: params.get(IS_POBO).map(String::as_str) == Some("true"),
    }
}

/// Build a shareable link by attaching the encoded inputs to `base_url`
pub fn share_link(base_url: &str, inputs: &RoutingInputs) -> String {
    let query = to_query_string(inputs);

    if base_url.ends_with('?') || base_url.ends_with('&') {
        format!("{}{}", base_url, query)
    } else if base_url.contains('?') {
        format!("{}&{}", base_url, query)
    } else {
        format!("{}?{}", base_url, query)
    }
}

/// Split into decoded key/value pairs. The first occurrence of a key wins.
fn parse_params(query: &str) -> HashMap<String, String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params = HashMap::new();

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        params
            .entry(decode_component(key))
            .or_insert_with(|| decode_component(value));
    }

    params
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            tracing::warn!("Undecodable query component '{}': {}", raw, e);
            spaced
        }
    }
}

//! Payment method tag

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment method requested by the caller.
///
/// Parsed case-insensitively from free text. Only the empty string counts as
/// `Unspecified`; anything else that is neither LOCAL nor SWIFT (including
/// whitespace) is kept verbatim as `Other` and is out of routing scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
    Local,
    Swift,
    Unspecified,
    Other(String),
}

impl PaymentMethod {
    /// Canonical wire tag
    pub fn as_str(&self) -> &str {
        match self {
            PaymentMethod::Local => "LOCAL",
            PaymentMethod::Swift => "SWIFT",
            PaymentMethod::Unspecified => "",
            PaymentMethod::Other(raw) => raw,
        }
    }

    /// Normalize raw form text into a method tag
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            PaymentMethod::Unspecified
        } else if raw.eq_ignore_ascii_case("LOCAL") {
            PaymentMethod::Local
        } else if raw.eq_ignore_ascii_case("SWIFT") {
            PaymentMethod::Swift
        } else {
            PaymentMethod::Other(raw.to_string())
        }
    }

    /// Whether the method is one the routing rules accept (LOCAL, SWIFT or blank)
    pub fn is_in_scope(&self) -> bool {
        !matches!(self, PaymentMethod::Other(_))
    }

    pub fn is_swift(&self) -> bool {
        matches!(self, PaymentMethod::Swift)
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Unspecified
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for PaymentMethod {
    fn from(raw: String) -> Self {
        PaymentMethod::parse(&raw)
    }
}

impl From<PaymentMethod> for String {
    fn from(method: PaymentMethod) -> Self {
        method.as_str().to_string()
    }
}

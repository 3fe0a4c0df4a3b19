//! Currency tag

use serde::{Deserialize, Serialize};
use std::fmt;

/// Settlement currency.
///
/// Unlike method, country and SWIFT code, currency is matched exactly:
/// `"hkd"` is `Other("hkd")`, not `Hkd`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    Hkd,
    Cnh,
    Usd,
    Eur,
    Other(String),
}

impl Currency {
    pub fn as_str(&self) -> &str {
        match self {
            Currency::Hkd => "HKD",
            Currency::Cnh => "CNH",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Other(raw) => raw,
        }
    }

    /// Exact tag match; no case folding or trimming
    pub fn parse(raw: &str) -> Self {
        match raw {
            "HKD" => Currency::Hkd,
            "CNH" => Currency::Cnh,
            "USD" => Currency::Usd,
            "EUR" => Currency::Eur,
            other => Currency::Other(other.to_string()),
        }
    }

    /// One of HKD, CNH, USD, EUR
    pub fn is_valid(&self) -> bool {
        !matches!(self, Currency::Other(_))
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Hkd
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Currency {
    fn from(raw: String) -> Self {
        Currency::parse(&raw)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.as_str().to_string()
    }
}

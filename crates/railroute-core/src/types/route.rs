//! Settlement rails

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Settlement rail chosen for a payment instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteType {
    /// Faster Payment System
    #[serde(rename = "FPS")]
    Fps,

    /// Same-bank account transfer
    #[serde(rename = "ACT")]
    Act,

    /// Real-time gross settlement (CHATS)
    #[serde(rename = "RTGS")]
    Rtgs,

    /// Telegraphic transfer over SWIFT, also the universal fallback
    #[serde(rename = "TT")]
    Tt,
}

/// Human-facing description of a rail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteProfile {
    pub title: &'static str,
    pub description: &'static str,
}

impl RouteType {
    /// All rails in evaluation priority order
    pub const PRIORITY: [RouteType; 4] =
        [RouteType::Fps, RouteType::Act, RouteType::Rtgs, RouteType::Tt];

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteType::Fps => "FPS",
            RouteType::Act => "ACT",
            RouteType::Rtgs => "RTGS",
            RouteType::Tt => "TT",
        }
    }

    /// Zero-based position in the priority order
    pub fn priority(&self) -> usize {
        match self {
            RouteType::Fps => 0,
            RouteType::Act => 1,
            RouteType::Rtgs => 2,
            RouteType::Tt => 3,
        }
    }

    pub fn profile(&self) -> RouteProfile {
        match self {
            RouteType::Fps => RouteProfile {
                title: "FPS (Faster Payment System)",
                description: "24x7 real-time settlement for local HKD/CNH small-value payments",
            },
            RouteType::Act => RouteProfile {
                title: "ACT (Account Transfer)",
                description: "Internal book transfer within DBS, real-time, no fee",
            },
            RouteType::Rtgs => RouteProfile {
                title: "RTGS (CHATS)",
                description: "Local real-time gross settlement through the clearing house",
            },
            RouteType::Tt => RouteProfile {
                title: "TT (Telegraphic Transfer / SWIFT)",
                description: "Standard cross-border or cross-bank remittance, longer processing time",
            },
        }
    }

    /// Parse a displayed route, falling back to TT for anything unrecognized
    pub fn from_display_lossy(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|_| {
            log::warn!("Unrecognized route '{}', displaying as TT", raw);
            RouteType::Tt
        })
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FPS" => Ok(RouteType::Fps),
            "ACT" => Ok(RouteType::Act),
            "RTGS" => Ok(RouteType::Rtgs),
            "TT" => Ok(RouteType::Tt),
            other => Err(CoreError::UnknownRoute(other.to_string())),
        }
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Selectable time window for a price series.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Horizon {
    #[serde(rename = "1D")]
    Short,
    #[default]
    #[serde(rename = "1M")]
    Medium,
    #[serde(rename = "1Y")]
    Long,
}

impl Horizon {
    /// Every horizon the desk can select, in button order.
    pub const ALL: [Horizon; 3] = [Horizon::Short, Horizon::Medium, Horizon::Long];

    pub fn label(self) -> &'static str {
        match self {
            Horizon::Short => "1D",
            Horizon::Medium => "1M",
            Horizon::Long => "1Y",
        }
    }

    /// Parse a button label. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "1D" => Some(Horizon::Short),
            "1M" => Some(Horizon::Medium),
            "1Y" => Some(Horizon::Long),
            _ => None,
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Horizon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Horizon::from_label(s).ok_or_else(|| format!("unknown horizon '{s}' (expected 1D, 1M or 1Y)"))
    }
}

//! Kinds of sample messages a generator can produce

use serde::{Deserialize, Serialize};

/// Sample message variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// All mandatory tags present, well-formed amount
    #[default]
    Valid,
    /// Missing `:23B:` and `:71A:`
    Invalid,
    /// Well-formed, but a customer resides in a sanctioned jurisdiction
    Sanctioned,
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid => write!(f, "valid"),
            Self::Invalid => write!(f, "invalid"),
            Self::Sanctioned => write!(f, "sanctioned"),
        }
    }
}

impl std::str::FromStr for MessageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "valid" => Ok(Self::Valid),
            "invalid" => Ok(Self::Invalid),
            "sanctioned" => Ok(Self::Sanctioned),
            _ => Err(format!("Unknown message kind: {s}. Use: valid, invalid, sanctioned")),
        }
    }
}

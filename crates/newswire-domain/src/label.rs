//! Target labels for training records

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Sentinel emitted when no label exists yet for a record's target date
pub const PENDING_SENTINEL: &str = "pending";

/// Forward-looking price-change label attached to a record
///
/// Serializes as a bare integer, or the string `"pending"` when the target
/// date has no entry in the label index (matching the dataset wire format
/// consumed downstream).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Truncated percentage price change for the target date
    Pct(i32),
    /// No label exists yet for the target date
    Pending,
}

impl Label {
    /// Get the percentage value, if resolved
    pub fn as_pct(&self) -> Option<i32> {
        match self {
            Label::Pct(v) => Some(*v),
            Label::Pending => None,
        }
    }

    /// Whether this label is still pending
    pub fn is_pending(&self) -> bool {
        matches!(self, Label::Pending)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Pct(v) => write!(f, "{}", v),
            Label::Pending => f.write_str(PENDING_SENTINEL),
        }
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Label::Pct(v) => serializer.serialize_i32(*v),
            Label::Pending => serializer.serialize_str(PENDING_SENTINEL),
        }
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Int(v) => Ok(Label::Pct(v)),
            Raw::Text(s) if s == PENDING_SENTINEL => Ok(Label::Pending),
            Raw::Text(other) => Err(D::Error::custom(format!(
                "expected an integer or \"{}\", got \"{}\"",
                PENDING_SENTINEL, other
            ))),
        }
    }
}

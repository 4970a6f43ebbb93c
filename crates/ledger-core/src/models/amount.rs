//! Monetary amounts.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A decimal amount kept exactly as the server sent it.
///
/// The API serializes decimals as strings (`"1250.00"`) but some aggregates
/// arrive as JSON numbers; both forms are accepted. Arithmetic stays on the
/// server, `value()` exists for display only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Amount(String);

impl Amount {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The amount as received.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Best-effort numeric value; unparseable amounts read as zero.
    pub fn value(&self) -> f64 {
        self.0.trim().parse().unwrap_or(0.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Amount {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<f64> for Amount {
    fn from(v: f64) -> Self {
        Self(format!("{:.2}", v))
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Amount(s),
            Raw::Number(n) => Amount(n.to_string()),
        })
    }
}

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// A monetary value as it arrived from the caller.
///
/// Amounts are lenient: numbers and numeric strings become [`Amount::Number`],
/// anything else is kept verbatim as [`Amount::Text`] so that a bad field
/// degrades the printed line instead of aborting the job.
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    pub const ZERO: Amount = Amount::Number(0.0);

    /// Classifies an arbitrary JSON value.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Amount::ZERO,
            Value::Number(n) => n
                .as_f64()
                .map(Amount::Number)
                .unwrap_or_else(|| Amount::Text(n.to_string())),
            Value::String(s) => Amount::from(s.as_str()),
            other => Amount::Text(other.to_string()),
        }
    }

    /// The numeric value, if there is one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Amount::Number(v) => Some(*v),
            Amount::Text(_) => None,
        }
    }

    /// Conditional lines only fire for strictly positive numbers.
    pub fn is_positive(&self) -> bool {
        self.as_f64().is_some_and(|v| v > 0.0)
    }

    /// Numeric value for aggregation; literal text counts as zero.
    pub fn value_or_zero(&self) -> f64 {
        self.as_f64().unwrap_or(0.0)
    }

    /// Sums a sequence of amounts, skipping literal text.
    pub fn sum<'a>(amounts: impl IntoIterator<Item = &'a Amount>) -> Amount {
        Amount::Number(amounts.into_iter().map(Amount::value_or_zero).sum())
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::ZERO
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Number(value)
    }
}

/// Only finite decimals count as numbers; `"inf"`, `"NaN"` and the like are
/// kept as text.
impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        match value.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Amount::Number(v),
            _ => Amount::Text(value.to_string()),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::number::format_number(self))
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Amount::from_value(&value))
    }
}

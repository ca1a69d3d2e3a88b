use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::Notice;

/// Response body of `/api/search`.
///
/// The server does not guarantee a schema, so nothing beyond "is JSON" is
/// enforced. `count` is kept as sent (see [`SearchResult::total`] for a
/// numeric reading), a missing or `null` `items` reads as no notices, and any
/// other top-level keys are preserved in `extra`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SearchResult {
    /// Number of matching notices as reported by the server, `Null` if absent.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub count: Value,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Notice>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Notice>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Notice>>::deserialize(deserializer)?.unwrap_or_default())
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `count` as a non-negative integer, accepting integral floats (`2.0`)
    /// and numeric strings (`"2"`). `None` when absent or not a count.
    pub fn total(&self) -> Option<u64> {
        match &self.count {
            Value::Number(n) => n.as_u64().or_else(|| {
                n.as_f64()
                    .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                    .map(|f| f as u64)
            }),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

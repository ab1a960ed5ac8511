//! Content signals: machine-readable opt-in/opt-out flags for automated content use.

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

use crate::directive::Directive;

/// Signal name (`search`, `ai_input`, `ai_train`, ...) to value, in configured order.
pub type ContentSignals = IndexMap<String, SignalValue>;

/// The value of one content signal.
///
/// `Unset` means the operator expresses nothing for that use, so it never reaches the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SignalValue {
    #[default]
    Unset,
    Yes,
    No,
    Custom(String),
}

impl SignalValue {
    /// The text written after `name=`, or `None` when the signal is unset.
    pub fn rendered(&self) -> Option<&str> {
        match self {
            SignalValue::Unset => None,
            SignalValue::Yes => Some("yes"),
            SignalValue::No => Some("no"),
            SignalValue::Custom(value) => Some(value),
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, SignalValue::Unset)
    }
}

impl From<bool> for SignalValue {
    fn from(value: bool) -> Self {
        if value { SignalValue::Yes } else { SignalValue::No }
    }
}

impl From<Option<bool>> for SignalValue {
    fn from(value: Option<bool>) -> Self {
        value.map(SignalValue::from).unwrap_or_default()
    }
}

impl From<&str> for SignalValue {
    fn from(value: &str) -> Self {
        SignalValue::Custom(value.to_string())
    }
}

impl From<String> for SignalValue {
    fn from(value: String) -> Self {
        SignalValue::Custom(value)
    }
}

/// Converts a signal key to its on-the-wire name (`ai_input` -> `ai-input`).
pub fn signal_name(key: &str) -> String {
    key.replace('_', "-")
}

/// Builds the `Content-Signal: k1=v1, k2=v2` line from the set entries of `signals`.
///
/// Returns `None` when every entry is unset (or there are no entries at all).
pub fn content_signal_directive(signals: &ContentSignals) -> Option<String> {
    let rendered: Vec<String> = signals
        .iter()
        .filter_map(|(key, value)| value.rendered().map(|v| format!("{}={}", signal_name(key), v)))
        .collect();

    if rendered.is_empty() {
        None
    } else {
        Some(Directive::ContentSignal.format(&rendered.join(", ")))
    }
}

impl<'de> Deserialize<'de> for SignalValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SignalValueVisitor)
    }
}

struct SignalValueVisitor;

impl<'de> Visitor<'de> for SignalValueVisitor {
    type Value = SignalValue;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "a boolean, string, number or null")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(v.into())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(SignalValue::Custom(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(SignalValue::Custom(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(SignalValue::Custom(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(v.into())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(v.into())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(SignalValue::Unset)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(SignalValue::Unset)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        SignalValue::deserialize(deserializer)
    }

    // Lists and tables have no meaning as a signal value: skip them.
    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        tracing::warn!("Ignoring list given as a content signal value");
        Ok(SignalValue::Unset)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        tracing::warn!("Ignoring table given as a content signal value");
        Ok(SignalValue::Unset)
    }
}

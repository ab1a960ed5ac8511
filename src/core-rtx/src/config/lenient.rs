//! Best-effort deserialization of config values.
//!
//! A robots.txt is low stakes, so a malformed entry is dropped with a warning
//! rather than failing the whole config. Everything here deserializes from any
//! self-describing format (TOML, JSON).

use indexmap::IndexMap;
use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::signals::ContentSignals;

/// Either a value of the expected shape, or anything else.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Lenient<T> {
    Valid(T),
    Malformed(IgnoredAny),
}

impl<T: Default> Default for Lenient<T> {
    fn default() -> Self {
        Lenient::Valid(T::default())
    }
}

impl<T> Lenient<T> {
    /// The well-formed value, if any. Warns about `what` when it was malformed.
    pub(crate) fn valid(self, what: &str) -> Option<T> {
        match self {
            Lenient::Valid(value) => Some(value),
            Lenient::Malformed(_) => {
                tracing::warn!("Ignoring malformed config entry: {}", what);
                None
            }
        }
    }
}

impl<T: Default> Lenient<T> {
    pub(crate) fn valid_or_default(self, what: &str) -> T {
        self.valid(what).unwrap_or_default()
    }
}

impl<T> Lenient<Option<T>> {
    pub(crate) fn flatten(self, what: &str) -> Option<T> {
        self.valid(what).flatten()
    }
}

/// A list of strings where the list itself, or any item in it, may be malformed.
pub(crate) type StringList = Lenient<Vec<Lenient<String>>>;

/// Keeps only the string items of a list, in order.
pub(crate) fn strings(list: StringList, what: &str) -> Vec<String> {
    list.valid_or_default(what)
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| item.valid(&format!("{}[{}]", what, index)))
        .collect()
}

pub(crate) type SignalTable = Lenient<Option<ContentSignals>>;

/// Per-agent block as written in the config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawAgentRules {
    pub disallow: StringList,
    pub allow: StringList,
    pub content_signals: SignalTable,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawPolicy {
    pub enabled: Lenient<bool>,
    pub custom_policy: Lenient<Option<String>>,
}

/// One environment as written in the config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawRobotsConfig {
    pub sitemaps: StringList,
    pub host: Lenient<Option<String>>,
    pub content_signals_policy: Lenient<RawPolicy>,
    pub content_signals: SignalTable,
    pub paths: Lenient<IndexMap<String, Lenient<RawAgentRules>>>,
    pub custom_text: Lenient<Option<String>>,
}

/// A whole config file as written, where any environment may be malformed.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawConfigFile {
    pub app_url: Lenient<Option<String>>,
    pub environments: Lenient<IndexMap<String, Lenient<RawRobotsConfig>>>,
}

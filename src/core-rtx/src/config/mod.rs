//! Per-environment robots.txt configuration.
//!
//! A config file holds one [`RobotsConfig`] per environment name:
//!
//! ```toml
//! app_url = "https://example.com"
//!
//! [environments.production]
//! sitemaps = ["sitemap.xml"]
//! host = "https://example.com"
//!
//! [environments.production.content_signals_policy]
//! enabled = true
//!
//! [environments.production.content_signals]
//! search = true
//! ai_train = false
//!
//! [environments.production.paths."*"]
//! disallow = ["/admin"]
//! allow = ["/"]
//! ```
//!
//! TOML has no null, so an unset signal is written by leaving its key out.
//! JSON configs may use `null` for the same thing.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::errors::{Result, RobotsError};
use crate::signals::{ContentSignals, SignalValue};

mod lenient;

use lenient::{RawAgentRules, RawConfigFile, RawPolicy, RawRobotsConfig, strings};

/// Whether (and which) human-readable content signals policy to print.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentSignalsPolicy {
    pub enabled: bool,
    /// Plain text policy. `None` means the default Content Signals Policy.
    pub custom_policy: Option<String>,
}

impl ContentSignalsPolicy {
    /// The default policy, enabled.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            custom_policy: None,
        }
    }

    /// A custom policy, enabled.
    pub fn custom(policy: impl Into<String>) -> Self {
        Self {
            enabled: true,
            custom_policy: Some(policy.into()),
        }
    }
}

/// Rules for a single user-agent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentRules {
    pub disallow: Vec<String>,
    pub allow: Vec<String>,
    /// Replaces (never merges with) the global signals for this agent.
    pub content_signals: Option<ContentSignals>,
}

impl AgentRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a path to disallow.
    pub fn disallow(mut self, path: impl Into<String>) -> Self {
        self.disallow.push(path.into());
        self
    }

    /// Adds a path to allow.
    pub fn allow(mut self, path: impl Into<String>) -> Self {
        self.allow.push(path.into());
        self
    }

    /// Sets one of this agent's own content signals.
    pub fn content_signal(mut self, name: impl Into<String>, value: impl Into<SignalValue>) -> Self {
        self.content_signals
            .get_or_insert_with(ContentSignals::new)
            .insert(name.into(), value.into());
        self
    }
}

/// Everything needed to assemble the robots.txt for one environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawRobotsConfig")]
pub struct RobotsConfig {
    /// Relative or absolute sitemap references.
    pub sitemaps: Vec<String>,
    pub host: Option<String>,
    pub content_signals_policy: ContentSignalsPolicy,
    /// Global signals, printed once above the user-agent blocks.
    pub content_signals: Option<ContentSignals>,
    /// User-agent name to rules. Output follows this order.
    pub paths: IndexMap<String, AgentRules>,
    pub custom_text: Option<String>,
}

impl RobotsConfig {
    /// Creates a new builder for RobotsConfig.
    pub fn builder() -> RobotsConfigBuilder {
        RobotsConfigBuilder::default()
    }
}

impl From<RawRobotsConfig> for RobotsConfig {
    fn from(raw: RawRobotsConfig) -> Self {
        let content_signals_policy = raw
            .content_signals_policy
            .valid("content_signals_policy")
            .map(|RawPolicy { enabled, custom_policy }| ContentSignalsPolicy {
                enabled: enabled.valid_or_default("content_signals_policy.enabled"),
                custom_policy: custom_policy.flatten("content_signals_policy.custom_policy"),
            })
            .unwrap_or_default();

        let paths = raw
            .paths
            .valid_or_default("paths")
            .into_iter()
            .map(|(agent, rules)| {
                let rules = rules
                    .valid(&format!("paths.{}", agent))
                    .map(|RawAgentRules { disallow, allow, content_signals }| AgentRules {
                        disallow: strings(disallow, &format!("paths.{}.disallow", agent)),
                        allow: strings(allow, &format!("paths.{}.allow", agent)),
                        content_signals: content_signals.flatten(&format!("paths.{}.content_signals", agent)),
                    })
                    .unwrap_or_default();
                (agent, rules)
            })
            .collect();

        Self {
            sitemaps: strings(raw.sitemaps, "sitemaps"),
            host: raw.host.flatten("host"),
            content_signals_policy,
            content_signals: raw.content_signals.flatten("content_signals"),
            paths,
            custom_text: raw.custom_text.flatten("custom_text"),
        }
    }
}

/// Builder for RobotsConfig.
#[derive(Debug, Clone, Default)]
pub struct RobotsConfigBuilder {
    config: RobotsConfig,
}

impl RobotsConfigBuilder {
    /// Adds a sitemap reference.
    pub fn sitemap(mut self, sitemap: impl Into<String>) -> Self {
        self.config.sitemaps.push(sitemap.into());
        self
    }

    /// Sets the preferred host.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = Some(host.into());
        self
    }

    /// Sets the human-readable policy block.
    pub fn policy(mut self, policy: ContentSignalsPolicy) -> Self {
        self.config.content_signals_policy = policy;
        self
    }

    /// Sets one global content signal.
    pub fn content_signal(mut self, name: impl Into<String>, value: impl Into<SignalValue>) -> Self {
        self.config
            .content_signals
            .get_or_insert_with(ContentSignals::new)
            .insert(name.into(), value.into());
        self
    }

    /// Adds (or replaces) the rules for a user-agent, keeping its first position.
    pub fn agent(mut self, name: impl Into<String>, rules: AgentRules) -> Self {
        self.config.paths.insert(name.into(), rules);
        self
    }

    /// Sets the text appended verbatim at the end.
    pub fn custom_text(mut self, text: impl Into<String>) -> Self {
        self.config.custom_text = Some(text.into());
        self
    }

    /// Builds the RobotsConfig.
    pub fn build(self) -> RobotsConfig {
        self.config
    }
}

/// A whole config file: every environment, plus the base URL for sitemaps.
/// An environment that is not a table is dropped with a warning.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawConfigFile")]
pub struct RobotsConfigFile {
    /// Base URL that relative sitemap paths are resolved against.
    pub app_url: Option<String>,
    pub environments: IndexMap<String, RobotsConfig>,
}

impl From<RawConfigFile> for RobotsConfigFile {
    fn from(raw: RawConfigFile) -> Self {
        let environments = raw
            .environments
            .valid_or_default("environments")
            .into_iter()
            .filter_map(|(name, env)| {
                let config = env.valid(&format!("environments.{}", name))?;
                Some((name, RobotsConfig::from(config)))
            })
            .collect();

        Self {
            app_url: raw.app_url.flatten("app_url"),
            environments,
        }
    }
}

impl RobotsConfigFile {
    /// Loads a `.toml` or `.json` config file, picking the format by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
        let format_ok = matches!(extension.as_deref(), Some("toml") | Some("json"));
        if !format_ok {
            return Err(RobotsError::UnsupportedConfigFormat(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| RobotsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Loading robots.txt config from {}", path.display());
        match extension.as_deref() {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_toml_str(&content),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// The config for an environment. An unknown environment gets the defaults,
    /// which disallow everything.
    pub fn environment(&self, name: &str) -> RobotsConfig {
        match self.environments.get(name) {
            Some(config) => config.clone(),
            None => {
                tracing::warn!(
                    "No robots.txt config for environment '{}', falling back to defaults",
                    name
                );
                RobotsConfig::default()
            }
        }
    }
}

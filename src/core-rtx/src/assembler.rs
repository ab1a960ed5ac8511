//! Assembles the lines of a robots.txt file from a [`RobotsConfig`].
//!
//! Sections are written in a fixed order:
//!
//! 1. `Sitemap:` lines
//! 2. `Host:` line
//! 3. content signals policy comment block
//! 4. global `Content-Signal:` line
//! 5. user-agent blocks (or the disallow-all default)
//! 6. custom text
//!
//! Each section that produces output is separated from the previous one by a single
//! blank line. Sections with nothing to say add no blank line.

use crate::config::{AgentRules, RobotsConfig};
use crate::directive::Directive;
use crate::policy::policy_lines;
use crate::signals::content_signal_directive;
use crate::url_resolver::UrlResolver;

/// Builds the robots.txt lines for `config`. Pure: same input, same output.
pub fn build<R>(config: &RobotsConfig, resolver: &R) -> Vec<String>
where
    R: UrlResolver + ?Sized,
{
    let sections = [
        sitemap_lines(config, resolver),
        host_lines(config),
        policy_section(config),
        global_signal_lines(config),
        agent_blocks(config),
        custom_text_lines(config),
    ];

    let mut output: Vec<String> = Vec::new();
    for section in sections.into_iter().filter(|s| !s.is_empty()) {
        if !output.is_empty() {
            output.push(String::new());
        }
        output.extend(section);
    }
    output
}

/// The full robots.txt body: [`build`] joined with `\n`.
pub fn render<R>(config: &RobotsConfig, resolver: &R) -> String
where
    R: UrlResolver + ?Sized,
{
    build(config, resolver).join("\n")
}

/// The assembled lines of a robots.txt file. Displays as the file body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsTxt(Vec<String>);

impl RobotsTxt {
    pub fn new<R>(config: &RobotsConfig, resolver: &R) -> Self
    where
        R: UrlResolver + ?Sized,
    {
        RobotsTxt(build(config, resolver))
    }

    pub fn lines(&self) -> &[String] {
        &self.0
    }

    /// Destroys the wrapper, obtaining the lines directly.
    pub fn extract(self) -> Vec<String> {
        self.0
    }
}

impl std::fmt::Display for RobotsTxt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("\n"))
    }
}

fn sitemap_lines<R>(config: &RobotsConfig, resolver: &R) -> Vec<String>
where
    R: UrlResolver + ?Sized,
{
    config
        .sitemaps
        .iter()
        .map(|sitemap| Directive::Sitemap.format(&resolver.resolve(sitemap)))
        .collect()
}

fn host_lines(config: &RobotsConfig) -> Vec<String> {
    config
        .host
        .iter()
        .map(|host| Directive::Host.format(host))
        .collect()
}

// Printed once, whether signals are global, per-agent or both.
fn policy_section(config: &RobotsConfig) -> Vec<String> {
    if config.content_signals_policy.enabled {
        policy_lines(&config.content_signals_policy)
    } else {
        Vec::new()
    }
}

fn global_signal_lines(config: &RobotsConfig) -> Vec<String> {
    config
        .content_signals
        .as_ref()
        .and_then(content_signal_directive)
        .into_iter()
        .collect()
}

fn agent_blocks(config: &RobotsConfig) -> Vec<String> {
    if config.paths.is_empty() {
        return default_robot();
    }

    let mut entries = Vec::new();
    for (index, (agent, rules)) in config.paths.iter().enumerate() {
        if index > 0 {
            entries.push(String::new());
        }
        entries.extend(agent_block(agent, rules));
    }
    entries
}

fn agent_block(agent: &str, rules: &AgentRules) -> Vec<String> {
    let mut block = vec![Directive::UserAgent.format(agent)];

    // Only the agent's own signals: global ones are never merged in.
    if let Some(signal) = rules.content_signals.as_ref().and_then(content_signal_directive) {
        block.push(signal);
    }

    block.extend(rules.disallow.iter().map(|path| Directive::Disallow.format(path)));
    block.extend(rules.allow.iter().map(|path| Directive::Allow.format(path)));
    block
}

/// Disallows everything for every robot.
fn default_robot() -> Vec<String> {
    vec![Directive::UserAgent.format("*"), Directive::Disallow.format("/")]
}

fn custom_text_lines(config: &RobotsConfig) -> Vec<String> {
    config
        .custom_text
        .as_deref()
        .map(|text| text.split('\n').map(str::to_string).collect())
        .unwrap_or_default()
}

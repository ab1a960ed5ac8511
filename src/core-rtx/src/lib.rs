//! # robots.txt Generation Library
//!
//! Assembles a `robots.txt` file from declarative, per-environment configuration:
//! sitemaps, an optional host, an optional content signals policy and directives,
//! per-user-agent `Allow`/`Disallow` rules, and free-form trailing text.
//!
//! ## Example
//!
//! ```
//! use core_rtx::{AgentRules, BaseUrlResolver, RobotsConfig, render};
//!
//! let config = RobotsConfig::builder()
//!     .sitemap("sitemap.xml")
//!     .agent("*", AgentRules::new().disallow("/admin").allow("/"))
//!     .build();
//! let resolver = BaseUrlResolver::new("https://example.com").unwrap();
//!
//! assert_eq!(
//!     render(&config, &resolver),
//!     "Sitemap: https://example.com/sitemap.xml\n\nUser-agent: *\nDisallow: /admin\nAllow: /"
//! );
//! ```

pub mod assembler;
pub mod common;
pub mod config;
pub mod directive;
mod errors;
pub mod policy;
pub mod signals;
pub mod url_resolver;

pub use assembler::{RobotsTxt, build, render};
pub use common::env::{get_app_env, get_app_url, get_config_path};
pub use common::health::{health_check, health_router};
pub use common::hostname::{BindAddressError, get_bind_address};
pub use common::logging::setup_logging;
pub use config::{AgentRules, ContentSignalsPolicy, RobotsConfig, RobotsConfigBuilder, RobotsConfigFile};
pub use directive::Directive;
pub use errors::{Result, RobotsError};
pub use signals::{ContentSignals, SignalValue};
pub use url_resolver::{BaseUrlResolver, UrlResolver};

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use core_rtx::{BaseUrlResolver, RobotsConfigFile, get_app_env, get_app_url, render, setup_logging};

#[derive(Parser)]
#[command(name = "core-robotstxt")]
#[command(about = "The Core robots.txt Toolkit", long_about = None)]
struct CoreCli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the robots.txt for one environment
    Render {
        /// The .toml or .json config file.
        #[arg(short, long, value_parser = validate_input_file)]
        config: PathBuf,
        /// Environment to render. Defaults to APP_ENV, then "production".
        #[arg(short, long)]
        env: Option<String>,
        /// Base URL for relative sitemap paths. Defaults to APP_URL, then the config's app_url.
        #[arg(short, long)]
        base_url: Option<String>,
        /// Write to this file instead of stdout.
        #[arg(short, long, value_parser = validate_output_file)]
        output: Option<PathBuf>,
    },

    /// Load every environment of a config file, reporting dropped entries.
    Check {
        /// The .toml or .json config file.
        #[arg(short, long, value_parser = validate_input_file)]
        config: PathBuf,
    },
}

fn validate_input_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if !path.exists() {
        return Err(format!("Config path does not exist: {}", path.display()));
    }

    if !path.is_file() {
        return Err(format!("Config path is not a file: {}", path.display()));
    }

    Ok(path)
}

fn validate_output_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if path.is_dir() {
        return Err(format!("Output path is a directory: {}", path.display()));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        return Err(format!(
            "Output file parent directory does not exist: {}",
            parent.display()
        ));
    }

    Ok(path)
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if it exists
    dotenvy::dotenv().ok();

    setup_logging("core_rtx=info");

    let cli = CoreCli::parse();

    match cli.command {
        Commands::Render {
            config,
            env,
            base_url,
            output,
        } => {
            let file = load(&config)?;
            let env = env.unwrap_or_else(get_app_env);
            let resolver = resolver_for(base_url.or_else(get_app_url).or(file.app_url.clone()))?;

            let robots_txt = render(&file.environment(&env), &resolver);
            match output {
                Some(path) => {
                    std::fs::write(&path, format!("{}\n", robots_txt))
                        .with_context(|| format!("Cannot write robots.txt to {}", path.display()))?;
                    tracing::info!("Wrote robots.txt for '{}' to {}", env, path.display());
                }
                None => println!("{}", robots_txt),
            }
        }

        Commands::Check { config } => {
            let file = load(&config)?;
            let resolver = resolver_for(get_app_url().or(file.app_url.clone()))?;

            if file.environments.is_empty() {
                println!("No environments defined in {}", config.display());
            }
            for (name, environment) in &file.environments {
                let lines = core_rtx::build(environment, &resolver);
                println!("{}: {} lines", name, lines.len());
            }
        }
    }

    Ok(())
}

fn load(path: &Path) -> anyhow::Result<RobotsConfigFile> {
    RobotsConfigFile::load(path).with_context(|| format!("Failed to load config {}", path.display()))
}

fn resolver_for(base_url: Option<String>) -> anyhow::Result<BaseUrlResolver> {
    match base_url {
        Some(url) => BaseUrlResolver::new(&url).with_context(|| format!("Bad base URL '{}'", url)),
        None => {
            tracing::warn!("No base URL configured, resolving sitemaps against http://localhost");
            Ok(BaseUrlResolver::default())
        }
    }
}

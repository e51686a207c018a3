//! Command-line frontend for rentcar.
//!
//! Acts as the presentation layer: feeds the query into a search session and
//! prints the resulting listing.

pub mod render;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::core::{SearchEngine, SearchSession};
use crate::services::{branches, Catalog, Listing};

#[derive(Parser)]
#[command(name = "rentcar")]
#[command(about = "Browse and search the rental vehicle catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ~/.config/rentcar/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Catalog file (TOML or JSON), overrides the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show categories and vehicles matching a query
    Search {
        /// Matched against category names, vehicle brands and models
        query: String,
    },

    /// Show the full listing
    List,

    /// Check whether a field would be highlighted for a query
    Highlight { field: String, query: String },

    /// Print the loaded catalog as JSON
    Catalog,

    /// List rental branches with stock and contact links
    Branches {
        /// Print the branches as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    Config {
        /// Also write it to the config file
        #[arg(long)]
        write: bool,
    },
}

fn init_tracing(level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("rentcar={}", level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_catalog(path: Option<&Path>, config: &Config) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display())),
        None => config
            .load_catalog()
            .context("Failed to load configured catalog"),
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Config is read before logging is set up, so a load failure is reported
    // once the subscriber exists.
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let loaded = if config_path.exists() {
        Config::load_from(&config_path).map(Some)
    } else {
        Ok(None)
    };
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => Config::default(),
    };

    init_tracing(&config.general.log_level);
    if let Err(e) = &loaded {
        tracing::warn!("Failed to load config {}: {}", config_path.display(), e);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Search { query } => {
            let catalog = load_catalog(cli.catalog.as_deref(), &config)?;
            let mut session = SearchSession::new(&catalog);
            session.open_search();
            session.change(&query);
            session.submit();

            let listing = Listing::build(&session, &config.display);
            render::write_listing(&mut out, &listing)?;
        }
        Commands::List => {
            let catalog = load_catalog(cli.catalog.as_deref(), &config)?;
            let session = SearchSession::new(&catalog);

            let listing = Listing::build(&session, &config.display);
            render::write_listing(&mut out, &listing)?;
        }
        Commands::Highlight { field, query } => {
            writeln!(out, "{}", SearchEngine::is_highlighted(&field, &query))?;
        }
        Commands::Catalog => {
            let catalog = load_catalog(cli.catalog.as_deref(), &config)?;
            serde_json::to_writer_pretty(&mut out, &catalog)?;
            writeln!(out)?;
        }
        Commands::Branches { json } => {
            let branches = branches::sample();
            if json {
                serde_json::to_writer_pretty(&mut out, branches)?;
                writeln!(out)?;
            } else {
                render::write_branches(&mut out, branches)?;
            }
        }
        Commands::Config { write } => {
            if write {
                config
                    .save_to(&config_path)
                    .with_context(|| format!("Failed to write {}", config_path.display()))?;
                tracing::info!("Wrote config to {}", config_path.display());
            }
            write!(out, "{}", toml::to_string_pretty(&config)?)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search_with_catalog() {
        let cli = Cli::try_parse_from(["rentcar", "search", "toyota", "--catalog", "cars.json"])
            .unwrap();
        assert_eq!(cli.catalog.as_deref(), Some(Path::new("cars.json")));
        assert!(matches!(cli.command, Commands::Search { query } if query == "toyota"));
    }

    #[test]
    fn test_parse_highlight() {
        let cli = Cli::try_parse_from(["rentcar", "highlight", "Hyundai", "hyun"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Highlight { field, query } if field == "Hyundai" && query == "hyun"
        ));
    }

    #[test]
    fn test_parse_branches() {
        let cli = Cli::try_parse_from(["rentcar", "branches"]).unwrap();
        assert!(matches!(cli.command, Commands::Branches { json: false }));

        let cli = Cli::try_parse_from(["rentcar", "branches", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Branches { json: true }));
    }

    #[test]
    fn test_catalog_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cars.json");
        std::fs::write(&path, r#"{"vehicles": [{"id": 9, "brand": "Kia", "model": "Rio", "price": 150}]}"#)
            .unwrap();

        let catalog = load_catalog(Some(path.as_path()), &Config::default()).unwrap();
        assert_eq!(catalog.vehicles.len(), 1);
        assert_eq!(catalog.vehicles[0].brand, "Kia");

        let fallback = load_catalog(None, &Config::default()).unwrap();
        assert_eq!(&fallback, Catalog::sample());
    }
}

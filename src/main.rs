//! Acervo main entry point
//!
//! Command-line front-end over the scraping core: each subcommand maps to
//! one catalog operation and prints its typed response as JSON.

use acervo::catalog::{CatalogScraper, SearchResponse};
use acervo::config::load_config_with_hash;
use acervo::fetch::HttpClient;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Acervo: a media-catalog scraper
///
/// Fetches and extracts catalog data (home feed, sections, search, title
/// details, stream URLs) from the configured site and prints JSON.
#[derive(Parser, Debug)]
#[command(name = "acervo")]
#[command(version = "1.0.0")]
#[command(about = "A media-catalog scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the home feed (featured + sections)
    Home,
    /// Fetch only the home-page sections
    Sections,
    /// Search the catalog
    Search {
        /// Query string
        query: String,
    },
    /// Fetch full details for one title
    Title {
        /// Title slug, e.g. "movie/foo-bar"
        slug: String,
    },
    /// Resolve playable streams for a title
    Stream {
        /// Title slug
        slug: String,
        /// Optional episode identifier to resolve instead
        #[arg(long)]
        episode: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, _config_hash) = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, hash)
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    let http = Arc::new(HttpClient::new(&config)?);
    let scraper = CatalogScraper::new(http, config.scrape.base_url.clone());

    let json = match cli.command {
        Command::Home => serde_json::to_string_pretty(&scraper.fetch_home().await?)?,
        Command::Sections => serde_json::to_string_pretty(&scraper.fetch_sections().await?)?,
        Command::Search { query } => {
            let items = scraper.search(&query).await?;
            serde_json::to_string_pretty(&SearchResponse { query, items })?
        }
        Command::Title { slug } => serde_json::to_string_pretty(&scraper.fetch_title(&slug).await?)?,
        Command::Stream { slug, episode } => serde_json::to_string_pretty(
            &scraper.resolve_stream(&slug, episode.as_deref()).await?,
        )?,
    };

    println!("{}", json);
    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("acervo=info,warn"),
            1 => EnvFilter::new("acervo=debug,info"),
            2 => EnvFilter::new("acervo=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

//! Country Browser - Entry Point

use clap::Parser;
use country_browser::source::HttpSource;
use country_browser::state::SearchScope;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

fn parse_scope(raw: &str) -> Result<SearchScope, String> {
    SearchScope::parse(raw).ok_or_else(|| format!("unknown search scope '{}' (use all or core)", raw))
}

/// Country Browser - browse, search and filter countries in the terminal
#[derive(Parser, Debug)]
#[command(name = "country-browser")]
#[command(version)]
#[command(about = "TUI application for browsing, searching and filtering countries")]
pub struct Args {
    /// Read a saved API response from this file instead of the network
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// API endpoint returning the full country list
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Start with this search query
    #[arg(short, long)]
    pub search: Option<String>,

    /// Start with this region selected once the list is loaded
    #[arg(short, long)]
    pub region: Option<String>,

    /// Fields the search query is matched against: all or core
    #[arg(long, value_parser = parse_scope)]
    pub scope: Option<SearchScope>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = country_browser::config::load_config_with_precedence(args.config.clone())?;
        let merged = country_browser::config::merge_config(config_file);
        let with_env = country_browser::config::apply_env_overrides(merged);
        country_browser::config::apply_cli_overrides(with_env, args.endpoint.clone(), args.timeout)
    };

    // The browser still works without a log file.
    if let Err(err) = country_browser::logging::init(&config.log_file_path) {
        eprintln!("warning: logging disabled: {}", err);
    }

    info!(config = ?config, "Configuration loaded and resolved");

    let timeout = Duration::from_secs(config.request_timeout_secs);
    let input_source = country_browser::source::detect_input_source(args.file.clone(), || {
        HttpSource::new(config.endpoint.clone(), config.api_key.clone(), timeout)
    })?;

    let cli_args = country_browser::view::CliArgs {
        initial_query: args.search,
        initial_region: args.region,
        search_scope: args.scope.unwrap_or(config.search_scope),
        no_color: args.no_color,
    };

    country_browser::view::run_with_source(input_source, cli_args)?;

    Ok(())
}

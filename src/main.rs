//! Table-Scout main entry point
//!
//! This is the command-line interface for the Table-Scout crawler.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use table_scout::config::{load_config_with_hash, Config};
use table_scout::crawler::run_crawl;
use table_scout::output::{print_statistics, TextFileSink};
use tracing_subscriber::EnvFilter;

/// Table-Scout: finds the pages of a site that carry data tables
///
/// Table-Scout crawls a single domain breadth-first from its seed URLs,
/// flags every page holding a table that mentions one of the configured
/// keywords (or the marker of a client-side rendered table), and writes the
/// flagged URLs to a plain text file.
#[derive(Parser, Debug)]
#[command(name = "table-scout")]
#[command(version)]
#[command(about = "A single-domain table hunting crawler", long_about = None)]
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

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,

    /// Write matched URLs here instead of the configured path
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (mut config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if let Some(output) = cli.output {
        config.output.matches_path = output.display().to_string();
    }

    if cli.dry_run {
        handle_dry_run(&config);
    } else {
        handle_crawl(config, cli.quiet).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("table_scout=info,warn"),
            1 => EnvFilter::new("table_scout=debug,info"),
            2 => EnvFilter::new("table_scout=trace,debug"),
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

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Table-Scout Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Max depth: {}", config.crawler.max_depth);
    println!("  Politeness delay: {}ms", config.crawler.politeness_delay_ms);
    println!("  Request timeout: {}s", config.crawler.request_timeout_secs);

    println!("\nUser Agent:");
    println!("  Header: {}", config.user_agent.header_value());

    println!("\nFilter:");
    println!(
        "  Domain: {} ({:?} match)",
        config.filter.domain, config.filter.match_mode
    );
    println!(
        "  Excluded paths: {}",
        config.filter.exclude_paths.as_deref().unwrap_or("(none)")
    );
    println!(
        "  Excluded extensions: {}",
        config.filter.excluded_extensions.join(", ")
    );

    println!("\nClassifier:");
    println!("  Keywords: {}", config.classifier.keywords.join(", "));
    println!("  Dynamic table id: {}", config.classifier.dynamic_table_id);

    println!("\nOutput:");
    println!("  Matches: {}", config.output.matches_path);

    println!("\nSeeds ({}):", config.crawler.seeds.len());
    for seed in &config.crawler.seeds {
        println!("  - {}", seed);
    }

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would start crawling with {} seed URLs",
        config.crawler.seeds.len()
    );
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config, quiet: bool) -> anyhow::Result<()> {
    tracing::info!(
        "Domain: {}, seeds: {}, keywords: {}",
        config.filter.domain,
        config.crawler.seeds.len(),
        config.classifier.keywords.len()
    );

    let mut sink = TextFileSink::new(&config.output.matches_path);

    let report = match run_crawl(config, &mut sink).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e).context("crawl aborted");
        }
    };

    if !quiet {
        println!();
        print_statistics(&report.stats);
        println!(
            "\n✓ {} URL(s) of interest saved to: {}",
            report.matches.len(),
            sink.path().display()
        );
    }

    Ok(())
}

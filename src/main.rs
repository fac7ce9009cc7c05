mod config;
mod feed;
mod logging;
mod models;
mod publish;
mod score;
mod store;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use config::Config;
use feed::FeedClient;
use store::{JobStore, Merger};

#[derive(Parser)]
#[command(name = "scout")]
#[command(about = "Executive job search - auto-update and publish the dashboard")]
struct Cli {
    /// Directory holding the dashboard and data file (defaults to the
    /// current directory)
    #[arg(long)]
    repo_dir: Option<PathBuf>,

    /// Max results requested per query
    #[arg(long, default_value_t = 25)]
    limit: usize,

    /// Search and score, but do not persist or publish anything
    #[arg(long)]
    dry_run: bool,

    /// Skip the git commit/push step
    #[arg(long)]
    no_publish: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.repo_dir.clone(), cli.limit)?;
    logging::init(&config.log_path);
    run(&config, cli.dry_run, cli.no_publish)
}

fn run(config: &Config, dry_run: bool, no_publish: bool) -> Result<()> {
    let started = Local::now();
    info!("{}", "=".repeat(60));
    info!("  EXECUTIVE JOB SEARCH - auto-update & publish");
    info!("  {}", started.format("%A, %B %d, %Y at %I:%M %p"));
    info!("{}", "=".repeat(60));

    let store = JobStore::new(config.data_path.clone());
    let mut jobs = store.load();
    let today = started.date_naive();

    // 1. Search for new jobs
    let client = FeedClient::new(&config.feed)?;
    let mut merger = Merger::new(&jobs);

    info!("Running {} search queries...", config.queries.len());
    for (i, query) in config.queries.iter().enumerate() {
        info!("  [{}/{}] Searching: {}", i + 1, config.queries.len(), query);
        let found = match client.search(query) {
            Ok(found) => found,
            Err(e) => {
                warn!("  Search failed for '{}': {}", query, e);
                Vec::new()
            }
        };
        info!("    Found {} results", found.len());
        merger.absorb(&mut jobs, found, query, &config.score, today);
    }

    store::refresh_new_flags(&mut jobs, today);
    info!("Total jobs: {} | New today: {}", jobs.len(), merger.added());

    if dry_run {
        info!("Dry run - nothing persisted or published");
        return Ok(());
    }

    // A failed data write is the one fatal error in the run
    store.persist(&jobs)?;

    // 2. Rebuild dashboard
    if let Err(e) = publish::rebuild_dashboard(&config.dashboard_path, &jobs) {
        warn!("Dashboard rebuild failed: {}", e);
    }

    // 3. Push to the remote
    if no_publish {
        info!("Skipping git publish");
    } else {
        let stamp = Local::now().format("%Y-%m-%d %H:%M").to_string();
        if let Err(e) = publish::git_publish(&config.repo_dir, &stamp) {
            warn!("Git push failed: {}", e);
        }
    }

    info!("{}", "=".repeat(60));
    info!("  DONE");
    info!("{}", "=".repeat(60));
    Ok(())
}

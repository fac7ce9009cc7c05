use anyhow::{Context, Result, anyhow};
use regex::{NoExpand, Regex};
use std::path::Path;
use std::process::Command;
use tracing::{error, info, warn};

use crate::models::Listing;

// Everything outside this one region of the dashboard is opaque to us
const JOBS_PATTERN: &str = r"(?s)const JOBS = \[.*?\];";

/// Splice the collection into the dashboard's JOBS array. Returns false
/// (leaving the file untouched) when the dashboard or its placeholder is
/// missing; that is a warning, not a failure.
pub fn rebuild_dashboard(dashboard_path: &Path, jobs: &[Listing]) -> Result<bool> {
    if !dashboard_path.exists() {
        error!("Dashboard not found at {}", dashboard_path.display());
        return Ok(false);
    }

    let html = std::fs::read_to_string(dashboard_path)
        .with_context(|| format!("Failed to read {}", dashboard_path.display()))?;

    let pattern = Regex::new(JOBS_PATTERN)?;
    if !pattern.is_match(&html) {
        warn!("Could not find JOBS array in dashboard to update");
        return Ok(false);
    }

    let replacement = format!("const JOBS = {};", serde_json::to_string_pretty(jobs)?);
    let updated = pattern.replace(&html, NoExpand(&replacement));

    std::fs::write(dashboard_path, updated.as_bytes())
        .with_context(|| format!("Failed to write {}", dashboard_path.display()))?;

    info!("Dashboard updated with latest data");
    Ok(true)
}

/// Stage, commit and push the working tree. A clean tree is a no-op, not
/// an error. Returns true when a push actually happened.
pub fn git_publish(repo_dir: &Path, stamp: &str) -> Result<bool> {
    let status = Command::new("git")
        .args(["status", "--porcelain"])
        .current_dir(repo_dir)
        .output()
        .context("Failed to run git status")?;
    if !status.status.success() {
        return Err(anyhow!(
            "git status failed: {}",
            String::from_utf8_lossy(&status.stderr)
        ));
    }

    if String::from_utf8_lossy(&status.stdout).trim().is_empty() {
        info!("No changes to commit");
        return Ok(false);
    }

    run_git(repo_dir, &["add", "-A"])?;
    run_git(repo_dir, &["commit", "-m", &format!("Auto-update: {}", stamp)])?;
    run_git(repo_dir, &["push"])?;

    info!("Pushed to remote - dashboard will redeploy from there");
    Ok(true)
}

fn run_git(repo_dir: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_dir)
        .output()
        .with_context(|| format!("Failed to run git {}", args.join(" ")))?;

    if !output.status.success() {
        return Err(anyhow!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    Ok(())
}

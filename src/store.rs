use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::warn;

use crate::config::ScoreConfig;
use crate::feed::FeedItem;
use crate::models::{Listing, dedup_key};
use crate::score::fit_score;

// Ids continue above the dashboard's hand-entered range
const ID_SEED: i64 = 100;

pub struct JobStore {
    path: PathBuf,
}

impl JobStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the persisted collection. A missing or unparseable file is
    /// treated as an empty collection, not an error.
    pub fn load(&self) -> Vec<Listing> {
        if !self.path.exists() {
            return Vec::new();
        }
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Could not read {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(jobs) => jobs,
            Err(e) => {
                warn!("Ignoring corrupt data file {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    /// Write the full collection back, overwriting in place. The one
    /// write with no fallback; the error propagates.
    pub fn persist(&self, jobs: &[Listing]) -> Result<()> {
        let json = serde_json::to_string_pretty(jobs)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

/// Per-run merge state: the dedup-key set and the id counter both grow
/// across queries within a single run, so a later query can never
/// reintroduce a title/company pair an earlier query already produced.
pub struct Merger {
    seen: HashSet<String>,
    next_id: i64,
    added: usize,
}

impl Merger {
    pub fn new(existing: &[Listing]) -> Self {
        let seen = existing
            .iter()
            .map(|j| dedup_key(&j.title, &j.company))
            .collect();
        let max_id = existing.iter().map(|j| j.id).max().unwrap_or(ID_SEED);
        Self {
            seen,
            next_id: max_id + 1,
            added: 0,
        }
    }

    /// Fold one query's results into the collection. The dedup key is
    /// registered before the score check, so a rejected pair also blocks
    /// later duplicates of itself.
    pub fn absorb(
        &mut self,
        jobs: &mut Vec<Listing>,
        found: Vec<FeedItem>,
        query: &str,
        score_config: &ScoreConfig,
        today: NaiveDate,
    ) -> usize {
        let mut added = 0;

        for item in found {
            let key = dedup_key(&item.title, &item.company);
            if !self.seen.insert(key) {
                continue;
            }

            let score = fit_score(score_config, &item.title, &item.company, "");
            if score < score_config.threshold {
                continue;
            }

            jobs.push(Listing {
                id: self.next_id,
                company: item.company,
                title: item.title,
                location: "Remote".to_string(),
                salary: "TBD".to_string(),
                remote: "Yes".to_string(),
                link: item.link,
                score,
                reason: format!(
                    "Found via Indeed search: '{}'. Auto-scored based on title/company keywords.",
                    query
                ),
                discovered: format_date(today),
                source: "general".to_string(),
                is_new: true,
                status: "not-applied".to_string(),
                notes: String::new(),
            });
            self.next_id += 1;
            added += 1;
        }

        self.added += added;
        added
    }

    pub fn added(&self) -> usize {
        self.added
    }
}

/// Recompute isNew for every entry: new means discovered today. Entries
/// from a previous day flip to not-new automatically.
pub fn refresh_new_flags(jobs: &mut [Listing], today: NaiveDate) {
    let today = format_date(today);
    for job in jobs {
        job.is_new = job.discovered == today;
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

use anyhow::Result;
use std::path::PathBuf;

pub const DASHBOARD_FILE: &str = "index.html";
pub const DATA_FILE: &str = "jobs_data.json";
pub const LOG_FILE: &str = "job_search_log.txt";

// --- Scoring configuration ---

pub struct ScoreConfig {
    pub base: i64,
    pub title_keywords: Vec<(String, i64)>,
    pub target_companies: Vec<String>,
    pub company_bonus: i64,
    pub remote_bonus: i64,
    pub threshold: i64,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        let title_keywords = [
            ("vp", 15),
            ("vice president", 15),
            ("head", 14),
            ("senior director", 13),
            ("director", 10),
            ("cfo", 18),
            ("cpo", 15),
            ("chief", 16),
            ("finance", 12),
            ("financial", 12),
            ("fintech", 10),
            ("technology", 8),
            ("systems", 8),
            ("transformation", 10),
            ("strategy", 8),
            ("erp", 10),
            ("treasury", 8),
            ("accounting", 6),
            ("planning", 7),
            ("analytics", 7),
            ("product", 6),
            ("operations", 6),
            ("risk", 5),
            ("controls", 5),
            ("automation", 8),
            ("data", 5),
            ("ai", 8),
            ("digital", 7),
        ]
        .iter()
        .map(|(k, w)| (k.to_string(), *w))
        .collect();

        let target_companies = [
            "Stripe", "PayPal", "Block", "Brex", "Ramp", "Chime", "Plaid",
            "Marqeta", "Adyen", "Wise", "Snowflake", "Databricks", "ServiceNow",
            "Salesforce", "Workday", "UiPath", "Palantir", "Robinhood", "SoFi",
            "Coinbase", "Intuit", "Instacart", "Affirm",
        ]
        .iter()
        .map(|c| c.to_string())
        .collect();

        Self {
            base: 40,
            title_keywords,
            target_companies,
            company_bonus: 8,
            remote_bonus: 5,
            threshold: 70,
        }
    }
}

// --- Feed configuration ---

pub struct FeedConfig {
    pub endpoint: String,
    pub locale: String,
    pub sort: String,
    pub limit: usize,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://www.indeed.com/rss".to_string(),
            locale: "Remote".to_string(),
            sort: "date".to_string(),
            limit: 25,
            timeout_secs: 15,
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)".to_string(),
        }
    }
}

// --- Run configuration ---

pub struct Config {
    pub queries: Vec<String>,
    pub score: ScoreConfig,
    pub feed: FeedConfig,
    pub repo_dir: PathBuf,
    pub dashboard_path: PathBuf,
    pub data_path: PathBuf,
    pub log_path: PathBuf,
}

impl Config {
    /// Build the run configuration. The repo dir (dashboard + data file)
    /// defaults to the current directory; the log file lives on the
    /// user's Desktop so the transcript survives outside the repo.
    pub fn resolve(repo_dir: Option<PathBuf>, limit: usize) -> Result<Self> {
        let repo_dir = match repo_dir {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };

        let log_path = match directories::UserDirs::new() {
            Some(dirs) => dirs.home_dir().join("Desktop").join(LOG_FILE),
            None => repo_dir.join(LOG_FILE),
        };

        let queries = [
            "CFO fintech remote",
            "VP Finance fintech remote",
            "VP Finance technology remote",
            "Senior Director Financial Systems remote",
            "Head of Finance fintech remote",
            "Finance Transformation Director remote",
            "Director Finance Technology remote",
            "VP Financial Systems remote",
            "Head Financial Planning Analysis remote",
        ]
        .iter()
        .map(|q| q.to_string())
        .collect();

        Ok(Self {
            queries,
            score: ScoreConfig::default(),
            feed: FeedConfig {
                limit,
                ..FeedConfig::default()
            },
            dashboard_path: repo_dir.join(DASHBOARD_FILE),
            data_path: repo_dir.join(DATA_FILE),
            log_path,
            repo_dir,
        })
    }
}

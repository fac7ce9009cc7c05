use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub company: String,
    pub title: String,
    pub location: String,
    pub salary: String,
    pub remote: String, // "Yes", "No"
    pub link: String,
    pub score: i64,
    pub reason: String,
    pub discovered: String, // MM/DD/YYYY, set once at creation
    pub source: String,     // "general", etc.
    #[serde(rename = "isNew")]
    pub is_new: bool,
    // Owned by the human reviewing the dashboard; the pipeline only
    // carries these through, it never touches them.
    #[serde(default = "default_status")]
    pub status: String, // "not-applied", "applied", ...
    #[serde(default)]
    pub notes: String,
}

fn default_status() -> String {
    "not-applied".to_string()
}

/// Normalized uniqueness key for a listing: lowercased, trimmed
/// "title|company".
pub fn dedup_key(title: &str, company: &str) -> String {
    format!(
        "{}|{}",
        title.to_lowercase().trim(),
        company.to_lowercase().trim()
    )
}

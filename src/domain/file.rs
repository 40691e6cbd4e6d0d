use serde::{Deserialize, Serialize};

use crate::domain::types::FileId;

/// Metadata of a file downloaded by the scraper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: FileId,
    #[serde(default)]
    pub filename: String,
    /// MIME-like type string, e.g. `application/pdf`.
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub file_hash: Option<String>,
    #[serde(default)]
    pub scraped_date: Option<String>,
    #[serde(default)]
    pub last_modified: Option<String>,
}

impl FileRecord {
    /// Whether `file_type` contains `needle`, ignoring case.
    ///
    /// Records without a type never match.
    pub fn type_contains(&self, needle: &str) -> bool {
        self.file_type
            .as_deref()
            .is_some_and(|t| t.to_lowercase().contains(&needle.to_lowercase()))
    }

    /// Whether the backend reports a modification after the scrape.
    pub fn was_modified(&self) -> bool {
        self.last_modified != self.scraped_date
    }
}

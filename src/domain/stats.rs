use serde::{Deserialize, Serialize};

/// Aggregate counters reported by `/api/stats`.
///
/// Every counter defaults to zero: the dashboard shows `0` rather than
/// failing when the backend omits a section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub products: ProductStats,
    pub files: FileStats,
    pub events_24h: EventStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductStats {
    pub active: u64,
    pub inactive: u64,
    pub categories: u64,
    pub avg_price: f64,
    pub last_scraping: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStats {
    pub total: u64,
    pub total_size_mb: f64,
    pub types: u64,
}

/// Event counters for the last 24 hours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventStats {
    pub total: u64,
    pub successful: u64,
    pub failed: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_default_to_zero() {
        let stats: Stats = serde_json::from_value(serde_json::json!({
            "products": { "active": 12 }
        }))
        .unwrap();

        assert_eq!(stats.products.active, 12);
        assert_eq!(stats.products.categories, 0);
        assert_eq!(stats.files.total, 0);
        assert_eq!(stats.events_24h.total, 0);
    }
}

use serde::Serialize;

use crate::alerts::Alert;
use crate::dto::events::RecentEvent;
use crate::services::main::Summary;

/// Counters, category list and recent events of the dashboard section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub active_products: u64,
    pub total_files: u64,
    pub categories_count: u64,
    pub events_24h: u64,
    pub categories: Vec<String>,
    pub recent_events: Vec<RecentEvent>,
    pub alert: Option<Alert>,
}

impl From<&Summary> for SummaryView {
    fn from(summary: &Summary) -> Self {
        Self {
            active_products: summary.stats.products.active,
            total_files: summary.stats.files.total,
            categories_count: summary.stats.products.categories,
            events_24h: summary.stats.events_24h.total,
            categories: summary.categories.clone(),
            recent_events: summary.recent_events.iter().map(RecentEvent::from).collect(),
            alert: summary.alert.clone(),
        }
    }
}

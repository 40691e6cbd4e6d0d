use serde::{Deserialize, Serialize};

use crate::domain::types::ProductId;

/// A product scraped by the backend.
///
/// Timestamps are kept as the raw ISO strings the backend sends; they are
/// only ever formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub discount_percentage: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub page_number: Option<i64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub scraped_date: Option<String>,
    #[serde(default)]
    pub last_modified: Option<String>,
}

impl Product {
    /// Case-insensitive substring match on the title.
    pub fn title_matches(&self, search: &str) -> bool {
        self.title.to_lowercase().contains(&search.to_lowercase())
    }
}

use serde::Serialize;

use crate::domain::product::Product;
use crate::domain::types::non_blank;
use crate::formatting::{NOT_AVAILABLE, format_date, format_price, truncate_text};
use crate::pagination::PageWindow;

/// Longest title shown in the table before it is cut.
pub const TITLE_DISPLAY_LEN: usize = 60;

pub const NO_CATEGORY: &str = "Sin categoría";

fn category_label(category: Option<&str>) -> String {
    non_blank(category).unwrap_or(NO_CATEGORY).to_string()
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// One row of the products table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    pub id: i64,
    pub title: String,
    pub image_url: Option<String>,
    pub price: String,
    pub discount: Option<String>,
    pub category: String,
    pub scraped_date: String,
    pub url: Option<String>,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.get(),
            title: truncate_text(Some(&product.title), TITLE_DISPLAY_LEN),
            image_url: non_blank(product.image_url.as_deref()).map(String::from),
            price: format_price(product.price),
            discount: positive(product.discount_percentage).map(|d| d.to_string()),
            category: category_label(product.category.as_deref()),
            scraped_date: format_date(product.scraped_date.as_deref()),
            url: non_blank(product.url.as_deref()).map(String::from),
        }
    }
}

/// Content of the product detail modal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetail {
    pub id: i64,
    pub title: String,
    pub image_url: Option<String>,
    pub price: String,
    pub original_price: Option<String>,
    pub discount: Option<String>,
    pub category: String,
    pub quantity: String,
    pub page_number: String,
    pub scraped_date: String,
    pub last_modified: String,
    pub description: Option<String>,
    pub url: Option<String>,
}

fn count_or_na(value: Option<i64>) -> String {
    match value {
        Some(v) if v != 0 => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

impl From<&Product> for ProductDetail {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.get(),
            title: product.title.clone(),
            image_url: non_blank(product.image_url.as_deref()).map(String::from),
            price: format_price(product.price),
            original_price: positive(product.original_price).map(|p| format_price(Some(p))),
            discount: positive(product.discount_percentage).map(|d| d.to_string()),
            category: category_label(product.category.as_deref()),
            quantity: count_or_na(product.quantity),
            page_number: count_or_na(product.page_number),
            scraped_date: format_date(product.scraped_date.as_deref()),
            last_modified: format_date(product.last_modified.as_deref()),
            description: non_blank(product.description.as_deref()).map(String::from),
            url: non_blank(product.url.as_deref()).map(String::from),
        }
    }
}

/// A rendered page of the products view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductsListing {
    pub rows: Vec<ProductRow>,
    pub pagination: PageWindow,
    /// Server-reported total for the current category.
    pub total: usize,
    pub category: Option<String>,
    pub search: Option<String>,
}

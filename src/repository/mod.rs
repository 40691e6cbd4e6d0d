use crate::domain::event::ScrapingEvent;
use crate::domain::file::FileRecord;
use crate::domain::product::Product;
use crate::domain::stats::Stats;
use crate::domain::types::ProductId;
use crate::pagination::ITEMS_PER_PAGE;

pub mod errors;
#[cfg(feature = "server")]
pub mod http;

pub use errors::{RepositoryError, RepositoryResult};

/// Query parameters sent to the product-listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductListQuery {
    /// 1-based page number.
    pub page: usize,
    /// Page size.
    pub limit: usize,
    /// Exact category filter applied by the backend.
    pub category: Option<String>,
}

impl Default for ProductListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: ITEMS_PER_PAGE,
            category: None,
        }
    }
}

impl ProductListQuery {
    pub fn paginate(mut self, page: usize, limit: usize) -> Self {
        self.page = page;
        self.limit = limit;
        self
    }
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Query parameters for the scraping-event endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventListQuery {
    /// Maximum number of events; the backend default applies when unset.
    pub limit: Option<usize>,
}

impl EventListQuery {
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Read-only operations for products.
pub trait ProductReader {
    /// Returns the server-reported total and the requested page.
    fn list_products(
        &self,
        query: ProductListQuery,
    ) -> impl Future<Output = RepositoryResult<(usize, Vec<Product>)>>;
    /// Retrieve a product by its identifier.
    fn get_product_by_id(&self, id: ProductId) -> impl Future<Output = RepositoryResult<Product>>;
}

/// Read-only operations for downloaded files.
pub trait FileReader {
    /// The full, unpaginated file list.
    fn list_files(&self) -> impl Future<Output = RepositoryResult<Vec<FileRecord>>>;
}

/// Read-only operations for scraping events.
pub trait EventReader {
    fn list_events(
        &self,
        query: EventListQuery,
    ) -> impl Future<Output = RepositoryResult<Vec<ScrapingEvent>>>;
}

/// Aggregate counters.
pub trait StatsReader {
    fn get_stats(&self) -> impl Future<Output = RepositoryResult<Stats>>;
}

/// Distinct product category names.
pub trait CategoryReader {
    fn list_categories(&self) -> impl Future<Output = RepositoryResult<Vec<String>>>;
}

use log::debug;
use serde::de::DeserializeOwned;

use crate::domain::event::ScrapingEvent;
use crate::domain::file::FileRecord;
use crate::domain::product::Product;
use crate::domain::stats::Stats;
use crate::domain::types::ProductId;
use crate::models::envelope::Envelope;
use crate::repository::{
    CategoryReader, EventListQuery, EventReader, FileReader, ProductListQuery, ProductReader,
    RepositoryError, RepositoryResult, StatsReader,
};

/// Repository backed by the scraping backend's REST API.
///
/// `reqwest::Client` is reference counted, so cloning the repository is
/// cheap and every clone shares one connection pool.
#[derive(Clone, Debug)]
pub struct HttpRepository {
    client: reqwest::Client,
    base_url: String,
}

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RepositoryError::Decode(err.to_string())
        } else {
            RepositoryError::Transport(err.to_string())
        }
    }
}

impl HttpRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issues a GET and decodes the envelope whatever the HTTP status: the
    /// backend reports failures through `success`, not through status codes.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> RepositoryResult<Envelope<T>> {
        let url = self.url(path);
        debug!("GET {url} {query:?}");
        let response = self.client.get(&url).query(query).send().await?;
        Ok(response.json::<Envelope<T>>().await?)
    }
}

impl ProductReader for HttpRepository {
    async fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)> {
        let mut params = vec![
            ("page", query.page.to_string()),
            ("limit", query.limit.to_string()),
        ];
        if let Some(category) = query.category {
            params.push(("category", category));
        }

        let (products, total) = self
            .get::<Vec<Product>>("/api/products", &params)
            .await?
            .into_page()?;
        let total = total.unwrap_or(products.len());
        Ok((total, products))
    }

    async fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Product> {
        self.get::<Product>(&format!("/api/products/{id}"), &[])
            .await?
            .into_data()
    }
}

impl FileReader for HttpRepository {
    async fn list_files(&self) -> RepositoryResult<Vec<FileRecord>> {
        self.get::<Vec<FileRecord>>("/api/files", &[])
            .await?
            .into_data()
    }
}

impl EventReader for HttpRepository {
    async fn list_events(&self, query: EventListQuery) -> RepositoryResult<Vec<ScrapingEvent>> {
        let params: Vec<(&str, String)> = query
            .limit
            .map(|limit| vec![("limit", limit.to_string())])
            .unwrap_or_default();
        self.get::<Vec<ScrapingEvent>>("/api/events", &params)
            .await?
            .into_data()
    }
}

impl StatsReader for HttpRepository {
    async fn get_stats(&self) -> RepositoryResult<Stats> {
        self.get::<Stats>("/api/stats", &[]).await?.into_data()
    }
}

impl CategoryReader for HttpRepository {
    async fn list_categories(&self) -> RepositoryResult<Vec<String>> {
        self.get::<Vec<String>>("/api/categories", &[])
            .await?
            .into_data()
    }
}

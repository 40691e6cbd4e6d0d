use crate::domain::product::Product;
use crate::domain::types::{ProductId, non_blank};
use crate::dto::products::{ProductDetail, ProductRow, ProductsListing};
use crate::pagination::{ITEMS_PER_PAGE, PageWindow};
use crate::repository::{ProductListQuery, ProductReader, RepositoryError};

use super::{ServiceError, ServiceResult};

/// State of the products section: the last successfully loaded page.
///
/// Search never reaches the backend. It filters the page held here, so a
/// term only matches among the (at most) 20 products of the current page.
#[derive(Debug)]
pub struct ProductsView {
    current_page: usize,
    total: usize,
    category: Option<String>,
    products: Vec<Product>,
}

impl Default for ProductsView {
    fn default() -> Self {
        Self {
            current_page: 1,
            total: 0,
            category: None,
            products: Vec::new(),
        }
    }
}

impl ProductsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Server-reported total of the last loaded listing.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Fetches `page` (optionally restricted to `category`) and renders it,
    /// filtered by `search`.
    ///
    /// On failure the previously loaded page is kept untouched.
    pub async fn load_products<R>(
        &mut self,
        repo: &R,
        page: usize,
        category: Option<&str>,
        search: Option<&str>,
    ) -> ServiceResult<ProductsListing>
    where
        R: ProductReader,
    {
        let page = page.max(1);
        let category = non_blank(category).map(str::to_string);

        let mut query = ProductListQuery::default().paginate(page, ITEMS_PER_PAGE);
        if let Some(category) = &category {
            query = query.category(category.as_str());
        }

        match repo.list_products(query).await {
            Ok((total, products)) => {
                self.current_page = page;
                self.total = total;
                self.category = category;
                self.products = products;
                Ok(self.listing(search))
            }
            Err(e) => {
                log::error!("Failed to load products page {page}: {e}");
                Err(e.into())
            }
        }
    }

    /// Renders the cached page without another request.
    pub fn listing(&self, search: Option<&str>) -> ProductsListing {
        let search = non_blank(search);
        let rows = self
            .products
            .iter()
            .filter(|p| search.is_none_or(|term| p.title_matches(term)))
            .map(ProductRow::from)
            .collect();

        ProductsListing {
            rows,
            pagination: PageWindow::new(self.current_page, self.total, ITEMS_PER_PAGE),
            total: self.total,
            category: self.category.clone(),
            search: search.map(str::to_string),
        }
    }

    /// Fetches one product for the detail modal.
    ///
    /// Reads no view state, so callers need not hold the view lock.
    /// `Ok(None)` means the backend answered `success: false`; the caller
    /// leaves whatever modal was open unchanged.
    pub async fn view_product_detail<R>(
        repo: &R,
        id: ProductId,
    ) -> ServiceResult<Option<ProductDetail>>
    where
        R: ProductReader,
    {
        match repo.get_product_by_id(id).await {
            Ok(product) => Ok(Some(ProductDetail::from(&product))),
            Err(RepositoryError::Unsuccessful(reason)) => {
                log::debug!("Product {id} not shown: {reason}");
                Ok(None)
            }
            Err(e) => {
                log::error!("Failed to load product {id}: {e}");
                Err(ServiceError::Unavailable)
            }
        }
    }
}

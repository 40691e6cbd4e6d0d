use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::non_blank;

/// Query string of the product listing.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ProductsQuery {
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    pub category: Option<String>,
    pub search: Option<String>,
}

/// Query string of the category dropdown refresh: the option to keep selected.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryOptionsQuery {
    pub selected: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductsQueryPayload {
    pub page: usize,
    pub category: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Error)]
pub enum ProductsQueryError {
    #[error("Products query validation failed: {0}")]
    Validation(String),
}

impl From<ValidationErrors> for ProductsQueryError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl TryFrom<ProductsQuery> for ProductsQueryPayload {
    type Error = ProductsQueryError;

    fn try_from(value: ProductsQuery) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            page: value.page.unwrap_or(1),
            category: non_blank(value.category.as_deref()).map(String::from),
            search: non_blank(value.search.as_deref()).map(String::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_first_page() {
        let payload = ProductsQueryPayload::try_from(ProductsQuery::default()).unwrap();
        assert_eq!(payload.page, 1);
        assert_eq!(payload.category, None);
        assert_eq!(payload.search, None);
    }

    #[test]
    fn blank_filters_are_dropped() {
        let query = ProductsQuery {
            page: Some(3),
            category: Some("".into()),
            search: Some("  ".into()),
        };
        let payload = ProductsQueryPayload::try_from(query).unwrap();
        assert_eq!(payload.page, 3);
        assert_eq!(payload.category, None);
        assert_eq!(payload.search, None);
    }

    #[test]
    fn page_zero_is_rejected() {
        let query = ProductsQuery {
            page: Some(0),
            ..ProductsQuery::default()
        };
        assert!(matches!(
            ProductsQueryPayload::try_from(query),
            Err(ProductsQueryError::Validation(_))
        ));
    }
}

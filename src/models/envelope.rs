use serde::Deserialize;

use crate::repository::errors::{RepositoryError, RepositoryResult};

/// JSON wrapper every backend response uses.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub total: Option<usize>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwraps the payload, treating `success: false` as an application
    /// failure and a successful envelope without `data` as malformed.
    pub fn into_data(self) -> RepositoryResult<T> {
        self.into_page().map(|(data, _total)| data)
    }

    /// Like [`Self::into_data`] but also returns the server-reported total.
    pub fn into_page(self) -> RepositoryResult<(T, Option<usize>)> {
        if !self.success {
            return Err(RepositoryError::Unsuccessful(
                self.error.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }
        match self.data {
            Some(data) => Ok((data, self.total)),
            None => Err(RepositoryError::Decode(
                "successful response without data".to_string(),
            )),
        }
    }
}

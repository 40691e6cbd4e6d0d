use thiserror::Error;

use crate::alerts::{Alert, SERVER_UNREACHABLE};
use crate::repository::RepositoryError;

/// Generic error type used by the view controllers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The backend could not be reached or answered something unreadable.
    #[error("backend unavailable")]
    Unavailable,
    /// The backend answered `success: false`.
    #[error("backend rejected the request")]
    Rejected,
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Transport(_) | RepositoryError::Decode(_) => ServiceError::Unavailable,
            RepositoryError::Unsuccessful(_) => ServiceError::Rejected,
        }
    }
}

impl ServiceError {
    /// The alert shown for this error; `rejected` is the view-specific text
    /// for application-level failures.
    pub fn alert(&self, rejected: &str) -> Alert {
        match self {
            ServiceError::Unavailable => Alert::danger(SERVER_UNREACHABLE),
            ServiceError::Rejected => Alert::danger(rejected),
        }
    }
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_and_decode_failures_are_unavailable() {
        assert_eq!(
            ServiceError::from(RepositoryError::Transport("refused".into())),
            ServiceError::Unavailable
        );
        assert_eq!(
            ServiceError::from(RepositoryError::Decode("eof".into())),
            ServiceError::Unavailable
        );
        assert_eq!(
            ServiceError::from(RepositoryError::Unsuccessful("boom".into())),
            ServiceError::Rejected
        );
    }

    #[test]
    fn alerts_pick_view_text_for_rejections() {
        assert_eq!(
            ServiceError::Unavailable.alert("Error cargando archivos").message,
            "No se pudo conectar con el servidor"
        );
        assert_eq!(
            ServiceError::Rejected.alert("Error cargando archivos").message,
            "Error cargando archivos"
        );
    }
}

//! Domain error type for the hierarchy service
//!
//! `HierarchyError` keeps the full failure taxonomy internally; the boundary
//! maps each kind to its own HTTP status via `IntoResponse`. Store and
//! infrastructure sources are logged at response time and never leak into
//! the client-facing message.

use axum::Json;
use axum::response::IntoResponse;
use http::StatusCode;
use serde_json::json;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure modes of the hierarchy operations
#[derive(Debug, Error)]
pub enum HierarchyError {
    /// Requested or targeted employee id is absent
    #[error("employee {0} not found")]
    NotFound(i64),
    /// Supplied manager id does not reference an existing employee
    #[error("manager {0} does not exist")]
    InvalidReference(i64),
    /// Request payload failed validation
    #[error("{0}")]
    Validation(String),
    /// Manager graph is not a forest; found while expanding a subtree
    #[error("management chain through employee {0} forms a cycle")]
    CycleDetected(i64),
    /// Connection or transport failure from the store
    #[error("employee store unavailable")]
    StoreUnavailable(#[source] sqlx::Error),
    /// Any other failure surfaced from the store
    #[error("employee store operation failed")]
    Unknown(#[source] BoxError),
}

impl HierarchyError {
    /// HTTP status for this error kind
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidReference(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::CycleDetected(_) | Self::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<sqlx::Error> for HierarchyError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::StoreUnavailable(e),
            other => Self::Unknown(other.into()),
        }
    }
}

impl IntoResponse for HierarchyError {
    fn into_response(self) -> axum::response::Response {
        match &self {
            Self::StoreUnavailable(src) => {
                tracing::error!(error = %src, "employee store unavailable");
            }
            Self::Unknown(src) => {
                tracing::error!(error = %src, "employee store operation failed");
            }
            Self::CycleDetected(id) => {
                tracing::error!(employee_id = id, "management chain forms a cycle");
            }
            _ => {}
        }
        (self.status(), Json(json!({ "message": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_per_error_kind() {
        assert_eq!(HierarchyError::NotFound(1).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            HierarchyError::InvalidReference(9).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            HierarchyError::Validation("full_name must not be empty".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            HierarchyError::CycleDetected(3).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

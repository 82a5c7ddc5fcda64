use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use thiserror::Error;

use coinbank_core::DomainError;

/// Every way a request can fail.
///
/// The `Display` text is sent to the client verbatim as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The request body is not JSON or does not fit the expected shape.
    #[error("{message}")]
    Body { status: StatusCode, message: String },

    /// The store lock was poisoned by a panicking request.
    #[error("Ledger unavailable")]
    StoreUnavailable,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(_) => StatusCode::BAD_REQUEST,
            ApiError::Body { status, .. } => *status,
            ApiError::StoreUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        if let ApiError::StoreUnavailable = self {
            tracing::error!("ledger store lock poisoned");
        }
        json_error(self.status(), self.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_are_client_errors() {
        for e in [
            DomainError::NotFound,
            DomainError::AlreadyExists,
            DomainError::InsufficientFunds,
        ] {
            assert_eq!(ApiError::from(e).status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn domain_message_passes_through() {
        let err = ApiError::from(DomainError::InsufficientFunds);
        assert_eq!(err.to_string(), "Insufficient funds");
    }

    #[test]
    fn body_errors_keep_their_status_and_message() {
        let err = ApiError::Body {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "missing field `name`".to_string(),
        };
        assert_eq!(err.to_string(), "missing field `name`");

        let res = err.into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn poisoned_store_is_a_server_error() {
        let res = ApiError::StoreUnavailable.into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! API error mapping.
//!
//! Converts core domain errors into HTTP responses. Business-rule and
//! validation failures surface their message to the client; anything
//! internal is logged and replaced with a generic body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use nestegg_core::errors::{DatabaseError, Error};
use nestegg_market_data::MarketDataError;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "An internal error occurred",
        )
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match &err {
            Error::Validation(e) => Self::bad_request(e.to_string()),
            Error::Transaction(e) => Self::bad_request(e.to_string()),
            Error::ConstraintViolation(msg) => Self::bad_request(msg.clone()),
            Error::Database(DatabaseError::NotFound(_)) => Self::not_found("Record not found"),
            Error::Database(DatabaseError::UniqueViolation(_)) => {
                Self::bad_request("A record with these details already exists")
            }
            Error::MarketData(MarketDataError::SymbolNotFound(symbol)) => {
                Self::not_found(format!("Could not fetch price for symbol: {}", symbol))
            }
            Error::MarketData(MarketDataError::NoData(symbol)) => {
                Self::not_found(format!("Could not fetch price for symbol: {}", symbol))
            }
            _ => {
                tracing::error!("Internal error: {}", err);
                Self::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

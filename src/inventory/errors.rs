//! # Inventory Errors
//!
//! Error types for item validation and item lookup.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Reason an item payload was rejected.
///
/// Display text is the exact message returned to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid input data")]
    MissingField,

    #[error("Invalid input data: name cannot be empty")]
    EmptyName,

    #[error("Invalid input data: name contains special characters")]
    InvalidName,

    #[error("Invalid input data: quantity must be an integer")]
    InvalidQuantityType,

    #[error("Invalid input data: quantity cannot be negative")]
    NegativeQuantity,

    #[error("Invalid input data: quantity cannot be zero")]
    ZeroQuantity,

    #[error("Invalid input data: price must be a number")]
    InvalidPriceType,

    #[error("Invalid input data: price cannot be negative")]
    NegativePrice,

    #[error("Invalid input data: price cannot be zero")]
    ZeroPrice,
}

impl ValidationError {
    /// Stable kind name, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField => "MISSING_FIELD",
            Self::EmptyName => "EMPTY_NAME",
            Self::InvalidName => "INVALID_NAME",
            Self::InvalidQuantityType => "INVALID_QUANTITY_TYPE",
            Self::NegativeQuantity => "NEGATIVE_QUANTITY",
            Self::ZeroQuantity => "ZERO_QUANTITY",
            Self::InvalidPriceType => "INVALID_PRICE_TYPE",
            Self::NegativePrice => "NEGATIVE_PRICE",
            Self::ZeroPrice => "ZERO_PRICE",
        }
    }
}

/// Inventory API errors
#[derive(Debug, Clone, Error)]
pub enum InventoryError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Item payload failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Referenced id is not in the store
    #[error("Item not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store lock poisoned by a panicking request
    #[error("Internal error: {0}")]
    Internal(String),
}

impl InventoryError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            InventoryError::Validation(_) => StatusCode::BAD_REQUEST,
            InventoryError::NotFound => StatusCode::NOT_FOUND,
            InventoryError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub description: String,
}

impl From<InventoryError> for ErrorResponse {
    fn from(err: InventoryError) -> Self {
        Self {
            description: err.to_string(),
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

//! HTTP error mapping to the `{code, message}` error body

use super::access_log::OutcomeMessage;
use crate::contract::WarehouseError;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// The HTTP status code
    #[schema(example = 404)]
    pub code: u16,

    /// Human-readable explanation
    #[schema(example = "warehouse 9999 not found")]
    pub message: String,
}

impl ErrorBody {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ErrorBody {
    fn into_response(self) -> Response {
        let status = self.status();
        let outcome = OutcomeMessage(self.message.clone());
        let mut response = (status, Json(self)).into_response();
        response.extensions_mut().insert(outcome);
        response
    }
}

/// Map domain errors to HTTP error bodies
pub fn map_domain_error(error: WarehouseError) -> ErrorBody {
    match error {
        WarehouseError::Validation { message } => ErrorBody::new(StatusCode::BAD_REQUEST, message),

        WarehouseError::Conflict { reason } => ErrorBody::new(StatusCode::CONFLICT, reason),

        WarehouseError::NotFound { id } => {
            ErrorBody::new(StatusCode::NOT_FOUND, format!("warehouse {id} not found"))
        }

        WarehouseError::Cancelled => ErrorBody::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "request was cancelled before it completed",
        ),

        WarehouseError::Internal => ErrorBody::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "an unexpected error occurred",
        ),
    }
}

/// Map a body parse failure to the status the route uses for malformed input
pub fn map_json_rejection(rejection: JsonRejection, status: StatusCode) -> ErrorBody {
    ErrorBody::new(status, rejection.body_text())
}

pub fn map_path_rejection(rejection: PathRejection) -> ErrorBody {
    ErrorBody::new(
        StatusCode::BAD_REQUEST,
        format!("invalid warehouse id: {}", rejection.body_text()),
    )
}

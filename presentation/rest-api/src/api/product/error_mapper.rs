use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_empty",
            ),
            ProductError::CodeEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.code_empty",
            ),
            ProductError::QuantityNegative => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.quantity_negative",
            ),
            ProductError::InvalidId => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_id",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::CodeTaken => (StatusCode::CONFLICT, "Conflict", "product.code_taken"),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

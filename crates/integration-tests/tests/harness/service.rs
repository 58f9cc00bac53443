//! Demo service whose handlers fail with structured errors

use axum::{
    Router,
    extract::Path,
    response::{IntoResponse, Response},
    routing::get,
};
use courier_errors::{ErrorCode, ErrorType, Parameters, SerializableError, ServiceError};

/// Domain error of the demo inventory service
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("item not found: {sku}")]
    UnknownItem { sku: String },

    #[error("item {sku} is out of stock")]
    OutOfStock { sku: String, restock_in: String },
}

impl ServiceError for InventoryError {
    fn error_type(&self) -> ErrorType {
        match self {
            Self::UnknownItem { .. } => ErrorType::new(ErrorCode::NotFound, "Inventory:UnknownItem").unwrap(),
            Self::OutOfStock { .. } => ErrorType::new(ErrorCode::CustomClient, "Inventory:OutOfStock").unwrap(),
        }
    }

    fn parameters(&self) -> Parameters {
        match self {
            Self::UnknownItem { sku } => [("sku", sku.as_str())].into_iter().collect(),
            Self::OutOfStock { sku, restock_in } => {
                [("sku", sku.as_str()), ("restockIn", restock_in.as_str())].into_iter().collect()
            }
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        self.to_serializable_error().into_response()
    }
}

/// Routes of the demo service
pub fn router() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/errors/{code}", get(fail_with_code))
        .route("/inventory/{sku}", get(lookup))
}

/// Always fails with the error code named in the path
async fn fail_with_code(Path(code): Path<String>) -> Result<&'static str, SerializableError> {
    let error_code: ErrorCode = code.parse().map_err(|_| {
        SerializableError::new(&ErrorType::DEFAULT_INVALID_ARGUMENT).with_parameter("code", code.clone())
    })?;

    let error_type = error_code
        .default_error_type()
        .unwrap_or_else(|| ErrorType::new(error_code, "Demo:CustomFailure").unwrap());

    Err(SerializableError::new(&error_type).with_parameter("requested", code))
}

async fn lookup(Path(sku): Path<String>) -> Result<&'static str, InventoryError> {
    if sku == "widget" {
        return Ok("in stock");
    }

    if sku == "gadget" {
        return Err(InventoryError::OutOfStock {
            sku,
            restock_in: "3d".to_owned(),
        });
    }

    Err(InventoryError::UnknownItem { sku })
}

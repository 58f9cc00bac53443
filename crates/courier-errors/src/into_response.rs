use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{SerializableError, codec};

impl IntoResponse for SerializableError {
    fn into_response(self) -> Response {
        match codec::to_response(&self) {
            Ok(response) => response.map(Body::from),
            Err(e) => {
                tracing::error!(
                    error_code = %self.error_code,
                    error_instance_id = %self.error_instance_id,
                    "failed to encode error response: {e}"
                );
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, http::header};

    use super::*;
    use crate::{ErrorType, codec::CONTENT_TYPE_JSON};

    #[tokio::test]
    async fn into_response_writes_envelope() {
        let error = SerializableError::new(&ErrorType::DEFAULT_NOT_FOUND).with_parameter("id", "42");

        let response = error.clone().into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[header::CONTENT_TYPE], CONTENT_TYPE_JSON);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(codec::from_body(StatusCode::NOT_FOUND, &body).unwrap(), error);
    }
}

use bytes::Bytes;
use http::{HeaderMap, HeaderValue, Response, StatusCode, header};

use super::{CONTENT_TYPE_JSON, EncodeError};
use crate::SerializableError;

/// Sink for a single HTTP response
///
/// The head (status and headers) is committed once; the body follows it.
pub trait ResponseWriter {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Commit the status line and headers
    fn write_head(&mut self, status: StatusCode, headers: &HeaderMap) -> Result<(), Self::Error>;

    /// Append to the response body
    fn write_body(&mut self, body: &[u8]) -> Result<(), Self::Error>;
}

/// Serialize the four-key JSON envelope
pub fn to_body(error: &SerializableError) -> Result<Bytes, EncodeError> {
    Ok(Bytes::from(serde_json::to_vec(error)?))
}

/// Build a complete HTTP response for `error`
pub fn to_response(error: &SerializableError) -> Result<Response<Bytes>, EncodeError> {
    let body = to_body(error)?;

    let mut response = Response::new(body);
    *response.status_mut() = error.status_code();
    *response.headers_mut() = error_headers();

    Ok(response)
}

/// Write `error` to `writer` as head then body
///
/// Serialization happens before anything is written, so a failure leaves the
/// writer untouched.
pub fn write_error_response<W>(writer: &mut W, error: &SerializableError) -> Result<(), EncodeError>
where
    W: ResponseWriter,
{
    let body = to_body(error)?;
    let status = error.status_code();

    tracing::debug!(
        status = status.as_u16(),
        error_code = %error.error_code,
        error_name = %error.error_name,
        error_instance_id = %error.error_instance_id,
        "writing error response"
    );

    writer
        .write_head(status, &error_headers())
        .map_err(|e| EncodeError::Write(Box::new(e)))?;

    writer.write_body(&body).map_err(|e| EncodeError::Write(Box::new(e)))
}

fn error_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(1);
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
    headers
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use uuid::Uuid;

    use super::*;
    use crate::{ErrorCode, ErrorType, Parameters, ResponseRecorder};

    #[test]
    fn response_status_follows_every_code() {
        for code in ErrorCode::all() {
            let error = SerializableError {
                error_code: code,
                error_name: "MyApplication:Failure".to_owned(),
                error_instance_id: Uuid::new_v4(),
                parameters: Parameters::new(),
            };

            let response = to_response(&error).unwrap();

            assert_eq!(response.status(), code.status_code(), "{code}");
            assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json; charset=utf-8");
        }
    }

    #[test]
    fn timeout_envelope_shape() {
        let instance_id = Uuid::new_v4();
        let error = SerializableError {
            error_code: ErrorCode::Timeout,
            error_name: "MyApplication:Timeout".to_owned(),
            error_instance_id: instance_id,
            parameters: Parameters::from_json_str(
                r#"{
    "metadata": {
      "keyB": 4
    }
  }"#,
            )
            .unwrap(),
        };

        let body: Value = serde_json::from_slice(&to_body(&error).unwrap()).unwrap();

        assert_eq!(
            body,
            json!({
                "errorCode": "TIMEOUT",
                "errorName": "MyApplication:Timeout",
                "errorInstanceId": instance_id.to_string(),
                "parameters": {
                    "metadata": {
                        "keyB": 4
                    }
                }
            })
        );
    }

    #[test]
    fn empty_parameters_encode_as_object() {
        let error = SerializableError::new(&ErrorType::DEFAULT_CONFLICT);
        let body: Value = serde_json::from_slice(&to_body(&error).unwrap()).unwrap();

        assert_eq!(body["parameters"], json!({}));
    }

    #[test]
    fn body_keys_keep_envelope_order() {
        let error = SerializableError::new(&ErrorType::DEFAULT_NOT_FOUND);
        let body = String::from_utf8(to_body(&error).unwrap().to_vec()).unwrap();

        let positions: Vec<usize> = ["\"errorCode\"", "\"errorName\"", "\"errorInstanceId\"", "\"parameters\""]
            .iter()
            .map(|key| body.find(key).unwrap())
            .collect();

        assert!(positions.is_sorted(), "{body}");
    }

    #[test]
    fn writer_receives_head_then_body() {
        let error = SerializableError::new(&ErrorType::DEFAULT_PERMISSION_DENIED);
        let mut recorder = ResponseRecorder::new();

        write_error_response(&mut recorder, &error).unwrap();

        let response = recorder.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(response.headers()[header::CONTENT_TYPE], CONTENT_TYPE_JSON);
        assert_eq!(response.body(), &to_body(&error).unwrap());
    }

    #[test]
    fn second_write_is_rejected() {
        let error = SerializableError::new(&ErrorType::DEFAULT_INTERNAL);
        let mut recorder = ResponseRecorder::new();

        write_error_response(&mut recorder, &error).unwrap();
        let err = write_error_response(&mut recorder, &error).unwrap_err();

        assert!(matches!(err, EncodeError::Write(_)));
        assert_eq!(recorder.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

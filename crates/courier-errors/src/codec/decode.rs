use bytes::Bytes;
use http::{HeaderMap, Response, StatusCode, header};
use serde::Deserialize;
use uuid::Uuid;

use super::DecodeError;
use crate::{ErrorCode, Parameters, SerializableError};

/// Source of a single received HTTP response
pub trait ResponseReader {
    fn status(&self) -> StatusCode;

    fn headers(&self) -> &HeaderMap;

    /// Read the complete body
    fn read_body(&mut self) -> std::io::Result<Bytes>;
}

impl<B> ResponseReader for Response<B>
where
    B: AsRef<[u8]>,
{
    fn status(&self) -> StatusCode {
        self.status()
    }

    fn headers(&self) -> &HeaderMap {
        self.headers()
    }

    fn read_body(&mut self) -> std::io::Result<Bytes> {
        Ok(Bytes::copy_from_slice(self.body().as_ref()))
    }
}

/// Envelope as read off the wire, before the code is resolved
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    error_code: String,
    error_name: String,
    error_instance_id: Uuid,
    #[serde(default)]
    parameters: Parameters,
}

/// Reconstruct the structured error carried by `response`
pub fn error_from_response<R>(response: &mut R) -> Result<SerializableError, DecodeError>
where
    R: ResponseReader,
{
    let status = response.status();
    check_content_type(status, response.headers())?;

    let body = response.read_body()?;
    from_body(status, &body)
}

/// Reconstruct the structured error carried by a `reqwest` response
#[cfg(feature = "reqwest")]
pub async fn error_from_reqwest_response(response: reqwest::Response) -> Result<SerializableError, DecodeError> {
    let status = response.status();
    check_content_type(status, response.headers())?;

    let body = response.bytes().await?;
    from_body(status, &body)
}

/// Parse an error envelope received with `status`
///
/// The status is only used for reporting; the decoded error code is never
/// replaced by one derived from it. A missing or `null` `parameters` key is
/// accepted and decodes as empty parameters.
pub fn from_body(status: StatusCode, body: &[u8]) -> Result<SerializableError, DecodeError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(DecodeError::EmptyBody { status });
    }

    let envelope: Envelope =
        serde_json::from_slice(body).map_err(|source| DecodeError::Malformed { status, source })?;

    let error_code: ErrorCode = envelope
        .error_code
        .parse()
        .map_err(|_| DecodeError::UnknownErrorCode {
            status,
            code: envelope.error_code.clone(),
        })?;

    if error_code.status_code() != status {
        tracing::debug!(
            status = status.as_u16(),
            expected_status = error_code.status_code().as_u16(),
            error_code = %error_code,
            "response status does not match decoded error code"
        );
    }

    Ok(SerializableError {
        error_code,
        error_name: envelope.error_name,
        error_instance_id: envelope.error_instance_id,
        parameters: envelope.parameters,
    })
}

/// Reject responses that declare a non-JSON body; a missing header is allowed
fn check_content_type(status: StatusCode, headers: &HeaderMap) -> Result<(), DecodeError> {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return Ok(());
    };

    let content_type = String::from_utf8_lossy(value.as_bytes());
    let media_type = content_type.split(';').next().unwrap_or_default().trim();

    if media_type.eq_ignore_ascii_case("application/json") {
        Ok(())
    } else {
        Err(DecodeError::UnsupportedContentType {
            status,
            content_type: content_type.into_owned(),
        })
    }
}

use bytes::{Bytes, BytesMut};
use http::{HeaderMap, Response, StatusCode};

use super::ResponseWriter;

/// In-memory [`ResponseWriter`] that captures a single response
///
/// Useful for tests and for handing an encoded error to code that wants an
/// [`http::Response`].
#[derive(Debug, Default)]
pub struct ResponseRecorder {
    head: Option<(StatusCode, HeaderMap)>,
    body: BytesMut,
}

/// Misuse of a [`ResponseRecorder`]
#[derive(Debug, thiserror::Error)]
pub enum RecorderError {
    /// Status and headers were already committed
    #[error("response head already written with status {0}")]
    HeadAlreadyWritten(StatusCode),
}

impl ResponseRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status committed so far, if any
    pub fn status(&self) -> Option<StatusCode> {
        self.head.as_ref().map(|(status, _)| *status)
    }

    /// Whether the head has been committed
    pub const fn is_committed(&self) -> bool {
        self.head.is_some()
    }

    /// Finish recording
    ///
    /// A recorder that never had its head written yields `200 OK` with no
    /// headers, matching what an HTTP server sends for an untouched response.
    pub fn into_response(self) -> Response<Bytes> {
        let (status, headers) = self.head.unwrap_or_default();

        let mut response = Response::new(self.body.freeze());
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        response
    }
}

impl ResponseWriter for ResponseRecorder {
    type Error = RecorderError;

    fn write_head(&mut self, status: StatusCode, headers: &HeaderMap) -> Result<(), Self::Error> {
        if let Some((written, _)) = &self.head {
            return Err(RecorderError::HeadAlreadyWritten(*written));
        }

        self.head = Some((status, headers.clone()));
        Ok(())
    }

    fn write_body(&mut self, body: &[u8]) -> Result<(), Self::Error> {
        if self.head.is_none() {
            self.head = Some((StatusCode::OK, HeaderMap::new()));
        }

        self.body.extend_from_slice(body);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use http::{HeaderValue, header};

    use super::*;

    #[test]
    fn records_head_and_body_chunks() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        let mut recorder = ResponseRecorder::new();
        recorder.write_head(StatusCode::CONFLICT, &headers).unwrap();
        recorder.write_body(b"hello ").unwrap();
        recorder.write_body(b"world").unwrap();

        let response = recorder.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain");
        assert_eq!(response.body().as_ref(), b"hello world");
    }

    #[test]
    fn head_cannot_be_revised() {
        let mut recorder = ResponseRecorder::new();
        recorder.write_head(StatusCode::NOT_FOUND, &HeaderMap::new()).unwrap();

        let err = recorder.write_head(StatusCode::OK, &HeaderMap::new()).unwrap_err();
        assert!(matches!(err, RecorderError::HeadAlreadyWritten(status) if status == StatusCode::NOT_FOUND));
        assert_eq!(recorder.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn body_without_head_commits_ok() {
        let mut recorder = ResponseRecorder::new();
        assert!(!recorder.is_committed());

        recorder.write_body(b"{}").unwrap();
        assert_eq!(recorder.status(), Some(StatusCode::OK));

        assert!(recorder.write_head(StatusCode::BAD_REQUEST, &HeaderMap::new()).is_err());
    }

    #[test]
    fn untouched_recorder_is_empty_ok() {
        let response = ResponseRecorder::new().into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().is_empty());
        assert!(response.body().is_empty());
    }
}

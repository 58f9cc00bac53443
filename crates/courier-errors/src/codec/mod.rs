//! Conversion between [`SerializableError`](crate::SerializableError) and HTTP responses
//!
//! Encoding sets the status from the error code, always sends
//! `Content-Type: application/json; charset=utf-8`, and writes the four-key
//! JSON envelope. Decoding reverses this and reports malformed bodies as a
//! typed [`DecodeError`] rather than a partially populated value.

mod decode;
mod encode;
mod error;
mod recorder;

pub use decode::{ResponseReader, error_from_response, from_body};
#[cfg(feature = "reqwest")]
pub use decode::error_from_reqwest_response;
pub use encode::{ResponseWriter, to_body, to_response, write_error_response};
pub use error::{DecodeError, EncodeError};
pub use recorder::{RecorderError, ResponseRecorder};

/// Content type sent with every encoded error
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Structured error contract for RPC-style HTTP services
//!
//! A [`SerializableError`] carries a closed-set [`ErrorCode`], a namespaced
//! error name, a unique instance id, and free-form JSON [`Parameters`]. The
//! [`codec`] module writes it as an HTTP response and reads it back from one,
//! so error classification survives the network boundary.

pub mod code;
pub mod codec;
pub mod error_type;
pub mod parameters;
mod serializable;
mod service;

#[cfg(feature = "axum")]
mod into_response;

pub use code::{ErrorCode, UnknownErrorCode};
pub use codec::{DecodeError, EncodeError, ResponseReader, ResponseRecorder, ResponseWriter};
pub use error_type::{ErrorType, InvalidErrorName};
pub use parameters::{InvalidParameters, Parameters};
pub use serializable::SerializableError;
pub use service::ServiceError;

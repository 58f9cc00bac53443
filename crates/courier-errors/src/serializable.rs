use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{ErrorCode, ErrorType, Parameters};

/// Wire representation of an error exchanged between services
///
/// Serializes as the four-key envelope `errorCode`, `errorName`,
/// `errorInstanceId`, `parameters`, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
#[error("{error_code} {error_name} (instance {error_instance_id})")]
pub struct SerializableError {
    /// Classification that determines the HTTP status
    pub error_code: ErrorCode,
    /// Namespaced identity, e.g. `MyApplication:MissingData`
    pub error_name: String,
    /// Unique id for this occurrence of the error
    pub error_instance_id: Uuid,
    /// Error-specific context
    #[serde(default)]
    pub parameters: Parameters,
}

impl SerializableError {
    /// Create a new occurrence of `error_type` with a fresh instance id
    pub fn new(error_type: &ErrorType) -> Self {
        Self {
            error_code: error_type.code(),
            error_name: error_type.name().to_owned(),
            error_instance_id: Uuid::new_v4(),
            parameters: Parameters::new(),
        }
    }

    #[must_use]
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(key, value);
        self
    }

    #[must_use]
    pub const fn with_instance_id(mut self, error_instance_id: Uuid) -> Self {
        self.error_instance_id = error_instance_id;
        self
    }

    pub const fn status_code(&self) -> StatusCode {
        self.error_code.status_code()
    }

    /// The code and name pair, validated against the naming convention
    pub fn error_type(&self) -> Result<ErrorType, crate::InvalidErrorName> {
        ErrorType::new(self.error_code, self.error_name.clone())
    }
}

impl From<ErrorType> for SerializableError {
    fn from(error_type: ErrorType) -> Self {
        Self::new(&error_type)
    }
}

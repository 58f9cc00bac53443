use crate::{ErrorType, Parameters, SerializableError};

/// Trait for domain errors that are reported to remote callers
///
/// Implemented by each service's own error type. The service keeps its rich
/// internal error and only the type and parameters cross the wire; every
/// conversion mints a fresh instance id for log correlation.
pub trait ServiceError: std::error::Error {
    /// Code and namespaced name for this error
    fn error_type(&self) -> ErrorType;

    /// Context safe to expose to API consumers
    fn parameters(&self) -> Parameters {
        Parameters::new()
    }

    /// Build the wire representation of this occurrence
    fn to_serializable_error(&self) -> SerializableError {
        let error = SerializableError::new(&self.error_type()).with_parameters(self.parameters());

        tracing::debug!(
            error_code = %error.error_code,
            error_name = %error.error_name,
            error_instance_id = %error.error_instance_id,
            cause = %self,
            "service error converted for transport"
        );

        error
    }
}

use std::{borrow::Cow, fmt, sync::OnceLock};

use regex::Regex;

use crate::ErrorCode;

/// An error code paired with the namespaced name that identifies it
///
/// Names follow the `Namespace:Name` convention with both halves in
/// UpperCamelCase, e.g. `MyApplication:MissingData`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorType {
    code: ErrorCode,
    name: Cow<'static, str>,
}

/// Error name that does not follow the `Namespace:Name` convention
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid error name {0:?}: expected UpperCamelCase `Namespace:Name`")]
pub struct InvalidErrorName(pub String);

impl ErrorType {
    pub const DEFAULT_PERMISSION_DENIED: Self = Self::builtin(ErrorCode::PermissionDenied, "Default:PermissionDenied");
    pub const DEFAULT_INVALID_ARGUMENT: Self = Self::builtin(ErrorCode::InvalidArgument, "Default:InvalidArgument");
    pub const DEFAULT_NOT_FOUND: Self = Self::builtin(ErrorCode::NotFound, "Default:NotFound");
    pub const DEFAULT_CONFLICT: Self = Self::builtin(ErrorCode::Conflict, "Default:Conflict");
    pub const DEFAULT_REQUEST_ENTITY_TOO_LARGE: Self =
        Self::builtin(ErrorCode::RequestEntityTooLarge, "Default:RequestEntityTooLarge");
    pub const DEFAULT_FAILED_PRECONDITION: Self =
        Self::builtin(ErrorCode::FailedPrecondition, "Default:FailedPrecondition");
    pub const DEFAULT_INTERNAL: Self = Self::builtin(ErrorCode::Internal, "Default:Internal");
    pub const DEFAULT_TIMEOUT: Self = Self::builtin(ErrorCode::Timeout, "Default:Timeout");

    /// Create an error type, validating the name format
    pub fn new(code: ErrorCode, name: impl Into<String>) -> Result<Self, InvalidErrorName> {
        let name = name.into();

        if !is_valid_name(&name) {
            return Err(InvalidErrorName(name));
        }

        Ok(Self {
            code,
            name: Cow::Owned(name),
        })
    }

    const fn builtin(code: ErrorCode, name: &'static str) -> Self {
        Self {
            code,
            name: Cow::Borrowed(name),
        }
    }

    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace half of the name (before the colon)
    pub fn namespace(&self) -> &str {
        self.name.split_once(':').map_or(self.name.as_ref(), |(namespace, _)| namespace)
    }
}

impl ErrorCode {
    /// The built-in error type for this code, if it has a default name
    pub const fn default_error_type(self) -> Option<ErrorType> {
        match self.default_name() {
            Some(name) => Some(ErrorType::builtin(self, name)),
            None => None,
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// Check an error name against the `Namespace:Name` convention
pub fn is_valid_name(name: &str) -> bool {
    fn re() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^([A-Z][a-z0-9]+)+:([A-Z][a-z0-9]+)+$").expect("must be valid regex"))
    }

    re().is_match(name)
}

/// Check a namespace (the part before the colon) against the naming convention
pub fn is_valid_namespace(namespace: &str) -> bool {
    is_valid_name(&format!("{namespace}:Name"))
}

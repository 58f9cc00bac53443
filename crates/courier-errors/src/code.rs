use std::{fmt, str::FromStr};

use http::StatusCode;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

/// Closed set of error classifications shared by both sides of an RPC call
///
/// Each code maps to exactly one HTTP status. The two custom codes let an
/// application introduce its own error identity through the error name while
/// reusing a generic client or server status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Caller is not allowed to perform the operation
    PermissionDenied,
    /// Request was malformed or carried an invalid value
    InvalidArgument,
    /// Requested resource does not exist
    NotFound,
    /// Request conflicts with the current state of the resource
    Conflict,
    /// Request payload exceeds the accepted size
    RequestEntityTooLarge,
    /// System is not in a state required for the operation
    FailedPrecondition,
    /// Unexpected server-side failure
    Internal,
    /// Operation did not complete in time
    Timeout,
    /// Application-defined client error, identified by its error name
    CustomClient,
    /// Application-defined server error, identified by its error name
    CustomServer,
}

impl ErrorCode {
    /// HTTP status used when this code is written to a response
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::PermissionDenied => StatusCode::FORBIDDEN,
            Self::InvalidArgument | Self::CustomClient => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::RequestEntityTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::FailedPrecondition | Self::Internal | Self::CustomServer => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    /// Wire token, e.g. `NOT_FOUND`
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Namespaced name used when no application-specific name is given
    ///
    /// Custom codes have no default: their name is what gives them meaning.
    pub const fn default_name(self) -> Option<&'static str> {
        match self {
            Self::PermissionDenied => Some("Default:PermissionDenied"),
            Self::InvalidArgument => Some("Default:InvalidArgument"),
            Self::NotFound => Some("Default:NotFound"),
            Self::Conflict => Some("Default:Conflict"),
            Self::RequestEntityTooLarge => Some("Default:RequestEntityTooLarge"),
            Self::FailedPrecondition => Some("Default:FailedPrecondition"),
            Self::Internal => Some("Default:Internal"),
            Self::Timeout => Some("Default:Timeout"),
            Self::CustomClient | Self::CustomServer => None,
        }
    }

    /// Whether this is one of the two application-defined escape codes
    pub const fn is_custom(self) -> bool {
        matches!(self, Self::CustomClient | Self::CustomServer)
    }

    /// Whether the mapped status is in the 4xx range
    pub fn is_client_error(self) -> bool {
        self.status_code().is_client_error()
    }

    /// Iterate over every code in the registry
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A wire token that does not name any registered error code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown error code: {0:?}")]
pub struct UnknownErrorCode(pub String);

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    /// Parse a wire token, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownErrorCode(s.to_owned()))
    }
}

impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

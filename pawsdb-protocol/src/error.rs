//! Protocol error types and error codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Protocol-level errors raised while decoding envelopes and containers.
///
/// Validation failures are not errors: they are collected as data by
/// `pawsdb-core` so a caller can report every violation in one round trip.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("field '{field}' is not a valid {expected}")]
    FieldType {
        field: String,
        expected: &'static str,
    },

    #[error("unknown method: '{0}'")]
    UnknownMethod(String),
}

impl ProtocolError {
    /// Maps this error onto the stable wire error code.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ProtocolError::Json(_) => ErrorCode::InvalidValue,
            ProtocolError::FieldType { .. } => ErrorCode::InvalidValue,
            ProtocolError::UnknownMethod(_) => ErrorCode::Unimplemented,
        }
    }
}

/// Stable error codes returned in error responses.
///
/// These codes are part of the protocol contract and must remain stable
/// across versions. Code 301 is reserved for "unauthorized".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Protocol version mismatch between client and database.
    Version,
    /// The device or ruleset is not supported by this database.
    Unsupported,
    /// The requested method is not implemented.
    Unimplemented,
    /// The requested location is outside this database's coverage.
    OutsideCoverage,
    /// The database URI has changed; the client must re-discover.
    DatabaseChange,
    /// A required parameter is missing.
    Missing,
    /// A parameter value is invalid.
    InvalidValue,
    /// The device is not authorized to use this method.
    Unauthorized,
    /// The device has not completed registration.
    NotRegistered,
}

impl ErrorCode {
    /// Returns the numeric code carried on the wire.
    pub fn code(&self) -> i32 {
        match self {
            ErrorCode::Version => 101,
            ErrorCode::Unsupported => 102,
            ErrorCode::Unimplemented => 103,
            ErrorCode::OutsideCoverage => 104,
            ErrorCode::DatabaseChange => 105,
            ErrorCode::Missing => 201,
            ErrorCode::InvalidValue => 202,
            ErrorCode::Unauthorized => 301,
            ErrorCode::NotRegistered => 302,
        }
    }

    /// Looks up the code for a numeric wire value.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            101 => Some(ErrorCode::Version),
            102 => Some(ErrorCode::Unsupported),
            103 => Some(ErrorCode::Unimplemented),
            104 => Some(ErrorCode::OutsideCoverage),
            105 => Some(ErrorCode::DatabaseChange),
            201 => Some(ErrorCode::Missing),
            202 => Some(ErrorCode::InvalidValue),
            301 => Some(ErrorCode::Unauthorized),
            302 => Some(ErrorCode::NotRegistered),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Version => write!(f, "VERSION"),
            ErrorCode::Unsupported => write!(f, "UNSUPPORTED"),
            ErrorCode::Unimplemented => write!(f, "UNIMPLEMENTED"),
            ErrorCode::OutsideCoverage => write!(f, "OUTSIDE_COVERAGE"),
            ErrorCode::DatabaseChange => write!(f, "DATABASE_CHANGE"),
            ErrorCode::Missing => write!(f, "MISSING"),
            ErrorCode::InvalidValue => write!(f, "INVALID_VALUE"),
            ErrorCode::Unauthorized => write!(f, "UNAUTHORIZED"),
            ErrorCode::NotRegistered => write!(f, "NOT_REGISTERED"),
        }
    }
}

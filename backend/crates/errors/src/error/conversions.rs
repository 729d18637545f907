//! Error conversions - From implementations for common error types
//!
//! Each conversion keeps the source's description as the message and
//! picks the [`Kind`] it most likely means. The source itself is dropped.

use super::domain_error::Error;
use super::kind::Kind;
use super::options::Cause;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => Kind::NotFound,
            std::io::ErrorKind::InvalidInput | std::io::ErrorKind::InvalidData => {
                Kind::BadRequest
            }
            _ => Kind::Unexpected,
        };
        Error::new((Cause(err), kind))
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::new((Cause(err), Kind::Unexpected))
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::new((Cause(err), Kind::BadRequest))
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(err: std::num::ParseIntError) -> Self {
        Error::new((Cause(err), Kind::BadRequest))
    }
}

impl From<std::num::ParseFloatError> for Error {
    fn from(err: std::num::ParseFloatError) -> Self {
        Error::new((Cause(err), Kind::BadRequest))
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        let kind = if err.is_syntax() || err.is_data() || err.is_eof() {
            Kind::BadRequest
        } else {
            Kind::Unexpected
        };
        Error::new((Cause(err), kind))
    }
}

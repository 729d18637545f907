//! Error Kind - Classification of errors
//!
//! Defines the [`Kind`] enum whose discriminants are HTTP status codes.
//! The semantics are meant to hold in non-HTTP contexts as well (e.g. RPC).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Semantic classification of a domain error
///
/// Each variant's discriminant equals the HTTP status code it mirrors, so
/// `kind as u16` can be handed to an HTTP response directly.
///
/// ## Examples
/// ```rust
/// use domain_errors::error::kind::Kind;
///
/// let kind = Kind::NotFound;
/// assert_eq!(kind.status_code(), 404);
/// assert_eq!(kind.as_str(), "Not Found");
/// assert_eq!(Kind::default(), Kind::Unexpected);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u16)]
pub enum Kind {
    /// 400 - Bad Request: the caller or its input is at fault
    BadRequest = 400,
    /// 404 - Not Found: the referenced resource does not exist
    NotFound = 404,
    /// 500 - Internal Server Error: internal or unclassified fault
    #[default]
    Unexpected = 500,
}

/// Raised when an integer does not name a known [`Kind`] or
/// [`Severity`](super::severity::Severity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnknownClassification {
    #[error("unknown error kind code: {0}")]
    Kind(u16),

    #[error("unknown error severity level: {0}")]
    Severity(u8),
}

impl Kind {
    /// HTTP status code mirrored by this kind
    ///
    /// ## Examples
    /// ```rust
    /// use domain_errors::error::kind::Kind;
    /// assert_eq!(Kind::BadRequest.status_code(), 400);
    /// assert_eq!(Kind::Unexpected.status_code(), 500);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        *self as u16
    }

    /// Standard reason phrase of the mirrored status code
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Kind::BadRequest => "Bad Request",
            Kind::NotFound => "Not Found",
            Kind::Unexpected => "Internal Server Error",
        }
    }

    /// 5xx kinds. These are the ones worth recording server side.
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// 4xx kinds
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Kind::BadRequest | Kind::NotFound)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<u16> for Kind {
    type Error = UnknownClassification;

    fn try_from(code: u16) -> Result<Self, UnknownClassification> {
        match code {
            400 => Ok(Kind::BadRequest),
            404 => Ok(Kind::NotFound),
            500 => Ok(Kind::Unexpected),
            other => Err(UnknownClassification::Kind(other)),
        }
    }
}

impl From<Kind> for u16 {
    fn from(kind: Kind) -> Self {
        kind.status_code()
    }
}

impl Serialize for Kind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u16(self.status_code())
    }
}

impl<'de> Deserialize<'de> for Kind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = u16::deserialize(deserializer)?;
        Kind::try_from(code).map_err(serde::de::Error::custom)
    }
}

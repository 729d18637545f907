//! Error Severity - Operational criticality of errors
//!
//! Defines the [`Severity`] enum. Variants are ordered: a higher level is
//! more severe.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::kind::UnknownClassification;

/// How critical an error is considered by the system
///
/// Independent from [`Kind`](super::kind::Kind): a `NotFound` may be a
/// warning in one flow and critical in another.
///
/// ## Examples
/// ```rust
/// use domain_errors::error::severity::Severity;
///
/// assert!(Severity::Critical > Severity::Warning);
/// assert_eq!(Severity::default(), Severity::Error);
/// assert_eq!(Severity::Critical.level(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Severity {
    /// Not that important; should not impact the flow of the request
    Warning = 3,
    /// A common error
    #[default]
    Error = 4,
    /// Most of the time needs human intervention. Usually tied to an alert.
    Critical = 5,
}

impl Severity {
    #[inline]
    pub const fn level(&self) -> u8 {
        *self as u8
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
        }
    }

    /// Whether this severity calls for alerting
    #[inline]
    pub const fn is_critical(&self) -> bool {
        matches!(self, Severity::Critical)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<u8> for Severity {
    type Error = UnknownClassification;

    fn try_from(level: u8) -> Result<Self, UnknownClassification> {
        match level {
            3 => Ok(Severity::Warning),
            4 => Ok(Severity::Error),
            5 => Ok(Severity::Critical),
            other => Err(UnknownClassification::Severity(other)),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.level()
    }
}

impl Serialize for Severity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.level())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level = u8::deserialize(deserializer)?;
        Severity::try_from(level).map_err(serde::de::Error::custom)
    }
}

//! Classification of arbitrary errors
//!
//! [`kind`] and [`severity`] accept any error. A domain [`Error`] reports
//! its own classification, also when held in a `Box` or an `Arc`;
//! everything else falls back to `Kind::Unexpected` / `Severity::Error`, so
//! response mapping never has to type-check first.
//!
//! Error types of other crates implement [`Classify`] and go through
//! [`kind_of`] / [`severity_of`].

use std::error::Error as StdError;
use std::sync::Arc;

use super::domain_error::Error;
use super::kind::Kind;
use super::severity::Severity;

/// Something that can report a [`Kind`] and a [`Severity`]
///
/// The provided methods return the fallback classification, so an error
/// enum can opt in and override only what it knows about. Type-erased
/// errors (`dyn Error`) implement it by looking for a domain [`Error`].
///
/// ## Examples
/// ```rust
/// use domain_errors::{Classify, Kind, Severity, kind_of, severity_of};
///
/// #[derive(Debug)]
/// enum StoreError {
///     Missing,
/// }
///
/// impl Classify for StoreError {
///     fn kind(&self) -> Kind {
///         match self {
///             StoreError::Missing => Kind::NotFound,
///         }
///     }
/// }
///
/// assert_eq!(kind_of(&StoreError::Missing), Kind::NotFound);
/// assert_eq!(severity_of(&StoreError::Missing), Severity::Error);
/// ```
pub trait Classify {
    fn kind(&self) -> Kind {
        Kind::default()
    }

    fn severity(&self) -> Severity {
        Severity::default()
    }
}

impl Classify for Error {
    fn kind(&self) -> Kind {
        Error::kind(self)
    }

    fn severity(&self) -> Severity {
        Error::severity(self)
    }
}

impl Classify for dyn StdError + 'static {
    fn kind(&self) -> Kind {
        as_domain(self).map_or_else(Kind::default, Error::kind)
    }

    fn severity(&self) -> Severity {
        as_domain(self).map_or_else(Severity::default, Error::severity)
    }
}

impl Classify for dyn StdError + Send + Sync + 'static {
    fn kind(&self) -> Kind {
        kind(self)
    }

    fn severity(&self) -> Severity {
        severity(self)
    }
}

impl<C: Classify + ?Sized> Classify for Box<C> {
    fn kind(&self) -> Kind {
        (**self).kind()
    }

    fn severity(&self) -> Severity {
        (**self).severity()
    }
}

impl<C: Classify + ?Sized> Classify for Arc<C> {
    fn kind(&self) -> Kind {
        (**self).kind()
    }

    fn severity(&self) -> Severity {
        (**self).severity()
    }
}

fn as_domain<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a Error> {
    err.downcast_ref::<Error>()
        .or_else(|| err.downcast_ref::<Arc<Error>>().map(|e| &**e))
        .or_else(|| err.downcast_ref::<Box<Error>>().map(|e| &**e))
}

/// Kind of `err`, or `Kind::Unexpected` when it is not a domain error
///
/// ## Examples
/// ```rust
/// use domain_errors::error::{classify, domain_error::Error, kind::Kind};
///
/// let io_err = std::io::Error::new(std::io::ErrorKind::Other, "mock error");
/// assert_eq!(classify::kind(&io_err), Kind::Unexpected);
///
/// let err = Error::new(("mock error", Kind::BadRequest));
/// assert_eq!(classify::kind(&err), Kind::BadRequest);
/// ```
pub fn kind(err: &(dyn StdError + 'static)) -> Kind {
    Classify::kind(err)
}

/// Severity of `err`, or `Severity::Error` when it is not a domain error
///
/// ## Examples
/// ```rust
/// use domain_errors::error::{classify, domain_error::Error, severity::Severity};
///
/// let io_err = std::io::Error::new(std::io::ErrorKind::Other, "mock error");
/// assert_eq!(classify::severity(&io_err), Severity::Error);
///
/// let err = Error::new(("mock error", Severity::Critical));
/// assert_eq!(classify::severity(&err), Severity::Critical);
/// ```
pub fn severity(err: &(dyn StdError + 'static)) -> Severity {
    Classify::severity(err)
}

/// Kind of anything implementing [`Classify`]
#[inline]
pub fn kind_of<C: Classify + ?Sized>(value: &C) -> Kind {
    value.kind()
}

/// Severity of anything implementing [`Classify`]
#[inline]
pub fn severity_of<C: Classify + ?Sized>(value: &C) -> Severity {
    value.severity()
}

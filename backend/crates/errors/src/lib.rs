//! Domain Errors - A classified error type for services
//!
//! This crate provides one error value and the means to classify any error:
//! - [`Kind`]: what went wrong, aligned with HTTP status codes
//! - [`Severity`]: how critical it is
//! - [`Error`]: message + kind + severity, built from an unordered set of
//!   options
//! - [`kind()`] / [`severity()`]: classification of arbitrary errors with
//!   safe defaults
//!
//! Mapping a classification onto a transport response is left to callers.
//!
//! ## Examples
//! ```rust
//! use domain_errors::{domain_error, Kind, Severity};
//!
//! let err = domain_error!("Invalid email", Kind::BadRequest, Severity::Warning);
//! assert_eq!(domain_errors::kind(&err), Kind::BadRequest);
//! assert_eq!(err.to_string(), "Invalid email");
//! ```

pub mod error {
    pub mod classify;
    pub mod conversions;
    pub mod domain_error;
    pub mod kind;
    pub mod options;
    pub mod severity;
}

pub use error::classify::{Classify, kind, kind_of, severity, severity_of};
pub use error::domain_error::{
    DEFAULT_MESSAGE, DomainResult, Error, ErrorBuilder, OptionExt, ResultExt,
};
pub use error::kind::{Kind, UnknownClassification};
pub use error::options::{Cause, ErrorOption};
pub use error::severity::Severity;

/// Build a domain [`Error`] from any number of options, in order
///
/// Accepts everything [`ErrorOption`] is implemented for. With no
/// arguments it yields the default error.
///
/// ## Examples
/// ```rust
/// use domain_errors::{domain_error, Kind, Severity};
///
/// let err = domain_error!();
/// assert_eq!(err.message(), "Internal server error");
///
/// let err = domain_error!(Kind::BadRequest, Kind::NotFound, "missing");
/// assert_eq!(err.kind(), Kind::NotFound);
/// assert_eq!(err.severity(), Severity::Error);
/// ```
#[macro_export]
macro_rules! domain_error {
    () => {
        $crate::Error::default()
    };
    ($($option:expr),+ $(,)?) => {
        $crate::Error::builder()
            $(.with($option))+
            .build()
    };
}

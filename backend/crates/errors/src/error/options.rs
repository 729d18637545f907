//! Construction options - the closed set of values accepted by
//! [`Error::new`](super::domain_error::Error::new)
//!
//! Every option overwrites exactly one field of the error under
//! construction. Options are applied in the order given, so a later option
//! for the same field wins.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt::Display;

use super::domain_error::{Error, ErrorBuilder};
use super::kind::Kind;
use super::severity::Severity;

/// A value that can take part in building a domain [`Error`]
///
/// ## Accepted values
/// * [`Kind`] - sets the kind
/// * [`Severity`] - sets the severity
/// * `&str`, `String`, `Cow<'static, str>` - set the message
/// * [`Cause`], `&dyn Error`, `Box<dyn Error>`, `&Error` - set the message
///   from the error's description
/// * `Option<T>` - applies `T` when `Some`, ignored when `None`
/// * `()` - ignored
/// * tuples of up to eight options - applied left to right
///
/// ## Examples
/// ```rust
/// use domain_errors::error::{domain_error::Error, kind::Kind, severity::Severity};
///
/// let err = Error::new((Severity::Warning, "quota almost reached", Kind::BadRequest));
/// assert_eq!(err.kind(), Kind::BadRequest);
/// assert_eq!(err.severity(), Severity::Warning);
/// assert_eq!(err.message(), "quota almost reached");
/// ```
pub trait ErrorOption {
    /// Apply this option on top of `builder`
    fn apply(self, builder: ErrorBuilder) -> ErrorBuilder;
}

/// Wraps an underlying failure whose description becomes the message
///
/// Only the text is kept. The wrapped value is dropped once applied.
///
/// ## Examples
/// ```rust
/// use domain_errors::error::{domain_error::Error, kind::Kind, options::Cause};
///
/// let parse_err = "abc".parse::<u32>().unwrap_err();
/// let err = Error::new((Cause(parse_err), Kind::BadRequest));
/// assert_eq!(err.message(), "invalid digit found in string");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Cause<E>(pub E);

impl ErrorOption for Kind {
    fn apply(self, builder: ErrorBuilder) -> ErrorBuilder {
        builder.kind(self)
    }
}

impl ErrorOption for Severity {
    fn apply(self, builder: ErrorBuilder) -> ErrorBuilder {
        builder.severity(self)
    }
}

impl ErrorOption for &str {
    fn apply(self, builder: ErrorBuilder) -> ErrorBuilder {
        builder.message(self.to_owned())
    }
}

impl ErrorOption for String {
    fn apply(self, builder: ErrorBuilder) -> ErrorBuilder {
        builder.message(self)
    }
}

impl ErrorOption for Cow<'static, str> {
    fn apply(self, builder: ErrorBuilder) -> ErrorBuilder {
        builder.message(self)
    }
}

impl<E: Display> ErrorOption for Cause<E> {
    fn apply(self, builder: ErrorBuilder) -> ErrorBuilder {
        builder.cause(&self.0)
    }
}

impl ErrorOption for &(dyn StdError + '_) {
    fn apply(self, builder: ErrorBuilder) -> ErrorBuilder {
        builder.cause(self)
    }
}

impl ErrorOption for &(dyn StdError + Send + Sync + '_) {
    fn apply(self, builder: ErrorBuilder) -> ErrorBuilder {
        builder.cause(self)
    }
}

impl ErrorOption for Box<dyn StdError + '_> {
    fn apply(self, builder: ErrorBuilder) -> ErrorBuilder {
        builder.cause(self.as_ref())
    }
}

impl ErrorOption for Box<dyn StdError + Send + Sync + '_> {
    fn apply(self, builder: ErrorBuilder) -> ErrorBuilder {
        builder.cause(self.as_ref())
    }
}

// Another domain error contributes its message only.
impl ErrorOption for &Error {
    fn apply(self, builder: ErrorBuilder) -> ErrorBuilder {
        builder.message(self.message().to_owned())
    }
}

impl<T: ErrorOption> ErrorOption for Option<T> {
    fn apply(self, builder: ErrorBuilder) -> ErrorBuilder {
        match self {
            Some(option) => option.apply(builder),
            None => builder,
        }
    }
}

impl ErrorOption for () {
    fn apply(self, builder: ErrorBuilder) -> ErrorBuilder {
        builder
    }
}

macro_rules! impl_error_option_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: ErrorOption),+> ErrorOption for ($($name,)+) {
            #[allow(non_snake_case)]
            fn apply(self, builder: ErrorBuilder) -> ErrorBuilder {
                let ($($name,)+) = self;
                $(let builder = $name.apply(builder);)+
                builder
            }
        }
    };
}

impl_error_option_for_tuple!(A);
impl_error_option_for_tuple!(A, B);
impl_error_option_for_tuple!(A, B, C);
impl_error_option_for_tuple!(A, B, C, D);
impl_error_option_for_tuple!(A, B, C, D, E);
impl_error_option_for_tuple!(A, B, C, D, E, F);
impl_error_option_for_tuple!(A, B, C, D, E, F, G);
impl_error_option_for_tuple!(A, B, C, D, E, F, G, H);

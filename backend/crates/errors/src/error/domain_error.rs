//! Domain Error - The error type shared across services
//!
//! Defines the [`Error`] struct, its [`ErrorBuilder`] and the
//! [`DomainResult<T>`] type alias.

use std::borrow::Cow;
use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::kind::Kind;
use super::options::{Cause, ErrorOption};
use super::severity::Severity;

/// Message carried by an error built without one
pub const DEFAULT_MESSAGE: &str = "Internal server error";

/// Domain error
///
/// Immutable once built. Construct it with [`Error::new`], the
/// [`domain_error!`](crate::domain_error) macro or [`Error::builder`].
///
/// ## Fields
/// * `kind` - classification mirroring an HTTP status code (default `Unexpected`)
/// * `severity` - operational criticality (default `Error`)
/// * `message` - description returned by [`Error::message`] and `Display`
///
/// Only `kind` and `severity` are serialized; the message stays out of
/// structured output.
///
/// ## Examples
/// ```rust
/// use domain_errors::error::{domain_error::Error, kind::Kind};
///
/// let err = Error::new(("User not found", Kind::NotFound));
/// assert_eq!(err.to_string(), "User not found");
/// assert_eq!(err.status_code(), 404);
///
/// let json = serde_json::to_string(&err).unwrap();
/// assert_eq!(json, r#"{"kind":404,"severity":4}"#);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    kind: Kind,
    severity: Severity,
    message: Cow<'static, str>,
}

/// `Result<T, Error>` shorthand
///
/// ## Examples
/// ```rust
/// use domain_errors::error::domain_error::{DomainResult, Error};
///
/// fn find_user(id: u32) -> DomainResult<String> {
///     if id == 0 {
///         return Err(Error::not_found("User not found"));
///     }
///     Ok("Alice".to_string())
/// }
/// assert!(find_user(0).is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;

impl Error {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Build an error from defaults plus `options`, applied in order
    ///
    /// ## Arguments
    /// * `options` - any [`ErrorOption`]; use a tuple to pass several and
    ///   `()` to pass none
    ///
    /// ## Examples
    /// ```rust
    /// use domain_errors::error::{domain_error::Error, kind::Kind, severity::Severity};
    ///
    /// let err = Error::new(());
    /// assert_eq!(err.message(), "Internal server error");
    ///
    /// let err = Error::new((Kind::BadRequest, "Invalid email", Severity::Warning));
    /// assert_eq!(err.kind(), Kind::BadRequest);
    /// ```
    #[inline]
    pub fn new(options: impl ErrorOption) -> Self {
        Self::builder().with(options).build()
    }

    /// Start from the default error and set fields one by one
    #[inline]
    pub fn builder() -> ErrorBuilder {
        ErrorBuilder::default()
    }

    // ========================================================================
    // Convenience constructors
    // ========================================================================

    /// 400 Bad Request error
    #[inline]
    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::builder().kind(Kind::BadRequest).message(message).build()
    }

    /// 404 Not Found error
    #[inline]
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::builder().kind(Kind::NotFound).message(message).build()
    }

    /// 500 Internal Server Error
    #[inline]
    pub fn unexpected(message: impl Into<Cow<'static, str>>) -> Self {
        Self::builder().kind(Kind::Unexpected).message(message).build()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[inline]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// HTTP status code mirrored by the kind
    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    // ========================================================================
    // Logging
    // ========================================================================

    /// Log the error at the level its severity calls for
    #[cfg(feature = "tracing")]
    pub fn log(&self) {
        let kind = self.kind.status_code();
        let severity = self.severity.level();
        match self.severity {
            Severity::Warning => {
                tracing::warn!(kind, severity, detail = %self.message, "Domain warning");
            }
            Severity::Error => {
                tracing::error!(kind, severity, detail = %self.message, "Domain error");
            }
            Severity::Critical => {
                tracing::error!(
                    kind,
                    severity,
                    critical = true,
                    detail = %self.message,
                    "Critical domain error"
                );
            }
        }
    }
}

impl Default for Error {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("kind", &self.kind)
            .field("severity", &self.severity)
            .field("message", &self.message)
            .finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Error", 2)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("severity", &self.severity)?;
        state.end()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Field-by-field construction of an [`Error`]
///
/// Starts from the defaults; every setter overwrites the previous value.
///
/// ## Examples
/// ```rust
/// use domain_errors::error::{domain_error::Error, kind::Kind, severity::Severity};
///
/// let err = Error::builder()
///     .kind(Kind::NotFound)
///     .severity(Severity::Warning)
///     .message("Session not found")
///     .build();
/// assert_eq!(err.kind(), Kind::NotFound);
/// ```
#[derive(Debug, Clone)]
pub struct ErrorBuilder {
    kind: Kind,
    severity: Severity,
    message: Cow<'static, str>,
}

impl Default for ErrorBuilder {
    fn default() -> Self {
        Self {
            kind: Kind::default(),
            severity: Severity::default(),
            message: Cow::Borrowed(DEFAULT_MESSAGE),
        }
    }
}

impl ErrorBuilder {
    #[inline]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    #[inline]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[inline]
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Take the message from an underlying failure's description
    #[inline]
    pub fn cause<E: fmt::Display + ?Sized>(self, cause: &E) -> Self {
        self.message(cause.to_string())
    }

    /// Apply any [`ErrorOption`] (or tuple of them)
    #[inline]
    pub fn with(self, option: impl ErrorOption) -> Self {
        option.apply(self)
    }

    #[inline]
    pub fn build(self) -> Error {
        Error {
            kind: self.kind,
            severity: self.severity,
            message: self.message,
        }
    }
}

// ============================================================================
// Result extension traits
// ============================================================================

/// Turn any failing `Result` into a [`DomainResult`]
pub trait ResultExt<T, E> {
    /// The failure's description becomes the message, then `options`
    /// are applied on top
    fn map_domain_err(self, options: impl ErrorOption) -> DomainResult<T>
    where
        E: fmt::Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn map_domain_err(self, options: impl ErrorOption) -> DomainResult<T>
    where
        E: fmt::Display,
    {
        self.map_err(|e| Error::new((Cause(e), options)))
    }
}

/// Turn an `Option<T>` into a [`DomainResult`]
pub trait OptionExt<T> {
    /// Return an error built from `options` on `None`
    fn ok_or_domain_err(self, options: impl ErrorOption) -> DomainResult<T>;

    /// Return a 404 Not Found on `None`
    fn ok_or_not_found(self, message: impl Into<Cow<'static, str>>) -> DomainResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_domain_err(self, options: impl ErrorOption) -> DomainResult<T> {
        self.ok_or_else(|| Error::new(options))
    }

    fn ok_or_not_found(self, message: impl Into<Cow<'static, str>>) -> DomainResult<T> {
        self.ok_or_else(|| Error::not_found(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_error() {
        let err = Error::default();
        assert_eq!(err.kind(), Kind::Unexpected);
        assert_eq!(err.severity(), Severity::Error);
        assert_eq!(err.message(), DEFAULT_MESSAGE);
        assert_eq!(err, Error::new(()));
    }

    #[test]
    fn test_new_error() {
        let err = Error::new(("User not found", Kind::NotFound));
        assert_eq!(err.kind(), Kind::NotFound);
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message(), "User not found");
        assert_eq!(err.severity(), Severity::Error);
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(Error::bad_request("test").status_code(), 400);
        assert_eq!(Error::not_found("test").status_code(), 404);
        assert_eq!(Error::unexpected("test").status_code(), 500);
        assert_eq!(Error::not_found("test").severity(), Severity::Error);
    }

    #[test]
    fn test_builder_last_write_wins() {
        let err = Error::builder()
            .message("first")
            .kind(Kind::BadRequest)
            .message("second")
            .kind(Kind::NotFound)
            .build();
        assert_eq!(err.message(), "second");
        assert_eq!(err.kind(), Kind::NotFound);
    }

    #[test]
    fn test_display_is_message_only() {
        let err = Error::new(("Invalid email", Kind::BadRequest, Severity::Critical));
        assert_eq!(err.to_string(), "Invalid email");
    }

    #[test]
    fn test_has_no_source() {
        use std::error::Error as _;
        let err = Error::new(Cause(std::fmt::Error));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_serialize_omits_message() {
        let err = Error::new(("secret detail", Kind::BadRequest, Severity::Critical));
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value, serde_json::json!({ "kind": 400, "severity": 5 }));
    }

    #[test]
    fn test_result_ext() {
        let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        let err = result.map_domain_err(Kind::NotFound).unwrap_err();
        assert_eq!(err.kind(), Kind::NotFound);
        assert_eq!(err.message(), "no such file");

        let ok: Result<i32, std::io::Error> = Ok(7);
        assert_eq!(ok.map_domain_err(Kind::NotFound).unwrap(), 7);
    }

    #[test]
    fn test_result_ext_options_override_cause() {
        let result: Result<(), &str> = Err("raw failure");
        let err = result
            .map_domain_err(("Could not load profile", Severity::Warning))
            .unwrap_err();
        assert_eq!(err.message(), "Could not load profile");
        assert_eq!(err.severity(), Severity::Warning);
    }

    #[test]
    fn test_option_ext() {
        let none: Option<i32> = None;
        let err = none.ok_or_not_found("Item not found").unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message(), "Item not found");

        let none: Option<i32> = None;
        let err = none
            .ok_or_domain_err((Kind::BadRequest, Severity::Warning))
            .unwrap_err();
        assert_eq!(err.kind(), Kind::BadRequest);
        assert_eq!(err.message(), DEFAULT_MESSAGE);

        assert_eq!(Some(42).ok_or_not_found("Item not found").unwrap(), 42);
    }

    #[test]
    fn test_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<Error>();
    }
}

#[cfg(all(test, feature = "tracing"))]
mod log_tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing::Level;
    use tracing::field::{Field, Visit};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[derive(Debug, Default, Clone)]
    struct Captured {
        level: Option<Level>,
        kind: Option<u64>,
        severity: Option<u64>,
        critical: bool,
        detail: Option<String>,
    }

    struct CaptureVisitor<'a>(&'a mut Captured);

    impl Visit for CaptureVisitor<'_> {
        fn record_u64(&mut self, field: &Field, value: u64) {
            match field.name() {
                "kind" => self.0.kind = Some(value),
                "severity" => self.0.severity = Some(value),
                _ => {}
            }
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            if field.name() == "critical" {
                self.0.critical = value;
            }
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "detail" {
                self.0.detail = Some(format!("{value:?}"));
            }
        }
    }

    struct CaptureLayer(Arc<Mutex<Vec<Captured>>>);

    impl<S: tracing::Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut captured = Captured {
                level: Some(*event.metadata().level()),
                ..Default::default()
            };
            event.record(&mut CaptureVisitor(&mut captured));
            self.0.lock().unwrap().push(captured);
        }
    }

    fn capture(err: &Error) -> Vec<Captured> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(CaptureLayer(Arc::clone(&events)));
        tracing::subscriber::with_default(subscriber, || err.log());
        let captured = events.lock().unwrap().clone();
        captured
    }

    #[test]
    fn test_log_warning_at_warn_level() {
        let events = capture(&Error::new(("quota almost reached", Severity::Warning)));
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.level, Some(Level::WARN));
        assert_eq!(event.kind, Some(500));
        assert_eq!(event.severity, Some(3));
        assert!(!event.critical);
        assert_eq!(event.detail.as_deref(), Some("quota almost reached"));
    }

    #[test]
    fn test_log_error_at_error_level() {
        let events = capture(&Error::bad_request("Invalid email"));
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.level, Some(Level::ERROR));
        assert_eq!(event.kind, Some(400));
        assert_eq!(event.severity, Some(4));
        assert!(!event.critical);
    }

    #[test]
    fn test_log_critical_flags_event() {
        let events = capture(&Error::new(("ledger gone", Severity::Critical, Kind::NotFound)));
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.level, Some(Level::ERROR));
        assert_eq!(event.kind, Some(404));
        assert_eq!(event.severity, Some(5));
        assert!(event.critical);
        assert_eq!(event.detail.as_deref(), Some("ledger gone"));
    }
}

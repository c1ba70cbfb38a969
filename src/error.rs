use core::fmt;
use core::panic::Location;
use std::backtrace::Backtrace;

use thiserror::Error;

/// The kinds of [`Error`]. All of them are runtime errors: they describe a value that cannot be
/// represented, discovered while the program runs. Shape mismatches never show up here, they
/// are compile errors, so there is no design-time kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ErrorKind {
  /// A value does not fit in the destination shape after rescaling.
  Overflow,
  /// A float's magnitude exceeds the exponent range of the destination shape (or the float is
  /// not finite).
  OutOfRange,
  /// A negative value where an unsigned destination is required.
  Sign,
}

impl fmt::Display for ErrorKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      ErrorKind::Overflow => "overflow error",
      ErrorKind::OutOfRange => "out of range error",
      ErrorKind::Sign => "sign error",
    })
  }
}

/// The error raised by the checked conversions (only with `feature = "checked"`).
///
/// It carries its [`ErrorKind`], a message, the location that raised it, and a backtrace
/// captured at that point (empty unless enabled through `RUST_BACKTRACE`). More context can be
/// appended to the message with [`Error::context`], or with `write!`, since `Error` implements
/// [`fmt::Write`].
///
/// ```
/// # use static_float::{ErrorKind, Fixed};
/// # if static_float::CHECKED {
/// let e = Fixed::<1, 0, u8>::from_f64(-1.0).unwrap_err();
/// assert_eq!(e.kind(), ErrorKind::Sign);
/// let e = e.context(" (while reading the config)");
/// assert!(e.message().ends_with("(while reading the config)"));
/// # }
/// ```
#[derive(Error, Debug)]
#[error("{kind} at {location}: {message}")]
pub struct Error {
  kind: ErrorKind,
  message: String,
  location: &'static Location<'static>,
  backtrace: Trace,
}

/// A field of type `Backtrace` makes `thiserror` implement `Error::provide`, which is unstable.
type Trace = Backtrace;

/// Shorthand for results whose error is [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
  /// A new error, with an empty message, raised at the caller's location.
  #[track_caller]
  pub fn new(kind: ErrorKind) -> Self {
    let location = Location::caller();
    tracing::debug!(%kind, %location, "raising fixed-point error");
    Self {
      kind,
      message: String::new(),
      location,
      backtrace: Backtrace::capture(),
    }
  }

  /// Append `context` to the message.
  pub fn context(mut self, context: impl fmt::Display) -> Self {
    // Writing into a `String` cannot fail.
    let _ = fmt::Write::write_fmt(&mut self, format_args!("{context}"));
    self
  }

  pub fn kind(&self) -> ErrorKind {
    self.kind
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  /// Where the error was raised.
  pub fn location(&self) -> &'static Location<'static> {
    self.location
  }

  pub fn backtrace(&self) -> &Backtrace {
    &self.backtrace
  }
}

impl fmt::Write for Error {
  fn write_str(&mut self, s: &str) -> fmt::Result {
    self.message.push_str(s);
    Ok(())
  }
}

/// Build an [`Error`](crate::Error) of the given kind with a formatted message.
macro_rules! raise {
  ($kind:ident, $($arg:tt)*) => {
    crate::Error::new(crate::ErrorKind::$kind).context(format_args!($($arg)*))
  };
}

pub(crate) use raise;

//! The error raised by failed calls and accesses.
//!
//! Every fallible operation in this crate reports failure with the same
//! [`Error`] type. An [`Error`] is a small `Copy` value recording what went
//! wrong, as an [`ErrorKind`], and where, as the caller's source location.
//!
//! Before an [`Error`] is returned to the caller, it is handed to the
//! [failure hook](crate::hooks), if one is installed.

use core::panic::Location;

use crate::hooks;

/// The kind of failure an [`Error`] describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A [`FunctionWrapper`](crate::FunctionWrapper) was called while not
    /// bound to anything.
    Uninitialised,
    /// A [`MemberFunction`](crate::MemberFunction) bound to a method taking
    /// `&mut O` was called with a shared receiver.
    CallToNonConst,
    /// The value of an [`Expected`](crate::Expected) holding an error was
    /// requested, or the other way around.
    WrongAlternative,
}

impl ErrorKind {
    /// Returns a short, static description of the failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use stubcall::ErrorKind;
    ///
    /// assert_eq!(
    ///     ErrorKind::Uninitialised.as_str(),
    ///     "call through an uninitialised function wrapper"
    /// );
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Uninitialised => "call through an uninitialised function wrapper",
            ErrorKind::CallToNonConst => "shared call to a member function bound to a mutable method",
            ErrorKind::WrongAlternative => "access to the inactive alternative of an expected",
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed call or access, together with the location it happened at.
///
/// # Examples
///
/// ```
/// use stubcall::{ErrorKind, FunctionWrapper};
///
/// let unbound = FunctionWrapper::<fn(u8) -> u8>::new();
/// let error = unbound.call(1).unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::Uninitialised);
/// assert_eq!(error.location().file(), file!());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Error {
    kind: ErrorKind,
    location: &'static Location<'static>,
}

impl Error {
    /// Creates an error of the given kind, located at the caller.
    ///
    /// The failure hook is not run for errors created this way.
    #[track_caller]
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            location: Location::caller(),
        }
    }

    /// Creates an error located at the caller and hands it to the failure
    /// hook before returning it.
    #[track_caller]
    pub(crate) fn signal(kind: ErrorKind) -> Self {
        let error = Self::new(kind);
        hooks::dispatch(error);
        error
    }

    /// Returns the kind of failure.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the source location of the failed call or access.
    #[inline]
    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Error")
            .field("kind", &self.kind)
            .field("location", &format_args!("{}", self.location))
            .finish()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} at {}", self.kind, self.location)
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use std::format;

    use super::*;

    #[test]
    fn test_error_records_caller() {
        let line = line!() + 1;
        let error = Error::new(ErrorKind::WrongAlternative);
        assert_eq!(error.kind(), ErrorKind::WrongAlternative);
        assert_eq!(error.location().file(), file!());
        assert_eq!(error.location().line(), line);
    }

    #[test]
    fn test_error_formatting() {
        let error = Error::new(ErrorKind::CallToNonConst);
        let location = error.location();
        assert_eq!(
            format!("{error}"),
            format!(
                "shared call to a member function bound to a mutable method at {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            )
        );
        let debug = format!("{error:?}");
        assert!(debug.starts_with("Error { kind: CallToNonConst, location: "));
    }

    #[test]
    fn test_error_is_small_and_copy() {
        static_assertions::assert_impl_all!(Error: Copy, Send, Sync, core::error::Error);
        assert_eq!(size_of::<Error>(), 2 * size_of::<usize>());
    }
}

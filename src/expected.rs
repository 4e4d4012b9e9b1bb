//! A value or an error, with checked accessors.
//!
//! [`Expected<T, E>`] holds exactly one of a value of type `T` or an error of
//! type `E`. It is a thin layer over [`Result`] that adds the
//! accessor-style interface of a two-alternative tagged union: the active
//! alternative can be queried by [`index`](Expected::index), read through
//! checked accessors, and replaced in place.
//!
//! Accessing the inactive alternative is reported as an [`Error`] of kind
//! [`ErrorKind::WrongAlternative`], after running the
//! [failure hook](crate::hooks).
//!
//! [`Unexpected<E>`] wraps an error so it can be converted into an
//! [`Expected`] without naming the value type.

use core::mem;

use crate::error::{Error, ErrorKind};

/// An error waiting to be placed into an [`Expected`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Unexpected<E> {
    error: E,
}

impl<E> Unexpected<E> {
    /// Wraps `error`.
    #[inline]
    pub const fn new(error: E) -> Self {
        Self { error }
    }

    /// Returns a reference to the error.
    #[inline]
    pub const fn error(&self) -> &E {
        &self.error
    }

    /// Returns a mutable reference to the error.
    #[inline]
    pub fn error_mut(&mut self) -> &mut E {
        &mut self.error
    }

    /// Unwraps the error.
    #[inline]
    pub fn into_error(self) -> E {
        self.error
    }

    /// Swaps the errors of `self` and `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.error, &mut other.error);
    }
}

/// Tag type selecting the error alternative in [`Expected::unexpect`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Unexpect;

/// The [`Unexpect`] tag value.
pub const UNEXPECT: Unexpect = Unexpect;

/// Either a value of type `T` or an error of type `E`.
///
/// `Expected<(), E>` holds either nothing or an error.
///
/// # Examples
///
/// ```
/// use stubcall::{ErrorKind, Expected, Unexpected};
///
/// let good: Expected<u32, &str> = Expected::new(7);
/// assert!(good.has_value());
/// assert_eq!(good.value(), Ok(&7));
///
/// let bad: Expected<u32, &str> = Unexpected::new("overflow").into();
/// assert_eq!(bad.index(), 1);
/// assert_eq!(bad.error(), Ok(&"overflow"));
/// assert_eq!(bad.value().unwrap_err().kind(), ErrorKind::WrongAlternative);
/// assert_eq!(bad.value_or(0), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Expected<T, E> {
    data: Result<T, E>,
}

impl<T, E> Expected<T, E> {
    /// Creates an instance holding `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { data: Ok(value) }
    }

    /// Creates an instance holding `error`.
    #[inline]
    pub const fn unexpect(_tag: Unexpect, error: E) -> Self {
        Self { data: Err(error) }
    }

    /// Returns `true` if a value is held.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.data.is_ok()
    }

    /// Returns the index of the active alternative: 0 for the value, 1 for the
    /// error.
    #[inline]
    pub const fn index(&self) -> usize {
        match &self.data {
            Ok(_) => 0,
            Err(_) => 1,
        }
    }

    /// Returns a reference to the value.
    ///
    /// Fails with [`ErrorKind::WrongAlternative`] if an error is held.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> Result<&T, Error> {
        match &self.data {
            Ok(value) => Ok(value),
            Err(_) => Err(Error::signal(ErrorKind::WrongAlternative)),
        }
    }

    /// Returns a mutable reference to the value.
    ///
    /// Fails with [`ErrorKind::WrongAlternative`] if an error is held.
    #[inline]
    #[track_caller]
    pub fn value_mut(&mut self) -> Result<&mut T, Error> {
        match &mut self.data {
            Ok(value) => Ok(value),
            Err(_) => Err(Error::signal(ErrorKind::WrongAlternative)),
        }
    }

    /// Takes the value out.
    ///
    /// Fails with [`ErrorKind::WrongAlternative`] if an error is held. The
    /// error is dropped in that case.
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> Result<T, Error> {
        match self.data {
            Ok(value) => Ok(value),
            Err(_) => Err(Error::signal(ErrorKind::WrongAlternative)),
        }
    }

    /// Returns a reference to the error.
    ///
    /// Fails with [`ErrorKind::WrongAlternative`] if a value is held.
    #[inline]
    #[track_caller]
    pub fn error(&self) -> Result<&E, Error> {
        match &self.data {
            Err(error) => Ok(error),
            Ok(_) => Err(Error::signal(ErrorKind::WrongAlternative)),
        }
    }

    /// Returns a mutable reference to the error.
    ///
    /// Fails with [`ErrorKind::WrongAlternative`] if a value is held.
    #[inline]
    #[track_caller]
    pub fn error_mut(&mut self) -> Result<&mut E, Error> {
        match &mut self.data {
            Err(error) => Ok(error),
            Ok(_) => Err(Error::signal(ErrorKind::WrongAlternative)),
        }
    }

    /// Takes the error out.
    ///
    /// Fails with [`ErrorKind::WrongAlternative`] if a value is held. The
    /// value is dropped in that case.
    #[inline]
    #[track_caller]
    pub fn into_error(self) -> Result<E, Error> {
        match self.data {
            Err(error) => Ok(error),
            Ok(_) => Err(Error::signal(ErrorKind::WrongAlternative)),
        }
    }

    /// Returns the value, or `default_value` if an error is held.
    #[inline]
    pub fn value_or(self, default_value: T) -> T {
        self.data.unwrap_or(default_value)
    }

    /// Replaces the content with `value`.
    #[inline]
    pub fn set_value(&mut self, value: T) {
        self.data = Ok(value);
    }

    /// Replaces the content with `error`.
    #[inline]
    pub fn set_error(&mut self, error: E) {
        self.data = Err(error);
    }

    /// Replaces the content with `value` and returns a mutable reference to
    /// it.
    #[inline]
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.data = Ok(value);
        // SAFETY: The value alternative was written on the line above
        unsafe { self.data.as_mut().unwrap_unchecked() }
    }

    /// Borrows the content as a [`Result`].
    #[inline]
    pub const fn as_result(&self) -> Result<&T, &E> {
        self.data.as_ref()
    }

    /// Converts into a [`Result`].
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.data
    }

    /// Swaps the contents of `self` and `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.data, &mut other.data);
    }
}

impl<T: Default, E> Default for Expected<T, E> {
    /// Holds the default value of `T`.
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T, E> From<Unexpected<E>> for Expected<T, E> {
    #[inline]
    fn from(unexpected: Unexpected<E>) -> Self {
        Self {
            data: Err(unexpected.error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Expected<T, E> {
    #[inline]
    fn from(data: Result<T, E>) -> Self {
        Self { data }
    }
}

impl<T, E> From<Expected<T, E>> for Result<T, E> {
    #[inline]
    fn from(expected: Expected<T, E>) -> Self {
        expected.data
    }
}

#[cfg(test)]
mod tests {
    use std::string::String;

    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum Fault {
        Timeout,
        Refused(u16),
    }

    type Response = Expected<String, Fault>;

    #[test]
    fn test_value_alternative() {
        let mut response = Response::new(String::from("ok"));
        assert!(response.has_value());
        assert_eq!(response.index(), 0);
        assert_eq!(response.value().map(String::as_str), Ok("ok"));
        assert_eq!(response.error().unwrap_err().kind(), ErrorKind::WrongAlternative);

        response.value_mut().unwrap().push('!');
        assert_eq!(response.as_result(), Ok(&String::from("ok!")));
        assert_eq!(response.into_value(), Ok(String::from("ok!")));
    }

    #[test]
    fn test_error_alternative() {
        let mut response: Response = Unexpected::new(Fault::Timeout).into();
        assert!(!response.has_value());
        assert_eq!(response.index(), 1);
        assert_eq!(response.error(), Ok(&Fault::Timeout));

        let line = line!() + 1;
        let error = response.value().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::WrongAlternative);
        assert_eq!(error.location().line(), line);

        *response.error_mut().unwrap() = Fault::Refused(7);
        assert_eq!(response.into_error(), Ok(Fault::Refused(7)));
    }

    #[test]
    fn test_unexpect_tag() {
        let tagged = Response::unexpect(UNEXPECT, Fault::Refused(1));
        let converted = Response::from(Unexpected::new(Fault::Refused(1)));
        assert_eq!(tagged, converted);
    }

    #[test]
    fn test_emplace_over_either_alternative() {
        let mut response = Response::unexpect(UNEXPECT, Fault::Refused(3));
        *response.emplace(String::from("first")) += "!";
        assert_eq!(response.as_result(), Ok(&String::from("first!")));

        let slot = response.emplace(String::from("second"));
        assert_eq!(slot.as_str(), "second");
        assert_eq!(response.index(), 0);
        assert_eq!(response.into_value(), Ok(String::from("second")));
    }

    #[test]
    fn test_mutation_switches_alternative() {
        let mut response = Response::default();
        assert_eq!(response.index(), 0);
        assert_eq!(response.value(), Ok(&String::new()));

        response.set_error(Fault::Timeout);
        assert_eq!(response.index(), 1);

        response.set_value(String::from("back"));
        assert_eq!(response.index(), 0);

        response.set_error(Fault::Timeout);
        let slot = response.emplace(String::from("placed"));
        slot.push('.');
        assert_eq!(response.index(), 0);
        assert_eq!(response.value_or(String::new()), "placed.");
    }

    #[test]
    fn test_value_or_and_results() {
        let good: Expected<u8, Fault> = Ok(3).into();
        let bad: Expected<u8, Fault> = Err(Fault::Timeout).into();
        assert_eq!(good.value_or(0), 3);
        assert_eq!(bad.as_result(), Err(&Fault::Timeout));
        assert_eq!(Result::<u8, Fault>::from(bad), Err(Fault::Timeout));
        assert_eq!(Expected::<u8, Fault>::new(5).into_result(), Ok(5));
    }

    #[test]
    fn test_swap() {
        let mut left = Response::new(String::from("left"));
        let mut right = Response::unexpect(UNEXPECT, Fault::Timeout);
        left.swap(&mut right);
        assert_eq!(left.error(), Ok(&Fault::Timeout));
        assert_eq!(right.value().map(String::as_str), Ok("left"));

        let mut a = Unexpected::new(1);
        let mut b = Unexpected::new(2);
        a.swap(&mut b);
        assert_eq!(*a.error(), 2);
        *b.error_mut() += 10;
        assert_eq!(b.into_error(), 11);
    }

    #[test]
    fn test_unit_value() {
        let done: Expected<(), Fault> = Expected::new(());
        assert!(done.has_value());
        assert_eq!(done.value(), Ok(&()));

        let failed: Expected<(), Fault> = Expected::unexpect(UNEXPECT, Fault::Refused(2));
        assert_eq!(failed.error(), Ok(&Fault::Refused(2)));
    }
}

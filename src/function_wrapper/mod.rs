//! A copyable, allocation-free reference to something callable.
//!
//! See [`FunctionWrapper`] for details.

mod arity;

use stubcall_internals::RawInvocation;

use crate::signature::Signature;

/// A type-erased reference to a function, method or functor with signature
/// `S`.
///
/// A `FunctionWrapper` is two machine words: the target and a stub that
/// knows how to call it. It never allocates and never uses a trait object.
/// Copying a wrapper copies the reference, never the target.
///
/// # Binding
///
/// | Constructor       | Target                                 | Lifetime `'a`         |
/// |-------------------|----------------------------------------|-----------------------|
/// | [`new`](Self::new), [`Default`] | nothing                  | any                   |
/// | `from_function`   | a plain function or non-capturing closure | any                |
/// | `from_fn`         | a borrowed `Fn` functor                | the borrow            |
/// | `from_fn_mut`     | a borrowed `FnMut` functor (`unsafe`)  | the borrow            |
///
/// Functors bound with `from_fn` or `from_fn_mut` must not be zero-sized.
/// A closure that captures nothing has no state to borrow and is rejected at
/// compile time; bind it with `from_function`, which accepts it as a plain
/// function.
///
/// The signature is checked at compile time. Methods are bound through the
/// [`Method`](crate::Method) and [`ConstMethod`](crate::ConstMethod)
/// signatures and take their receiver at call time, so one wrapper can be
/// called on many objects.
///
/// # Calling
///
/// - `call` returns [`Err`] with [`ErrorKind::Uninitialised`] when the wrapper
///   is unbound, after running the [failure hook](crate::hooks).
/// - `call_if` returns [`None`] when the wrapper is unbound.
/// - `call_or` calls an alternative with the same arguments when the wrapper
///   is unbound. The alternative never receives the receiver.
///
/// # Equality
///
/// Two wrappers are equal when both are unbound, or when they are bound the
/// same way to the same function or to the same functor object. Behaviour is
/// never compared: two distinct functors with identical bodies are different
/// objects and compare unequal. Distinct plain functions with identical
/// bodies may be merged by the compiler and then compare equal.
///
/// # Examples
///
/// ```
/// use stubcall::{ErrorKind, FunctionWrapper, Method};
///
/// fn double(value: u32) -> u32 {
///     value * 2
/// }
///
/// let wrapper = FunctionWrapper::<fn(u32) -> u32>::from_function(double);
/// assert_eq!(wrapper.call(21), Ok(42));
///
/// let offset = 5;
/// let add = move |value: u32| value + offset;
/// let wrapper = FunctionWrapper::<fn(u32) -> u32>::from_fn(&add);
/// assert_eq!(wrapper.call_if(1), Some(6));
///
/// let unbound = FunctionWrapper::<fn(u32) -> u32>::new();
/// assert_eq!(unbound.call(1).unwrap_err().kind(), ErrorKind::Uninitialised);
/// assert_eq!(unbound.call_or(|value| value + 100, 1), 101);
///
/// struct Counter(u32);
///
/// impl Counter {
///     fn bump(&mut self, by: u32) -> u32 {
///         self.0 += by;
///         self.0
///     }
/// }
///
/// let bump = FunctionWrapper::<Method<Counter, fn(u32) -> u32>>::from_function(Counter::bump);
/// let mut first = Counter(0);
/// let mut second = Counter(10);
/// assert_eq!(bump.call(&mut first, 1), Ok(1));
/// assert_eq!(bump.call(&mut second, 1), Ok(11));
/// ```
///
/// A method taking `&mut self` cannot be bound to a shared-receiver
/// signature:
///
/// ```compile_fail
/// use stubcall::{ConstMethod, FunctionWrapper};
///
/// struct Counter(u32);
///
/// impl Counter {
///     fn bump(&mut self) -> u32 {
///         self.0 += 1;
///         self.0
///     }
/// }
///
/// let _ = FunctionWrapper::<ConstMethod<Counter, fn() -> u32>>::from_function(Counter::bump);
/// ```
///
/// A closure without captures cannot be bound by reference:
///
/// ```compile_fail
/// use stubcall::FunctionWrapper;
///
/// let increment = |value: u32| value + 1;
/// let _ = FunctionWrapper::<fn(u32) -> u32>::from_fn(&increment);
/// ```
///
/// [`ErrorKind::Uninitialised`]: crate::ErrorKind::Uninitialised
pub struct FunctionWrapper<'a, S: Signature> {
    raw: RawInvocation<'a, S::Function, S::Stub>,
}

impl<'a, S: Signature> FunctionWrapper<'a, S> {
    /// Creates an unbound wrapper.
    #[inline]
    pub const fn new() -> Self {
        Self {
            raw: RawInvocation::new(),
        }
    }

    /// Returns `true` if the wrapper is bound to something callable.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.raw.is_valid()
    }

    /// Unbinds the wrapper.
    #[inline]
    pub fn reset(&mut self) {
        self.raw.reset();
    }
}

impl<S: Signature> Clone for FunctionWrapper<'_, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Signature> Copy for FunctionWrapper<'_, S> {}

impl<S: Signature> Default for FunctionWrapper<'_, S> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Signature> PartialEq for FunctionWrapper<'_, S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<S: Signature> Eq for FunctionWrapper<'_, S> {}

impl<S: Signature> core::fmt::Debug for FunctionWrapper<'_, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FunctionWrapper")
            .field("signature", &core::any::type_name::<S>())
            .field("raw", &self.raw)
            .finish()
    }
}

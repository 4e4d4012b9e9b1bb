//! A lenient method slot that never fails.
//!
//! See [`FunctionAlternates`] for details.

use core::marker::PhantomData;

use crate::{
    member_function::{Binding, FunctionType, same_binding},
    signature::MemberSignature,
};

/// One of two method alternatives of `O` with signature `S`, chosen at
/// construction.
///
/// This is the lenient counterpart of [`MemberFunction`]: it stores the same
/// three states, but only offers a call through an exclusive receiver, which
/// can run either alternative. Calling it never fails. When nothing is
/// bound, the call returns the default value it was given.
///
/// # Examples
///
/// ```
/// use stubcall::{FunctionAlternates, FunctionType};
///
/// struct Gauge {
///     level: i32,
/// }
///
/// impl Gauge {
///     fn raise(&mut self, by: i32) -> i32 {
///         self.level += by;
///         self.level
///     }
///
///     fn read(&self, offset: i32) -> i32 {
///         self.level + offset
///     }
/// }
///
/// type Action = FunctionAlternates<Gauge, fn(i32) -> i32>;
///
/// let mut gauge = Gauge { level: 1 };
/// assert_eq!(Action::from_non_const(Gauge::raise).call(&mut gauge, 2, 0), 3);
/// assert_eq!(Action::from_const(Gauge::read).call(&mut gauge, 1, 0), 4);
/// assert_eq!(Action::new().call(&mut gauge, 1, -1), -1);
/// assert_eq!(Action::new().function_type(), FunctionType::NoFunction);
/// ```
///
/// [`MemberFunction`]: crate::MemberFunction
pub struct FunctionAlternates<O, S: MemberSignature<O>> {
    binding: Binding<S::NonConst, S::Const>,
    _receiver: PhantomData<fn(&O)>,
}

impl<O, S: MemberSignature<O>> FunctionAlternates<O, S> {
    /// Creates an instance with neither alternative bound.
    #[inline]
    pub const fn new() -> Self {
        Self {
            binding: Binding::NoFunction,
            _receiver: PhantomData,
        }
    }

    /// Creates an instance bound to a method taking `&mut O`.
    #[inline]
    pub const fn from_non_const(function: S::NonConst) -> Self {
        Self {
            binding: Binding::NonConst(function),
            _receiver: PhantomData,
        }
    }

    /// Creates an instance bound to a method taking `&O`.
    #[inline]
    pub const fn from_const(function: S::Const) -> Self {
        Self {
            binding: Binding::Const(function),
            _receiver: PhantomData,
        }
    }

    /// Returns which alternative is bound.
    #[inline]
    pub const fn function_type(&self) -> FunctionType {
        self.binding.function_type()
    }

    /// Returns `true` if either alternative is bound.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        !matches!(self.binding, Binding::NoFunction)
    }
}

impl<O, S: MemberSignature<O>> Clone for FunctionAlternates<O, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<O, S: MemberSignature<O>> Copy for FunctionAlternates<O, S> {}

impl<O, S: MemberSignature<O>> Default for FunctionAlternates<O, S> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<O, S: MemberSignature<O>> PartialEq for FunctionAlternates<O, S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        same_binding::<O, S>(&self.binding, &other.binding)
    }
}

impl<O, S: MemberSignature<O>> Eq for FunctionAlternates<O, S> {}

impl<O, S: MemberSignature<O>> core::fmt::Debug for FunctionAlternates<O, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FunctionAlternates")
            .field("function_type", &self.function_type())
            .finish()
    }
}

macro_rules! impl_function_alternates {
    ($($arg:ident: $ty:ident),*) => {
        impl<O, R, $($ty,)*> FunctionAlternates<O, fn($($ty),*) -> R> {
            /// Calls the bound alternative on `receiver`, or returns
            /// `default_value` if neither is bound.
            ///
            /// For methods returning `()`, `call_unit`
            /// takes no default value.
            #[inline]
            pub fn call(&self, receiver: &mut O, $($arg: $ty,)* default_value: R) -> R {
                match self.binding {
                    Binding::NonConst(function) => function(receiver, $($arg),*),
                    Binding::Const(function) => function(receiver, $($arg),*),
                    Binding::NoFunction => default_value,
                }
            }
        }

        impl<O, $($ty,)*> FunctionAlternates<O, fn($($ty),*)> {
            /// Calls the bound alternative on `receiver`, or does nothing if
            /// neither is bound.
            ///
            /// Same as `call` with `()` as the default value.
            #[inline]
            pub fn call_unit(&self, receiver: &mut O, $($arg: $ty),*) {
                self.call(receiver, $($arg,)* ())
            }
        }
    };
}

for_each_arity!(impl_function_alternates);

//! Binding and calling, once per arity and receiver shape.

use stubcall_internals::RawInvocation;

use crate::{
    error::{Error, ErrorKind},
    function_wrapper::FunctionWrapper,
    signature::{ConstMethod, Method},
};

macro_rules! impl_function_wrapper {
    ($($arg:ident: $ty:ident),*) => {
        impl<'a, R, $($ty,)*> FunctionWrapper<'a, fn($($ty),*) -> R> {
            /// Creates a wrapper bound to a plain function.
            #[inline]
            pub const fn from_function(function: fn($($ty),*) -> R) -> Self {
                Self {
                    raw: RawInvocation::bind_function(function),
                }
            }

            /// Creates a wrapper bound to a borrowed functor.
            #[inline]
            pub fn from_fn<T>(functor: &'a T) -> Self
            where
                T: Fn($($ty),*) -> R,
            {
                Self {
                    raw: RawInvocation::bind_functor(functor),
                }
            }

            /// Creates a wrapper bound to a borrowed functor that mutates
            /// itself when called.
            ///
            /// # Safety
            ///
            /// The caller must ensure:
            ///
            /// 1. No call through the returned wrapper, or through any copy of
            ///    it, is started while another such call is still running. In
            ///    particular the functor must not call back into the wrapper.
            #[inline]
            pub unsafe fn from_fn_mut<T>(functor: &'a mut T) -> Self
            where
                T: FnMut($($ty),*) -> R,
            {
                // SAFETY:
                // 1. Guaranteed by the caller
                let raw = unsafe { RawInvocation::bind_functor_mut(functor) };
                Self { raw }
            }

            /// Calls the bound target.
            ///
            /// If the wrapper is unbound, the failure hook is run and
            /// [`ErrorKind::Uninitialised`] is returned.
            #[inline]
            #[track_caller]
            pub fn call(&self, $($arg: $ty),*) -> Result<R, Error> {
                match self.raw.invoke(($($arg,)*)) {
                    Ok(output) => Ok(output),
                    Err(_) => Err(Error::signal(ErrorKind::Uninitialised)),
                }
            }

            /// Calls the bound target, or returns [`None`] if the wrapper is
            /// unbound.
            #[inline]
            pub fn call_if(&self, $($arg: $ty),*) -> Option<R> {
                self.raw.invoke(($($arg,)*)).ok()
            }

            /// Calls the bound target, or `alternative` with the same
            /// arguments if the wrapper is unbound.
            #[inline]
            pub fn call_or<F>(&self, alternative: F, $($arg: $ty),*) -> R
            where
                F: FnOnce($($ty),*) -> R,
            {
                match self.raw.invoke(($($arg,)*)) {
                    Ok(output) => output,
                    Err(($($arg,)*)) => alternative($($arg),*),
                }
            }
        }

        impl<'a, R, $($ty,)*> From<fn($($ty),*) -> R> for FunctionWrapper<'a, fn($($ty),*) -> R> {
            #[inline]
            fn from(function: fn($($ty),*) -> R) -> Self {
                Self::from_function(function)
            }
        }

        impl<'a, O, R, $($ty,)*> FunctionWrapper<'a, Method<O, fn($($ty),*) -> R>> {
            /// Creates a wrapper bound to a method taking `&mut O`.
            #[inline]
            pub const fn from_function(function: fn(&mut O, $($ty),*) -> R) -> Self {
                Self {
                    raw: RawInvocation::bind_method(function),
                }
            }

            /// Creates a wrapper bound to a borrowed functor taking `&mut O`
            /// as its first argument.
            #[inline]
            pub fn from_fn<T>(functor: &'a T) -> Self
            where
                T: Fn(&mut O, $($ty),*) -> R,
            {
                Self {
                    raw: RawInvocation::bind_method_functor(functor),
                }
            }

            /// Creates a wrapper bound to a borrowed functor taking `&mut O`
            /// as its first argument that mutates itself when called.
            ///
            /// # Safety
            ///
            /// The caller must ensure:
            ///
            /// 1. No call through the returned wrapper, or through any copy of
            ///    it, is started while another such call is still running. In
            ///    particular the functor must not call back into the wrapper.
            #[inline]
            pub unsafe fn from_fn_mut<T>(functor: &'a mut T) -> Self
            where
                T: FnMut(&mut O, $($ty),*) -> R,
            {
                // SAFETY:
                // 1. Guaranteed by the caller
                let raw = unsafe { RawInvocation::bind_method_functor_mut(functor) };
                Self { raw }
            }

            /// Calls the bound target on `receiver`.
            ///
            /// If the wrapper is unbound, the failure hook is run and
            /// [`ErrorKind::Uninitialised`] is returned.
            #[inline]
            #[track_caller]
            pub fn call(&self, receiver: &mut O, $($arg: $ty),*) -> Result<R, Error> {
                match self.raw.invoke_method(receiver, ($($arg,)*)) {
                    Ok(output) => Ok(output),
                    Err(_) => Err(Error::signal(ErrorKind::Uninitialised)),
                }
            }

            /// Calls the bound target on `receiver`, or returns [`None`] if
            /// the wrapper is unbound.
            #[inline]
            pub fn call_if(&self, receiver: &mut O, $($arg: $ty),*) -> Option<R> {
                self.raw.invoke_method(receiver, ($($arg,)*)).ok()
            }

            /// Calls the bound target on `receiver`, or `alternative` with the
            /// remaining arguments if the wrapper is unbound.
            #[inline]
            pub fn call_or<F>(&self, alternative: F, receiver: &mut O, $($arg: $ty),*) -> R
            where
                F: FnOnce($($ty),*) -> R,
            {
                match self.raw.invoke_method(receiver, ($($arg,)*)) {
                    Ok(output) => output,
                    Err(($($arg,)*)) => alternative($($arg),*),
                }
            }
        }

        impl<'a, O, R, $($ty,)*> From<fn(&mut O, $($ty),*) -> R>
            for FunctionWrapper<'a, Method<O, fn($($ty),*) -> R>>
        {
            #[inline]
            fn from(function: fn(&mut O, $($ty),*) -> R) -> Self {
                Self::from_function(function)
            }
        }

        impl<'a, O, R, $($ty,)*> FunctionWrapper<'a, ConstMethod<O, fn($($ty),*) -> R>> {
            /// Creates a wrapper bound to a method taking `&O`.
            #[inline]
            pub const fn from_function(function: fn(&O, $($ty),*) -> R) -> Self {
                Self {
                    raw: RawInvocation::bind_const_method(function),
                }
            }

            /// Creates a wrapper bound to a borrowed functor taking `&O` as
            /// its first argument.
            #[inline]
            pub fn from_fn<T>(functor: &'a T) -> Self
            where
                T: Fn(&O, $($ty),*) -> R,
            {
                Self {
                    raw: RawInvocation::bind_const_method_functor(functor),
                }
            }

            /// Creates a wrapper bound to a borrowed functor taking `&O` as
            /// its first argument that mutates itself when called.
            ///
            /// # Safety
            ///
            /// The caller must ensure:
            ///
            /// 1. No call through the returned wrapper, or through any copy of
            ///    it, is started while another such call is still running. In
            ///    particular the functor must not call back into the wrapper.
            #[inline]
            pub unsafe fn from_fn_mut<T>(functor: &'a mut T) -> Self
            where
                T: FnMut(&O, $($ty),*) -> R,
            {
                // SAFETY:
                // 1. Guaranteed by the caller
                let raw = unsafe { RawInvocation::bind_const_method_functor_mut(functor) };
                Self { raw }
            }

            /// Calls the bound target on `receiver`.
            ///
            /// If the wrapper is unbound, the failure hook is run and
            /// [`ErrorKind::Uninitialised`] is returned.
            #[inline]
            #[track_caller]
            pub fn call(&self, receiver: &O, $($arg: $ty),*) -> Result<R, Error> {
                match self.raw.invoke_const_method(receiver, ($($arg,)*)) {
                    Ok(output) => Ok(output),
                    Err(_) => Err(Error::signal(ErrorKind::Uninitialised)),
                }
            }

            /// Calls the bound target on `receiver`, or returns [`None`] if
            /// the wrapper is unbound.
            #[inline]
            pub fn call_if(&self, receiver: &O, $($arg: $ty),*) -> Option<R> {
                self.raw.invoke_const_method(receiver, ($($arg,)*)).ok()
            }

            /// Calls the bound target on `receiver`, or `alternative` with the
            /// remaining arguments if the wrapper is unbound.
            #[inline]
            pub fn call_or<F>(&self, alternative: F, receiver: &O, $($arg: $ty),*) -> R
            where
                F: FnOnce($($ty),*) -> R,
            {
                match self.raw.invoke_const_method(receiver, ($($arg,)*)) {
                    Ok(output) => output,
                    Err(($($arg,)*)) => alternative($($arg),*),
                }
            }
        }

        impl<'a, O, R, $($ty,)*> From<fn(&O, $($ty),*) -> R>
            for FunctionWrapper<'a, ConstMethod<O, fn($($ty),*) -> R>>
        {
            #[inline]
            fn from(function: fn(&O, $($ty),*) -> R) -> Self {
                Self::from_function(function)
            }
        }
    };
}

for_each_arity!(impl_function_wrapper);

//! Tuple-splatting call traits.
//!
//! The stubs in [`invocation`] receive their arguments packed into a tuple so
//! that one generic function covers every arity. The traits in this module
//! unpack such a tuple and forward it to something callable.
//!
//! Each trait has a blanket implementation for every closure, function item
//! and function pointer of arity 0 through 8, so callers never implement them
//! by hand. They only appear as bounds.
//!
//! | Trait                | Callable shape              |
//! |----------------------|-----------------------------|
//! | [`Invoke`]           | `Fn(A..) -> R`              |
//! | [`InvokeMut`]        | `FnMut(A..) -> R`           |
//! | [`InvokeOn`]         | `Fn(&mut O, A..) -> R`      |
//! | [`InvokeOnMut`]      | `FnMut(&mut O, A..) -> R`   |
//! | [`InvokeOnConst`]    | `Fn(&O, A..) -> R`          |
//! | [`InvokeOnConstMut`] | `FnMut(&O, A..) -> R`       |
//!
//! [`invocation`]: crate::invocation

/// A callable that can be invoked through a shared reference with the
/// arguments packed in `Args`.
pub trait Invoke<Args> {
    /// The value returned by the call.
    type Output;

    /// Unpacks `args` and calls `self` with them.
    fn invoke(&self, args: Args) -> Self::Output;
}

/// A callable that needs exclusive access to itself to be invoked with the
/// arguments packed in `Args`.
pub trait InvokeMut<Args> {
    /// The value returned by the call.
    type Output;

    /// Unpacks `args` and calls `self` with them.
    fn invoke_mut(&mut self, args: Args) -> Self::Output;
}

/// A callable taking a leading `&mut O` receiver, invoked through a shared
/// reference.
pub trait InvokeOn<O, Args> {
    /// The value returned by the call.
    type Output;

    /// Calls `self` with `receiver` followed by the unpacked `args`.
    fn invoke_on(&self, receiver: &mut O, args: Args) -> Self::Output;
}

/// A callable taking a leading `&mut O` receiver that needs exclusive access
/// to itself.
pub trait InvokeOnMut<O, Args> {
    /// The value returned by the call.
    type Output;

    /// Calls `self` with `receiver` followed by the unpacked `args`.
    fn invoke_on_mut(&mut self, receiver: &mut O, args: Args) -> Self::Output;
}

/// A callable taking a leading `&O` receiver, invoked through a shared
/// reference.
pub trait InvokeOnConst<O, Args> {
    /// The value returned by the call.
    type Output;

    /// Calls `self` with `receiver` followed by the unpacked `args`.
    fn invoke_on_const(&self, receiver: &O, args: Args) -> Self::Output;
}

/// A callable taking a leading `&O` receiver that needs exclusive access to
/// itself.
pub trait InvokeOnConstMut<O, Args> {
    /// The value returned by the call.
    type Output;

    /// Calls `self` with `receiver` followed by the unpacked `args`.
    fn invoke_on_const_mut(&mut self, receiver: &O, args: Args) -> Self::Output;
}

/// Implements every trait in this module for one arity.
macro_rules! impl_invoke {
    ($($arg:ident: $ty:ident),*) => {
        impl<T, R, $($ty,)*> Invoke<($($ty,)*)> for T
        where
            T: ?Sized + Fn($($ty),*) -> R,
        {
            type Output = R;

            #[inline]
            fn invoke(&self, ($($arg,)*): ($($ty,)*)) -> R {
                self($($arg),*)
            }
        }

        impl<T, R, $($ty,)*> InvokeMut<($($ty,)*)> for T
        where
            T: ?Sized + FnMut($($ty),*) -> R,
        {
            type Output = R;

            #[inline]
            fn invoke_mut(&mut self, ($($arg,)*): ($($ty,)*)) -> R {
                self($($arg),*)
            }
        }

        impl<T, O, R, $($ty,)*> InvokeOn<O, ($($ty,)*)> for T
        where
            T: ?Sized + Fn(&mut O, $($ty),*) -> R,
        {
            type Output = R;

            #[inline]
            fn invoke_on(&self, receiver: &mut O, ($($arg,)*): ($($ty,)*)) -> R {
                self(receiver, $($arg),*)
            }
        }

        impl<T, O, R, $($ty,)*> InvokeOnMut<O, ($($ty,)*)> for T
        where
            T: ?Sized + FnMut(&mut O, $($ty),*) -> R,
        {
            type Output = R;

            #[inline]
            fn invoke_on_mut(&mut self, receiver: &mut O, ($($arg,)*): ($($ty,)*)) -> R {
                self(receiver, $($arg),*)
            }
        }

        impl<T, O, R, $($ty,)*> InvokeOnConst<O, ($($ty,)*)> for T
        where
            T: ?Sized + Fn(&O, $($ty),*) -> R,
        {
            type Output = R;

            #[inline]
            fn invoke_on_const(&self, receiver: &O, ($($arg,)*): ($($ty,)*)) -> R {
                self(receiver, $($arg),*)
            }
        }

        impl<T, O, R, $($ty,)*> InvokeOnConstMut<O, ($($ty,)*)> for T
        where
            T: ?Sized + FnMut(&O, $($ty),*) -> R,
        {
            type Output = R;

            #[inline]
            fn invoke_on_const_mut(&mut self, receiver: &O, ($($arg,)*): ($($ty,)*)) -> R {
                self(receiver, $($arg),*)
            }
        }
    };
}

impl_invoke!();
impl_invoke!(a1: A1);
impl_invoke!(a1: A1, a2: A2);
impl_invoke!(a1: A1, a2: A2, a3: A3);
impl_invoke!(a1: A1, a2: A2, a3: A3, a4: A4);
impl_invoke!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5);
impl_invoke!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6);
impl_invoke!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7);
impl_invoke!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8);

//! Call signatures as types.
//!
//! A [`FunctionWrapper`] is parameterized by the shape of the call it makes.
//! That shape is written as a type implementing [`Signature`]:
//!
//! | Signature type                  | Bindable targets                  | Call                          |
//! |---------------------------------|-----------------------------------|-------------------------------|
//! | `fn(A..) -> R`                  | `fn(A..) -> R`, `Fn(A..) -> R`    | `call(a..)`                   |
//! | `Method<O, fn(A..) -> R>`       | `fn(&mut O, A..) -> R` and alike  | `call(&mut receiver, a..)`    |
//! | `ConstMethod<O, fn(A..) -> R>`  | `fn(&O, A..) -> R` and alike      | `call(&receiver, a..)`        |
//!
//! Signatures with up to eight arguments are supported. Arguments of
//! reference type need a named lifetime, as in `fn(&'a str) -> usize`.
//!
//! [`MemberSignature`] plays the same role for [`MemberFunction`] and
//! [`FunctionAlternates`], where the receiver type is a separate parameter.
//!
//! [`FunctionWrapper`]: crate::FunctionWrapper
//! [`MemberFunction`]: crate::MemberFunction
//! [`FunctionAlternates`]: crate::FunctionAlternates

use core::marker::PhantomData;

use stubcall_internals::invocation::{ConstMethodStub, FunctionStub, MethodStub, StubPtr};

mod sealed {
    pub trait Sealed {}
}

/// Signature of a call through a method taking `&mut O` as its receiver.
///
/// `S` is the signature without the receiver, so `Method<Counter, fn(u32) -> u32>`
/// describes `fn(&mut Counter, u32) -> u32`. This type is never constructed.
pub struct Method<O, S>(PhantomData<(fn(&mut O), S)>);

/// Signature of a call through a method taking `&O` as its receiver.
///
/// `S` is the signature without the receiver, so
/// `ConstMethod<Counter, fn() -> u32>` describes `fn(&Counter) -> u32`. This
/// type is never constructed.
pub struct ConstMethod<O, S>(PhantomData<(fn(&O), S)>);

/// A call shape usable with [`FunctionWrapper`](crate::FunctionWrapper).
///
/// This trait is sealed. It is implemented for `fn(A..) -> R`,
/// [`Method<O, fn(A..) -> R>`](Method) and
/// [`ConstMethod<O, fn(A..) -> R>`](ConstMethod) with up to eight arguments.
pub trait Signature: sealed::Sealed {
    /// The function pointer type bound by `from_function`.
    type Function: Copy;
    /// The stub stored in the invocation record.
    #[doc(hidden)]
    type Stub: StubPtr;
    /// The value returned by a call.
    type Output;
}

/// A call shape usable with [`MemberFunction`](crate::MemberFunction) and
/// [`FunctionAlternates`](crate::FunctionAlternates).
///
/// This trait is sealed. It is implemented for `fn(A..) -> R` with up to
/// eight arguments, for every receiver type `O`.
pub trait MemberSignature<O>: sealed::Sealed {
    /// The method type taking an exclusive receiver, `fn(&mut O, A..) -> R`.
    type NonConst: Copy;
    /// The method type taking a shared receiver, `fn(&O, A..) -> R`.
    type Const: Copy;

    /// The code address of a method taking an exclusive receiver.
    #[doc(hidden)]
    fn non_const_address(function: Self::NonConst) -> *const ();

    /// The code address of a method taking a shared receiver.
    #[doc(hidden)]
    fn const_address(function: Self::Const) -> *const ();
}

macro_rules! impl_signature {
    ($($arg:ident: $ty:ident),*) => {
        impl<R, $($ty,)*> sealed::Sealed for fn($($ty),*) -> R {}

        impl<R, $($ty,)*> Signature for fn($($ty),*) -> R {
            type Function = fn($($ty),*) -> R;
            type Stub = FunctionStub<fn($($ty),*) -> R, ($($ty,)*), R>;
            type Output = R;
        }

        impl<O, R, $($ty,)*> sealed::Sealed for Method<O, fn($($ty),*) -> R> {}

        impl<O, R, $($ty,)*> Signature for Method<O, fn($($ty),*) -> R> {
            type Function = fn(&mut O, $($ty),*) -> R;
            type Stub = MethodStub<fn(&mut O, $($ty),*) -> R, O, ($($ty,)*), R>;
            type Output = R;
        }

        impl<O, R, $($ty,)*> sealed::Sealed for ConstMethod<O, fn($($ty),*) -> R> {}

        impl<O, R, $($ty,)*> Signature for ConstMethod<O, fn($($ty),*) -> R> {
            type Function = fn(&O, $($ty),*) -> R;
            type Stub = ConstMethodStub<fn(&O, $($ty),*) -> R, O, ($($ty,)*), R>;
            type Output = R;
        }

        impl<O, R, $($ty,)*> MemberSignature<O> for fn($($ty),*) -> R {
            type NonConst = fn(&mut O, $($ty),*) -> R;
            type Const = fn(&O, $($ty),*) -> R;

            #[inline]
            fn non_const_address(function: Self::NonConst) -> *const () {
                function as *const ()
            }

            #[inline]
            fn const_address(function: Self::Const) -> *const () {
                function as *const ()
            }
        }
    };
}

for_each_arity!(impl_signature);

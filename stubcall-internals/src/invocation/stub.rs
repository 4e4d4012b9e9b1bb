//! Trampolines that call back into an erased [`Payload`].
//!
//! Every stub in this module is a generic function whose monomorphization
//! knows exactly which field of the payload is live and, for functor stubs,
//! the concrete type of the functor. Storing a pointer to such an
//! instantiation next to a payload is what makes the pair callable again.
//!
//! The stubs come in three groups of three, one group per receiver shape:
//!
//! | Receiver | Function pointer  | `&T` functor                | `&mut T` functor                |
//! |----------|-------------------|-----------------------------|---------------------------------|
//! | none     | [`function_stub`] | [`functor_stub`]            | [`functor_mut_stub`]            |
//! | `&mut O` | [`method_stub`]   | [`functor_method_stub`]     | [`functor_mut_method_stub`]     |
//! | `&O`     | [`const_method_stub`] | [`functor_const_method_stub`] | [`functor_mut_const_method_stub`] |

use crate::{
    invocation::payload::Payload,
    invoke::{
        Invoke, InvokeMut, InvokeOn, InvokeOnConst, InvokeOnConstMut, InvokeOnMut,
    },
};

/// A stub for a record without a receiver.
pub type FunctionStub<F, Args, R> = unsafe fn(Payload<F>, Args) -> R;

/// A stub for a record called with a `&mut O` receiver.
pub type MethodStub<F, O, Args, R> = for<'r> unsafe fn(Payload<F>, &'r mut O, Args) -> R;

/// A stub for a record called with a `&O` receiver.
pub type ConstMethodStub<F, O, Args, R> = for<'r> unsafe fn(Payload<F>, &'r O, Args) -> R;

/// Function pointer types usable as the stub of a [`RawInvocation`].
///
/// [`RawInvocation`]: crate::invocation::RawInvocation
pub trait StubPtr: Copy {
    /// The code address of the stub.
    fn address(self) -> *const ();
}

impl<F: Copy, Args, R> StubPtr for FunctionStub<F, Args, R> {
    #[inline]
    fn address(self) -> *const () {
        self as *const ()
    }
}

impl<F: Copy, O, Args, R> StubPtr for MethodStub<F, O, Args, R> {
    #[inline]
    fn address(self) -> *const () {
        self as *const ()
    }
}

impl<F: Copy, O, Args, R> StubPtr for ConstMethodStub<F, O, Args, R> {
    #[inline]
    fn address(self) -> *const () {
        self as *const ()
    }
}

/// Calls the function pointer stored in `payload`.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. `payload` was created by [`Payload::from_function`].
pub unsafe fn function_stub<F, Args, R>(payload: Payload<F>, args: Args) -> R
where
    F: Copy + Invoke<Args, Output = R>,
{
    // SAFETY:
    // 1. Guaranteed by the caller
    let function = unsafe { payload.function() };
    function.invoke(args)
}

/// Calls the functor of type `T` that `payload` points at.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. `payload` was created by [`Payload::from_object`] with a `&T`.
/// 2. That borrow is still alive.
pub unsafe fn functor_stub<T, F, Args, R>(payload: Payload<F>, args: Args) -> R
where
    F: Copy,
    T: Invoke<Args, Output = R>,
{
    // SAFETY:
    // 1. Guaranteed by the caller
    // 2. Guaranteed by the caller
    // 3. The payload was created from a shared borrow, so no mutable
    //    reference to the functor exists while that borrow is alive
    let functor = unsafe { payload.object_ref::<T>() };
    functor.invoke(args)
}

/// Calls the functor of type `T` that `payload` points at, with exclusive
/// access to it.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. `payload` was created by [`Payload::from_object_mut`] with a `&mut T`.
/// 2. That borrow is still alive.
/// 3. No other call through a payload sharing that borrow is in progress.
pub unsafe fn functor_mut_stub<T, F, Args, R>(payload: Payload<F>, args: Args) -> R
where
    F: Copy,
    T: InvokeMut<Args, Output = R>,
{
    // SAFETY:
    // 1. Guaranteed by the caller
    // 2. Guaranteed by the caller
    // 3. Guaranteed by the caller
    let functor = unsafe { payload.object_mut::<T>() };
    functor.invoke_mut(args)
}

/// Calls the function pointer stored in `payload` on `receiver`.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. `payload` was created by [`Payload::from_function`].
pub unsafe fn method_stub<F, O, Args, R>(payload: Payload<F>, receiver: &mut O, args: Args) -> R
where
    F: Copy + InvokeOn<O, Args, Output = R>,
{
    // SAFETY:
    // 1. Guaranteed by the caller
    let function = unsafe { payload.function() };
    function.invoke_on(receiver, args)
}

/// Calls the functor of type `T` that `payload` points at on `receiver`.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. `payload` was created by [`Payload::from_object`] with a `&T`.
/// 2. That borrow is still alive.
pub unsafe fn functor_method_stub<T, F, O, Args, R>(
    payload: Payload<F>,
    receiver: &mut O,
    args: Args,
) -> R
where
    F: Copy,
    T: InvokeOn<O, Args, Output = R>,
{
    // SAFETY:
    // 1. Guaranteed by the caller
    // 2. Guaranteed by the caller
    // 3. The payload was created from a shared borrow
    let functor = unsafe { payload.object_ref::<T>() };
    functor.invoke_on(receiver, args)
}

/// Calls the functor of type `T` that `payload` points at on `receiver`, with
/// exclusive access to the functor.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. `payload` was created by [`Payload::from_object_mut`] with a `&mut T`.
/// 2. That borrow is still alive.
/// 3. No other call through a payload sharing that borrow is in progress.
pub unsafe fn functor_mut_method_stub<T, F, O, Args, R>(
    payload: Payload<F>,
    receiver: &mut O,
    args: Args,
) -> R
where
    F: Copy,
    T: InvokeOnMut<O, Args, Output = R>,
{
    // SAFETY:
    // 1. Guaranteed by the caller
    // 2. Guaranteed by the caller
    // 3. Guaranteed by the caller
    let functor = unsafe { payload.object_mut::<T>() };
    functor.invoke_on_mut(receiver, args)
}

/// Calls the function pointer stored in `payload` on a shared `receiver`.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. `payload` was created by [`Payload::from_function`].
pub unsafe fn const_method_stub<F, O, Args, R>(payload: Payload<F>, receiver: &O, args: Args) -> R
where
    F: Copy + InvokeOnConst<O, Args, Output = R>,
{
    // SAFETY:
    // 1. Guaranteed by the caller
    let function = unsafe { payload.function() };
    function.invoke_on_const(receiver, args)
}

/// Calls the functor of type `T` that `payload` points at on a shared
/// `receiver`.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. `payload` was created by [`Payload::from_object`] with a `&T`.
/// 2. That borrow is still alive.
pub unsafe fn functor_const_method_stub<T, F, O, Args, R>(
    payload: Payload<F>,
    receiver: &O,
    args: Args,
) -> R
where
    F: Copy,
    T: InvokeOnConst<O, Args, Output = R>,
{
    // SAFETY:
    // 1. Guaranteed by the caller
    // 2. Guaranteed by the caller
    // 3. The payload was created from a shared borrow
    let functor = unsafe { payload.object_ref::<T>() };
    functor.invoke_on_const(receiver, args)
}

/// Calls the functor of type `T` that `payload` points at on a shared
/// `receiver`, with exclusive access to the functor.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. `payload` was created by [`Payload::from_object_mut`] with a `&mut T`.
/// 2. That borrow is still alive.
/// 3. No other call through a payload sharing that borrow is in progress.
pub unsafe fn functor_mut_const_method_stub<T, F, O, Args, R>(
    payload: Payload<F>,
    receiver: &O,
    args: Args,
) -> R
where
    F: Copy,
    T: InvokeOnConstMut<O, Args, Output = R>,
{
    // SAFETY:
    // 1. Guaranteed by the caller
    // 2. Guaranteed by the caller
    // 3. Guaranteed by the caller
    let functor = unsafe { payload.object_mut::<T>() };
    functor.invoke_on_const_mut(receiver, args)
}

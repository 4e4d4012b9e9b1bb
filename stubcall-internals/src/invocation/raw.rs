//! The invocation record itself.
//!
//! This module encapsulates the `payload` and `stub` fields of
//! [`RawInvocation`], so the pairing between the two can only be established
//! by the constructors below.

use core::marker::PhantomData;

use crate::{
    invocation::{
        payload::Payload,
        stub::{
            ConstMethodStub, FunctionStub, MethodStub, StubPtr, const_method_stub,
            function_stub, functor_const_method_stub, functor_method_stub,
            functor_mut_const_method_stub, functor_mut_method_stub, functor_mut_stub,
            functor_stub, method_stub,
        },
    },
    invoke::{Invoke, InvokeMut, InvokeOn, InvokeOnConst, InvokeOnConstMut, InvokeOnMut},
    util::Erased,
};

/// A type-erased, copyable reference to something callable.
///
/// `F` is the function pointer type stored when binding a plain function, and
/// `S` is one of [`FunctionStub`], [`MethodStub`] or [`ConstMethodStub`]. The
/// lifetime `'a` is the lifetime of any borrowed functor.
///
/// A record without a stub is unbound: calling it hands the arguments back.
///
/// Functors bound by reference are never zero-sized, so two records compare
/// equal only if they point at the same functor object or the same function.
///
/// # Safety Invariant
///
/// If `stub` is `Some`, it was instantiated for the kind of payload stored in
/// `payload`, and any functor the payload points at is borrowed for `'a`.
#[derive(Clone, Copy)]
pub struct RawInvocation<'a, F: Copy, S: StubPtr> {
    /// The function pointer or erased functor pointer.
    payload: Payload<F>,
    /// The trampoline that knows how to call `payload`, if bound.
    stub: Option<S>,
    /// Ties the record to the borrow of its functor.
    _marker: PhantomData<&'a Erased>,
}

impl<'a, F: Copy, S: StubPtr> RawInvocation<'a, F, S> {
    /// Creates an unbound record.
    #[inline]
    pub const fn new() -> Self {
        Self {
            payload: Payload::empty(),
            stub: None,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the record is bound to something callable.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.stub.is_some()
    }

    /// Unbinds the record.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl<F: Copy, S: StubPtr> Default for RawInvocation<'_, F, S> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Copy, S: StubPtr> PartialEq for RawInvocation<'_, F, S> {
    /// Two records are equal when both are unbound, or when they use the same
    /// stub on the same function or the same functor object.
    ///
    /// Behaviour is never compared. Two distinct functors with the same
    /// behaviour are different records.
    fn eq(&self, other: &Self) -> bool {
        match (self.stub, other.stub) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => {
                lhs.address() == rhs.address() && self.payload.address() == other.payload.address()
            }
            _ => false,
        }
    }
}

impl<F: Copy, S: StubPtr> Eq for RawInvocation<'_, F, S> {}

impl<F: Copy, S: StubPtr> core::fmt::Debug for RawInvocation<'_, F, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.stub {
            Some(stub) => f
                .debug_struct("RawInvocation")
                .field("stub", &stub.address())
                .field("payload", &self.payload.address())
                .finish(),
            None => f.write_str("RawInvocation(unbound)"),
        }
    }
}

impl<'a, F, Args, R> RawInvocation<'a, F, FunctionStub<F, Args, R>>
where
    F: Copy + Invoke<Args, Output = R>,
{
    /// Binds a function pointer.
    #[inline]
    pub const fn bind_function(function: F) -> Self {
        Self {
            payload: Payload::from_function(function),
            stub: Some(function_stub::<F, Args, R>),
            _marker: PhantomData,
        }
    }

    /// Binds a functor that is called through a shared reference.
    ///
    /// `T` must not be zero-sized; bind such functors with
    /// [`bind_function`](Self::bind_function) instead.
    #[inline]
    pub fn bind_functor<T>(functor: &'a T) -> Self
    where
        T: Invoke<Args, Output = R>,
    {
        Self {
            payload: Payload::from_object(functor),
            stub: Some(functor_stub::<T, F, Args, R>),
            _marker: PhantomData,
        }
    }

    /// Binds a functor that needs exclusive access to itself when called.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. No call through the returned record, or through any copy of it, is
    ///    started while another such call is still running.
    #[inline]
    pub unsafe fn bind_functor_mut<T>(functor: &'a mut T) -> Self
    where
        T: InvokeMut<Args, Output = R>,
    {
        Self {
            payload: Payload::from_object_mut(functor),
            stub: Some(functor_mut_stub::<T, F, Args, R>),
            _marker: PhantomData,
        }
    }

    /// Calls the bound target, or hands `args` back if the record is unbound.
    #[inline]
    pub fn invoke(&self, args: Args) -> Result<R, Args> {
        match self.stub {
            Some(stub) => {
                // SAFETY: The stub was written together with the payload by one
                // of the constructors above, so its requirements are upheld:
                // 1. The payload is of the kind the stub expects
                // 2. Any functor is borrowed for `'a`, which outlives `self`
                // 3. Guaranteed by the caller of `bind_functor_mut`
                let output = unsafe { stub(self.payload, args) };
                Ok(output)
            }
            None => Err(args),
        }
    }
}

impl<'a, F, O, Args, R> RawInvocation<'a, F, MethodStub<F, O, Args, R>>
where
    F: Copy + InvokeOn<O, Args, Output = R>,
{
    /// Binds a function pointer taking a `&mut O` receiver.
    #[inline]
    pub const fn bind_method(function: F) -> Self {
        Self {
            payload: Payload::from_function(function),
            stub: Some(method_stub::<F, O, Args, R>),
            _marker: PhantomData,
        }
    }

    /// Binds a functor taking a `&mut O` receiver, called through a shared
    /// reference.
    #[inline]
    pub fn bind_method_functor<T>(functor: &'a T) -> Self
    where
        T: InvokeOn<O, Args, Output = R>,
    {
        Self {
            payload: Payload::from_object(functor),
            stub: Some(functor_method_stub::<T, F, O, Args, R>),
            _marker: PhantomData,
        }
    }

    /// Binds a functor taking a `&mut O` receiver that needs exclusive access
    /// to itself when called.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. No call through the returned record, or through any copy of it, is
    ///    started while another such call is still running.
    #[inline]
    pub unsafe fn bind_method_functor_mut<T>(functor: &'a mut T) -> Self
    where
        T: InvokeOnMut<O, Args, Output = R>,
    {
        Self {
            payload: Payload::from_object_mut(functor),
            stub: Some(functor_mut_method_stub::<T, F, O, Args, R>),
            _marker: PhantomData,
        }
    }

    /// Calls the bound target on `receiver`, or hands `args` back if the
    /// record is unbound.
    #[inline]
    pub fn invoke_method(&self, receiver: &mut O, args: Args) -> Result<R, Args> {
        match self.stub {
            Some(stub) => {
                // SAFETY: The stub was written together with the payload by one
                // of the constructors above, so its requirements are upheld:
                // 1. The payload is of the kind the stub expects
                // 2. Any functor is borrowed for `'a`, which outlives `self`
                // 3. Guaranteed by the caller of `bind_method_functor_mut`
                let output = unsafe { stub(self.payload, receiver, args) };
                Ok(output)
            }
            None => Err(args),
        }
    }
}

impl<'a, F, O, Args, R> RawInvocation<'a, F, ConstMethodStub<F, O, Args, R>>
where
    F: Copy + InvokeOnConst<O, Args, Output = R>,
{
    /// Binds a function pointer taking a `&O` receiver.
    #[inline]
    pub const fn bind_const_method(function: F) -> Self {
        Self {
            payload: Payload::from_function(function),
            stub: Some(const_method_stub::<F, O, Args, R>),
            _marker: PhantomData,
        }
    }

    /// Binds a functor taking a `&O` receiver, called through a shared
    /// reference.
    #[inline]
    pub fn bind_const_method_functor<T>(functor: &'a T) -> Self
    where
        T: InvokeOnConst<O, Args, Output = R>,
    {
        Self {
            payload: Payload::from_object(functor),
            stub: Some(functor_const_method_stub::<T, F, O, Args, R>),
            _marker: PhantomData,
        }
    }

    /// Binds a functor taking a `&O` receiver that needs exclusive access to
    /// itself when called.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. No call through the returned record, or through any copy of it, is
    ///    started while another such call is still running.
    #[inline]
    pub unsafe fn bind_const_method_functor_mut<T>(functor: &'a mut T) -> Self
    where
        T: InvokeOnConstMut<O, Args, Output = R>,
    {
        Self {
            payload: Payload::from_object_mut(functor),
            stub: Some(functor_mut_const_method_stub::<T, F, O, Args, R>),
            _marker: PhantomData,
        }
    }

    /// Calls the bound target on `receiver`, or hands `args` back if the
    /// record is unbound.
    #[inline]
    pub fn invoke_const_method(&self, receiver: &O, args: Args) -> Result<R, Args> {
        match self.stub {
            Some(stub) => {
                // SAFETY: The stub was written together with the payload by one
                // of the constructors above, so its requirements are upheld:
                // 1. The payload is of the kind the stub expects
                // 2. Any functor is borrowed for `'a`, which outlives `self`
                // 3. Guaranteed by the caller of `bind_const_method_functor_mut`
                let output = unsafe { stub(self.payload, receiver, args) };
                Ok(output)
            }
            None => Err(args),
        }
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;

    type Unary<'a> = RawInvocation<'a, fn(i32) -> i32, FunctionStub<fn(i32) -> i32, (i32,), i32>>;
    type OnCounter<'a> = RawInvocation<
        'a,
        fn(&mut u32, u32) -> u32,
        MethodStub<fn(&mut u32, u32) -> u32, u32, (u32,), u32>,
    >;

    fn double(value: i32) -> i32 {
        value * 2
    }

    fn triple(value: i32) -> i32 {
        value * 3
    }

    fn bump(counter: &mut u32, by: u32) -> u32 {
        *counter += by;
        *counter
    }

    #[test]
    fn test_record_sizes() {
        assert_eq!(size_of::<Unary<'static>>(), 2 * size_of::<usize>());
        assert_eq!(size_of::<OnCounter<'static>>(), 2 * size_of::<usize>());
        assert_eq!(size_of::<Payload<fn(i32) -> i32>>(), size_of::<usize>());
    }

    #[test]
    fn test_record_is_not_send_or_sync() {
        static_assertions::assert_not_impl_any!(Unary<'static>: Send, Sync);
        static_assertions::assert_not_impl_any!(OnCounter<'static>: Send, Sync);
    }

    #[test]
    fn test_unbound_hands_arguments_back() {
        let record = Unary::new();
        assert!(!record.is_valid());
        assert_eq!(record.invoke((5,)), Err((5,)));
        assert_eq!(record, Unary::default());
    }

    #[test]
    fn test_bound_function() {
        let record = Unary::bind_function(double);
        assert!(record.is_valid());
        assert_eq!(record.invoke((5,)), Ok(10));

        let mut copy = record;
        assert_eq!(copy, record);
        copy.reset();
        assert!(!copy.is_valid());
        assert_ne!(copy, record);
    }

    #[test]
    fn test_function_equality() {
        assert_eq!(Unary::bind_function(double), Unary::bind_function(double));
        assert_ne!(Unary::bind_function(double), Unary::bind_function(triple));
        assert_ne!(Unary::bind_function(double), Unary::new());
    }

    #[test]
    fn test_functor_equality_is_by_object() {
        let offset = 1;
        let first = move |value: i32| value + offset;
        let second = move |value: i32| value + offset;

        let a = Unary::bind_functor(&first);
        let b = Unary::bind_functor(&first);
        let c = Unary::bind_functor(&second);
        assert_eq!(a.invoke((1,)), Ok(2));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Unary::bind_function(double));
    }

    #[test]
    fn test_functor_mut() {
        let mut calls = 0;
        let mut counting = |value: i32| {
            calls += 1;
            value
        };
        {
            // SAFETY: Calls are sequential
            let record = unsafe { Unary::bind_functor_mut(&mut counting) };
            assert_eq!(record.invoke((3,)), Ok(3));
            assert_eq!(record.invoke((4,)), Ok(4));
        }
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_method_shapes() {
        let mut counter = 1;
        let record = OnCounter::bind_method(bump);
        assert_eq!(record.invoke_method(&mut counter, (2,)), Ok(3));

        let scale = 10;
        let functor = move |counter: &mut u32, by: u32| {
            *counter += by * scale;
            *counter
        };
        let record = OnCounter::bind_method_functor(&functor);
        assert_eq!(record.invoke_method(&mut counter, (1,)), Ok(13));
        assert_eq!(OnCounter::new().invoke_method(&mut counter, (1,)), Err((1,)));
        assert_eq!(counter, 13);
    }

    #[test]
    fn test_const_method_shape() {
        type Reader<'a> = RawInvocation<
            'a,
            fn(&Cell<u32>) -> u32,
            ConstMethodStub<fn(&Cell<u32>) -> u32, Cell<u32>, (), u32>,
        >;

        fn read(cell: &Cell<u32>) -> u32 {
            cell.get()
        }

        let cell = Cell::new(4);
        let record = Reader::bind_const_method(read);
        assert_eq!(record.invoke_const_method(&cell, ()), Ok(4));

        let mut reads = 0;
        let mut counting = |cell: &Cell<u32>| {
            reads += 1;
            cell.get() + 1
        };
        {
            // SAFETY: Calls are sequential
            let record = unsafe { Reader::bind_const_method_functor_mut(&mut counting) };
            assert_eq!(record.invoke_const_method(&cell, ()), Ok(5));
        }
        assert_eq!(reads, 1);
    }
}

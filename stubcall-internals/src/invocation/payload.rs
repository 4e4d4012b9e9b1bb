//! The union half of an invocation record.
//!
//! This module encapsulates the fields of [`Payload`]. Which field is live is
//! not recorded in the payload itself: it is implied by the stub that the
//! payload is paired with in a [`RawInvocation`].
//!
//! # Safety Invariant
//!
//! A payload built with [`Payload::from_function`] has its `function` field
//! live. A payload built with [`Payload::from_object`] or
//! [`Payload::from_object_mut`] has its `object` field live, pointing at a
//! value of the type it was built from. That type is never zero-sized, so
//! distinct functors always have distinct addresses. An empty payload has its
//! `object` field live, holding a dangling pointer that is never dereferenced.
//!
//! [`RawInvocation`]: crate::invocation::RawInvocation

use core::ptr::NonNull;

use crate::util::Erased;

/// Either a function pointer of type `F` or an erased pointer to a borrowed
/// functor.
///
/// `F` is always a function pointer type in practice; [`Payload::from_function`]
/// checks at compile time that it has the size of a data pointer, so the two
/// fields overlap exactly.
#[repr(C)]
pub union Payload<F: Copy> {
    /// Pointer to a borrowed functor, with its type erased.
    object: NonNull<Erased>,
    /// A plain function pointer.
    function: F,
}

impl<F: Copy> Clone for Payload<F> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Copy> Copy for Payload<F> {}

impl<F: Copy> Payload<F> {
    /// Creates a payload that holds nothing.
    #[inline]
    pub(crate) const fn empty() -> Self {
        Self {
            object: NonNull::dangling(),
        }
    }

    /// Creates a payload holding a function pointer.
    #[inline]
    pub(crate) const fn from_function(function: F) -> Self {
        const {
            assert!(
                size_of::<F>() == size_of::<NonNull<Erased>>(),
                "payload functions must be the size of a data pointer"
            );
        }
        Self { function }
    }

    /// Creates a payload pointing at a functor that is only read through.
    ///
    /// Zero-sized functors are rejected at compile time: they have no
    /// address of their own, so two of them could not be told apart.
    #[inline]
    pub(crate) fn from_object<T>(object: &T) -> Self {
        const {
            assert!(
                size_of::<T>() != 0,
                "zero-sized functors cannot be bound by reference, bind them as functions"
            );
        }
        Self {
            object: NonNull::from(object).cast::<Erased>(),
        }
    }

    /// Creates a payload pointing at a functor that may be written through.
    ///
    /// Zero-sized functors are rejected at compile time, as in
    /// [`Payload::from_object`].
    #[inline]
    pub(crate) fn from_object_mut<T>(object: &mut T) -> Self {
        const {
            assert!(
                size_of::<T>() != 0,
                "zero-sized functors cannot be bound by reference, bind them as functions"
            );
        }
        Self {
            object: NonNull::from(object).cast::<Erased>(),
        }
    }

    /// Reads the function pointer back.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. This payload was created by [`Payload::from_function`].
    #[inline]
    pub(crate) unsafe fn function(self) -> F {
        // SAFETY:
        // 1. Guaranteed by the caller, so the `function` field is live
        unsafe { self.function }
    }

    /// Returns a shared reference to the functor this payload points at.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. This payload was created by [`Payload::from_object`] or
    ///    [`Payload::from_object_mut`] with a value of type `T`.
    /// 2. The borrow the payload was created from is still alive for `'b`.
    /// 3. No mutable reference to the functor exists for `'b`.
    #[inline]
    pub(crate) unsafe fn object_ref<'b, T>(self) -> &'b T {
        // SAFETY:
        // 1. Guaranteed by the caller, so the `object` field is live
        let object = unsafe { self.object };
        // SAFETY:
        // 1. The pointer was created from a `&T` or `&mut T`, so it is
        //    non-null, aligned and points at a valid `T`
        // 2. Guaranteed by the caller
        // 3. Guaranteed by the caller
        unsafe { object.cast::<T>().as_ref() }
    }

    /// Returns a mutable reference to the functor this payload points at.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. This payload was created by [`Payload::from_object_mut`] with a
    ///    value of type `T`.
    /// 2. The borrow the payload was created from is still alive for `'b`.
    /// 3. No other reference to the functor exists for `'b`.
    #[inline]
    pub(crate) unsafe fn object_mut<'b, T>(self) -> &'b mut T {
        // SAFETY:
        // 1. Guaranteed by the caller, so the `object` field is live
        let object = unsafe { self.object };
        // SAFETY:
        // 1. The pointer was created from a `&mut T`, so it is non-null,
        //    aligned, points at a valid `T` and may be written through
        // 2. Guaranteed by the caller
        // 3. Guaranteed by the caller
        unsafe { object.cast::<T>().as_mut() }
    }

    /// Returns the address held by the payload, whichever field is live.
    ///
    /// Both fields are pointer sized, so the bytes are the same either way.
    #[inline]
    pub(crate) fn address(self) -> *const () {
        // SAFETY: `from_function` guarantees that `F` has the size of a data
        // pointer, and every field of this union holds a non-null address, so
        // the bytes read are always a valid `NonNull<Erased>`.
        let object = unsafe { self.object };
        object.as_ptr().cast_const().cast::<()>()
    }
}

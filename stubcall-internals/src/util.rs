//! Internal utility types.

/// Marker type used when type-erasing a borrowed functor.
///
/// This zero-sized type serves as the pointee of the object field of a
/// [`Payload`] once the concrete functor type has been erased. Only the stub
/// that was instantiated for the functor type knows what it really points at.
///
/// [`Payload`]: crate::invocation::Payload
pub(crate) struct Erased;

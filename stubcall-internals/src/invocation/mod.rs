//! Type-erased invocation records.
//!
//! This module contains [`RawInvocation`], the two-word record behind every
//! callable wrapper: a [`Payload`] with the function pointer or borrowed
//! functor, and a stub that knows how to call it.
//!
//! # Safety Invariant
//!
//! The stub of a [`RawInvocation`] is either absent or was instantiated for
//! exactly the kind of payload stored next to it. Both fields are private to
//! [`raw`], and the only way to set them is through the `bind_*` constructors,
//! each of which writes a matching pair.

mod payload;
mod raw;
mod stub;

pub use payload::Payload;
pub use raw::RawInvocation;
pub use stub::{ConstMethodStub, FunctionStub, MethodStub, StubPtr};

#![no_std]
#![forbid(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::missing_docs_in_private_items,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
#![allow(rustdoc::private_intra_doc_links)]
//! Internal implementation crate for [`stubcall`].
//!
//! # Overview
//!
//! This crate contains the low-level, type-erased invocation records and the
//! unsafe trampolines that power the [`stubcall`] callable wrappers. It
//! provides the foundation for calling free functions, methods and borrowed
//! functors through one uniform record, without heap allocation and without
//! trait objects.
//!
//! **This crate is an implementation detail.** No semantic versioning guarantees
//! are provided. Users should depend on the [`stubcall`] crate, not this one.
//!
//! # Architecture
//!
//! An invocation record is two machine words:
//!
//! - **[`Payload`]**: a `#[repr(C)]` union holding either a function pointer or
//!   an erased pointer to a borrowed functor
//! - **stub**: a monomorphized trampoline that knows which union field is live
//!   and what the erased pointer points at
//!
//! The [`invocation`] module pairs the two in [`RawInvocation`]. There is one
//! stub shape per receiver kind:
//!
//! - [`FunctionStub`]: no receiver
//! - [`MethodStub`]: a `&mut O` receiver supplied at call time
//! - [`ConstMethodStub`]: a `&O` receiver supplied at call time
//!
//! The [`invoke`] module contains the tuple-splatting traits used to express
//! "callable with these arguments" for every supported arity.
//!
//! # Safety Strategy
//!
//! Type erasure requires that the stub always matches the payload it is
//! called with. When we erase a functor `T` into a [`Payload`], only the stub
//! instantiated for `T` may read it back.
//!
//! This crate maintains safety through:
//!
//! - **Module-based encapsulation**: the fields of [`Payload`] and
//!   [`RawInvocation`] are module-private, so the stub/payload pairing can only
//!   be established by the `bind_*` constructors
//! - **Lifetime tracking**: [`RawInvocation`] carries the lifetime of any
//!   borrowed functor, so the record cannot outlive what it points at
//! - **Documented stub contracts**: each stub specifies exactly which payloads
//!   it may be called with
//!
//! [`stubcall`]: https://docs.rs/stubcall/latest/stubcall/
//! [`Payload`]: invocation::Payload
//! [`FunctionStub`]: invocation::FunctionStub
//! [`MethodStub`]: invocation::MethodStub
//! [`ConstMethodStub`]: invocation::ConstMethodStub

pub mod invocation;
pub mod invoke;
mod util;

pub use invocation::RawInvocation;

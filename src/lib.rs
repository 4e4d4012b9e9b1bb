#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    clippy::as_ptr_cast_mut,
    clippy::ptr_as_ptr,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Extra checks on nightly
#![cfg_attr(nightly_extra_checks, feature(rustdoc_missing_doc_code_examples))]
#![cfg_attr(nightly_extra_checks, forbid(rustdoc::missing_doc_code_examples))]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Allocation-free callable wrappers for embedded and `no_std` Rust.
//!
//! ## Overview
//!
//! This crate provides small, copyable handles to "something callable": a
//! plain function, a method, or a closure owned elsewhere. A handle is bound
//! once, passed around by value, and called later through a uniform
//! interface. It never allocates, never owns its target and never uses a
//! trait object.
//!
//! ## Quick Example
//!
//! ```
//! use stubcall::prelude::*;
//!
//! struct Motor {
//!     rpm: u32,
//! }
//!
//! impl Motor {
//!     fn set_rpm(&mut self, rpm: u32) -> u32 {
//!         core::mem::replace(&mut self.rpm, rpm)
//!     }
//! }
//!
//! // A callback slot that is filled in later.
//! let mut on_speed: FunctionWrapper<Method<Motor, fn(u32) -> u32>> = FunctionWrapper::new();
//! let mut motor = Motor { rpm: 0 };
//!
//! // Unbound: the fallback runs instead.
//! assert_eq!(on_speed.call_or(|_| 0, &mut motor, 1200), 0);
//!
//! on_speed = FunctionWrapper::<Method<Motor, fn(u32) -> u32>>::from_function(Motor::set_rpm);
//! assert_eq!(on_speed.call(&mut motor, 1200), Ok(0));
//! assert_eq!(motor.rpm, 1200);
//! ```
//!
//! ## Core Concepts
//!
//! - **[`FunctionWrapper`]**: a two-word handle to a function, method or
//!   borrowed functor with a signature fixed at compile time. Signatures are
//!   written as `fn(A..) -> R`, [`Method<O, fn(A..) -> R>`](Method) or
//!   [`ConstMethod<O, fn(A..) -> R>`](ConstMethod); see [`signature`].
//! - **[`MemberFunction`]**: a method of a type `O`, bound either to its
//!   `&mut self` or its `&self` form. Calls through a shared receiver are
//!   checked at run time.
//! - **[`FunctionAlternates`]**: the lenient form of [`MemberFunction`] that
//!   only calls through an exclusive receiver and never fails.
//! - **[`Expected`]** and **[`Unexpected`]**: a value or an error, with
//!   checked accessors.
//!
//! ## Failures
//!
//! Calling an unbound [`FunctionWrapper`], calling a [`MemberFunction`] bound
//! to a `&mut self` method through a shared receiver, and reading the
//! inactive side of an [`Expected`] all return an [`Error`]. The error
//! records its [`ErrorKind`] and the source location of the call, and is
//! passed to the global failure hook first; see [`hooks`]. The companion
//! crate [`stubcall-tracing`] provides a hook that logs through `tracing`.
//!
//! Each of these failures has a non-failing alternative: `call_if` and
//! `call_or` on [`FunctionWrapper`], the default value of
//! [`MemberFunction::call`], and [`Expected::value_or`].
//!
//! For implementation details, see the [`stubcall-internals`] crate.
//!
//! [`stubcall-internals`]: stubcall_internals
//! [`stubcall-tracing`]: https://docs.rs/stubcall-tracing
//!
//! ## Features
//!
//! - `std`: protect the failure hook with [`std::sync::RwLock`] instead of a
//!   spin lock.

#[cfg(any(test, feature = "std"))]
extern crate std;

#[macro_use]
mod macros;

pub mod hooks;
pub mod prelude;
pub mod signature;

mod error;
mod expected;
mod function_alternates;
mod function_wrapper;
mod member_function;

pub use self::{
    error::{Error, ErrorKind},
    expected::{Expected, UNEXPECT, Unexpect, Unexpected},
    function_alternates::FunctionAlternates,
    function_wrapper::FunctionWrapper,
    member_function::{FunctionType, MemberFunction},
    signature::{ConstMethod, Method},
};

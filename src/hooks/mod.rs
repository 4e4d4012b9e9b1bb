//! A global hook run on every signalled failure.
//!
//! Calls through an unbound [`FunctionWrapper`], shared calls to a
//! [`MemberFunction`] bound to a mutable method, and accesses to the inactive
//! side of an [`Expected`] all fail with an [`Error`]. Before that error is
//! returned, it is handed to the installed [`FailureHook`], if there is one.
//!
//! The hook is the place to log, count or trap failures. It cannot change
//! the result of the failed operation.
//!
//! Only one hook is installed at a time. The slot is protected by a spinning
//! read-write lock, or by [`std::sync::RwLock`] when the `std` feature is
//! enabled. The hook itself is called after the lock has been released, so a
//! hook may safely trigger further failures or replace itself.
//!
//! # Examples
//!
//! ```
//! use core::sync::atomic::{AtomicUsize, Ordering};
//!
//! use stubcall::{
//!     Error, FunctionWrapper,
//!     hooks::{self, FailureHook},
//! };
//!
//! static FAILURES: AtomicUsize = AtomicUsize::new(0);
//!
//! fn count(_error: Error) {
//!     FAILURES.fetch_add(1, Ordering::Relaxed);
//! }
//!
//! hooks::replace(FailureHook::from_function(count));
//!
//! let unbound = FunctionWrapper::<fn()>::new();
//! assert!(unbound.call().is_err());
//! assert!(FAILURES.load(Ordering::Relaxed) >= 1);
//! ```
//!
//! [`FunctionWrapper`]: crate::FunctionWrapper
//! [`MemberFunction`]: crate::MemberFunction
//! [`Expected`]: crate::Expected

mod hook_lock;

use self::hook_lock::HookLock;
use crate::{Error, FunctionWrapper};

static FAILURE_HOOK: HookLock<FailureHook> = HookLock::new();

/// A callback that observes every signalled [`Error`].
///
/// A hook is either a plain function or a `'static` closure that can be
/// shared between threads.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FailureHook(FunctionWrapper<'static, fn(Error)>);

// SAFETY: The wrapper is bound either to a function pointer, or through
// `FailureHook::from_fn` to a `&'static T` with `T: Sync`. Both may be shared
// with and called from any thread.
unsafe impl Send for FailureHook {}

// SAFETY: See the `Send` implementation above.
unsafe impl Sync for FailureHook {}

impl FailureHook {
    /// Creates a hook that calls a plain function.
    #[inline]
    pub const fn from_function(hook: fn(Error)) -> Self {
        Self(FunctionWrapper::<'static, fn(Error)>::from_function(hook))
    }

    /// Creates a hook that calls a `'static` closure.
    ///
    /// # Examples
    ///
    /// ```
    /// use stubcall::{Error, hooks::FailureHook};
    ///
    /// static LOGGER: fn(Error) = |error| {
    ///     let _ = error.kind();
    /// };
    /// let hook = FailureHook::from_fn(&LOGGER);
    /// assert_eq!(hook, FailureHook::from_fn(&LOGGER));
    /// ```
    #[inline]
    pub fn from_fn<T>(hook: &'static T) -> Self
    where
        T: Fn(Error) + Sync,
    {
        Self(FunctionWrapper::<'static, fn(Error)>::from_fn(hook))
    }

    /// Runs the hook.
    #[inline]
    pub fn call(&self, error: Error) {
        self.0.call_or(|_| {}, error);
    }
}

/// Error returned by [`install`] when a hook is already installed.
///
/// Contains the hook that was attempted to be installed.
#[derive(Clone, Copy)]
pub struct HookAlreadyInstalledError(pub FailureHook);

impl core::fmt::Debug for HookAlreadyInstalledError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HookAlreadyInstalledError").finish()
    }
}

impl core::fmt::Display for HookAlreadyInstalledError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "a failure hook is already installed")
    }
}

impl core::error::Error for HookAlreadyInstalledError {}

/// Installs `hook` as the global failure hook.
///
/// If a hook is already installed, it is kept and
/// [`HookAlreadyInstalledError`] is returned with `hook` inside.
///
/// See also [`replace`] which installs the hook unconditionally.
pub fn install(hook: FailureHook) -> Result<(), HookAlreadyInstalledError> {
    let mut guard = FAILURE_HOOK.write();
    let slot = guard.get();
    if slot.is_some() {
        return Err(HookAlreadyInstalledError(hook));
    }
    *slot = Some(hook);
    Ok(())
}

/// Installs `hook` as the global failure hook, returning the previous one.
pub fn replace(hook: FailureHook) -> Option<FailureHook> {
    FAILURE_HOOK.write().get().replace(hook)
}

/// Removes the global failure hook, returning it.
pub fn uninstall() -> Option<FailureHook> {
    FAILURE_HOOK.write().get().take()
}

/// Returns the currently installed failure hook, if any.
pub fn current() -> Option<FailureHook> {
    FAILURE_HOOK.load()
}

/// Returns `true` if a failure hook is installed.
pub fn is_installed() -> bool {
    current().is_some()
}

/// Hands `error` to the installed hook, if any.
pub(crate) fn dispatch(error: Error) {
    if let Some(hook) = current() {
        hook.call(error);
    }
}

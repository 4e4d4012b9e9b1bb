#[cfg(feature = "std")]
use std::sync as impl_;

#[cfg(not(feature = "std"))]
use spin as impl_;

/// A global slot holding at most one hook.
///
/// Backed by [`std::sync::RwLock`] when the `std` feature is enabled, and by
/// a spinning [`spin::RwLock`] otherwise.
#[repr(transparent)]
pub(crate) struct HookLock<T: 'static + Copy + Send + Sync>(impl_::RwLock<Option<T>>);

#[repr(transparent)]
pub(crate) struct HookLockWriteGuard<T: 'static + Copy + Send + Sync>(
    impl_::RwLockWriteGuard<'static, Option<T>>,
);

impl<T: 'static + Copy + Send + Sync> HookLock<T> {
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self(impl_::RwLock::new(None))
    }

    /// Copies the current hook out of the slot.
    ///
    /// The lock is released before this returns, so the hook can be called
    /// without holding it.
    #[inline]
    pub(crate) fn load(&'static self) -> Option<T> {
        #[cfg(not(feature = "std"))]
        let guard = self.0.read();

        // A panic while holding the lock cannot leave an `Option<T: Copy>`
        // half written, so poisoning is ignored.
        #[cfg(feature = "std")]
        let guard = self.0.read().unwrap_or_else(impl_::PoisonError::into_inner);

        *guard
    }

    #[inline]
    pub(crate) fn write(&'static self) -> HookLockWriteGuard<T> {
        #[cfg(not(feature = "std"))]
        let guard = self.0.write();

        #[cfg(feature = "std")]
        let guard = self.0.write().unwrap_or_else(impl_::PoisonError::into_inner);

        HookLockWriteGuard(guard)
    }
}

impl<T: 'static + Copy + Send + Sync> HookLockWriteGuard<T> {
    #[inline]
    pub(crate) fn get(&mut self) -> &mut Option<T> {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_lock_slot() {
        static LOCK: HookLock<u32> = HookLock::new();

        assert_eq!(LOCK.load(), None);
        assert_eq!(LOCK.write().get().replace(3), None);
        assert_eq!(LOCK.load(), Some(3));
        assert_eq!(LOCK.write().get().take(), Some(3));
        assert_eq!(LOCK.load(), None);
    }
}

//! Lock around the table's round state.

#[cfg(feature = "std")]
type Inner<T> = std::sync::Mutex<T>;
#[cfg(feature = "std")]
type Guard<'a, T> = std::sync::MutexGuard<'a, T>;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Inner<T> = spin::Mutex<T>;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Guard<'a, T> = spin::MutexGuard<'a, T>;

/// Guards a round. `std` builds block on an OS mutex, `alloc` builds spin.
#[derive(Debug)]
pub struct RoundLock<T>(Inner<T>);

impl<T> RoundLock<T> {
    pub const fn new(round: T) -> Self {
        Self(Inner::new(round))
    }

    /// Locks the round.
    ///
    /// Every action leaves the round in a valid phase before it can panic
    /// (a shuffler panics before any state changes), so a poisoned lock is
    /// taken over as is.
    #[cfg(feature = "std")]
    pub fn lock(&self) -> Guard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Locks the round.
    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    pub fn lock(&self) -> Guard<'_, T> {
        self.0.lock()
    }
}

//! Per-slot row locks.
//!
//! A [`RowLock`] owns the value it guards. Holding a [`RowGuard`] is the only
//! way to reach that value, so a row can never be touched without its lock.
//!
//! # Lifecycle
//!
//! ```text
//! RowLock::create() ─── lock() ──→ RowGuard ─── unlock(policy) / drop ──→ (unlocked)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

// ============================================================================
// UNLOCK POLICY ENUM
// ============================================================================

/// How a row lock is handed off when released.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnlockPolicy {
    /// Release normally; the releasing thread may barge back in.
    #[default]
    Standard,
    /// Hand the lock directly to the next waiter, if any.
    Fair,
}

impl UnlockPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnlockPolicy::Standard => "standard",
            UnlockPolicy::Fair => "fair",
        }
    }
}

impl fmt::Display for UnlockPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UnlockPolicy {
    type Err = UnlockPolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(UnlockPolicy::Standard),
            "fair" => Ok(UnlockPolicy::Fair),
            _ => Err(UnlockPolicyParseError(s.to_string())),
        }
    }
}

/// Error when parsing an invalid unlock policy string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockPolicyParseError(pub String);

impl fmt::Display for UnlockPolicyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid unlock policy: {}", self.0)
    }
}

impl std::error::Error for UnlockPolicyParseError {}

// ============================================================================
// ROW LOCK
// ============================================================================

/// Mutual-exclusion lock guarding one row slot.
#[derive(Debug)]
pub struct RowLock<T> {
    inner: parking_lot::Mutex<T>,
}

impl<T> RowLock<T> {
    pub fn create(value: T) -> Self {
        Self {
            inner: parking_lot::Mutex::new(value),
        }
    }

    /// Block until the lock is free, then take it.
    pub fn lock(&self) -> RowGuard<'_, T> {
        RowGuard {
            guard: self.inner.lock(),
        }
    }

    /// Take the lock only if nobody holds it.
    pub fn try_lock(&self) -> Option<RowGuard<'_, T>> {
        self.inner.try_lock().map(|guard| RowGuard { guard })
    }

    pub fn is_locked(&self) -> bool {
        self.inner.is_locked()
    }

    /// Unwrap the guarded value; exclusive ownership means no locking is needed.
    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

// ============================================================================
// ROW GUARD
// ============================================================================

/// Proof that a row lock is held. Dropping it unlocks with the standard policy.
#[must_use = "dropping the guard releases the row lock immediately"]
pub struct RowGuard<'a, T> {
    guard: parking_lot::MutexGuard<'a, T>,
}

impl<T> RowGuard<'_, T> {
    pub fn unlock(self, policy: UnlockPolicy) {
        match policy {
            UnlockPolicy::Standard => drop(self.guard),
            UnlockPolicy::Fair => parking_lot::MutexGuard::unlock_fair(self.guard),
        }
    }
}

impl<T> Deref for RowGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard
    }
}

impl<T> DerefMut for RowGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.guard
    }
}

impl<T: fmt::Debug> fmt::Debug for RowGuard<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowGuard").field("value", &*self.guard).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlock_policy_roundtrip_str() {
        for policy in [UnlockPolicy::Standard, UnlockPolicy::Fair] {
            assert_eq!(policy.as_str().parse::<UnlockPolicy>(), Ok(policy));
        }
        assert_eq!("FAIR".parse::<UnlockPolicy>(), Ok(UnlockPolicy::Fair));
        assert!("eager".parse::<UnlockPolicy>().is_err());
    }

    #[test]
    fn test_guard_excludes_second_locker() {
        let lock = RowLock::create(1);
        let guard = lock.lock();
        assert!(lock.is_locked());
        assert!(lock.try_lock().is_none());
        guard.unlock(UnlockPolicy::Fair);
        assert!(!lock.is_locked());
        assert!(lock.try_lock().is_some());
    }

    #[test]
    fn test_guard_mutation_visible_after_unlock() {
        let lock = RowLock::create(vec![1, 2]);
        {
            let mut guard = lock.lock();
            guard.push(3);
        }
        assert_eq!(*lock.lock(), vec![1, 2, 3]);
        assert_eq!(lock.into_inner(), vec![1, 2, 3]);
    }
}

//! Configuration for memo caches.

/// How a cache resolves simultaneous first requests for the same key.
///
/// Both policies guarantee that a key never has two distinct stored
/// values. They differ in whether the delegate may run more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RacePolicy {
    /// The delegate runs under a per-key gate; concurrent callers for the
    /// same key wait for the first computation and read its value. The
    /// delegate runs at most once per key.
    #[default]
    LockPerKey,
    /// Callers compute without coordination; the first finished value is
    /// stored and every caller returns the stored value. The delegate may
    /// run more than once for a key under contention.
    Converge,
}

/// Settings for a [`MemoCache`](super::MemoCache).
///
/// # Examples
///
/// ```
/// use nested_function::memoize::{MemoizeConfig, RacePolicy};
///
/// let config = MemoizeConfig::new()
///     .with_policy(RacePolicy::Converge)
///     .with_initial_capacity(16);
///
/// assert_eq!(config.policy(), RacePolicy::Converge);
/// assert_eq!(config.initial_capacity(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MemoizeConfig {
    policy: RacePolicy,
    initial_capacity: usize,
}

impl MemoizeConfig {
    /// Lock-per-key policy, no pre-allocation.
    #[inline]
    pub const fn new() -> Self {
        Self {
            policy: RacePolicy::LockPerKey,
            initial_capacity: 0,
        }
    }

    /// Sets the race policy.
    #[inline]
    #[must_use]
    pub const fn with_policy(mut self, policy: RacePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets how many entries the cache allocates room for up front.
    ///
    /// This is a hint, not a bound: the cache still grows past it.
    #[inline]
    #[must_use]
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// The race policy.
    #[inline]
    pub const fn policy(&self) -> RacePolicy {
        self.policy
    }

    /// The pre-allocation hint.
    #[inline]
    pub const fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }
}

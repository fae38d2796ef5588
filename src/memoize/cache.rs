//! Thread-safe compute-once map.
//!
//! # Layout
//!
//! The key map sits behind a `parking_lot::RwLock` and is only locked long
//! enough to find or create a key's slot. Each slot is shared through an
//! `Arc` and holds:
//!
//! - `value`: a `OnceLock`, so a stored value is never observed partially
//!   written and never replaced
//! - `gate`: serializes computations of that one key under
//!   [`RacePolicy::LockPerKey`]
//! - `owner`: the thread currently computing, used to detect re-entry
//!
//! A computation that fails or panics leaves the slot empty. Empty slots are
//! not counted by [`MemoCache::len`] and the next request computes again.

use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::sync::{Arc, OnceLock};
use std::thread::{self, ThreadId};

use parking_lot::{Mutex, RwLock};

use super::config::{MemoizeConfig, RacePolicy};

/// Hasher used by memo caches unless another one is supplied.
///
/// `rustc_hash::FxBuildHasher` with the `fxhash` feature,
/// `ahash::RandomState` with the `ahash` feature, and the standard
/// library's `RandomState` otherwise.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// Hasher used by memo caches unless another one is supplied.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// Hasher used by memo caches unless another one is supplied.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

struct Slot<V> {
    value: OnceLock<V>,
    gate: Mutex<()>,
    owner: Mutex<Option<ThreadId>>,
}

impl<V> Slot<V> {
    fn new() -> Self {
        Self {
            value: OnceLock::new(),
            gate: Mutex::new(()),
            owner: Mutex::new(None),
        }
    }
}

/// Marks the current thread as the one computing a slot, until dropped.
///
/// Dropping also runs during unwinding, so a panicking delegate releases
/// the slot for the next caller.
struct OwnerGuard<'a> {
    owner: &'a Mutex<Option<ThreadId>>,
}

impl<'a> OwnerGuard<'a> {
    fn claim(owner: &'a Mutex<Option<ThreadId>>, thread: ThreadId) -> Self {
        *owner.lock() = Some(thread);
        Self { owner }
    }
}

impl Drop for OwnerGuard<'_> {
    fn drop(&mut self) {
        *self.owner.lock() = None;
    }
}

/// A concurrent map that computes each key's value once and keeps it.
///
/// Entries are never evicted, updated or removed; the cache is meant for
/// small or bounded key domains such as enumerations. Failed computations
/// are not stored.
///
/// # Type Parameters
///
/// - `K`: The key type
/// - `V`: The cached value type, cloned out on every read
/// - `S`: The hasher (defaults to [`DefaultHashBuilder`])
///
/// # Examples
///
/// ```rust
/// use nested_function::memoize::MemoCache;
///
/// let cache: MemoCache<u32, String> = MemoCache::new();
///
/// assert_eq!(cache.get_or_compute(7, |key| key.to_string()), "7");
/// // The stored value wins over any later delegate.
/// assert_eq!(cache.get_or_compute(7, |_| unreachable!()), "7");
/// assert_eq!(cache.len(), 1);
/// ```
///
/// ## Concurrent Access
///
/// ```rust
/// use nested_function::memoize::MemoCache;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::thread;
///
/// let cache: MemoCache<u8, u64> = MemoCache::new();
/// let calls = AtomicUsize::new(0);
///
/// thread::scope(|scope| {
///     for _ in 0..8 {
///         scope.spawn(|| {
///             cache.get_or_compute(1, |key| {
///                 calls.fetch_add(1, Ordering::SeqCst);
///                 u64::from(key) * 100
///             })
///         });
///     }
/// });
///
/// assert_eq!(cache.get(&1), Some(100));
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// ```
pub struct MemoCache<K, V, S = DefaultHashBuilder> {
    entries: RwLock<HashMap<K, Arc<Slot<V>>, S>>,
    config: MemoizeConfig,
}

impl<K, V> MemoCache<K, V, DefaultHashBuilder> {
    /// Creates an empty cache with the default configuration.
    pub fn new() -> Self {
        Self::with_config(MemoizeConfig::default())
    }

    /// Creates an empty cache with `config`.
    pub fn with_config(config: MemoizeConfig) -> Self {
        Self::with_config_and_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K, V> Default for MemoCache<K, V, DefaultHashBuilder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> MemoCache<K, V, S> {
    /// Creates an empty cache with `config`, hashing keys with `hasher`.
    pub fn with_config_and_hasher(config: MemoizeConfig, hasher: S) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity_and_hasher(
                config.initial_capacity(),
                hasher,
            )),
            config,
        }
    }

    /// The configuration the cache was created with.
    #[inline]
    pub const fn config(&self) -> MemoizeConfig {
        self.config
    }

    /// Number of keys with a stored value.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .values()
            .filter(|slot| slot.value.get().is_some())
            .count()
    }

    /// Returns `true` if no value has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V, S> MemoCache<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    /// Returns the stored value for `key` without computing anything.
    pub fn get(&self, key: &K) -> Option<V> {
        self.entries
            .read()
            .get(key)
            .and_then(|slot| slot.value.get().cloned())
    }

    /// Returns `true` if a value is stored for `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries
            .read()
            .get(key)
            .is_some_and(|slot| slot.value.get().is_some())
    }

    /// Returns the value for `key`, computing and storing it on first use.
    ///
    /// # Panics
    ///
    /// A panic inside `delegate` propagates to the caller; the key stays
    /// uncached. Under [`RacePolicy::LockPerKey`], requesting the same key
    /// again from inside `delegate` panics instead of deadlocking.
    pub fn get_or_compute<D>(&self, key: K, delegate: D) -> V
    where
        D: FnOnce(K) -> V,
    {
        match self.get_or_try_compute(key, |key| Ok::<V, Infallible>(delegate(key))) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// Returns the value for `key`, computing it with a fallible delegate on
    /// first use.
    ///
    /// # Errors
    ///
    /// Returns the delegate's error unchanged. Nothing is stored for `key`,
    /// so the next request computes again.
    ///
    /// # Panics
    ///
    /// Same as [`get_or_compute`](Self::get_or_compute).
    pub fn get_or_try_compute<E, D>(&self, key: K, delegate: D) -> Result<V, E>
    where
        D: FnOnce(K) -> Result<V, E>,
    {
        if let Some(value) = self.get(&key) {
            tracing::trace!("memo cache hit");
            return Ok(value);
        }

        match self.config.policy() {
            RacePolicy::LockPerKey => self.compute_exclusive(key, delegate),
            RacePolicy::Converge => self.compute_converging(key, delegate),
        }
    }

    fn slot_for(&self, key: K) -> Arc<Slot<V>> {
        let mut entries = self.entries.write();
        Arc::clone(entries.entry(key).or_insert_with(|| Arc::new(Slot::new())))
    }

    fn compute_exclusive<E, D>(&self, key: K, delegate: D) -> Result<V, E>
    where
        D: FnOnce(K) -> Result<V, E>,
    {
        let slot = self.slot_for(key.clone());
        let current = thread::current().id();

        assert!(
            *slot.owner.lock() != Some(current),
            "MemoCache: re-entrant computation of the same key on one thread \
             (the delegate requested the key it is computing)"
        );

        let _gate = slot.gate.lock();
        if let Some(value) = slot.value.get() {
            tracing::trace!("memo value computed by a concurrent caller");
            return Ok(value.clone());
        }

        let value = {
            let _owner = OwnerGuard::claim(&slot.owner, current);
            delegate(key)?
        };

        tracing::debug!(policy = ?self.config.policy(), "memo value computed and stored");
        Ok(slot.value.get_or_init(|| value).clone())
    }

    fn compute_converging<E, D>(&self, key: K, delegate: D) -> Result<V, E>
    where
        D: FnOnce(K) -> Result<V, E>,
    {
        let computed = delegate(key.clone())?;
        let slot = self.slot_for(key);

        let mut stored = false;
        let value = slot
            .value
            .get_or_init(|| {
                stored = true;
                computed
            })
            .clone();

        if stored {
            tracing::debug!(policy = ?self.config.policy(), "memo value computed and stored");
        } else {
            tracing::debug!(
                policy = ?self.config.policy(),
                "memo race lost; returning the value stored first"
            );
        }
        Ok(value)
    }
}

impl<K, V, S> fmt::Debug for MemoCache<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MemoCache")
            .field("len", &self.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

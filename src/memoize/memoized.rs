//! A transform followed by a cached delegate.

use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::cache::{DefaultHashBuilder, MemoCache};
use super::config::MemoizeConfig;
use crate::transform::Transform;

/// A memoized function: a [`Transform`] producing the key, a delegate
/// computing the value, and the [`MemoCache`] remembering it.
///
/// Created by [`Transform::memoize`] and its variants. The cache belongs to
/// this value alone and is dropped with it.
///
/// # Type Parameters
///
/// - `In`: The input type
/// - `K`: The key type, the transform's present result
/// - `V`: The cached value type
/// - `F`: The transform's function
/// - `D`: The delegate, `Fn(K) -> V` or `Fn(K) -> Result<V, E>`
/// - `S`: The cache's hasher
///
/// # Thread Safety
///
/// `Memoized` is `Sync` when the transform, the delegate, the keys and the
/// values are, so a shared reference can be used from many threads. Under
/// the default [`RacePolicy::LockPerKey`](super::RacePolicy::LockPerKey) the
/// delegate runs at most once per key even when threads race for it.
///
/// # Examples
///
/// ```rust
/// use nested_function::transform::Transform;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Kind { Plain, Special }
///
/// struct Item { kind: Kind }
///
/// impl Item {
///     fn kind(&self) -> Option<Kind> { Some(self.kind) }
/// }
///
/// let items = [Item { kind: Kind::Plain }, Item { kind: Kind::Special }, Item { kind: Kind::Special }];
///
/// let is_special = Transform::of(Item::kind).memoize(|kind| kind == Kind::Special);
/// let special = items.iter().filter(|&item| is_special.apply(item) == Some(true)).count();
///
/// assert_eq!(special, 2);
/// assert_eq!(is_special.len(), 2);
/// ```
pub struct Memoized<In, K, V, F, D, S = DefaultHashBuilder> {
    transform: Transform<In, K, F>,
    delegate: D,
    cache: MemoCache<K, V, S>,
}

impl<In, K, V, F, D, S> Memoized<In, K, V, F, D, S>
where
    F: Fn(In) -> Option<K>,
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    pub(crate) fn new(
        transform: Transform<In, K, F>,
        delegate: D,
        cache: MemoCache<K, V, S>,
    ) -> Self {
        Self {
            transform,
            delegate,
            cache,
        }
    }

    /// Evaluates the memoized function.
    ///
    /// Returns `None` when the transform is absent for `input`; the cache
    /// and the delegate are not touched in that case. Otherwise returns the
    /// value stored for the key, running the delegate first if the key has
    /// no value yet.
    ///
    /// # Panics
    ///
    /// A panic inside the delegate propagates and leaves the key uncached.
    pub fn apply(&self, input: In) -> Option<V>
    where
        D: Fn(K) -> V,
    {
        let key = self.transform.apply(input)?;
        Some(self.cache.get_or_compute(key, &self.delegate))
    }

    /// Evaluates the memoized function with a fallible delegate.
    ///
    /// Returns `Ok(None)` when the transform is absent for `input`.
    ///
    /// # Errors
    ///
    /// Returns the delegate's error unchanged. The key stays uncached and
    /// the next call with the same key runs the delegate again.
    ///
    /// # Panics
    ///
    /// A panic inside the delegate propagates and leaves the key uncached.
    pub fn try_apply<E>(&self, input: In) -> Result<Option<V>, E>
    where
        D: Fn(K) -> Result<V, E>,
    {
        let Some(key) = self.transform.apply(input) else {
            return Ok(None);
        };
        self.cache.get_or_try_compute(key, &self.delegate).map(Some)
    }

    /// Converts into a plain closure with the behavior of [`apply`](Self::apply).
    pub fn into_fn(self) -> impl Fn(In) -> Option<V>
    where
        D: Fn(K) -> V,
    {
        move |input| self.apply(input)
    }

    /// Converts into a plain closure with the behavior of
    /// [`try_apply`](Self::try_apply).
    pub fn into_try_fn<E>(self) -> impl Fn(In) -> Result<Option<V>, E>
    where
        D: Fn(K) -> Result<V, E>,
    {
        move |input| self.try_apply(input)
    }

    /// Returns the stored value for `key` without running the delegate.
    pub fn cached(&self, key: &K) -> Option<V> {
        self.cache.get(key)
    }

    /// Returns `true` if a value is stored for `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.cache.contains_key(key)
    }

    /// Number of keys with a stored value.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` if no value has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// The cache's configuration.
    pub const fn config(&self) -> MemoizeConfig {
        self.cache.config()
    }
}

impl<In, K, V, F, D, S> fmt::Debug for Memoized<In, K, V, F, D, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("transform", &self.transform)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

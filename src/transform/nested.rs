//! The composable, possibly-absent unary function.
//!
//! A [`Transform`] wraps a function `In -> Option<Out>`. Chaining two
//! transforms feeds the first result into the second only when it is
//! present, so a path through a graph of optional references reads as one
//! expression.
//!
//! # Laws
//!
//! - **Definition**: `a.chain(b).apply(x) == a.apply(x).and_then(|y| b.apply(y))`
//! - **Associativity**: `a.chain(b).chain(c) == a.chain(b.chain(c))`
//! - **Identity**: `identity().chain(a) == a == a.chain(identity())`
//!
//! # Examples
//!
//! ```
//! use nested_function::transform::Transform;
//!
//! let halve = Transform::of(|n: i32| (n % 2 == 0).then_some(n / 2));
//! let quarter = halve.clone().chain(halve);
//!
//! assert_eq!(quarter.apply(12), Some(3));
//! assert_eq!(quarter.apply(6), None);
//! ```

use std::fmt;
use std::marker::PhantomData;

#[cfg(feature = "memoize")]
use std::hash::{BuildHasher, Hash};

#[cfg(feature = "memoize")]
use crate::memoize::{MemoCache, MemoizeConfig, Memoized};

use super::choice::Choice;

/// A unary function whose result may be absent.
///
/// `Transform` is an immutable value: every combinator consumes `self` and
/// returns a new, independent transform. It is [`Clone`] when the wrapped
/// function is, and `Send`/`Sync` when the wrapped function is.
///
/// # Type Parameters
///
/// - `In`: The input type
/// - `Out`: The type of a present result
/// - `F`: The wrapped function, `Fn(In) -> Option<Out>`
///
/// # Borrowed inputs
///
/// Method paths such as `Tree::branch` (with `fn branch(&self) -> Option<&Branch>`)
/// are the most convenient first stage for navigating borrowed data; the
/// later stages can be plain closures because their input type is already
/// known. The borrowed data has to outlive the composed function.
///
/// ```
/// use nested_function::transform::Transform;
///
/// struct Tree { branch: Option<Branch> }
/// struct Branch { leaf: Option<Leaf> }
/// struct Leaf { green: bool }
///
/// impl Tree {
///     fn branch(&self) -> Option<&Branch> { self.branch.as_ref() }
/// }
///
/// let tree = Tree { branch: Some(Branch { leaf: Some(Leaf { green: true }) }) };
///
/// let leaf_is_green = Transform::of(Tree::branch)
///     .and_then(|branch| branch.leaf.as_ref())
///     .predicate(|leaf| leaf.green);
///
/// assert!(leaf_is_green(&tree));
/// ```
pub struct Transform<In, Out, F> {
    function: F,
    _marker: PhantomData<fn(In) -> Out>,
}

impl<In, Out, F> Transform<In, Out, F>
where
    F: Fn(In) -> Option<Out>,
{
    /// Wraps a function that may return no value.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_function::transform::Transform;
    ///
    /// let parse = Transform::of(|text: &str| text.parse::<u8>().ok());
    /// assert_eq!(parse.apply("42"), Some(42));
    /// assert_eq!(parse.apply("many"), None);
    /// ```
    #[inline]
    pub const fn of(function: F) -> Self {
        Self {
            function,
            _marker: PhantomData,
        }
    }

    /// Evaluates the transform on `input`.
    #[inline]
    pub fn apply(&self, input: In) -> Option<Out> {
        (self.function)(input)
    }

    /// Chains `next` after this transform.
    ///
    /// The result evaluates `self` first. When that yields `None` the whole
    /// chain yields `None` and `next` is never invoked; otherwise the present
    /// value is passed to `next`, whose result is returned as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_function::transform::Transform;
    ///
    /// let doubled = Transform::of(|n: i32| n.checked_mul(2));
    /// let rendered = Transform::of(|n: i32| Some(n.to_string()));
    ///
    /// let chained = doubled.chain(rendered);
    /// assert_eq!(chained.apply(21), Some("42".to_string()));
    /// assert_eq!(chained.apply(i32::MAX), None);
    /// ```
    pub fn chain<Next, G>(
        self,
        next: Transform<Out, Next, G>,
    ) -> Transform<In, Next, impl Fn(In) -> Option<Next>>
    where
        G: Fn(Out) -> Option<Next>,
    {
        let first = self.function;
        Transform::of(move |input| first(input).and_then(|value| next.apply(value)))
    }

    /// Chains a plain closure that may return no value.
    ///
    /// Equivalent to `self.chain(Transform::of(function))`.
    pub fn and_then<Next, G>(self, function: G) -> Transform<In, Next, impl Fn(In) -> Option<Next>>
    where
        G: Fn(Out) -> Option<Next>,
    {
        self.chain(Transform::of(function))
    }

    /// Chains a total function; the result is absent only when `self` is.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_function::transform::Transform;
    ///
    /// fn first_word(text: &str) -> Option<&str> {
    ///     text.split_whitespace().next()
    /// }
    ///
    /// let length = Transform::of(first_word).map(str::len);
    /// assert_eq!(length.apply("hello world"), Some(5));
    /// assert_eq!(length.apply("   "), None);
    /// ```
    pub fn map<Next, G>(self, function: G) -> Transform<In, Next, impl Fn(In) -> Option<Next>>
    where
        G: Fn(Out) -> Next,
    {
        let first = self.function;
        Transform::of(move |input| first(input).map(&function))
    }

    /// Converts the transform into a predicate.
    ///
    /// The predicate is `false` whenever the transform is absent for the
    /// input, and `test(value)` otherwise. `test` is not invoked for absent
    /// results.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_function::transform::Transform;
    ///
    /// let is_small_even = Transform::of(|n: u32| (n < 100).then_some(n)).predicate(|n| n % 2 == 0);
    ///
    /// assert!(is_small_even(42));
    /// assert!(!is_small_even(43));
    /// assert!(!is_small_even(420));
    /// ```
    pub fn predicate<P>(self, test: P) -> impl Fn(In) -> bool
    where
        P: Fn(Out) -> bool,
    {
        let function = self.function;
        move |input| function(input).is_some_and(&test)
    }

    /// Converts the transform into a two-way selection.
    ///
    /// Selects `choice`'s `when_true` value when [`predicate`](Self::predicate)
    /// with `test` holds, and `when_false` otherwise, including when the
    /// transform is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_function::transform::{Choice, Transform};
    ///
    /// let colour = Transform::of(|level: Option<u8>| level)
    ///     .choose(|level| level > 3, Choice::when_true("red").when_false("grey"));
    ///
    /// assert_eq!(colour(Some(7)), "red");
    /// assert_eq!(colour(Some(1)), "grey");
    /// assert_eq!(colour(None), "grey");
    /// ```
    pub fn choose<P, A>(self, test: P, choice: Choice<A>) -> impl Fn(In) -> A
    where
        P: Fn(Out) -> bool,
        A: Clone,
    {
        let predicate = self.predicate(test);
        move |input| choice.select(predicate(input)).clone()
    }

    /// Unwraps the transform into its plain function.
    pub fn into_fn(self) -> impl Fn(In) -> Option<Out> {
        self.function
    }

    /// Memoizes `delegate` behind this transform.
    ///
    /// The returned [`Memoized`] evaluates the transform first; an absent
    /// result is returned as `None` without looking at the cache. A present
    /// result is the cache key, and `delegate` runs at most once per
    /// distinct key.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_function::transform::Transform;
    /// use std::cell::Cell;
    ///
    /// let calls = Cell::new(0);
    /// let squared = Transform::of(|n: i64| (n >= 0).then_some(n)).memoize(|n| {
    ///     calls.set(calls.get() + 1);
    ///     n * n
    /// });
    ///
    /// assert_eq!(squared.apply(9), Some(81));
    /// assert_eq!(squared.apply(9), Some(81));
    /// assert_eq!(squared.apply(-9), None);
    /// assert_eq!(calls.get(), 1);
    /// ```
    #[cfg(feature = "memoize")]
    pub fn memoize<V, D>(self, delegate: D) -> Memoized<In, Out, V, F, D>
    where
        Out: Eq + Hash + Clone,
        V: Clone,
        D: Fn(Out) -> V,
    {
        self.memoize_with(MemoizeConfig::default(), delegate)
    }

    /// Memoizes `delegate` with an explicit configuration.
    #[cfg(feature = "memoize")]
    pub fn memoize_with<V, D>(self, config: MemoizeConfig, delegate: D) -> Memoized<In, Out, V, F, D>
    where
        Out: Eq + Hash + Clone,
        V: Clone,
        D: Fn(Out) -> V,
    {
        Memoized::new(self, delegate, MemoCache::with_config(config))
    }

    /// Memoizes `delegate` using `hasher` for the cache.
    #[cfg(feature = "memoize")]
    pub fn memoize_with_hasher<V, D, S>(
        self,
        config: MemoizeConfig,
        hasher: S,
        delegate: D,
    ) -> Memoized<In, Out, V, F, D, S>
    where
        Out: Eq + Hash + Clone,
        V: Clone,
        D: Fn(Out) -> V,
        S: BuildHasher,
    {
        Memoized::new(
            self,
            delegate,
            MemoCache::with_config_and_hasher(config, hasher),
        )
    }

    /// Memoizes a fallible `delegate`.
    ///
    /// Only `Ok` values are cached. An `Err` is handed back unchanged by
    /// [`Memoized::try_apply`] and the key stays uncached, so the next call
    /// with the same key retries the delegate.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_function::transform::Transform;
    ///
    /// fn trimmed(text: &str) -> Option<&str> {
    ///     Some(text.trim())
    /// }
    ///
    /// let parsed = Transform::of(trimmed).try_memoize(|text| text.parse::<i32>());
    ///
    /// assert_eq!(parsed.try_apply(" 7 "), Ok(Some(7)));
    /// assert!(parsed.try_apply("seven").is_err());
    /// assert!(!parsed.contains_key(&"seven"));
    /// ```
    #[cfg(feature = "memoize")]
    pub fn try_memoize<V, E, D>(self, delegate: D) -> Memoized<In, Out, V, F, D>
    where
        Out: Eq + Hash + Clone,
        V: Clone,
        D: Fn(Out) -> Result<V, E>,
    {
        self.try_memoize_with(MemoizeConfig::default(), delegate)
    }

    /// Memoizes a fallible `delegate` with an explicit configuration.
    #[cfg(feature = "memoize")]
    pub fn try_memoize_with<V, E, D>(
        self,
        config: MemoizeConfig,
        delegate: D,
    ) -> Memoized<In, Out, V, F, D>
    where
        Out: Eq + Hash + Clone,
        V: Clone,
        D: Fn(Out) -> Result<V, E>,
    {
        Memoized::new(self, delegate, MemoCache::with_config(config))
    }
}

impl<In, Out, F: Clone> Clone for Transform<In, Out, F> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<In, Out, F> fmt::Debug for Transform<In, Out, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Transform")
            .field("input", &std::any::type_name::<In>())
            .field("output", &std::any::type_name::<Out>())
            .finish_non_exhaustive()
    }
}

//! Memoization for transform chains.
//!
//! This module provides the terminal memoizing step of a transform chain:
//!
//! - [`Memoized`]: a transform producing a key, a delegate and a cache
//! - [`MemoCache`]: the thread-safe compute-once map behind it
//! - [`MemoizeConfig`] and [`RacePolicy`]: how the cache is set up
//!
//! # Guarantees
//!
//! - An absent transform result returns `None` and never reaches the cache.
//! - A stored value never changes; entries are never evicted.
//! - Failed computations (an `Err` from a fallible delegate, or a panic)
//!   are not stored and are retried on the next request.
//! - With [`RacePolicy::LockPerKey`] (the default) the delegate runs at most
//!   once per key for the lifetime of the cache, even under concurrent
//!   first requests. Different keys compute in parallel.
//!
//! # Examples
//!
//! ```rust
//! use nested_function::memoize::{MemoizeConfig, RacePolicy};
//! use nested_function::transform::Transform;
//!
//! let config = MemoizeConfig::new().with_policy(RacePolicy::Converge);
//! let label = Transform::of(|code: u16| (code >= 100).then_some(code / 100))
//!     .memoize_with(config, |class| format!("{class}xx"));
//!
//! assert_eq!(label.apply(404).as_deref(), Some("4xx"));
//! assert_eq!(label.apply(99), None);
//! ```

mod cache;
mod config;
mod memoized;

pub use cache::{DefaultHashBuilder, MemoCache};
pub use config::{MemoizeConfig, RacePolicy};
pub use memoized::Memoized;

//! Composable transforms over possibly-absent values.
//!
//! This module provides [`Transform`], a unary function `In -> Option<Out>`,
//! together with the combinators that chain transforms and the adapters
//! that turn a chain into an ordinary function.
//!
//! # Overview
//!
//! - [`Transform::of`]: wraps a function that may return no value
//! - [`Transform::chain`] / [`Transform::and_then`] / [`Transform::map`]:
//!   step one level deeper, stopping at the first absent value
//! - [`Transform::predicate`]: `false` for absent values, the test otherwise
//! - [`Transform::choose`]: a predicate folded through a [`Choice`]
//! - [`Transform::memoize`]: a cached lookup keyed by the chain's result
//!   (requires the `memoize` feature)
//!
//! # Helper Functions
//!
//! - [`identity`]: the transform that returns its input
//! - [`lift`]: wraps a total function
//!
//! # Short-circuit
//!
//! Evaluation runs the stages strictly in chain order. Once a stage yields
//! `None`, no later stage is invoked:
//!
//! ```
//! use nested_function::transform::Transform;
//! use std::cell::Cell;
//!
//! let reached = Cell::new(false);
//! let chain = Transform::of(|n: i32| (n > 0).then_some(n)).and_then(|n| {
//!     reached.set(true);
//!     Some(n * 10)
//! });
//!
//! assert_eq!(chain.apply(-1), None);
//! assert!(!reached.get());
//! ```
//!
//! # Laws
//!
//! - **Definition**: `f.chain(g)(x) == f(x).and_then(g)`
//! - **Associativity**: `f.chain(g).chain(h) == f.chain(g.chain(h))`
//! - **Left Identity**: `identity().chain(f) == f`
//! - **Right Identity**: `f.chain(identity()) == f`
//! - **Predicate**: `f.predicate(p)(x) == f(x).is_some_and(p)`

mod choice;
mod nested;
mod utils;

pub use choice::{Choice, WhenTrue};
pub use nested::Transform;
pub use utils::{identity, lift};

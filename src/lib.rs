//! # nested-function
//!
//! Short-circuiting composition of functions that may produce no value,
//! with adapters that turn a composed chain into a predicate, a choice,
//! or a memoized lookup.
//!
//! ## Overview
//!
//! Navigating a graph of optional references usually ends in nested
//! `if let` ladders. This library lets the navigation be written as a
//! chain of small steps instead:
//!
//! - **Transform**: a unary function `In -> Option<Out>`; chaining stops at
//!   the first absent value
//! - **Predicate and Choice adapters**: turn a chain into `Fn(In) -> bool`
//!   or into a two-way selection
//! - **Memoizing adapter**: run an expensive delegate at most once per
//!   distinct intermediate key, safely across threads
//!
//! ## Feature Flags
//!
//! - `transform`: [`Transform`](transform::Transform) and its combinators
//! - `memoize`: the memoizing adapter and [`MemoCache`](memoize::MemoCache)
//! - `serde`: `Serialize`/`Deserialize` for the memoize configuration
//! - `fxhash` / `ahash`: faster hashers for the memo cache
//! - `full`: Enable all features except the hasher selection
//!
//! ## Example
//!
//! ```rust
//! use nested_function::prelude::*;
//!
//! struct Branch { leaf: Option<Leaf> }
//! struct Leaf { green: bool }
//!
//! impl Branch {
//!     fn leaf(&self) -> Option<&Leaf> { self.leaf.as_ref() }
//! }
//!
//! let green = Branch { leaf: Some(Leaf { green: true }) };
//! let bare = Branch { leaf: None };
//!
//! let has_green_leaf = Transform::of(Branch::leaf).predicate(|leaf| leaf.green);
//!
//! assert!(has_green_leaf(&green));
//! assert!(!has_green_leaf(&bare));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use nested_function::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "transform")]
    pub use crate::transform::*;

    #[cfg(feature = "memoize")]
    pub use crate::memoize::*;
}

#[cfg(feature = "transform")]
pub mod transform;

#[cfg(feature = "memoize")]
pub mod memoize;

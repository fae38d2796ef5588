//! Constructors for transforms that are always present.
//!
//! - [`identity`]: the unit of [`Transform::chain`]
//! - [`lift`]: wraps a total function

use super::Transform;

/// The transform that returns its input unchanged.
///
/// `identity().chain(t)` and `t.chain(identity())` behave exactly like `t`.
///
/// # Examples
///
/// ```
/// use nested_function::transform::{Transform, identity};
///
/// let checked = Transform::of(|n: u8| n.checked_add(1));
///
/// assert_eq!(identity().chain(checked.clone()).apply(1), checked.apply(1));
/// assert_eq!(identity::<u8>().apply(7), Some(7));
/// ```
#[inline]
pub fn identity<T>() -> Transform<T, T, fn(T) -> Option<T>> {
    Transform::of(Some)
}

/// Lifts a total function into a transform whose result is always present.
///
/// # Examples
///
/// ```
/// use nested_function::transform::lift;
///
/// let doubled = lift(|n: i32| n * 2);
/// assert_eq!(doubled.apply(21), Some(42));
/// ```
#[inline]
pub fn lift<In, Out, F>(function: F) -> Transform<In, Out, impl Fn(In) -> Option<Out>>
where
    F: Fn(In) -> Out,
{
    Transform::of(move |input| Some(function(input)))
}

//! A pair of alternatives selected by a boolean.
//!
//! [`Choice`] keeps a `when_true` and a `when_false` value side by side and
//! picks one of them for a flag. It is the terminal step of
//! [`Transform::choose`](super::Transform::choose), which turns a predicate
//! chain into a rendering decision.
//!
//! # Examples
//!
//! ```
//! use nested_function::transform::Choice;
//!
//! let marker = Choice::when_true('+').when_false('-');
//!
//! assert_eq!(*marker.select(true), '+');
//! assert_eq!(marker.fold(false, |on| on.to_string(), |off| format!("[{off}]")), "[-]");
//! ```

/// Two alternatives of the same type, one per boolean outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Choice<A> {
    when_true: A,
    when_false: A,
}

/// First stage of the [`Choice`] builder, holding the `when_true` value.
///
/// Created by [`Choice::when_true`]; call [`when_false`](Self::when_false) to
/// finish the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a choice needs its when_false value"]
pub struct WhenTrue<A>(A);

impl<A> WhenTrue<A> {
    /// Completes the choice with the value selected for `false`.
    pub fn when_false(self, when_false: A) -> Choice<A> {
        Choice::new(self.0, when_false)
    }
}

impl<A> Choice<A> {
    /// Creates a choice from both alternatives.
    #[inline]
    pub const fn new(when_true: A, when_false: A) -> Self {
        Self {
            when_true,
            when_false,
        }
    }

    /// Starts building a choice with the value selected for `true`.
    #[inline]
    pub const fn when_true(when_true: A) -> WhenTrue<A> {
        WhenTrue(when_true)
    }

    /// Returns the alternative for `flag`.
    #[inline]
    pub const fn select(&self, flag: bool) -> &A {
        if flag { &self.when_true } else { &self.when_false }
    }

    /// Consumes the choice and returns the alternative for `flag`.
    pub fn into_selected(self, flag: bool) -> A {
        if flag { self.when_true } else { self.when_false }
    }

    /// Applies `on_true` or `on_false` to the matching alternative.
    pub fn fold<R, T, U>(self, flag: bool, on_true: T, on_false: U) -> R
    where
        T: FnOnce(A) -> R,
        U: FnOnce(A) -> R,
    {
        if flag {
            on_true(self.when_true)
        } else {
            on_false(self.when_false)
        }
    }

    /// Returns `(when_true, when_false)`.
    pub fn into_parts(self) -> (A, A) {
        (self.when_true, self.when_false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, "on")]
    #[case(false, "off")]
    fn test_select_picks_matching_alternative(#[case] flag: bool, #[case] expected: &str) {
        let choice = Choice::new("on", "off");
        assert_eq!(*choice.select(flag), expected);
        assert_eq!(choice.into_selected(flag), expected);
    }

    #[rstest]
    fn test_builder_matches_new() {
        assert_eq!(Choice::when_true(1).when_false(2), Choice::new(1, 2));
    }

    #[rstest]
    fn test_fold_only_runs_matching_function() {
        let choice = Choice::new(String::from("yes"), String::from("no"));
        let folded = choice.fold(
            false,
            |_| unreachable!("when_true must not be folded for false"),
            |value| value.len(),
        );
        assert_eq!(folded, 2);
    }

    #[rstest]
    fn test_into_parts() {
        assert_eq!(Choice::new('a', 'b').into_parts(), ('a', 'b'));
    }
}

//! Applicative type class - combining independent containers.
//!
//! `Applicative` extends [`Functor`] with lifting a pure value (`pure`) and
//! combining several containers with one function (`map2`, `map3`). The
//! result is present only if every input is present.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybars::Maybe;
//! use maybars::typeclass::Applicative;
//!
//! let x: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(x, Maybe::Some(42));
//!
//! let area = Maybe::some(3).map2(Maybe::some(4), |w, h| w * h);
//! assert_eq!(area, Maybe::Some(12));
//! assert_eq!(Maybe::some(3).product(Maybe::<i32>::none()), Maybe::None);
//! ```

use super::functor::Functor;
use crate::maybe::Maybe;

/// A functor that can lift values and combine independent containers.
pub trait Applicative: Functor {
    /// Lifts a value into the container.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two containers with `function`.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three containers with `function`.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs the values of two containers.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Keeps the left value, requiring both to be present.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Keeps the right value, requiring both to be present.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a contained function to a contained value.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip_with(other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Maybe::Some(a), Maybe::Some(b), Maybe::Some(c)) => Maybe::Some(function(a, b, c)),
            _ => Maybe::None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.zip_with(other, |function, b| function(b))
    }
}

// =============================================================================
// Outcome<A> Implementation
// =============================================================================

#[cfg(feature = "outcome")]
impl<A> Applicative for crate::outcome::Outcome<A> {
    #[inline]
    fn pure<B>(value: B) -> crate::outcome::Outcome<B> {
        crate::outcome::Outcome::Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(
        self,
        other: crate::outcome::Outcome<B>,
        function: F,
    ) -> crate::outcome::Outcome<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip_with(other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: crate::outcome::Outcome<B>,
        third: crate::outcome::Outcome<C>,
        function: F,
    ) -> crate::outcome::Outcome<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.zip_with(second, |a, b| (a, b))
            .zip_with(third, |(a, b), c| function(a, b, c))
    }

    #[inline]
    fn apply<B, Output>(self, other: crate::outcome::Outcome<B>) -> crate::outcome::Outcome<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.zip_with(other, |function, b| function(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Maybe::some(1), Maybe::some(2), Maybe::some(3), Maybe::Some(6))]
    #[case(Maybe::some(1), Maybe::none(), Maybe::some(3), Maybe::None)]
    #[case(Maybe::none(), Maybe::none(), Maybe::none(), Maybe::None)]
    fn maybe_map3(
        #[case] first: Maybe<i32>,
        #[case] second: Maybe<i32>,
        #[case] third: Maybe<i32>,
        #[case] expected: Maybe<i32>,
    ) {
        assert_eq!(first.map3(second, third, |a, b, c| a + b + c), expected);
    }

    #[rstest]
    fn maybe_apply() {
        let double = Maybe::some(|x: i32| x * 2);
        assert_eq!(double.apply(Maybe::some(21)), Maybe::Some(42));
    }

    #[cfg(feature = "outcome")]
    #[rstest]
    fn outcome_map3_reports_first_failure() {
        use crate::outcome::Outcome;

        let result = Outcome::ok(1).map3(
            Outcome::<i32>::err("second"),
            Outcome::<i32>::err("third"),
            |a, b, c| a + b + c,
        );
        assert_eq!(result.message(), Ok(Some("second")));
    }
}

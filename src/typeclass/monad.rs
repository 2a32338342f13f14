//! Monad type class - sequencing dependent computations.
//!
//! `Monad` extends [`Applicative`] with `flat_map`, where each step may
//! depend on the value of the previous one and may itself end the chain.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybars::Maybe;
//! use maybars::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Maybe<i32> {
//!     Maybe::of(text.parse::<i32>().ok()).filter(|n| *n > 0)
//! }
//!
//! let result = Maybe::some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::some(n * 2));
//! assert_eq!(result, Maybe::Some(84));
//! ```

use super::applicative::Applicative;
use crate::maybe::Maybe;

/// An applicative whose computations can be chained.
pub trait Monad: Applicative {
    /// Chains a container-producing function onto the value.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`flat_map`](Self::flat_map).
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding the value of `self`.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.bind(function)
    }
}

#[cfg(feature = "outcome")]
impl<A> Monad for crate::outcome::Outcome<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> crate::outcome::Outcome<B>
    where
        F: FnOnce(A) -> crate::outcome::Outcome<B>,
    {
        self.bind(function)
    }
}

//! Functor type class - mapping over container values.
//!
//! A `Functor` applies a function to the value inside a container while
//! keeping the container's shape: an empty `Maybe` stays empty, and an
//! `Outcome::Err` keeps its failure.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybars::Maybe;
//! use maybars::typeclass::Functor;
//!
//! fn describe<F: Functor<Inner = i32>>(container: F) -> F::WithType<String> {
//!     container.fmap(|n| format!("#{n}"))
//! }
//!
//! assert_eq!(describe(Maybe::some(5)), Maybe::Some("#5".to_string()));
//! assert_eq!(describe(Maybe::none()), Maybe::None);
//! ```

use super::higher::TypeConstructor;
use crate::maybe::Maybe;

/// A container whose value can be mapped.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the value, consuming the container.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference to the value.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value with `value`, keeping the shape.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value, keeping the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Outcome<A> Implementation
// =============================================================================

#[cfg(feature = "outcome")]
impl<A> Functor for crate::outcome::Outcome<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> crate::outcome::Outcome<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> crate::outcome::Outcome<B>
    where
        F: FnOnce(&A) -> B,
    {
        use crate::outcome::Outcome;

        match self {
            Outcome::Ok(value) => Outcome::Ok(function(value)),
            Outcome::Err(failure) => Outcome::Err(failure.clone()),
        }
    }
}

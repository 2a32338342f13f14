//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` as a type constructor directly. The
//! [`TypeConstructor`] trait records the inner type of a container and how
//! to rebuild the same container around another type, which is all the
//! [`Functor`](super::Functor) and [`Monad`](super::Monad) traits need.
//!
//! # Example
//!
//! ```rust
//! use maybars::Maybe;
//! use maybars::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Maybe<String> = emptied(Maybe::some(42));
//! assert_eq!(none_string, Maybe::None);
//! ```

use crate::maybe::Maybe;

/// A type of the shape `F<A>`, able to name `F<B>` for any `B`.
pub trait TypeConstructor {
    /// The `A` in `F<A>`.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

#[cfg(feature = "outcome")]
impl<A> TypeConstructor for crate::outcome::Outcome<A> {
    type Inner = A;
    type WithType<B> = crate::outcome::Outcome<B>;
}

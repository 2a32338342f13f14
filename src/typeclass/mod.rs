//! Type class traits for the containers in this crate.
//!
//! - [`Functor`]: mapping over a contained value
//! - [`Applicative`]: lifting values and combining independent containers
//! - [`Monad`]: chaining dependent computations
//!
//! `Maybe` implements all three; `Outcome` does too when the `outcome`
//! feature is enabled. `Fallible` owns a panic payload and cannot be cloned,
//! so it only offers the inherent combinators.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] uses Generic
//! Associated Types to name "the same container around another type", which
//! is enough to state these traits generically.
//!
//! # Examples
//!
//! ```rust
//! use maybars::Maybe;
//! use maybars::typeclass::Monad;
//!
//! fn halve<M>(container: M) -> M::WithType<i32>
//! where
//!     M: Monad<Inner = i32>,
//! {
//!     container.flat_map(|n| if n % 2 == 0 { M::pure(n / 2) } else { M::pure(n) })
//! }
//!
//! assert_eq!(halve(Maybe::some(10)), Maybe::Some(5));
//! assert_eq!(halve(Maybe::none()), Maybe::None);
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;

//! # maybars
//!
//! An optional-value monad for Rust: `Maybe<T>` and its railway-oriented
//! companions.
//!
//! ## Overview
//!
//! - **Maybe**: construction from optional sources, extraction at the
//!   boundary, query operators (`map`, `bind`, `filter`, `select_many`,
//!   `join`), boolean gates and three-valued logic
//! - **Sequences**: collecting containers and the `*_or_none` element queries
//! - **Comparers**: default and structural strategies lifted to `Maybe<T>`,
//!   shared per element type
//! - **Outcome**: a value or a failure with an optional message
//! - **Fallible**: a value or a captured fault that can be re-signalled
//! - **Type Classes**: Functor, Applicative and Monad
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Applicative, Monad)
//! - `outcome`: The `Outcome` type
//! - `fallible`: The `Fallible` type
//! - `async`: Asynchronous `bind`/`map`/`filter` for `Maybe`
//! - `parse`: Boolean parsing into `Maybe<bool>`
//! - `serde`: Serialization of `Maybe<T>` as `Option<T>`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use maybars::prelude::*;
//!
//! let user = Maybe::some((7, "ada"));
//! let score = Maybe::some((7, 91));
//!
//! let line = user
//!     .join(score, |u| u.0, |s| s.0, |u, s| format!("{}: {}", u.1, s.1))
//!     .or(Maybe::some("unknown".to_string()));
//! assert_eq!(line, Maybe::Some("ada: 91".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use maybars::prelude::*;
/// ```
pub mod prelude {
    pub use crate::comparer::{Comparer, EqualityComparer, MaybeComparer};
    pub use crate::error::Error;
    pub use crate::maybe::{Maybe, MaybeSequence, SequenceExt};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "outcome")]
    pub use crate::outcome::{Failure, Outcome};

    #[cfg(feature = "fallible")]
    pub use crate::fallible::{Fallible, Fault};

    #[cfg(feature = "parse")]
    pub use crate::parse::{BooleanStyles, parse_bool};
}

pub mod comparer;
pub mod error;
pub mod maybe;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "outcome")]
pub mod outcome;

#[cfg(feature = "fallible")]
pub mod fallible;

#[cfg(feature = "parse")]
pub mod parse;

pub use error::Error;
pub use maybe::Maybe;

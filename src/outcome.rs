//! Outcome type - a value or a described failure.
//!
//! This module provides `Outcome<T>`, the railway-oriented companion of
//! [`Maybe`]. Where `Maybe` only says that a value is missing, an `Outcome`
//! may also say *why*:
//!
//! - `Ok(value)`: the computation produced a value
//! - `Err(Failure::Empty)`: no value, no explanation
//! - `Err(Failure::Message(_))`: no value, with a description
//!
//! The query operators mirror those of `Maybe`, with `Err` in place of
//! `None`. An `Err` flowing through any operator keeps its `Failure`, so a
//! message survives being re-typed.
//!
//! # Examples
//!
//! ```rust
//! use maybars::outcome::{Failure, Outcome};
//!
//! fn parse_age(text: &str) -> Outcome<u8> {
//!     text.parse().map_err(|_| format!("'{text}' is not an age")).into()
//! }
//!
//! let adult = parse_age("42").filter(|age| *age >= 18);
//! assert_eq!(adult, Outcome::Ok(42));
//!
//! let broken = parse_age("forty").map(|age| age + 1);
//! assert_eq!(broken.message(), Ok(Some("'forty' is not an age")));
//! assert_eq!(parse_age("7").filter(|age| *age >= 18), Outcome::Err(Failure::Empty));
//! ```

use std::fmt;

use crate::comparer::EqualityComparer;
use crate::error::Error;
use crate::maybe::Maybe;

/// The reason an [`Outcome`] holds no value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Failure {
    /// No value, without a description.
    Empty,
    /// No value, with a description of why.
    Message(String),
}

impl Failure {
    /// Returns the description, if any.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Message(message) => Some(message),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(formatter, "no value"),
            Self::Message(message) => write!(formatter, "{message}"),
        }
    }
}

impl std::error::Error for Failure {}

/// A value, or the [`Failure`] explaining its absence.
///
/// # Examples
///
/// ```rust
/// use maybars::outcome::Outcome;
///
/// let total = Outcome::ok(2).zip_with(Outcome::ok(3), |a, b| a + b);
/// assert_eq!(total, Outcome::Ok(5));
///
/// let failed = Outcome::<i32>::err("disk full").zip_with(Outcome::ok(3), |a, b| a + b);
/// assert_eq!(failed.message(), Ok(Some("disk full")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome<T> {
    /// A value.
    Ok(T),
    /// No value.
    Err(Failure),
}

impl<T> Outcome<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an outcome from an optional value: `Err(Failure::Empty)` for `None`.
    #[inline]
    pub fn of(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Ok(value),
            None => Self::Err(Failure::Empty),
        }
    }

    /// Creates a successful outcome.
    #[inline]
    pub const fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// Creates a successful outcome. Alias of [`Outcome::ok`].
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Ok(value)
    }

    /// Creates a failed outcome with a description.
    #[inline]
    pub fn err(message: impl Into<String>) -> Self {
        Self::Err(Failure::Message(message.into()))
    }

    /// Creates a failed outcome without a description.
    #[inline]
    pub const fn none() -> Self {
        Self::Err(Failure::Empty)
    }

    // =========================================================================
    // Predicates and Access
    // =========================================================================

    /// Returns `true` if the outcome holds a value.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the outcome holds a failure.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns a reference to the value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValue`] if the outcome is an `Err`.
    #[inline]
    pub const fn value(&self) -> Result<&T, Error> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(_) => Err(Error::NoValue {
                container: "Outcome",
            }),
        }
    }

    /// Returns the value, consuming the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValue`] if the outcome is an `Err`.
    #[inline]
    pub fn into_value(self) -> Result<T, Error> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(_) => Err(Error::NoValue {
                container: "Outcome",
            }),
        }
    }

    /// Returns a reference to the failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAFailure`] if the outcome is `Ok`.
    #[inline]
    pub const fn failure(&self) -> Result<&Failure, Error> {
        match self {
            Self::Ok(_) => Err(Error::NotAFailure {
                container: "Outcome",
            }),
            Self::Err(failure) => Ok(failure),
        }
    }

    /// Returns the failure description, `None` if the failure has none.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAFailure`] if the outcome is `Ok`.
    #[inline]
    pub fn message(&self) -> Result<Option<&str>, Error> {
        self.failure().map(Failure::message)
    }

    /// Returns the value, or `default` on failure.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the value, or `T::default()` on failure.
    #[inline]
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.value_or_else(|_| T::default())
    }

    /// Returns the value, or computes one from the failure.
    #[inline]
    pub fn value_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(Failure) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(failure) => function(failure),
        }
    }

    /// Collapses the outcome by invoking exactly one of two functions.
    #[inline]
    pub fn switch<R, S, E>(self, ok_case: S, err_case: E) -> R
    where
        S: FnOnce(T) -> R,
        E: FnOnce(Failure) -> R,
    {
        match self {
            Self::Ok(value) => ok_case(value),
            Self::Err(failure) => err_case(failure),
        }
    }

    /// Runs `action` on the value if present and returns the outcome unchanged.
    #[inline]
    #[must_use]
    pub fn on_ok<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` on the failure if present and returns the outcome unchanged.
    #[inline]
    #[must_use]
    pub fn on_err<F>(self, action: F) -> Self
    where
        F: FnOnce(&Failure),
    {
        if let Self::Err(failure) = &self {
            action(failure);
        }
        self
    }

    // =========================================================================
    // Query Operators
    // =========================================================================

    /// Applies a function to the value, keeping any failure as is.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(failure) => Outcome::Err(failure),
        }
    }

    /// Chains an outcome-producing function onto the value.
    #[inline]
    pub fn bind<U, F>(self, binder: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Ok(value) => binder(value),
            Self::Err(failure) => Outcome::Err(failure),
        }
    }

    /// Keeps the value only if it satisfies `predicate`; a rejected value
    /// becomes `Err(Failure::Empty)`.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Ok(value) => {
                if predicate(&value) {
                    Self::Ok(value)
                } else {
                    Self::Err(Failure::Empty)
                }
            }
            Self::Err(failure) => Self::Err(failure),
        }
    }

    /// Binds a second outcome and projects both values into a result.
    #[inline]
    pub fn select_many<U, V, B, R>(self, binder: B, result_selector: R) -> Outcome<V>
    where
        B: FnOnce(&T) -> Outcome<U>,
        R: FnOnce(T, U) -> V,
    {
        match self {
            Self::Ok(value) => binder(&value).map(|middle| result_selector(value, middle)),
            Self::Err(failure) => Outcome::Err(failure),
        }
    }

    /// Equi-joins two outcomes on keys compared with `==`.
    ///
    /// An `Err` on either side is propagated (outer first); when both are
    /// `Ok` but the keys differ the result is `Err(Failure::Empty)`.
    #[inline]
    pub fn join<U, K, V, OK, IK, R>(
        self,
        inner: Outcome<U>,
        outer_key: OK,
        inner_key: IK,
        result_selector: R,
    ) -> Outcome<V>
    where
        K: PartialEq,
        OK: FnOnce(&T) -> K,
        IK: FnOnce(&U) -> K,
        R: FnOnce(T, U) -> V,
    {
        self.join_with(
            inner,
            |outer, inner| outer_key(outer) == inner_key(inner),
            result_selector,
        )
    }

    /// Equi-joins two outcomes on keys compared with `comparer`.
    #[inline]
    pub fn join_by<U, K, V, OK, IK, R, C>(
        self,
        inner: Outcome<U>,
        outer_key: OK,
        inner_key: IK,
        result_selector: R,
        comparer: &C,
    ) -> Outcome<V>
    where
        OK: FnOnce(&T) -> K,
        IK: FnOnce(&U) -> K,
        R: FnOnce(T, U) -> V,
        C: EqualityComparer<K> + ?Sized,
    {
        self.join_with(
            inner,
            |outer, inner| comparer.equals(&outer_key(outer), &inner_key(inner)),
            result_selector,
        )
    }

    /// Group-joins two outcomes.
    ///
    /// An outcome holds at most one value, so this is the same as
    /// [`Outcome::join`].
    #[inline]
    pub fn group_join<U, K, V, OK, IK, R>(
        self,
        inner: Outcome<U>,
        outer_key: OK,
        inner_key: IK,
        result_selector: R,
    ) -> Outcome<V>
    where
        K: PartialEq,
        OK: FnOnce(&T) -> K,
        IK: FnOnce(&U) -> K,
        R: FnOnce(T, U) -> V,
    {
        self.join(inner, outer_key, inner_key, result_selector)
    }

    fn join_with<U, V, M, R>(self, inner: Outcome<U>, matches: M, result_selector: R) -> Outcome<V>
    where
        M: FnOnce(&T, &U) -> bool,
        R: FnOnce(T, U) -> V,
    {
        match (self, inner) {
            (Self::Ok(outer), Outcome::Ok(inner)) => {
                if matches(&outer, &inner) {
                    Outcome::Ok(result_selector(outer, inner))
                } else {
                    Outcome::Err(Failure::Empty)
                }
            }
            (Self::Err(failure), _) | (Self::Ok(_), Outcome::Err(failure)) => Outcome::Err(failure),
        }
    }

    /// Combines two outcomes with `function` when both are `Ok`.
    #[inline]
    pub fn zip_with<U, V, F>(self, other: Outcome<U>, function: F) -> Outcome<V>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Self::Ok(left), Outcome::Ok(right)) => Outcome::Ok(function(left, right)),
            (Self::Err(failure), _) | (Self::Ok(_), Outcome::Err(failure)) => Outcome::Err(failure),
        }
    }

    /// Returns `self` if `Ok`, otherwise the outcome computed from the failure.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce(Failure) -> Self,
    {
        match self {
            Self::Ok(value) => Self::Ok(value),
            Self::Err(failure) => function(failure),
        }
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts into a `Maybe`, discarding the failure.
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Ok(value) => Maybe::Some(value),
            Self::Err(_) => Maybe::None,
        }
    }

    /// Converts into a standard `Result` for `?` propagation.
    ///
    /// # Errors
    ///
    /// Returns the [`Failure`] if the outcome is an `Err`.
    #[inline]
    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(failure) => Err(failure),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok({value})"),
            Self::Err(Failure::Empty) => write!(formatter, "Err"),
            Self::Err(Failure::Message(message)) => write!(formatter, "Err({message})"),
        }
    }
}

impl<T> From<Maybe<T>> for Outcome<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        Self::of(value.into_option())
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for Outcome<T> {
    /// Converts a `Result`, keeping the error's display text as the message.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::err(error.to_string()),
        }
    }
}

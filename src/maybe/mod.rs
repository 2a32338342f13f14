//! Maybe type - a value that may or may not be present.
//!
//! This module provides the `Maybe<T>` type, which is either `Some(T)` or
//! `None`. It is used to express optionality as a value and to compose such
//! values without unwrapping them early:
//!
//! - Construction from optional sources (`of`, `some`, `some_or_none`, `none`)
//! - Extraction at the boundary (`try_get_value`, `switch`, `value_or_*`, `value`)
//! - Query operators (`map`, `bind`, `filter`, `select_many`, `join`, `zip_with`)
//! - Boolean gates over two containers (`or`, `and`, `unless`, `xor`, ...)
//! - Three-valued logic on `Maybe<bool>`
//! - Bridges to and from sequences (see [`MaybeSequence`] and [`SequenceExt`])
//!
//! # Ordering
//!
//! Two empty containers are equal, an empty container orders strictly below
//! every present one, and two present containers compare by their values.
//! Use [`MaybeComparer`](crate::comparer::MaybeComparer) to compare with a
//! strategy other than `T`'s natural order.
//!
//! # Examples
//!
//! ```rust
//! use maybars::Maybe;
//!
//! let port = Maybe::of(Some("8080"))
//!     .bind(|text| Maybe::of(text.parse::<u16>().ok()))
//!     .filter(|port| *port >= 1024);
//! assert_eq!(port, Maybe::Some(8080));
//!
//! let description = port.switch(|port| format!("port {port}"), || "no port".to_string());
//! assert_eq!(description, "port 8080");
//! ```

#[cfg(feature = "async")]
mod async_ops;
mod gate;
mod logic;
mod sequence;

pub use sequence::{MaybeSequence, SelectAny, SequenceExt, Values, WhereAny, ZipAny};

use std::fmt;

use crate::comparer::EqualityComparer;
use crate::error::Error;

/// A value that may or may not be present.
///
/// The `None` variant is declared first so that the derived ordering places
/// every empty container below every present one.
///
/// # Type Parameters
///
/// * `T` - The type of the enclosed value
///
/// # Examples
///
/// ```rust
/// use maybars::Maybe;
///
/// let present = Maybe::some(42);
/// let absent: Maybe<i32> = Maybe::none();
///
/// assert!(present.is_some());
/// assert!(absent.is_none());
/// assert!(absent < present);
/// assert_eq!(present.map(|x| x * 2), Maybe::Some(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Maybe<T> {
    /// No value.
    None,
    /// A present value.
    Some(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a container from an optional source value.
    ///
    /// Returns `None` when the source is `None`, otherwise a present container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert_eq!(Maybe::of(Some(1)), Maybe::Some(1));
    /// assert_eq!(Maybe::<i32>::of(None), Maybe::None);
    /// ```
    #[inline]
    pub fn of(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    /// Wraps a value that is known to be present.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Wraps the value if present, otherwise returns `None`.
    ///
    /// Identical to [`Maybe::of`]; the name reads better at call sites that
    /// deal with nullable sources.
    #[inline]
    pub fn some_or_none(value: Option<T>) -> Self {
        Self::of(value)
    }

    /// Returns the empty container.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` if the container holds a value.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if the container holds no value.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if the container holds a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert!(Maybe::some(3).contains(&3));
    /// assert!(!Maybe::some(3).contains(&4));
    /// assert!(!Maybe::<i32>::none().contains(&3));
    /// ```
    #[inline]
    pub fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match self {
            Self::Some(inner) => inner == value,
            Self::None => false,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Extracts the value without ever failing.
    ///
    /// Returns `(true, value)` when present and `(false, T::default())`
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert_eq!(Maybe::some(7).try_get_value(), (true, 7));
    /// assert_eq!(Maybe::<i32>::none().try_get_value(), (false, 0));
    /// ```
    #[inline]
    pub fn try_get_value(self) -> (bool, T)
    where
        T: Default,
    {
        match self {
            Self::Some(value) => (true, value),
            Self::None => (false, T::default()),
        }
    }

    /// Returns a reference to the value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValue`] if the container is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::{Error, Maybe};
    ///
    /// assert_eq!(Maybe::some(1).value(), Ok(&1));
    /// assert_eq!(
    ///     Maybe::<i32>::none().value(),
    ///     Err(Error::NoValue { container: "Maybe" })
    /// );
    /// ```
    #[inline]
    pub const fn value(&self) -> Result<&T, Error> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(Error::NoValue { container: "Maybe" }),
        }
    }

    /// Returns the value, consuming the container.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValue`] if the container is empty.
    #[inline]
    pub fn into_value(self) -> Result<T, Error> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(Error::NoValue { container: "Maybe" }),
        }
    }

    /// Returns the value, or `default` if the container is empty.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the value, or `T::default()` if the container is empty.
    #[inline]
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.value_or_else(T::default)
    }

    /// Returns the value, or computes one if the container is empty.
    #[inline]
    pub fn value_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => function(),
        }
    }

    /// Returns the value, or the error produced by `error` if the container is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns `Err(error())` if the container is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// let missing: Maybe<u16> = Maybe::none();
    /// assert_eq!(missing.value_or_error(|| "port is required"), Err("port is required"));
    /// ```
    #[inline]
    pub fn value_or_error<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(error()),
        }
    }

    /// Returns a reference to the value as an `Option`.
    #[inline]
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Converts the container into an `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Returns an iterator over the value, yielding zero or one item.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_option().into_iter()
    }

    // =========================================================================
    // Pattern Matching
    // =========================================================================

    /// Collapses the container by invoking exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// let greeting = Maybe::some("Ada").switch(|name| format!("Hello, {name}"), || "Hello".into());
    /// assert_eq!(greeting, "Hello, Ada");
    ///
    /// let greeting = Maybe::<&str>::none().switch(|name| format!("Hello, {name}"), || "Hello".into());
    /// assert_eq!(greeting, "Hello");
    /// ```
    #[inline]
    pub fn switch<R, S, N>(self, some_case: S, none_case: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Self::Some(value) => some_case(value),
            Self::None => none_case(),
        }
    }

    /// Collapses the container, using `default` for the empty case.
    #[inline]
    pub fn switch_or<R, S>(self, some_case: S, default: R) -> R
    where
        S: FnOnce(T) -> R,
    {
        match self {
            Self::Some(value) => some_case(value),
            Self::None => default,
        }
    }

    /// Runs `action` on the value if present and returns the container unchanged.
    #[inline]
    #[must_use]
    pub fn on_some<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` if the container is empty and returns it unchanged.
    #[inline]
    #[must_use]
    pub fn on_none<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            action();
        }
        self
    }

    // =========================================================================
    // Query Operators
    // =========================================================================

    /// Applies a function to the value if present.
    ///
    /// `function` is never invoked on an empty container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert_eq!(Maybe::some("four").map(str::len), Maybe::Some(4));
    /// assert_eq!(Maybe::<&str>::none().map(str::len), Maybe::None);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Chains a container-producing function onto the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() };
    /// assert_eq!(Maybe::some(8).bind(half).bind(half), Maybe::Some(2));
    /// assert_eq!(Maybe::some(6).bind(half).bind(half), Maybe::None);
    /// ```
    #[inline]
    pub fn bind<U, F>(self, binder: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => binder(value),
            Self::None => Maybe::None,
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    /// Binds a second container and projects both values into a result.
    ///
    /// This is the two-clause query form: the result is present only when
    /// `self` is present and `binder` returns a present container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// let total = Maybe::some(3).select_many(|x| Maybe::some(x * 10), |x, y| x + y);
    /// assert_eq!(total, Maybe::Some(33));
    /// ```
    #[inline]
    pub fn select_many<U, V, B, R>(self, binder: B, result_selector: R) -> Maybe<V>
    where
        B: FnOnce(&T) -> Maybe<U>,
        R: FnOnce(T, U) -> V,
    {
        match self {
            Self::Some(value) => match binder(&value) {
                Maybe::Some(middle) => Maybe::Some(result_selector(value, middle)),
                Maybe::None => Maybe::None,
            },
            Self::None => Maybe::None,
        }
    }

    /// Equi-joins two containers on keys compared with `==`.
    ///
    /// The result is present only when both containers are present and
    /// their projected keys are equal. Key selectors are not invoked unless
    /// both sides are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// let user = Maybe::some((1, "ada"));
    /// let order = Maybe::some((1, 99.5));
    /// let joined = user.join(order, |u| u.0, |o| o.0, |u, o| (u.1, o.1));
    /// assert_eq!(joined, Maybe::Some(("ada", 99.5)));
    ///
    /// let other = Maybe::some((2, 10.0));
    /// assert_eq!(user.join(other, |u| u.0, |o| o.0, |u, o| (u.1, o.1)), Maybe::None);
    /// ```
    #[inline]
    pub fn join<U, K, V, OK, IK, R>(
        self,
        inner: Maybe<U>,
        outer_key: OK,
        inner_key: IK,
        result_selector: R,
    ) -> Maybe<V>
    where
        K: PartialEq,
        OK: FnOnce(&T) -> K,
        IK: FnOnce(&U) -> K,
        R: FnOnce(T, U) -> V,
    {
        match (self, inner) {
            (Self::Some(outer), Maybe::Some(inner)) => {
                if outer_key(&outer) == inner_key(&inner) {
                    Maybe::Some(result_selector(outer, inner))
                } else {
                    Maybe::None
                }
            }
            _ => Maybe::None,
        }
    }

    /// Equi-joins two containers on keys compared with `comparer`.
    #[inline]
    pub fn join_by<U, K, V, OK, IK, R, C>(
        self,
        inner: Maybe<U>,
        outer_key: OK,
        inner_key: IK,
        result_selector: R,
        comparer: &C,
    ) -> Maybe<V>
    where
        OK: FnOnce(&T) -> K,
        IK: FnOnce(&U) -> K,
        R: FnOnce(T, U) -> V,
        C: EqualityComparer<K> + ?Sized,
    {
        match (self, inner) {
            (Self::Some(outer), Maybe::Some(inner)) => {
                if comparer.equals(&outer_key(&outer), &inner_key(&inner)) {
                    Maybe::Some(result_selector(outer, inner))
                } else {
                    Maybe::None
                }
            }
            _ => Maybe::None,
        }
    }

    /// Group-joins two containers.
    ///
    /// A container holds at most one value, so there is never more than one
    /// inner element to group: the result is the same as [`Maybe::join`].
    #[inline]
    pub fn group_join<U, K, V, OK, IK, R>(
        self,
        inner: Maybe<U>,
        outer_key: OK,
        inner_key: IK,
        result_selector: R,
    ) -> Maybe<V>
    where
        K: PartialEq,
        OK: FnOnce(&T) -> K,
        IK: FnOnce(&U) -> K,
        R: FnOnce(T, U) -> V,
    {
        self.join(inner, outer_key, inner_key, result_selector)
    }

    /// Combines two containers with `function` when both are present.
    #[inline]
    pub fn zip_with<U, V, F>(self, other: Maybe<U>, function: F) -> Maybe<V>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Self::Some(left), Maybe::Some(right)) => Maybe::Some(function(left, right)),
            _ => Maybe::None,
        }
    }

    /// Pairs the values of two containers when both are present.
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Replaces the value, keeping the shape.
    #[inline]
    pub fn replace<U>(self, value: U) -> Maybe<U> {
        self.map(|_| value)
    }

    /// Discards the value, keeping the shape.
    #[inline]
    pub fn void(self) -> Maybe<()> {
        self.replace(())
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.bind(|inner| inner)
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Maybe({value})"),
            Self::None => write!(formatter, "Maybe(None)"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects a sequence of containers, failing as a whole on the first empty
/// element.
///
/// This is the same policy as [`MaybeSequence::collect_all`].
///
/// # Examples
///
/// ```rust
/// use maybars::Maybe;
///
/// let all: Maybe<Vec<i32>> = vec![Maybe::some(1), Maybe::some(2)].into_iter().collect();
/// assert_eq!(all, Maybe::Some(vec![1, 2]));
///
/// let broken: Maybe<Vec<i32>> = vec![Maybe::some(1), Maybe::none()].into_iter().collect();
/// assert_eq!(broken, Maybe::None);
/// ```
impl<A, V> FromIterator<Maybe<A>> for Maybe<V>
where
    V: FromIterator<A>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Maybe<A>>,
    {
        iter.into_iter()
            .map(Maybe::into_option)
            .collect::<Option<V>>()
            .into()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Maybe<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Some(value) => serializer.serialize_some(value),
            Self::None => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Maybe<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::of)
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);

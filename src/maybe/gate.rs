//! Boolean gates over two containers.
//!
//! Each gate reads the shapes of two containers as a pair of truth values
//! (`Some` = 1, `None` = 0) and returns one of the operands or an empty
//! container. The operands may enclose different types; the return type
//! names which side's type an empty result carries.
//!
//! | Gate            | S,S   | S,N   | N,S   | N,N   |
//! |-----------------|-------|-------|-------|-------|
//! | `or`            | this  | this  | other | N     |
//! | `or_rtl`        | other | this  | other | N     |
//! | `and`           | other | N     | N     | N     |
//! | `and_rtl`       | this  | N     | N     | N     |
//! | `unless`        | N     | this  | N     | N     |
//! | `unless_rtl`    | N     | N     | other | N     |
//! | `xor`           | N     | this  | other | N     |
//! | `left_and`      | this  | other | other | other |
//! | `right_and`     | other | this  | this  | this  |
//! | `ignore`        | this  | this  | N     | N     |
//! | `continue_with` | other | N     | other | N     |

use super::Maybe;

impl<T> Maybe<T> {
    /// Returns `self` if present, otherwise `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).or(Maybe::some(2)), Maybe::Some(1));
    /// assert_eq!(Maybe::none().or(Maybe::some(2)), Maybe::Some(2));
    /// ```
    #[inline]
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    /// Returns `self` if present, otherwise the container computed by `function`.
    ///
    /// `function` is only invoked when `self` is empty.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => function(),
        }
    }

    /// Returns `other` if present, otherwise `self`.
    ///
    /// This is [`Maybe::or`] read right to left.
    #[inline]
    #[must_use]
    pub fn or_rtl(self, other: Self) -> Self {
        other.or(self)
    }

    /// Returns `other` if `self` is present, otherwise an empty container of
    /// `other`'s type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).and(Maybe::some("x")), Maybe::Some("x"));
    /// assert_eq!(Maybe::<i32>::none().and(Maybe::some("x")), Maybe::None);
    /// ```
    #[inline]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Maybe::None,
        }
    }

    /// Returns `self` if `other` is present, otherwise an empty container of
    /// `self`'s type.
    ///
    /// This is [`Maybe::and`] read right to left.
    #[inline]
    #[must_use]
    pub fn and_rtl<U>(self, other: Maybe<U>) -> Self {
        other.and(self)
    }

    /// Returns `self` only if `other` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).unless(Maybe::<&str>::none()), Maybe::Some(1));
    /// assert_eq!(Maybe::some(1).unless(Maybe::some("veto")), Maybe::None);
    /// ```
    #[inline]
    #[must_use]
    pub fn unless<U>(self, other: Maybe<U>) -> Self {
        match other {
            Maybe::Some(_) => Self::None,
            Maybe::None => self,
        }
    }

    /// Returns `other` only if `self` is empty.
    ///
    /// This is [`Maybe::unless`] read right to left.
    #[inline]
    pub fn unless_rtl<U>(self, other: Maybe<U>) -> Maybe<U> {
        other.unless(self)
    }

    /// Returns whichever container is present when exactly one of them is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).xor(Maybe::none()), Maybe::Some(1));
    /// assert_eq!(Maybe::some(1).xor(Maybe::some(2)), Maybe::None);
    /// ```
    #[inline]
    #[must_use]
    pub fn xor(self, other: Self) -> Self {
        match (self.is_some(), other.is_some()) {
            (true, false) => self,
            (false, true) => other,
            _ => Self::None,
        }
    }

    /// Returns `self` when both containers are present, otherwise `other`.
    #[inline]
    #[must_use]
    pub fn left_and(self, other: Self) -> Self {
        if self.is_some() && other.is_some() {
            self
        } else {
            other
        }
    }

    /// Returns `other` when both containers are present, otherwise `self`.
    #[inline]
    #[must_use]
    pub fn right_and(self, other: Self) -> Self {
        if self.is_some() && other.is_some() {
            other
        } else {
            self
        }
    }

    /// Returns `self`, whatever the shape of `other`.
    #[inline]
    #[must_use]
    pub fn ignore<U>(self, _other: Maybe<U>) -> Self {
        self
    }

    /// Returns `other`, whatever the shape of `self`.
    #[inline]
    pub fn continue_with<U>(self, other: Maybe<U>) -> Maybe<U> {
        other
    }
}

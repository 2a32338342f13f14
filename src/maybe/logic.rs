//! Three-valued logic on `Maybe<bool>`.
//!
//! `Maybe<bool>` reads as `true`, `false` or unknown (`None`). The operators
//! follow Kleene's strong logic: a known operand decides the result whenever
//! it can (`false & unknown == false`, `true | unknown == true`), otherwise
//! the result is unknown.

use std::ops::{BitAnd, BitOr, BitXor, Not};

use super::Maybe;

impl Maybe<bool> {
    /// The unknown truth value.
    pub const UNKNOWN: Self = Self::None;
    /// The `true` truth value.
    pub const TRUE: Self = Self::Some(true);
    /// The `false` truth value.
    pub const FALSE: Self = Self::Some(false);

    /// Returns `true` if the value is known to be `true`.
    #[inline]
    pub const fn is_true(&self) -> bool {
        matches!(self, Self::Some(true))
    }

    /// Returns `true` if the value is known to be `false`.
    #[inline]
    pub const fn is_false(&self) -> bool {
        matches!(self, Self::Some(false))
    }

    /// Returns `true` if the value is unknown.
    #[inline]
    pub const fn is_unknown(&self) -> bool {
        self.is_none()
    }
}

impl Not for Maybe<bool> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.map(|value| !value)
    }
}

impl BitAnd for Maybe<bool> {
    type Output = Self;

    #[inline]
    fn bitand(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(false), _) | (_, Self::Some(false)) => Self::FALSE,
            (Self::Some(true), Self::Some(true)) => Self::TRUE,
            _ => Self::UNKNOWN,
        }
    }
}

impl BitOr for Maybe<bool> {
    type Output = Self;

    #[inline]
    fn bitor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(true), _) | (_, Self::Some(true)) => Self::TRUE,
            (Self::Some(false), Self::Some(false)) => Self::FALSE,
            _ => Self::UNKNOWN,
        }
    }
}

impl BitXor for Maybe<bool> {
    type Output = Self;

    #[inline]
    fn bitxor(self, other: Self) -> Self {
        self.zip_with(other, |left, right| left ^ right)
    }
}

//! Boolean parsing into `Maybe<bool>`.
//!
//! An adapter that turns loosely formatted text (form fields, configuration
//! values, flags) into a [`Maybe<bool>`]. Unrecognised input is absent rather
//! than an error; an absent result never wraps a parsed value.
//!
//! Which spellings are recognised is controlled by [`BooleanStyles`]:
//!
//! | Style | Accepts |
//! |-------|---------|
//! | `LITERAL` | `true`, `false` (ASCII case-insensitive) |
//! | `ZERO_OR_ONE` | `1`, `0` |
//! | `HTML_INPUT` | `on` as `true`, blank as `false` |
//! | `EMPTY_OR_WHITE_SPACE_IS_FALSE` | blank as `false` |
//!
//! Leading and trailing whitespace is ignored in every style.
//!
//! # Examples
//!
//! ```rust
//! use maybars::Maybe;
//! use maybars::parse::{BooleanStyles, parse_bool};
//!
//! assert_eq!(parse_bool("", BooleanStyles::EMPTY_OR_WHITE_SPACE_IS_FALSE), Maybe::Some(false));
//! assert_eq!(parse_bool("on", BooleanStyles::HTML_INPUT), Maybe::Some(true));
//! assert_eq!(parse_bool("2", BooleanStyles::ZERO_OR_ONE), Maybe::None);
//! ```

use bitflags::bitflags;

use crate::maybe::Maybe;

bitflags! {
    /// The spellings accepted by [`parse_bool`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct BooleanStyles: u8 {
        /// Accepts nothing.
        const NONE = 0;

        /// Blank text is `false`.
        const EMPTY_OR_WHITE_SPACE_IS_FALSE = 1 << 0;
        /// `1` is `true` and `0` is `false`.
        const ZERO_OR_ONE = 1 << 1;
        /// `on` is `true` and blank text is `false`, as sent by HTML checkboxes.
        const HTML_INPUT = 1 << 2;
        /// `true` and `false`, ignoring ASCII case.
        const LITERAL = 1 << 3;

        /// `LITERAL` together with `EMPTY_OR_WHITE_SPACE_IS_FALSE`.
        const DEFAULT = Self::LITERAL.bits() | Self::EMPTY_OR_WHITE_SPACE_IS_FALSE.bits();
    }
}

impl Default for BooleanStyles {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Parses `text` as a boolean under `styles`.
///
/// Returns `Maybe::None` when no enabled style recognises the text.
pub fn parse_bool(text: &str, styles: BooleanStyles) -> Maybe<bool> {
    let text = text.trim();

    if text.is_empty() {
        let blank_is_false = styles
            .intersects(BooleanStyles::EMPTY_OR_WHITE_SPACE_IS_FALSE | BooleanStyles::HTML_INPUT);
        return if blank_is_false {
            Maybe::Some(false)
        } else {
            Maybe::None
        };
    }

    if styles.contains(BooleanStyles::LITERAL) {
        if text.eq_ignore_ascii_case("true") {
            return Maybe::Some(true);
        }
        if text.eq_ignore_ascii_case("false") {
            return Maybe::Some(false);
        }
    }

    if styles.contains(BooleanStyles::ZERO_OR_ONE) {
        match text {
            "1" => return Maybe::Some(true),
            "0" => return Maybe::Some(false),
            _ => {}
        }
    }

    if styles.contains(BooleanStyles::HTML_INPUT) && text.eq_ignore_ascii_case("on") {
        return Maybe::Some(true);
    }

    Maybe::None
}

/// Parses an optional text, treating a missing text as absent.
///
/// # Examples
///
/// ```rust
/// use maybars::Maybe;
/// use maybars::parse::{BooleanStyles, parse_bool_opt};
///
/// assert_eq!(parse_bool_opt(None, BooleanStyles::DEFAULT), Maybe::None);
/// assert_eq!(parse_bool_opt(Some("TRUE"), BooleanStyles::DEFAULT), Maybe::Some(true));
/// ```
pub fn parse_bool_opt(text: Option<&str>, styles: BooleanStyles) -> Maybe<bool> {
    Maybe::of(text).bind(|text| parse_bool(text, styles))
}

//! Error types for the containers in this crate.
//!
//! Every accessor that can be called on the "wrong" shape of a container
//! reports one of these errors instead of silently returning a default.
//! Combinators never produce them on their own; they only surface at the
//! extraction boundary or at the untyped comparer entry points.

/// Represents errors that can occur when reading from a container.
///
/// # Examples
///
/// ```rust
/// use maybars::{Error, Maybe};
///
/// let empty: Maybe<i32> = Maybe::none();
/// assert_eq!(empty.value(), Err(Error::NoValue { container: "Maybe" }));
/// assert_eq!(
///     format!("{}", Error::NoValue { container: "Maybe" }),
///     "Maybe: the object holds no value."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// A value was requested from a container that holds none
    /// (`Maybe::None`, `Outcome::Err`, `Fallible::Exceptional`).
    NoValue {
        /// The name of the container type.
        container: &'static str,
    },
    /// A failure description was requested from a container in its success
    /// shape (`Outcome::Ok`, `Fallible::Success`).
    NotAFailure {
        /// The name of the container type.
        container: &'static str,
    },
    /// An untyped comparer entry point received an object of the wrong type.
    TypeMismatch {
        /// The type name the comparer expected.
        expected: &'static str,
    },
    /// A `Fallible` filter or join rejected its value.
    Rejected,
}

impl std::fmt::Display for Error {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoValue { container } => {
                write!(formatter, "{container}: the object holds no value.")
            }
            Self::NotAFailure { container } => {
                write!(formatter, "{container}: the object does not hold a failure.")
            }
            Self::TypeMismatch { expected } => {
                write!(formatter, "Type mismatch: expected an object of type {expected}.")
            }
            Self::Rejected => write!(formatter, "The value was rejected by a predicate."),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_value_display() {
        let error = Error::NoValue {
            container: "Outcome",
        };
        assert_eq!(format!("{error}"), "Outcome: the object holds no value.");
    }

    #[test]
    fn test_not_a_failure_display() {
        let error = Error::NotAFailure {
            container: "Fallible",
        };
        assert_eq!(
            format!("{error}"),
            "Fallible: the object does not hold a failure."
        );
    }

    #[test]
    fn test_type_mismatch_display() {
        let error = Error::TypeMismatch {
            expected: "maybars::maybe::Maybe<i32>",
        };
        assert_eq!(
            format!("{error}"),
            "Type mismatch: expected an object of type maybars::maybe::Maybe<i32>."
        );
    }

    #[test]
    fn test_error_equality() {
        let error1 = Error::NoValue { container: "Maybe" };
        let error2 = Error::NoValue { container: "Maybe" };
        let error3 = Error::NotAFailure { container: "Maybe" };
        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_error_source() {
        use std::error::Error as _;

        assert!(Error::Rejected.source().is_none());
    }
}

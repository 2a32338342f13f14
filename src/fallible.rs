//! Fallible type - a value, or the fault that prevented it.
//!
//! `Fallible<T>` turns a failing computation into data and back. A fault is
//! either an error value or a panic payload. Faults enter a `Fallible` at
//! exactly two places, [`Fallible::capture`] and [`Fallible::try_with`]; none
//! of the combinators catch anything on their own.
//!
//! [`Fallible::value_or_rethrow`] re-signals a captured fault with its
//! original identity: a captured panic is resumed with the very payload it
//! was raised with, so whoever catches it further up sees the same type and
//! message as if it had never been captured.
//!
//! # Examples
//!
//! ```rust
//! use maybars::fallible::Fallible;
//!
//! let parsed = Fallible::try_with(|| "42".parse::<i32>());
//! assert_eq!(parsed.map(|n| n + 1).into_result().ok(), Some(43));
//!
//! let broken = Fallible::try_with(|| "x".parse::<i32>());
//! let fault = broken.fault().map(|fault| fault.message());
//! assert_eq!(fault, Ok(Some("invalid digit found in string".to_string())));
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::error::Error;
use crate::maybe::Maybe;

/// Boxed error type held by [`Fault::Error`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A captured failure.
pub enum Fault {
    /// An error value returned by the computation.
    Error(BoxError),
    /// The payload of a panic raised by the computation.
    Panic(Box<dyn Any + Send>),
}

impl Fault {
    /// Wraps an error value.
    pub fn from_error<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Error(Box::new(error))
    }

    /// Returns `true` if the fault is a captured panic.
    #[inline]
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panic(_))
    }

    /// Returns the fault's message.
    ///
    /// Panic payloads carry a message only when they are a `&str` or a
    /// `String`, which covers every `panic!` with a format string.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Error(error) => Some(error.to_string()),
            Self::Panic(payload) => payload
                .downcast_ref::<&str>()
                .map(|message| (*message).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned()),
        }
    }

    /// Returns the captured error as `E`, if it is one.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            Self::Error(error) => error.downcast_ref::<E>(),
            Self::Panic(_) => None,
        }
    }

    /// Rebuilds a fault from an unwind payload.
    ///
    /// A payload produced by [`Fault::rethrow`] on an error fault becomes
    /// that error fault again.
    fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<BoxError>() {
            Ok(error) => Self::Error(*error),
            Err(payload) => Self::Panic(payload),
        }
    }

    /// Re-signals the fault by resuming an unwind.
    ///
    /// A panic is resumed with its original payload. An error becomes the
    /// payload itself, as a [`BoxError`], and [`Fallible::capture`] turns it
    /// back into the same error fault.
    pub fn rethrow(self) -> ! {
        match self {
            Self::Error(error) => panic::resume_unwind(Box::new(error)),
            Self::Panic(payload) => panic::resume_unwind(payload),
        }
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(error) => formatter.debug_tuple("Error").field(error).finish(),
            Self::Panic(_) => formatter
                .debug_tuple("Panic")
                .field(&self.message().unwrap_or_else(|| "..".to_string()))
                .finish(),
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(formatter, "{message}"),
            None => write!(formatter, "panicked with a non-string payload"),
        }
    }
}

impl From<Error> for Fault {
    fn from(error: Error) -> Self {
        Self::from_error(error)
    }
}

/// The result of a computation that may have failed with a [`Fault`].
///
/// # Examples
///
/// ```rust
/// use maybars::fallible::Fallible;
///
/// let quotient = Fallible::capture(|| 10 / std::hint::black_box(2));
/// assert!(quotient.is_success());
///
/// let broken = Fallible::capture(|| 10 / std::hint::black_box(0));
/// assert!(broken.is_exceptional());
/// ```
#[derive(Debug)]
pub enum Fallible<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed.
    Exceptional(Fault),
}

impl<T> Fallible<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful result.
    #[inline]
    pub const fn succeed(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed result from a fault.
    #[inline]
    pub const fn threw(fault: Fault) -> Self {
        Self::Exceptional(fault)
    }

    /// Creates a failed result from an error value.
    #[inline]
    pub fn from_error<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Exceptional(Fault::from_error(error))
    }

    /// Runs `computation`, capturing a panic as a fault.
    ///
    /// The computation is treated as unwind safe: state it shares with the
    /// caller may be observed half-updated after a captured panic.
    pub fn capture<F>(computation: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(computation)) {
            Ok(value) => Self::Success(value),
            Err(payload) => {
                let fault = Fault::from_payload(payload);
                tracing::debug!(%fault, "captured a panic");
                Self::Exceptional(fault)
            }
        }
    }

    /// Runs `computation`, capturing a returned error as a fault.
    ///
    /// Panics are not caught; combine with [`Fallible::capture`] for that.
    pub fn try_with<E, F>(computation: F) -> Self
    where
        E: Into<BoxError>,
        F: FnOnce() -> Result<T, E>,
    {
        match computation() {
            Ok(value) => Self::Success(value),
            Err(error) => {
                let fault = Fault::Error(error.into());
                tracing::debug!(%fault, "captured an error");
                Self::Exceptional(fault)
            }
        }
    }

    // =========================================================================
    // Predicates and Access
    // =========================================================================

    /// Returns `true` if the computation produced a value.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the computation failed.
    #[inline]
    pub const fn is_exceptional(&self) -> bool {
        matches!(self, Self::Exceptional(_))
    }

    /// Returns a reference to the value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValue`] if the result is exceptional.
    #[inline]
    pub const fn value(&self) -> Result<&T, Error> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Exceptional(_) => Err(Error::NoValue {
                container: "Fallible",
            }),
        }
    }

    /// Returns a reference to the fault.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAFailure`] if the result is a success.
    #[inline]
    pub const fn fault(&self) -> Result<&Fault, Error> {
        match self {
            Self::Success(_) => Err(Error::NotAFailure {
                container: "Fallible",
            }),
            Self::Exceptional(fault) => Ok(fault),
        }
    }

    /// Returns the value, or re-signals the captured fault.
    ///
    /// # Panics
    ///
    /// Resumes unwinding with the captured fault if the result is
    /// exceptional (see [`Fault::rethrow`]).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::fallible::Fallible;
    /// use std::panic::{self, AssertUnwindSafe};
    ///
    /// let captured = Fallible::<i32>::capture(|| panic!("disk on fire"));
    /// let payload = panic::catch_unwind(AssertUnwindSafe(move || captured.value_or_rethrow()))
    ///     .unwrap_err();
    /// assert_eq!(payload.downcast_ref::<&str>(), Some(&"disk on fire"));
    /// ```
    pub fn value_or_rethrow(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Exceptional(fault) => fault.rethrow(),
        }
    }

    /// Returns the value, or `default` if the result is exceptional.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Exceptional(_) => default,
        }
    }

    /// Collapses the result by invoking exactly one of two functions.
    #[inline]
    pub fn switch<R, S, E>(self, success_case: S, exceptional_case: E) -> R
    where
        S: FnOnce(T) -> R,
        E: FnOnce(Fault) -> R,
    {
        match self {
            Self::Success(value) => success_case(value),
            Self::Exceptional(fault) => exceptional_case(fault),
        }
    }

    // =========================================================================
    // Query Operators
    // =========================================================================

    /// Applies a function to the value, keeping any fault as is.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Fallible<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Fallible::Success(function(value)),
            Self::Exceptional(fault) => Fallible::Exceptional(fault),
        }
    }

    /// Chains a fallible function onto the value.
    #[inline]
    pub fn bind<U, F>(self, binder: F) -> Fallible<U>
    where
        F: FnOnce(T) -> Fallible<U>,
    {
        match self {
            Self::Success(value) => binder(value),
            Self::Exceptional(fault) => Fallible::Exceptional(fault),
        }
    }

    /// Keeps the value only if it satisfies `predicate`; a rejected value
    /// becomes a fault wrapping [`Error::Rejected`].
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Exceptional(Error::Rejected.into())
                }
            }
            Self::Exceptional(fault) => Self::Exceptional(fault),
        }
    }

    /// Binds a second fallible computation and projects both values.
    #[inline]
    pub fn select_many<U, V, B, R>(self, binder: B, result_selector: R) -> Fallible<V>
    where
        B: FnOnce(&T) -> Fallible<U>,
        R: FnOnce(T, U) -> V,
    {
        match self {
            Self::Success(value) => binder(&value).map(|middle| result_selector(value, middle)),
            Self::Exceptional(fault) => Fallible::Exceptional(fault),
        }
    }

    /// Equi-joins two results on keys compared with `==`.
    ///
    /// A fault on either side is propagated (outer first); when both
    /// succeed but the keys differ the result is a fault wrapping
    /// [`Error::Rejected`].
    pub fn join<U, K, V, OK, IK, R>(
        self,
        inner: Fallible<U>,
        outer_key: OK,
        inner_key: IK,
        result_selector: R,
    ) -> Fallible<V>
    where
        K: PartialEq,
        OK: FnOnce(&T) -> K,
        IK: FnOnce(&U) -> K,
        R: FnOnce(T, U) -> V,
    {
        match (self, inner) {
            (Self::Success(outer), Fallible::Success(inner)) => {
                if outer_key(&outer) == inner_key(&inner) {
                    Fallible::Success(result_selector(outer, inner))
                } else {
                    Fallible::Exceptional(Error::Rejected.into())
                }
            }
            (Self::Exceptional(fault), _) | (Self::Success(_), Fallible::Exceptional(fault)) => {
                Fallible::Exceptional(fault)
            }
        }
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts into a `Maybe`, discarding the fault.
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Exceptional(_) => Maybe::None,
        }
    }

    /// Converts into a standard `Result` for `?` propagation.
    ///
    /// # Errors
    ///
    /// Returns the [`Fault`] if the result is exceptional.
    #[inline]
    pub fn into_result(self) -> Result<T, Fault> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Exceptional(fault) => Err(fault),
        }
    }
}

static_assertions::assert_impl_all!(Fallible<i32>: Send);
static_assertions::assert_not_impl_any!(Fallible<i32>: Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_filter_rejection_wraps_rejected() {
        let rejected = Fallible::succeed(3).filter(|x| *x > 5);
        let fault = rejected.into_result().unwrap_err();
        assert_eq!(fault.downcast_ref::<Error>(), Some(&Error::Rejected));
    }

    #[rstest]
    fn test_fault_survives_retyping() {
        let failed = Fallible::<i32>::from_error(Error::Rejected)
            .map(|x| x.to_string())
            .bind(|text| Fallible::succeed(text.len()));
        assert!(matches!(failed, Fallible::Exceptional(Fault::Error(_))));
    }

    #[rstest]
    fn test_access_on_wrong_shape() {
        assert_eq!(
            Fallible::succeed(1).fault().map(|_| ()),
            Err(Error::NotAFailure {
                container: "Fallible"
            })
        );
        assert_eq!(
            Fallible::<i32>::from_error(Error::Rejected).value(),
            Err(Error::NoValue {
                container: "Fallible"
            })
        );
    }

    #[rstest]
    fn test_panic_message_from_formatted_payload() {
        let captured = Fallible::<()>::capture(|| panic!("code {}", 7));
        assert_eq!(
            captured.fault().ok().and_then(Fault::message),
            Some("code 7".to_string())
        );
    }
}

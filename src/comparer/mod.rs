//! Equality and ordering strategies.
//!
//! This module separates *how* values are compared from the values
//! themselves:
//!
//! - [`EqualityComparer`] and [`Comparer`]: element-level strategies
//! - [`DefaultComparer`]: delegates to `T`'s natural `Eq`/`Ord`/`Hash`
//! - [`StructuralComparer`]: delegates to the [`Structural`] notion, which
//!   compares composite values member-wise and recursively
//! - [`MaybeComparer`]: lifts an element strategy to `Maybe<T>`
//!
//! Whatever the element strategy, a `MaybeComparer` treats two empty
//! containers as equal and orders an empty container strictly below every
//! present one.
//!
//! # Default and Structural Strategies
//!
//! The two strategies agree on primitive values. On sequences they differ:
//! the natural order of `Vec` is lexicographic, while the structural order
//! compares lengths first.
//!
//! ```rust
//! use maybars::Maybe;
//! use maybars::comparer::{Comparer, MaybeComparer};
//! use std::cmp::Ordering;
//!
//! let left = Maybe::some(vec![1, 2, 3]);
//! let right = Maybe::some(vec![2]);
//!
//! let natural = MaybeComparer::<Vec<i32>>::default_comparer();
//! let structural = MaybeComparer::<Vec<i32>>::structural();
//!
//! assert_eq!(natural.compare(&left, &right), Ordering::Less);
//! assert_eq!(structural.compare(&left, &right), Ordering::Greater);
//! ```

mod registry;
mod structural;

pub use structural::Structural;

use std::any::{Any, type_name};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rustc_hash::FxHasher;

use crate::error::Error;
use crate::maybe::Maybe;

/// A strategy deciding whether two values are equal.
///
/// Implementations must keep `hash_value` consistent with `equals`: equal
/// values feed the same data to the hasher.
pub trait EqualityComparer<T: ?Sized> {
    /// Returns `true` if `left` and `right` are equal under this strategy.
    fn equals(&self, left: &T, right: &T) -> bool;

    /// Feeds `value` into `state` consistently with [`equals`](Self::equals).
    fn hash_value(&self, value: &T, state: &mut dyn Hasher);
}

/// A strategy defining a total order, consistent with its equality.
pub trait Comparer<T: ?Sized>: EqualityComparer<T> {
    /// Compares `left` with `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

impl<T, C> EqualityComparer<T> for &C
where
    T: ?Sized,
    C: EqualityComparer<T> + ?Sized,
{
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        (**self).equals(left, right)
    }

    #[inline]
    fn hash_value(&self, value: &T, state: &mut dyn Hasher) {
        (**self).hash_value(value, state);
    }
}

impl<T, C> Comparer<T> for &C
where
    T: ?Sized,
    C: Comparer<T> + ?Sized,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (**self).compare(left, right)
    }
}

// =============================================================================
// Element Strategies
// =============================================================================

/// Compares values with their natural `Eq`, `Ord` and `Hash` implementations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DefaultComparer;

impl<T> EqualityComparer<T> for DefaultComparer
where
    T: Eq + Hash + ?Sized,
{
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        left == right
    }

    #[inline]
    fn hash_value(&self, value: &T, mut state: &mut dyn Hasher) {
        value.hash(&mut state);
    }
}

impl<T> Comparer<T> for DefaultComparer
where
    T: Ord + Hash + ?Sized,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// Compares values member-wise through the [`Structural`] trait.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StructuralComparer;

impl<T> EqualityComparer<T> for StructuralComparer
where
    T: Structural + ?Sized,
{
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        left.structural_eq(right)
    }

    #[inline]
    fn hash_value(&self, value: &T, state: &mut dyn Hasher) {
        value.structural_hash(state);
    }
}

impl<T> Comparer<T> for StructuralComparer
where
    T: Structural + ?Sized,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.structural_cmp(right)
    }
}

// =============================================================================
// MaybeComparer
// =============================================================================

/// Equality and ordering for `Maybe<T>` built on an element strategy.
///
/// - `None` equals `None`
/// - `None` is less than any `Some`
/// - `Some(a)` and `Some(b)` compare with the element strategy
///
/// The built-in strategies are available as shared instances through
/// [`default_comparer`](Self::default_comparer) and
/// [`structural`](Self::structural). They are created on first use, once per
/// element type, and every later call (from any thread) observes the same
/// instance. Cloning a `MaybeComparer` is cheap.
///
/// # Examples
///
/// ```rust
/// use maybars::Maybe;
/// use maybars::comparer::{Comparer, EqualityComparer, MaybeComparer};
/// use std::cmp::Ordering;
///
/// let comparer = MaybeComparer::<i32>::default_comparer();
/// assert!(comparer.equals(&Maybe::none(), &Maybe::none()));
/// assert_eq!(comparer.compare(&Maybe::none(), &Maybe::some(i32::MIN)), Ordering::Less);
/// assert!(comparer.ptr_eq(&MaybeComparer::default_comparer()));
/// ```
pub struct MaybeComparer<T> {
    element: Arc<dyn Comparer<T> + Send + Sync>,
}

impl<T: 'static> MaybeComparer<T> {
    /// Creates a comparer from an element strategy.
    pub fn new<C>(element: C) -> Self
    where
        C: Comparer<T> + Send + Sync + 'static,
    {
        Self {
            element: Arc::new(element),
        }
    }

    /// Returns the shared comparer using `T`'s natural order.
    pub fn default_comparer() -> Self
    where
        T: Ord + Hash,
    {
        registry::shared::<(DefaultComparer, T), Self, _>(|| Self::new(DefaultComparer))
    }

    /// Returns the shared comparer using the structural order of `T`.
    pub fn structural() -> Self
    where
        T: Structural,
    {
        registry::shared::<(StructuralComparer, T), Self, _>(|| Self::new(StructuralComparer))
    }

    /// Returns `true` if both comparers share the same element strategy
    /// instance.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.element, &other.element)
    }

    /// Computes a hash code for `value`, consistent with equality under this
    /// comparer.
    pub fn hash_code(&self, value: &Maybe<T>) -> u64 {
        let mut hasher = FxHasher::default();
        self.hash_value(value, &mut hasher);
        hasher.finish()
    }

    /// Compares two untyped objects for equality.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if either object is not a `Maybe<T>`.
    pub fn equals_any(&self, left: &dyn Any, right: &dyn Any) -> Result<bool, Error> {
        Ok(self.equals(Self::downcast(left)?, Self::downcast(right)?))
    }

    /// Compares two untyped objects.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if either object is not a `Maybe<T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::{Error, Maybe};
    /// use maybars::comparer::MaybeComparer;
    /// use std::cmp::Ordering;
    ///
    /// let comparer = MaybeComparer::<i32>::default_comparer();
    /// assert_eq!(comparer.compare_any(&Maybe::some(1), &Maybe::some(2)), Ok(Ordering::Less));
    /// assert!(matches!(
    ///     comparer.compare_any(&Maybe::some(1), &"one"),
    ///     Err(Error::TypeMismatch { .. })
    /// ));
    /// ```
    pub fn compare_any(&self, left: &dyn Any, right: &dyn Any) -> Result<Ordering, Error> {
        Ok(self.compare(Self::downcast(left)?, Self::downcast(right)?))
    }

    fn downcast(value: &dyn Any) -> Result<&Maybe<T>, Error> {
        value.downcast_ref::<Maybe<T>>().ok_or(Error::TypeMismatch {
            expected: type_name::<Maybe<T>>(),
        })
    }
}

impl<T> Clone for MaybeComparer<T> {
    fn clone(&self) -> Self {
        Self {
            element: Arc::clone(&self.element),
        }
    }
}

impl<T> fmt::Debug for MaybeComparer<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("MaybeComparer").finish_non_exhaustive()
    }
}

impl<T> EqualityComparer<Maybe<T>> for MaybeComparer<T> {
    fn equals(&self, left: &Maybe<T>, right: &Maybe<T>) -> bool {
        match (left, right) {
            (Maybe::None, Maybe::None) => true,
            (Maybe::Some(left), Maybe::Some(right)) => self.element.equals(left, right),
            _ => false,
        }
    }

    fn hash_value(&self, value: &Maybe<T>, state: &mut dyn Hasher) {
        match value {
            Maybe::None => state.write_u8(0),
            Maybe::Some(inner) => {
                state.write_u8(1);
                self.element.hash_value(inner, state);
            }
        }
    }
}

impl<T> Comparer<Maybe<T>> for MaybeComparer<T> {
    fn compare(&self, left: &Maybe<T>, right: &Maybe<T>) -> Ordering {
        match (left, right) {
            (Maybe::None, Maybe::None) => Ordering::Equal,
            (Maybe::None, Maybe::Some(_)) => Ordering::Less,
            (Maybe::Some(_), Maybe::None) => Ordering::Greater,
            (Maybe::Some(left), Maybe::Some(right)) => self.element.compare(left, right),
        }
    }
}

static_assertions::assert_impl_all!(MaybeComparer<i32>: Send, Sync, Clone);

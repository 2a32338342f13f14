//! Bridges between `Maybe` and sequences.
//!
//! Two extension traits are provided:
//!
//! - [`MaybeSequence`] for iterators that yield `Maybe<T>`: collecting the
//!   present values, finding the first present container, flattening.
//! - [`SequenceExt`] for iterators of plain values: `*_or_none` element
//!   queries that report absence instead of panicking, and lazy adapters that
//!   project, filter or zip through a `Maybe`-returning function and keep only
//!   the present results.
//!
//! # Examples
//!
//! ```rust
//! use maybars::Maybe;
//! use maybars::maybe::{MaybeSequence, SequenceExt};
//!
//! let parsed: Vec<i32> = ["1", "x", "3"]
//!     .into_iter()
//!     .select_any(|text| Maybe::of(text.parse().ok()))
//!     .collect();
//! assert_eq!(parsed, vec![1, 3]);
//!
//! let slots = vec![Maybe::none(), Maybe::some(2), Maybe::some(3)];
//! assert_eq!(slots.clone().into_iter().collect_some(), Maybe::Some(vec![2, 3]));
//! assert_eq!(slots.into_iter().collect_all(), Maybe::None);
//!
//! assert_eq!([1, 2, 3].into_iter().single_or_none_by(|x| *x > 1), Maybe::None);
//! ```

use std::iter::FusedIterator;

use super::Maybe;

// =============================================================================
// MaybeSequence
// =============================================================================

/// Extension methods for iterators over `Maybe<T>`.
pub trait MaybeSequence<T>: Iterator<Item = Maybe<T>> + Sized {
    /// Collects the present values, dropping empty slots.
    ///
    /// - An empty input yields `Some(vec![])`.
    /// - A non-empty input whose elements are all empty yields `None`.
    /// - Otherwise yields `Some` of the present values, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    /// use maybars::maybe::MaybeSequence;
    ///
    /// let empty: Vec<Maybe<i32>> = vec![];
    /// assert_eq!(empty.into_iter().collect_some(), Maybe::Some(vec![]));
    /// assert_eq!(vec![Maybe::<i32>::none(), Maybe::none()].into_iter().collect_some(), Maybe::None);
    /// assert_eq!(vec![Maybe::some(1), Maybe::none()].into_iter().collect_some(), Maybe::Some(vec![1]));
    /// ```
    fn collect_some(self) -> Maybe<Vec<T>> {
        let mut seen_any = false;
        let values: Vec<T> = self
            .inspect(|_| seen_any = true)
            .filter_map(Maybe::into_option)
            .collect();
        if seen_any && values.is_empty() {
            Maybe::None
        } else {
            Maybe::Some(values)
        }
    }

    /// Collects the values, failing as a whole if any slot is empty.
    ///
    /// An empty input yields `Some(vec![])`. Stops at the first empty slot.
    fn collect_all(self) -> Maybe<Vec<T>> {
        self.collect()
    }

    /// Returns the first present container, or `None` if there is none.
    fn first_some(mut self) -> Maybe<T> {
        self.find(Maybe::is_some).unwrap_or(Maybe::None)
    }

    /// Returns a lazy iterator over the present values.
    fn values(self) -> Values<Self> {
        Values { iter: self }
    }
}

impl<T, I> MaybeSequence<T> for I where I: Iterator<Item = Maybe<T>> {}

/// Iterator over the present values of a sequence of containers.
///
/// Created by [`MaybeSequence::values`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<I> {
    iter: I,
}

impl<T, I> Iterator for Values<I>
where
    I: Iterator<Item = Maybe<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.by_ref().find_map(Maybe::into_option)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<T, I> FusedIterator for Values<I> where I: FusedIterator<Item = Maybe<T>> {}

// =============================================================================
// SequenceExt
// =============================================================================

/// Element queries and `Maybe`-aware adapters for any iterator.
pub trait SequenceExt: Iterator + Sized {
    /// Returns the first element, or `None` if the sequence is empty.
    fn first_or_none(mut self) -> Maybe<Self::Item> {
        Maybe::of(self.next())
    }

    /// Returns the first element satisfying `predicate`, or `None`.
    fn first_or_none_by<P>(mut self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Maybe::of(self.find(predicate))
    }

    /// Returns the last element, or `None` if the sequence is empty.
    fn last_or_none(self) -> Maybe<Self::Item> {
        Maybe::of(self.last())
    }

    /// Returns the last element satisfying `predicate`, or `None`.
    fn last_or_none_by<P>(self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Maybe::of(self.filter(predicate).last())
    }

    /// Returns the only element of the sequence.
    ///
    /// Returns `None` when the sequence is empty *and* when it holds more than
    /// one element; ambiguity is reported as absence, not as an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::Maybe;
    /// use maybars::maybe::SequenceExt;
    ///
    /// assert_eq!([7].into_iter().single_or_none(), Maybe::Some(7));
    /// assert_eq!([7, 8].into_iter().single_or_none(), Maybe::None);
    /// assert_eq!(std::iter::empty::<i32>().single_or_none(), Maybe::None);
    /// ```
    fn single_or_none(mut self) -> Maybe<Self::Item> {
        match (self.next(), self.next()) {
            (Some(only), None) => Maybe::Some(only),
            _ => Maybe::None,
        }
    }

    /// Returns the only element satisfying `predicate`.
    ///
    /// Returns `None` when no element or more than one element matches.
    fn single_or_none_by<P>(self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.filter(predicate).single_or_none()
    }

    /// Returns the element at `index`, or `None` if the sequence is too short.
    fn element_at_or_none(mut self, index: usize) -> Maybe<Self::Item> {
        Maybe::of(self.nth(index))
    }

    /// Projects each element through `selector`, yielding the present results.
    fn select_any<U, F>(self, selector: F) -> SelectAny<Self, F>
    where
        F: FnMut(Self::Item) -> Maybe<U>,
    {
        SelectAny {
            iter: self,
            selector,
        }
    }

    /// Keeps the elements for which `predicate` yields `Some(true)`.
    ///
    /// An unknown answer (`None`) drops the element like `Some(false)` does.
    fn where_any<P>(self, predicate: P) -> WhereAny<Self, P>
    where
        P: FnMut(&Self::Item) -> Maybe<bool>,
    {
        WhereAny {
            iter: self,
            predicate,
        }
    }

    /// Zips with `other` through `zipper`, yielding the present results.
    ///
    /// Stops when either sequence is exhausted.
    fn zip_any<J, U, F>(self, other: J, zipper: F) -> ZipAny<Self, J::IntoIter, F>
    where
        J: IntoIterator,
        F: FnMut(Self::Item, J::Item) -> Maybe<U>,
    {
        ZipAny {
            first: self,
            second: other.into_iter(),
            zipper,
        }
    }
}

impl<I> SequenceExt for I where I: Iterator {}

/// Lazy projection that keeps only present results.
///
/// Created by [`SequenceExt::select_any`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SelectAny<I, F> {
    iter: I,
    selector: F,
}

impl<I, F, U> Iterator for SelectAny<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Maybe<U>,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let selector = &mut self.selector;
        self.iter.by_ref().find_map(|item| selector(item).into_option())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

/// Lazy filter driven by a three-valued predicate.
///
/// Created by [`SequenceExt::where_any`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct WhereAny<I, P> {
    iter: I,
    predicate: P,
}

impl<I, P> Iterator for WhereAny<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> Maybe<bool>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let predicate = &mut self.predicate;
        self.iter.by_ref().find(|item| predicate(item).is_true())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

/// Lazy zip that keeps only present results.
///
/// Created by [`SequenceExt::zip_any`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ZipAny<I, J, F> {
    first: I,
    second: J,
    zipper: F,
}

impl<I, J, F, U> Iterator for ZipAny<I, J, F>
where
    I: Iterator,
    J: Iterator,
    F: FnMut(I::Item, J::Item) -> Maybe<U>,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        loop {
            let left = self.first.next()?;
            let right = self.second.next()?;
            if let Maybe::Some(value) = (self.zipper)(left, right) {
                return Some(value);
            }
        }
    }
}

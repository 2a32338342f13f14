//! Structural equality and ordering.
//!
//! Structural comparison walks composite values member by member instead of
//! relying on the value's own `Ord`:
//!
//! - Sequences compare by length first, then element-wise.
//! - Tuples compare member-wise, left to right.
//! - Floating point numbers compare with `total_cmp`, so `NaN` equals itself
//!   and `-0.0` orders below `0.0`.
//! - `Option` and `Maybe` order the empty case first.
//! - Pointers (`Box`, `Rc`, `Arc`, `&T`) compare their targets.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::Arc;

use crate::maybe::Maybe;

/// Member-wise, recursive equality and ordering.
///
/// Implementations must keep the three methods consistent with each other:
/// `structural_eq` holds exactly when `structural_cmp` is `Equal`, and equal
/// values feed the same data to `structural_hash`.
///
/// # Examples
///
/// ```rust
/// use maybars::comparer::Structural;
/// use std::cmp::Ordering;
///
/// assert!(f64::NAN.structural_eq(&f64::NAN));
/// assert_eq!(vec![9].structural_cmp(&vec![1, 1]), Ordering::Less);
/// ```
pub trait Structural {
    /// Compares `self` with `other` member-wise.
    fn structural_cmp(&self, other: &Self) -> Ordering;

    /// Returns `true` if `self` and `other` are structurally equal.
    fn structural_eq(&self, other: &Self) -> bool {
        self.structural_cmp(other) == Ordering::Equal
    }

    /// Feeds the structure of `self` into `state`.
    fn structural_hash(&self, state: &mut dyn Hasher);
}

macro_rules! natural_structural {
    ($($type:ty),* $(,)?) => {
        $(
            impl Structural for $type {
                #[inline]
                fn structural_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                #[inline]
                fn structural_eq(&self, other: &Self) -> bool {
                    self == other
                }

                #[inline]
                fn structural_hash(&self, mut state: &mut dyn Hasher) {
                    self.hash(&mut state);
                }
            }
        )*
    };
}

natural_structural!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    str,
    String,
);

macro_rules! float_structural {
    ($($type:ty),* $(,)?) => {
        $(
            impl Structural for $type {
                #[inline]
                fn structural_cmp(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }

                #[inline]
                fn structural_hash(&self, mut state: &mut dyn Hasher) {
                    self.to_bits().hash(&mut state);
                }
            }
        )*
    };
}

float_structural!(f32, f64);

// =============================================================================
// Sequences
// =============================================================================

impl<T: Structural> Structural for [T] {
    fn structural_cmp(&self, other: &Self) -> Ordering {
        self.len().cmp(&other.len()).then_with(|| {
            self.iter()
                .zip(other)
                .map(|(left, right)| left.structural_cmp(right))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }

    fn structural_hash(&self, state: &mut dyn Hasher) {
        state.write_usize(self.len());
        for item in self {
            item.structural_hash(state);
        }
    }
}

impl<T: Structural> Structural for Vec<T> {
    #[inline]
    fn structural_cmp(&self, other: &Self) -> Ordering {
        self.as_slice().structural_cmp(other.as_slice())
    }

    #[inline]
    fn structural_hash(&self, state: &mut dyn Hasher) {
        self.as_slice().structural_hash(state);
    }
}

impl<T: Structural, const N: usize> Structural for [T; N] {
    #[inline]
    fn structural_cmp(&self, other: &Self) -> Ordering {
        self.as_slice().structural_cmp(other.as_slice())
    }

    #[inline]
    fn structural_hash(&self, state: &mut dyn Hasher) {
        self.as_slice().structural_hash(state);
    }
}

// =============================================================================
// Tuples
// =============================================================================

macro_rules! tuple_structural {
    ($($name:ident $index:tt),+) => {
        impl<$($name: Structural),+> Structural for ($($name,)+) {
            fn structural_cmp(&self, other: &Self) -> Ordering {
                Ordering::Equal
                    $(.then_with(|| self.$index.structural_cmp(&other.$index)))+
            }

            fn structural_hash(&self, state: &mut dyn Hasher) {
                $(self.$index.structural_hash(state);)+
            }
        }
    };
}

tuple_structural!(A 0);
tuple_structural!(A 0, B 1);
tuple_structural!(A 0, B 1, C 2);
tuple_structural!(A 0, B 1, C 2, D 3);

// =============================================================================
// Optional Values
// =============================================================================

fn optional_cmp<T: Structural>(left: Option<&T>, right: Option<&T>) -> Ordering {
    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => left.structural_cmp(right),
    }
}

fn optional_hash<T: Structural>(value: Option<&T>, state: &mut dyn Hasher) {
    match value {
        None => state.write_u8(0),
        Some(inner) => {
            state.write_u8(1);
            inner.structural_hash(state);
        }
    }
}

impl<T: Structural> Structural for Option<T> {
    fn structural_cmp(&self, other: &Self) -> Ordering {
        optional_cmp(self.as_ref(), other.as_ref())
    }

    fn structural_hash(&self, state: &mut dyn Hasher) {
        optional_hash(self.as_ref(), state);
    }
}

impl<T: Structural> Structural for Maybe<T> {
    fn structural_cmp(&self, other: &Self) -> Ordering {
        optional_cmp(self.as_option(), other.as_option())
    }

    fn structural_hash(&self, state: &mut dyn Hasher) {
        optional_hash(self.as_option(), state);
    }
}

// =============================================================================
// Pointers
// =============================================================================

macro_rules! pointer_structural {
    ($($pointer:ident),* $(,)?) => {
        $(
            impl<T: Structural + ?Sized> Structural for $pointer<T> {
                #[inline]
                fn structural_cmp(&self, other: &Self) -> Ordering {
                    (**self).structural_cmp(&**other)
                }

                #[inline]
                fn structural_hash(&self, state: &mut dyn Hasher) {
                    (**self).structural_hash(state);
                }
            }
        )*
    };
}

pointer_structural!(Box, Rc, Arc);

impl<T: Structural + ?Sized> Structural for &T {
    #[inline]
    fn structural_cmp(&self, other: &Self) -> Ordering {
        (**self).structural_cmp(&**other)
    }

    #[inline]
    fn structural_hash(&self, state: &mut dyn Hasher) {
        (**self).structural_hash(state);
    }
}

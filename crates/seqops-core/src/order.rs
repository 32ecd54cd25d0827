//! Comparator helpers.
//!
//! Ordering operators take `FnMut(&T, &T) -> Ordering`. `Less` means the first
//! argument precedes, `Equal` means equal rank, `Greater` means it follows.
//! Comparators written against a signed-integer convention (negative / zero /
//! positive) go through [`by_sign`].

use std::cmp::Ordering;

/// Adapt a signed-integer comparator to an `Ordering` comparator.
pub fn by_sign<T, F>(mut f: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> i64,
{
    move |a: &T, b: &T| f(a, b).cmp(&0)
}

/// Flip the sign of a comparator.
pub fn invert<T, F>(mut f: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| f(a, b).reverse()
}

pub fn ascending<T: Ord>() -> impl FnMut(&T, &T) -> Ordering + Clone {
    |a: &T, b: &T| a.cmp(b)
}

pub fn descending<T: Ord>() -> impl FnMut(&T, &T) -> Ordering + Clone {
    |a: &T, b: &T| b.cmp(a)
}

//! Sequence generators: arithmetic `range` and trial-division `primes`.
//!
//! Each call builds an independent producer with fresh state, so calling the
//! constructor again restarts the sequence.

use std::iter::FusedIterator;

use num_traits::CheckedAdd;

/// Numbers a [`range`] can count in.
///
/// `advance` returns `None` when `self + step` is not representable, which
/// ends the range. Floats saturate to infinity instead, which is never below
/// a finite `end`.
pub trait RangeValue: Copy + PartialOrd {
    fn advance(self, step: Self) -> Option<Self>;
}

macro_rules! checked_range_value {
    ($($t:ty),*) => {$(
        impl RangeValue for $t {
            fn advance(self, step: Self) -> Option<Self> {
                CheckedAdd::checked_add(&self, &step)
            }
        }
    )*};
}

checked_range_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl RangeValue for f32 {
    fn advance(self, step: Self) -> Option<Self> {
        Some(self + step)
    }
}

impl RangeValue for f64 {
    fn advance(self, step: Self) -> Option<Self> {
        Some(self + step)
    }
}

/// `start, start + step, start + 2·step, ...` while the value stays strictly
/// below `end`.
///
/// Only a positive `step` is meaningful. A zero or negative step either yields
/// nothing (when `start >= end`) or never terminates. A step that would leave
/// the range of `T` ends the sequence after the last representable value.
pub fn range<T: RangeValue>(start: T, end: T, step: T) -> Range<T> {
    Range {
        next: Some(start),
        end,
        step,
    }
}

#[derive(Debug, Clone)]
pub struct Range<T> {
    /// `None` once stepping overflowed `T`.
    next: Option<T>,
    end: T,
    step: T,
}

impl<T: RangeValue> Iterator for Range<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = self.next.filter(|v| *v < self.end)?;
        self.next = value.advance(self.step);
        Some(value)
    }
}

impl<T: RangeValue> FusedIterator for Range<T> {}

/// The infinite ascending sequence of primes: 2, 3, 5, 7, 11, ...
pub fn primes() -> Primes {
    primes_from(2)
}

/// Trial division against every value already emitted, starting at `start`.
///
/// A candidate is emitted when no earlier emitted value divides it; division by
/// zero counts as "does not divide". From 2 this is exactly the primes and the
/// sequence is infinite. From 0 it yields `0`, then `1`, and since 1 divides
/// every later candidate no further value can ever be emitted: rather than
/// searching forever without yielding, the sequence is finite and ends there.
/// The same applies to any start of 0 or 1.
pub fn primes_from(start: u64) -> Primes {
    Primes {
        discovered: Vec::new(),
        candidate: Some(start),
    }
}

#[derive(Debug, Clone)]
pub struct Primes {
    discovered: Vec<u64>,
    /// `None` once no candidate can be emitted any more.
    candidate: Option<u64>,
}

fn is_divisible_by(value: u64, divisor: u64) -> bool {
    value.checked_rem(divisor) == Some(0)
}

impl Primes {
    /// Values emitted so far, in order.
    pub fn discovered(&self) -> &[u64] {
        &self.discovered
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.discovered.last() == Some(&1) {
            // 1 divides everything after it.
            self.candidate = None;
        }
        while let Some(candidate) = self.candidate {
            self.candidate = candidate.checked_add(1);
            if !self
                .discovered
                .iter()
                .any(|&found| is_divisible_by(candidate, found))
            {
                self.discovered.push(candidate);
                return Some(candidate);
            }
        }
        None
    }
}

impl FusedIterator for Primes {}

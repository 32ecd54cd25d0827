//! Distinct operator: first occurrence wins, later equal values are dropped.
//!
//! Membership is `Eq + Hash` equality. The seen-set lives in the iterator and
//! grows with the number of distinct values, not the number of values read.

use std::collections::HashSet;
use std::hash::Hash;
use std::iter::FusedIterator;

use crate::traits::Operation;

pub fn distinct() -> DistinctOp {
    DistinctOp
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DistinctOp;

impl<S> Operation<S> for DistinctOp
where
    S: IntoIterator,
    S::Item: Eq + Hash + Clone,
{
    type Output = Distinct<S::IntoIter>;

    fn name(&self) -> &'static str {
        "distinct"
    }

    fn apply(self, source: S) -> Self::Output {
        Distinct {
            source: source.into_iter(),
            seen: HashSet::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Distinct<I: Iterator> {
    source: I,
    seen: HashSet<I::Item>,
}

impl<I> Iterator for Distinct<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for value in self.source.by_ref() {
            if self.seen.insert(value.clone()) {
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.source.size_hint();
        // The first remaining value is new unless it was already seen.
        (usize::from(lo > 0 && self.seen.is_empty()), hi)
    }
}

impl<I> FusedIterator for Distinct<I>
where
    I: FusedIterator,
    I::Item: Eq + Hash + Clone,
{
}

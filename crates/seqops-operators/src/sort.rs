//! Sort operator.
//!
//! The one transform that must see its whole source before producing: the
//! first `next()` drains the source into a pool. Each `next()` after that runs
//! one backward exchange pass that carries the first-ranked remaining value to
//! the front of the pool, then removes and yields it.
//!
//! Values the comparator ranks equal keep their relative source order because
//! the pass only swaps on a strict `Less`.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::traits::Operation;

/// Build a sort ascending by `comparator` (`Less` sorts first).
pub fn sort<T, C>(comparator: C) -> SortOp<T, C>
where
    C: FnMut(&T, &T) -> Ordering,
{
    SortOp {
        comparator,
        _item: PhantomData,
    }
}

pub struct SortOp<T, C> {
    comparator: C,
    _item: PhantomData<fn(&T)>,
}

impl<S, C> Operation<S> for SortOp<S::Item, C>
where
    S: IntoIterator,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
{
    type Output = Sort<S::IntoIter, C>;

    fn name(&self) -> &'static str {
        "sort"
    }

    fn apply(self, source: S) -> Self::Output {
        Sort {
            source: Some(source.into_iter()),
            pool: VecDeque::new(),
            comparator: self.comparator,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Sort<I: Iterator, C> {
    /// Present until the first pull buffers it into `pool`.
    source: Option<I>,
    pool: VecDeque<I::Item>,
    comparator: C,
}

impl<I, C> Sort<I, C>
where
    I: Iterator,
    C: FnMut(&I::Item, &I::Item) -> Ordering,
{
    fn fill(&mut self) {
        if let Some(source) = self.source.take() {
            self.pool.extend(source);
            #[cfg(feature = "tracing")]
            tracing::trace!(buffered = self.pool.len(), "sort buffered source");
        }
    }

    fn bubble_front(&mut self) {
        for index in (1..self.pool.len()).rev() {
            if (self.comparator)(&self.pool[index], &self.pool[index - 1]) == Ordering::Less {
                self.pool.swap(index, index - 1);
            }
        }
    }
}

impl<I, C> Iterator for Sort<I, C>
where
    I: Iterator,
    C: FnMut(&I::Item, &I::Item) -> Ordering,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.fill();
        self.bubble_front();
        self.pool.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(source) => source.size_hint(),
            None => (self.pool.len(), Some(self.pool.len())),
        }
    }
}

impl<I, C> FusedIterator for Sort<I, C>
where
    I: Iterator,
    C: FnMut(&I::Item, &I::Item) -> Ordering,
{
}

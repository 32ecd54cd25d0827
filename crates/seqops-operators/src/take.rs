//! Prefix operators: `take`, `drop`, and `take_while`.
//!
//! None of them pulls a value it does not need: `take(n)` stops after its n-th
//! value without touching the source again, and `take_while` stops at the first
//! rejected value for good.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::traits::Operation;

/// Emit at most the first `count` values. `take(0)` never touches the source.
pub fn take(count: usize) -> TakeOp {
    TakeOp { count }
}

#[derive(Debug, Clone, Copy)]
pub struct TakeOp {
    count: usize,
}

impl<S: IntoIterator> Operation<S> for TakeOp {
    type Output = Take<S::IntoIter>;

    fn name(&self) -> &'static str {
        "take"
    }

    fn apply(self, source: S) -> Self::Output {
        Take {
            source: source.into_iter(),
            remaining: self.count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Take<I> {
    source: I,
    remaining: usize,
}

impl<I: Iterator> Iterator for Take<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.source.next() {
            Some(value) => {
                self.remaining -= 1;
                Some(value)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lo, hi) = self.source.size_hint();
        let hi = match hi {
            Some(hi) => hi.min(self.remaining),
            None => self.remaining,
        };
        (lo.min(self.remaining), Some(hi))
    }
}

impl<I: Iterator> FusedIterator for Take<I> {}

/// Skip the first `count` values, then emit the remainder.
///
/// The skipped prefix is consumed on the first `next()`, not at `apply` time.
pub fn drop(count: usize) -> DropOp {
    DropOp { count }
}

#[derive(Debug, Clone, Copy)]
pub struct DropOp {
    count: usize,
}

impl<S: IntoIterator> Operation<S> for DropOp {
    type Output = DropFirst<S::IntoIter>;

    fn name(&self) -> &'static str {
        "drop"
    }

    fn apply(self, source: S) -> Self::Output {
        DropFirst {
            source: source.into_iter(),
            pending: self.count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DropFirst<I> {
    source: I,
    pending: usize,
}

impl<I: Iterator> Iterator for DropFirst<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.pending > 0 {
            let skip = std::mem::take(&mut self.pending);
            return self.source.nth(skip);
        }
        self.source.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.source.size_hint();
        (
            lo.saturating_sub(self.pending),
            hi.map(|hi| hi.saturating_sub(self.pending)),
        )
    }
}

impl<I: FusedIterator> FusedIterator for DropFirst<I> {}

/// Emit values while `predicate` holds; the first rejected value ends the
/// sequence, even if later values would pass.
pub fn take_while<T, P>(predicate: P) -> TakeWhileOp<T, P>
where
    P: FnMut(&T) -> bool,
{
    TakeWhileOp {
        predicate,
        _item: PhantomData,
    }
}

pub struct TakeWhileOp<T, P> {
    predicate: P,
    _item: PhantomData<fn(&T)>,
}

impl<S, P> Operation<S> for TakeWhileOp<S::Item, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    type Output = TakeWhile<S::IntoIter, P>;

    fn name(&self) -> &'static str {
        "take_while"
    }

    fn apply(self, source: S) -> Self::Output {
        TakeWhile {
            source: source.into_iter(),
            predicate: self.predicate,
            done: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TakeWhile<I, P> {
    source: I,
    predicate: P,
    done: bool,
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }
        match self.source.next() {
            Some(value) if (self.predicate)(&value) => Some(value),
            _ => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.source.size_hint().1)
        }
    }
}

impl<I, P> FusedIterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}

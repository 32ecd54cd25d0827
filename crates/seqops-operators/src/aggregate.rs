//! Terminal aggregations.
//!
//! `count`, `reduce`, `sum`, `max` and `min` drain the whole source. `find`,
//! `some`, `none` and `every` stop at the first value that settles the answer.
//! Every aggregation has a defined result for an empty source.

use std::cmp::Ordering;
use std::marker::PhantomData;
use std::ops::Add;

use seqops_core::order::invert;

use crate::traits::Aggregation;

fn max_by<I, C>(source: I, mut comparator: C) -> Option<I::Item>
where
    I: Iterator,
    C: FnMut(&I::Item, &I::Item) -> Ordering,
{
    let mut current = None;
    for value in source {
        // Ties keep the earlier value.
        let replace = match &current {
            None => true,
            Some(best) => comparator(best, &value) == Ordering::Less,
        };
        if replace {
            current = Some(value);
        }
    }
    current
}

/// The value `comparator` ranks highest, or `None` for an empty source.
pub fn max<T, C>(comparator: C) -> MaxOp<T, C>
where
    C: FnMut(&T, &T) -> Ordering,
{
    MaxOp {
        comparator,
        _item: PhantomData,
    }
}

pub struct MaxOp<T, C> {
    comparator: C,
    _item: PhantomData<fn(&T)>,
}

impl<S, C> Aggregation<S> for MaxOp<S::Item, C>
where
    S: IntoIterator,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
{
    type Output = Option<S::Item>;

    fn name(&self) -> &'static str {
        "max"
    }

    fn aggregate(self, source: S) -> Self::Output {
        max_by(source.into_iter(), self.comparator)
    }
}

/// `max` under the inverted comparator: the value ranked lowest, earliest on
/// ties, `None` for an empty source.
pub fn min<T, C>(comparator: C) -> MinOp<T, C>
where
    C: FnMut(&T, &T) -> Ordering,
{
    MinOp {
        comparator,
        _item: PhantomData,
    }
}

pub struct MinOp<T, C> {
    comparator: C,
    _item: PhantomData<fn(&T)>,
}

impl<S, C> Aggregation<S> for MinOp<S::Item, C>
where
    S: IntoIterator,
    C: FnMut(&S::Item, &S::Item) -> Ordering,
{
    type Output = Option<S::Item>;

    fn name(&self) -> &'static str {
        "min"
    }

    fn aggregate(self, source: S) -> Self::Output {
        max_by(source.into_iter(), invert::<S::Item, C>(self.comparator))
    }
}

pub fn count() -> CountOp {
    CountOp
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CountOp;

impl<S: IntoIterator> Aggregation<S> for CountOp {
    type Output = usize;

    fn name(&self) -> &'static str {
        "count"
    }

    fn aggregate(self, source: S) -> usize {
        let mut n = 0;
        for _ in source {
            n += 1;
        }
        n
    }
}

/// First value satisfying `predicate`; `None` when nothing matches.
pub fn find<T, P>(predicate: P) -> FindOp<T, P>
where
    P: FnMut(&T) -> bool,
{
    FindOp {
        predicate,
        _item: PhantomData,
    }
}

pub struct FindOp<T, P> {
    predicate: P,
    _item: PhantomData<fn(&T)>,
}

impl<S, P> Aggregation<S> for FindOp<S::Item, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    type Output = Option<S::Item>;

    fn name(&self) -> &'static str {
        "find"
    }

    fn aggregate(mut self, source: S) -> Self::Output {
        for value in source {
            if (self.predicate)(&value) {
                return Some(value);
            }
        }
        None
    }
}

/// Left fold: starts from `initial`, folds every value in with `reducer`.
/// An empty source returns `initial` untouched.
pub fn reduce<A, T, R>(reducer: R, initial: A) -> ReduceOp<A, T, R>
where
    R: FnMut(A, T) -> A,
{
    ReduceOp {
        reducer,
        initial,
        _item: PhantomData,
    }
}

pub struct ReduceOp<A, T, R> {
    reducer: R,
    initial: A,
    _item: PhantomData<fn(T)>,
}

impl<S, A, R> Aggregation<S> for ReduceOp<A, S::Item, R>
where
    S: IntoIterator,
    R: FnMut(A, S::Item) -> A,
{
    type Output = A;

    fn name(&self) -> &'static str {
        "reduce"
    }

    fn aggregate(mut self, source: S) -> A {
        let mut aggregate = self.initial;
        for value in source {
            aggregate = (self.reducer)(aggregate, value);
        }
        aggregate
    }
}

/// `reduce` with `+`, seeded at the type's zero (`Default`).
pub fn sum() -> SumOp {
    SumOp
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SumOp;

impl<S> Aggregation<S> for SumOp
where
    S: IntoIterator,
    S::Item: Add<Output = S::Item> + Default,
{
    type Output = S::Item;

    fn name(&self) -> &'static str {
        "sum"
    }

    fn aggregate(self, source: S) -> S::Item {
        reduce(|a: S::Item, b: S::Item| a + b, <S::Item as Default>::default()).aggregate(source)
    }
}

/// `true` as soon as one value satisfies `predicate`; `false` otherwise.
pub fn some<T, P>(predicate: P) -> SomeOp<T, P>
where
    P: FnMut(&T) -> bool,
{
    SomeOp {
        predicate,
        _item: PhantomData,
    }
}

pub struct SomeOp<T, P> {
    predicate: P,
    _item: PhantomData<fn(&T)>,
}

impl<S, P> Aggregation<S> for SomeOp<S::Item, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    type Output = bool;

    fn name(&self) -> &'static str {
        "some"
    }

    fn aggregate(mut self, source: S) -> bool {
        for value in source {
            if (self.predicate)(&value) {
                return true;
            }
        }
        false
    }
}

/// Negation of `some`: `false` on the first match, `true` otherwise.
pub fn none<T, P>(predicate: P) -> NoneOp<T, P>
where
    P: FnMut(&T) -> bool,
{
    NoneOp {
        predicate,
        _item: PhantomData,
    }
}

pub struct NoneOp<T, P> {
    predicate: P,
    _item: PhantomData<fn(&T)>,
}

impl<S, P> Aggregation<S> for NoneOp<S::Item, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    type Output = bool;

    fn name(&self) -> &'static str {
        "none"
    }

    fn aggregate(self, source: S) -> bool {
        !SomeOp {
            predicate: self.predicate,
            _item: PhantomData,
        }
        .aggregate(source)
    }
}

/// `false` on the first value failing `predicate`, `true` otherwise.
pub fn every<T, P>(predicate: P) -> EveryOp<T, P>
where
    P: FnMut(&T) -> bool,
{
    EveryOp {
        predicate,
        _item: PhantomData,
    }
}

pub struct EveryOp<T, P> {
    predicate: P,
    _item: PhantomData<fn(&T)>,
}

impl<S, P> Aggregation<S> for EveryOp<S::Item, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    type Output = bool;

    fn name(&self) -> &'static str {
        "every"
    }

    fn aggregate(mut self, source: S) -> bool {
        for value in source {
            if !(self.predicate)(&value) {
                return false;
            }
        }
        true
    }
}

//! Map operator, plus the identity `flat` pass-through.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::traits::Operation;

/// Build a map that emits `mapper(value)` for every source value.
pub fn map<T, U, F>(mapper: F) -> MapOp<T, F>
where
    F: FnMut(T) -> U,
{
    MapOp {
        mapper,
        _item: PhantomData,
    }
}

pub struct MapOp<T, F> {
    mapper: F,
    _item: PhantomData<fn(T)>,
}

impl<S, U, F> Operation<S> for MapOp<S::Item, F>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> U,
{
    type Output = Map<S::IntoIter, F>;

    fn name(&self) -> &'static str {
        "map"
    }

    fn apply(self, source: S) -> Self::Output {
        Map {
            source: source.into_iter(),
            mapper: self.mapper,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Map<I, F> {
    source: I,
    mapper: F,
}

impl<I, U, F> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        self.source.next().map(&mut self.mapper)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<I, U, F> FusedIterator for Map<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> U,
{
}

/// Build the identity pass-through. Every source value comes out unchanged;
/// nested sequences are flattened by composing it with `concat` or `map`.
pub fn flat() -> FlatOp {
    FlatOp
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FlatOp;

impl<S: IntoIterator> Operation<S> for FlatOp {
    type Output = Flat<S::IntoIter>;

    fn name(&self) -> &'static str {
        "flat"
    }

    fn apply(self, source: S) -> Self::Output {
        Flat {
            source: source.into_iter(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Flat<I> {
    source: I,
}

impl<I: Iterator> Iterator for Flat<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.source.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<I: FusedIterator> FusedIterator for Flat<I> {}

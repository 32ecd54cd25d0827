//! Filter operator: keeps the values a predicate accepts, in source order.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::traits::Operation;

/// Build a filter that keeps values for which `predicate` returns `true`.
///
/// The predicate runs exactly once per source value.
pub fn filter<T, P>(predicate: P) -> FilterOp<T, P>
where
    P: FnMut(&T) -> bool,
{
    FilterOp {
        predicate,
        _item: PhantomData,
    }
}

pub struct FilterOp<T, P> {
    predicate: P,
    _item: PhantomData<fn(&T)>,
}

impl<S, P> Operation<S> for FilterOp<S::Item, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    type Output = Filter<S::IntoIter, P>;

    fn name(&self) -> &'static str {
        "filter"
    }

    fn apply(self, source: S) -> Self::Output {
        Filter {
            source: source.into_iter(),
            predicate: self.predicate,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Filter<I, P> {
    source: I,
    predicate: P,
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for value in self.source.by_ref() {
            if (self.predicate)(&value) {
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Anything between none and all of the source may pass.
        (0, self.source.size_hint().1)
    }
}

impl<I, P> FusedIterator for Filter<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}

//! Concat: joins any number of sources end to end.
//!
//! A source is converted to an iterator only once every source before it has
//! been exhausted, so later sources may be expensive or infinite.

use std::iter::FusedIterator;

/// Concatenate `sources` in order. Zero sources give an empty sequence.
///
/// All sources share one type; mix types by boxing them as
/// `Box<dyn Iterator<Item = T>>`.
pub fn concat<S>(sources: S) -> Concat<S::IntoIter, <S::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    Concat {
        sources: sources.into_iter(),
        current: None,
    }
}

#[derive(Debug, Clone)]
pub struct Concat<S, J> {
    sources: S,
    current: Option<J>,
}

impl<S, J> Iterator for Concat<S, J>
where
    S: Iterator,
    S::Item: IntoIterator<IntoIter = J, Item = J::Item>,
    J: Iterator,
{
    type Item = J::Item;

    fn next(&mut self) -> Option<J::Item> {
        loop {
            if let Some(current) = self.current.as_mut() {
                if let Some(value) = current.next() {
                    return Some(value);
                }
                self.current = None;
            }
            self.current = Some(self.sources.next()?.into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self
            .current
            .as_ref()
            .map_or((0, Some(0)), |current| current.size_hint());
        match self.sources.size_hint() {
            (0, Some(0)) => (lo, hi),
            _ => (lo, None),
        }
    }
}

impl<S, J> FusedIterator for Concat<S, J>
where
    S: FusedIterator,
    S::Item: IntoIterator<IntoIter = J, Item = J::Item>,
    J: Iterator,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_sources_are_not_opened_early() {
        let mut opened = Vec::new();
        let sources = (0..3).map(|i| {
            opened.push(i);
            vec![i * 10, i * 10 + 1]
        });
        let mut joined = concat(sources);
        assert_eq!(joined.next(), Some(0));
        assert_eq!(joined.next(), Some(1));
        assert_eq!(joined.next(), Some(10));
        std::mem::drop(joined);
        assert_eq!(opened, vec![0, 1]);
    }

    #[test]
    fn empty_sources_are_skipped() {
        let joined: Vec<i32> = concat(vec![vec![], vec![1], vec![], vec![2, 3]]).collect();
        assert_eq!(joined, vec![1, 2, 3]);
    }
}

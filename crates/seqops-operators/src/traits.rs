//! Operation/Aggregation traits + the chaining extension.
//!
//! The lazy sequence capability is plain `Iterator`: `next()` produces the
//! following value or `None` once the sequence is exhausted. Each call is one
//! suspension point, which is what lets an infinite producer feed a
//! short-circuiting consumer without unbounded work.

/// A configured transform waiting for its source.
///
/// Invariants:
/// - `apply` must not pull from the source; pulling starts with the first
///   `next()` on the returned iterator.
/// - Applying equal configuration to equivalent sources yields equivalent
///   output sequences.
pub trait Operation<S: IntoIterator> {
    type Output: Iterator;

    /// Human-readable operator name (stable).
    fn name(&self) -> &'static str;

    /// Bind the source and return the lazy output sequence.
    fn apply(self, source: S) -> Self::Output;
}

/// A configured terminal that drains a source into one result.
///
/// Short-circuiting aggregations stop pulling as soon as their result is
/// known. The rest consume the source to the end, which never returns for an
/// infinite source.
pub trait Aggregation<S: IntoIterator> {
    type Output;

    /// Human-readable aggregation name (stable).
    fn name(&self) -> &'static str;

    fn aggregate(self, source: S) -> Self::Output;
}

/// Method-call chaining for operators and aggregations.
///
/// The names stay clear of `Iterator`'s own adapters (`filter`, `map`, ...).
pub trait SequenceExt: Iterator + Sized {
    /// Feed this sequence into a transform.
    fn pipe<O>(self, op: O) -> O::Output
    where
        O: Operation<Self>,
    {
        op.apply(self)
    }

    /// Drain this sequence into an aggregation.
    fn finish<A>(self, agg: A) -> A::Output
    where
        A: Aggregation<Self>,
    {
        agg.aggregate(self)
    }
}

impl<I: Iterator> SequenceExt for I {}

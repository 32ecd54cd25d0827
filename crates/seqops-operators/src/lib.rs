#![forbid(unsafe_code)]
//! seqops-operators: lazy operators over any `Iterator`.
//!
//! Design intent:
//! - The lazy sequence is `Iterator`. Every operator accepts `IntoIterator`
//!   and returns an `Iterator`, so operators chain without adapters.
//! - Transform operators pull from their source only as far as the next
//!   output value needs. `sort` is the one exception: it buffers the source.
//! - Configuration is bound first (`filter(pred)`), the source second
//!   (`.apply(source)` or `source.pipe(op)`). Nothing here reads the
//!   environment; the `SEQOPS_*` variables belong to the pipeline engine.
//! - Nothing here fails. Empty sources are ordinary inputs with defined results.

pub mod traits;

pub mod concat;
pub mod distinct;
pub mod filter;
pub mod map;
pub mod sort;
pub mod take;

pub mod aggregate;
pub mod generate;

pub use traits::{Aggregation, Operation, SequenceExt};

pub use concat::{concat, Concat};
pub use distinct::{distinct, Distinct, DistinctOp};
pub use filter::{filter, Filter, FilterOp};
pub use map::{flat, map, Flat, FlatOp, Map, MapOp};
pub use sort::{sort, Sort, SortOp};
pub use take::{drop, take, take_while, DropFirst, DropOp, Take, TakeOp, TakeWhile, TakeWhileOp};

pub use aggregate::{
    count, every, find, max, min, none, reduce, some, sum, CountOp, EveryOp, FindOp, MaxOp,
    MinOp, NoneOp, ReduceOp, SomeOp, SumOp,
};
pub use generate::{primes, primes_from, range, Primes, Range, RangeValue};

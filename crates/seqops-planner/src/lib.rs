#![forbid(unsafe_code)]
//! seqops-planner: declarative pipelines over `i64` sequences.
//!
//! Design:
//! - A pipeline is one source, a linear list of transform steps, and an
//!   optional terminal aggregation.
//! - Expressions are tiny: `x OP lit` / `x % k OP lit` predicates, `x OP lit`
//!   mappers, and named reducers. They are compiled once at parse time so a
//!   malformed pipeline is rejected before anything runs.
//! - `rules::optimize` folds adjacent steps whose combination is known
//!   (take/take, drop/drop, repeated distinct/sort, identity flat).
//!
//! NOTE: No operator code lives here; `seqops-exec` lowers pipelines onto
//! `seqops-operators`.

pub mod dsl;
pub mod error;
pub mod expr;
pub mod rules;

pub use dsl::yaml::{
    parse_json_pipeline, parse_yaml_pipeline, Pipeline, SortOrder, Source, Step, Terminal,
};
pub use error::PlanError;
pub use expr::{Mapper, Predicate, Reducer};

#![forbid(unsafe_code)]
//! seqops-exec: lowers a `Pipeline` onto the lazy operators and evaluates it.
//!
//! Evaluation is single-threaded and pull-based: the terminal (or the final
//! collect) drives the whole chain one value at a time.

pub mod metrics;
pub mod runtime;

pub use runtime::{Engine, ExecError, Outcome};

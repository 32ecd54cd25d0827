#![forbid(unsafe_code)]
//! seqops-core: shared error type, run configuration, and comparator helpers.
//!
//! Operators themselves never fail; the error type here covers the fallible
//! surfaces layered above them (expression parsing, pipeline planning, config).

pub mod config;
pub mod error;
pub mod order;

pub use error::{Error, Result};

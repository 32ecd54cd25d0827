#![forbid(unsafe_code)]
//! seqops: lazy sequence operators over any `Iterator`.
//!
//! Facade over the workspace crates:
//! - `seqops-operators`: transforms, aggregations, and generators
//! - `seqops-planner`: YAML pipeline DSL for `i64` sequences
//! - `seqops-exec`: engine that evaluates parsed pipelines

pub use seqops_core::{config::RunConfig, order, Error, Result};
pub use seqops_exec::{Engine, ExecError, Outcome};
pub use seqops_operators::*;
pub use seqops_planner::{parse_yaml_pipeline, Pipeline, PlanError};

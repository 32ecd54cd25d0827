//! YAML/JSON → `Pipeline` parser for *linear* `i64` pipelines.
//!
//! Example:
//! ```yaml
//! config: { collect_limit: 10 }
//! source: { op: range, start: 0, end: 100, step: 1 }
//! steps:
//!   - op: filter
//!     expr: "x % 2 == 0"
//!   - op: map
//!     expr: "x * 3"
//!   - op: take
//!     count: 3
//! terminal: { op: sum }
//! ```

use serde::{Deserialize, Serialize};

use seqops_core::config::RunConfig;
use seqops_core::Error;

use crate::error::PlanError;
use crate::expr::{Mapper, Predicate, Reducer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    #[serde(default)]
    pub config: Option<RunConfig>,
    pub source: Source,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub terminal: Option<Terminal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "op")]
pub enum Source {
    Range {
        start: i64,
        end: i64,
        #[serde(default = "default_step")]
        step: i64,
    },
    Primes,
    PrimesFrom {
        start: u64,
    },
    Values {
        values: Vec<i64>,
    },
    Concat {
        sources: Vec<Source>,
    },
}

fn default_step() -> i64 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "op")]
pub enum Step {
    Filter {
        expr: String,
    },
    Map {
        expr: String,
    },
    Flat,
    /// Negative counts behave as zero.
    Take {
        count: i64,
    },
    /// Negative counts behave as zero.
    Drop {
        count: i64,
    },
    TakeWhile {
        expr: String,
    },
    Distinct,
    Sort {
        #[serde(default)]
        order: SortOrder,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "op")]
pub enum Terminal {
    Max,
    Min,
    Count,
    Sum,
    Find {
        expr: String,
    },
    Reduce {
        expr: String,
        #[serde(default)]
        initial: i64,
    },
    #[serde(rename = "some")]
    Any {
        expr: String,
    },
    #[serde(rename = "none")]
    NoMatch {
        expr: String,
    },
    Every {
        expr: String,
    },
}

/// Clamp a DSL count to an operator count.
pub fn clamp_count(count: i64) -> usize {
    usize::try_from(count).unwrap_or(0)
}

impl Source {
    fn validate(&self) -> Result<(), PlanError> {
        match self {
            Source::Range { step, .. } if *step <= 0 => Err(Error::Plan(format!(
                "range step must be positive, got {}",
                step
            ))
            .into()),
            Source::Concat { sources } => sources.iter().try_for_each(Source::validate),
            _ => Ok(()),
        }
    }
}

impl Pipeline {
    /// Compile every expression and check the embedded config, without
    /// running anything.
    pub fn validate(&self) -> Result<(), PlanError> {
        if let Some(cfg) = &self.config {
            cfg.validate()?;
        }
        self.source.validate()?;
        for step in &self.steps {
            match step {
                Step::Filter { expr } | Step::TakeWhile { expr } => {
                    Predicate::parse(expr)?;
                }
                Step::Map { expr } => {
                    Mapper::parse(expr)?;
                }
                Step::Flat
                | Step::Take { .. }
                | Step::Drop { .. }
                | Step::Distinct
                | Step::Sort { .. } => {}
            }
        }
        match &self.terminal {
            Some(Terminal::Find { expr })
            | Some(Terminal::Any { expr })
            | Some(Terminal::NoMatch { expr })
            | Some(Terminal::Every { expr }) => {
                Predicate::parse(expr)?;
            }
            Some(Terminal::Reduce { expr, .. }) => {
                Reducer::parse(expr)?;
            }
            Some(Terminal::Max | Terminal::Min | Terminal::Count | Terminal::Sum) | None => {}
        }
        Ok(())
    }
}

/// Parse a YAML string into a validated `Pipeline`.
pub fn parse_yaml_pipeline(yaml_src: &str) -> Result<Pipeline, PlanError> {
    let doc: Pipeline = serde_yaml::from_str(yaml_src)?;
    doc.validate()?;
    Ok(doc)
}

/// Parse a JSON string into a validated `Pipeline`.
pub fn parse_json_pipeline(json_src: &str) -> Result<Pipeline, PlanError> {
    let doc: Pipeline = serde_json::from_str(json_src)?;
    doc.validate()?;
    Ok(doc)
}

//! Runtime: lower a `Pipeline` onto boxed operator chains and evaluate it.
//!
//! Behavior:
//! - Merges the engine config with the pipeline's own `config:` block.
//! - Runs `rules::optimize` over the steps before lowering.
//! - Lowers the source, then each step, into one boxed `Iterator<Item = i64>`.
//! - A terminal drains the chain through the matching aggregation; without a
//!   terminal the chain is collected, capped by `collect_limit` if set.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use seqops_core::config::RunConfig;
use seqops_core::order::{ascending, descending};

use seqops_operators::{
    concat, count, distinct, drop, every, filter, find, flat, map, max, min, none, primes,
    primes_from, range, reduce, some, sort, take, take_while, SequenceExt,
};

use seqops_planner::dsl::yaml::clamp_count;
use seqops_planner::rules::optimize;
use seqops_planner::{
    Mapper, Pipeline, PlanError, Predicate, Reducer, SortOrder, Source, Step, Terminal,
};

use crate::metrics::emit_span;

type Seq = Box<dyn Iterator<Item = i64>>;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("invalid pipeline: {0}")]
    Plan(#[from] PlanError),
    #[error("invalid config: {0}")]
    Config(#[from] seqops_core::Error),
}

/// Result of running a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "result")]
pub enum Outcome {
    /// No terminal: the collected sequence.
    Values(Vec<i64>),
    /// `max`, `min`, `find`: `None` when there is no value to report.
    Value(Option<i64>),
    /// `sum`, `reduce`.
    Scalar(i64),
    Count(usize),
    /// `some`, `none`, `every`.
    Flag(bool),
}

/// Engine owns the run configuration.
pub struct Engine {
    cfg: RunConfig,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(RunConfig::default())
    }
}

impl Engine {
    pub fn new(cfg: RunConfig) -> Self {
        Self { cfg }
    }

    /// Engine configured from `SEQOPS_*` variables (see [`RunConfig::from_env`]).
    /// Only the engine reads the environment; the operators take all of their
    /// configuration as arguments.
    pub fn from_env() -> Self {
        Self::new(RunConfig::from_env())
    }

    pub fn config(&self) -> &RunConfig {
        &self.cfg
    }

    /// Evaluate `pipeline` and return its outcome.
    ///
    /// A pipeline over an infinite source only returns when something in it
    /// bounds the work: a `take`/`take_while` step, a short-circuiting terminal
    /// that finds its answer, or a `collect_limit`.
    pub fn run(&self, pipeline: &Pipeline) -> Result<Outcome, ExecError> {
        pipeline.validate()?;
        let cfg = match &pipeline.config {
            Some(own) => self.cfg.clone().merged_with(own),
            None => self.cfg.clone(),
        };
        cfg.validate()?;

        let steps = optimize(pipeline.steps.clone());
        emit_span(
            "run",
            &[
                ("steps", steps.len().to_string()),
                ("terminal", format!("{:?}", pipeline.terminal)),
            ],
        );

        let mut seq = lower_source(&pipeline.source);
        for step in &steps {
            seq = lower_step(seq, step)?;
        }
        let seq = traced(seq, &cfg);

        let outcome = match &pipeline.terminal {
            None => Outcome::Values(match cfg.collect_limit {
                Some(limit) => seq.pipe(take(limit)).collect(),
                None => seq.collect(),
            }),
            Some(terminal) => aggregate(seq, terminal)?,
        };

        emit_span("done", &[("outcome", format!("{:?}", outcome))]);
        Ok(outcome)
    }
}

fn lower_source(source: &Source) -> Seq {
    match source {
        Source::Range { start, end, step } => Box::new(range(*start, *end, *step)),
        Source::Primes => Box::new(primes().map_while(|p| i64::try_from(p).ok())),
        Source::PrimesFrom { start } => {
            Box::new(primes_from(*start).map_while(|p| i64::try_from(p).ok()))
        }
        Source::Values { values } => Box::new(values.clone().into_iter()),
        Source::Concat { sources } => {
            // Lower lazily so later sources are only built once reached.
            let sources = sources.clone();
            Box::new(concat(sources.into_iter().map(|s| lower_source(&s))))
        }
    }
}

fn lower_step(seq: Seq, step: &Step) -> Result<Seq, ExecError> {
    emit_span("step", &[("step", format!("{:?}", step))]);
    let lowered: Seq = match step {
        Step::Filter { expr } => {
            let p = compile_predicate(expr)?;
            Box::new(seq.pipe(filter(move |x: &i64| p.eval(*x))))
        }
        Step::Map { expr } => {
            let m = Mapper::parse(expr).map_err(PlanError::from)?;
            Box::new(seq.pipe(map(move |x: i64| m.eval(x))))
        }
        Step::Flat => Box::new(seq.pipe(flat())),
        Step::Take { count } => Box::new(seq.pipe(take(clamp_count(*count)))),
        Step::Drop { count } => Box::new(seq.pipe(drop(clamp_count(*count)))),
        Step::TakeWhile { expr } => {
            let p = compile_predicate(expr)?;
            Box::new(seq.pipe(take_while(move |x: &i64| p.eval(*x))))
        }
        Step::Distinct => Box::new(seq.pipe(distinct())),
        Step::Sort {
            order: SortOrder::Asc,
        } => Box::new(seq.pipe(sort::<i64, _>(ascending()))),
        Step::Sort {
            order: SortOrder::Desc,
        } => Box::new(seq.pipe(sort::<i64, _>(descending()))),
    };
    Ok(lowered)
}

fn aggregate(seq: Seq, terminal: &Terminal) -> Result<Outcome, ExecError> {
    let outcome = match terminal {
        Terminal::Max => Outcome::Value(seq.finish(max::<i64, _>(ascending()))),
        Terminal::Min => Outcome::Value(seq.finish(min::<i64, _>(ascending()))),
        Terminal::Count => Outcome::Count(seq.finish(count())),
        // DSL arithmetic wraps, so `sum` agrees with `reduce "+"`.
        Terminal::Sum => {
            Outcome::Scalar(seq.finish(reduce(|acc: i64, x: i64| acc.wrapping_add(x), 0)))
        }
        Terminal::Find { expr } => {
            let p = compile_predicate(expr)?;
            Outcome::Value(seq.finish(find(move |x: &i64| p.eval(*x))))
        }
        Terminal::Reduce { expr, initial } => {
            let r = Reducer::parse(expr).map_err(PlanError::from)?;
            Outcome::Scalar(seq.finish(reduce(move |acc: i64, x: i64| r.eval(acc, x), *initial)))
        }
        Terminal::Any { expr } => {
            let p = compile_predicate(expr)?;
            Outcome::Flag(seq.finish(some(move |x: &i64| p.eval(*x))))
        }
        Terminal::NoMatch { expr } => {
            let p = compile_predicate(expr)?;
            Outcome::Flag(seq.finish(none(move |x: &i64| p.eval(*x))))
        }
        Terminal::Every { expr } => {
            let p = compile_predicate(expr)?;
            Outcome::Flag(seq.finish(every(move |x: &i64| p.eval(*x))))
        }
    };
    Ok(outcome)
}

fn compile_predicate(expr: &str) -> Result<Predicate, ExecError> {
    Predicate::parse(expr).map_err(|e| ExecError::Plan(e.into()))
}

#[cfg(feature = "tracing")]
fn traced(seq: Seq, cfg: &RunConfig) -> Seq {
    if cfg.trace_values == Some(true) {
        Box::new(seq.inspect(|v| tracing::trace!(value = *v, "emit")))
    } else {
        seq
    }
}

#[cfg(not(feature = "tracing"))]
fn traced(seq: Seq, _cfg: &RunConfig) -> Seq {
    seq
}

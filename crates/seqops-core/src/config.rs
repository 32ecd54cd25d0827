//! Run configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Upper bound on values collected when a pipeline ends without an
    /// aggregation. `None` collects everything (and never returns for an
    /// infinite source). Aggregations ignore this.
    pub collect_limit: Option<usize>,

    /// Emit one trace event per value leaving the pipeline (needs the
    /// `tracing` feature on the engine). `None` means off unless an
    /// overlay sets it.
    pub trace_values: Option<bool>,
}

impl RunConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Only the pipeline engine calls this. The sequence operators never read
    /// the environment.
    ///
    /// Environment variables:
    /// - `SEQOPS_COLLECT_LIMIT`: max values collected from a sequence result
    /// - `SEQOPS_TRACE_VALUES`: `1`/`true` to trace every emitted value
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("SEQOPS_COLLECT_LIMIT") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.collect_limit = Some(v);
            }
        }

        if let Ok(s) = std::env::var("SEQOPS_TRACE_VALUES") {
            cfg.trace_values = Some(matches!(s.trim(), "1" | "true" | "TRUE" | "yes"));
        }

        cfg
    }

    /// Overlay the fields set in `other` on top of `self`. Unset (`None`)
    /// fields keep the value from `self`.
    pub fn merged_with(mut self, other: &RunConfig) -> Self {
        if other.collect_limit.is_some() {
            self.collect_limit = other.collect_limit;
        }
        if other.trace_values.is_some() {
            self.trace_values = other.trace_values;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.collect_limit == Some(0) {
            return Err(Error::Config(
                "collect_limit must be positive when set".into(),
            ));
        }
        Ok(())
    }

    pub fn from_json(src: &str) -> Result<Self> {
        let cfg: RunConfig = serde_json::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

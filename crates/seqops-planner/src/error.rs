use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("pipeline yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("pipeline json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] seqops_core::Error),
}

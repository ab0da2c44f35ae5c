// src/error.rs

use thiserror::Error;

/// Fallo del almacenamiento clave-valor subyacente.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage backend rejected key `{key}`: {reason}")]
    Rejected { key: String, reason: String },
}

/// Errores al cargar o validar el contenido embebido.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content file is not valid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("duplicated phase id `{0}`")]
    DuplicatePhase(String),
    #[error("duplicated task id `{0}`")]
    DuplicateTask(String),
    #[error("phase `{0}` has no tasks")]
    EmptyPhase(String),
    #[error("phase `{phase}` has an invalid colour `{color}` (expected #RRGGBB)")]
    InvalidColor { phase: String, color: String },
    #[error("the step sequence needs at least 2 steps, found {0}")]
    TooFewSteps(usize),
    #[error("duplicated step `{0}`")]
    DuplicateStep(String),
}

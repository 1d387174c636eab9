use thiserror::Error;

/// Errors surfaced by the ledgers, the randomizer and the wheel.
///
/// Lookup misses on update/delete are not errors: those operations return
/// `None`/`false` and callers check the result.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Cannot pick from an empty candidate list")]
    EmptyInput,

    #[error("Wheel is full (max {max} items)")]
    WheelFull { max: usize },

    #[error("Wheel needs at least {min} items to spin, got {got}")]
    WheelTooSmall { min: usize, got: usize },

    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

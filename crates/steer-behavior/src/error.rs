use steer_path::PathError;
use thiserror::Error;

/// Errors produced during behavior evaluation.
///
/// All of these indicate a misconfigured slot (the host attached a behavior
/// without the inputs it needs), never a transient fault.
#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("behavior requires a target but the slot has none")]
    MissingTarget,

    #[error("behavior requires a path but the slot has none")]
    MissingPath,

    #[error(transparent)]
    Path(#[from] PathError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;

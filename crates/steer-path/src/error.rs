//! Path-subsystem error type.

use thiserror::Error;

/// Errors produced by `steer-path`.
///
/// `InvalidIndex` and `InsufficientStations` are host contract violations —
/// a misconfigured path — and are surfaced immediately rather than clamped.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("station index {index} out of range for path with {station_count} stations")]
    InvalidIndex { index: usize, station_count: usize },

    #[error("path has {station_count} stations; at least 2 are required")]
    InsufficientStations { station_count: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type PathResult<T> = Result<T, PathError>;

//! `steer-path` — authored waypoint paths for the `rust_steer` framework.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`path`]   | `Path`, `Station`, projection and percent queries         |
//! | [`loader`] | CSV station loading                                       |
//! | [`error`]  | `PathError`, `PathResult<T>`                              |
//!
//! # Percent parameterization
//!
//! A path position can be addressed by a normalized **percent** in `[0, 1)`
//! of its total arc length.  Every station carries a *weight* — its incoming
//! segment's share of the total length — so percent arithmetic is a walk over
//! cumulative weights rather than repeated distance summation.  Weights are
//! recomputed on every structural mutation and sum to 1 across all eligible
//! stations (all of them on a circular path, all but the first on an open
//! one).
//!
//! Paths are **authored**, not computed: there is no planning or obstacle
//! routing here, only geometry queries over a fixed station sequence.

pub mod error;
pub mod loader;
pub mod path;

#[cfg(test)]
mod tests;

pub use error::{PathError, PathResult};
pub use loader::{load_path_csv, load_path_reader};
pub use path::{Path, Station};

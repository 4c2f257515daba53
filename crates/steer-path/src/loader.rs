//! CSV path loader.
//!
//! # CSV format
//!
//! One row per station, in traversal order:
//!
//! ```csv
//! x,y
//! 0.0,0.0
//! 10.0,0.0
//! 10.0,10.0
//! 0.0,10.0
//! ```
//!
//! Whether the path closes back to its first station is a property of how it
//! is *used*, not of the data, so `is_circle` is an argument rather than a
//! column.

use std::io::Read;

use serde::Deserialize;

use steer_core::Vec2;

use crate::{Path, PathResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StationRecord {
    x: f32,
    y: f32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a path from a CSV file of station positions.
pub fn load_path_csv(path: &std::path::Path, is_circle: bool) -> PathResult<Path> {
    let file = std::fs::File::open(path)?;
    load_path_reader(file, is_circle)
}

/// Like [`load_path_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded station data.
pub fn load_path_reader<R: Read>(reader: R, is_circle: bool) -> PathResult<Path> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut result = Path::new(is_circle);
    for record in csv_reader.deserialize() {
        let record: StationRecord = record?;
        result.push_station(Vec2::new(record.x, record.y));
    }
    Ok(result)
}

//! The `Path` type: an ordered (optionally circular) station sequence with
//! arc-length weights and projection/percent queries.

use steer_core::Vec2;

use crate::{PathError, PathResult};

// ── Station ───────────────────────────────────────────────────────────────────

/// One waypoint of a path.
///
/// `weight` and `distance_from_previous` are derived from station positions
/// and maintained by [`Path`]'s mutators — do not construct directly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Station {
    /// World position of the waypoint.
    pub position: Vec2,
    /// This station's incoming segment length as a fraction of the path's
    /// total length.  0 for the first station of an open path.
    pub weight: f32,
    /// Length of the incoming segment.  For station 0 this is the closing
    /// segment from the last station when circular, 0 when open.
    pub distance_from_previous: f32,
}

// ── Path ──────────────────────────────────────────────────────────────────────

/// An ordered waypoint sequence, traversed station 0 → 1 → … → N−1 and, when
/// `is_circle`, closing back to station 0.
///
/// Invariant: after every mutation the weights of all eligible stations (all
/// of them if circular, all but the first if open) sum to 1, provided the
/// path has any length at all.
#[derive(Clone, Debug, Default)]
pub struct Path {
    stations: Vec<Station>,
    is_circle: bool,
    total_length: f32,
}

impl Path {
    /// An empty path.
    pub fn new(is_circle: bool) -> Self {
        Self {
            stations: Vec::new(),
            is_circle,
            total_length: 0.0,
        }
    }

    /// Build a path from a sequence of waypoint positions.
    pub fn from_points(points: impl IntoIterator<Item = Vec2>, is_circle: bool) -> Self {
        let mut path = Path::new(is_circle);
        for p in points {
            path.push_station(p);
        }
        path
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn is_circle(&self) -> bool {
        self.is_circle
    }

    /// Total arc length, including the closing segment when circular.
    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    /// Position of station `i`.
    pub fn station_position(&self, i: usize) -> PathResult<Vec2> {
        self.check_index(i)?;
        Ok(self.stations[i].position)
    }

    // ── Mutators (each recomputes weights) ────────────────────────────────

    /// Append a station at the end of the sequence.
    pub fn push_station(&mut self, position: Vec2) {
        self.stations.push(Station {
            position,
            weight: 0.0,
            distance_from_previous: 0.0,
        });
        self.recompute_weights();
    }

    /// Insert a station before index `i` (`i == station_count` appends).
    pub fn insert_station(&mut self, i: usize, position: Vec2) -> PathResult<()> {
        if i > self.stations.len() {
            return Err(PathError::InvalidIndex {
                index: i,
                station_count: self.stations.len(),
            });
        }
        self.stations.insert(
            i,
            Station {
                position,
                weight: 0.0,
                distance_from_previous: 0.0,
            },
        );
        self.recompute_weights();
        Ok(())
    }

    /// Remove station `i`, returning its position.
    pub fn remove_station(&mut self, i: usize) -> PathResult<Vec2> {
        self.check_index(i)?;
        let removed = self.stations.remove(i);
        self.recompute_weights();
        Ok(removed.position)
    }

    /// Switch between open and closed-loop traversal.
    pub fn set_circular(&mut self, is_circle: bool) {
        self.is_circle = is_circle;
        self.recompute_weights();
    }

    // ── Index navigation ──────────────────────────────────────────────────

    /// Index of the station after `i`: wraps on a circular path, clamps to
    /// the last station on an open one.
    pub fn next_station_index(&self, i: usize) -> PathResult<usize> {
        self.check_index(i)?;
        let last = self.stations.len() - 1;
        Ok(if i == last {
            if self.is_circle { 0 } else { last }
        } else {
            i + 1
        })
    }

    /// Index of the station before `i`: wraps on a circular path, clamps to
    /// the first station on an open one.
    pub fn previous_station_index(&self, i: usize) -> PathResult<usize> {
        self.check_index(i)?;
        Ok(if i == 0 {
            if self.is_circle { self.stations.len() - 1 } else { 0 }
        } else {
            i - 1
        })
    }

    // ── Projection queries ────────────────────────────────────────────────

    /// Project `point` onto the segment arriving at station `i` (from its
    /// predecessor).  The projection parameter is clamped to `[0, 1]`, so
    /// the result never leaves the segment.
    pub fn closest_point_on_segment(&self, i: usize, point: Vec2) -> PathResult<Vec2> {
        let start = self.previous_station_index(i)?;
        let a = self.stations[start].position;
        let b = self.stations[i].position;

        let ab = b - a;
        let len_sq = ab.length_squared();
        if len_sq == 0.0 {
            // Degenerate segment (open-path endpoint or coincident stations).
            return Ok(a);
        }

        let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
        Ok(a + ab * t)
    }

    /// Distance from `point` to its projection on the segment arriving at
    /// station `i`.
    pub fn distance_to_segment(&self, i: usize, point: Vec2) -> PathResult<f32> {
        Ok(point.distance(self.closest_point_on_segment(i, point)?))
    }

    /// The globally closest on-path point to `point`.
    ///
    /// Scans every traversable segment; ties keep the first segment in
    /// traversal order.
    pub fn closest_point_on_path(&self, point: Vec2) -> PathResult<Vec2> {
        self.check_traversable()?;

        let mut best = Vec2::ZERO;
        let mut best_dist_sq = f32::INFINITY;
        for end in self.segment_ends() {
            let q = self.closest_point_on_segment(end, point)?;
            let dist_sq = point.distance_squared(q);
            if dist_sq < best_dist_sq {
                best_dist_sq = dist_sq;
                best = q;
            }
        }
        Ok(best)
    }

    /// Normalized position along the path of the closest on-path point:
    /// cumulative weight of the segments already traversed plus the
    /// fractional progress within the matched segment.
    pub fn closest_point_percent(&self, point: Vec2) -> PathResult<f32> {
        self.check_traversable()?;

        let mut best_percent = 0.0;
        let mut best_dist_sq = f32::INFINITY;
        let mut accumulated = 0.0;
        for end in self.segment_ends() {
            let station = &self.stations[end];
            let q = self.closest_point_on_segment(end, point)?;
            let dist_sq = point.distance_squared(q);
            if dist_sq < best_dist_sq {
                best_dist_sq = dist_sq;
                let start = self.previous_station_index(end)?;
                let along = self.stations[start].position.distance(q);
                let fraction = if station.distance_from_previous > 0.0 {
                    along / station.distance_from_previous
                } else {
                    0.0
                };
                best_percent = accumulated + fraction * station.weight;
            }
            accumulated += station.weight;
        }
        Ok(best_percent)
    }

    /// Position at normalized path percent `p` (taken modulo 1, so values
    /// outside `[0, 1)` lap around — the inverse of
    /// [`closest_point_percent`][Self::closest_point_percent]).
    pub fn point_at_percent(&self, p: f32) -> PathResult<Vec2> {
        self.check_traversable()?;

        let p = p.rem_euclid(1.0);
        let mut accumulated = 0.0;
        let mut last = self.stations[0].position;
        for end in self.segment_ends() {
            let station = &self.stations[end];
            if p <= accumulated + station.weight {
                let start = self.previous_station_index(end)?;
                let a = self.stations[start].position;
                if station.weight > 0.0 {
                    let t = (p - accumulated) / station.weight;
                    return Ok(a.lerp(station.position, t));
                }
                return Ok(station.position);
            }
            accumulated += station.weight;
            last = station.position;
        }
        // Accumulated weights fell short of p by a float rounding residue.
        Ok(last)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn check_index(&self, i: usize) -> PathResult<()> {
        if i >= self.stations.len() {
            return Err(PathError::InvalidIndex {
                index: i,
                station_count: self.stations.len(),
            });
        }
        Ok(())
    }

    fn check_traversable(&self) -> PathResult<()> {
        if self.stations.len() < 2 {
            return Err(PathError::InsufficientStations {
                station_count: self.stations.len(),
            });
        }
        Ok(())
    }

    /// End-station indices of traversable segments, in traversal order:
    /// stations `1..N`, then the closing segment ending at station 0 when
    /// circular.  Cumulative-weight walks and tie-breaking both follow this
    /// order.
    fn segment_ends(&self) -> impl Iterator<Item = usize> + '_ {
        let n = self.stations.len();
        let closing = if self.is_circle && n > 1 { Some(0) } else { None };
        (1..n).chain(closing)
    }

    /// Re-derive `distance_from_previous`, `weight`, and `total_length` from
    /// station positions.  Called by every mutator.
    fn recompute_weights(&mut self) {
        let n = self.stations.len();
        let mut total = 0.0;

        for i in 0..n {
            let d = if i == 0 {
                if self.is_circle && n > 1 {
                    self.stations[n - 1]
                        .position
                        .distance(self.stations[0].position)
                } else {
                    0.0
                }
            } else {
                self.stations[i - 1]
                    .position
                    .distance(self.stations[i].position)
            };
            self.stations[i].distance_from_previous = d;
            total += d;
        }

        self.total_length = total;
        for station in &mut self.stations {
            station.weight = if total > 0.0 {
                station.distance_from_previous / total
            } else {
                0.0
            };
        }
    }
}

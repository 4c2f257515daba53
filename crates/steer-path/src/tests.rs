//! Unit tests for steer-path.

use std::io::Cursor;

use steer_core::Vec2;

use crate::{Path, PathError, load_path_reader};

const EPS: f32 = 1e-4;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Axis-aligned 10×10 square: (0,0) → (10,0) → (10,10) → (0,10).
fn square(is_circle: bool) -> Path {
    Path::from_points(
        [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ],
        is_circle,
    )
}

/// Straight line along +X with three stations 10 apart.
fn line() -> Path {
    Path::from_points(
        [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(20.0, 0.0)],
        false,
    )
}

// ── Weights ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod weights {
    use super::*;

    #[test]
    fn open_path_weights_sum_to_one_excluding_first() {
        let path = line();
        assert!(path.stations()[0].weight.abs() < EPS);
        let sum: f32 = path.stations().iter().skip(1).map(|s| s.weight).sum();
        assert!((sum - 1.0).abs() < EPS);
        assert!((path.total_length() - 20.0).abs() < EPS);
    }

    #[test]
    fn circular_path_weights_sum_to_one() {
        let path = square(true);
        let sum: f32 = path.stations().iter().map(|s| s.weight).sum();
        assert!((sum - 1.0).abs() < EPS);
        // Four equal sides → equal weights.
        for s in path.stations() {
            assert!((s.weight - 0.25).abs() < EPS);
        }
        assert!((path.total_length() - 40.0).abs() < EPS);
    }

    #[test]
    fn weights_recomputed_on_mutation() {
        let mut path = line();
        path.push_station(Vec2::new(30.0, 0.0));
        let sum: f32 = path.stations().iter().map(|s| s.weight).sum();
        assert!((sum - 1.0).abs() < EPS);
        assert!((path.total_length() - 30.0).abs() < EPS);

        path.remove_station(3).unwrap();
        assert!((path.total_length() - 20.0).abs() < EPS);

        path.set_circular(true);
        // Closing segment 20 long → total 40, station 0 carries half.
        assert!((path.total_length() - 40.0).abs() < EPS);
        assert!((path.stations()[0].weight - 0.5).abs() < EPS);
    }

    #[test]
    fn insert_validates_index() {
        let mut path = line();
        assert!(path.insert_station(4, Vec2::ZERO).is_err());
        path.insert_station(3, Vec2::new(30.0, 0.0)).unwrap();
        assert_eq!(path.station_count(), 4);
    }
}

// ── Index navigation ──────────────────────────────────────────────────────────

#[cfg(test)]
mod indices {
    use super::*;

    #[test]
    fn open_path_clamps_at_endpoints() {
        let path = line();
        assert_eq!(path.next_station_index(2).unwrap(), 2);
        assert_eq!(path.previous_station_index(0).unwrap(), 0);
        assert_eq!(path.next_station_index(0).unwrap(), 1);
    }

    #[test]
    fn circular_path_wraps() {
        let path = square(true);
        assert_eq!(path.next_station_index(3).unwrap(), 0);
        assert_eq!(path.previous_station_index(0).unwrap(), 3);
    }

    #[test]
    fn out_of_range_index_fails() {
        let path = line();
        assert!(matches!(
            path.next_station_index(3),
            Err(PathError::InvalidIndex { index: 3, station_count: 3 })
        ));
        assert!(path.station_position(99).is_err());
    }
}

// ── Projection ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod projection {
    use super::*;

    #[test]
    fn projects_onto_segment_interior() {
        let path = line();
        let q = path
            .closest_point_on_segment(1, Vec2::new(4.0, 3.0))
            .unwrap();
        assert!(q.abs_diff_eq(Vec2::new(4.0, 0.0), EPS));
    }

    #[test]
    fn projection_clamps_to_segment_ends() {
        let path = line();
        // Beyond the far end of segment 0→1.
        let q = path
            .closest_point_on_segment(1, Vec2::new(15.0, 2.0))
            .unwrap();
        assert!(q.abs_diff_eq(Vec2::new(10.0, 0.0), EPS));
        // Before the near end.
        let q = path
            .closest_point_on_segment(1, Vec2::new(-5.0, 2.0))
            .unwrap();
        assert!(q.abs_diff_eq(Vec2::new(0.0, 0.0), EPS));
    }

    #[test]
    fn closest_point_on_path_scans_all_segments() {
        let path = square(true);
        // Nearest to the left side (closing segment (0,10) → (0,0)).
        let q = path.closest_point_on_path(Vec2::new(-3.0, 5.0)).unwrap();
        assert!(q.abs_diff_eq(Vec2::new(0.0, 5.0), EPS));
    }

    #[test]
    fn open_path_ignores_closing_segment() {
        let path = square(false);
        // Without the closing segment the nearest point to (-3, 5) is a
        // corner; (0,0) and (0,10) are equidistant and the tie keeps the
        // first segment in traversal order.
        let q = path.closest_point_on_path(Vec2::new(-3.0, 5.0)).unwrap();
        assert!(q.abs_diff_eq(Vec2::new(0.0, 0.0), EPS));
    }

    #[test]
    fn too_few_stations_fail_fast() {
        let path = Path::from_points([Vec2::ZERO], true);
        assert!(matches!(
            path.closest_point_on_path(Vec2::ZERO),
            Err(PathError::InsufficientStations { station_count: 1 })
        ));
        assert!(path.point_at_percent(0.5).is_err());
        assert!(path.closest_point_percent(Vec2::ZERO).is_err());
    }
}

// ── Percent parameterization ──────────────────────────────────────────────────

#[cfg(test)]
mod percent {
    use super::*;

    #[test]
    fn point_at_percent_hits_square_corners() {
        let path = square(true);
        assert!(path.point_at_percent(0.0).unwrap().abs_diff_eq(Vec2::new(0.0, 0.0), EPS));
        assert!(path.point_at_percent(0.25).unwrap().abs_diff_eq(Vec2::new(10.0, 0.0), EPS));
        assert!(path.point_at_percent(0.5).unwrap().abs_diff_eq(Vec2::new(10.0, 10.0), EPS));
        assert!(path.point_at_percent(0.75).unwrap().abs_diff_eq(Vec2::new(0.0, 10.0), EPS));
    }

    #[test]
    fn point_at_percent_is_periodic() {
        let path = square(true);
        let a = path.point_at_percent(1.25).unwrap();
        let b = path.point_at_percent(0.25).unwrap();
        assert!(a.abs_diff_eq(b, EPS));
        let c = path.point_at_percent(-0.75).unwrap();
        assert!(c.abs_diff_eq(b, EPS));
    }

    #[test]
    fn percent_round_trips_for_on_path_points() {
        let path = square(true);
        for p in [Vec2::new(5.0, 0.0), Vec2::new(10.0, 2.5), Vec2::new(0.0, 7.5)] {
            let percent = path.closest_point_percent(p).unwrap();
            let q = path.point_at_percent(percent).unwrap();
            assert!(q.abs_diff_eq(p, 1e-3), "{p:?} round-tripped to {q:?}");
        }
    }

    #[test]
    fn percent_accounts_for_unequal_segment_lengths() {
        // Open path with a 10-long then a 30-long segment.
        let path = Path::from_points(
            [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(10.0, 30.0)],
            false,
        );
        // Midpoint of the first segment is 5/40 of the total length.
        let percent = path.closest_point_percent(Vec2::new(5.0, 0.0)).unwrap();
        assert!((percent - 0.125).abs() < 1e-3);
        // And percent 0.5 lands 15 units up the second segment.
        let q = path.point_at_percent(0.5).unwrap();
        assert!(q.abs_diff_eq(Vec2::new(10.0, 10.0), 1e-3));
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    const CSV: &str = "x,y\n0.0,0.0\n10.0,0.0\n10.0,10.0\n0.0,10.0\n";

    #[test]
    fn loads_stations_in_order() {
        let path = load_path_reader(Cursor::new(CSV), true).unwrap();
        assert_eq!(path.station_count(), 4);
        assert!(path.is_circle());
        assert!((path.total_length() - 40.0).abs() < EPS);
        assert!(
            path.station_position(2)
                .unwrap()
                .abs_diff_eq(Vec2::new(10.0, 10.0), EPS)
        );
    }

    #[test]
    fn malformed_rows_are_errors() {
        let bad = "x,y\n1.0,not-a-number\n";
        assert!(load_path_reader(Cursor::new(bad), false).is_err());
    }
}

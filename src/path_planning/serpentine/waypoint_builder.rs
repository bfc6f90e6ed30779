//! Waypoint construction

use super::config::SerpentineConfig;
use super::stepper::PrimaryStepper;
use crate::common::{Path3D, Point3D};

/// Lateral coordinate for the waypoint at `index`.
///
/// The first three waypoints are start, end, end. After that the lateral side
/// flips on every odd index, so the path crosses on one waypoint and shifts
/// along the primary axis on the next.
fn next_lateral(index: usize, current: f64, start: f64, end: f64) -> f64 {
    match index {
        0 => start,
        1 | 2 => end,
        i if i % 2 == 1 => {
            if current == end {
                start
            } else {
                end
            }
        }
        _ => current,
    }
}

/// Build exactly `rows` waypoints from `start` towards `end`.
///
/// The vertical coordinate is taken from `start` for every waypoint. Steps are
/// applied with their sign.
pub fn build_waypoints(rows: usize, start: Point3D, end: Point3D, config: &SerpentineConfig) -> Path3D {
    let mut path = Path3D::with_capacity(rows);
    let mut stepper = PrimaryStepper::new();
    let mut lateral = start.x;
    let mut primary = start.z;

    for index in 0..rows {
        lateral = next_lateral(index, lateral, start.x, end.x);
        if let Some(offset) = stepper.advance(config.step, config.space_step) {
            primary += offset;
        }
        path.push(Point3D::new(lateral, start.y, primary));
    }

    path
}

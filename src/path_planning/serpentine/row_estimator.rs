//! Row count estimation
//!
//! Scans the primary-axis span with the same 4-tick cycle the waypoint
//! builder uses, counting ticks until the cursor passes the far end. Step
//! magnitudes are used here regardless of sign, so the estimate does not
//! depend on which direction the path is walked.

use log::debug;

use super::config::SerpentineConfig;
use super::stepper::PrimaryStepper;
use crate::common::{PathError, PathResult};

/// Number of waypoints needed to cover the span between the two primary-axis
/// values.
///
/// The last tick of the scan is the one that overshoots the span, so it is
/// not counted.
pub fn estimate_rows(start_primary: f64, end_primary: f64, config: &SerpentineConfig) -> PathResult<usize> {
    config.validate()?;
    if !start_primary.is_finite() || !end_primary.is_finite() {
        return Err(PathError::InvalidParameter(format!(
            "primary coordinates must be finite, got {} and {}",
            start_primary, end_primary
        )));
    }

    let lower = start_primary.min(end_primary);
    let upper = start_primary.max(end_primary);
    let step = config.step.abs();
    let space_step = config.space_step.abs();

    let mut stepper = PrimaryStepper::new();
    let mut cursor = lower;
    let mut ticks: usize = 0;

    while cursor <= upper {
        if let Some(offset) = stepper.advance(step, space_step) {
            cursor += offset;
        }
        ticks += 1;

        // A step too small to move the cursor at this magnitude also ends up here
        if ticks > config.max_waypoints.saturating_add(1) {
            return Err(PathError::PlanningError(format!(
                "span {} needs more than {} waypoints",
                upper - lower,
                config.max_waypoints
            )));
        }
    }

    let rows = ticks - 1;
    debug!("Row scan over span {} finished after {} ticks, {} rows", upper - lower, ticks, rows);
    Ok(rows)
}

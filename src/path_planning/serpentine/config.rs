//! Step configuration for the serpentine planner

use crate::common::{PathError, PathResult};

/// Configuration for the serpentine planner
///
/// Both steps are signed. The row estimate only looks at their magnitudes,
/// while the waypoint builder applies them as given, so negative steps walk
/// the primary axis downwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SerpentineConfig {
    /// Primary-axis offset applied between the two passes of a row pair
    pub step: f64,
    /// Primary-axis offset applied once per full cycle, between row pairs
    pub space_step: f64,
    /// Upper bound on the number of waypoints a single plan may produce
    pub max_waypoints: usize,
}

impl Default for SerpentineConfig {
    fn default() -> Self {
        Self {
            step: -1.0,
            space_step: -3.0,
            max_waypoints: 100_000,
        }
    }
}

impl SerpentineConfig {
    pub fn new(step: f64, space_step: f64) -> Self {
        Self {
            step,
            space_step,
            ..Default::default()
        }
    }

    /// Reject configurations that would make the row scan loop forever
    pub fn validate(&self) -> PathResult<()> {
        for (name, value) in [("step", self.step), ("space_step", self.space_step)] {
            if !value.is_finite() {
                return Err(PathError::InvalidParameter(format!(
                    "{} must be finite, got {}", name, value
                )));
            }
            if value == 0.0 {
                return Err(PathError::InvalidParameter(format!(
                    "{} must be non-zero", name
                )));
            }
        }
        if self.max_waypoints == 0 {
            return Err(PathError::InvalidParameter(
                "max_waypoints must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

//! Serpentine planner
//!
//! Ties the row estimate and the waypoint builder together behind the
//! [`PathPlanner`] trait.

use log::{debug, info, warn};

use super::config::SerpentineConfig;
use super::row_estimator::estimate_rows;
use super::waypoint_builder::build_waypoints;
use crate::common::{Path3D, PathError, PathPlanner, PathResult, Point3D};

/// Boustrophedon planner along the z axis
#[derive(Debug, Clone)]
pub struct SerpentinePlanner {
    config: SerpentineConfig,
}

impl SerpentinePlanner {
    pub fn new(config: SerpentineConfig) -> Self {
        SerpentinePlanner { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(SerpentineConfig::default())
    }

    pub fn config(&self) -> &SerpentineConfig {
        &self.config
    }

    /// Number of waypoints a plan between `start` and `end` will contain
    pub fn max_rows(&self, start: Point3D, end: Point3D) -> PathResult<usize> {
        check_endpoint("start", &start)?;
        check_endpoint("end", &end)?;
        estimate_rows(start.z, end.z, &self.config)
    }
}

fn check_endpoint(name: &str, p: &Point3D) -> PathResult<()> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(PathError::InvalidParameter(format!(
            "{} point must be finite, got {:?}", name, p
        )))
    }
}

impl PathPlanner for SerpentinePlanner {
    fn plan(&self, start: Point3D, end: Point3D) -> PathResult<Path3D> {
        let rows = self.max_rows(start, end)?;

        if start.y != end.y {
            debug!("End height {} ignored, path stays at {}", end.y, start.y);
        }
        let span = end.z - start.z;
        if span != 0.0 && span.signum() != self.config.step.signum() {
            warn!(
                "step {} points away from end z {}, path will leave the span",
                self.config.step, end.z
            );
        }

        let path = build_waypoints(rows, start, end, &self.config);
        info!(
            "Serpentine path generated with {} waypoints, {:.1} blocks long",
            path.len(),
            path.total_length()
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_endpoints() -> (Point3D, Point3D) {
        (
            Point3D::new(15306.5, 36.0, 15223.5),
            Point3D::new(15367.5, 36.0, 15162.5),
        )
    }

    #[test]
    fn test_field_plan() {
        let (start, end) = field_endpoints();
        let planner = SerpentinePlanner::with_defaults();
        let path = planner.plan(start, end).unwrap();

        assert_eq!(path.len(), 64);
        assert_eq!(path.len(), planner.max_rows(start, end).unwrap());
        assert_eq!(path.get(0).unwrap().to, start);
        assert_eq!(path.get(63).unwrap().to, Point3D::new(15306.5, 36.0, 15162.5));
    }

    #[test]
    fn test_degenerate_span() {
        let planner = SerpentinePlanner::new(SerpentineConfig::new(1.0, 3.0));
        let path = planner
            .plan(Point3D::new(0.0, 1.0, 5.0), Point3D::new(4.0, 1.0, 5.0))
            .unwrap();
        assert_eq!(path.primary_coords(), vec![5.0, 5.0]);
        assert_eq!(path.lateral_coords(), vec![0.0, 4.0]);
    }

    #[test]
    fn test_zero_step_is_config_error() {
        let planner = SerpentinePlanner::new(SerpentineConfig::new(0.0, 3.0));
        let (start, end) = field_endpoints();
        assert!(matches!(planner.plan(start, end), Err(PathError::InvalidParameter(_))));
    }

    #[test]
    fn test_non_finite_endpoint() {
        let planner = SerpentinePlanner::with_defaults();
        let result = planner.plan(Point3D::new(f64::NAN, 0.0, 0.0), Point3D::new(1.0, 0.0, 1.0));
        assert!(matches!(result, Err(PathError::InvalidParameter(_))));
    }

    #[test]
    fn test_wrong_direction_keeps_row_count() {
        // Same span, steps point away from the end point
        let planner = SerpentinePlanner::new(SerpentineConfig::new(1.0, 3.0));
        let (start, end) = field_endpoints();
        let path = planner.plan(start, end).unwrap();
        assert_eq!(path.len(), 64);
        assert!(path.primary_coords().iter().all(|&z| z >= start.z));
    }
}

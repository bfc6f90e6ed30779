//! Common traits defining interfaces for path generation

use crate::common::error::PathResult;
use crate::common::types::*;

/// Trait for path planning algorithms
pub trait PathPlanner {
    /// Plan a path from start to end
    fn plan(&self, start: Point3D, end: Point3D) -> PathResult<Path3D>;
}

/// Trait for turning a planned path into text for an external consumer
pub trait PathRenderer {
    fn render(&self, path: &Path3D) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that traits compile correctly
    struct StraightLine;

    impl PathPlanner for StraightLine {
        fn plan(&self, start: Point3D, end: Point3D) -> PathResult<Path3D> {
            Ok(Path3D::from_points(vec![start, end]))
        }
    }

    #[test]
    fn test_path_planner_trait() {
        let planner = StraightLine;
        let path = planner.plan(Point3D::origin(), Point3D::new(3.0, 0.0, 4.0)).unwrap();
        assert_eq!(path.len(), 2);
        assert!((path.total_length() - 5.0).abs() < 1e-10);
    }
}

//! Serpentine Planner Module
//!
//! Generates a boustrophedon path between two points: the path crosses back
//! and forth on the lateral (x) axis while advancing along the primary (z)
//! axis in a fixed 4-tick cycle. Even waypoints are walked to, odd waypoints
//! are interacted with.
//!
//! # Components
//!
//! - `config`: Signed step sizes and the waypoint limit
//! - `stepper`: The shared 4-tick cycle
//! - `row_estimator`: How many waypoints cover the span
//! - `waypoint_builder`: The waypoints themselves
//! - `serpentine_planner`: Planner combining the above
//!
//! # Example
//!
//! ```
//! use serpentine_planner::common::{PathPlanner, Point3D};
//! use serpentine_planner::path_planning::serpentine::{SerpentineConfig, SerpentinePlanner};
//!
//! let planner = SerpentinePlanner::new(SerpentineConfig::new(1.0, 3.0));
//! let path = planner
//!     .plan(Point3D::new(0.0, 1.0, 0.0), Point3D::new(4.0, 1.0, 4.0))
//!     .unwrap();
//! assert_eq!(path.len(), 6);
//! ```

pub mod config;
pub mod stepper;
pub mod row_estimator;
pub mod waypoint_builder;
pub mod serpentine_planner;

// Re-exports
pub use config::SerpentineConfig;
pub use stepper::PrimaryStepper;
pub use row_estimator::estimate_rows;
pub use waypoint_builder::build_waypoints;
pub use serpentine_planner::SerpentinePlanner;

//! serpentine_planner - boustrophedon waypoint generation
//!
//! This crate generates a back-and-forth path between two points along the
//! z axis and renders it as the walk/interact action list consumed by an
//! external automation client.

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod path_planning;

// Re-export common types for convenience
pub use common::{Action, Path3D, Point3D, Waypoint};
pub use common::{PathPlanner, PathRenderer};
pub use common::{PathError, PathResult};
pub use path_planning::serpentine::{SerpentineConfig, SerpentinePlanner};
pub use utils::ActionList;

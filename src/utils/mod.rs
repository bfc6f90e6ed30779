//! Utility modules for serpentine_planner

pub mod action_list;

pub use action_list::{ActionList, format_coord};

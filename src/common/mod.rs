//! Common types, traits, and error definitions for serpentine_planner
//!
//! This module provides the foundational building blocks shared by the
//! planner and the action list renderer.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;

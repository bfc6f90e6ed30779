//! Error types for serpentine_planner

use std::fmt;

/// Main error type for serpentine path generation
#[derive(Debug, Clone, PartialEq)]
pub enum PathError {
    /// Path planning failed
    PlanningError(String),
    /// Invalid parameter
    InvalidParameter(String),
    /// Text could not be parsed back into a path element
    ParseError(String),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::PlanningError(msg) => write!(f, "Planning error: {}", msg),
            PathError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            PathError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for PathError {}

/// Result type alias for path operations
pub type PathResult<T> = Result<T, PathError>;

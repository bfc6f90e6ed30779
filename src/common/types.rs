//! Common types used throughout serpentine_planner
//!
//! Coordinates follow the block-world convention of the automation client:
//! `x` is the lateral axis, `y` is vertical and `z` is the primary axis the
//! serpentine advances along.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector3;

use crate::common::error::PathError;

/// 3D point representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }

    pub fn distance(&self, other: &Point3D) -> f64 {
        (self.to_vector() - other.to_vector()).norm()
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Point3D {
    fn from(a: [f64; 3]) -> Self {
        Self { x: a[0], y: a[1], z: a[2] }
    }
}

impl From<Vector3<f64>> for Point3D {
    fn from(v: Vector3<f64>) -> Self {
        Self { x: v[0], y: v[1], z: v[2] }
    }
}

/// What the automation client does once it reaches a waypoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Walk to the waypoint
    Walk,
    /// Walk to the waypoint while interacting (right click)
    Interact,
}

impl Action {
    /// Even indices walk, odd indices interact.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Action::Walk
        } else {
            Action::Interact
        }
    }

    /// Label understood by the automation client
    pub fn label(&self) -> &'static str {
        match self {
            Action::Walk => "walking",
            Action::Interact => "right_clicking",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Action {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "walking" => Ok(Action::Walk),
            "right_clicking" => Ok(Action::Interact),
            other => Err(PathError::ParseError(format!("unknown action label '{}'", other))),
        }
    }
}

/// One emitted point of the path with its action
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub action: Action,
    pub to: Point3D,
}

impl Waypoint {
    pub fn new(action: Action, to: Point3D) -> Self {
        Self { action, to }
    }
}

/// Path represented as an ordered sequence of waypoints
///
/// The action of each waypoint is a function of its index, so pushing a
/// point always labels it from the current length.
#[derive(Debug, Clone, PartialEq)]
pub struct Path3D {
    waypoints: Vec<Waypoint>,
}

impl Path3D {
    pub fn new() -> Self {
        Self { waypoints: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { waypoints: Vec::with_capacity(capacity) }
    }

    pub fn from_points(points: Vec<Point3D>) -> Self {
        let mut path = Self::with_capacity(points.len());
        for p in points {
            path.push(p);
        }
        path
    }

    pub fn push(&mut self, point: Point3D) {
        let action = Action::for_index(self.waypoints.len());
        self.waypoints.push(Waypoint::new(action, point));
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Waypoint> {
        self.waypoints.iter()
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn lateral_coords(&self) -> Vec<f64> {
        self.waypoints.iter().map(|w| w.to.x).collect()
    }

    pub fn primary_coords(&self) -> Vec<f64> {
        self.waypoints.iter().map(|w| w.to.z).collect()
    }

    pub fn total_length(&self) -> f64 {
        if self.waypoints.len() < 2 {
            return 0.0;
        }
        self.waypoints.windows(2)
            .map(|w| w[0].to.distance(&w[1].to))
            .sum()
    }
}

impl Default for Path3D {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Path3D {
    type Item = &'a Waypoint;
    type IntoIter = std::slice::Iter<'a, Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.iter()
    }
}

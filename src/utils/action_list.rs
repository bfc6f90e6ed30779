//! Action list rendering
//!
//! Renders a path as the `path = [...]` TOML array read by the automation
//! client, one inline table per waypoint.

use itertools::Itertools;

use crate::common::{Path3D, PathRenderer, Waypoint};

/// Key the client looks up the waypoint array under
pub const PATH_KEY: &str = "path";

/// Format a coordinate as a TOML float.
///
/// Integral values keep a single `.0` so the client reads them as floats,
/// everything else uses the shortest round-trip form.
pub fn format_coord(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

fn format_entry(waypoint: &Waypoint) -> String {
    let to = waypoint.to;
    format!(
        "  {{ action = \"{}\", to = [{}, {}, {}] }}",
        waypoint.action.label(),
        format_coord(to.x),
        format_coord(to.y),
        format_coord(to.z)
    )
}

/// Renderer for the client's action list format
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionList;

impl ActionList {
    pub fn new() -> Self {
        ActionList
    }

    /// Render with the row count as a leading comment line
    pub fn render_with_rows(&self, path: &Path3D, max_rows: usize) -> String {
        format!("# max_rows = {}\n{}", max_rows, self.render(path))
    }
}

impl PathRenderer for ActionList {
    fn render(&self, path: &Path3D) -> String {
        if path.is_empty() {
            return format!("{} = []", PATH_KEY);
        }
        let entries = path.iter().map(format_entry).join(",\n");
        format!("{} = [\n{}\n]", PATH_KEY, entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Point3D;

    #[test]
    fn test_format_coord() {
        assert_eq!(format_coord(36.0), "36.0");
        assert_eq!(format_coord(15306.5), "15306.5");
        assert_eq!(format_coord(-4.0), "-4.0");
        assert_eq!(format_coord(0.25), "0.25");
        assert_eq!(format_coord(1e21), "1000000000000000000000.0");
    }

    #[test]
    fn test_render_two_entries() {
        let path = Path3D::from_points(vec![
            Point3D::new(15306.5, 36.0, 15223.5),
            Point3D::new(15367.5, 36.0, 15223.5),
        ]);
        let expected = "path = [\n\
            \x20 { action = \"walking\", to = [15306.5, 36.0, 15223.5] },\n\
            \x20 { action = \"right_clicking\", to = [15367.5, 36.0, 15223.5] }\n\
            ]";
        assert_eq!(ActionList::new().render(&path), expected);
    }

    #[test]
    fn test_render_integral_coordinates() {
        let path = Path3D::from_points(vec![Point3D::new(0.0, 64.0, -3.0)]);
        assert_eq!(
            ActionList::new().render(&path),
            "path = [\n  { action = \"walking\", to = [0.0, 64.0, -3.0] }\n]"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(ActionList::new().render(&Path3D::new()), "path = []");
    }

    #[test]
    fn test_render_with_rows() {
        let path = Path3D::from_points(vec![Point3D::origin()]);
        let text = ActionList::new().render_with_rows(&path, 1);
        assert!(text.starts_with("# max_rows = 1\npath = [\n"));
    }
}

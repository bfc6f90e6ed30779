//
// Serpentine path generator.
//
// Edit the constants below and run. The action list goes to stdout, logs go
// to stderr (RUST_LOG, default "info").
//
// Only the z axis is supported: the path crosses on x and advances on z.

use std::process::ExitCode;

use log::error;

use serpentine_planner::{
    ActionList, PathPlanner, Point3D, SerpentineConfig, SerpentinePlanner,
};

// [x, y, z]
const START: [f64; 3] = [15306.5, 36.0, 15223.5];
const END: [f64; 3] = [15367.5, 36.0, 15162.5];

const Z_STEP: f64 = -1.0;
const Z_SPACE_STEP: f64 = -3.0;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let start = Point3D::from(START);
    let end = Point3D::from(END);
    let planner = SerpentinePlanner::new(SerpentineConfig::new(Z_STEP, Z_SPACE_STEP));

    match planner.plan(start, end) {
        Ok(path) => {
            println!("{}", ActionList::new().render_with_rows(&path, path.len()));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Planning failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

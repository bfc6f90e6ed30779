// Path Planning algorithms module

pub mod serpentine;

pub use serpentine::*;

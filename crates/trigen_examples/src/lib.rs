#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, scene_to_svg, write_svg};

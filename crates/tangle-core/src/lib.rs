pub mod animation;
pub mod arm;
pub mod constants;
pub mod curve;
pub mod error;
pub mod font;
pub mod layout;
pub mod metrics;
pub mod params;
pub mod positioner;
pub mod scene;
pub mod state;
pub mod visualizer;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use animation::*;
pub use arm::*;
pub use curve::*;
pub use error::*;
pub use font::*;
pub use layout::*;
pub use metrics::*;
pub use params::*;
pub use positioner::*;
pub use scene::*;
pub use state::*;
pub use visualizer::*;

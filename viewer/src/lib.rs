//! Host side of the `debug_v` vertex stage.
//!
//! The transform itself lives in `viewer_shared` so the shader and the CPU
//! dispatcher here share one definition.
pub mod layout;
pub mod stage;
pub mod uniforms;

pub use glam as math;
pub use viewer_shared::{Vertex, ViewConst, VertexOut, transform, clip_position, debug_color};
pub use stage::VertexStage;
pub use uniforms::Uniforms;

pub type Result<T = (), E = Box<dyn std::error::Error>> = std::result::Result<T, E>;

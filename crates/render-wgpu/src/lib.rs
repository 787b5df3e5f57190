//! wgpu render backend for the candela viewer.
//!
//! Renders the fixed still-life table under a Phong-lit program, then the
//! lamp indicator under an unlit program. Camera uses a fly-camera model
//! with WASD + mouse look and a perspective/orthographic toggle.
//!
//! # Invariants
//! - All fallible work (shader build, texture load) happens in
//!   `SceneRenderer::new`, before the frame loop.
//! - The renderer never mutates camera state; it reads it once per frame.

mod camera;
mod gpu;
pub mod shader;
mod shaders;

pub use camera::{FlyCamera, ProjectionMode, WORLD_UP};
pub use gpu::{RenderError, SceneRenderer};
pub use shader::{ShaderError, ShaderStage};

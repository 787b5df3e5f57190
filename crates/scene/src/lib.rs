//! Static scene data for the candela viewer.
//!
//! Everything here is immutable: the vertex format, the hand-modeled mesh
//! arrays, the draw table that fixes object order and texture assignment,
//! and the lighting/material constants.
//!
//! # Invariants
//! - Meshes are plain triangle lists; vertex counts are multiples of 3.
//! - The draw table order is fixed; the renderer iterates it as-is.

pub mod geometry;
mod table;
mod vertex;

pub use table::{SceneObject, scene_objects};
pub use vertex::Vertex;

use glam::{Vec2, Vec3};

/// Base color multiplied into the lit program's output.
pub const OBJECT_COLOR: Vec3 = Vec3::new(1.0, 0.2, 0.0);

/// Point light color (white).
pub const LIGHT_COLOR: Vec3 = Vec3::new(1.0, 1.0, 1.0);

/// Point light position above the table.
pub const LIGHT_POSITION: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// Uniform scale applied to the lamp indicator mesh.
pub const LIGHT_SCALE: Vec3 = Vec3::new(0.3, 0.3, 0.3);

/// Texture coordinate multiplier uploaded to the lit program.
pub const UV_SCALE: Vec2 = Vec2::new(1.0, 1.0);

/// Background clear color (rgba).
pub const CLEAR_COLOR: [f64; 4] = [0.2, 0.3, 0.3, 1.0];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_sits_above_the_table() {
        assert!(LIGHT_POSITION.y > 0.0);
    }

    #[test]
    fn uv_scale_is_identity_by_default() {
        assert_eq!(UV_SCALE, Vec2::ONE);
    }
}

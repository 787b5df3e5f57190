use crate::geometry;
use crate::vertex::Vertex;

/// One entry of the draw table: a mesh, its texture file, and a label for
/// logs and GPU debug markers.
#[derive(Debug, Clone, Copy)]
pub struct SceneObject {
    pub name: &'static str,
    /// File name resolved against the textures directory at load time.
    pub texture: &'static str,
    pub vertices: &'static [Vertex],
}

impl SceneObject {
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }
}

const SCENE_OBJECTS: &[SceneObject] = &[
    SceneObject {
        name: "plane",
        texture: "black.jpg",
        vertices: geometry::PLANE,
    },
    SceneObject {
        name: "coaster",
        texture: "wood.jpg",
        vertices: geometry::COASTER,
    },
    SceneObject {
        name: "stand",
        texture: "matte_black.jpg",
        vertices: geometry::STAND,
    },
    SceneObject {
        name: "cup",
        texture: "blue.jpg",
        vertices: geometry::CUP,
    },
    SceneObject {
        name: "candle",
        texture: "candle.jpg",
        vertices: geometry::CANDLE,
    },
    SceneObject {
        name: "lid",
        texture: "metal.jpg",
        vertices: geometry::LID,
    },
];

/// The lit objects in draw order. The renderer iterates this table as-is;
/// adding an object here is all it takes to get it drawn.
pub fn scene_objects() -> &'static [SceneObject] {
    SCENE_OBJECTS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn six_objects_in_fixed_order() {
        let names: Vec<_> = scene_objects().iter().map(|o| o.name).collect();
        assert_eq!(
            names,
            ["plane", "coaster", "stand", "cup", "candle", "lid"]
        );
    }

    #[test]
    fn counts_match_the_mesh_arrays() {
        for obj in scene_objects() {
            assert_eq!(obj.vertex_count() as usize, obj.vertices.len());
            assert_eq!(obj.vertex_count() % 3, 0, "{} draw count", obj.name);
        }
    }

    #[test]
    fn every_object_has_its_own_texture() {
        let textures: HashSet<_> = scene_objects().iter().map(|o| o.texture).collect();
        assert_eq!(textures.len(), scene_objects().len());
    }
}

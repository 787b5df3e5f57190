use bytemuck::{Pod, Zeroable};

/// Interleaved vertex layout shared by every mesh: position, normal, uv.
///
/// Matches the vertex buffer layout declared by the render backend; the
/// stride is 32 bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Shorthand constructor used by the mesh arrays.
pub(crate) const fn v(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Vertex {
    Vertex {
        position,
        normal,
        uv,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_is_32_bytes() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
    }

    #[test]
    fn casts_to_bytes() {
        let quad = [v([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0]); 3];
        let bytes: &[u8] = bytemuck::cast_slice(&quad);
        assert_eq!(bytes.len(), 96);
    }
}

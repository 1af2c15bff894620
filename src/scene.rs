use crate::mesh::{
    QUAD_INDICES, QUAD_VERTICES, TRIANGLE_INDICES, TRIANGLE_VERTICES, Vertex,
};

/// One variant's draw description: which mesh to upload and which fragment
/// entry point colors it. Everything is `'static`; the GPU copies are made
/// once at startup and never touched again.
#[derive(Copy, Clone, Debug)]
pub struct Scene {
    pub label: &'static str,
    pub vertices: &'static [Vertex],
    pub indices: Option<&'static [u32]>,
    pub fragment_entry: &'static str,
}

impl Scene {
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn index_count(&self) -> u32 {
        self.indices.map_or(0, |indices| indices.len() as u32)
    }
}

/// Plain triangle, no index buffer, default (white) fragment output.
pub const TRIANGLE: Scene = Scene {
    label: "triangle",
    vertices: TRIANGLE_VERTICES,
    indices: None,
    fragment_entry: "fs_white",
};

/// Same triangle drawn through an index buffer, flat-color shaded.
pub const TRIANGLE_INDEXED: Scene = Scene {
    label: "triangle_indexed",
    vertices: TRIANGLE_VERTICES,
    indices: Some(TRIANGLE_INDICES),
    fragment_entry: "fs_flat",
};

/// Unit square out of two indexed triangles, flat-color shaded.
pub const QUAD: Scene = Scene {
    label: "quad",
    vertices: QUAD_VERTICES,
    indices: Some(QUAD_INDICES),
    fragment_entry: "fs_flat",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SHADER_SOURCE;

    #[test]
    fn triangle_draws_three_vertices_unindexed() {
        assert_eq!(TRIANGLE.vertex_count(), 3);
        assert!(TRIANGLE.indices.is_none());
    }

    #[test]
    fn indexed_scenes_draw_expected_index_counts() {
        assert_eq!(TRIANGLE_INDEXED.index_count(), 3);
        assert_eq!(QUAD.index_count(), 6);
    }

    #[test]
    fn every_fragment_entry_exists_in_shader() {
        for scene in [TRIANGLE, TRIANGLE_INDEXED, QUAD] {
            assert!(
                SHADER_SOURCE.contains(&format!("fn {}(", scene.fragment_entry)),
                "shader.wgsl is missing entry point {}",
                scene.fragment_entry
            );
        }
    }

    #[test]
    fn flat_fragment_emits_the_fixed_color() {
        assert!(SHADER_SOURCE.contains("vec4<f32>(0.5, 0.1, 0.8, 1.0)"));
    }
}

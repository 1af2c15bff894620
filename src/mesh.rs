#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

impl Vertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x2],
    };
}

pub const TRIANGLE_VERTICES: &[Vertex] = &[
    Vertex {
        position: [-0.5, -0.5],
    },
    Vertex {
        position: [0.5, -0.5],
    },
    Vertex {
        position: [0.0, 0.5],
    },
];

pub const TRIANGLE_INDICES: &[u32] = &[0, 1, 2];

pub const QUAD_VERTICES: &[Vertex] = &[
    Vertex {
        position: [-0.5, -0.5], // bottom left
    },
    Vertex {
        position: [0.5, -0.5], // bottom right
    },
    Vertex {
        position: [0.5, 0.5], // top right
    },
    Vertex {
        position: [-0.5, 0.5], // top left
    },
];

// Two triangles sharing the bottom-left/top-left diagonal.
pub const QUAD_INDICES: &[u32] = &[0, 1, 3, 3, 1, 2];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_is_isoceles_with_apex_up() {
        assert_eq!(TRIANGLE_VERTICES.len(), 3);

        let [left, right, apex] = [
            TRIANGLE_VERTICES[0].position,
            TRIANGLE_VERTICES[1].position,
            TRIANGLE_VERTICES[2].position,
        ];
        assert_eq!(apex, [0.0, 0.5]);
        // Base corners mirror each other across the y axis.
        assert_eq!(left[0], -right[0]);
        assert_eq!(left[1], right[1]);
    }

    #[test]
    fn quad_is_unit_square_centered_at_origin() {
        assert_eq!(QUAD_VERTICES.len(), 4);

        let xs: Vec<f32> = QUAD_VERTICES.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = QUAD_VERTICES.iter().map(|v| v.position[1]).collect();
        for coords in [&xs, &ys] {
            let min = coords.iter().copied().fold(f32::INFINITY, f32::min);
            let max = coords.iter().copied().fold(f32::NEG_INFINITY, f32::max);
            assert_eq!(min, -0.5);
            assert_eq!(max, 0.5);
        }
    }

    #[test]
    fn quad_indices_cover_every_corner() {
        assert_eq!(QUAD_INDICES.len(), 6);
        assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < QUAD_VERTICES.len()));
        for corner in 0..QUAD_VERTICES.len() as u32 {
            assert!(QUAD_INDICES.contains(&corner));
        }
    }

    #[test]
    fn quad_triangles_wind_counter_clockwise() {
        for triangle in QUAD_INDICES.chunks(3) {
            let [a, b, c] = [
                QUAD_VERTICES[triangle[0] as usize].position,
                QUAD_VERTICES[triangle[1] as usize].position,
                QUAD_VERTICES[triangle[2] as usize].position,
            ];
            let cross = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
            assert!(cross > 0.0);
        }
    }

    #[test]
    fn vertex_layout_is_one_packed_vec2() {
        assert_eq!(Vertex::LAYOUT.array_stride, 8);
        assert_eq!(Vertex::LAYOUT.attributes.len(), 1);

        let attribute = &Vertex::LAYOUT.attributes[0];
        assert_eq!(attribute.offset, 0);
        assert_eq!(attribute.shader_location, 0);
        assert_eq!(attribute.format, wgpu::VertexFormat::Float32x2);

        // bytemuck must see the same stride the pipeline is told about.
        let bytes: &[u8] = bytemuck::cast_slice(QUAD_VERTICES);
        assert_eq!(bytes.len(), QUAD_VERTICES.len() * 8);
    }
}

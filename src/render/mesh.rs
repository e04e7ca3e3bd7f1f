use bytemuck::{Pod, Zeroable};
use std::f32::consts::TAU;

/// Position-only vertex; the shader applies a flat color per draw, so no
/// normals or UVs exist.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        }],
    };
}

pub struct Mesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl Mesh {
    pub fn from_data(device: &wgpu::Device, vertices: &[Vertex], indices: &[u32]) -> Self {
        use wgpu::util::DeviceExt;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Vertex Buffer"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Index Buffer"),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }

    /// Unit cube over [0,1]^3, two triangles per face. Local geometry is
    /// corner-anchored; the rig's part offsets assume it.
    pub fn cube(device: &wgpu::Device) -> Self {
        let vertices: Vec<Vertex> = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 1.0],
            [1.0, 1.0, 1.0],
            [0.0, 1.0, 1.0],
        ]
        .iter()
        .map(|&position| Vertex { position })
        .collect();

        let indices: Vec<u32> = vec![
            0, 2, 1, 0, 3, 2, // front
            1, 2, 6, 1, 6, 5, // right
            5, 6, 7, 5, 7, 4, // back
            4, 7, 3, 4, 3, 0, // left
            3, 7, 6, 3, 6, 2, // top
            0, 1, 5, 0, 5, 4, // bottom
        ];

        Self::from_data(device, &vertices, &indices)
    }

    /// Unit pentagonal prism: a regular pentagon inscribed in [0,1]x[0,1],
    /// apex up, extruded from z=0 to z=1.
    pub fn pentagon(device: &wgpu::Device) -> Self {
        let mut vertices = Vec::with_capacity(10);
        for z in [0.0, 1.0] {
            for k in 0..5 {
                let angle = 0.25 * TAU + k as f32 * TAU / 5.0;
                vertices.push(Vertex {
                    position: [0.5 + 0.5 * angle.cos(), 0.5 + 0.5 * angle.sin(), z],
                });
            }
        }

        let mut indices = Vec::new();
        // front and back caps, fanned from vertex 0 of each ring
        for k in 1..4u32 {
            indices.extend_from_slice(&[0, k, k + 1]);
            indices.extend_from_slice(&[5, 5 + k + 1, 5 + k]);
        }
        // side walls
        for k in 0..5u32 {
            let a = k;
            let b = (k + 1) % 5;
            indices.extend_from_slice(&[a, b, b + 5]);
            indices.extend_from_slice(&[a, b + 5, a + 5]);
        }

        Self::from_data(device, &vertices, &indices)
    }
}

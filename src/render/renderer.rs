use super::context::GpuContext;
use super::mesh::Mesh;
use super::pipeline::{RenderPipelines, Uniforms};
use crate::figure::Primitive;
use crate::scene::DrawCommand;
use glam::Mat4;

/// Upper bound on dynamic uniform slots; the rig has 12 parts.
const MAX_PARTS: usize = 16;

/// Draws a composed figure: one dynamic-offset uniform slot and one indexed
/// draw per part, with the cube or pentagon mesh selected per command.
pub struct FigureRenderer {
    pipelines: RenderPipelines,
    cube_mesh: Mesh,
    pentagon_mesh: Mesh,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    uniform_alignment: u32,
}

impl FigureRenderer {
    pub fn new(context: &GpuContext) -> Self {
        let pipelines = RenderPipelines::new(context);
        let cube_mesh = Mesh::cube(&context.device);
        let pentagon_mesh = Mesh::pentagon(&context.device);

        let uniform_alignment = context.device.limits().min_uniform_buffer_offset_alignment;
        let aligned_size = Self::align_to(std::mem::size_of::<Uniforms>() as u32, uniform_alignment);
        let buffer_size = (aligned_size as usize * MAX_PARTS) as u64;

        let uniform_buffer = context.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Dynamic Uniform Buffer"),
            size: buffer_size,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = pipelines.create_dynamic_bind_group(&context.device, &uniform_buffer);

        Self {
            pipelines,
            cube_mesh,
            pentagon_mesh,
            uniform_buffer,
            bind_group,
            uniform_alignment,
        }
    }

    fn align_to(size: u32, alignment: u32) -> u32 {
        (size + alignment - 1) & !(alignment - 1)
    }

    fn aligned_uniform_size(&self) -> u32 {
        Self::align_to(
            std::mem::size_of::<Uniforms>() as u32,
            self.uniform_alignment,
        )
    }

    /// Clear color and depth, then draw every command under the viewer's
    /// global rotation.
    pub fn render(
        &self,
        context: &GpuContext,
        view: &wgpu::TextureView,
        commands: &[DrawCommand],
        global_rotate: Mat4,
    ) {
        let aligned_size = self.aligned_uniform_size() as usize;
        let count = commands.len().min(MAX_PARTS);

        let mut uniform_data = vec![0u8; aligned_size * MAX_PARTS];
        for (i, command) in commands.iter().take(count).enumerate() {
            let uniforms = Uniforms {
                global_rotate: global_rotate.to_cols_array_2d(),
                model: command.model.to_cols_array_2d(),
                color: command.color,
            };
            let offset = i * aligned_size;
            let bytes = bytemuck::bytes_of(&uniforms);
            uniform_data[offset..offset + bytes.len()].copy_from_slice(bytes);
        }

        context
            .queue
            .write_buffer(&self.uniform_buffer, 0, &uniform_data);

        let mut encoder = context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &context.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.pipelines.pipeline);

            for (i, command) in commands.iter().take(count).enumerate() {
                let offset = (i * aligned_size) as u32;
                render_pass.set_bind_group(0, &self.bind_group, &[offset]);

                let mesh = match command.primitive {
                    Primitive::Cube => &self.cube_mesh,
                    Primitive::Pentagon => &self.pentagon_mesh,
                };
                render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                render_pass
                    .set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }

        context.queue.submit(std::iter::once(encoder.finish()));
    }
}

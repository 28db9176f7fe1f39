use super::helpers::{self, PipelineSpec};
use crate::constants::MAX_LINE_VERTICES;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LineVertex {
    pub(crate) pos: [f32; 3],
    pub(crate) color: [f32; 4],
}

pub(crate) struct LinesResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) vertex_buffer: wgpu::Buffer,
}

pub(crate) fn create_lines_resources(
    device: &wgpu::Device,
    camera_bgl: &wgpu::BindGroupLayout,
    color_format: wgpu::TextureFormat,
) -> LinesResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("lines_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::shaders::LINES_WGSL.into()),
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("lines_pl"),
        bind_group_layouts: &[camera_bgl],
        push_constant_ranges: &[],
    });
    let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("lines_vb"),
        size: (std::mem::size_of::<LineVertex>() * MAX_LINE_VERTICES) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<LineVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 12,
                shader_location: 1,
            },
        ],
    }];
    let pipeline = helpers::make_scene_pipeline(
        device,
        PipelineSpec {
            label: "lines_pipeline",
            shader: &shader,
            layout: &pl,
            buffers: &buffers,
            topology: wgpu::PrimitiveTopology::LineList,
            color_format,
            depth_write: false,
        },
    );
    LinesResources {
        pipeline,
        vertex_buffer,
    }
}

use super::helpers::{self, PipelineSpec};
use crate::constants::MAX_HEART_DRAWS;
use together_core::HeartMesh;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MeshUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    pub(crate) light_dir: [f32; 4],
    pub(crate) camera_pos: [f32; 4],
}

/// Unit heart geometry plus one uniform slot per heart drawn in a frame.
pub(crate) struct MeshResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) slots: Vec<(wgpu::Buffer, wgpu::BindGroup)>,
}

pub(crate) fn create_mesh_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> MeshResources {
    let mesh = HeartMesh::unit();
    let positions: Vec<[f32; 3]> = mesh.positions.iter().map(|p| p.to_array()).collect();
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("heart_vb"),
        contents: bytemuck::cast_slice(&positions),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("heart_ib"),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    log::info!(
        "[gpu] heart mesh: {} vertices, {} triangles",
        positions.len(),
        mesh.triangle_count()
    );

    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("heart_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::shaders::HEART_WGSL.into()),
    });
    let bgl = helpers::uniform_layout(device, "heart_bgl");
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("heart_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 3]>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        }],
    }];
    let pipeline = helpers::make_scene_pipeline(
        device,
        PipelineSpec {
            label: "heart_pipeline",
            shader: &shader,
            layout: &pl,
            buffers: &buffers,
            topology: wgpu::PrimitiveTopology::TriangleList,
            color_format,
            depth_write: true,
        },
    );

    let slots = (0..MAX_HEART_DRAWS)
        .map(|i| {
            let buffer = helpers::uniform_buffer(
                device,
                &format!("heart_uniforms_{i}"),
                std::mem::size_of::<MeshUniforms>(),
            );
            let bind_group =
                helpers::uniform_bind_group(device, &format!("heart_bg_{i}"), &bgl, &buffer);
            (buffer, bind_group)
        })
        .collect();

    MeshResources {
        pipeline,
        vertex_buffer,
        index_buffer,
        index_count: mesh.indices.len() as u32,
        slots,
    }
}

use crate::camera::SketchCamera;
use crate::constants::{
    AMBIENT_LEVEL, CAMERA_FAR_FACTOR, CAMERA_FOVY, CAMERA_NEAR_FACTOR, LIGHT_DIRECTION,
    MAX_HEART_DRAWS, MAX_LINE_VERTICES, MAX_POINTS, SPECULAR_SHININESS,
};
use glam::{Mat4, Vec3};
use together_core::{Rgba, Scene3d, Viewport};
use web_sys as web;

mod helpers;
mod lines;
mod mesh;
mod points;
mod targets;

use lines::{create_lines_resources, LineVertex, LinesResources};
use mesh::{create_mesh_resources, MeshResources, MeshUniforms};
use points::{create_points_resources, InstanceData, PointsResources};
use targets::DepthTarget;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct CameraUniforms {
    view_proj: [[f32; 4]; 4],
}

/// WebGPU side of the 3D mode. Collects draw calls from the sketch during a
/// tick and submits them all in [`GpuState::present`].
pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,
    mesh: MeshResources,
    points: PointsResources,
    lines: LinesResources,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    hearts: Vec<(Mat4, Rgba)>,
    instances: Vec<InstanceData>,
    line_vertices: Vec<LineVertex>,
    overflow_logged: bool,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        // Linear formats keep sketch colors identical to the Canvas2D overlay
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("Surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} format {:?}", width, height, format);

        let depth = DepthTarget::new(&device, width, height);
        let camera_bgl = helpers::uniform_layout(&device, "camera_bgl");
        let camera_buffer = helpers::uniform_buffer(
            &device,
            "camera_uniforms",
            std::mem::size_of::<CameraUniforms>(),
        );
        let camera_bind_group =
            helpers::uniform_bind_group(&device, "camera_bg", &camera_bgl, &camera_buffer);
        let mesh = create_mesh_resources(&device, format);
        let points = create_points_resources(&device, &camera_bgl, format);
        let lines = create_lines_resources(&device, &camera_bgl, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            mesh,
            points,
            lines,
            camera_buffer,
            camera_bind_group,
            width,
            height,
            clear_color: wgpu::Color::BLACK,
            hearts: Vec::with_capacity(MAX_HEART_DRAWS),
            instances: Vec::with_capacity(MAX_POINTS),
            line_vertices: Vec::with_capacity(MAX_LINE_VERTICES),
            overflow_logged: false,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    fn truncate_batches(&mut self) {
        let over = self.hearts.len() > MAX_HEART_DRAWS
            || self.instances.len() > MAX_POINTS
            || self.line_vertices.len() > MAX_LINE_VERTICES;
        if over && !self.overflow_logged {
            log::warn!(
                "[gpu] frame exceeds buffer capacity (hearts {}, points {}, line vertices {}); extra draws dropped",
                self.hearts.len(),
                self.instances.len(),
                self.line_vertices.len()
            );
            self.overflow_logged = true;
        }
        self.hearts.truncate(MAX_HEART_DRAWS);
        self.instances.truncate(MAX_POINTS);
        self.line_vertices.truncate(MAX_LINE_VERTICES);
    }

    /// Submit everything drawn since the last call. `viewport` is in CSS pixels
    /// and sets the camera; the surface itself may be larger on HiDPI screens.
    pub fn present(&mut self, viewport: Viewport) -> Result<(), wgpu::SurfaceError> {
        self.truncate_batches();
        let camera = SketchCamera::for_viewport(
            viewport.width,
            viewport.height,
            CAMERA_FOVY,
            CAMERA_NEAR_FACTOR,
            CAMERA_FAR_FACTOR,
        );
        let view_proj = camera.view_proj().to_cols_array_2d();
        self.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::bytes_of(&CameraUniforms { view_proj }),
        );
        let light = Vec3::from_array(LIGHT_DIRECTION).normalize();
        for (slot, (model, color)) in self.mesh.slots.iter().zip(self.hearts.iter()) {
            let u = MeshUniforms {
                view_proj,
                model: model.to_cols_array_2d(),
                color: color.to_array(),
                light_dir: [light.x, light.y, light.z, AMBIENT_LEVEL],
                camera_pos: [camera.eye.x, camera.eye.y, camera.eye.z, SPECULAR_SHININESS],
            };
            self.queue.write_buffer(&slot.0, 0, bytemuck::bytes_of(&u));
        }
        if !self.instances.is_empty() {
            self.queue.write_buffer(
                &self.points.instance_vb,
                0,
                bytemuck::cast_slice(&self.instances),
            );
        }
        if !self.line_vertices.is_empty() {
            self.queue.write_buffer(
                &self.lines.vertex_buffer,
                0,
                bytemuck::cast_slice(&self.line_vertices),
            );
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Hearts first so the stream reads as passing in front of them
            if !self.hearts.is_empty() {
                rpass.set_pipeline(&self.mesh.pipeline);
                rpass.set_vertex_buffer(0, self.mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(self.mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                for (slot, _) in self.mesh.slots.iter().zip(self.hearts.iter()) {
                    rpass.set_bind_group(0, &slot.1, &[]);
                    rpass.draw_indexed(0..self.mesh.index_count, 0, 0..1);
                }
            }
            if !self.line_vertices.is_empty() {
                rpass.set_pipeline(&self.lines.pipeline);
                rpass.set_bind_group(0, &self.camera_bind_group, &[]);
                rpass.set_vertex_buffer(0, self.lines.vertex_buffer.slice(..));
                rpass.draw(0..self.line_vertices.len() as u32, 0..1);
            }
            if !self.instances.is_empty() {
                rpass.set_pipeline(&self.points.pipeline);
                rpass.set_bind_group(0, &self.camera_bind_group, &[]);
                rpass.set_vertex_buffer(0, self.points.quad_vb.slice(..));
                rpass.set_vertex_buffer(1, self.points.instance_vb.slice(..));
                rpass.draw(0..6, 0..self.instances.len() as u32);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();

        self.hearts.clear();
        self.instances.clear();
        self.line_vertices.clear();
        Ok(())
    }
}

impl Scene3d for GpuState<'_> {
    fn clear(&mut self, color: Rgba) {
        self.clear_color = wgpu::Color {
            r: color.r as f64,
            g: color.g as f64,
            b: color.b as f64,
            a: color.a as f64,
        };
        self.hearts.clear();
        self.instances.clear();
        self.line_vertices.clear();
    }

    fn draw_heart(&mut self, model: Mat4, color: Rgba) {
        self.hearts.push((model, color));
    }

    fn draw_line(&mut self, from: Vec3, to: Vec3, color: Rgba) {
        let color = color.to_array();
        self.line_vertices.push(LineVertex {
            pos: from.to_array(),
            color,
        });
        self.line_vertices.push(LineVertex {
            pos: to.to_array(),
            color,
        });
    }

    fn draw_point(&mut self, center: Vec3, diameter: f32, color: Rgba) {
        self.instances.push(InstanceData {
            pos: center.to_array(),
            size: diameter,
            color: color.to_array(),
        });
    }
}

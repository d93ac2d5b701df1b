use crate::constants::{
    hex_to_linear_rgba, CLEAR_COLOR_HEX, HEART_COLOR_HEX, MSAA_SAMPLES, SPIKE_COLOR_HEX,
};
use glam::Mat4;
use web_sys as web;

mod helpers;
mod scene;
mod targets;
use scene::{create_scene_resources, DrawBatch, SceneResources, SceneUniforms};
use targets::RenderTargets;

/// Geometry and transforms for one frame.
pub struct FrameDraw<'f> {
    pub view_proj: Mat4,
    pub model: Mat4,
    /// New heart positions, or `None` when they have not changed.
    pub heart: Option<&'f [f32]>,
    pub spikes: &'f [f32],
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    scene: SceneResources,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    heart_color: [f32; 4],
    spike_color: [f32; 4],
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        heart_vertices: usize,
        spike_vertices: usize,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

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
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height, format, MSAA_SAMPLES);
        let scene =
            create_scene_resources(&device, format, MSAA_SAMPLES, heart_vertices, spike_vertices);
        log::info!(
            "[gpu] surface {}x{} {:?}, heart={} spike vertices={}",
            width,
            height,
            format,
            heart_vertices,
            spike_vertices
        );

        let clear = hex_to_linear_rgba(CLEAR_COLOR_HEX);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            scene,
            width,
            height,
            clear_color: wgpu::Color {
                r: clear[0] as f64,
                g: clear[1] as f64,
                b: clear[2] as f64,
                a: 1.0,
            },
            heart_color: hex_to_linear_rgba(HEART_COLOR_HEX),
            spike_color: hex_to_linear_rgba(SPIKE_COLOR_HEX),
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Reapply the surface configuration and rebuild size-dependent targets.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.targets.recreate(&self.device, self.width, self.height);
    }

    pub fn render(&mut self, frame: &FrameDraw<'_>) -> Result<(), wgpu::SurfaceError> {
        if let Some(heart) = frame.heart {
            self.queue.write_buffer(
                &self.scene.heart.vertex_buffer,
                0,
                bytemuck::cast_slice(heart),
            );
        }
        self.queue.write_buffer(
            &self.scene.spikes.vertex_buffer,
            0,
            bytemuck::cast_slice(frame.spikes),
        );
        let uniforms = |color: [f32; 4]| SceneUniforms {
            view_proj: frame.view_proj.to_cols_array_2d(),
            model: frame.model.to_cols_array_2d(),
            color,
        };
        self.queue.write_buffer(
            &self.scene.heart.uniform_buffer,
            0,
            bytemuck::bytes_of(&uniforms(self.heart_color)),
        );
        self.queue.write_buffer(
            &self.scene.spikes.uniform_buffer,
            0,
            bytemuck::bytes_of(&uniforms(self.spike_color)),
        );

        let output = self.surface.get_current_texture()?;
        let view = output
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
                    view: &self.targets.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            draw_batch(&mut rpass, &self.scene.heart_pipeline, &self.scene.heart);
            draw_batch(&mut rpass, &self.scene.spike_pipeline, &self.scene.spikes);
        }

        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}

fn draw_batch(rpass: &mut wgpu::RenderPass<'_>, pipeline: &wgpu::RenderPipeline, batch: &DrawBatch) {
    if batch.vertex_count == 0 {
        return;
    }
    rpass.set_pipeline(pipeline);
    rpass.set_bind_group(0, &batch.bind_group, &[]);
    rpass.set_vertex_buffer(0, batch.vertex_buffer.slice(..));
    rpass.draw(0..batch.vertex_count, 0..1);
}

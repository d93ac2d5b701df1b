use super::helpers;
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
}

/// One drawable: a position-only vertex buffer with its own colour uniform.
pub(crate) struct DrawBatch {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) vertex_count: u32,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) struct SceneResources {
    pub(crate) heart_pipeline: wgpu::RenderPipeline,
    pub(crate) spike_pipeline: wgpu::RenderPipeline,
    pub(crate) heart: DrawBatch,
    pub(crate) spikes: DrawBatch,
}

fn create_batch(
    device: &wgpu::Device,
    label: &str,
    bgl: &wgpu::BindGroupLayout,
    vertex_count: usize,
) -> DrawBatch {
    // Sized once; contents are rewritten in place every frame
    let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(&format!("{label}_vb")),
        size: (vertex_count.max(1) * std::mem::size_of::<f32>() * 3) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(&format!("{label}_uniforms")),
        size: std::mem::size_of::<SceneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(&format!("{label}_bg")),
        layout: bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    DrawBatch {
        vertex_buffer,
        vertex_count: vertex_count as u32,
        uniform_buffer,
        bind_group,
    }
}

pub(crate) fn create_scene_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
    heart_vertices: usize,
    spike_vertices: usize,
) -> SceneResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let heart_pipeline = helpers::make_scene_pipeline(
        device,
        "heart_pipeline",
        &pl,
        &shader,
        wgpu::PrimitiveTopology::TriangleList,
        color_format,
        sample_count,
    );
    let spike_pipeline = helpers::make_scene_pipeline(
        device,
        "spike_pipeline",
        &pl,
        &shader,
        wgpu::PrimitiveTopology::LineList,
        color_format,
        sample_count,
    );

    SceneResources {
        heart_pipeline,
        spike_pipeline,
        heart: create_batch(device, "heart", &bgl, heart_vertices),
        spikes: create_batch(device, "spikes", &bgl, spike_vertices),
    }
}

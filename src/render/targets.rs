use super::helpers;
use wgpu;

/// Offscreen attachments for the scene pass.
///
/// - `msaa_*` is the multisampled colour target, resolved into the swapchain.
/// - `depth_*` matches its sample count so spikes behind the heart are hidden.
pub(crate) struct RenderTargets {
    pub(crate) msaa_tex: wgpu::Texture,
    pub(crate) msaa_view: wgpu::TextureView,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        color_format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let (msaa_tex, msaa_view) = helpers::create_target_texture(
            device,
            "msaa_color",
            width,
            height,
            color_format,
            sample_count,
        );
        let (depth_tex, depth_view) = helpers::create_target_texture(
            device,
            "depth",
            width,
            height,
            helpers::DEPTH_FORMAT,
            sample_count,
        );
        Self {
            msaa_tex,
            msaa_view,
            depth_tex,
            depth_view,
            color_format,
            sample_count,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        // Free the old attachments now rather than when the browser collects them
        self.msaa_tex.destroy();
        self.depth_tex.destroy();
        *self = Self::new(device, width, height, self.color_format, self.sample_count);
    }
}

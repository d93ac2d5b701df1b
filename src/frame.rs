use crate::core::{Camera, HeartScene, OrbitController, SceneState, Timelines};
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub canvas: web::HtmlCanvasElement,
    pub scene: HeartScene,
    pub timelines: Timelines,
    pub camera: Camera,
    pub controller: Rc<RefCell<OrbitController>>,
    pub gpu: render::GpuState<'a>,

    pub started: Instant,
    pub state: SceneState,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f64();
        self.state = self.timelines.sample(elapsed);

        self.scene.update(&self.state);
        self.controller.borrow_mut().update(&mut self.camera);

        // Backing size is kept in sync by the resize listener
        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);
        let (w, h) = self.gpu.size();
        self.camera.set_viewport(w, h);

        let heart = self
            .scene
            .mesh
            .take_dirty()
            .then(|| self.scene.mesh.as_floats());
        let draw = render::FrameDraw {
            view_proj: self.camera.view_proj(),
            model: self.state.model_matrix(),
            heart,
            spikes: self.scene.spikes.as_floats(),
        };
        match self.gpu.render(&draw) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[frame] surface lost; reconfiguring");
                self.gpu.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    heart_vertices: usize,
    spike_vertices: usize,
) -> anyhow::Result<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas, heart_vertices, spike_vertices).await
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

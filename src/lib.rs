#![cfg(target_arch = "wasm32")]
use crate::core::{Camera, HeartScene, Lifecycle, OrbitController, SceneState, Timelines};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod loader;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Fetch the heart and seed its spikes. Nothing is drawn until this succeeds.
async fn load_scene() -> anyhow::Result<HeartScene> {
    let mesh = loader::load_heart(constants::HEART_MODEL_URL).await?;
    let scene = HeartScene::with_default_spikes(mesh, StdRng::from_entropy())?;
    log::info!(
        "[scene] {} triangles, {} spikes",
        scene.mesh.triangle_count(),
        scene.spikes.len()
    );
    Ok(scene)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heart-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // The text overlay does not depend on the 3D scene and runs from page load
    overlay::start_falling_text(&document);

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let mut lifecycle = Lifecycle::default();
    let Some(scene) = lifecycle.absorb("load", load_scene().await) else {
        report_failure(&document, &lifecycle);
        return Ok(());
    };
    let gpu = frame::init_gpu(
        &canvas,
        scene.mesh.vertex_count(),
        scene.spikes.points().len(),
    )
    .await;
    let Some(gpu) = lifecycle.absorb("webgpu", gpu) else {
        report_failure(&document, &lifecycle);
        return Ok(());
    };

    let controller = Rc::new(RefCell::new(OrbitController::default()));
    events::wire_orbit_handlers(events::OrbitWiring {
        canvas: canvas.clone(),
        controller: controller.clone(),
    });

    lifecycle.mark_ready()?;
    if !lifecycle.is_ready() {
        return Ok(());
    }
    log::info!("[lifecycle] {}", lifecycle.label());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        scene,
        timelines: Timelines::default(),
        camera: Camera::default(),
        controller,
        gpu,
        started: Instant::now(),
        state: SceneState::default(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

fn report_failure(document: &web::Document, lifecycle: &Lifecycle) {
    if let Some(reason) = lifecycle.failure_reason() {
        log::error!("[scene] {}", reason);
        overlay::show_scene_error(document, reason);
    }
}

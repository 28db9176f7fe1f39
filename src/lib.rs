#![cfg(target_arch = "wasm32")]
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use together_core::{RenderMode, Sketch, SketchConfig, TrackCatalog};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod camera;
mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod render;
mod shaders;
mod ui;

use constants::{CURRENT_SONG_ID, GPU_CANVAS_ID, HUD_CANVAS_ID};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("together-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let gpu_canvas: web::HtmlCanvasElement = dom::element_by_id(&document, GPU_CANVAS_ID)?;
    let hud_canvas: web::HtmlCanvasElement = dom::element_by_id(&document, HUD_CANVAS_ID)?;
    let status_el: web::HtmlElement = dom::element_by_id(&document, CURRENT_SONG_ID)?;

    // Audio graph: every track feeds one shared analyser
    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let analyser = audio::create_analyser(&audio_ctx)?;
    let analyzer = audio::WebAnalyzer::new(analyser.clone(), audio_ctx.sample_rate());
    let mut backend = audio::WebBackend::new(audio_ctx, analyser);

    // Size the GPU canvas before WebGPU configures its surface
    dom::sync_canvas_backing_size(&gpu_canvas);
    let hud = canvas::HudCanvas::new(hud_canvas)?;
    let gpu = frame::init_gpu(&gpu_canvas).await;
    let mode = if gpu.is_some() {
        RenderMode::ThreeD
    } else {
        dom::hide(&gpu_canvas);
        RenderMode::TwoD
    };

    let mut sketch = Sketch::with_rng(
        SketchConfig::default(),
        hud.viewport(),
        mode,
        TrackCatalog::default(),
        StdRng::from_entropy(),
    );
    for err in sketch.session.load_tracks(&mut backend) {
        dom::alert(&err.to_string());
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sketch,
        backend,
        analyzer,
        hud,
        status: ui::TrackStatus::new(status_el),
        gpu_canvas,
        gpu,
        last_instant: Instant::now(),
        fps_frames: 0,
        fps_elapsed: 0.0,
    }));

    events::wire_song_select(&document, &frame_ctx);
    events::apply_initial_sliders(&document, &frame_ctx);
    events::wire_transport_buttons(&document, &frame_ctx);
    events::wire_sliders(&document, &frame_ctx);
    events::wire_window_resize(&frame_ctx);

    frame::start_loop(frame_ctx);
    Ok(())
}

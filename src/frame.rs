use crate::audio::{WebAnalyzer, WebBackend};
use crate::canvas::HudCanvas;
use crate::constants::FPS_LOG_INTERVAL_SEC;
use crate::dom;
use crate::render;
use crate::ui::TrackStatus;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use together_core::{Scene3d, Sketch, Surfaces, VisualizerError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the animation loop and the DOM handlers share.
pub struct FrameContext<'a> {
    pub sketch: Sketch,
    pub backend: WebBackend,
    pub analyzer: WebAnalyzer,
    pub hud: HudCanvas,
    pub status: TrackStatus,

    pub gpu_canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
    pub fps_frames: u32,
    pub fps_elapsed: f32,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        self.apply_failed_loads();

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.gpu_canvas.width(), self.gpu_canvas.height());
        }

        let scene = self.gpu.as_mut().map(|g| g as &mut dyn Scene3d);
        self.sketch.tick(
            &mut self.analyzer,
            Surfaces {
                canvas: &mut self.hud,
                scene,
                status: &mut self.status,
            },
        );

        if let Some(g) = &mut self.gpu {
            if let Err(e) = g.present(self.hud.viewport()) {
                log::error!("[gpu] render error: {:?}", e);
            }
        }

        self.fps_frames += 1;
        self.fps_elapsed += dt_sec;
        if self.fps_elapsed >= FPS_LOG_INTERVAL_SEC {
            log::debug!(
                "[frame] {:.1} fps, particles {}/{}",
                self.fps_frames as f32 / self.fps_elapsed,
                self.sketch.left.len(),
                self.sketch.right.len()
            );
            self.fps_frames = 0;
            self.fps_elapsed = 0.0;
        }
    }

    /// Media errors arrive asynchronously; retire those tracks from the session.
    fn apply_failed_loads(&mut self) {
        let failed: Vec<String> = self.backend.failed.borrow_mut().drain(..).collect();
        for name in failed {
            match self.sketch.session.catalog.index_of(&name) {
                Some(index) => self.sketch.session.mark_unavailable(index),
                None => log::warn!("[audio] load error for unknown track {}", name),
            }
        }
    }

    /// Window resize: re-sync both canvases and move the hearts to their new homes.
    pub fn resize(&mut self) {
        let viewport = self.hud.resize();
        dom::sync_canvas_backing_size(&self.gpu_canvas);
        self.sketch.resize(viewport);
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            let err = VisualizerError::RendererInit(format!("{:#}", e));
            log::warn!("[gpu] {}; falling back to 2D", err);
            None
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(tick: &TickClosure) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

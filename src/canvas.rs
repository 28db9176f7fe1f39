use crate::constants::HUD_FONT_FAMILY;
use crate::dom;
use glam::Vec2;
use std::f64::consts::TAU;
use together_core::{Canvas2d, Rgba, TextAlign, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

fn css_color(c: Rgba) -> String {
    let [r, g, b, a] = c.to_array();
    format!(
        "rgba({},{},{},{:.3})",
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
        a
    )
}

/// Canvas2D overlay for particles, waveform and text, drawn in CSS pixels.
pub struct HudCanvas {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    dpr: f64,
    viewport: Viewport,
}

impl HudCanvas {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("2d context: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("2d context: {:?}", e))?;
        let mut hud = Self {
            canvas,
            ctx,
            dpr: 1.0,
            viewport: Viewport::new(1.0, 1.0),
        };
        hud.resize();
        Ok(hud)
    }

    /// Re-sync the backing store with the element size and return the new viewport.
    pub fn resize(&mut self) -> Viewport {
        let (w, h) = dom::sync_canvas_backing_size(&self.canvas);
        self.dpr = dom::device_pixel_ratio();
        self.viewport = Viewport::new(w.max(1.0), h.max(1.0));
        self.viewport
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn reset_transform(&self) {
        _ = self.ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
    }
}

impl Canvas2d for HudCanvas {
    fn clear(&mut self) {
        self.reset_transform();
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.viewport.width as f64,
            self.viewport.height as f64,
        );
    }

    fn background(&mut self, color: Rgba) {
        self.reset_transform();
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.fill_rect(
            0.0,
            0.0,
            self.viewport.width as f64,
            self.viewport.height as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, diameter: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            (diameter * 0.5) as f64,
            0.0,
            TAU,
        );
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, weight: f32) {
        self.stroke_polyline(&[from, to], color, weight);
    }

    fn stroke_polyline(&mut self, points: &[Vec2], color: Rgba, weight: f32) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.set_stroke_style_str(&css_color(color));
        self.ctx.set_line_width(weight as f64);
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.stroke();
    }

    fn text(&mut self, text: &str, pos: Vec2, size: f32, align: TextAlign, color: Rgba) {
        self.ctx.set_font(&format!("{}px {}", size, HUD_FONT_FAMILY));
        self.ctx.set_text_align(match align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        });
        self.ctx.set_text_baseline("middle");
        self.ctx.set_fill_style_str(&css_color(color));
        _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }

    fn translate(&mut self, offset: Vec2) {
        _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }
}

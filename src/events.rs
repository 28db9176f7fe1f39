use crate::constants::{
    HEART_SIZE_SLIDER_ID, PAN_SLIDER_ID, PAUSE_BUTTON_ID, PLAY_BUTTON_ID, SONG_SELECT_ID,
    STOP_BUTTON_ID, VOLUME_SLIDER_ID,
};
use crate::dom;
use crate::frame::FrameContext;
use crate::ui;
use std::cell::RefCell;
use std::rc::Rc;
use together_core::VisualizerError;
use web_sys as web;

type Shared = Rc<RefCell<FrameContext<'static>>>;

fn report(action: &str, err: VisualizerError) {
    log::warn!("[ui] {} failed: {}", action, err);
    match err {
        VisualizerError::NoTrackSelected => dom::alert("Please select a song first"),
        other => dom::alert(&other.to_string()),
    }
}

/// Push the current slider positions into the session, as the page does on load.
pub fn apply_initial_sliders(document: &web::Document, ctx: &Shared) {
    let mut c = ctx.borrow_mut();
    if let Some(v) = ui::slider_value(document, VOLUME_SLIDER_ID) {
        c.sketch.session.set_volume(v);
    }
    if let Some(v) = ui::slider_value(document, PAN_SLIDER_ID) {
        c.sketch.session.set_pan(v);
    }
    if let Some(v) = ui::slider_value(document, HEART_SIZE_SLIDER_ID) {
        c.sketch.set_pulse_intensity(v);
    }
}

pub fn wire_transport_buttons(document: &web::Document, ctx: &Shared) {
    let play_ctx = ctx.clone();
    dom::add_click_listener(document, PLAY_BUTTON_ID, move || {
        let result = play_ctx.borrow_mut().sketch.session.play_selected();
        if let Err(e) = result {
            report("play", e);
        }
    });

    let pause_ctx = ctx.clone();
    dom::add_click_listener(document, PAUSE_BUTTON_ID, move || {
        pause_ctx.borrow_mut().sketch.session.toggle_pause();
    });

    let stop_ctx = ctx.clone();
    dom::add_click_listener(document, STOP_BUTTON_ID, move || {
        stop_ctx.borrow_mut().sketch.session.stop();
    });
}

pub fn wire_song_select(document: &web::Document, ctx: &Shared) {
    let select = match dom::element_by_id::<web::HtmlSelectElement>(document, SONG_SELECT_ID) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("[ui] {}", e);
            return;
        }
    };
    ui::populate_song_select(&select, &ctx.borrow().sketch.session.catalog);

    let select_ctx = ctx.clone();
    let select_el = select.clone();
    dom::add_listener(document, SONG_SELECT_ID, "change", move || {
        let Some(index) = ui::selected_index(&select_el) else {
            return;
        };
        let result = select_ctx.borrow_mut().sketch.session.select_track(index);
        if let Err(e) = result {
            report("select", e);
        }
    });
}

/// Range inputs fire `input` continuously while dragging.
pub fn wire_sliders(document: &web::Document, ctx: &Shared) {
    let doc = document.clone();
    let volume_ctx = ctx.clone();
    dom::add_listener(document, VOLUME_SLIDER_ID, "input", move || {
        if let Some(v) = ui::slider_value(&doc, VOLUME_SLIDER_ID) {
            volume_ctx.borrow_mut().sketch.session.set_volume(v);
        }
    });

    let doc = document.clone();
    let pan_ctx = ctx.clone();
    dom::add_listener(document, PAN_SLIDER_ID, "input", move || {
        if let Some(v) = ui::slider_value(&doc, PAN_SLIDER_ID) {
            pan_ctx.borrow_mut().sketch.session.set_pan(v);
        }
    });

    let doc = document.clone();
    let size_ctx = ctx.clone();
    dom::add_listener(document, HEART_SIZE_SLIDER_ID, "input", move || {
        if let Some(v) = ui::slider_value(&doc, HEART_SIZE_SLIDER_ID) {
            size_ctx.borrow_mut().sketch.set_pulse_intensity(v);
        }
    });
}

pub fn wire_window_resize(ctx: &Shared) {
    let resize_ctx = ctx.clone();
    dom::add_window_listener("resize", move || {
        resize_ctx.borrow_mut().resize();
    });
}

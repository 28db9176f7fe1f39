use crate::constants::PULSE_CLASS;
use together_core::{StatusDisplay, TrackCatalog};
use wasm_bindgen::JsCast;
use web_sys as web;

/// The "now playing" label under the canvas.
pub struct TrackStatus {
    el: web::HtmlElement,
    text: String,
    pulsing: bool,
}

impl TrackStatus {
    pub fn new(el: web::HtmlElement) -> Self {
        let text = el.text_content().unwrap_or_default();
        Self {
            el,
            text,
            pulsing: false,
        }
    }
}

impl StatusDisplay for TrackStatus {
    fn set_track_text(&mut self, text: &str) {
        if self.text != text {
            self.el.set_text_content(Some(text));
            self.text = text.to_string();
        }
    }

    fn set_pulsing(&mut self, pulsing: bool) {
        if self.pulsing == pulsing {
            return;
        }
        let classes = self.el.class_list();
        _ = if pulsing {
            classes.add_1(PULSE_CLASS)
        } else {
            classes.remove_1(PULSE_CLASS)
        };
        self.pulsing = pulsing;
    }
}

/// Append one option per catalog entry, valued by its index.
pub fn populate_song_select(select: &web::HtmlSelectElement, catalog: &TrackCatalog) {
    for (i, track) in catalog.iter().enumerate() {
        match web::HtmlOptionElement::new_with_text_and_value(track.name, &i.to_string()) {
            Ok(option) => {
                _ = select.add_with_html_option_element(&option);
            }
            Err(e) => log::warn!("[ui] option for {}: {:?}", track.name, e),
        }
    }
}

/// Selected track index; `None` for the placeholder entry.
pub fn selected_index(select: &web::HtmlSelectElement) -> Option<usize> {
    select.value().parse().ok()
}

/// Current numeric value of a range input.
pub fn slider_value(document: &web::Document, id: &str) -> Option<f32> {
    let input = document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlInputElement>()
        .ok()?;
    match input.value().parse::<f32>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[ui] #{} has non-numeric value {:?}", id, input.value());
            None
        }
    }
}

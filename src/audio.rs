use crate::constants::{ANALYSER_SMOOTHING, FFT_SIZE};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use together_core::{rms, AudioBackend, SpectrumAnalyzer, TrackHandle, VisualizerError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx)
        .map_err(|e| anyhow::anyhow!("{} GainNode error: {:?}", label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

/// Shared analyser sitting between every track chain and the destination.
pub fn create_analyser(audio_ctx: &web::AudioContext) -> anyhow::Result<web::AnalyserNode> {
    let analyser = web::AnalyserNode::new(audio_ctx)
        .map_err(|e| anyhow::anyhow!("AnalyserNode error: {:?}", e))?;
    analyser.set_fft_size(FFT_SIZE);
    analyser.set_smoothing_time_constant(ANALYSER_SMOOTHING);
    _ = analyser.connect_with_audio_node(&audio_ctx.destination());
    Ok(analyser)
}

/// Browsers start the context suspended until a user gesture.
pub fn resume_if_suspended(audio_ctx: &web::AudioContext) {
    if audio_ctx.state() == web::AudioContextState::Suspended {
        _ = audio_ctx.resume();
    }
}

/// One `<audio>` element routed element -> gain -> stereo panner -> analyser.
pub struct WebTrack {
    name: String,
    element: web::HtmlAudioElement,
    gain: web::GainNode,
    panner: web::StereoPannerNode,
    audio_ctx: web::AudioContext,
}

impl TrackHandle for WebTrack {
    fn play(&mut self) {
        resume_if_suspended(&self.audio_ctx);
        match self.element.play() {
            Ok(promise) => {
                let promise: js_sys::Promise = promise;
                let name = self.name.clone();
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("[audio] play() rejected for {}: {:?}", name, e);
                    }
                });
            }
            Err(e) => log::error!("[audio] play() failed for {}: {:?}", self.name, e),
        }
    }

    fn pause(&mut self) {
        _ = self.element.pause();
    }

    fn stop(&mut self) {
        _ = self.element.pause();
        self.element.set_current_time(0.0);
    }

    fn is_playing(&self) -> bool {
        !self.element.paused() && !self.element.ended()
    }

    fn set_volume(&mut self, volume: f32) {
        self.gain.gain().set_value(volume.clamp(0.0, 1.0));
    }

    fn pan(&mut self, pan: f32) {
        self.panner.pan().set_value(pan.clamp(-1.0, 1.0));
    }
}

/// Creates [`WebTrack`]s; asynchronous decode errors are queued in `failed`.
pub struct WebBackend {
    pub audio_ctx: web::AudioContext,
    pub analyser: web::AnalyserNode,
    pub failed: Rc<RefCell<Vec<String>>>,
}

impl WebBackend {
    pub fn new(audio_ctx: web::AudioContext, analyser: web::AnalyserNode) -> Self {
        Self {
            audio_ctx,
            analyser,
            failed: Rc::new(RefCell::new(Vec::new())),
        }
    }

    fn build(&self, name: &str, path: &str) -> anyhow::Result<WebTrack> {
        let src: String = js_sys::encode_uri_component(path).into();
        let element = web::HtmlAudioElement::new_with_src(&src)
            .map_err(|e| anyhow::anyhow!("audio element: {:?}", e))?;
        element.set_preload("auto");

        let failed = self.failed.clone();
        let track_name = name.to_string();
        let on_error = Closure::wrap(Box::new(move || {
            log::error!("[audio] failed to load {}", track_name);
            dom::alert(&format!("Could not load track: {}", track_name));
            failed.borrow_mut().push(track_name.clone());
        }) as Box<dyn FnMut()>);
        _ = element.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
        on_error.forget();

        let source = self
            .audio_ctx
            .create_media_element_source(&element)
            .map_err(|e| anyhow::anyhow!("media element source: {:?}", e))?;
        let gain = create_gain(&self.audio_ctx, 0.0, "Track")?;
        let panner = web::StereoPannerNode::new(&self.audio_ctx)
            .map_err(|e| anyhow::anyhow!("StereoPannerNode error: {:?}", e))?;
        _ = source.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(&panner);
        _ = panner.connect_with_audio_node(&self.analyser);

        Ok(WebTrack {
            name: name.to_string(),
            element,
            gain,
            panner,
            audio_ctx: self.audio_ctx.clone(),
        })
    }
}

impl AudioBackend for WebBackend {
    fn load(&mut self, name: &str, path: &str) -> Result<Box<dyn TrackHandle>, VisualizerError> {
        self.build(name, path)
            .map(|t| Box::new(t) as Box<dyn TrackHandle>)
            .map_err(|e| VisualizerError::TrackLoad {
                name: name.to_string(),
                reason: e.to_string(),
            })
    }
}

/// [`SpectrumAnalyzer`] over a WebAudio `AnalyserNode`.
pub struct WebAnalyzer {
    node: web::AnalyserNode,
    spectrum: Vec<u8>,
    waveform: Vec<f32>,
    nyquist_hz: f32,
}

impl WebAnalyzer {
    pub fn new(node: web::AnalyserNode, sample_rate: f32) -> Self {
        let bins = node.frequency_bin_count() as usize;
        let samples = node.fft_size() as usize;
        Self {
            node,
            spectrum: vec![0; bins],
            waveform: vec![0.0; samples],
            nyquist_hz: sample_rate * 0.5,
        }
    }
}

impl SpectrumAnalyzer for WebAnalyzer {
    fn analyze(&mut self) -> &[u8] {
        self.node.get_byte_frequency_data(&mut self.spectrum);
        &self.spectrum
    }

    fn spectrum(&self) -> &[u8] {
        &self.spectrum
    }

    fn nyquist_hz(&self) -> f32 {
        self.nyquist_hz
    }

    fn waveform(&mut self) -> &[f32] {
        self.node.get_float_time_domain_data(&mut self.waveform);
        &self.waveform
    }

    fn level(&mut self) -> f32 {
        rms(self.waveform())
    }
}

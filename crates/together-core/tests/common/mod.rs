// Recording fakes shared by the integration tests.

#![allow(dead_code)]

use glam::{Mat4, Vec2, Vec3};
use std::cell::RefCell;
use std::rc::Rc;
use together_core::*;

#[derive(Clone, Debug, PartialEq)]
pub enum CanvasOp {
    Clear,
    Background(Rgba),
    Circle(Vec2, f32, Rgba),
    Line(Vec2, Vec2, Rgba),
    Polyline(Vec<Vec2>),
    Text(String, Vec2, TextAlign),
    Translate(Vec2),
}

#[derive(Default)]
pub struct RecordingCanvas {
    pub ops: Vec<CanvasOp>,
}

impl RecordingCanvas {
    pub fn circles(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, CanvasOp::Circle(..)))
            .count()
    }

    pub fn texts(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                CanvasOp::Text(t, ..) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn polylines(&self) -> Vec<Vec<Vec2>> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                CanvasOp::Polyline(p) => Some(p.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas2d for RecordingCanvas {
    fn clear(&mut self) {
        self.ops.push(CanvasOp::Clear);
    }
    fn background(&mut self, color: Rgba) {
        self.ops.push(CanvasOp::Background(color));
    }
    fn fill_circle(&mut self, center: Vec2, diameter: f32, color: Rgba) {
        self.ops.push(CanvasOp::Circle(center, diameter, color));
    }
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, _weight: f32) {
        self.ops.push(CanvasOp::Line(from, to, color));
    }
    fn stroke_polyline(&mut self, points: &[Vec2], _color: Rgba, _weight: f32) {
        self.ops.push(CanvasOp::Polyline(points.to_vec()));
    }
    fn text(&mut self, text: &str, pos: Vec2, _size: f32, align: TextAlign, _color: Rgba) {
        self.ops.push(CanvasOp::Text(text.to_string(), pos, align));
    }
    fn translate(&mut self, offset: Vec2) {
        self.ops.push(CanvasOp::Translate(offset));
    }
}

#[derive(Default)]
pub struct RecordingScene {
    pub clears: usize,
    pub hearts: Vec<(Mat4, Rgba)>,
    pub lines: Vec<(Vec3, Vec3, Rgba)>,
    pub points: Vec<(Vec3, f32, Rgba)>,
}

impl Scene3d for RecordingScene {
    fn clear(&mut self, _color: Rgba) {
        self.clears += 1;
    }
    fn draw_heart(&mut self, model: Mat4, color: Rgba) {
        self.hearts.push((model, color));
    }
    fn draw_line(&mut self, from: Vec3, to: Vec3, color: Rgba) {
        self.lines.push((from, to, color));
    }
    fn draw_point(&mut self, center: Vec3, diameter: f32, color: Rgba) {
        self.points.push((center, diameter, color));
    }
}

#[derive(Default)]
pub struct RecordingStatus {
    pub text: Option<String>,
    pub pulsing: bool,
}

impl StatusDisplay for RecordingStatus {
    fn set_track_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }
    fn set_pulsing(&mut self, pulsing: bool) {
        self.pulsing = pulsing;
    }
}

/// Analyzer returning a fixed spectrum, waveform and level.
pub struct ScriptedAnalyzer {
    pub spectrum: Vec<u8>,
    pub waveform: Vec<f32>,
    pub level: f32,
    pub nyquist: f32,
    pub analyze_calls: usize,
}

impl ScriptedAnalyzer {
    /// Every bin set to `energy`, so every band reads exactly `energy`.
    pub fn flat(energy: u8, level: f32) -> Self {
        Self {
            spectrum: vec![energy; 1024],
            waveform: (0..1024).map(|i| ((i as f32) * 0.05).sin()).collect(),
            level,
            nyquist: 22_050.0,
            analyze_calls: 0,
        }
    }
}

impl SpectrumAnalyzer for ScriptedAnalyzer {
    fn analyze(&mut self) -> &[u8] {
        self.analyze_calls += 1;
        &self.spectrum
    }
    fn spectrum(&self) -> &[u8] {
        &self.spectrum
    }
    fn nyquist_hz(&self) -> f32 {
        self.nyquist
    }
    fn waveform(&mut self) -> &[f32] {
        &self.waveform
    }
    fn level(&mut self) -> f32 {
        self.level
    }
}

/// Everything a fake track was asked to do, shared with the test body.
#[derive(Debug, Default)]
pub struct TrackLog {
    pub playing: bool,
    pub plays: usize,
    pub pauses: usize,
    pub stops: usize,
    pub volume: Option<f32>,
    pub pan: Option<f32>,
}

pub struct FakeTrack {
    pub log: Rc<RefCell<TrackLog>>,
}

impl TrackHandle for FakeTrack {
    fn play(&mut self) {
        let mut log = self.log.borrow_mut();
        log.playing = true;
        log.plays += 1;
    }
    fn pause(&mut self) {
        let mut log = self.log.borrow_mut();
        log.playing = false;
        log.pauses += 1;
    }
    fn stop(&mut self) {
        let mut log = self.log.borrow_mut();
        log.playing = false;
        log.stops += 1;
    }
    fn is_playing(&self) -> bool {
        self.log.borrow().playing
    }
    fn set_volume(&mut self, volume: f32) {
        self.log.borrow_mut().volume = Some(volume);
    }
    fn pan(&mut self, pan: f32) {
        self.log.borrow_mut().pan = Some(pan);
    }
}

/// Backend that hands out fake tracks, failing for the names in `broken`.
#[derive(Default)]
pub struct FakeBackend {
    pub broken: Vec<&'static str>,
    pub logs: Vec<(String, Rc<RefCell<TrackLog>>)>,
}

impl FakeBackend {
    pub fn log_for(&self, name: &str) -> Rc<RefCell<TrackLog>> {
        self.logs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, l)| l.clone())
            .expect("track was never loaded")
    }
}

impl AudioBackend for FakeBackend {
    fn load(&mut self, name: &str, path: &str) -> Result<Box<dyn TrackHandle>, VisualizerError> {
        if self.broken.contains(&name) {
            return Err(VisualizerError::TrackLoad {
                name: name.to_string(),
                reason: format!("{path} not found"),
            });
        }
        let log = Rc::new(RefCell::new(TrackLog::default()));
        self.logs.push((name.to_string(), log.clone()));
        Ok(Box::new(FakeTrack { log }))
    }
}

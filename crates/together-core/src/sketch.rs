//! Per-frame orchestration: audio features in, particles, hearts and HUD out.

use crate::analysis::{AudioFeatures, SpectrumAnalyzer};
use crate::color::Rgba;
use crate::connection::{HeartConnection, DEFAULT_CONNECTION_CAPACITY};
use crate::constants::*;
use crate::heart::Heart;
use crate::math::{map_range, random_between};
use crate::particle::{ParticleSystem, Side};
use crate::render::{Canvas2d, RenderMode, Scene3d, Surfaces, TextAlign, Viewport};
use crate::session::{Session, TrackCatalog};
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;

pub const TITLE: &str = "Together Apart";
pub const SUBTITLE: &str = "A music player for long-distance couples";
pub const INTRO_HINT: &str = "Pick a song below to start playing";
pub const NO_TRACK_TEXT: &str = "Select a song";

#[derive(Clone, Debug)]
pub struct SketchConfig {
    pub max_particles: usize,
    pub initial_particles: usize,
    pub connection_capacity: usize,
    pub heart_base_size: f32,
    /// Home x of each heart as a fraction of the width, mirrored around the center.
    pub heart_offset_fraction: f32,
    /// Horizontal heart shift at full pan.
    pub pan_offset: f32,
    pub seed: u64,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            max_particles: 200,
            initial_particles: 50,
            connection_capacity: DEFAULT_CONNECTION_CAPACITY,
            heart_base_size: 20.0,
            heart_offset_fraction: 0.2,
            pan_offset: 50.0,
            seed: 0,
        }
    }
}

/// The 3D part of the sketch: two hearts and the stream between them.
#[derive(Clone, Debug)]
pub struct HeartScene {
    pub left: Heart,
    pub right: Heart,
    pub connection: HeartConnection,
}

impl HeartScene {
    pub fn new(config: &SketchConfig, viewport: Viewport, rng: &mut StdRng) -> Self {
        let home = viewport.width * config.heart_offset_fraction;
        let left = Heart::new(
            Vec3::new(-home, 0.0, 0.0),
            config.heart_base_size,
            Rgba::from_hsb_array(LEFT_HEART_HSB, 1.0),
            rng,
        );
        let right = Heart::new(
            Vec3::new(home, 0.0, 0.0),
            config.heart_base_size,
            Rgba::from_hsb_array(RIGHT_HEART_HSB, 1.0),
            rng,
        );
        let connection = HeartConnection::new(&left, &right, config.connection_capacity, rng);
        Self {
            left,
            right,
            connection,
        }
    }

    fn place(&mut self, home: f32, shift: f32) {
        self.left.pos.x = -home + shift;
        self.right.pos.x = home + shift;
    }
}

/// Text overlay rows for one frame.
pub type InfoLines = SmallVec<[String; 5]>;

/// Volume to two decimals, band energies truncated to integers.
pub fn info_lines(features: &AudioFeatures) -> InfoLines {
    let mut lines = InfoLines::new();
    lines.push(format!("Volume: {:.2}", features.level));
    lines.push(format!("Bass: {}", features.bass as i32));
    lines.push(format!("Mid: {}", features.mid as i32));
    lines.push(format!("Treble: {}", features.treble as i32));
    lines
}

/// Sample every `WAVEFORM_STRIDE`th value and lay it out over `[x0, x1)`.
pub fn waveform_points(samples: &[f32], x0: f32, x1: f32, y_lo: f32, y_hi: f32) -> Vec<Vec2> {
    let n = samples.len() as f32;
    samples
        .iter()
        .enumerate()
        .step_by(WAVEFORM_STRIDE)
        .map(|(i, &s)| {
            Vec2::new(
                map_range(i as f32, 0.0, n, x0, x1),
                map_range(s, -1.0, 1.0, y_lo, y_hi),
            )
        })
        .collect()
}

pub struct Sketch {
    pub config: SketchConfig,
    pub viewport: Viewport,
    pub mode: RenderMode,
    pub left: ParticleSystem,
    pub right: ParticleSystem,
    pub hearts: Option<HeartScene>,
    pub session: Session,
    rng: StdRng,
    frame: u64,
}

impl Sketch {
    pub fn new(
        config: SketchConfig,
        viewport: Viewport,
        mode: RenderMode,
        catalog: TrackCatalog,
    ) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self::with_rng(config, viewport, mode, catalog, rng)
    }

    pub fn with_rng(
        config: SketchConfig,
        viewport: Viewport,
        mode: RenderMode,
        catalog: TrackCatalog,
        mut rng: StdRng,
    ) -> Self {
        let left = ParticleSystem::new(config.initial_particles, Side::Left, viewport, &mut rng);
        let right = ParticleSystem::new(config.initial_particles, Side::Right, viewport, &mut rng);
        let hearts = match mode {
            RenderMode::ThreeD => Some(HeartScene::new(&config, viewport, &mut rng)),
            RenderMode::TwoD => None,
        };
        log::info!(
            "[sketch] {:?} mode, {}x{}, {} particles per side",
            mode,
            viewport.width,
            viewport.height,
            config.initial_particles
        );
        Self {
            config,
            viewport,
            mode,
            left,
            right,
            hearts,
            session: Session::new(catalog),
            rng,
            frame: 0,
        }
    }

    /// Number of frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let home = viewport.width * self.config.heart_offset_fraction;
        if let Some(hearts) = self.hearts.as_mut() {
            hearts.place(home, 0.0);
        }
        log::debug!("[sketch] resized to {}x{}", viewport.width, viewport.height);
    }

    pub fn set_pulse_intensity(&mut self, intensity: f32) {
        self.session.pulse_intensity = intensity;
        if let Some(hearts) = self.hearts.as_mut() {
            hearts.left.set_pulse_intensity(intensity);
            hearts.right.set_pulse_intensity(intensity);
        }
    }

    /// Run one animation frame. Returns the sampled features, or `None` while idle.
    pub fn tick(
        &mut self,
        analyzer: &mut dyn SpectrumAnalyzer,
        surfaces: Surfaces<'_>,
    ) -> Option<AudioFeatures> {
        let Surfaces {
            canvas,
            mut scene,
            status,
        } = surfaces;
        self.frame += 1;

        let background = Rgba::from_hsb_array(BACKGROUND_HSB, 1.0);
        match self.mode {
            RenderMode::ThreeD => {
                canvas.clear();
                if let Some(scene) = scene.as_deref_mut() {
                    scene.clear(background);
                }
            }
            RenderMode::TwoD => canvas.background(background.with_alpha(TRAIL_ALPHA)),
        }

        self.session.sync();
        if !self.session.is_playing() {
            self.draw_intro(canvas, scene);
            return None;
        }

        let features = AudioFeatures::sample(analyzer);
        let bass = features.bass_norm;
        let w = self.viewport.width;
        let h = self.viewport.height;

        match (self.hearts.as_mut(), scene) {
            (Some(hearts), scene) => {
                hearts.left.pulse(bass);
                hearts.right.pulse(bass);
                hearts
                    .connection
                    .update(&hearts.left, &hearts.right, bass, self.frame, &mut self.rng);
                let home = w * self.config.heart_offset_fraction;
                hearts.place(home, self.session.pan * self.config.pan_offset);
                if let Some(scene) = scene {
                    hearts.left.display(scene);
                    hearts.right.display(scene);
                    hearts.connection.display(&hearts.left, &hearts.right, scene);
                }
                if bass > SHAKE_BASS_THRESHOLD {
                    let dx = random_between(&mut self.rng, -SHAKE_AMPLITUDE, SHAKE_AMPLITUDE);
                    let dy = random_between(&mut self.rng, -SHAKE_AMPLITUDE, SHAKE_AMPLITUDE);
                    canvas.translate(Vec2::new(dx, dy) * bass);
                }
            }
            (None, _) => canvas.stroke_line(
                Vec2::new(w * 0.5, 0.0),
                Vec2::new(w * 0.5, h),
                Rgba::gray(HUD_GRAY, DIVIDER_ALPHA),
                HUD_STROKE_WEIGHT,
            ),
        }

        let max = self.config.max_particles;
        let viewport = self.viewport;
        self.left
            .adjust_particles(features.level, max, viewport, &mut self.rng);
        self.right
            .adjust_particles(features.level, max, viewport, &mut self.rng);
        self.left.run(
            features.frequency_ratio,
            features.level,
            viewport,
            canvas,
            &mut self.rng,
        );
        self.right.run(
            features.frequency_ratio,
            features.level,
            viewport,
            canvas,
            &mut self.rng,
        );

        self.draw_waveform(analyzer.waveform(), canvas);
        self.draw_info(&features, canvas);

        match self.session.current_name() {
            Some(name) => {
                status.set_track_text(name);
                status.set_pulsing(features.bass > STATUS_PULSE_BASS);
            }
            None => {
                status.set_track_text(NO_TRACK_TEXT);
                status.set_pulsing(false);
            }
        }

        log::trace!(
            "[sketch] frame {} level {:.3} ratio {:.3} particles {}/{}",
            self.frame,
            features.level,
            features.frequency_ratio,
            self.left.len(),
            self.right.len()
        );
        Some(features)
    }

    fn draw_intro(
        &self,
        canvas: &mut dyn Canvas2d,
        scene: Option<&mut dyn Scene3d>,
    ) {
        let c = self.viewport.center();
        let ink = Rgba::gray(HUD_GRAY, 1.0);
        canvas.text(TITLE, c - Vec2::new(0.0, 50.0), 32.0, TextAlign::Center, ink);
        canvas.text(SUBTITLE, c, 18.0, TextAlign::Center, ink);
        canvas.text(
            INTRO_HINT,
            c + Vec2::new(0.0, 50.0),
            INFO_TEXT_SIZE,
            TextAlign::Center,
            ink,
        );
        if let (Some(hearts), Some(scene)) = (self.hearts.as_ref(), scene) {
            hearts.left.display(scene);
            hearts.right.display(scene);
            hearts.connection.display(&hearts.left, &hearts.right, scene);
        }
    }

    fn draw_waveform(&self, samples: &[f32], canvas: &mut dyn Canvas2d) {
        let w = self.viewport.width;
        let h = self.viewport.height;
        let color = Rgba::gray(HUD_GRAY, WAVEFORM_ALPHA);
        match self.mode {
            RenderMode::ThreeD => {
                let y = h * 5.0 / 6.0;
                let points = waveform_points(
                    samples,
                    0.0,
                    w,
                    y - WAVEFORM_AMPLITUDE_3D,
                    y + WAVEFORM_AMPLITUDE_3D,
                );
                canvas.stroke_polyline(&points, color, HUD_STROKE_WEIGHT);
            }
            RenderMode::TwoD => {
                for (x0, x1) in [(0.0, w * 0.5), (w * 0.5, w)] {
                    let points = waveform_points(samples, x0, x1, h * 0.25, h * 0.75);
                    canvas.stroke_polyline(&points, color, HUD_STROKE_WEIGHT);
                }
            }
        }
    }

    fn draw_info(&self, features: &AudioFeatures, canvas: &mut dyn Canvas2d) {
        let ink = Rgba::gray(HUD_GRAY, 1.0);
        let lines = info_lines(features);
        let (origin, align) = match self.mode {
            RenderMode::ThreeD => (Vec2::new(80.0, 60.0), TextAlign::Left),
            RenderMode::TwoD => {
                if let Some(name) = self.session.current_name() {
                    let now_playing = format!("Now playing: {name}");
                    canvas.text(
                        &now_playing,
                        Vec2::new(20.0, 20.0),
                        INFO_TEXT_SIZE,
                        TextAlign::Left,
                        ink,
                    );
                }
                (
                    Vec2::new(self.viewport.width - 20.0, 20.0),
                    TextAlign::Right,
                )
            }
        };
        for (i, line) in lines.iter().enumerate() {
            let pos = origin + Vec2::new(0.0, i as f32 * INFO_LINE_HEIGHT);
            canvas.text(line, pos, INFO_TEXT_SIZE, align, ink);
        }
    }
}

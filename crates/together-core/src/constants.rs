// Shared tuning constants for the audio-reactive simulation.

// Particle population
pub const MIN_PARTICLES: f32 = 20.0; // population floor at silence
pub const PARTICLES_PER_GROWTH_STEP: usize = 2;
pub const SHRINK_PROBABILITY: f32 = 0.05; // chance per call to drop one particle when above target

// Particle motion
pub const SPEED_CAP_MIN: f32 = 1.0; // speed cap at volume 0
pub const SPEED_CAP_MAX: f32 = 6.0; // speed cap at volume 1
pub const VELOCITY_JITTER: f32 = 0.1; // per-axis uniform jitter added after integration
pub const EDGE_BOUNCE: f32 = 0.8; // velocity kept after reflecting off an edge
pub const ATTRACTION_ENERGY_SCALE: f32 = 2.0; // volume -> attraction energy
pub const CONVERGE_GAIN: f32 = 0.1;
pub const DISPERSE_GAIN: f32 = 0.2;
pub const DISPERSE_THRESHOLD: f32 = 0.5; // frequency ratio above which particles scatter
pub const LEFT_CENTER_FRACTION: f32 = 0.25;
pub const RIGHT_CENTER_FRACTION: f32 = 0.75;

// Particle look
pub const PARTICLE_SIZE_MIN: f32 = 3.0;
pub const PARTICLE_SIZE_MAX: f32 = 8.0;
pub const PARTICLE_ALPHA: f32 = 200.0 / 255.0;
pub const PARTICLE_SATURATION: f32 = 80.0;
pub const PARTICLE_BRIGHTNESS: f32 = 100.0;
pub const LEFT_HUE: f32 = 170.0; // teal
pub const RIGHT_HUE: f32 = 350.0; // crimson

// Heart pulse
pub const HEART_SIZE_SMOOTHING: f32 = 0.1; // lerp factor toward the target size per frame
pub const HEART_BASS_GAIN: f32 = 0.5;
pub const HEART_PULSE_AMOUNT: f32 = 0.15;
pub const HEART_PULSE_SPEED_MIN: f32 = 0.02;
pub const HEART_PULSE_SPEED_MAX: f32 = 0.04;
pub const HEART_PHASE_MAX: f32 = 100.0;
pub const HEART_ROTATION_SPEED: f32 = 0.005;
pub const HEART_TILT_RATIO: f32 = 0.7; // rotateX runs at this fraction of rotateY

// Heart mesh
pub const HEART_FACE_STEP: f32 = 0.01;
pub const HEART_STRIP_STEP: f32 = 0.1;
pub const HEART_DEPTH_SCALE: f32 = 0.3;

// Heart connection
pub const CONNECTION_LIFE: f32 = 255.0;
pub const CONNECTION_LIFE_DECAY: f32 = 0.5;
pub const CONNECTION_SPEED_MIN: f32 = 0.001;
pub const CONNECTION_SPEED_MAX: f32 = 0.005;
pub const CONNECTION_SIZE_MIN: f32 = 2.0;
pub const CONNECTION_SIZE_MAX: f32 = 5.0;
pub const CONNECTION_SPAWN_SPREAD: [f32; 3] = [30.0, 30.0, 10.0];
pub const CONNECTION_SPAWN_BASE: f32 = 0.1;
pub const CONNECTION_SPAWN_BASS_SLOPE: f32 = 0.2;
pub const CONNECTION_JITTER_FREQ: [f32; 2] = [0.05, 0.03]; // per-frame phase rate for x/y
pub const CONNECTION_JITTER_AMP: [f32; 2] = [10.0, 8.0];

// Band blend for the frequency ratio (bass, mid, treble)
pub const BAND_WEIGHTS: [f32; 3] = [0.2, 0.3, 0.5];
pub const ENERGY_MAX: f32 = 255.0;

// Frame effects
pub const SHAKE_BASS_THRESHOLD: f32 = 0.5;
pub const SHAKE_AMPLITUDE: f32 = 5.0;
pub const STATUS_PULSE_BASS: f32 = 150.0; // raw bass energy that lights up the track display
pub const WAVEFORM_STRIDE: usize = 20;
pub const WAVEFORM_AMPLITUDE_3D: f32 = 50.0;

// Palette (HSB, hue in degrees, saturation/brightness in 0..100)
pub const BACKGROUND_HSB: [f32; 3] = [240.0, 30.0, 10.0];
pub const TRAIL_ALPHA: f32 = 30.0 / 255.0; // 2D mode background alpha, leaves motion trails
pub const LEFT_HEART_HSB: [f32; 3] = [170.0, 80.0, 100.0];
pub const RIGHT_HEART_HSB: [f32; 3] = [350.0, 80.0, 100.0];

// HUD strokes and text (gray level and alpha in 0..1)
pub const HUD_GRAY: f32 = 200.0 / 255.0;
pub const WAVEFORM_ALPHA: f32 = 50.0 / 255.0;
pub const DIVIDER_ALPHA: f32 = 30.0 / 255.0;
pub const CONNECTION_LINE_ALPHA: f32 = 100.0 / 255.0;
pub const HUD_STROKE_WEIGHT: f32 = 2.0;
pub const INFO_TEXT_SIZE: f32 = 14.0;
pub const INFO_LINE_HEIGHT: f32 = 20.0;

// Page layout, camera and lighting constants for the web front-end.
//
// Simulation tuning lives in `together_core::constants`; everything here is
// about how the browser page is wired and how the 3D scene is lit.

// Element ids expected in index.html
pub const GPU_CANVAS_ID: &str = "app-canvas";
pub const HUD_CANVAS_ID: &str = "hud-canvas";
pub const PLAY_BUTTON_ID: &str = "playButton";
pub const PAUSE_BUTTON_ID: &str = "pauseButton";
pub const STOP_BUTTON_ID: &str = "stopButton";
pub const SONG_SELECT_ID: &str = "songSelect";
pub const VOLUME_SLIDER_ID: &str = "volumeSlider";
pub const PAN_SLIDER_ID: &str = "panSlider";
pub const HEART_SIZE_SLIDER_ID: &str = "heartSizeSlider";
pub const CURRENT_SONG_ID: &str = "currentSong";
pub const PULSE_CLASS: &str = "pulse";

// Camera: perspective matching a 2D canvas of the same size at z = 0
pub const CAMERA_FOVY: f32 = std::f32::consts::FRAC_PI_3;
pub const CAMERA_NEAR_FACTOR: f32 = 0.1; // near plane as a fraction of the eye distance
pub const CAMERA_FAR_FACTOR: f32 = 10.0; // far plane as a multiple of the eye distance

// Lighting
pub const AMBIENT_LEVEL: f32 = 0.5;
pub const LIGHT_DIRECTION: [f32; 3] = [0.5, 0.5, -1.0]; // direction the light travels
pub const SPECULAR_SHININESS: f32 = 20.0;

// Audio analysis
pub const FFT_SIZE: u32 = 2048; // 1024 frequency bins
pub const ANALYSER_SMOOTHING: f64 = 0.8;

// GPU buffer capacities per frame
pub const MAX_HEART_DRAWS: usize = 4;
pub const MAX_POINTS: usize = 256;
pub const MAX_LINE_VERTICES: usize = 16;

// HUD text
pub const HUD_FONT_FAMILY: &str = "sans-serif";

// Diagnostics
pub const FPS_LOG_INTERVAL_SEC: f32 = 1.0;

// Host-side tests for front-end constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_planes_bracket_the_sketch_plane() {
    // Near plane in front of z = 0, far plane well behind it
    assert!(CAMERA_NEAR_FACTOR > 0.0 && CAMERA_NEAR_FACTOR < 1.0);
    assert!(CAMERA_FAR_FACTOR > 1.0);
    assert!(CAMERA_FOVY > 0.0 && CAMERA_FOVY < std::f32::consts::PI);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn lighting_is_in_range() {
    assert!((0.0..=1.0).contains(&AMBIENT_LEVEL));
    assert!(SPECULAR_SHININESS > 0.0);
    let [x, y, z] = LIGHT_DIRECTION;
    assert!((x * x + y * y + z * z) > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn analyser_settings_match_webaudio_limits() {
    // fftSize must be a power of two in [32, 32768]
    assert!(FFT_SIZE.is_power_of_two());
    assert!((32..=32768).contains(&FFT_SIZE));
    // 1024 bins, matching the default p5 FFT
    assert_eq!(FFT_SIZE / 2, 1024);
    assert!((0.0..1.0).contains(&ANALYSER_SMOOTHING));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn buffer_capacities_cover_a_full_frame() {
    // Two hearts per frame
    assert!(MAX_HEART_DRAWS >= 2);
    // Default connection pool is 50 transit particles
    assert!(MAX_POINTS >= 50);
    // One connection line plus slack
    assert!(MAX_LINE_VERTICES >= 2 && MAX_LINE_VERTICES % 2 == 0);
}

#[test]
fn element_ids_are_distinct() {
    let ids = [
        GPU_CANVAS_ID,
        HUD_CANVAS_ID,
        PLAY_BUTTON_ID,
        PAUSE_BUTTON_ID,
        STOP_BUTTON_ID,
        SONG_SELECT_ID,
        VOLUME_SLIDER_ID,
        PAN_SLIDER_ID,
        HEART_SIZE_SLIDER_ID,
        CURRENT_SONG_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

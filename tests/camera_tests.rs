// Host-side tests for the sketch-space camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod camera {
    include!("../src/camera.rs");
}

use camera::SketchCamera;
use glam::Vec3;
use std::f32::consts::FRAC_PI_3;

fn camera_800x600() -> SketchCamera {
    SketchCamera::for_viewport(800.0, 600.0, FRAC_PI_3, 0.1, 10.0)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn eye_distance_maps_one_unit_to_one_pixel() {
    let cam = camera_800x600();
    let expected = 300.0 / (FRAC_PI_3 * 0.5).tan();
    assert!(approx(cam.eye.z, expected));
    assert!(approx(cam.znear, expected * 0.1));
    assert!(approx(cam.zfar, expected * 10.0));
    assert!(approx(cam.aspect, 800.0 / 600.0));
}

#[test]
fn origin_projects_to_screen_center() {
    let ndc = camera_800x600().project(Vec3::ZERO);
    assert!(approx(ndc.x, 0.0));
    assert!(approx(ndc.y, 0.0));
}

#[test]
fn viewport_corners_land_on_ndc_corners_with_y_down() {
    let cam = camera_800x600();
    let bottom_right = cam.project(Vec3::new(400.0, 300.0, 0.0));
    assert!(approx(bottom_right.x, 1.0), "x = {}", bottom_right.x);
    assert!(approx(bottom_right.y, -1.0), "y = {}", bottom_right.y);

    let top_left = cam.project(Vec3::new(-400.0, -300.0, 0.0));
    assert!(approx(top_left.x, -1.0));
    assert!(approx(top_left.y, 1.0));
}

#[test]
fn points_toward_the_viewer_appear_larger() {
    let cam = camera_800x600();
    let flat = cam.project(Vec3::new(100.0, 0.0, 0.0));
    let near = cam.project(Vec3::new(100.0, 0.0, 100.0));
    assert!(near.x > flat.x);
}

#[test]
fn sketch_plane_depth_is_inside_clip_range() {
    let ndc = camera_800x600().project(Vec3::new(50.0, -20.0, 0.0));
    assert!(ndc.z > 0.0 && ndc.z < 1.0, "depth {}", ndc.z);
}

#[test]
fn degenerate_viewport_stays_finite() {
    let cam = SketchCamera::for_viewport(0.0, 0.0, FRAC_PI_3, 0.1, 10.0);
    let m = cam.view_proj();
    assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
}

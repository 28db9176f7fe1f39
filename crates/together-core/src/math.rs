/// Re-map `value` from `[in_min, in_max]` onto `[out_min, out_max]` without clamping.
#[inline]
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Uniform sample in `[lo, hi)`; returns `lo` for an empty range.
#[inline]
pub fn random_between(rng: &mut impl rand::Rng, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

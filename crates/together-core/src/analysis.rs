//! Spectrum/amplitude sampling and the per-frame audio features derived from it.

use crate::constants::{BAND_WEIGHTS, ENERGY_MAX};

/// Named frequency bands, in Hz, matching the ranges p5.sound reports energy for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrequencyBand {
    Bass,
    /// Not read by the sketch; kept so every p5 `getEnergy` band has a counterpart.
    LowMid,
    Mid,
    /// Not read by the sketch; kept so every p5 `getEnergy` band has a counterpart.
    HighMid,
    Treble,
}

impl FrequencyBand {
    pub fn range_hz(self) -> (f32, f32) {
        match self {
            FrequencyBand::Bass => (20.0, 140.0),
            FrequencyBand::LowMid => (140.0, 400.0),
            FrequencyBand::Mid => (400.0, 2600.0),
            FrequencyBand::HighMid => (2600.0, 5200.0),
            FrequencyBand::Treble => (5200.0, 14000.0),
        }
    }
}

/// Mean byte magnitude over the inclusive bin range covering `band`.
///
/// Returns 0 for an empty spectrum or a band entirely above Nyquist.
pub fn band_energy(spectrum: &[u8], nyquist_hz: f32, band: FrequencyBand) -> f32 {
    if spectrum.is_empty() || nyquist_hz <= 0.0 {
        return 0.0;
    }
    let (lo_hz, hi_hz) = band.range_hz();
    let bins = spectrum.len() as f32;
    let last = spectrum.len() - 1;
    let lo = ((lo_hz / nyquist_hz * bins).round() as usize).min(last + 1);
    let hi = ((hi_hz / nyquist_hz * bins).round() as usize).min(last);
    if lo > hi {
        return 0.0;
    }
    let slice = &spectrum[lo..=hi];
    slice.iter().map(|&v| v as f32).sum::<f32>() / slice.len() as f32
}

/// Root mean square of time-domain samples in \[-1, 1\].
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    (samples.iter().map(|s| s * s).sum::<f32>() / samples.len() as f32).sqrt()
}

/// Blend of normalized band energies; bright material pushes this toward 1.
#[inline]
pub fn frequency_ratio(bass_norm: f32, mid_norm: f32, treble_norm: f32) -> f32 {
    bass_norm * BAND_WEIGHTS[0] + mid_norm * BAND_WEIGHTS[1] + treble_norm * BAND_WEIGHTS[2]
}

/// Frequency/amplitude analysis of whatever is currently playing.
pub trait SpectrumAnalyzer {
    /// Refresh and return the magnitude spectrum (one byte per bin, 0..255).
    fn analyze(&mut self) -> &[u8];
    /// Spectrum captured by the last `analyze` call.
    fn spectrum(&self) -> &[u8];
    fn nyquist_hz(&self) -> f32;
    /// Time-domain samples in \[-1, 1\].
    fn waveform(&mut self) -> &[f32];
    /// Overall amplitude in \[0, 1\].
    fn level(&mut self) -> f32;
    /// Energy in \[0, 255\] of `band` in the last analyzed spectrum.
    fn energy(&self, band: FrequencyBand) -> f32 {
        band_energy(self.spectrum(), self.nyquist_hz(), band)
    }
}

/// One frame's worth of audio readings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AudioFeatures {
    pub level: f32,
    pub bass: f32,
    pub mid: f32,
    pub treble: f32,
    pub bass_norm: f32,
    pub mid_norm: f32,
    pub treble_norm: f32,
    pub frequency_ratio: f32,
}

impl AudioFeatures {
    pub fn from_energies(level: f32, bass: f32, mid: f32, treble: f32) -> Self {
        let bass_norm = bass / ENERGY_MAX;
        let mid_norm = mid / ENERGY_MAX;
        let treble_norm = treble / ENERGY_MAX;
        Self {
            level,
            bass,
            mid,
            treble,
            bass_norm,
            mid_norm,
            treble_norm,
            frequency_ratio: frequency_ratio(bass_norm, mid_norm, treble_norm),
        }
    }

    pub fn sample(analyzer: &mut dyn SpectrumAnalyzer) -> Self {
        analyzer.analyze();
        let level = analyzer.level();
        Self::from_energies(
            level,
            analyzer.energy(FrequencyBand::Bass),
            analyzer.energy(FrequencyBand::Mid),
            analyzer.energy(FrequencyBand::Treble),
        )
    }
}

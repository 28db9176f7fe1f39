mod common;

use common::ScriptedAnalyzer;
use together_core::*;

#[test]
fn flat_spectrum_reads_the_same_in_every_band() {
    let spectrum = vec![128u8; 1024];
    for band in [
        FrequencyBand::Bass,
        FrequencyBand::LowMid,
        FrequencyBand::Mid,
        FrequencyBand::HighMid,
        FrequencyBand::Treble,
    ] {
        assert!((band_energy(&spectrum, 22_050.0, band) - 128.0).abs() < 1e-4);
    }
}

#[test]
fn band_energy_only_sees_its_own_bins() {
    // 1024 bins over 22.05 kHz: bass covers bins 1..=7.
    let mut spectrum = vec![0u8; 1024];
    for v in &mut spectrum[1..=7] {
        *v = 255;
    }
    assert!((band_energy(&spectrum, 22_050.0, FrequencyBand::Bass) - 255.0).abs() < 1e-4);
    assert_eq!(band_energy(&spectrum, 22_050.0, FrequencyBand::Treble), 0.0);
}

#[test]
fn band_energy_handles_degenerate_input() {
    assert_eq!(band_energy(&[], 22_050.0, FrequencyBand::Bass), 0.0);
    assert_eq!(band_energy(&[10, 20], 0.0, FrequencyBand::Bass), 0.0);
    // Treble sits entirely above a 4 kHz Nyquist.
    assert_eq!(band_energy(&[200; 64], 4_000.0, FrequencyBand::Treble), 0.0);
}

#[test]
fn rms_of_square_wave_is_its_amplitude() {
    let samples: Vec<f32> = (0..100).map(|i| if i % 2 == 0 { 0.5 } else { -0.5 }).collect();
    assert!((rms(&samples) - 0.5).abs() < 1e-6);
    assert_eq!(rms(&[]), 0.0);
}

#[test]
fn silence_gives_zero_ratio() {
    let f = AudioFeatures::from_energies(0.0, 0.0, 0.0, 0.0);
    assert_eq!(f.frequency_ratio, 0.0);
    assert!(f.frequency_ratio <= 0.5);
}

#[test]
fn ratio_weights_treble_most() {
    let bass_only = AudioFeatures::from_energies(0.5, 255.0, 0.0, 0.0);
    let treble_only = AudioFeatures::from_energies(0.5, 0.0, 0.0, 255.0);
    assert!((bass_only.frequency_ratio - 0.2).abs() < 1e-6);
    assert!((treble_only.frequency_ratio - 0.5).abs() < 1e-6);
    let full = AudioFeatures::from_energies(1.0, 255.0, 255.0, 255.0);
    assert!((full.frequency_ratio - 1.0).abs() < 1e-6);
    assert!((full.bass_norm - 1.0).abs() < 1e-6);
}

#[test]
fn sample_reads_analyzer_once_per_frame() {
    let mut analyzer = ScriptedAnalyzer::flat(102, 0.4);
    let f = AudioFeatures::sample(&mut analyzer);
    assert_eq!(analyzer.analyze_calls, 1);
    assert!((f.level - 0.4).abs() < 1e-6);
    assert!((f.bass - 102.0).abs() < 1e-4);
    assert!((f.bass_norm - 0.4).abs() < 1e-4);
    assert!((f.frequency_ratio - 0.4).abs() < 1e-4);
}

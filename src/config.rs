use crate::dsp::oscillator::Waveform;
use serde::{Deserialize, Serialize};

/// Configuration for one render run.
///
/// The notation itself defines durations only as fractions of an abstract
/// measure, so the measure-to-seconds conversion is a required input here
/// rather than an inferred constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Length of one full measure in seconds. The default, 2.0, is one 4/4
    /// measure at 120 BPM.
    pub measure_duration_secs: f64,
    /// Frequency of the note `a` at the reference octave. Standard concert
    /// pitch is 440 Hz.
    pub reference_frequency_hz: f64,
    /// Octave at which `a` sounds at `reference_frequency_hz`. The notation
    /// starts every score at octave 5, which is also the reference, so an
    /// unshifted `a4` plays at exactly 440 Hz.
    pub reference_octave: i32,
    /// Peak amplitude [0, 1]. Kept well below 1.0 so 16-bit output never clips.
    pub amplitude: f64,
    /// Voice used for pitched notes.
    pub waveform: Waveform,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            sample_rate: 44100,
            measure_duration_secs: 2.0,
            reference_frequency_hz: 440.0,
            reference_octave: 5,
            amplitude: 0.25,
            waveform: Waveform::Sine,
        }
    }
}

impl RenderConfig {
    /// Default configuration at a caller-chosen sample rate.
    pub fn with_sample_rate(sample_rate: u32) -> Self {
        RenderConfig {
            sample_rate,
            ..RenderConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = RenderConfig::default();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.measure_duration_secs, 2.0);
        assert_eq!(config.reference_frequency_hz, 440.0);
        assert_eq!(config.reference_octave, 5);
        assert_eq!(config.waveform, Waveform::Sine);
    }

    #[test]
    fn json_round_trip() {
        let config = RenderConfig::with_sample_rate(22050);
        let json = serde_json::to_string(&config).unwrap();
        let back: RenderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}

//! Phase-accumulator oscillator for the synth voice.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Duty cycle of the `Pulse` waveform, the classic thin 12.5% chip voice.
const PULSE_DUTY: f64 = 0.125;

/// Supported waveform shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Waveform {
    Sine,
    Square,
    Pulse,
    Sawtooth,
    Triangle,
}

/// A single oscillator voice. Phase is continuous for the lifetime of the
/// oscillator; one oscillator per note keeps each note click-free internally.
#[derive(Debug, Clone)]
pub struct Oscillator {
    pub waveform: Waveform,
    pub frequency: f64,
    phase: f64,
    sample_rate: f64,
}

impl Oscillator {
    pub fn new(waveform: Waveform, frequency: f64, sample_rate: f64) -> Self {
        Oscillator {
            waveform,
            frequency,
            phase: 0.0,
            sample_rate,
        }
    }

    /// Phase increment per sample.
    fn phase_inc(&self) -> f64 {
        self.frequency / self.sample_rate
    }

    /// Generate the next sample in [-1, 1].
    pub fn next_sample(&mut self) -> f64 {
        let sample = match self.waveform {
            Waveform::Sine => (2.0 * PI * self.phase).sin(),
            Waveform::Square => {
                if self.phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Pulse => {
                if self.phase < PULSE_DUTY {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Sawtooth => 2.0 * self.phase - 1.0,
            Waveform::Triangle => {
                if self.phase < 0.5 {
                    4.0 * self.phase - 1.0
                } else {
                    3.0 - 4.0 * self.phase
                }
            }
        };

        self.phase += self.phase_inc();
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        sample
    }

    /// Reset oscillator phase.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sine_zero_at_start() {
        let mut osc = Oscillator::new(Waveform::Sine, 440.0, 44100.0);
        let sample = osc.next_sample();
        assert!(sample.abs() < 1e-10, "Sine should start near 0, got {sample}");
    }

    #[test]
    fn all_waveforms_stay_in_range() {
        for waveform in [
            Waveform::Sine,
            Waveform::Square,
            Waveform::Pulse,
            Waveform::Sawtooth,
            Waveform::Triangle,
        ] {
            let mut osc = Oscillator::new(waveform, 440.0, 44100.0);
            for _ in 0..44100 {
                let s = osc.next_sample();
                assert!((-1.0..=1.0).contains(&s), "{waveform:?} out of range: {s}");
            }
        }
    }

    #[test]
    fn pulse_duty_cycle() {
        // At 441 Hz / 44100 Hz one period is exactly 100 samples, so a 12.5%
        // duty pulse is high for 13 of them (phases 0.00..0.13).
        let mut osc = Oscillator::new(Waveform::Pulse, 441.0, 44100.0);
        let high = (0..100).filter(|_| osc.next_sample() > 0.0).count();
        assert_eq!(high, 13);
    }

    #[test]
    fn sine_completes_one_period() {
        // 441 Hz at 44100 Hz: sample 100 should be back at phase 0.
        let mut osc = Oscillator::new(Waveform::Sine, 441.0, 44100.0);
        let first = osc.next_sample();
        for _ in 0..99 {
            osc.next_sample();
        }
        let wrapped = osc.next_sample();
        assert!((first - wrapped).abs() < 1e-9);
    }

    #[test]
    fn reset_restarts_phase() {
        let mut osc = Oscillator::new(Waveform::Sawtooth, 440.0, 44100.0);
        let first = osc.next_sample();
        for _ in 0..10 {
            osc.next_sample();
        }
        osc.reset();
        assert_eq!(osc.next_sample(), first);
    }
}

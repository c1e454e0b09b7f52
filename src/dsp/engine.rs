//! Sample synthesis: a timeline becomes a mono sample buffer.

use super::oscillator::Oscillator;
use crate::config::RenderConfig;
use crate::timeline::Timeline;

/// Length of the linear fade applied at each note boundary, in seconds.
/// Short enough to be inaudible as an envelope, long enough to kill the
/// click of a hard amplitude step.
const FADE_SECS: f64 = 0.002;

/// Number of output samples for an event of the given measure fraction.
pub fn sample_count(duration_fraction: f64, config: &RenderConfig) -> usize {
    (duration_fraction * config.measure_duration_secs * config.sample_rate as f64).round()
        as usize
}

/// Render a timeline to mono samples in [-1, 1], in timeline order.
///
/// Each pitched event runs its own oscillator from phase zero, so phase is
/// continuous within a note; there is no continuity across note boundaries.
pub fn render(timeline: &Timeline, config: &RenderConfig) -> Vec<f64> {
    let total = sample_count(timeline.total.to_f64(), config);
    let mut buffer = Vec::with_capacity(total);

    for event in &timeline.events {
        let n = sample_count(event.duration.to_f64(), config);
        match event.frequency_hz {
            None => {
                buffer.extend(std::iter::repeat(0.0).take(n));
            }
            Some(frequency) => {
                let mut osc =
                    Oscillator::new(config.waveform, frequency, config.sample_rate as f64);
                let fade = fade_samples(n, config);
                for i in 0..n {
                    let sample = osc.next_sample() * config.amplitude;
                    buffer.push(sample * boundary_gain(i, n, fade));
                }
            }
        }
    }

    buffer
}

/// Render to mono i16 PCM (for WAV export).
pub fn render_pcm_i16(timeline: &Timeline, config: &RenderConfig) -> Vec<i16> {
    render(timeline, config)
        .into_iter()
        .map(|s| (s * 32767.0).round().clamp(-32768.0, 32767.0) as i16)
        .collect()
}

/// Fade length in samples, clamped so fade-in and fade-out never overlap.
fn fade_samples(note_len: usize, config: &RenderConfig) -> usize {
    let fade = (FADE_SECS * config.sample_rate as f64) as usize;
    fade.min(note_len / 2)
}

/// Linear ramp in over the first `fade` samples and out over the last `fade`.
/// The ramp is symmetric: sample 0 and sample `n - 1` are both silent.
fn boundary_gain(i: usize, n: usize, fade: usize) -> f64 {
    if fade == 0 {
        return 1.0;
    }
    if i < fade {
        i as f64 / fade as f64
    } else if i >= n - fade {
        (n - 1 - i) as f64 / fade as f64
    } else {
        1.0
    }
}

//! WAV renderer — renders a timeline to a WAV byte buffer.

use super::engine;
use crate::config::RenderConfig;
use crate::error::EncodeError;
use crate::timeline::Timeline;

/// Render a timeline to a WAV file as bytes (16-bit mono PCM).
pub fn render_wav(timeline: &Timeline, config: &RenderConfig) -> Result<Vec<u8>, EncodeError> {
    let pcm = engine::render_pcm_i16(timeline, config);
    encode_wav(&pcm, config.sample_rate, 1)
}

/// Encode i16 PCM samples to a WAV byte buffer.
///
/// The declared RIFF and data chunk sizes are verified against the bytes
/// actually written; a mismatch means a defect in this encoder, surfaced as
/// `EncodeError::BufferSizeMismatch` rather than a malformed file.
pub fn encode_wav(
    samples: &[i16],
    sample_rate: u32,
    channels: u16,
) -> Result<Vec<u8>, EncodeError> {
    let bits_per_sample: u16 = 16;
    let byte_rate = sample_rate * channels as u32 * (bits_per_sample as u32 / 8);
    let block_align = channels * (bits_per_sample / 8);

    // The RIFF size fields are u32; a payload past 4 GiB cannot be declared.
    let payload_bytes = samples.len() as u64 * 2;
    if payload_bytes > u32::MAX as u64 - 36 {
        return Err(EncodeError::BufferSizeMismatch {
            declared: u32::MAX as u64,
            actual: payload_bytes,
        });
    }
    let data_size = payload_bytes as u32;
    let file_size = 36 + data_size;

    let mut buf = Vec::with_capacity(44 + data_size as usize);

    // RIFF header
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&file_size.to_le_bytes());
    buf.extend_from_slice(b"WAVE");

    // fmt chunk
    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes()); // chunk size
    buf.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    buf.extend_from_slice(&channels.to_le_bytes());
    buf.extend_from_slice(&sample_rate.to_le_bytes());
    buf.extend_from_slice(&byte_rate.to_le_bytes());
    buf.extend_from_slice(&block_align.to_le_bytes());
    buf.extend_from_slice(&bits_per_sample.to_le_bytes());

    // data chunk
    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&data_size.to_le_bytes());
    for &sample in samples {
        buf.extend_from_slice(&sample.to_le_bytes());
    }

    // Declared sizes must exactly equal the bytes that follow them.
    let actual_riff = buf.len() as u64 - 8;
    if actual_riff != file_size as u64 {
        return Err(EncodeError::BufferSizeMismatch {
            declared: file_size as u64,
            actual: actual_riff,
        });
    }
    let actual_data = buf.len() as u64 - 44;
    if actual_data != data_size as u64 {
        return Err(EncodeError::BufferSizeMismatch {
            declared: data_size as u64,
            actual: actual_data,
        });
    }

    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::resolver;
    use crate::timeline;

    fn timeline_of(input: &str, config: &RenderConfig) -> Timeline {
        let tokens = Lexer::new(input).tokenize().unwrap();
        timeline::build(resolver::resolve(&tokens, config).unwrap())
    }

    #[test]
    fn wav_header_round_trips_format_fields() {
        let config = RenderConfig::default();
        let wav = render_wav(&timeline_of("a4", &config), &config).unwrap();

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(&wav[36..40], b"data");

        // fmt chunk size and PCM tag
        assert_eq!(u32::from_le_bytes([wav[16], wav[17], wav[18], wav[19]]), 16);
        assert_eq!(u16::from_le_bytes([wav[20], wav[21]]), 1);

        // channels, sample rate, bit depth match the configuration
        assert_eq!(u16::from_le_bytes([wav[22], wav[23]]), 1);
        let sr = u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]);
        assert_eq!(sr, 44100);
        assert_eq!(u16::from_le_bytes([wav[34], wav[35]]), 16);

        // byte rate and block align for 16-bit mono
        let byte_rate = u32::from_le_bytes([wav[28], wav[29], wav[30], wav[31]]);
        assert_eq!(byte_rate, 44100 * 2);
        assert_eq!(u16::from_le_bytes([wav[32], wav[33]]), 2);
    }

    #[test]
    fn declared_sizes_match_payload() {
        let config = RenderConfig::default();
        // a4 = 22050 mono samples = 44100 data bytes
        let wav = render_wav(&timeline_of("a4", &config), &config).unwrap();

        let riff_size = u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]);
        let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
        assert_eq!(data_size, 44100);
        assert_eq!(riff_size, 36 + 44100);
        assert_eq!(wav.len(), 44 + 44100);
    }

    #[test]
    fn rest_payload_is_silent() {
        let config = RenderConfig::default();
        let wav = render_wav(&timeline_of("_2", &config), &config).unwrap();
        assert!(wav[44..].iter().all(|&b| b == 0));
    }

    #[test]
    fn empty_timeline_is_a_valid_header_only_file() {
        let config = RenderConfig::default();
        let wav = render_wav(&timeline_of("", &config), &config).unwrap();
        assert_eq!(wav.len(), 44);
        let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
        assert_eq!(data_size, 0);
    }

    #[test]
    fn full_pipeline_renders_audible_output() {
        let config = RenderConfig::with_sample_rate(22050); // lower rate for faster test
        let schedule = timeline_of("a8 b8 c+16 _16 d16 _16 e8 f+8 g+16 _16 > a4", &config);
        let wav = render_wav(&schedule, &config).unwrap();

        assert_eq!(&wav[0..4], b"RIFF");
        assert!(wav.len() > 44, "WAV should have audio data");

        let mut has_nonzero = false;
        for i in (44..wav.len()).step_by(2) {
            if i + 1 < wav.len() {
                let sample = i16::from_le_bytes([wav[i], wav[i + 1]]);
                if sample != 0 {
                    has_nonzero = true;
                    break;
                }
            }
        }
        assert!(has_nonzero, "Rendered WAV should contain non-silent audio");
    }
}

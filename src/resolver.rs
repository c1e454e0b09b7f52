//! Note resolution: tokens plus ambient octave state become concrete events.
//!
//! The octave is an explicit accumulator threaded through a single pass over
//! the token stream. Every octave-shift token bumps it; every note block
//! reads the value current at that point in the score.

use crate::config::RenderConfig;
use crate::error::ResolveError;
use crate::fraction::Fraction;
use crate::token::{Spanned, Token};

/// Every score starts at octave 5, where `a` is concert A.
pub const DEFAULT_OCTAVE: i32 = 5;

/// A resolved note or rest, not yet placed on the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedNote {
    pub is_rest: bool,
    /// Pitch in Hz. `None` exactly when `is_rest`.
    pub frequency_hz: Option<f64>,
    /// Length as a fraction of one measure. Always > 0.
    pub duration: Fraction,
}

/// Equal-temperament pitch for a semitone offset (relative to `a`) at the
/// given octave: `f = ref * 2^((semitones + 12*(octave - ref_octave)) / 12)`.
pub fn frequency_hz(semitones: i32, octave: i32, config: &RenderConfig) -> f64 {
    let steps = semitones + 12 * (octave - config.reference_octave);
    config.reference_frequency_hz * (2.0_f64).powf(steps as f64 / 12.0)
}

/// Resolve a token stream into an ordered list of notes and rests.
///
/// Octave shifts update the accumulator and emit nothing. Octaves are not
/// clamped; a score that shifts far out of range simply produces inaudible
/// frequencies.
pub fn resolve(
    tokens: &[Spanned],
    config: &RenderConfig,
) -> Result<Vec<ResolvedNote>, ResolveError> {
    let mut octave = DEFAULT_OCTAVE;
    let mut notes = Vec::new();

    for spanned in tokens {
        match &spanned.token {
            Token::OctaveShift { delta } => {
                octave += delta;
            }
            Token::NoteBlock {
                letter,
                accidental,
                divisor,
                tildes,
            } => {
                // The lexer already rejects zero divisors; guard anyway.
                if *divisor == 0 {
                    return Err(ResolveError::InvalidDuration {
                        pos: spanned.span.start,
                    });
                }
                // Each tilde extends the note by one more base duration.
                let duration = Fraction::new(1 + *tildes as u64, *divisor as u64);

                let frequency = letter.semitone_offset().map(|offset| {
                    let semitones =
                        offset + accidental.map_or(0, |a| a.semitones());
                    frequency_hz(semitones, octave, config)
                });

                notes.push(ResolvedNote {
                    is_rest: frequency.is_none(),
                    frequency_hz: frequency,
                    duration,
                });
            }
            Token::EOF => {}
        }
    }

    Ok(notes)
}

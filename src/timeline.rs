//! Timeline building: ordered events get their start offsets.

use crate::fraction::Fraction;
use crate::resolver::ResolvedNote;
use serde::{Deserialize, Serialize};

/// A note or rest placed on the timeline. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteEvent {
    pub is_rest: bool,
    /// Pitch in Hz. `None` exactly when `is_rest`.
    pub frequency_hz: Option<f64>,
    /// Offset from the start of the piece, as a fraction of one measure.
    pub start_offset: Fraction,
    /// Length as a fraction of one measure. Always > 0.
    pub duration: Fraction,
}

/// The complete schedule: document order is performance order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub events: Vec<NoteEvent>,
    /// Total length in measures; equals the sum of all event durations.
    pub total: Fraction,
}

/// Assign each event the running sum of prior durations, starting at zero.
/// Events are never reordered, so the schedule has no gaps and no overlaps.
pub fn build(notes: Vec<ResolvedNote>) -> Timeline {
    let mut cursor = Fraction::ZERO;
    let mut events = Vec::with_capacity(notes.len());

    for note in notes {
        events.push(NoteEvent {
            is_rest: note.is_rest,
            frequency_hz: note.frequency_hz,
            start_offset: cursor,
            duration: note.duration,
        });
        cursor = cursor + note.duration;
    }

    Timeline {
        events,
        total: cursor,
    }
}

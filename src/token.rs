use serde::{Deserialize, Serialize};

/// A note-block letter: one of the seven pitch classes, or `_` for a rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteLetter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    Rest,
}

impl NoteLetter {
    pub fn from_char(ch: char) -> Option<NoteLetter> {
        match ch {
            'a' => Some(NoteLetter::A),
            'b' => Some(NoteLetter::B),
            'c' => Some(NoteLetter::C),
            'd' => Some(NoteLetter::D),
            'e' => Some(NoteLetter::E),
            'f' => Some(NoteLetter::F),
            'g' => Some(NoteLetter::G),
            '_' => Some(NoteLetter::Rest),
            _ => None,
        }
    }

    /// Semitone offset relative to A within the same octave.
    /// `None` for rests, which carry no pitch.
    pub fn semitone_offset(&self) -> Option<i32> {
        match self {
            NoteLetter::A => Some(0),
            NoteLetter::B => Some(2),
            NoteLetter::C => Some(-9),
            NoteLetter::D => Some(-7),
            NoteLetter::E => Some(-5),
            NoteLetter::F => Some(-4),
            NoteLetter::G => Some(-2),
            NoteLetter::Rest => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            NoteLetter::A => 'a',
            NoteLetter::B => 'b',
            NoteLetter::C => 'c',
            NoteLetter::D => 'd',
            NoteLetter::E => 'e',
            NoteLetter::F => 'f',
            NoteLetter::G => 'g',
            NoteLetter::Rest => '_',
        }
    }
}

/// `+` raises a semitone, `-` lowers one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Accidental {
    Sharp,
    Flat,
}

impl Accidental {
    pub fn semitones(&self) -> i32 {
        match self {
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Token {
    /// A complete note or rest block: `letter accidental? divisor tilde*`,
    /// e.g. `a+16~~`.
    NoteBlock {
        letter: NoteLetter,
        accidental: Option<Accidental>,
        divisor: u32,
        tildes: u32,
    },
    /// A run of `>`/`<` collapsed to its net octave delta (`>>` = +2, `><` = 0).
    OctaveShift { delta: i32 },

    EOF,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spanned {
    pub token: Token,
    pub span: Span,
}

/// Convert a token back to its approximate source representation.
pub fn token_to_string(token: &Token) -> String {
    match token {
        Token::NoteBlock {
            letter,
            accidental,
            divisor,
            tildes,
        } => {
            let mut s = String::new();
            s.push(letter.as_char());
            match accidental {
                Some(Accidental::Sharp) => s.push('+'),
                Some(Accidental::Flat) => s.push('-'),
                None => {}
            }
            s.push_str(&divisor.to_string());
            for _ in 0..*tildes {
                s.push('~');
            }
            s
        }
        Token::OctaveShift { delta } => {
            let ch = if *delta >= 0 { '>' } else { '<' };
            std::iter::repeat(ch)
                .take(delta.unsigned_abs() as usize)
                .collect()
        }
        Token::EOF => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_offsets_relative_to_a() {
        assert_eq!(NoteLetter::A.semitone_offset(), Some(0));
        assert_eq!(NoteLetter::C.semitone_offset(), Some(-9));
        assert_eq!(NoteLetter::B.semitone_offset(), Some(2));
        assert_eq!(NoteLetter::Rest.semitone_offset(), None);
    }

    #[test]
    fn note_block_round_trips_to_source() {
        let token = Token::NoteBlock {
            letter: NoteLetter::A,
            accidental: Some(Accidental::Sharp),
            divisor: 16,
            tildes: 2,
        };
        assert_eq!(token_to_string(&token), "a+16~~");
    }

    #[test]
    fn octave_shift_to_source() {
        assert_eq!(token_to_string(&Token::OctaveShift { delta: 2 }), ">>");
        assert_eq!(token_to_string(&Token::OctaveShift { delta: -1 }), "<");
    }
}

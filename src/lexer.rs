use crate::error::LexError;
use crate::token::{Accidental, NoteLetter, Span, Spanned, Token};

pub struct Lexer {
    chars: Vec<char>,
    /// Precomputed byte offset for each char index.
    /// `byte_offsets[i]` = byte offset of `chars[i]` in the original `&str`.
    /// `byte_offsets[chars.len()]` = total byte length (sentinel for EOF).
    byte_offsets: Vec<usize>,
    pos: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        // Build a lookup table: char index → byte offset.
        let mut byte_offsets = Vec::with_capacity(chars.len() + 1);
        let mut offset = 0;
        for ch in &chars {
            byte_offsets.push(offset);
            offset += ch.len_utf8();
        }
        byte_offsets.push(offset); // sentinel for EOF
        Lexer {
            chars,
            byte_offsets,
            pos: 0,
        }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Spanned>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let spanned = self.next_token()?;
            let is_eof = spanned.token == Token::EOF;
            tokens.push(spanned);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.get(self.pos).copied();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    /// Skip whitespace and comments. Comments run from `#` to the next line
    /// break (or EOF) and act exactly like whitespace: they separate tokens
    /// and never produce one.
    fn skip_insignificant(&mut self) {
        while self.pos < self.chars.len() {
            let ch = self.chars[self.pos];
            if ch == ' ' || ch == '\t' || ch == '\r' || ch == '\n' {
                self.pos += 1;
            } else if ch == '#' {
                while self.pos < self.chars.len() && self.chars[self.pos] != '\n' {
                    self.pos += 1;
                }
            } else {
                break;
            }
        }
    }

    /// Convert a char index to a byte offset.
    fn byte_pos_of(&self, char_idx: usize) -> usize {
        self.byte_offsets[char_idx.min(self.chars.len())]
    }

    fn spanned(&self, token: Token, start: usize) -> Spanned {
        Spanned {
            token,
            span: Span {
                start: self.byte_pos_of(start),
                end: self.byte_pos_of(self.pos),
            },
        }
    }

    fn next_token(&mut self) -> Result<Spanned, LexError> {
        self.skip_insignificant();

        if self.pos >= self.chars.len() {
            return Ok(Spanned {
                token: Token::EOF,
                span: Span {
                    start: self.byte_pos_of(self.pos),
                    end: self.byte_pos_of(self.pos),
                },
            });
        }

        let start = self.pos;
        let ch = self.chars[self.pos];

        match ch {
            '>' | '<' => self.lex_octave_shift(start),
            c => match NoteLetter::from_char(c) {
                Some(letter) => self.lex_note_block(letter, start),
                // Covers both characters outside the notation alphabet (`h`,
                // `!`, ...) and in-alphabet strays that cannot start a block
                // (a bare digit, `~`, `+`, `-`).
                None => Err(LexError::UnrecognizedCharacter {
                    ch,
                    pos: self.byte_pos_of(start),
                }),
            },
        }
    }

    /// Maximal run of `>`/`<`, collapsed to a net octave delta.
    fn lex_octave_shift(&mut self, start: usize) -> Result<Spanned, LexError> {
        let mut delta = 0i32;
        while let Some(ch) = self.peek() {
            match ch {
                '>' => delta += 1,
                '<' => delta -= 1,
                _ => break,
            }
            self.pos += 1;
        }
        Ok(self.spanned(Token::OctaveShift { delta }, start))
    }

    /// Maximal run matching `[a-g_][+-]?[0-9]+~*`. A new block begins as soon
    /// as the run ends, so `a16b4` and `a16 b4` tokenize identically.
    fn lex_note_block(&mut self, letter: NoteLetter, start: usize) -> Result<Spanned, LexError> {
        self.advance(); // consume the letter

        let accidental = match self.peek() {
            Some('+') => {
                self.advance();
                Some(Accidental::Sharp)
            }
            Some('-') => {
                self.advance();
                Some(Accidental::Flat)
            }
            _ => None,
        };

        let digits_start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        let digits: String = self.chars[digits_start..self.pos].iter().collect();
        let divisor = digits.parse::<u32>().ok().filter(|&d| d >= 1);

        let mut tildes = 0u32;
        while self.peek() == Some('~') {
            self.pos += 1;
            tildes += 1;
        }

        match divisor {
            Some(divisor) => Ok(self.spanned(
                Token::NoteBlock {
                    letter,
                    accidental,
                    divisor,
                    tildes,
                },
                start,
            )),
            // Missing, zero, or overflowing divisor.
            None => Err(LexError::MalformedNoteBlock {
                text: self.chars[start..self.pos].iter().collect(),
                pos: self.byte_pos_of(start),
            }),
        }
    }
}

use std::fmt;

#[derive(Debug)]
pub enum TfsError {
    Lex(LexError),
    Resolve(ResolveError),
    Encode(EncodeError),
}

#[derive(Debug, PartialEq)]
pub enum LexError {
    /// A character that cannot start a token appeared outside a comment.
    UnrecognizedCharacter { ch: char, pos: usize },
    /// A note letter was not followed by an unsigned integer divisor >= 1.
    MalformedNoteBlock { text: String, pos: usize },
}

#[derive(Debug, PartialEq)]
pub enum ResolveError {
    /// Zero divisor. Excluded at lex time; this is a resolver-level guard.
    InvalidDuration { pos: usize },
}

#[derive(Debug, PartialEq)]
pub enum EncodeError {
    /// A declared chunk size does not match the bytes that follow it.
    /// Indicates a programming defect, never a user input problem.
    BufferSizeMismatch { declared: u64, actual: u64 },
}

impl fmt::Display for TfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TfsError::Lex(e) => write!(f, "Lexer error: {e}"),
            TfsError::Resolve(e) => write!(f, "Resolve error: {e}"),
            TfsError::Encode(e) => write!(f, "Encode error: {e}"),
        }
    }
}

impl std::error::Error for TfsError {}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnrecognizedCharacter { ch, pos } => {
                write!(f, "Unrecognized character '{ch}' at pos {pos}")
            }
            LexError::MalformedNoteBlock { text, pos } => {
                write!(f, "Malformed note block '{text}' at pos {pos} (expected divisor >= 1)")
            }
        }
    }
}

impl std::error::Error for LexError {}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::InvalidDuration { pos } => {
                write!(f, "Invalid zero duration at pos {pos}")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::BufferSizeMismatch { declared, actual } => {
                write!(f, "Chunk size mismatch: declared {declared} bytes, got {actual}")
            }
        }
    }
}

impl std::error::Error for EncodeError {}

impl From<LexError> for TfsError {
    fn from(e: LexError) -> Self {
        TfsError::Lex(e)
    }
}

impl From<ResolveError> for TfsError {
    fn from(e: ResolveError) -> Self {
        TfsError::Resolve(e)
    }
}

impl From<EncodeError> for TfsError {
    fn from(e: EncodeError) -> Self {
        TfsError::Encode(e)
    }
}

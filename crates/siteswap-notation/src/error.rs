use std::fmt;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Syntax-level failures raised before any pattern mathematics runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Empty or whitespace-only input.
    Empty,
    /// Normalization stripped every character; nothing was left to parse.
    NoThrows,
    UnexpectedToken {
        found: String,
        expected: String,
        position: usize,
    },
    UnclosedDelimiter {
        delimiter: char,
        position: usize,
    },
}

impl ParseError {
    pub fn unexpected_token(
        found: impl Into<String>,
        expected: impl Into<String>,
        position: usize,
    ) -> Self {
        ParseError::UnexpectedToken {
            found: found.into(),
            expected: expected.into(),
            position,
        }
    }

    pub fn unclosed_delimiter(delimiter: char, position: usize) -> Self {
        ParseError::UnclosedDelimiter { delimiter, position }
    }

    /// Character offset into the normalized pattern, where known.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedToken { position, .. } => Some(*position),
            ParseError::UnclosedDelimiter { position, .. } => Some(*position),
            _ => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Pattern cannot be empty"),
            ParseError::NoThrows => write!(f, "No valid throws found in pattern"),
            ParseError::UnexpectedToken { found, expected, position } => {
                write!(f, "Expected {}, found {} at position {}", expected, found, position)
            }
            ParseError::UnclosedDelimiter { delimiter, position } => {
                write!(f, "Unclosed delimiter '{}' opened at position {}", delimiter, position)
            }
        }
    }
}

impl std::error::Error for ParseError {}

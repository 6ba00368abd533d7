use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lexical category of a siteswap pattern, decided before any numeric
/// parsing: `(a,b)` pairs make a pattern synchronous, `[ab]` groups make
/// it multiplex, a bare digit string is asynchronous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternType {
    Async,
    Sync,
    Multiplex,
    Invalid,
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternType::Async => write!(f, "async"),
            PatternType::Sync => write!(f, "sync"),
            PatternType::Multiplex => write!(f, "multiplex"),
            PatternType::Invalid => write!(f, "invalid"),
        }
    }
}

/// A single throw height: the number of beats until the thrown object
/// lands again. Written as `0-9` then `a-z` for 10-35.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Throw(u8);

impl Throw {
    /// Highest representable throw (`z`).
    pub const MAX: u8 = 35;

    /// Build a throw from a raw height. Heights above [`Throw::MAX`]
    /// have no digit and are rejected.
    pub fn new(height: u8) -> Option<Throw> {
        (height <= Self::MAX).then_some(Throw(height))
    }

    /// Decode a notation character (case-insensitive).
    pub fn from_char(c: char) -> Option<Throw> {
        match c.to_ascii_lowercase() {
            d @ '0'..='9' => Some(Throw(d as u8 - b'0')),
            l @ 'a'..='z' => Some(Throw(l as u8 - b'a' + 10)),
            _ => None,
        }
    }

    /// The notation character for this throw.
    pub fn as_char(&self) -> char {
        match self.0 {
            d @ 0..=9 => (b'0' + d) as char,
            l => (b'a' + l - 10) as char,
        }
    }

    pub fn height(&self) -> u8 {
        self.0
    }

    /// A zero throw is a rest: no object leaves the hand on this beat.
    pub fn is_rest(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Throw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Error produced when decoding a digit string into throws.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThrowParseError {
    #[error("throw sequence is empty")]
    Empty,
    #[error("invalid throw character '{0}'")]
    InvalidChar(char),
}

/// One full period of a pattern as an ordered list of throw heights.
///
/// Sequences are immutable after construction: every transformation
/// ([`rotated`](ThrowSequence::rotated), [`reduced`](ThrowSequence::reduced))
/// produces a new sequence. Beat `i` is performed by hand `i % 2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThrowSequence(Vec<Throw>);

impl ThrowSequence {
    pub fn new(throws: Vec<Throw>) -> ThrowSequence {
        ThrowSequence(throws)
    }

    /// Build a sequence from raw heights, rejecting anything above
    /// [`Throw::MAX`].
    pub fn from_heights(heights: &[u8]) -> Option<ThrowSequence> {
        heights
            .iter()
            .map(|&h| Throw::new(h))
            .collect::<Option<Vec<_>>>()
            .map(ThrowSequence)
    }

    pub fn throws(&self) -> &[Throw] {
        &self.0
    }

    pub fn heights(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().map(|t| t.height())
    }

    /// Number of beats in one full cycle.
    pub fn period(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> u32 {
        self.0.iter().map(|t| u32::from(t.height())).sum()
    }

    /// Mean throw height. By the average theorem this equals the object
    /// count exactly when the pattern is valid.
    pub fn average(&self) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        f64::from(self.sum()) / self.0.len() as f64
    }

    /// Population variance of the throw heights.
    pub fn variance(&self) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        let mean = self.average();
        self.0
            .iter()
            .map(|t| {
                let d = f64::from(t.height()) - mean;
                d * d
            })
            .sum::<f64>()
            / self.0.len() as f64
    }

    pub fn max_height(&self) -> u8 {
        self.0.iter().map(|t| t.height()).max().unwrap_or(0)
    }

    pub fn min_height(&self) -> u8 {
        self.0.iter().map(|t| t.height()).min().unwrap_or(0)
    }

    pub fn contains_rest(&self) -> bool {
        self.0.iter().any(|t| t.is_rest())
    }

    /// The sequence shifted left by `k` beats (cyclic rotation).
    pub fn rotated(&self, k: usize) -> ThrowSequence {
        if self.0.is_empty() {
            return self.clone();
        }
        let k = k % self.0.len();
        let mut throws = Vec::with_capacity(self.0.len());
        throws.extend_from_slice(&self.0[k..]);
        throws.extend_from_slice(&self.0[..k]);
        ThrowSequence(throws)
    }

    /// Collapse exact repetition to the minimal period: the shortest
    /// prefix whose repetition reproduces the whole sequence
    /// ("333333" becomes "3", "531531" becomes "531").
    pub fn reduced(&self) -> ThrowSequence {
        let len = self.0.len();
        for prefix in 1..=len / 2 {
            if len % prefix != 0 {
                continue;
            }
            if self.0.chunks(prefix).all(|chunk| chunk == &self.0[..prefix]) {
                return ThrowSequence(self.0[..prefix].to_vec());
            }
        }
        self.clone()
    }
}

impl fmt::Display for ThrowSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in &self.0 {
            write!(f, "{}", t)?;
        }
        Ok(())
    }
}

impl FromStr for ThrowSequence {
    type Err = ThrowParseError;

    /// Decode a bare async digit string. The notation crate handles the
    /// full grammar; this is the shortcut for sequences that are already
    /// known to be plain digits.
    fn from_str(s: &str) -> Result<ThrowSequence, ThrowParseError> {
        if s.is_empty() {
            return Err(ThrowParseError::Empty);
        }
        s.chars()
            .map(|c| Throw::from_char(c).ok_or(ThrowParseError::InvalidChar(c)))
            .collect::<Result<Vec<_>, _>>()
            .map(ThrowSequence)
    }
}

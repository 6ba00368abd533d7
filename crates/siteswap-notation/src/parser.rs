use crate::error::{ParseError, Result};
use crate::lexer::{Lexer, Token, CROSS_HEIGHT};
use serde::Serialize;
use siteswap_core::{PatternType, Throw, ThrowSequence};

/// A pattern string parsed down to its throw sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPattern {
    pub pattern_type: PatternType,
    pub throws: ThrowSequence,
    /// The normalized source: trimmed, case-folded, stray characters
    /// stripped.
    pub normalized: String,
}

/// Normalize raw input: trim, lowercase, and drop every character
/// outside the siteswap alphabet (whitespace included).
pub fn normalize(input: &str) -> String {
    input
        .trim()
        .to_ascii_lowercase()
        .chars()
        .filter(|c| matches!(c, '0'..='9' | 'a'..='z' | '(' | ')' | '[' | ']' | ','))
        .collect()
}

/// Classify a normalized pattern by its bracket characters alone, before
/// any numeric parsing.
pub fn classify(normalized: &str) -> PatternType {
    if normalized.is_empty() {
        PatternType::Invalid
    } else if normalized.contains('[') || normalized.contains(']') {
        PatternType::Multiplex
    } else if normalized.contains('(') || normalized.contains(')') || normalized.contains(',') {
        PatternType::Sync
    } else {
        // Normalization leaves only alphabet characters, so what remains
        // is a bare digit string.
        PatternType::Async
    }
}

/// Parse a raw pattern string into a typed throw sequence.
pub fn parse(input: &str) -> Result<ParsedPattern> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let normalized = normalize(input);
    if normalized.is_empty() {
        return Err(ParseError::NoThrows);
    }

    let pattern_type = classify(&normalized);
    let mut parser = Parser::new(&normalized);
    let throws = match pattern_type {
        PatternType::Async => parser.parse_async()?,
        PatternType::Sync => parser.parse_sync()?,
        PatternType::Multiplex => parser.parse_multiplex()?,
        PatternType::Invalid => return Err(ParseError::NoThrows),
    };

    if throws.is_empty() {
        return Err(ParseError::NoThrows);
    }

    Ok(ParsedPattern {
        pattern_type,
        throws: ThrowSequence::new(throws),
        normalized,
    })
}

/// Recursive-descent parser over the token stream of one dialect.
pub struct Parser<'source> {
    lexer: Lexer<'source>,
}

impl<'source> Parser<'source> {
    pub fn new(source: &'source str) -> Self {
        Parser {
            lexer: Lexer::new(source),
        }
    }

    /// Async: every character is one throw.
    fn parse_async(&mut self) -> Result<Vec<Throw>> {
        let mut throws = Vec::new();
        while let Some((token, position)) = self.lexer.next_token() {
            match token {
                Token::Throw(t) => throws.push(t),
                other => {
                    return Err(ParseError::unexpected_token(
                        other.to_string(),
                        "a throw digit",
                        position,
                    ))
                }
            }
        }
        Ok(throws)
    }

    /// Sync: a sequence of `(left,right)` pairs, two throws per pair. A
    /// trailing `x` on either side marks a crossing throw and carries no
    /// value of its own.
    fn parse_sync(&mut self) -> Result<Vec<Throw>> {
        let mut throws = Vec::new();

        while let Some((token, position)) = self.lexer.next_token() {
            match token {
                Token::LParen => {
                    throws.push(self.parse_sync_side(position)?);
                    self.expect(Token::Comma, ",", position)?;
                    throws.push(self.parse_sync_side(position)?);
                    self.expect(Token::RParen, ")", position)?;
                }
                other => {
                    return Err(ParseError::unexpected_token(
                        other.to_string(),
                        "(",
                        position,
                    ))
                }
            }
        }

        Ok(throws)
    }

    /// One side of a sync pair: a throw value plus an optional crossing
    /// marker. `x` lexes as throw 33, so a 33 in marker position is the
    /// marker, not a value.
    fn parse_sync_side(&mut self, open_position: usize) -> Result<Throw> {
        let value = match self.lexer.next_token() {
            Some((Token::Throw(t), _)) => t,
            Some((other, position)) => {
                return Err(ParseError::unexpected_token(
                    other.to_string(),
                    "a throw digit",
                    position,
                ))
            }
            None => return Err(ParseError::unclosed_delimiter('(', open_position)),
        };

        if let Some((Token::Throw(t), _)) = self.lexer.peek_token() {
            if t.height() == CROSS_HEIGHT {
                self.lexer.next_token();
            }
        }

        Ok(value)
    }

    /// Multiplex: bare throws interleaved with `[..]` groups; a group
    /// contributes every enclosed throw on a single beat.
    fn parse_multiplex(&mut self) -> Result<Vec<Throw>> {
        let mut throws = Vec::new();

        while let Some((token, position)) = self.lexer.next_token() {
            match token {
                Token::Throw(t) => throws.push(t),
                Token::LBracket => loop {
                    match self.lexer.next_token() {
                        Some((Token::Throw(t), _)) => throws.push(t),
                        Some((Token::RBracket, _)) => break,
                        Some((other, inner_position)) => {
                            return Err(ParseError::unexpected_token(
                                other.to_string(),
                                "a throw digit or ]",
                                inner_position,
                            ))
                        }
                        None => return Err(ParseError::unclosed_delimiter('[', position)),
                    }
                },
                other => {
                    return Err(ParseError::unexpected_token(
                        other.to_string(),
                        "a throw digit or [",
                        position,
                    ))
                }
            }
        }

        Ok(throws)
    }

    fn expect(&mut self, expected: Token, name: &str, open_position: usize) -> Result<()> {
        match self.lexer.next_token() {
            Some((token, _)) if token == expected => Ok(()),
            Some((other, position)) => Err(ParseError::unexpected_token(
                other.to_string(),
                name,
                position,
            )),
            None => Err(ParseError::unclosed_delimiter('(', open_position)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_noise() {
        assert_eq!(normalize("  4 4 1 "), "441");
        assert_eq!(normalize("5-3!1"), "531");
        assert_eq!(normalize("(4X, 2)"), "(4x,2)");
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("441"), PatternType::Async);
        assert_eq!(classify("(4,4)"), PatternType::Sync);
        assert_eq!(classify("[33]1"), PatternType::Multiplex);
        assert_eq!(classify(""), PatternType::Invalid);
    }

    #[test]
    fn test_parse_async() {
        let parsed = parse("531").unwrap();
        assert_eq!(parsed.pattern_type, PatternType::Async);
        assert_eq!(parsed.throws.to_string(), "531");
    }

    #[test]
    fn test_parse_sync_strips_cross_marker() {
        let parsed = parse("(4x,2x)(2,4)").unwrap();
        assert_eq!(parsed.pattern_type, PatternType::Sync);
        let heights: Vec<u8> = parsed.throws.heights().collect();
        assert_eq!(heights, vec![4, 2, 2, 4]);
    }

    #[test]
    fn test_parse_multiplex_groups() {
        let parsed = parse("[43]23").unwrap();
        assert_eq!(parsed.pattern_type, PatternType::Multiplex);
        let heights: Vec<u8> = parsed.throws.heights().collect();
        assert_eq!(heights, vec![4, 3, 2, 3]);
    }

    #[test]
    fn test_empty_and_whitespace_inputs() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse("   "), Err(ParseError::Empty));
        assert_eq!(parse("!?"), Err(ParseError::NoThrows));
    }

    #[test]
    fn test_unclosed_brackets() {
        assert_eq!(
            parse("[33"),
            Err(ParseError::unclosed_delimiter('[', 0))
        );
        assert!(matches!(
            parse("(4,2"),
            Err(ParseError::UnclosedDelimiter { delimiter: '(', .. })
        ));
    }
}

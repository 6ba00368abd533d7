use logos::Logos;
use siteswap_core::Throw;

/// The crossing marker `x` shares its character with throw value 33, so
/// it lexes as a throw; the sync parser reinterprets a 33 that directly
/// follows a value inside a pair as the marker.
pub const CROSS_HEIGHT: u8 = 33;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    #[regex(r"[0-9a-z]", |lex| Throw::from_char(lex.slice().chars().next()?))]
    Throw(Throw),

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,

    Error,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Throw(t) => write!(f, "throw '{}'", t),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::Comma => write!(f, ","),
            Token::Error => write!(f, "invalid character"),
        }
    }
}

/// Token stream over a normalized pattern string, with single-token
/// lookahead and character positions for diagnostics.
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, Token>,
    peeked: Option<Option<(Token, usize)>>,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Lexer {
            inner: Token::lexer(source),
            peeked: None,
        }
    }

    pub fn next_token(&mut self) -> Option<(Token, usize)> {
        if let Some(peeked) = self.peeked.take() {
            return peeked;
        }
        let token = self.inner.next()?;
        let position = self.inner.span().start;
        Some((token.unwrap_or(Token::Error), position))
    }

    pub fn peek_token(&mut self) -> Option<(Token, usize)> {
        if self.peeked.is_none() {
            self.peeked = Some(self.next_token());
        }
        self.peeked.as_ref().and_then(|x| *x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();
        while let Some((token, _)) = lexer.next_token() {
            tokens.push(token);
        }
        tokens
    }

    fn throw(height: u8) -> Token {
        Token::Throw(Throw::new(height).unwrap())
    }

    #[test]
    fn test_lex_async_digits() {
        assert_eq!(lex("441"), vec![throw(4), throw(4), throw(1)]);
    }

    #[test]
    fn test_lex_letter_throws() {
        assert_eq!(lex("b97"), vec![throw(11), throw(9), throw(7)]);
        assert_eq!(lex("z"), vec![throw(35)]);
    }

    #[test]
    fn test_lex_sync_pair() {
        assert_eq!(
            lex("(4x,2)"),
            vec![
                Token::LParen,
                throw(4),
                throw(CROSS_HEIGHT),
                Token::Comma,
                throw(2),
                Token::RParen
            ]
        );
    }

    #[test]
    fn test_lex_multiplex_group() {
        assert_eq!(
            lex("[33]1"),
            vec![
                Token::LBracket,
                throw(3),
                throw(3),
                Token::RBracket,
                throw(1)
            ]
        );
    }

    #[test]
    fn test_lexer_positions() {
        let mut lexer = Lexer::new("(4,2)");
        assert_eq!(lexer.next_token(), Some((Token::LParen, 0)));
        assert_eq!(lexer.next_token(), Some((throw(4), 1)));
    }

    #[test]
    fn test_lexer_peek() {
        let mut lexer = Lexer::new("53");
        assert_eq!(lexer.peek_token(), Some((throw(5), 0)));
        assert_eq!(lexer.peek_token(), Some((throw(5), 0)));
        assert_eq!(lexer.next_token(), Some((throw(5), 0)));
        assert_eq!(lexer.next_token(), Some((throw(3), 1)));
        assert_eq!(lexer.next_token(), None);
    }
}

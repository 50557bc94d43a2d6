//! Token types produced by the lexical stage

use serde::{Deserialize, Serialize};
use std::fmt;

/// Token categories, in classification priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    StringLiteral,
    CharLiteral,
    Assignment,
    Semicolon,
}

impl TokenKind {
    /// Declared priority order. A lexeme takes the first kind whose rule matches.
    pub const PRIORITY: [TokenKind; 7] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::StringLiteral,
        TokenKind::CharLiteral,
        TokenKind::Assignment,
        TokenKind::Semicolon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::StringLiteral => "STRING",
            TokenKind::CharLiteral => "CHAR",
            TokenKind::Assignment => "ASSIGNMENT",
            TokenKind::Semicolon => "SEMICOLON",
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::StringLiteral | TokenKind::CharLiteral
        )
    }

    pub fn is_punctuation(&self) -> bool {
        matches!(self, TokenKind::Assignment | TokenKind::Semicolon)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexeme with the 1-indexed source line it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {} '{}'", self.line, self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Identifier, "count", 3);
        assert_eq!(token.to_string(), "Line 3: IDENTIFIER 'count'");
    }

    #[test]
    fn test_kind_predicates() {
        assert!(TokenKind::CharLiteral.is_literal());
        assert!(!TokenKind::Keyword.is_literal());
        assert!(TokenKind::Semicolon.is_punctuation());
    }

    #[test]
    fn test_token_serializes_kind_name() {
        let token = Token::new(TokenKind::StringLiteral, "\"hi\"", 1);
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["kind"], "STRING_LITERAL");
        assert_eq!(json["line"], 1);
    }
}

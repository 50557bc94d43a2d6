//! Ordered pattern table mapping a lexeme to its token kind

use super::token::TokenKind;
use crate::grammar::DeclaredType;
use regex::Regex;
use std::sync::OnceLock;

fn pattern_for(kind: TokenKind) -> String {
    match kind {
        TokenKind::Keyword => format!("^({})$", DeclaredType::alternation()),
        TokenKind::Identifier => r"^[a-zA-Z_][a-zA-Z0-9_]*$".to_string(),
        TokenKind::Number => r"^-?[0-9]+(\.[0-9]+)?$".to_string(),
        TokenKind::StringLiteral => r#"^"[^"]*"$"#.to_string(),
        TokenKind::CharLiteral => r"^'.'$".to_string(),
        TokenKind::Assignment => r"^=$".to_string(),
        TokenKind::Semicolon => r"^;$".to_string(),
    }
}

fn rules() -> &'static [(TokenKind, Regex)] {
    static RULES: OnceLock<Vec<(TokenKind, Regex)>> = OnceLock::new();
    RULES.get_or_init(|| {
        TokenKind::PRIORITY
            .iter()
            .map(|&kind| {
                let regex = Regex::new(&pattern_for(kind)).expect("token pattern is a valid regex");
                (kind, regex)
            })
            .collect()
    })
}

/// Classify one lexeme. The first rule in priority order that matches wins, so
/// `int` is a keyword even though it also matches the identifier rule.
pub fn classify(lexeme: &str) -> Option<TokenKind> {
    rules()
        .iter()
        .find(|(_, regex)| regex.is_match(lexeme))
        .map(|(kind, _)| *kind)
}

/// Stateless handle over the shared rule table
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenClassifier;

impl TokenClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, lexeme: &str) -> Option<TokenKind> {
        classify(lexeme)
    }
}

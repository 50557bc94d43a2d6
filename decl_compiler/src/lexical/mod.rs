//! Lexical analysis stage
//!
//! Turns raw source text into a token list, or into a list of invalid-token
//! diagnostics. The stage never looks at statement structure.

pub mod analyzer;

use crate::config::runtime::LexicalPreferences;
use crate::results::AnalysisResult;
use crate::tokens::{Token, TokenKind};
use serde::Serialize;

pub use analyzer::{split_lexemes, LexicalAnalyzer, EMPTY_SOURCE_MESSAGE, FAILURE_HEADER};

/// Per-kind token counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TokenCounts {
    pub total: usize,
    pub keywords: usize,
    pub identifiers: usize,
    pub literals: usize,
    pub assignments: usize,
    pub semicolons: usize,
}

impl TokenCounts {
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut counts = Self {
            total: tokens.len(),
            ..Self::default()
        };

        for token in tokens {
            match token.kind {
                TokenKind::Keyword => counts.keywords += 1,
                TokenKind::Identifier => counts.identifiers += 1,
                TokenKind::Number | TokenKind::StringLiteral | TokenKind::CharLiteral => {
                    counts.literals += 1
                }
                TokenKind::Assignment => counts.assignments += 1,
                TokenKind::Semicolon => counts.semicolons += 1,
            }
        }

        counts
    }
}

/// Tokenize with default preferences
pub fn analyze(source: &str) -> AnalysisResult<Vec<Token>> {
    LexicalAnalyzer::new().analyze(source)
}

/// Tokenize with custom runtime preferences
pub fn analyze_with_preferences(
    source: &str,
    preferences: LexicalPreferences,
) -> AnalysisResult<Vec<Token>> {
    LexicalAnalyzer::with_preferences(preferences).analyze(source)
}

pub fn get_token_counts(tokens: &[Token]) -> TokenCounts {
    TokenCounts::from_tokens(tokens)
}

/// Startup check that every lexical code has registry metadata
pub fn init_lexical_analysis_logging() -> Result<(), String> {
    use crate::logging::codes;

    for code in [
        codes::lexical::EMPTY_SOURCE,
        codes::lexical::INVALID_TOKEN,
        codes::success::TOKENIZATION_COMPLETE,
    ] {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Lexical code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_counts() {
        let result = analyze("int a = 1;\nchar c = 'z';\nString s = \"\";");
        let counts = get_token_counts(&result.payload);

        assert_eq!(
            counts,
            TokenCounts {
                total: 15,
                keywords: 3,
                identifiers: 3,
                literals: 3,
                assignments: 3,
                semicolons: 3,
            }
        );
    }

    #[test]
    fn test_init_validation() {
        assert!(init_lexical_analysis_logging().is_ok());
    }

    #[test]
    fn test_preferences_do_not_change_result() {
        let source = "long big = 123;";
        let quiet = analyze_with_preferences(
            source,
            LexicalPreferences {
                collect_detailed_metrics: false,
            },
        );
        assert_eq!(quiet, analyze(source));
    }
}

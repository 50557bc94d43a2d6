//! Line-oriented lexer: split each line into lexemes, classify each one

use super::TokenCounts;
use crate::config::runtime::LexicalPreferences;
use crate::grammar::{ASSIGNMENT, STATEMENT_SEPARATOR};
use crate::logging::codes;
use crate::results::{AnalysisResult, Diagnostic, Stage};
use crate::tokens::{Token, TokenClassifier};

pub const EMPTY_SOURCE_MESSAGE: &str = "There is no code open to analyze";
pub const FAILURE_HEADER: &str = "Lexical Analysis Failed!";

/// Split a trimmed line into lexemes.
///
/// Whitespace separates lexemes and is dropped. `=` and `;` always end the
/// current lexeme and form lexemes of their own, so `x=5;` yields `x`, `=`,
/// `5`, `;`. No lexeme is ever empty.
pub fn split_lexemes(line: &str) -> Vec<&str> {
    let mut lexemes = Vec::new();
    let mut start: Option<usize> = None;

    for (index, ch) in line.char_indices() {
        if ch.is_whitespace() || ch == ASSIGNMENT || ch == STATEMENT_SEPARATOR {
            if let Some(begin) = start.take() {
                lexemes.push(&line[begin..index]);
            }
            if ch == ASSIGNMENT || ch == STATEMENT_SEPARATOR {
                lexemes.push(&line[index..index + ch.len_utf8()]);
            }
        } else if start.is_none() {
            start = Some(index);
        }
    }

    if let Some(begin) = start {
        lexemes.push(&line[begin..]);
    }

    lexemes
}

/// Lexical analyzer. Holds only immutable configuration; every call to
/// [`LexicalAnalyzer::analyze`] starts from scratch.
#[derive(Debug, Clone)]
pub struct LexicalAnalyzer {
    classifier: TokenClassifier,
    preferences: LexicalPreferences,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self::with_preferences(LexicalPreferences::default())
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            classifier: TokenClassifier::new(),
            preferences,
        }
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    /// Tokenize the whole text.
    ///
    /// Every invalid lexeme is reported, in line order and then left to right.
    /// If any lexeme is invalid the token list is discarded.
    pub fn analyze(&self, source: &str) -> AnalysisResult<Vec<Token>> {
        if source.trim().is_empty() {
            log_error!(codes::lexical::EMPTY_SOURCE, EMPTY_SOURCE_MESSAGE);
            return AnalysisResult::empty_input(EMPTY_SOURCE_MESSAGE);
        }

        log_debug!("Starting lexical analysis", "bytes" => source.len());

        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        for (index, raw_line) in source.split('\n').enumerate() {
            let line_number = index + 1;
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            for lexeme in split_lexemes(line) {
                match self.classifier.classify(lexeme) {
                    Some(kind) => tokens.push(Token::new(kind, lexeme, line_number)),
                    None => errors.push(Diagnostic::InvalidToken {
                        line: line_number,
                        lexeme: lexeme.to_string(),
                    }),
                }
            }
        }

        if !errors.is_empty() {
            errors.iter().for_each(Diagnostic::log);
            return AnalysisResult::failed(FAILURE_HEADER, errors);
        }

        if self.preferences.collect_detailed_metrics {
            let counts = TokenCounts::from_tokens(&tokens);
            log_success!(codes::success::TOKENIZATION_COMPLETE,
                "Lexical analysis completed successfully",
                "token_count" => counts.total,
                "keywords" => counts.keywords,
                "identifiers" => counts.identifiers,
                "literals" => counts.literals,
                "assignments" => counts.assignments,
                "semicolons" => counts.semicolons
            );
        } else {
            log_success!(codes::success::TOKENIZATION_COMPLETE,
                "Lexical analysis completed successfully",
                "token_count" => tokens.len()
            );
        }

        AnalysisResult::passed(Stage::Lexical, tokens)
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenKind;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_split_lexemes() {
        assert_eq!(split_lexemes("int x = 5;"), vec!["int", "x", "=", "5", ";"]);
        assert_eq!(split_lexemes("int x=5;"), vec!["int", "x", "=", "5", ";"]);
        assert_eq!(split_lexemes("a\t\tb"), vec!["a", "b"]);
        assert_eq!(split_lexemes("=;="), vec!["=", ";", "="]);
        assert_eq!(split_lexemes("\"a b\""), vec!["\"a", "b\""]);
        assert!(split_lexemes("").is_empty());
    }

    #[test]
    fn test_well_formed_declaration() {
        let result = LexicalAnalyzer::new().analyze("int x = 5;");

        assert!(result.success);
        assert_eq!(result.message, "Lexical Analysis Passed!");
        assert!(result.errors.is_empty());
        assert_eq!(
            kinds(&result.payload),
            vec![
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Assignment,
                TokenKind::Number,
                TokenKind::Semicolon,
            ]
        );
        assert!(result.payload.iter().all(|t| t.line == 1));
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        for source in ["", "   ", "\n\n\t\n"] {
            let result = LexicalAnalyzer::new().analyze(source);
            assert!(!result.success);
            assert_eq!(result.message, "There is no code open to analyze");
            assert!(result.errors.is_empty());
            assert!(result.payload.is_empty());
        }
    }

    #[test]
    fn test_invalid_lexemes_are_all_reported_in_order() {
        let source = "int @x = 5;\n\nchar c = 'ab' #;";
        let result = LexicalAnalyzer::new().analyze(source);

        assert!(!result.success);
        assert!(result.payload.is_empty());
        assert_eq!(
            result.error_messages(),
            vec![
                "Line 1: Invalid token '@x'",
                "Line 3: Invalid token ''ab''",
                "Line 3: Invalid token '#'",
            ]
        );
        assert_eq!(
            result.message,
            "Lexical Analysis Failed!\n\nLine 1: Invalid token '@x'\nLine 3: Invalid token ''ab''\nLine 3: Invalid token '#'"
        );
    }

    #[test]
    fn test_blank_lines_keep_original_numbering() {
        let result = LexicalAnalyzer::new().analyze("\n\n  int a = 1;  \r\n\ndouble b = 2.5;");

        assert!(result.success);
        assert_eq!(result.payload.first().map(|t| t.line), Some(3));
        assert_eq!(result.payload.last().map(|t| t.line), Some(5));
    }

    #[test]
    fn test_lexical_stage_ignores_statement_shape() {
        // Tokens are valid even though the statement is nonsense
        let result = LexicalAnalyzer::new().analyze("= ; int int 5 x");
        assert!(result.success);
        assert_eq!(result.payload.len(), 6);
    }

    #[test]
    fn test_idempotent() {
        let analyzer = LexicalAnalyzer::new();
        let source = "String s = \"hi\";\nboolean b = true;";
        assert_eq!(analyzer.analyze(source), analyzer.analyze(source));
    }

    #[test]
    fn test_string_with_space_is_split() {
        let result = LexicalAnalyzer::new().analyze("String s = \"hello world\";");
        assert_eq!(
            result.error_messages(),
            vec![
                "Line 1: Invalid token '\"hello'",
                "Line 1: Invalid token 'world\"'",
            ]
        );
    }
}

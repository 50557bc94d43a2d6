//! Per-line diagnostics reported by the analysis stages
//!
//! The `Display` text of each variant is the exact user-facing diagnostic line.

use super::stage::Stage;
use crate::grammar::DeclaredType;
use crate::logging::{codes, Code};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    #[error("Line {line}: Invalid token '{lexeme}'")]
    InvalidToken { line: usize, lexeme: String },

    #[error("Line {line}: Missing semicolon")]
    MissingSeparator { line: usize },

    #[error("Line {line}: Invalid declaration syntax")]
    InvalidDeclarationSyntax { line: usize },

    #[error("Line {line}: '{name}' already declared.")]
    DuplicateDeclaration {
        line: usize,
        name: String,
        first_declared_on: usize,
    },

    #[error("Line {line}: Invalid value '{value}' for type '{declared_type}'")]
    TypeMismatch {
        line: usize,
        value: String,
        declared_type: DeclaredType,
    },
}

impl Diagnostic {
    /// 1-indexed source line
    pub fn line(&self) -> usize {
        match self {
            Diagnostic::InvalidToken { line, .. }
            | Diagnostic::MissingSeparator { line }
            | Diagnostic::InvalidDeclarationSyntax { line }
            | Diagnostic::DuplicateDeclaration { line, .. }
            | Diagnostic::TypeMismatch { line, .. } => *line,
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            Diagnostic::InvalidToken { .. } => Stage::Lexical,
            Diagnostic::MissingSeparator { .. } | Diagnostic::InvalidDeclarationSyntax { .. } => {
                Stage::Syntax
            }
            Diagnostic::DuplicateDeclaration { .. } | Diagnostic::TypeMismatch { .. } => {
                Stage::Semantic
            }
        }
    }

    pub fn error_code(&self) -> Code {
        match self {
            Diagnostic::InvalidToken { .. } => codes::lexical::INVALID_TOKEN,
            Diagnostic::MissingSeparator { .. } => codes::syntax::MISSING_SEMICOLON,
            Diagnostic::InvalidDeclarationSyntax { .. } => codes::syntax::INVALID_DECLARATION,
            Diagnostic::DuplicateDeclaration { .. } => codes::semantic::DUPLICATE_DECLARATION,
            Diagnostic::TypeMismatch { .. } => codes::semantic::TYPE_MISMATCH,
        }
    }

    /// Send this diagnostic to the global logger
    pub(crate) fn log(&self) {
        let message = self.to_string();
        log_error!(self.error_code(), &message,
            line = self.line(),
            "stage" => self.stage()
        );
    }
}

impl Serialize for Diagnostic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Diagnostic", 4)?;
        state.serialize_field("code", self.error_code().as_str())?;
        state.serialize_field("stage", &self.stage())?;
        state.serialize_field("line", &self.line())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_strings() {
        let cases = [
            (
                Diagnostic::InvalidToken {
                    line: 2,
                    lexeme: "@x".to_string(),
                },
                "Line 2: Invalid token '@x'",
            ),
            (
                Diagnostic::MissingSeparator { line: 1 },
                "Line 1: Missing semicolon",
            ),
            (
                Diagnostic::InvalidDeclarationSyntax { line: 4 },
                "Line 4: Invalid declaration syntax",
            ),
            (
                Diagnostic::DuplicateDeclaration {
                    line: 2,
                    name: "x".to_string(),
                    first_declared_on: 1,
                },
                "Line 2: 'x' already declared.",
            ),
            (
                Diagnostic::TypeMismatch {
                    line: 1,
                    value: "5".to_string(),
                    declared_type: DeclaredType::Boolean,
                },
                "Line 1: Invalid value '5' for type 'boolean'",
            ),
        ];

        for (diagnostic, expected) in cases {
            assert_eq!(diagnostic.to_string(), expected);
        }
    }

    #[test]
    fn test_stage_and_code_mapping() {
        let diagnostic = Diagnostic::MissingSeparator { line: 3 };
        assert_eq!(diagnostic.stage(), Stage::Syntax);
        assert_eq!(diagnostic.error_code(), codes::syntax::MISSING_SEMICOLON);
        assert_eq!(diagnostic.line(), 3);
    }

    #[test]
    fn test_serialization() {
        let diagnostic = Diagnostic::TypeMismatch {
            line: 7,
            value: "'ab'".to_string(),
            declared_type: DeclaredType::Char,
        };
        let json = serde_json::to_value(&diagnostic).unwrap();

        assert_eq!(json["code"], "E062");
        assert_eq!(json["stage"], "semantic");
        assert_eq!(json["line"], 7);
        assert_eq!(json["message"], "Line 7: Invalid value ''ab'' for type 'char'");
    }
}

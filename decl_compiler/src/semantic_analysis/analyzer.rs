//! Builds the symbol table and checks declared values

use super::type_checker::TypeChecker;
use crate::config::runtime::SemanticPreferences;
use crate::grammar::{parse_declaration, STATEMENT_SEPARATOR};
use crate::logging::codes;
use crate::results::{AnalysisResult, Diagnostic, Stage};
use crate::symbols::{SymbolEntry, SymbolTable};

pub const EMPTY_SOURCE_MESSAGE: &str = "No code to analyze";
pub const FAILURE_HEADER: &str = "Semantic Analysis Failed!";

/// Drop one trailing `;` if it is the last character, then trim
fn statement_body(line: &str) -> &str {
    line.strip_suffix(STATEMENT_SEPARATOR).unwrap_or(line).trim()
}

#[derive(Debug, Clone)]
pub struct SemanticAnalyzer {
    checker: TypeChecker,
    preferences: SemanticPreferences,
}

impl SemanticAnalyzer {
    /// Pattern checks only. Environment defaults are not consulted, so the
    /// result depends on the text alone.
    pub fn new() -> Self {
        Self::with_preferences(SemanticPreferences {
            enforce_numeric_ranges: false,
        })
    }

    pub fn with_preferences(preferences: SemanticPreferences) -> Self {
        Self {
            checker: TypeChecker::new(preferences.enforce_numeric_ranges),
            preferences,
        }
    }

    pub fn preferences(&self) -> &SemanticPreferences {
        &self.preferences
    }

    /// Check every declaration line in order.
    ///
    /// Lines that are not declarations are skipped here; rejecting them is the
    /// syntax stage's job. A redeclared name is reported and the first entry
    /// wins; its value is not type-checked. Only values that pass the type
    /// check are entered. On failure the table is discarded.
    pub fn analyze(&self, source: &str) -> AnalysisResult<SymbolTable> {
        if source.trim().is_empty() {
            log_error!(codes::semantic::EMPTY_SOURCE, EMPTY_SOURCE_MESSAGE);
            return AnalysisResult::empty_input(EMPTY_SOURCE_MESSAGE);
        }

        log_debug!("Starting semantic analysis",
            "enforce_numeric_ranges" => self.preferences.enforce_numeric_ranges
        );

        let mut table = SymbolTable::new();
        let mut errors = Vec::new();
        let mut skipped = 0usize;

        for (index, raw_line) in source.split('\n').enumerate() {
            let line_number = index + 1;
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            let Some(parts) = parse_declaration(statement_body(line)) else {
                skipped += 1;
                continue;
            };

            // Existence before compatibility
            if let Some(first_declared_on) = table.check_duplicate(parts.name) {
                errors.push(Diagnostic::DuplicateDeclaration {
                    line: line_number,
                    name: parts.name.to_string(),
                    first_declared_on,
                });
                continue;
            }

            if !self.checker.is_compatible(parts.declared_type, parts.value) {
                errors.push(Diagnostic::TypeMismatch {
                    line: line_number,
                    value: parts.value.to_string(),
                    declared_type: parts.declared_type,
                });
                continue;
            }

            let entry = SymbolEntry::new(parts.name, parts.declared_type, parts.value, line_number);
            if let Err(error) = table.insert(entry) {
                log_warning!("Symbol insert rejected after duplicate check",
                    "code" => error.error_code(),
                    "error" => error
                );
            }
        }

        if skipped > 0 {
            log_debug!("Skipped lines that are not declarations", "count" => skipped);
        }

        if !errors.is_empty() {
            errors.iter().for_each(Diagnostic::log);
            return AnalysisResult::failed(FAILURE_HEADER, errors);
        }

        log_success!(codes::success::SEMANTIC_ANALYSIS_COMPLETE,
            "Semantic analysis completed successfully",
            "symbols" => table.len()
        );

        AnalysisResult::passed(Stage::Semantic, table)
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::DeclaredType;
    use assert_matches::assert_matches;

    fn lenient() -> SemanticAnalyzer {
        SemanticAnalyzer::with_preferences(SemanticPreferences {
            enforce_numeric_ranges: false,
        })
    }

    #[test]
    fn test_builds_table_in_source_order() {
        let source = "int count = 10;\nString name = \"Ann\";\n\nboolean ok = true;";
        let result = lenient().analyze(source);

        assert!(result.success);
        assert_eq!(result.message, "Semantic Analysis Passed!");
        assert_eq!(
            result.payload.names().collect::<Vec<_>>(),
            vec!["count", "name", "ok"]
        );

        let ok = result.payload.get("ok").unwrap();
        assert_eq!(ok.declared_type, DeclaredType::Boolean);
        assert_eq!(ok.raw_value, "true");
        assert_eq!(ok.declared_on_line, 4);
    }

    #[test]
    fn test_duplicate_reported_before_type_check() {
        let source = "int x = 1;\nint x = abc;";
        let result = lenient().analyze(source);

        assert!(!result.success);
        assert_eq!(result.errors.len(), 1);
        assert_matches!(
            &result.errors[0],
            Diagnostic::DuplicateDeclaration { line: 2, first_declared_on: 1, name } if name == "x"
        );
        assert!(result.payload.is_empty());
    }

    #[test]
    fn test_type_mismatch_message() {
        let result = lenient().analyze("boolean flag = 5;\nchar c = 'ab';");

        assert!(!result.success);
        assert_eq!(
            result.message,
            "Semantic Analysis Failed!\n\n\
             Line 1: Invalid value '5' for type 'boolean'\n\
             Line 2: Invalid value ''ab'' for type 'char'"
        );
    }

    #[test]
    fn test_mismatched_entry_is_not_entered() {
        let result = lenient().analyze("int x = 1.5;\nint x = 2;");

        assert_eq!(
            result.error_messages(),
            vec!["Line 1: Invalid value '1.5' for type 'int'"]
        );
    }

    #[test]
    fn test_non_declaration_lines_are_skipped() {
        let result = lenient().analyze("hello world\nint x = 1;");
        assert!(result.success);
        assert_eq!(result.payload.len(), 1);
    }

    #[test]
    fn test_semicolon_stripped_only_at_end() {
        let result = lenient().analyze("String s = \"a;b\";\nint y = 2");
        assert!(result.success);
        assert_eq!(result.payload.get("s").unwrap().raw_value, "\"a;b\"");
        assert_eq!(result.payload.get("y").unwrap().raw_value, "2");
    }

    #[test]
    fn test_unterminated_declaration_is_entered() {
        // The terminator is optional here; the syntax stage reports it
        let result = lenient().analyze("int x = 1");

        assert!(result.success);
        assert!(result.errors.is_empty());
        assert_eq!(result.payload.len(), 1);
        let x = result.payload.get("x").unwrap();
        assert_eq!(x.raw_value, "1");
        assert_eq!(x.declared_on_line, 1);
    }

    #[test]
    fn test_idempotent() {
        let analyzer = lenient();
        let valid = "int a = 1;\nString s = \"x\";";
        let invalid = "int a = 1;\nint a = 2;\nboolean b = 5;";

        assert_eq!(analyzer.analyze(valid), analyzer.analyze(valid));

        let first = analyzer.analyze(invalid);
        assert_eq!(first.errors.len(), 2);
        assert_eq!(first, analyzer.analyze(invalid));
    }

    #[test]
    fn test_numeric_range_preference() {
        let strict = SemanticAnalyzer::with_preferences(SemanticPreferences {
            enforce_numeric_ranges: true,
        });

        assert!(lenient().analyze("byte b = 200;").success);

        let result = strict.analyze("byte b = 200;");
        assert_matches!(&result.errors[..], [Diagnostic::TypeMismatch { line: 1, .. }]);
    }

    #[test]
    fn test_default_analyzer_ignores_numeric_ranges() {
        let analyzer = SemanticAnalyzer::new();
        assert!(!analyzer.preferences().enforce_numeric_ranges);
        assert!(analyzer.analyze("byte b = 200;").success);
        assert!(SemanticAnalyzer::default().analyze("byte b = 200;").success);
    }

    #[test]
    fn test_empty_input() {
        let result = lenient().analyze("\n\n");
        assert!(!result.success);
        assert_eq!(result.message, "No code to analyze");
        assert!(result.errors.is_empty());
    }
}

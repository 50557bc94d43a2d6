//! Per-line statement shape validation

use crate::grammar::{is_declaration, STATEMENT_SEPARATOR};
use crate::logging::codes;
use crate::results::{AnalysisResult, Diagnostic, Stage};

pub const EMPTY_SOURCE_MESSAGE: &str = "No code to analyze";
pub const FAILURE_HEADER: &str = "Syntax Analysis Failed";

/// Check one trimmed, non-blank line. A missing terminator is reported alone;
/// the shape check only runs on terminated lines.
pub fn check_line(line: &str, line_number: usize) -> Option<Diagnostic> {
    let Some(statement) = line.strip_suffix(STATEMENT_SEPARATOR) else {
        return Some(Diagnostic::MissingSeparator { line: line_number });
    };

    if is_declaration(statement.trim()) {
        None
    } else {
        Some(Diagnostic::InvalidDeclarationSyntax { line: line_number })
    }
}

/// Syntax analyzer. Reads the raw text directly; it does not consume tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyntaxAnalyzer;

impl SyntaxAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, source: &str) -> AnalysisResult<()> {
        if source.trim().is_empty() {
            log_error!(codes::syntax::EMPTY_SOURCE, EMPTY_SOURCE_MESSAGE);
            return AnalysisResult::empty_input(EMPTY_SOURCE_MESSAGE);
        }

        log_debug!("Starting syntax analysis", "bytes" => source.len());

        let mut statements = 0usize;
        let errors: Vec<Diagnostic> = source
            .split('\n')
            .enumerate()
            .filter_map(|(index, raw_line)| {
                let line = raw_line.trim();
                if line.is_empty() {
                    return None;
                }
                statements += 1;
                check_line(line, index + 1)
            })
            .collect();

        if !errors.is_empty() {
            errors.iter().for_each(Diagnostic::log);
            return AnalysisResult::failed(FAILURE_HEADER, errors);
        }

        log_success!(codes::success::SYNTAX_VALIDATION_PASSED,
            "Syntax analysis completed successfully",
            "statements" => statements
        );

        AnalysisResult::passed(Stage::Syntax, ())
    }
}

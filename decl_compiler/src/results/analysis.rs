//! Outcome of one stage invocation

use super::diagnostic::Diagnostic;
use super::stage::Stage;
use serde::Serialize;

/// Result of running one stage over a source text.
///
/// Built once per invocation and never mutated afterwards. On failure the
/// payload is its empty default.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult<T> {
    pub success: bool,
    pub message: String,
    pub errors: Vec<Diagnostic>,
    pub payload: T,
}

impl<T> AnalysisResult<T> {
    pub fn passed(stage: Stage, payload: T) -> Self {
        Self {
            success: true,
            message: format!("{} Passed!", stage.title()),
            errors: Vec::new(),
            payload,
        }
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl<T: Default> AnalysisResult<T> {
    /// Failure with a header line, a blank line, then one diagnostic per line
    pub fn failed(header: &str, errors: Vec<Diagnostic>) -> Self {
        let listing = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            success: false,
            message: format!("{}\n\n{}", header, listing),
            errors,
            payload: T::default(),
        }
    }

    /// Failure for blank input: no diagnostics, nothing scanned
    pub fn empty_input(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            errors: Vec::new(),
            payload: T::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passed_message() {
        let result = AnalysisResult::passed(Stage::Semantic, 3usize);
        assert!(result.success);
        assert_eq!(result.message, "Semantic Analysis Passed!");
        assert_eq!(result.payload, 3);
    }

    #[test]
    fn test_failed_lists_diagnostics_after_blank_line() {
        let result: AnalysisResult<Vec<u8>> = AnalysisResult::failed(
            "Syntax Analysis Failed",
            vec![
                Diagnostic::MissingSeparator { line: 1 },
                Diagnostic::InvalidDeclarationSyntax { line: 3 },
            ],
        );

        assert!(!result.success);
        assert!(result.payload.is_empty());
        assert_eq!(
            result.message,
            "Syntax Analysis Failed\n\nLine 1: Missing semicolon\nLine 3: Invalid declaration syntax"
        );
        assert_eq!(result.error_messages().len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let result: AnalysisResult<()> = AnalysisResult::empty_input("No code to analyze");
        assert!(!result.success);
        assert!(result.errors.is_empty());
        assert_eq!(result.message, "No code to analyze");
    }
}

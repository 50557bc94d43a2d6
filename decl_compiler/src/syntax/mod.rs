//! Syntax analysis stage
//!
//! Every non-blank line must be a single `<type> <identifier> = <value>;`
//! statement. The stage reports every offending line and produces no payload.

pub mod analyzer;

use crate::results::AnalysisResult;

pub use analyzer::{check_line, SyntaxAnalyzer, EMPTY_SOURCE_MESSAGE, FAILURE_HEADER};

pub fn analyze(source: &str) -> AnalysisResult<()> {
    SyntaxAnalyzer::new().analyze(source)
}

/// Startup check that every syntax code has registry metadata
pub fn init_syntax_logging() -> Result<(), String> {
    use crate::logging::codes;

    for code in [
        codes::syntax::EMPTY_SOURCE,
        codes::syntax::MISSING_SEMICOLON,
        codes::syntax::INVALID_DECLARATION,
        codes::success::SYNTAX_VALIDATION_PASSED,
    ] {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Syntax code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    Ok(())
}

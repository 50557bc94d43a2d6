//! Semantic analysis stage
//!
//! Builds the symbol table from well-formed declarations, rejects redeclared
//! names and checks each value against its declared type.

pub mod analyzer;
pub mod type_checker;

use crate::config::runtime::SemanticPreferences;
use crate::results::AnalysisResult;
use crate::symbols::SymbolTable;

pub use analyzer::{SemanticAnalyzer, EMPTY_SOURCE_MESSAGE, FAILURE_HEADER};
pub use type_checker::{value_in_range, value_matches, TypeChecker};

/// Pattern-only analysis; see [`analyze_with_preferences`] for width checks
pub fn analyze(source: &str) -> AnalysisResult<SymbolTable> {
    SemanticAnalyzer::new().analyze(source)
}

pub fn analyze_with_preferences(
    source: &str,
    preferences: SemanticPreferences,
) -> AnalysisResult<SymbolTable> {
    SemanticAnalyzer::with_preferences(preferences).analyze(source)
}

/// Startup check that every semantic code has registry metadata
pub fn init_semantic_logging() -> Result<(), String> {
    use crate::logging::codes;

    for code in [
        codes::semantic::EMPTY_SOURCE,
        codes::semantic::DUPLICATE_DECLARATION,
        codes::semantic::TYPE_MISMATCH,
        codes::success::SEMANTIC_ANALYSIS_COMPLETE,
    ] {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Semantic code {} not found in metadata registry",
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
    fn test_semantic_codes_registered() {
        assert!(init_semantic_logging().is_ok());
    }

    #[test]
    fn test_module_api_range_checks() {
        assert!(analyze("short s = 40000;").success);

        let strict = SemanticPreferences {
            enforce_numeric_ranges: true,
        };
        let result = analyze_with_preferences("short s = 40000;", strict);
        assert_eq!(
            result.error_messages(),
            vec!["Line 1: Invalid value '40000' for type 'short'"]
        );
    }
}

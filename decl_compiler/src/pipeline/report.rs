use super::output::StageOutcome;
use crate::results::{AnalysisResult, Diagnostic, Stage};
use crate::symbols::SymbolTable;
use crate::tokens::Token;

/// Result of one stage run through the driver, with its typed payload
#[derive(Debug, Clone, PartialEq)]
pub enum StageReport {
    Lexical(AnalysisResult<Vec<Token>>),
    Syntax(AnalysisResult<()>),
    Semantic(AnalysisResult<SymbolTable>),
}

impl StageReport {
    pub fn stage(&self) -> Stage {
        match self {
            StageReport::Lexical(_) => Stage::Lexical,
            StageReport::Syntax(_) => Stage::Syntax,
            StageReport::Semantic(_) => Stage::Semantic,
        }
    }

    pub fn success(&self) -> bool {
        match self {
            StageReport::Lexical(result) => result.success,
            StageReport::Syntax(result) => result.success,
            StageReport::Semantic(result) => result.success,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            StageReport::Lexical(result) => &result.message,
            StageReport::Syntax(result) => &result.message,
            StageReport::Semantic(result) => &result.message,
        }
    }

    pub fn errors(&self) -> &[Diagnostic] {
        match self {
            StageReport::Lexical(result) => &result.errors,
            StageReport::Syntax(result) => &result.errors,
            StageReport::Semantic(result) => &result.errors,
        }
    }

    pub fn outcome(&self) -> StageOutcome {
        StageOutcome {
            stage: self.stage(),
            success: self.success(),
            message: self.message().to_string(),
            errors: self.errors().to_vec(),
        }
    }
}

use super::report::StageReport;
use crate::lexical::TokenCounts;
use crate::results::{Diagnostic, Stage};
use crate::session::{AnalysisSession, StageFlags};
use crate::symbols::SymbolTable;
use crate::tokens::Token;
use serde::Serialize;

/// Outcome of one executed stage, without its payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageOutcome {
    pub stage: Stage,
    pub success: bool,
    pub message: String,
    pub errors: Vec<Diagnostic>,
}

/// Everything a host needs to render a run: what ran, how it went and what
/// the session holds afterwards
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutput {
    pub source_path: Option<String>,
    pub stages: Vec<StageOutcome>,
    pub flags: StageFlags,
    pub token_counts: TokenCounts,
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,
}

impl PipelineOutput {
    pub fn new(source_path: Option<String>, reports: &[StageReport], session: &AnalysisSession) -> Self {
        Self {
            source_path,
            stages: reports.iter().map(StageReport::outcome).collect(),
            flags: session.flags(),
            token_counts: TokenCounts::from_tokens(session.tokens()),
            tokens: session.tokens().to_vec(),
            symbols: session.symbols().clone(),
        }
    }

    /// True when at least one stage ran and none failed
    pub fn all_passed(&self) -> bool {
        !self.stages.is_empty() && self.stages.iter().all(|outcome| outcome.success)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

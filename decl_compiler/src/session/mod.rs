//! Per-user analysis session
//!
//! Records stage outcomes and the artifacts of the last successful runs. The
//! session does not run stages or block them; callers consult [`AnalysisSession::can_run`]
//! before invoking a stage. One session belongs to one caller; wrap it in a
//! mutex if it must be shared.

pub mod state;

pub use state::StageFlags;

use crate::logging::codes;
use crate::results::Stage;
use crate::symbols::SymbolTable;
use crate::tokens::Token;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisSession {
    flags: StageFlags,
    tokens: Vec<Token>,
    symbols: SymbolTable,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark source as loaded (or unloaded). Either way, previous results are dropped.
    pub fn record_source_loaded(&mut self, loaded: bool) {
        self.flags = self.flags.with_source_loaded(loaded);
        self.tokens.clear();
        self.symbols = SymbolTable::default();
    }

    /// Tokens are kept only on a pass. Syntax and semantic passes are cleared
    /// in both cases.
    pub fn record_lexical(&mut self, passed: bool, tokens: Vec<Token>) {
        self.flags = self.flags.with_lexical(passed);
        self.tokens = if passed { tokens } else { Vec::new() };
        self.symbols = SymbolTable::default();
    }

    pub fn record_syntax(&mut self, passed: bool) {
        self.flags = self.flags.with_syntax(passed);
        self.symbols = SymbolTable::default();
    }

    pub fn record_semantic(&mut self, passed: bool, symbols: SymbolTable) {
        self.flags = self.flags.with_semantic(passed);
        self.symbols = if self.flags.semantic_passed {
            symbols
        } else {
            SymbolTable::default()
        };
    }

    /// Back to the initial state, unconditionally
    pub fn reset(&mut self) {
        *self = Self::default();
        log_success!(codes::success::SESSION_RESET, "Analysis session reset");
    }

    pub fn can_run(&self, stage: Stage) -> bool {
        self.flags.can_run(stage)
    }

    pub fn flags(&self) -> StageFlags {
        self.flags
    }

    pub fn source_loaded(&self) -> bool {
        self.flags.source_loaded
    }

    pub fn lexical_passed(&self) -> bool {
        self.flags.lexical_passed
    }

    pub fn syntax_passed(&self) -> bool {
        self.flags.syntax_passed
    }

    pub fn semantic_passed(&self) -> bool {
        self.flags.semantic_passed
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::DeclaredType;
    use crate::symbols::SymbolEntry;
    use crate::tokens::TokenKind;

    fn sample_tokens() -> Vec<Token> {
        vec![
            Token::new(TokenKind::Keyword, "int", 1),
            Token::new(TokenKind::Identifier, "x", 1),
        ]
    }

    fn sample_symbols() -> SymbolTable {
        let mut table = SymbolTable::new();
        table
            .insert(SymbolEntry::new("x", DeclaredType::Int, "1", 1))
            .unwrap();
        table
    }

    fn fully_passed() -> AnalysisSession {
        let mut session = AnalysisSession::new();
        session.record_source_loaded(true);
        session.record_lexical(true, sample_tokens());
        session.record_syntax(true);
        session.record_semantic(true, sample_symbols());
        session
    }

    #[test]
    fn test_full_run_keeps_artifacts() {
        let session = fully_passed();
        assert!(session.semantic_passed());
        assert_eq!(session.tokens().len(), 2);
        assert!(session.symbols().contains("x"));
    }

    #[test]
    fn test_repeat_lexical_pass_resets_downstream() {
        let mut session = AnalysisSession::new();
        session.record_lexical(true, sample_tokens());
        session.record_syntax(true);
        session.record_lexical(true, sample_tokens());

        assert!(session.lexical_passed());
        assert!(!session.syntax_passed());
        assert!(!session.semantic_passed());
    }

    #[test]
    fn test_lexical_failure_clears_tokens() {
        let mut session = fully_passed();
        session.record_lexical(false, sample_tokens());

        assert!(session.tokens().is_empty());
        assert!(session.symbols().is_empty());
        assert!(!session.can_run(Stage::Syntax));
    }

    #[test]
    fn test_semantic_failure_clears_symbols() {
        let mut session = fully_passed();
        session.record_semantic(false, sample_symbols());

        assert!(!session.semantic_passed());
        assert!(session.symbols().is_empty());
        assert!(session.syntax_passed());
    }

    #[test]
    fn test_reset_returns_to_initial_state() {
        let mut session = fully_passed();
        session.reset();
        assert_eq!(session, AnalysisSession::new());
    }

    #[test]
    fn test_loading_source_drops_previous_results() {
        let mut session = fully_passed();
        session.record_source_loaded(true);

        assert!(session.source_loaded());
        assert!(!session.lexical_passed());
        assert!(session.tokens().is_empty());
        assert!(session.can_run(Stage::Lexical));
    }
}

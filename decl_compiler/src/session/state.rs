//! Stage pass flags and their invalidation rules

use crate::results::Stage;
use serde::Serialize;

/// Which stages have passed for the current source text.
///
/// Invariant: `semantic_passed` implies `syntax_passed` implies
/// `lexical_passed`. Every transition below preserves it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StageFlags {
    pub source_loaded: bool,
    pub lexical_passed: bool,
    pub syntax_passed: bool,
    pub semantic_passed: bool,
}

impl StageFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loading or unloading source starts from scratch
    pub fn with_source_loaded(self, loaded: bool) -> Self {
        Self {
            source_loaded: loaded,
            ..Self::default()
        }
    }

    /// Any lexical run invalidates everything downstream of it
    pub fn with_lexical(self, passed: bool) -> Self {
        Self {
            lexical_passed: passed,
            syntax_passed: false,
            semantic_passed: false,
            ..self
        }
    }

    /// A pass only sticks while lexical has passed
    pub fn with_syntax(self, passed: bool) -> Self {
        Self {
            syntax_passed: passed && self.lexical_passed,
            semantic_passed: false,
            ..self
        }
    }

    /// A pass only sticks while syntax has passed
    pub fn with_semantic(self, passed: bool) -> Self {
        Self {
            semantic_passed: passed && self.syntax_passed,
            ..self
        }
    }

    pub fn passed(&self, stage: Stage) -> bool {
        match stage {
            Stage::Lexical => self.lexical_passed,
            Stage::Syntax => self.syntax_passed,
            Stage::Semantic => self.semantic_passed,
        }
    }

    /// Gating: lexical needs loaded source, later stages need their prerequisite
    pub fn can_run(&self, stage: Stage) -> bool {
        match stage.prerequisite() {
            Some(prerequisite) => self.passed(prerequisite),
            None => self.source_loaded,
        }
    }

    /// The last stage in order that currently holds a pass
    pub fn furthest_passed(&self) -> Option<Stage> {
        Stage::ALL.into_iter().rev().find(|stage| self.passed(*stage))
    }

    pub fn is_consistent(&self) -> bool {
        (!self.semantic_passed || self.syntax_passed)
            && (!self.syntax_passed || self.lexical_passed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_flag_combinations() -> Vec<StageFlags> {
        (0u8..16)
            .map(|bits| StageFlags {
                source_loaded: bits & 1 != 0,
                lexical_passed: bits & 2 != 0,
                syntax_passed: bits & 4 != 0,
                semantic_passed: bits & 8 != 0,
            })
            .filter(StageFlags::is_consistent)
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let flags = StageFlags::new();
        assert!(!flags.source_loaded);
        assert!(Stage::ALL.iter().all(|stage| !flags.passed(*stage)));
        assert!(!flags.can_run(Stage::Lexical));
    }

    #[test]
    fn test_gating_chain() {
        let flags = StageFlags::new().with_source_loaded(true);
        assert!(flags.can_run(Stage::Lexical));
        assert!(!flags.can_run(Stage::Syntax));

        let flags = flags.with_lexical(true);
        assert!(flags.can_run(Stage::Syntax));
        assert!(!flags.can_run(Stage::Semantic));

        let flags = flags.with_syntax(true);
        assert!(flags.can_run(Stage::Semantic));
        assert_eq!(flags.with_semantic(true).furthest_passed(), Some(Stage::Semantic));
    }

    #[test]
    fn test_lexical_pass_invalidates_downstream() {
        let flags = StageFlags::new()
            .with_source_loaded(true)
            .with_lexical(true)
            .with_syntax(true)
            .with_semantic(true)
            .with_lexical(true);

        assert!(flags.lexical_passed);
        assert!(!flags.syntax_passed);
        assert!(!flags.semantic_passed);
    }

    #[test]
    fn test_syntax_pass_invalidates_semantic() {
        let flags = StageFlags::new()
            .with_source_loaded(true)
            .with_lexical(true)
            .with_syntax(true)
            .with_semantic(true)
            .with_syntax(true);

        assert!(flags.syntax_passed);
        assert!(!flags.semantic_passed);
    }

    #[test]
    fn test_failures_never_leave_stale_downstream_passes() {
        let full = StageFlags::new()
            .with_source_loaded(true)
            .with_lexical(true)
            .with_syntax(true)
            .with_semantic(true);

        let after_lexical_failure = full.with_lexical(false);
        assert_eq!(after_lexical_failure.furthest_passed(), None);

        let after_syntax_failure = full.with_syntax(false);
        assert_eq!(after_syntax_failure.furthest_passed(), Some(Stage::Lexical));
    }

    #[test]
    fn test_pass_without_prerequisite_is_not_recorded() {
        let loaded = StageFlags::new().with_source_loaded(true);

        let syntax_first = loaded.with_syntax(true);
        assert!(!syntax_first.syntax_passed);
        assert!(!syntax_first.can_run(Stage::Semantic));

        let semantic_first = loaded.with_lexical(true).with_semantic(true);
        assert!(semantic_first.lexical_passed);
        assert!(!semantic_first.semantic_passed);

        let after_invalidation = loaded
            .with_lexical(true)
            .with_syntax(true)
            .with_lexical(false)
            .with_semantic(true);
        assert_eq!(after_invalidation.furthest_passed(), None);
    }

    #[test]
    fn test_every_transition_preserves_invariant() {
        for flags in all_flag_combinations() {
            for passed in [true, false] {
                assert!(flags.with_source_loaded(passed).is_consistent());
                assert!(flags.with_lexical(passed).is_consistent());
                assert!(flags.with_syntax(passed).is_consistent());
                assert!(flags.with_semantic(passed).is_consistent());
            }
        }
    }
}

//! Gated, session-backed execution of the three stages

use super::error::PipelineError;
use super::output::PipelineOutput;
use super::report::StageReport;
use crate::config::runtime::RuntimeConfig;
use crate::file_processor::{FileMetadata, FileProcessor};
use crate::lexical::LexicalAnalyzer;
use crate::logging::{self, codes};
use crate::results::Stage;
use crate::semantic_analysis::SemanticAnalyzer;
use crate::session::AnalysisSession;
use crate::syntax::SyntaxAnalyzer;
use std::path::{Path, PathBuf};

/// Owns the current source text and its session.
///
/// Each stage re-reads the raw text on its own; nothing is passed from one
/// stage to the next except the pass flags that gate them.
#[derive(Debug, Clone)]
pub struct AnalysisDriver {
    source: Option<String>,
    metadata: Option<FileMetadata>,
    session: AnalysisSession,
    file_processor: FileProcessor,
    lexical: LexicalAnalyzer,
    syntax: SyntaxAnalyzer,
    semantic: SemanticAnalyzer,
}

impl AnalysisDriver {
    pub fn new() -> Self {
        Self::from_config(&RuntimeConfig::default())
    }

    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self {
            source: None,
            metadata: None,
            session: AnalysisSession::new(),
            file_processor: FileProcessor::from_preferences(&config.file_processor),
            lexical: LexicalAnalyzer::with_preferences(config.lexical.clone()),
            syntax: SyntaxAnalyzer::new(),
            semantic: SemanticAnalyzer::with_preferences(config.semantic.clone()),
        }
    }

    /// Replace the current text. Results for the previous text are dropped.
    pub fn load_source(&mut self, source: impl Into<String>) {
        self.metadata = None;
        self.install(source.into());
    }

    /// Read a file and make its contents the current text. On error the
    /// current text and session are left as they were.
    pub fn load_file(&mut self, file_path: &str) -> Result<&FileMetadata, PipelineError> {
        let result = self.file_processor.process_file(file_path)?;
        self.install(result.source);
        Ok(self.metadata.insert(result.metadata))
    }

    fn install(&mut self, source: String) {
        log_success!(codes::success::SOURCE_LOADED, "Source loaded",
            "bytes" => source.len(),
            "lines" => source.split('\n').count()
        );
        self.source = Some(source);
        self.session.record_source_loaded(true);
    }

    /// Drop the text and return the session to its initial state
    pub fn clear(&mut self) {
        self.source = None;
        self.metadata = None;
        self.session.reset();
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.metadata.as_ref().map(|metadata| metadata.path.as_path())
    }

    pub fn metadata(&self) -> Option<&FileMetadata> {
        self.metadata.as_ref()
    }

    pub fn session(&self) -> &AnalysisSession {
        &self.session
    }

    /// Fails with `StageLocked` unless the stage's prerequisite currently holds
    pub fn check_gate(&self, stage: Stage) -> Result<(), PipelineError> {
        if self.source.is_none() {
            return Err(PipelineError::NoSource);
        }

        match stage.prerequisite() {
            Some(prerequisite) if !self.session.can_run(stage) => {
                Err(PipelineError::StageLocked {
                    stage,
                    prerequisite,
                })
            }
            _ => Ok(()),
        }
    }

    /// Run one stage on the current text and record its outcome
    pub fn run_stage(&mut self, stage: Stage) -> Result<StageReport, PipelineError> {
        if let Err(error) = self.check_gate(stage) {
            log_warning!("Stage request rejected",
                "code" => error.error_code(),
                "stage" => stage,
                "reason" => &error
            );
            return Err(error);
        }

        let source = self.source.clone().unwrap_or_default();
        let report = match self.source_path().map(Path::to_path_buf) {
            Some(path) => logging::with_source_context(path, || self.execute(stage, &source)),
            None => self.execute(stage, &source),
        };

        Ok(report)
    }

    fn execute(&mut self, stage: Stage, source: &str) -> StageReport {
        match stage {
            Stage::Lexical => {
                let result = self.lexical.analyze(source);
                self.session
                    .record_lexical(result.success, result.payload.clone());
                StageReport::Lexical(result)
            }
            Stage::Syntax => {
                let result = self.syntax.analyze(source);
                self.session.record_syntax(result.success);
                StageReport::Syntax(result)
            }
            Stage::Semantic => {
                let result = self.semantic.analyze(source);
                self.session
                    .record_semantic(result.success, result.payload.clone());
                StageReport::Semantic(result)
            }
        }
    }

    /// Run every stage up to and including `last`, stopping after the first
    /// failure. The returned reports are in execution order.
    pub fn run_through(&mut self, last: Stage) -> Result<Vec<StageReport>, PipelineError> {
        let mut reports = Vec::new();

        for stage in last.up_to() {
            let report = self.run_stage(stage)?;
            let passed = report.success();
            reports.push(report);
            if !passed {
                break;
            }
        }

        Ok(reports)
    }

    /// Snapshot of the session plus the given reports
    pub fn output(&self, reports: &[StageReport]) -> PipelineOutput {
        let source_path = self.source_path().map(|path| path.display().to_string());
        PipelineOutput::new(source_path, reports, &self.session)
    }
}

impl Default for AnalysisDriver {
    fn default() -> Self {
        Self::new()
    }
}

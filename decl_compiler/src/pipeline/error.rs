use crate::file_processor::FileProcessorError;
use crate::logging::{codes, Code};
use crate::results::Stage;

/// Driver-level failures. Analysis failures are not errors; they come back
/// as unsuccessful stage reports.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("File processing failed: {0}")]
    FileProcessing(#[from] FileProcessorError),

    #[error("{stage} analysis is locked until {prerequisite} analysis passes")]
    StageLocked { stage: Stage, prerequisite: Stage },

    #[error("No source loaded")]
    NoSource,
}

impl PipelineError {
    pub fn error_code(&self) -> Code {
        match self {
            PipelineError::FileProcessing(error) => error.error_code(),
            PipelineError::StageLocked { .. } => codes::session::STAGE_LOCKED,
            PipelineError::NoSource => codes::session::NO_SOURCE_LOADED,
        }
    }
}

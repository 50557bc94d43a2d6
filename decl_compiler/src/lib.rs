// Logging first so its macros are in scope for every module below
#[macro_use]
pub mod logging;

pub mod config;
pub mod file_processor;
pub mod grammar;
pub mod lexical;
pub mod pipeline;
pub mod results;
pub mod semantic_analysis;
pub mod session;
pub mod symbols;
pub mod syntax;
pub mod tokens;

// Re-export key types for library consumers
pub use config::RuntimeConfig;
pub use pipeline::{AnalysisDriver, PipelineError, PipelineOutput, StageReport};
pub use results::{AnalysisResult, Diagnostic, Stage};
pub use session::AnalysisSession;
pub use symbols::{SymbolEntry, SymbolTable};
pub use tokens::{Token, TokenKind};

//! Result types shared by the three analysis stages
//!
//! - [`AnalysisResult`] - success flag, summary message, diagnostics and payload
//! - [`Diagnostic`] - one per-line problem, displayed as `Line <n>: ...`
//! - [`Stage`] - the stage identifiers and their prerequisite chain

pub mod analysis;
pub mod diagnostic;
pub mod stage;

pub use analysis::AnalysisResult;
pub use diagnostic::Diagnostic;
pub use stage::Stage;

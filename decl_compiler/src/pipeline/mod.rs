mod driver;
mod error;
pub mod output;
mod report;
mod validation;

pub use driver::AnalysisDriver;
pub use error::PipelineError;
pub use output::{PipelineOutput, StageOutcome};
pub use report::StageReport;
pub use validation::validate_pipeline;

use crate::config::runtime::RuntimeConfig;
use crate::results::Stage;

/// Load a file and run it through `last`, stopping at the first failing stage
pub fn process_file(
    file_path: &str,
    last: Stage,
    config: &RuntimeConfig,
) -> Result<PipelineOutput, PipelineError> {
    let mut driver = AnalysisDriver::from_config(config);
    driver.load_file(file_path)?;

    log_info!("Starting analysis pipeline",
        "file" => file_path,
        "through" => last
    );

    let reports = driver.run_through(last)?;
    Ok(driver.output(&reports))
}

/// Same as [`process_file`] for text that is already in memory
pub fn process_source(source: &str, last: Stage, config: &RuntimeConfig) -> PipelineOutput {
    let mut driver = AnalysisDriver::from_config(config);
    driver.load_source(source);

    // Source is loaded and stages run in order, so no gate can reject
    let reports = driver.run_through(last).unwrap_or_default();
    driver.output(&reports)
}

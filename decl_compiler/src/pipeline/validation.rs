/// Check that every stage's codes are registered before analysis starts
pub fn validate_pipeline() -> Result<(), String> {
    log_debug!("Validating pipeline configuration");

    crate::file_processor::init_file_processor_logging()?;
    crate::lexical::init_lexical_analysis_logging()?;
    crate::syntax::init_syntax_logging()?;
    crate::semantic_analysis::init_semantic_logging()?;
    init_session_logging()?;

    log_success!(
        crate::logging::codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Pipeline validation succeeded",
        "stages_validated" => crate::results::Stage::ALL.len()
    );

    Ok(())
}

fn init_session_logging() -> Result<(), String> {
    use crate::logging::codes;

    for code in [
        codes::session::STAGE_LOCKED,
        codes::session::NO_SOURCE_LOADED,
        codes::success::SOURCE_LOADED,
        codes::success::SESSION_RESET,
    ] {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Session code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    Ok(())
}

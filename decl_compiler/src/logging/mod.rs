//! Global logging module
//!
//! Thread-safe global logging with per-thread source context and a small macro
//! interface. Every macro is a no-op until `init_global_logging` has run, so the
//! analyzers can be used as a plain library without any setup.

pub mod codes;
pub mod config;
pub mod events;
#[macro_use]
pub mod macros;
pub mod service;

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

thread_local! {
    static SOURCE_CONTEXT: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging from the installed preferences
pub fn init_global_logging() -> Result<(), String> {
    config::validate_config().map_err(|e| format!("Configuration validation failed: {}", e))?;

    let logging_service = Arc::new(service::create_configured_service());

    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized")?;

    for code in [
        codes::lexical::INVALID_TOKEN,
        codes::syntax::MISSING_SEMICOLON,
        codes::semantic::TYPE_MISMATCH,
    ] {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!("Missing metadata for error code: {}", code));
        }
    }

    logging_service.log_event(LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    ));

    Ok(())
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

// ============================================================================
// SOURCE CONTEXT MANAGEMENT
// ============================================================================

pub fn set_source_context(path: PathBuf) {
    SOURCE_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = Some(path);
    });
}

pub fn clear_source_context() {
    SOURCE_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = None;
    });
}

/// Run `f` with every event on this thread tagged with `path`
pub fn with_source_context<F, R>(path: PathBuf, f: F) -> R
where
    F: FnOnce() -> R,
{
    let previous = get_current_source_context();
    set_source_context(path);
    let result = f();
    match previous {
        Some(previous) => set_source_context(previous),
        None => clear_source_context(),
    }
    result
}

pub fn get_current_source_context() -> Option<PathBuf> {
    SOURCE_CONTEXT.with(|ctx| ctx.borrow().clone())
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

fn dispatch(mut event: LogEvent, context: Vec<(&str, &str)>) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };

    if !logger.should_log(event.level) {
        return;
    }

    event.message = config::truncate_message(&event.message).to_string();

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    if let Some(path) = get_current_source_context() {
        event = event.with_context("file", &path.display().to_string());
    }

    logger.log_event(event);
}

/// Used by `log_error!`
pub fn log_error_with_context(
    code: Code,
    message: &str,
    line: Option<usize>,
    context: Vec<(&str, &str)>,
) {
    let mut event = LogEvent::error(code, message);
    if let Some(line) = line {
        event = event.with_line(line);
    }
    dispatch(event, context);
}

/// Used by `log_success!`
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    dispatch(LogEvent::success(code, message), context);
}

/// Used by `log_info!`
pub fn log_info_with_context(message: &str, context: Vec<(&str, &str)>) {
    dispatch(LogEvent::info(message), context);
}

/// Used by `log_warning!`
pub fn log_warning_with_context(message: &str, context: Vec<(&str, &str)>) {
    dispatch(LogEvent::warning(message), context);
}

/// Used by `log_debug!`
pub fn log_debug_with_context(message: &str, context: Vec<(&str, &str)>) {
    dispatch(LogEvent::debug(message), context);
}

/// Logging state summary printed by the CLI in verbose mode
pub fn get_system_diagnostics() -> String {
    let mut diagnostics = String::new();

    diagnostics.push_str("=== Logging System Diagnostics ===\n");
    diagnostics.push_str(&format!("Initialized: {}\n", is_initialized()));
    if let Some(logger) = try_get_global_logger() {
        diagnostics.push_str(&format!("Active level: {}\n", logger.min_level().as_str()));
    }
    diagnostics.push('\n');
    diagnostics.push_str(&config::get_config_summary());

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_context_management() {
        let path = PathBuf::from("decls.java");

        assert!(get_current_source_context().is_none());

        set_source_context(path.clone());
        assert_eq!(get_current_source_context(), Some(path));

        clear_source_context();
        assert!(get_current_source_context().is_none());
    }

    #[test]
    fn test_with_source_context_restores_previous() {
        let outer = PathBuf::from("outer.txt");
        let inner = PathBuf::from("inner.txt");

        let result = with_source_context(outer.clone(), || {
            with_source_context(inner.clone(), || {
                assert_eq!(get_current_source_context(), Some(inner.clone()));
            });
            assert_eq!(get_current_source_context(), Some(outer.clone()));
            7
        });

        assert_eq!(result, 7);
        assert!(get_current_source_context().is_none());
    }

    #[test]
    fn test_macros_are_safe_without_initialization() {
        crate::log_error!(codes::lexical::INVALID_TOKEN, "Invalid token", line = 1, "lexeme" => "@");
        crate::log_success!(codes::success::TOKENIZATION_COMPLETE, "done", "tokens" => 4);
        crate::log_info!("info", "lines" => 2);
        crate::log_warning!("warn");
        crate::log_debug!("debug", "stage" => "lexical");
    }

    #[test]
    fn test_diagnostics() {
        let diagnostics = get_system_diagnostics();
        assert!(diagnostics.contains("Logging System Diagnostics"));
        assert!(diagnostics.contains("Initialized:"));
    }
}

//! Source file loading

mod processor;

use crate::config::runtime::FileProcessorPreferences;
pub use processor::{
    FileMetadata, FileProcessingResult, FileProcessor, FileProcessorError, KNOWN_EXTENSIONS,
};

/// Load a file with default settings
pub fn process_file(file_path: &str) -> Result<FileProcessingResult, FileProcessorError> {
    FileProcessor::new().process_file(file_path)
}

pub fn create_processor() -> FileProcessor {
    FileProcessor::new()
}

pub fn create_processor_from_preferences(prefs: &FileProcessorPreferences) -> FileProcessor {
    FileProcessor::from_preferences(prefs)
}

/// Compile-time maximum file size in bytes
pub fn get_max_file_size() -> u64 {
    FileProcessor::max_file_size()
}

/// Startup check that every file processing code has registry metadata
pub fn init_file_processor_logging() -> Result<(), String> {
    use crate::logging::codes;

    let required = [
        codes::file_processing::FILE_NOT_FOUND,
        codes::file_processing::INVALID_EXTENSION,
        codes::file_processing::FILE_TOO_LARGE,
        codes::file_processing::EMPTY_FILE,
        codes::file_processing::PERMISSION_DENIED,
        codes::file_processing::INVALID_ENCODING,
        codes::file_processing::IO_ERROR,
        codes::file_processing::INVALID_PATH,
        codes::file_processing::TOO_MANY_LINES,
        codes::success::FILE_PROCESSING_SUCCESS,
    ];

    for code in &required {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "File processor code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    log_debug!("File processor compile-time configuration loaded",
        "max_file_size" => get_max_file_size(),
        "max_line_count" => FileProcessor::max_line_count()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_module_api() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("decls.txt");
        fs::write(&file_path, "boolean ok = true;\n").unwrap();

        let result = process_file(file_path.to_str().unwrap()).unwrap();
        assert_eq!(result.metadata.line_count, 1);
    }

    #[test]
    fn test_create_processor_from_preferences() {
        let prefs = FileProcessorPreferences {
            require_known_extension: true,
            reject_empty_files: false,
            enable_performance_logging: true,
        };
        assert!(create_processor_from_preferences(&prefs).require_known_extension);
        assert!(!create_processor().require_known_extension);
    }

    #[test]
    fn test_init_file_processor_logging() {
        assert!(init_file_processor_logging().is_ok());
        assert!(get_max_file_size() > 0);
    }
}

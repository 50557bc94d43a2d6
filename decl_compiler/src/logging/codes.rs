//! Error and success codes with their classification metadata
//!
//! Single source of truth for every code the analyzer logs. Each code constant
//! has one metadata row in `METADATA`; lookups go through a lazily built registry.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
    pub const CONFIGURATION_ERROR: Code = Code::new("ERR003");
}

/// File processing error codes
pub mod file_processing {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const INVALID_EXTENSION: Code = Code::new("E006");
    pub const FILE_TOO_LARGE: Code = Code::new("E007");
    pub const EMPTY_FILE: Code = Code::new("E008");
    pub const PERMISSION_DENIED: Code = Code::new("E009");
    pub const INVALID_ENCODING: Code = Code::new("E010");
    pub const IO_ERROR: Code = Code::new("E011");
    pub const INVALID_PATH: Code = Code::new("E012");
    pub const TOO_MANY_LINES: Code = Code::new("E013");
}

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const EMPTY_SOURCE: Code = Code::new("E020");
    pub const INVALID_TOKEN: Code = Code::new("E021");
}

/// Syntax analysis error codes
pub mod syntax {
    use super::Code;

    pub const EMPTY_SOURCE: Code = Code::new("E040");
    pub const MISSING_SEMICOLON: Code = Code::new("E041");
    pub const INVALID_DECLARATION: Code = Code::new("E042");
}

/// Semantic analysis error codes
pub mod semantic {
    use super::Code;

    pub const EMPTY_SOURCE: Code = Code::new("E060");
    pub const DUPLICATE_DECLARATION: Code = Code::new("E061");
    pub const TYPE_MISMATCH: Code = Code::new("E062");
}

/// Stage gating codes
pub mod session {
    use super::Code;

    pub const STAGE_LOCKED: Code = Code::new("E080");
    pub const NO_SOURCE_LOADED: Code = Code::new("E081");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const FILE_PROCESSING_SUCCESS: Code = Code::new("I006");
    pub const SOURCE_LOADED: Code = Code::new("I007");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const SYNTAX_VALIDATION_PASSED: Code = Code::new("I040");
    pub const SEMANTIC_ANALYSIS_COMPLETE: Code = Code::new("I060");
    pub const SESSION_RESET: Code = Code::new("I080");
}

// ============================================================================
// METADATA TABLE
// ============================================================================

const METADATA: &[ErrorMetadata] = &[
    // System
    ErrorMetadata::new(
        "ERR001",
        "System",
        Severity::Critical,
        false,
        true,
        "Critical internal system error",
        "File a bug report with the failing input",
    ),
    ErrorMetadata::new(
        "ERR002",
        "System",
        Severity::Critical,
        false,
        true,
        "System initialization failed",
        "Check logging configuration and restart",
    ),
    ErrorMetadata::new(
        "ERR003",
        "System",
        Severity::High,
        false,
        true,
        "Runtime configuration could not be loaded",
        "Fix the configuration file or remove it to use defaults",
    ),
    // File processing
    ErrorMetadata::new(
        "E005",
        "FileProcessing",
        Severity::High,
        false,
        true,
        "Source file not found",
        "Verify the file path exists",
    ),
    ErrorMetadata::new(
        "E006",
        "FileProcessing",
        Severity::Medium,
        true,
        false,
        "Source file has an unsupported extension",
        "Use a .java or .txt file, or disable extension enforcement",
    ),
    ErrorMetadata::new(
        "E007",
        "FileProcessing",
        Severity::High,
        false,
        true,
        "Source file exceeds the configured size limit",
        "Split the file or raise max_file_size in the build profile",
    ),
    ErrorMetadata::new(
        "E008",
        "FileProcessing",
        Severity::Medium,
        true,
        false,
        "Source file is empty",
        "Add declarations to the file",
    ),
    ErrorMetadata::new(
        "E009",
        "FileProcessing",
        Severity::High,
        false,
        true,
        "Permission denied reading source file",
        "Check file permissions",
    ),
    ErrorMetadata::new(
        "E010",
        "FileProcessing",
        Severity::High,
        false,
        true,
        "Source file is not valid UTF-8",
        "Re-save the file with UTF-8 encoding",
    ),
    ErrorMetadata::new(
        "E011",
        "FileProcessing",
        Severity::High,
        false,
        true,
        "I/O error while reading source file",
        "Check disk health and retry",
    ),
    ErrorMetadata::new(
        "E012",
        "FileProcessing",
        Severity::Medium,
        false,
        true,
        "Path is not a regular file",
        "Provide the path of a regular file",
    ),
    ErrorMetadata::new(
        "E013",
        "FileProcessing",
        Severity::High,
        false,
        true,
        "Source file has more lines than the analysis limit",
        "Split the file or raise max_line_count_for_analysis",
    ),
    // Lexical
    ErrorMetadata::new(
        "E020",
        "Lexical",
        Severity::Low,
        true,
        false,
        "No source text to tokenize",
        "Open or type some declarations first",
    ),
    ErrorMetadata::new(
        "E021",
        "Lexical",
        Severity::Medium,
        true,
        false,
        "Lexeme matches no token rule",
        "Remove or correct the offending lexeme",
    ),
    // Syntax
    ErrorMetadata::new(
        "E040",
        "Syntax",
        Severity::Low,
        true,
        false,
        "No source text to validate",
        "Open or type some declarations first",
    ),
    ErrorMetadata::new(
        "E041",
        "Syntax",
        Severity::Medium,
        true,
        false,
        "Statement does not end with a semicolon",
        "Terminate the statement with ';'",
    ),
    ErrorMetadata::new(
        "E042",
        "Syntax",
        Severity::Medium,
        true,
        false,
        "Statement is not of the form '<type> <identifier> = <value>;'",
        "Rewrite the line as a single declaration",
    ),
    // Semantic
    ErrorMetadata::new(
        "E060",
        "Semantic",
        Severity::Low,
        true,
        false,
        "No source text to check",
        "Open or type some declarations first",
    ),
    ErrorMetadata::new(
        "E061",
        "Semantic",
        Severity::Medium,
        true,
        false,
        "Identifier declared more than once",
        "Rename or remove the repeated declaration",
    ),
    ErrorMetadata::new(
        "E062",
        "Semantic",
        Severity::Medium,
        true,
        false,
        "Value is not valid for the declared type",
        "Change the value or the declared type",
    ),
    // Session gating
    ErrorMetadata::new(
        "E080",
        "Session",
        Severity::Low,
        true,
        false,
        "Stage requested before its prerequisite passed",
        "Run the earlier stages first",
    ),
    ErrorMetadata::new(
        "E081",
        "Session",
        Severity::Low,
        true,
        false,
        "No source loaded",
        "Open a file or provide source text",
    ),
    // Success
    ErrorMetadata::new(
        "I004",
        "System",
        Severity::Low,
        true,
        false,
        "System initialization completed",
        "Proceed with analysis",
    ),
    ErrorMetadata::new(
        "I006",
        "FileProcessing",
        Severity::Low,
        true,
        false,
        "Source file read successfully",
        "Proceed with lexical analysis",
    ),
    ErrorMetadata::new(
        "I007",
        "Session",
        Severity::Low,
        true,
        false,
        "Source text loaded into session",
        "Proceed with lexical analysis",
    ),
    ErrorMetadata::new(
        "I020",
        "Lexical",
        Severity::Low,
        true,
        false,
        "Tokenization completed",
        "Proceed with syntax analysis",
    ),
    ErrorMetadata::new(
        "I040",
        "Syntax",
        Severity::Low,
        true,
        false,
        "Syntax validation passed",
        "Proceed with semantic analysis",
    ),
    ErrorMetadata::new(
        "I060",
        "Semantic",
        Severity::Low,
        true,
        false,
        "Semantic analysis completed",
        "Symbol table is ready",
    ),
    ErrorMetadata::new(
        "I080",
        "Session",
        Severity::Low,
        true,
        false,
        "Session reset to initial state",
        "Load new source",
    ),
];

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        METADATA
            .iter()
            .map(|metadata| (metadata.code, metadata.clone()))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get metadata for a specific code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get severity from code
pub fn get_severity(code: &str) -> Severity {
    get_error_metadata(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_metadata(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Check if error requires immediate halt
pub fn requires_halt(code: &str) -> bool {
    get_error_metadata(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

/// Get human-readable description for code
pub fn get_description(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for code
pub fn get_action(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get category from code
pub fn get_category(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

//! Symbol table errors

/// Result type for symbol table operations
pub type SymbolResult<T> = Result<T, SymbolError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SymbolError {
    #[error("Duplicate symbol '{identifier}': first declared on line {first_line}, redeclared on line {duplicate_line}")]
    DuplicateSymbol {
        identifier: String,
        first_line: usize,
        duplicate_line: usize,
    },
}

impl SymbolError {
    pub fn duplicate_symbol(identifier: &str, first_line: usize, duplicate_line: usize) -> Self {
        Self::DuplicateSymbol {
            identifier: identifier.to_string(),
            first_line,
            duplicate_line,
        }
    }

    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            SymbolError::DuplicateSymbol { .. } => {
                crate::logging::codes::semantic::DUPLICATE_DECLARATION
            }
        }
    }
}

//! Symbol table for declared variables

pub mod error;
pub mod table;

pub use error::{SymbolError, SymbolResult};
pub use table::{SymbolEntry, SymbolTable};

//! Grammar definitions for declaration statements

pub mod declaration;
pub mod keywords;

pub use declaration::{is_declaration, parse_declaration, DeclarationParts};
pub use keywords::{is_type_keyword, DeclaredType};

/// Statement terminator
pub const STATEMENT_SEPARATOR: char = ';';

/// Assignment operator between identifier and value
pub const ASSIGNMENT: char = '=';

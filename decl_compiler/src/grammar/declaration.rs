//! The single statement form: `<type> <identifier> = <value>`
//!
//! Both the syntax and semantic stages match lines against this pattern after
//! removing the trailing semicolon. They do so independently of each other.

use super::keywords::DeclaredType;
use regex::Regex;
use std::sync::OnceLock;

/// Components of a matched declaration line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationParts<'a> {
    pub declared_type: DeclaredType,
    pub name: &'a str,
    /// Everything after `=`, trimmed
    pub value: &'a str,
}

fn declaration_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let pattern = format!(
            r"^({})\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*=\s*(.+)$",
            DeclaredType::alternation()
        );
        Regex::new(&pattern).expect("declaration pattern is a valid regex")
    })
}

/// Whether a semicolon-free, trimmed line has declaration shape
pub fn is_declaration(line: &str) -> bool {
    declaration_regex().is_match(line)
}

/// Split a semicolon-free, trimmed line into type, name and value
pub fn parse_declaration(line: &str) -> Option<DeclarationParts<'_>> {
    let captures = declaration_regex().captures(line)?;
    let declared_type = captures.get(1)?.as_str().parse().ok()?;
    let name = captures.get(2)?.as_str();
    let value = captures.get(3)?.as_str().trim();

    Some(DeclarationParts {
        declared_type,
        name,
        value,
    })
}

//! Value compatibility for each declared type
//!
//! | Type                       | Accepted value text            |
//! |----------------------------|--------------------------------|
//! | `int` `byte` `short` `long`| `-?[0-9]+`                     |
//! | `double` `float`           | `-?[0-9]+(\.[0-9]+)?`          |
//! | `char`                     | one character in single quotes |
//! | `boolean`                  | `true` or `false`              |
//! | `String`                   | double quotes, no inner `"`    |
//!
//! Literal suffixes such as `10L` or `2.5f` are not accepted.

use crate::grammar::DeclaredType;
use regex::Regex;
use std::sync::OnceLock;

const INTEGRAL_PATTERN: &str = r"^-?[0-9]+$";
const DECIMAL_PATTERN: &str = r"^-?[0-9]+(\.[0-9]+)?$";
const CHAR_PATTERN: &str = r"^'.'$";
const BOOLEAN_PATTERN: &str = r"^(true|false)$";
const STRING_PATTERN: &str = r#"^"[^"]*"$"#;

struct ValuePatterns {
    integral: Regex,
    decimal: Regex,
    character: Regex,
    boolean: Regex,
    string: Regex,
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("value patterns are valid regular expressions")
}

fn compiled(declared_type: DeclaredType) -> &'static Regex {
    static PATTERNS: OnceLock<ValuePatterns> = OnceLock::new();

    let patterns = PATTERNS.get_or_init(|| ValuePatterns {
        integral: compile(INTEGRAL_PATTERN),
        decimal: compile(DECIMAL_PATTERN),
        character: compile(CHAR_PATTERN),
        boolean: compile(BOOLEAN_PATTERN),
        string: compile(STRING_PATTERN),
    });

    match declared_type {
        DeclaredType::Int | DeclaredType::Byte | DeclaredType::Short | DeclaredType::Long => {
            &patterns.integral
        }
        DeclaredType::Double | DeclaredType::Float => &patterns.decimal,
        DeclaredType::Char => &patterns.character,
        DeclaredType::Boolean => &patterns.boolean,
        DeclaredType::String => &patterns.string,
    }
}

/// Does `value` (already trimmed) match the pattern for `declared_type`
pub fn value_matches(declared_type: DeclaredType, value: &str) -> bool {
    compiled(declared_type).is_match(value)
}

/// Does an integral `value` fit the declared width. Non-integral types always fit.
pub fn value_in_range(declared_type: DeclaredType, value: &str) -> bool {
    match declared_type.integral_range() {
        Some((min, max)) => value
            .parse::<i64>()
            .map(|parsed| (min..=max).contains(&parsed))
            .unwrap_or(false),
        None => true,
    }
}

/// Type checker. Pattern matching always applies; width checks are opt-in.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeChecker {
    enforce_numeric_ranges: bool,
}

impl TypeChecker {
    pub fn new(enforce_numeric_ranges: bool) -> Self {
        Self {
            enforce_numeric_ranges,
        }
    }

    pub fn is_compatible(&self, declared_type: DeclaredType, value: &str) -> bool {
        if !value_matches(declared_type, value) {
            return false;
        }

        !self.enforce_numeric_ranges || value_in_range(declared_type, value)
    }
}

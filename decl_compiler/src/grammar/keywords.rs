//! Type keywords that may open a declaration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The nine declarable types. Order here is the order used to build patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclaredType {
    Int,
    Double,
    Float,
    Char,
    Boolean,
    Byte,
    Short,
    Long,
    #[serde(rename = "String")]
    String,
}

impl DeclaredType {
    pub const ALL: [DeclaredType; 9] = [
        DeclaredType::Int,
        DeclaredType::Double,
        DeclaredType::Float,
        DeclaredType::Char,
        DeclaredType::Boolean,
        DeclaredType::Byte,
        DeclaredType::Short,
        DeclaredType::Long,
        DeclaredType::String,
    ];

    /// Source spelling of the keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclaredType::Int => "int",
            DeclaredType::Double => "double",
            DeclaredType::Float => "float",
            DeclaredType::Char => "char",
            DeclaredType::Boolean => "boolean",
            DeclaredType::Byte => "byte",
            DeclaredType::Short => "short",
            DeclaredType::Long => "long",
            DeclaredType::String => "String",
        }
    }

    /// Inclusive bounds for the integral types
    pub fn integral_range(&self) -> Option<(i64, i64)> {
        match self {
            DeclaredType::Byte => Some((i8::MIN as i64, i8::MAX as i64)),
            DeclaredType::Short => Some((i16::MIN as i64, i16::MAX as i64)),
            DeclaredType::Int => Some((i32::MIN as i64, i32::MAX as i64)),
            DeclaredType::Long => Some((i64::MIN, i64::MAX)),
            _ => None,
        }
    }

    /// `int|double|...|String`, for embedding in a regex alternation
    pub fn alternation() -> String {
        Self::ALL
            .iter()
            .map(DeclaredType::as_str)
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeclaredType {
    type Err = ();

    /// Case-sensitive: `string` and `Int` are not keywords
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|declared| declared.as_str() == s)
            .ok_or(())
    }
}

pub fn is_type_keyword(word: &str) -> bool {
    word.parse::<DeclaredType>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_parsing_is_case_sensitive() {
        assert_eq!("int".parse::<DeclaredType>(), Ok(DeclaredType::Int));
        assert_eq!("String".parse::<DeclaredType>(), Ok(DeclaredType::String));
        assert!("string".parse::<DeclaredType>().is_err());
        assert!("Int".parse::<DeclaredType>().is_err());
        assert!(!is_type_keyword("var"));
    }

    #[test]
    fn test_display_round_trips_every_keyword() {
        for declared in DeclaredType::ALL {
            assert_eq!(declared.to_string().parse::<DeclaredType>(), Ok(declared));
        }
    }

    #[test]
    fn test_alternation() {
        assert_eq!(
            DeclaredType::alternation(),
            "int|double|float|char|boolean|byte|short|long|String"
        );
    }

    #[test]
    fn test_integral_ranges() {
        assert_eq!(DeclaredType::Byte.integral_range(), Some((-128, 127)));
        assert_eq!(DeclaredType::Short.integral_range(), Some((-32768, 32767)));
        assert_eq!(DeclaredType::Double.integral_range(), None);
    }

    #[test]
    fn test_serde_uses_source_spelling() {
        assert_eq!(serde_json::to_string(&DeclaredType::Boolean).unwrap(), "\"boolean\"");
        assert_eq!(serde_json::to_string(&DeclaredType::String).unwrap(), "\"String\"");
    }
}

//! Analysis stages and their ordering

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Lexical,
    Syntax,
    Semantic,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Lexical, Stage::Syntax, Stage::Semantic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Lexical => "lexical",
            Stage::Syntax => "syntax",
            Stage::Semantic => "semantic",
        }
    }

    /// Title used in result messages, e.g. "Lexical Analysis"
    pub fn title(&self) -> &'static str {
        match self {
            Stage::Lexical => "Lexical Analysis",
            Stage::Syntax => "Syntax Analysis",
            Stage::Semantic => "Semantic Analysis",
        }
    }

    /// The stage that must have passed before this one may run.
    /// `None` for the lexical stage, which only needs loaded source.
    pub fn prerequisite(&self) -> Option<Stage> {
        match self {
            Stage::Lexical => None,
            Stage::Syntax => Some(Stage::Lexical),
            Stage::Semantic => Some(Stage::Syntax),
        }
    }

    /// Stages from the first up to and including `self`
    pub fn up_to(self) -> impl Iterator<Item = Stage> {
        Stage::ALL.into_iter().take_while(move |stage| *stage <= self)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lexical" | "lex" => Ok(Stage::Lexical),
            "syntax" => Ok(Stage::Syntax),
            "semantic" | "sem" => Ok(Stage::Semantic),
            other => Err(format!(
                "unknown stage '{}' (expected lexical, syntax or semantic)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prerequisites_form_a_chain() {
        assert_eq!(Stage::Lexical.prerequisite(), None);
        assert_eq!(Stage::Syntax.prerequisite(), Some(Stage::Lexical));
        assert_eq!(Stage::Semantic.prerequisite(), Some(Stage::Syntax));
    }

    #[test]
    fn test_up_to() {
        assert_eq!(Stage::Lexical.up_to().collect::<Vec<_>>(), vec![Stage::Lexical]);
        assert_eq!(Stage::Semantic.up_to().count(), 3);
    }

    #[test]
    fn test_parsing() {
        assert_eq!("Syntax".parse::<Stage>(), Ok(Stage::Syntax));
        assert_eq!("lex".parse::<Stage>(), Ok(Stage::Lexical));
        assert!("codegen".parse::<Stage>().is_err());
    }
}

//! Token system for declaration source text
//!
//! A token is a lexeme that matched one of seven rules, tagged with the line it
//! was found on. Rules are tried in [`TokenKind::PRIORITY`] order:
//!
//! | Kind | Accepts |
//! |---|---|
//! | `Keyword` | one of the nine type names |
//! | `Identifier` | letter or `_`, then letters, digits, `_` |
//! | `Number` | optional `-`, digits, optional `.digits` |
//! | `StringLiteral` | `"..."` without inner quotes |
//! | `CharLiteral` | exactly one character in single quotes |
//! | `Assignment` | `=` |
//! | `Semicolon` | `;` |

pub mod classifier;
pub mod token;

pub use classifier::{classify, TokenClassifier};
pub use token::{Token, TokenKind};

//! FILENAME: core/parser/src/token.rs
//! PURPOSE: Token definitions for the birth date lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed by the parser.

/// Tokens recognized by the date lexer.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// A run of ASCII digits. `digits` keeps the written width so the parser
    /// can tell "0006" from "6" (years must be written with four digits).
    Number { value: u64, digits: usize },

    // Separators
    Slash,
    Dash,

    // Special
    EOF,
    Illegal(char),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number { value, digits } => write!(f, "{:0width$}", value, width = *digits),
            Token::Slash => write!(f, "/"),
            Token::Dash => write!(f, "-"),
            Token::EOF => write!(f, "EOF"),
            Token::Illegal(c) => write!(f, "ILLEGAL({})", c),
        }
    }
}

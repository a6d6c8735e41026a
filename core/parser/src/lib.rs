//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the Pinaculo input parser.
//! CONTEXT: This module exposes the lexer, parser and name normalisation
//! needed to turn raw calculator form input into engine-ready values.
//!
//! PIPELINE: Date String --> Lexer --> Tokens --> Parser --> DateParts
//!           Name String --> normalize_name --> A-Z letters
//!
//! SUPPORTED FEATURES:
//! - Day/month/year layout: 6/5/1982, 06/05/1982
//! - ISO layout: 1982-05-06
//! - Surrounding whitespace is ignored, inner whitespace is rejected
//! - Names: NFD decomposition, combining marks dropped, non A-Z dropped

pub mod ast;
pub mod lexer;
pub mod name;
pub mod parser;
pub mod token;


// Re-export commonly used types for convenience
pub use ast::{DateLayout, DateParts};
pub use lexer::Lexer;
pub use name::{is_vowel, normalize_name};
pub use parser::{parse_birth_date, ParseError, ParseResult, Parser};
pub use token::Token;

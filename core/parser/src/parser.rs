//! FILENAME: core/parser/src/parser.rs
//! PURPOSE: Recursive descent parser that converts date Tokens into `DateParts`.
//! CONTEXT: This is the second stage of the date parsing pipeline. It takes
//! tokens from the Lexer and checks them against the accepted layouts.
//!
//! GRAMMAR:
//!   date      --> dmy | iso
//!   dmy       --> SHORT "/" SHORT "/" YEAR
//!   iso       --> YEAR "-" SHORT "-" SHORT
//!   SHORT     --> NUMBER with 1 or 2 digits
//!   YEAR      --> NUMBER with exactly 4 digits

use crate::ast::{DateLayout, DateParts};
use crate::lexer::Lexer;
use crate::token::Token;

/// Parser errors with descriptive messages.
#[derive(Debug, PartialEq, Clone)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;

/// The Parser struct holds the lexer and current token state.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Token,
}

impl<'a> Parser<'a> {
    /// Creates a new parser from an input string.
    /// Automatically advances to the first token.
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current_token = lexer.next_token();
        Parser {
            lexer,
            current_token,
        }
    }

    /// Parses the entire input and returns the date components.
    /// The width of the first number decides the layout: four digits means ISO.
    pub fn parse(&mut self) -> ParseResult<DateParts> {
        let parts = match self.current_token {
            Token::EOF => return Err(ParseError::new("Empty date")),
            Token::Number { digits: 4, .. } => self.parse_iso()?,
            Token::Number { .. } => self.parse_dmy()?,
            ref other => {
                return Err(ParseError::new(format!("Expected a number, found {}", other)));
            }
        };

        // Ensure we consumed all tokens
        if self.current_token != Token::EOF {
            return Err(ParseError::new(format!(
                "Unexpected token after date: {}",
                self.current_token
            )));
        }

        Ok(parts)
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        self.current_token = self.lexer.next_token();
    }

    /// Checks if the current token matches the expected separator.
    /// If it matches, advances and returns Ok. Otherwise returns an error.
    fn expect(&mut self, expected: Token) -> ParseResult<()> {
        if self.current_token == expected {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::new(format!(
                "Expected '{}', found {}",
                expected, self.current_token
            )))
        }
    }

    fn parse_dmy(&mut self) -> ParseResult<DateParts> {
        let day = self.parse_short("day")?;
        self.expect(Token::Slash)?;
        let month = self.parse_short("month")?;
        self.expect(Token::Slash)?;
        let year = self.parse_year()?;

        Ok(DateParts {
            day,
            month,
            year,
            layout: DateLayout::DayMonthYear,
        })
    }

    fn parse_iso(&mut self) -> ParseResult<DateParts> {
        let year = self.parse_year()?;
        self.expect(Token::Dash)?;
        let month = self.parse_short("month")?;
        self.expect(Token::Dash)?;
        let day = self.parse_short("day")?;

        Ok(DateParts {
            day,
            month,
            year,
            layout: DateLayout::Iso,
        })
    }

    /// Day and month: one or two digits.
    fn parse_short(&mut self, what: &str) -> ParseResult<u32> {
        match self.current_token {
            Token::Number { value, digits } if digits <= 2 => {
                self.advance();
                // Two digits always fit
                Ok(value as u32)
            }
            Token::Number { digits, .. } => Err(ParseError::new(format!(
                "The {} must have one or two digits, found {}",
                what, digits
            ))),
            ref other => Err(ParseError::new(format!(
                "Expected the {}, found {}",
                what, other
            ))),
        }
    }

    /// Year: exactly four digits.
    fn parse_year(&mut self) -> ParseResult<u32> {
        match self.current_token {
            Token::Number { value, digits: 4 } => {
                self.advance();
                Ok(value as u32)
            }
            Token::Number { digits, .. } => Err(ParseError::new(format!(
                "The year must have four digits, found {}",
                digits
            ))),
            ref other => Err(ParseError::new(format!("Expected the year, found {}", other))),
        }
    }
}

/// Convenience function to parse a birth date string.
/// Leading and trailing whitespace is ignored; inner whitespace is not.
pub fn parse_birth_date(input: &str) -> ParseResult<DateParts> {
    let mut parser = Parser::new(input.trim());
    parser.parse()
}

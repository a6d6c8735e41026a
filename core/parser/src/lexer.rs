//! FILENAME: core/parser/src/lexer.rs
//! PURPOSE: Scans a raw birth date string and produces a stream of Tokens.
//! CONTEXT: This is the first stage of the date parsing pipeline. It handles
//! digit runs and the two separators used by the accepted layouts. Any other
//! character, whitespace included, is Illegal: "6 / 5 / 1982" is not a date.
//!
//! SUPPORTED INPUT:
//! - Digit runs: 6, 06, 1982
//! - Separators: / -

use crate::token::Token;
use std::iter::Peekable;
use std::str::Chars;

pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().peekable(),
        }
    }

    /// Advances the lexer and returns the next token.
    pub fn next_token(&mut self) -> Token {
        match self.input.next() {
            Some('/') => Token::Slash,
            Some('-') => Token::Dash,

            Some(ch) if ch.is_ascii_digit() => self.read_number(ch),

            // End of input
            None => Token::EOF,

            // Unknown character
            Some(ch) => Token::Illegal(ch),
        }
    }

    fn read_number(&mut self, first_char: char) -> Token {
        let mut number_str = String::from(first_char);

        while let Some(&ch) = self.input.peek() {
            if ch.is_ascii_digit() {
                number_str.push(ch);
                self.input.next();
            } else {
                break;
            }
        }

        match number_str.parse::<u64>() {
            Ok(value) => Token::Number {
                value,
                digits: number_str.len(),
            },
            // Only reachable when the run overflows u64
            Err(_) => Token::Illegal(first_char),
        }
    }
}

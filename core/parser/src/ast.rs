//! FILENAME: core/parser/src/ast.rs
//! PURPOSE: Parsed representation of a birth date string.
//! CONTEXT: The parser produces `DateParts`; the engine turns them into a
//! `BirthDate`. No calendar validation happens at this level: 31/02/1990
//! parses fine.

/// Which of the accepted layouts the input was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLayout {
    /// D/M/YYYY or DD/MM/YYYY, as typed into the calculator form.
    DayMonthYear,
    /// YYYY-MM-DD, as produced by a native date picker.
    Iso,
}

/// The three raw components of a birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub day: u32,
    pub month: u32,
    pub year: u32,
    pub layout: DateLayout,
}

impl DateParts {
    /// Renders as DD/MM/YYYY with zero padding.
    pub fn to_dmy(&self) -> String {
        format!("{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }

    /// Renders as YYYY-MM-DD with zero padding.
    pub fn to_iso(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

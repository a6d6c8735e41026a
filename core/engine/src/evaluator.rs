//! FILENAME: core/engine/src/evaluator.rs
//! PURPOSE: Evaluates formulas to compute position values.
//! CONTEXT: The evaluator walks the positions in the order given by the
//! dependency graph and applies each formula's rule, reading the raw birth
//! date or the values already stored in the table. A precedent that has not
//! been computed yet is an error, never an implicit zero.
//!
//! SUPPORTED RULES:
//! - Raw inputs: reduce(month), reduce(day), reduce(digit_sum(year)),
//!   reduce(year mod 100), reduce(raw sum)
//! - Reduced sums of precedents
//! - Negative track: master-converted absolute differences, the K/L spread
//! - Set rules: triplicity (W), absent digits (T)

use crate::absent::absent_digits;
use crate::birth_date::BirthDate;
use crate::error::{EngineError, EngineResult};
use crate::formula::{formula_for, Formula, RawInput, Rule};
use crate::position::Position;
use crate::reduction::{convert_for_negative, digit_sum, reduce};
use crate::table::PinnacleTable;
use crate::triplicity::triplicity;
use crate::value::PinnacleValue;

/// The Evaluator holds the birth date and the table being filled.
pub struct Evaluator<'a> {
    date: &'a BirthDate,
    table: PinnacleTable,
}

impl<'a> Evaluator<'a> {
    pub fn new(date: &'a BirthDate) -> Self {
        Evaluator {
            date,
            table: PinnacleTable::new(),
        }
    }

    /// Evaluates every position in `order` and returns the filled table.
    pub fn run(mut self, order: &[Position]) -> EngineResult<PinnacleTable> {
        for &position in order {
            let formula = formula_for(position).ok_or(EngineError::MissingFormula(position))?;
            let value = self.evaluate(formula)?;
            self.table.set(position, value);
        }
        Ok(self.table)
    }

    /// Evaluates a single formula against the values computed so far.
    pub fn evaluate(&self, formula: &Formula) -> EngineResult<PinnacleValue> {
        let value = match formula.rule {
            Rule::ReduceRaw(input) => reduce(self.raw(input)),
            Rule::ReduceYearDigits => reduce(digit_sum(u64::from(self.date.year))),
            Rule::ReduceRawSum(inputs) => reduce(inputs.iter().map(|&i| self.raw(i)).sum()),
            Rule::ReduceYearTail => reduce(u64::from(self.date.year_tail())),
            Rule::ReduceSum => {
                let values = self.scalars(formula)?;
                reduce(values.iter().map(|&v| u64::from(v)).sum())
            }
            Rule::NegativeDifference => {
                let (first, second) = self.pair(formula)?;
                convert_for_negative(first).abs_diff(convert_for_negative(second))
            }
            Rule::ChallengeSpread => {
                let (k, l) = self.pair(formula)?;
                if k != l {
                    k.abs_diff(l)
                } else {
                    reduce(u64::from(k) + u64::from(l))
                }
            }
            Rule::Triplicity => return Ok(triplicity(&self.scalars(formula)?)),
            Rule::AbsentDigits => return Ok(absent_digits(&self.scalars(formula)?)),
        };
        Ok(PinnacleValue::Single(value))
    }

    fn raw(&self, input: RawInput) -> u64 {
        match input {
            RawInput::Day => u64::from(self.date.day),
            RawInput::Month => u64::from(self.date.month),
            RawInput::Year => u64::from(self.date.year),
        }
    }

    /// The single-number values of every precedent, in formula order.
    fn scalars(&self, formula: &Formula) -> EngineResult<Vec<u32>> {
        formula
            .precedents
            .iter()
            .map(|&precedent| self.scalar(formula.position, precedent))
            .collect()
    }

    fn scalar(&self, position: Position, precedent: Position) -> EngineResult<u32> {
        match self.table.get(precedent) {
            Some(PinnacleValue::Single(n)) => Ok(*n),
            Some(PinnacleValue::Many(_)) => {
                Err(EngineError::NonScalarPrecedent { position, precedent })
            }
            None => Err(EngineError::MissingPrecedent { position, precedent }),
        }
    }

    /// The two precedents of a binary rule.
    fn pair(&self, formula: &Formula) -> EngineResult<(u32, u32)> {
        match formula.precedents {
            [first, second] => Ok((
                self.scalar(formula.position, *first)?,
                self.scalar(formula.position, *second)?,
            )),
            _ => Err(EngineError::InvalidInput(format!(
                "formula for {} needs exactly two precedents, has {}",
                formula.position,
                formula.precedents.len()
            ))),
        }
    }
}

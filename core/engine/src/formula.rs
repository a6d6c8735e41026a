//! FILENAME: core/engine/src/formula.rs
//! PURPOSE: The formula table: one rule and its precedents per position.
//! CONTEXT: Formulas are data, not code paths. The dependency graph is built
//! from the `precedents` listed here and the evaluator dispatches on `rule`,
//! so the evaluation order can never silently drift from what each formula
//! reads.
//!
//! RAW vs REDUCED INPUTS:
//! D and H sum the raw day, month and year (e.g. 5 + 6 + 1982) and reduce
//! once. Every other positive formula sums already reduced positions. The two
//! are not interchangeable: reducing 5 + 6 + 2 instead of 5 + 6 + 1982 gives
//! 4 instead of 22 for the same date.

use crate::position::Position;
use crate::position::Position::*;

/// A raw birth date component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput {
    Day,
    Month,
    Year,
}

/// How a position's value is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// reduce(component)
    ReduceRaw(RawInput),
    /// reduce(digit_sum(year))
    ReduceYearDigits,
    /// reduce(sum of raw components), unreduced before the single reduction
    ReduceRawSum(&'static [RawInput]),
    /// reduce(year mod 100)
    ReduceYearTail,
    /// reduce(sum of the precedents)
    ReduceSum,
    /// |first' - second'| with master numbers converted, not reduced
    NegativeDifference,
    /// K != L ? |K - L| : reduce(K + L)
    ChallengeSpread,
    /// Triplicity over the precedents
    Triplicity,
    /// Absent digits over the precedents
    AbsentDigits,
}

/// A single formula definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formula {
    pub position: Position,
    pub rule: Rule,
    pub precedents: &'static [Position],
}

/// All formulas of the Pinnacle. Listed in diagram reading order; the
/// evaluation order is derived from `precedents`, not from this listing.
pub const FORMULAS: [Formula; 24] = [
    Formula { position: A, rule: Rule::ReduceRaw(RawInput::Month), precedents: &[] },
    Formula { position: B, rule: Rule::ReduceRaw(RawInput::Day), precedents: &[] },
    Formula { position: C, rule: Rule::ReduceYearDigits, precedents: &[] },
    Formula {
        position: D,
        rule: Rule::ReduceRawSum(&[RawInput::Month, RawInput::Day, RawInput::Year]),
        precedents: &[],
    },
    Formula {
        position: H,
        rule: Rule::ReduceRawSum(&[RawInput::Month, RawInput::Year]),
        precedents: &[],
    },
    Formula { position: X, rule: Rule::ReduceSum, precedents: &[B, D] },
    Formula { position: Y, rule: Rule::ReduceSum, precedents: &[A, B, C, D, X] },
    Formula { position: E, rule: Rule::ReduceSum, precedents: &[A, B] },
    Formula { position: F, rule: Rule::ReduceSum, precedents: &[B, C] },
    Formula { position: G, rule: Rule::ReduceSum, precedents: &[E, F] },
    Formula { position: I, rule: Rule::ReduceSum, precedents: &[E, F, G] },
    Formula { position: J, rule: Rule::ReduceSum, precedents: &[D, H] },
    Formula { position: K, rule: Rule::NegativeDifference, precedents: &[A, B] },
    Formula { position: L, rule: Rule::NegativeDifference, precedents: &[B, C] },
    Formula { position: M, rule: Rule::ChallengeSpread, precedents: &[K, L] },
    Formula { position: N, rule: Rule::NegativeDifference, precedents: &[A, C] },
    Formula { position: O, rule: Rule::ReduceSum, precedents: &[M, K, L] },
    Formula { position: P, rule: Rule::ReduceSum, precedents: &[D, O] },
    Formula { position: Q, rule: Rule::ReduceSum, precedents: &[K, M] },
    Formula { position: R, rule: Rule::ReduceSum, precedents: &[L, M] },
    Formula { position: S, rule: Rule::ReduceSum, precedents: &[Q, R] },
    Formula { position: W, rule: Rule::Triplicity, precedents: &Position::NEGATIVE },
    Formula { position: Z, rule: Rule::ReduceYearTail, precedents: &[] },
    Formula { position: T, rule: Rule::AbsentDigits, precedents: &Position::A_TO_S },
];

/// Returns the formula that computes `position`.
pub fn formula_for(position: Position) -> Option<&'static Formula> {
    FORMULAS.iter().find(|f| f.position == position)
}

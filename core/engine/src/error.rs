//! FILENAME: core/engine/src/error.rs

use thiserror::Error;

use crate::dependency_graph::CycleError;
use crate::position::Position;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Cycle(#[from] CycleError),

    #[error("No formula registered for position {0}")]
    MissingFormula(Position),

    #[error("Position {position} was evaluated before its precedent {precedent}")]
    MissingPrecedent { position: Position, precedent: Position },

    #[error("Position {position} needs a single number from {precedent}")]
    NonScalarPrecedent { position: Position, precedent: Position },
}

pub type EngineResult<T> = Result<T, EngineError>;

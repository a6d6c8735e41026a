//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the Pinnacle numeric engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod absent;
pub mod birth_date;
pub mod dependency_graph;
pub mod error;
pub mod evaluator;
pub mod formula;
pub mod name_energy;
pub mod pinnacle;
pub mod position;
pub mod reduction;
pub mod table;
pub mod triplicity;
pub mod value;

// Re-export commonly used types at the crate root
pub use absent::absent_digits;
pub use birth_date::BirthDate;
pub use dependency_graph::{CycleError, DependencyGraph};
pub use error::{EngineError, EngineResult};
pub use evaluator::Evaluator;
pub use formula::{formula_for, Formula, RawInput, Rule, FORMULAS};
pub use name_energy::NameEnergy;
pub use pinnacle::{compute_pinnacle, compute_pinnacle_for, compute_table, evaluation_order, Pinnacle};
pub use position::{Position, Track};
pub use reduction::{convert_for_negative, digit_sum, is_master, reduce};
pub use table::PinnacleTable;
pub use triplicity::triplicity;
pub use value::PinnacleValue;

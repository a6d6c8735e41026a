//! FILENAME: core/engine/src/pinnacle.rs
//! PURPOSE: Entry points that compute a complete Pinnacle.
//! CONTEXT: Stateless. Every call builds the dependency graph from the
//! formula table, evaluates it in topological order and, for the full
//! profile, adds the name-energy figures. Two calls with the same input
//! return identical results.

use serde::{Deserialize, Serialize};

use crate::birth_date::BirthDate;
use crate::dependency_graph::DependencyGraph;
use crate::error::EngineResult;
use crate::evaluator::Evaluator;
use crate::formula::FORMULAS;
use crate::name_energy::NameEnergy;
use crate::position::Position;
use crate::table::PinnacleTable;

/// A complete numerology profile for one name and birth date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pinnacle {
    pub date: BirthDate,
    pub table: PinnacleTable,
    pub name_energy: NameEnergy,
    /// Positions holding 11, 22 or 33.
    pub master_positions: Vec<Position>,
}

/// The positions in the order they are evaluated.
pub fn evaluation_order() -> EngineResult<Vec<Position>> {
    let graph = DependencyGraph::from_formulas(&FORMULAS)?;
    Ok(graph.evaluation_order()?)
}

/// Computes all 24 positions for a birth date.
pub fn compute_table(date: &BirthDate) -> EngineResult<PinnacleTable> {
    let order = evaluation_order()?;
    Evaluator::new(date).run(&order)
}

/// Computes the table and the name-energy figures.
///
/// `day`, `month` and `year` are taken as raw integers: month 13 or
/// February 31st are accepted. Negative values are rejected.
pub fn compute_pinnacle(name: &str, day: i64, month: i64, year: i64) -> EngineResult<Pinnacle> {
    let date = BirthDate::new(day, month, year)?;
    compute_pinnacle_for(name, date)
}

/// Same as `compute_pinnacle` for an already validated date.
pub fn compute_pinnacle_for(name: &str, date: BirthDate) -> EngineResult<Pinnacle> {
    let table = compute_table(&date)?;
    let master_positions = table.master_positions();

    Ok(Pinnacle {
        date,
        table,
        name_energy: NameEnergy::from_name(name),
        master_positions,
    })
}

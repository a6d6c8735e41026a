//! FILENAME: app/src/api_types.rs
// PURPOSE: Report types printed by the command line.
// CONTEXT: All structs use camelCase serialization; position groups are keyed by letter.

use std::collections::BTreeMap;

use engine::{PinnacleValue, Position};
use serde::{Deserialize, Serialize};

/// Values of a group of positions, serialized as `{ "A": 5, "B": 6 }`.
pub type PositionGroup = BTreeMap<Position, u32>;

/// The full report for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyReport {
    pub name: String,
    /// Birth date normalized to DD/MM/YYYY
    pub birth_date: String,
    pub base_numbers: PositionGroup,
    pub positive_numbers: PositionGroup,
    pub negative_numbers: PositionGroup,
    #[serde(rename = "W")]
    pub w: PinnacleValue,
    #[serde(rename = "T")]
    pub t: PinnacleValue,
    pub summary: ReportSummary,
    /// Letters of the positions holding 11, 22 or 33
    pub master_numbers: Vec<Position>,
    /// RFC 3339 time of calculation
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub alma: u32,
    pub personalidad: u32,
    pub numero_personal: u32,
    /// Same as B
    pub esencia: u32,
    /// Same as Y
    pub mision: u32,
    /// Same as Z
    pub regalo_divino: u32,
}

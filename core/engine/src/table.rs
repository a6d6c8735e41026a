//! FILENAME: core/engine/src/table.rs
//! PURPOSE: Holds the computed values of every Pinnacle position.
//! CONTEXT: The `PinnacleTable` is what leaves the engine. It serializes as a
//! flat `{ "A": 5, ..., "T": [3, 9] }` object, which is all a diagram or
//! report consumer needs to know about it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::reduction::is_master;
use crate::value::PinnacleValue;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinnacleTable {
    values: BTreeMap<Position, PinnacleValue>,
}

impl PinnacleTable {
    /// Creates a new, empty table.
    pub fn new() -> Self {
        PinnacleTable::default()
    }

    /// Stores the value of a position, replacing any previous one.
    pub fn set(&mut self, position: Position, value: PinnacleValue) {
        self.values.insert(position, value);
    }

    pub fn get(&self, position: Position) -> Option<&PinnacleValue> {
        self.values.get(&position)
    }

    /// The value of a position when it holds a single number.
    pub fn get_single(&self, position: Position) -> Option<u32> {
        self.get(position).and_then(PinnacleValue::as_single)
    }

    /// Iterates positions and values in table (alphabetical) order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &PinnacleValue)> {
        self.values.iter().map(|(&position, value)| (position, value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when all 24 positions have a value.
    pub fn is_complete(&self) -> bool {
        Position::ALL.iter().all(|p| self.values.contains_key(p))
    }

    /// Positions currently holding 11, 22 or 33, in table order.
    pub fn master_positions(&self) -> Vec<Position> {
        self.iter()
            .filter(|(_, value)| {
                value
                    .as_single()
                    .map_or(false, |n| is_master(u64::from(n)))
            })
            .map(|(position, _)| position)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut table = PinnacleTable::new();
        assert!(table.is_empty());

        table.set(Position::A, PinnacleValue::Single(5));
        table.set(Position::T, PinnacleValue::Many(vec![3, 9]));

        assert_eq!(table.get_single(Position::A), Some(5));
        assert_eq!(table.get_single(Position::T), None);
        assert_eq!(table.get(Position::T), Some(&PinnacleValue::Many(vec![3, 9])));
        assert_eq!(table.get(Position::B), None);
        assert_eq!(table.len(), 2);
        assert!(!table.is_complete());
    }

    #[test]
    fn test_master_positions() {
        let mut table = PinnacleTable::new();
        table.set(Position::S, PinnacleValue::Single(11));
        table.set(Position::D, PinnacleValue::Single(22));
        table.set(Position::A, PinnacleValue::Single(4));
        table.set(Position::W, PinnacleValue::Many(vec![3, 9]));

        assert_eq!(table.master_positions(), vec![Position::D, Position::S]);
    }

    #[test]
    fn test_serializes_as_letter_map() {
        let mut table = PinnacleTable::new();
        table.set(Position::B, PinnacleValue::Single(6));
        table.set(Position::A, PinnacleValue::Single(5));
        table.set(Position::T, PinnacleValue::Many(vec![3, 9]));

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"A":5,"B":6,"T":[3,9]}"#);

        let back: PinnacleTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}

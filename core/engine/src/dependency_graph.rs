//! FILENAME: core/engine/src/dependency_graph.rs
//! PURPOSE: Implements the Directed Acyclic Graph (DAG) between Pinnacle positions.
//! CONTEXT: This module is the heart of the derivation order. It tracks which
//! positions read which other positions (precedents/dependents), detects
//! circular definitions, and computes the evaluation order using
//! topological sorting.
//!
//! TERMINOLOGY:
//! - Precedents: Positions a formula reads (its inputs).
//!   If X = reduce(B + D), then B and D are precedents of X.
//! - Dependents: Positions that read a given position (reverse lookup).
//!   If X = reduce(B + D), then X is a dependent of B and D.
//!
//! USAGE:
//! 1. Build the graph from the formula table with `from_formulas()`, or
//!    register positions one at a time with `set_dependencies()`.
//! 2. Call `evaluation_order()` to get every position ordered so that each
//!    one comes after all of its precedents.
//! 3. Use `would_create_cycle()` to check before registering a formula.
//!
//! Ordered maps keep the evaluation order stable between runs: among
//! positions that are ready at the same time, the alphabetically first one
//! goes first.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::formula::Formula;
use crate::position::Position;

/// Error type for cycle detection.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleError {
    /// The positions involved in the cycle, in order.
    pub cycle_path: Vec<Position>,
}

impl std::fmt::Display for CycleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Circular formula detected: ")?;
        for (i, position) in self.cycle_path.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", position)?;
        }
        Ok(())
    }
}

impl std::error::Error for CycleError {}

/// The Dependency Graph tracks relationships between positions.
/// It maintains both forward (precedents) and reverse (dependents) mappings
/// for efficient lookups in either direction.
#[derive(Debug, Default, Clone)]
pub struct DependencyGraph {
    /// Every registered position, including pure inputs with no precedents.
    nodes: BTreeSet<Position>,

    /// For each position, the set of positions it directly reads.
    /// If X = B + D, then precedents[X] = {B, D}.
    precedents: BTreeMap<Position, BTreeSet<Position>>,

    /// For each position, the set of positions that directly read it.
    /// If X = B + D, then dependents[B] contains X, and dependents[D] contains X.
    dependents: BTreeMap<Position, BTreeSet<Position>>,
}

impl DependencyGraph {
    /// Creates a new, empty dependency graph.
    pub fn new() -> Self {
        DependencyGraph::default()
    }

    /// Builds the graph for a formula table, rejecting any formula that would
    /// close a cycle.
    pub fn from_formulas(formulas: &[Formula]) -> Result<Self, CycleError> {
        let mut graph = DependencyGraph::new();
        for formula in formulas {
            let precedents: BTreeSet<Position> = formula.precedents.iter().copied().collect();
            if graph.would_create_cycle(formula.position, &precedents) {
                let mut cycle_path = vec![formula.position];
                cycle_path.extend(graph.path_between(&precedents, formula.position));
                return Err(CycleError { cycle_path });
            }
            graph.set_dependencies(formula.position, precedents);
        }
        Ok(graph)
    }

    /// Sets the dependencies for a position, replacing any previous ones.
    /// This updates both the precedents and dependents mappings.
    ///
    /// # Note
    /// This does NOT check for cycles. Use `would_create_cycle()` first if needed.
    pub fn set_dependencies(&mut self, position: Position, new_precedents: BTreeSet<Position>) {
        // First, remove old dependencies
        self.clear_dependencies(position);
        self.nodes.insert(position);

        if !new_precedents.is_empty() {
            // For each precedent, add this position as a dependent
            for &prec in &new_precedents {
                self.nodes.insert(prec);
                self.dependents.entry(prec).or_default().insert(position);
            }

            self.precedents.insert(position, new_precedents);
        }
    }

    /// Clears all dependencies for a position. The position stays registered.
    pub fn clear_dependencies(&mut self, position: Position) {
        if let Some(old_precs) = self.precedents.remove(&position) {
            // Remove this position from each precedent's dependents set
            for prec in old_precs {
                if let Some(deps) = self.dependents.get_mut(&prec) {
                    deps.remove(&position);
                    // Clean up empty sets
                    if deps.is_empty() {
                        self.dependents.remove(&prec);
                    }
                }
            }
        }
    }

    /// Returns the direct precedents of a position, or None if it reads nothing.
    pub fn get_precedents(&self, position: Position) -> Option<&BTreeSet<Position>> {
        self.precedents.get(&position)
    }

    /// Returns the direct dependents of a position, or None if nothing reads it.
    pub fn get_dependents(&self, position: Position) -> Option<&BTreeSet<Position>> {
        self.dependents.get(&position)
    }

    /// Checks if setting the given precedents for a position would create a cycle.
    /// This performs a DFS from each new precedent to see if we can reach the position.
    pub fn would_create_cycle(&self, position: Position, new_precedents: &BTreeSet<Position>) -> bool {
        // A position reading itself is a trivial cycle
        if new_precedents.contains(&position) {
            return true;
        }

        new_precedents
            .iter()
            .any(|&prec| self.can_reach(prec, position))
    }

    /// Checks if `start` can reach `target` by following precedent chains.
    fn can_reach(&self, start: Position, target: Position) -> bool {
        !self.path_from(start, target).is_empty()
    }

    /// Returns the precedent chain from `start` to `target` (both included),
    /// or an empty vector when `target` is not reachable.
    fn path_from(&self, start: Position, target: Position) -> Vec<Position> {
        let mut visited = BTreeSet::new();
        let mut stack = vec![vec![start]];

        while let Some(path) = stack.pop() {
            let current = match path.last() {
                Some(&p) => p,
                None => continue,
            };
            if current == target {
                return path;
            }
            if !visited.insert(current) {
                continue;
            }

            // Follow precedent chain (what does `current` read?)
            if let Some(precs) = self.precedents.get(&current) {
                for &prec in precs {
                    if !visited.contains(&prec) {
                        let mut next = path.clone();
                        next.push(prec);
                        stack.push(next);
                    }
                }
            }
        }

        Vec::new()
    }

    /// First precedent chain from any of `starts` back to `target`.
    fn path_between(&self, starts: &BTreeSet<Position>, target: Position) -> Vec<Position> {
        starts
            .iter()
            .map(|&start| self.path_from(start, target))
            .find(|path| !path.is_empty())
            .unwrap_or_default()
    }

    /// Returns every registered position in topological order
    /// (precedents before dependents) using Kahn's algorithm.
    ///
    /// # Returns
    /// - `Ok(Vec<Position>)` - All positions, in evaluation order.
    /// - `Err(CycleError)` - If a cycle is detected.
    pub fn evaluation_order(&self) -> Result<Vec<Position>, CycleError> {
        let mut in_degree: BTreeMap<Position, usize> = self
            .nodes
            .iter()
            .map(|&position| {
                let degree = self.precedents.get(&position).map_or(0, |p| p.len());
                (position, degree)
            })
            .collect();

        // Initialize queue with positions that read nothing
        let mut queue: VecDeque<Position> = in_degree
            .iter()
            .filter(|(_, &deg)| deg == 0)
            .map(|(&position, _)| position)
            .collect();

        let mut result = Vec::with_capacity(self.nodes.len());

        while let Some(position) = queue.pop_front() {
            result.push(position);

            // Decrease in-degree for all dependents
            if let Some(deps) = self.dependents.get(&position) {
                for &dep in deps {
                    if let Some(deg) = in_degree.get_mut(&dep) {
                        *deg -= 1;
                        if *deg == 0 {
                            queue.push_back(dep);
                        }
                    }
                }
            }
        }

        // If we didn't process all positions, there's a cycle
        if result.len() != self.nodes.len() {
            let cycle_positions: Vec<Position> = in_degree
                .iter()
                .filter(|(_, &deg)| deg > 0)
                .map(|(&position, _)| position)
                .collect();

            let cycle_path = self.find_cycle_path(&cycle_positions);
            return Err(CycleError { cycle_path });
        }

        Ok(result)
    }

    /// Attempts to find and return a cycle path for error reporting.
    /// Returns a simple list of cycle participants if exact path can't be found.
    fn find_cycle_path(&self, cycle_positions: &[Position]) -> Vec<Position> {
        let start = match cycle_positions.first() {
            Some(&p) => p,
            None => return Vec::new(),
        };

        let position_set: BTreeSet<Position> = cycle_positions.iter().copied().collect();
        let mut path = vec![start];
        let mut current = start;

        // Follow precedents to trace the cycle
        for _ in 0..cycle_positions.len() {
            let next = self
                .precedents
                .get(&current)
                .and_then(|precs| precs.iter().find(|p| position_set.contains(p)).copied());

            match next {
                Some(next) if next == start || path.contains(&next) => {
                    path.push(next);
                    return path;
                }
                Some(next) => {
                    path.push(next);
                    current = next;
                }
                None => break,
            }
        }

        // Fallback: just return the positions involved
        cycle_positions.to_vec()
    }

    /// Returns the number of registered positions.
    pub fn position_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the total number of dependency relationships.
    pub fn dependency_count(&self) -> usize {
        self.precedents.values().map(|v| v.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{Rule, FORMULAS};
    use crate::position::Position::*;

    fn set_of(positions: &[Position]) -> BTreeSet<Position> {
        positions.iter().copied().collect()
    }

    fn index_of(order: &[Position], position: Position) -> usize {
        order.iter().position(|&p| p == position).unwrap()
    }

    #[test]
    fn test_set_and_get_dependencies() {
        let mut graph = DependencyGraph::new();

        // X = B + D
        graph.set_dependencies(X, set_of(&[B, D]));

        let precs = graph.get_precedents(X).unwrap();
        assert!(precs.contains(&B));
        assert!(precs.contains(&D));
        assert_eq!(precs.len(), 2);

        assert!(graph.get_dependents(B).unwrap().contains(&X));
        assert!(graph.get_dependents(D).unwrap().contains(&X));
        assert_eq!(graph.position_count(), 3);
    }

    #[test]
    fn test_update_dependencies() {
        let mut graph = DependencyGraph::new();

        graph.set_dependencies(E, set_of(&[A, B]));
        graph.set_dependencies(E, set_of(&[C]));

        let precs = graph.get_precedents(E).unwrap();
        assert_eq!(precs.len(), 1);
        assert!(precs.contains(&C));

        assert!(graph.get_dependents(A).is_none());
        assert!(graph.get_dependents(B).is_none());
        assert!(graph.get_dependents(C).unwrap().contains(&E));
    }

    #[test]
    fn test_clear_dependencies_keeps_node() {
        let mut graph = DependencyGraph::new();
        graph.set_dependencies(E, set_of(&[A, B]));
        graph.clear_dependencies(E);

        assert!(graph.get_precedents(E).is_none());
        assert!(graph.get_dependents(A).is_none());
        assert_eq!(graph.position_count(), 3);
    }

    #[test]
    fn test_cycle_detection_self_reference() {
        let graph = DependencyGraph::new();
        assert!(graph.would_create_cycle(M, &set_of(&[M])));
    }

    #[test]
    fn test_cycle_detection_transitive() {
        let mut graph = DependencyGraph::new();

        graph.set_dependencies(L, set_of(&[K]));
        graph.set_dependencies(M, set_of(&[L]));

        // K = M would close K -> M -> L -> K
        assert!(graph.would_create_cycle(K, &set_of(&[M])));
        assert!(!graph.would_create_cycle(N, &set_of(&[M])));
    }

    #[test]
    fn test_from_formulas_rejects_cycle() {
        let formulas = [
            Formula { position: K, rule: Rule::ReduceSum, precedents: &[M] },
            Formula { position: L, rule: Rule::ReduceSum, precedents: &[K] },
            Formula { position: M, rule: Rule::ReduceSum, precedents: &[L] },
        ];

        let err = DependencyGraph::from_formulas(&formulas).unwrap_err();
        assert_eq!(err.cycle_path, vec![M, L, K, M]);
        assert_eq!(err.to_string(), "Circular formula detected: M -> L -> K -> M");
    }

    #[test]
    fn test_evaluation_order_detects_injected_cycle() {
        let mut graph = DependencyGraph::new();
        // Bypass would_create_cycle
        graph.set_dependencies(Q, set_of(&[R]));
        graph.set_dependencies(R, set_of(&[Q]));
        graph.set_dependencies(S, set_of(&[Q, R]));

        let err = graph.evaluation_order().unwrap_err();
        assert!(err.cycle_path.contains(&Q));
        assert!(err.cycle_path.contains(&R));
    }

    #[test]
    fn test_full_table_order_respects_precedents() {
        let graph = DependencyGraph::from_formulas(&FORMULAS).unwrap();
        let order = graph.evaluation_order().unwrap();

        assert_eq!(order.len(), 24);
        for formula in FORMULAS.iter() {
            let at = index_of(&order, formula.position);
            for &prec in formula.precedents {
                assert!(
                    index_of(&order, prec) < at,
                    "{} must come before {}",
                    prec,
                    formula.position
                );
            }
        }
    }

    #[test]
    fn test_full_table_order_is_stable() {
        let graph = DependencyGraph::from_formulas(&FORMULAS).unwrap();
        let first = graph.evaluation_order().unwrap();
        let second = graph.evaluation_order().unwrap();
        assert_eq!(first, second);
        // Inputs come first, alphabetically
        assert_eq!(&first[..6], &[A, B, C, D, H, Z]);
        // The absent-digits rule reads everything up to S, so it comes late
        assert!(index_of(&first, T) > index_of(&first, S));
    }

    #[test]
    fn test_counts() {
        let graph = DependencyGraph::from_formulas(&FORMULAS).unwrap();
        assert_eq!(graph.position_count(), 24);
        // X2 Y5 E2 F2 G2 I3 J2 K2 L2 M2 N2 O3 P2 Q2 R2 S2 W9 T19
        assert_eq!(graph.dependency_count(), 65);
    }
}

use num_traits::PrimInt;
use std::fmt::Debug;

use crate::error::{Error, Result};

/// A dense matrix of remaining directed capacities between `node_count` nodes.
///
/// Built from an undirected edge list, every edge `(u, v)` contributes one unit
/// of capacity in each direction. Duplicate edges accumulate. Once flow has been
/// pushed through the graph the same matrix holds the residual capacities: every
/// decrease of `cap[u][v]` is matched by an equal increase of `cap[v][u]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityGraph<C = u32> {
    node_count: usize,
    cap: Vec<C>,
}

impl<C> CapacityGraph<C>
where
    C: PrimInt + Debug,
{
    /// Creates a graph with `node_count` nodes and no capacity anywhere.
    ///
    /// # Errors
    /// `InvalidInput` if the `node_count * node_count` matrix size overflows `usize`.
    pub fn new(node_count: usize) -> Result<Self> {
        let cells = node_count.checked_mul(node_count).ok_or_else(|| {
            Error::invalid_input(format!(
                "{} nodes need more matrix cells than fit in usize",
                node_count
            ))
        })?;
        Ok(Self {
            node_count,
            cap: vec![C::zero(); cells],
        })
    }

    /// Builds a unit-capacity graph from undirected edges.
    ///
    /// # Arguments
    /// - `node_count`: Number of nodes, indexed `0..node_count`.
    /// - `edges`: Undirected `(u, v)` pairs. Self-loops and duplicates are allowed
    ///   and simply accumulate capacity.
    ///
    /// # Errors
    /// `IndexOutOfRange` if any endpoint is `>= node_count`, `CapacityOverflow`
    /// if duplicates push a capacity past `C::max_value()`.
    pub fn build(node_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self::new(node_count)?;
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Adds one unit of capacity in both directions between `u` and `v`.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.add_capacity(u, v, C::one())?;
        self.add_capacity(v, u, C::one())
    }

    /// Adds `amount` of directed capacity from `u` to `v`.
    pub fn add_capacity(&mut self, u: usize, v: usize, amount: C) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        let slot = self.slot(u, v);
        self.cap[slot] = self.cap[slot]
            .checked_add(&amount)
            .ok_or(Error::CapacityOverflow { from: u, to: v })?;
        Ok(())
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Remaining capacity from `u` to `v`.
    ///
    /// # Panics
    /// If `u` or `v` is out of range, like slice indexing.
    pub fn capacity(&self, u: usize, v: usize) -> C {
        self.cap[self.slot(u, v)]
    }

    /// Overwrites the capacity from `u` to `v`.
    ///
    /// # Panics
    /// If `u` or `v` is out of range, like slice indexing.
    pub fn set_capacity(&mut self, u: usize, v: usize, value: C) {
        let slot = self.slot(u, v);
        self.cap[slot] = value;
    }

    /// Iterates over the nodes reachable from `u` through one edge of positive
    /// capacity, in ascending index order.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        let row = &self.cap[u * self.node_count..(u + 1) * self.node_count];
        row.iter()
            .enumerate()
            .filter(|(_, &c)| c > C::zero())
            .map(|(v, _)| v)
    }

    /// Number of distinct neighbors of `u`, ignoring a self-loop.
    pub fn degree(&self, u: usize) -> usize {
        self.neighbors(u).filter(|&v| v != u).count()
    }

    /// Counts unordered node pairs `{u, v}`, `u != v`, joined by positive
    /// capacity in at least one direction.
    pub fn edge_count(&self) -> usize {
        let n = self.node_count;
        (0..n)
            .flat_map(|u| (u + 1..n).map(move |v| (u, v)))
            .filter(|&(u, v)| self.capacity(u, v) > C::zero() || self.capacity(v, u) > C::zero())
            .count()
    }

    /// Whether every positive capacity between distinct nodes is exactly one.
    pub fn is_unit_capacity(&self) -> bool {
        let n = self.node_count;
        (0..n).all(|u| {
            (0..n)
                .filter(|&v| v != u)
                .all(|v| {
                    let c = self.capacity(u, v);
                    c == C::zero() || c == C::one()
                })
        })
    }

    pub(crate) fn check_node(&self, index: usize) -> Result<()> {
        if index >= self.node_count {
            return Err(Error::IndexOutOfRange {
                index,
                node_count: self.node_count,
            });
        }
        Ok(())
    }

    fn slot(&self, u: usize, v: usize) -> usize {
        assert!(
            u < self.node_count && v < self.node_count,
            "edge ({}, {}) out of range for {} nodes",
            u,
            v,
            self.node_count
        );
        u * self.node_count + v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_graph_build_is_symmetric() {
        let graph: CapacityGraph = CapacityGraph::build(3, &[(0, 1), (1, 2)]).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.capacity(0, 1), 1);
        assert_eq!(graph.capacity(1, 0), 1);
        assert_eq!(graph.capacity(1, 2), 1);
        assert_eq!(graph.capacity(2, 1), 1);
        assert_eq!(graph.capacity(0, 2), 0);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.is_unit_capacity());
    }

    #[test]
    fn test_capacity_graph_duplicates_accumulate() {
        let graph: CapacityGraph = CapacityGraph::build(2, &[(0, 1), (1, 0), (0, 1)]).unwrap();
        assert_eq!(graph.capacity(0, 1), 3);
        assert_eq!(graph.capacity(1, 0), 3);
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.is_unit_capacity());
    }

    #[test]
    fn test_capacity_graph_self_loop_accumulates() {
        let graph: CapacityGraph = CapacityGraph::build(2, &[(1, 1)]).unwrap();
        assert_eq!(graph.capacity(1, 1), 2);
        assert_eq!(graph.degree(1), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_unit_capacity());
    }

    #[test]
    fn test_capacity_graph_out_of_range() {
        let result = CapacityGraph::<u32>::build(3, &[(0, 1), (1, 3)]);
        assert!(matches!(
            result,
            Err(Error::IndexOutOfRange {
                index: 3,
                node_count: 3
            })
        ));
    }

    #[test]
    fn test_capacity_graph_empty() {
        let graph: CapacityGraph = CapacityGraph::build(0, &[]).unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(matches!(
            CapacityGraph::<u32>::build(0, &[(0, 0)]),
            Err(Error::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_capacity_graph_overflow() {
        let mut graph = CapacityGraph::<u8>::new(2).unwrap();
        graph.set_capacity(0, 1, u8::MAX);
        assert_eq!(
            graph.add_edge(0, 1),
            Err(Error::CapacityOverflow { from: 0, to: 1 })
        );
    }

    #[test]
    fn test_capacity_graph_neighbors_ascending() {
        let graph: CapacityGraph = CapacityGraph::build(5, &[(2, 4), (2, 0), (2, 3)]).unwrap();
        assert_eq!(graph.neighbors(2).collect::<Vec<_>>(), vec![0, 3, 4]);
        assert_eq!(graph.degree(2), 3);
        assert_eq!(graph.neighbors(1).count(), 0);
    }

    #[test]
    fn test_capacity_graph_set_capacity() {
        let mut graph: CapacityGraph = CapacityGraph::new(2).unwrap();
        graph.set_capacity(1, 0, 7);
        assert_eq!(graph.capacity(1, 0), 7);
        assert_eq!(graph.capacity(0, 1), 0);
    }

    #[test]
    fn test_capacity_graph_node_count_too_large() {
        assert!(matches!(
            CapacityGraph::<u32>::new(usize::MAX),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            CapacityGraph::<u32>::build(1 << (usize::BITS / 2), &[]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    #[should_panic]
    fn test_capacity_graph_capacity_panics_out_of_range() {
        let graph: CapacityGraph = CapacityGraph::new(2).unwrap();
        graph.capacity(0, 2);
    }
}

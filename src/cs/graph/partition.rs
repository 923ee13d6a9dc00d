use num_traits::PrimInt;
use std::fmt::Debug;

use super::augmenting_path::reachable;
use super::capacity_graph::CapacityGraph;
use crate::error::Result;

/// Two disjoint node sets covering the whole graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    on_source_side: Vec<bool>,
    source_side: Vec<usize>,
    sink_side: Vec<usize>,
}

impl Partition {
    fn from_membership(on_source_side: Vec<bool>) -> Self {
        let (source_side, sink_side): (Vec<usize>, Vec<usize>) =
            (0..on_source_side.len()).partition(|&u| on_source_side[u]);
        Self {
            on_source_side,
            source_side,
            sink_side,
        }
    }

    /// Nodes reachable from the source in the residual graph, ascending.
    pub fn source_side(&self) -> &[usize] {
        &self.source_side
    }

    /// All remaining nodes, ascending.
    pub fn sink_side(&self) -> &[usize] {
        &self.sink_side
    }

    pub fn is_source_side(&self, node: usize) -> bool {
        self.on_source_side.get(node).copied().unwrap_or(false)
    }

    /// `(|source side|, |sink side|)`.
    pub fn sizes(&self) -> (usize, usize) {
        (self.source_side.len(), self.sink_side.len())
    }

    /// Product of the two side sizes.
    pub fn product(&self) -> usize {
        self.source_side.len() * self.sink_side.len()
    }

    /// Edges of `original` leaving the source side, as `(source-side node, sink-side node)`.
    /// Parallel edges appear once.
    pub fn crossing_edges<C>(&self, original: &CapacityGraph<C>) -> Vec<(usize, usize)>
    where
        C: PrimInt + Debug,
    {
        self.source_side
            .iter()
            .flat_map(|&u| {
                original
                    .neighbors(u)
                    .filter(|&v| !self.is_source_side(v))
                    .map(move |v| (u, v))
            })
            .collect()
    }

    /// Total capacity in `original` from the source side to the sink side.
    pub fn cut_capacity<C>(&self, original: &CapacityGraph<C>) -> C
    where
        C: PrimInt + Debug,
    {
        self.crossing_edges(original)
            .into_iter()
            .fold(C::zero(), |acc, (u, v)| {
                acc.saturating_add(original.capacity(u, v))
            })
    }
}

/// Splits a saturated residual graph into the nodes still reachable from
/// `source` and everything else.
///
/// After [`max_flow`](super::edmond_karp::max_flow) returns, the sink is never
/// reachable, so it always lands on the sink side unless `source == sink`.
pub fn partition<C>(residual: &CapacityGraph<C>, source: usize) -> Result<Partition>
where
    C: PrimInt + Debug,
{
    Ok(Partition::from_membership(reachable(residual, source)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::graph::edmond_karp::max_flow;
    use crate::error::Error;

    #[test]
    fn test_partition_scenario_a() {
        let original: CapacityGraph =
            CapacityGraph::build(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (1, 3)]).unwrap();
        let mut residual = original.clone();
        let flow = max_flow(&mut residual, 0, 2).unwrap();
        let parts = partition(&residual, 0).unwrap();

        assert_eq!(flow, 2);
        let (a, b) = parts.sizes();
        assert_eq!(a + b, 4);
        assert!(parts.is_source_side(0));
        assert!(!parts.is_source_side(2));
        assert_eq!(parts.cut_capacity(&original), flow);
    }

    #[test]
    fn test_partition_disconnected() {
        let original: CapacityGraph = CapacityGraph::build(5, &[(0, 1), (1, 2), (3, 4)]).unwrap();
        let mut residual = original.clone();
        assert_eq!(max_flow(&mut residual, 0, 4).unwrap(), 0);
        let parts = partition(&residual, 0).unwrap();
        assert_eq!(parts.source_side(), &[0, 1, 2]);
        assert_eq!(parts.sink_side(), &[3, 4]);
        assert!(parts.crossing_edges(&original).is_empty());
        assert_eq!(parts.product(), 6);
    }

    #[test]
    fn test_partition_is_idempotent() {
        let original: CapacityGraph =
            CapacityGraph::build(6, &[(0, 1), (1, 2), (0, 2), (2, 3), (3, 4), (4, 5), (3, 5)])
                .unwrap();
        let mut residual = original.clone();
        assert_eq!(max_flow(&mut residual, 0, 5).unwrap(), 1);
        let first = partition(&residual, 0).unwrap();
        let second = partition(&residual, 0).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.source_side(), &[0, 1, 2]);
        assert_eq!(first.crossing_edges(&original), vec![(2, 3)]);
    }

    #[test]
    fn test_partition_covers_every_node_once() {
        let original: CapacityGraph =
            CapacityGraph::build(7, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 0)])
                .unwrap();
        let mut residual = original.clone();
        max_flow(&mut residual, 0, 3).unwrap();
        let parts = partition(&residual, 0).unwrap();
        let mut all: Vec<usize> = parts
            .source_side()
            .iter()
            .chain(parts.sink_side())
            .copied()
            .collect();
        all.sort_unstable();
        assert_eq!(all, (0..7).collect::<Vec<_>>());
        assert_eq!(parts.cut_capacity(&original), 2);
    }

    #[test]
    fn test_partition_out_of_range() {
        let graph: CapacityGraph = CapacityGraph::new(2).unwrap();
        assert!(matches!(
            partition(&graph, 2),
            Err(Error::IndexOutOfRange { index: 2, .. })
        ));
    }
}

//! End-to-end bisection of an undirected graph: pick endpoints, saturate, split.

use log::{debug, info};
use num_traits::PrimInt;
use std::fmt::Debug;

use super::capacity_graph::CapacityGraph;
use super::edmond_karp::max_flow;
use super::endpoint_selector::select_endpoints;
use super::partition::{partition, Partition};
use crate::error::{Error, Result};

/// The outcome of one minimum `source`/`sink` cut computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bisection<C = u32> {
    pub source: usize,
    pub sink: usize,
    pub total_flow: C,
    pub partition: Partition,
}

impl<C> Bisection<C>
where
    C: PrimInt + Debug,
{
    /// Edges of `original` that cross the cut.
    pub fn crossing_edges(&self, original: &CapacityGraph<C>) -> Vec<(usize, usize)> {
        self.partition.crossing_edges(original)
    }

    /// Capacity of the cut measured on `original`; equals `total_flow`.
    pub fn cut_capacity(&self, original: &CapacityGraph<C>) -> C {
        self.partition.cut_capacity(original)
    }
}

/// Minimum cut between `source` and `sink`. The input graph is left untouched.
pub fn bisect<C>(graph: &CapacityGraph<C>, source: usize, sink: usize) -> Result<Bisection<C>>
where
    C: PrimInt + Debug,
{
    let mut residual = graph.clone();
    let total_flow = max_flow(&mut residual, source, sink)?;
    let partition = partition(&residual, source)?;
    Ok(Bisection {
        source,
        sink,
        total_flow,
        partition,
    })
}

/// Minimum cut between the pair chosen by [`select_endpoints`].
pub fn bisect_farthest<C>(graph: &CapacityGraph<C>) -> Result<Bisection<C>>
where
    C: PrimInt + Debug,
{
    let (source, sink) = select_endpoints(graph)?;
    bisect(graph, source, sink)
}

/// Finds a cut of exactly `expected_cut` capacity.
///
/// Tries the farthest pair first. If its flow differs, keeps the first endpoint
/// as source and tries every other node as sink in ascending order.
///
/// # Errors
/// `CutNotFound` if no tried pair yields `expected_cut`.
pub fn bisect_verified<C>(graph: &CapacityGraph<C>, expected_cut: C) -> Result<Bisection<C>>
where
    C: PrimInt + Debug,
{
    let (source, sink) = select_endpoints(graph)?;
    let first = bisect(graph, source, sink)?;
    if first.total_flow == expected_cut {
        return Ok(first);
    }
    info!(
        "farthest pair {} -> {} gave cut {:?}, expected {:?}; trying other sinks",
        source, sink, first.total_flow, expected_cut
    );

    for candidate in (0..graph.node_count()).filter(|&t| t != source && t != sink) {
        let attempt = bisect(graph, source, candidate)?;
        debug!("{} -> {} gave cut {:?}", source, candidate, attempt.total_flow);
        if attempt.total_flow == expected_cut {
            return Ok(attempt);
        }
    }

    Err(Error::CutNotFound {
        expected: expected_cut.to_u64().unwrap_or(u64::MAX),
    })
}

/// Exact global minimum cut of an undirected graph.
///
/// Any global cut separates node 0 from some other node, so the smallest
/// `max_flow(0, t)` over all `t` is the global minimum. Ties go to the lowest `t`.
///
/// # Complexity
/// * Time: V - 1 max-flow computations
pub fn global_min_cut<C>(graph: &CapacityGraph<C>) -> Result<Bisection<C>>
where
    C: PrimInt + Debug,
{
    if graph.node_count() < 2 {
        return Err(Error::invalid_input(
            "global minimum cut needs at least two nodes",
        ));
    }

    let mut best: Option<Bisection<C>> = None;
    for sink in 1..graph.node_count() {
        let candidate = bisect(graph, 0, sink)?;
        if best
            .as_ref()
            .map_or(true, |b| candidate.total_flow < b.total_flow)
        {
            best = Some(candidate);
        }
    }
    best.ok_or_else(|| Error::invalid_input("global minimum cut needs at least two nodes"))
}

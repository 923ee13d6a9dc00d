use log::{debug, warn};
use num_traits::PrimInt;
use std::fmt::Debug;

use super::augmenting_path::{distances, Distance};
use super::capacity_graph::CapacityGraph;
use crate::error::Result;

/// Picks a plausible `(source, sink)` pair for a minimum cut by double sweep.
///
/// Starting from node 0, finds the farthest reachable node `a`; then finds the
/// farthest reachable node `b` from `a`. Ties go to the lowest index.
///
/// This is a heuristic. On two dense clusters joined by a thin bridge it tends
/// to put `a` and `b` on opposite sides, but nothing guarantees it; callers that
/// need a specific cut should check the resulting flow (see
/// [`bisect_verified`](super::min_cut::bisect_verified)).
///
/// Distances sum edge capacities, so the sweep is only meaningful on
/// unit-capacity graphs. A warning is logged otherwise.
///
/// # Errors
/// `IndexOutOfRange` on a graph with no nodes.
pub fn select_endpoints<C>(graph: &CapacityGraph<C>) -> Result<(usize, usize)>
where
    C: PrimInt + Debug,
{
    if !graph.is_unit_capacity() {
        warn!("farthest-pair selection on a graph with non-unit capacities; distances are not hop counts");
    }

    let node_a = farthest_from(graph, 0)?;
    let node_b = farthest_from(graph, node_a)?;
    debug!("selected endpoints {} and {}", node_a, node_b);
    Ok((node_a, node_b))
}

fn farthest_from<C>(graph: &CapacityGraph<C>, start: usize) -> Result<usize>
where
    C: PrimInt + Debug,
{
    let dist = distances(graph, start)?;
    let mut best = start;
    let mut best_dist = C::zero();
    for (node, d) in dist.into_iter().enumerate() {
        if let Distance::Finite(d) = d {
            if d > best_dist {
                best = node;
                best_dist = d;
            }
        }
    }
    Ok(best)
}

use log::{debug, trace};
use num_traits::PrimInt;
use std::fmt::Debug;

use super::augmenting_path::find_path;
use super::capacity_graph::CapacityGraph;
use crate::error::{Error, Result};

/// Saturates `graph` with flow from `source` to `sink` using Edmonds-Karp.
///
/// Repeatedly pushes the bottleneck capacity along the shortest augmenting path
/// until the sink is unreachable. The graph is mutated in place and holds the
/// residual capacities afterwards.
///
/// # Arguments
/// - `graph`: Capacity graph, borrowed exclusively for the duration of the call.
/// - `source`, `sink`: Endpoints. `source == sink` is a degenerate case with zero flow.
///
/// # Returns
/// The total flow, which equals the capacity of the minimum `source`/`sink` cut.
///
/// # Complexity
/// * Time: O(V * E^2) in general, O(F * V^2) on this dense representation,
///   where F is the returned flow
/// * Space: O(V)
pub fn max_flow<C>(graph: &mut CapacityGraph<C>, source: usize, sink: usize) -> Result<C>
where
    C: PrimInt + Debug,
{
    graph.check_node(source)?;
    graph.check_node(sink)?;

    let mut total_flow = C::zero();
    if source == sink {
        return Ok(total_flow);
    }

    let mut augmentations = 0usize;
    loop {
        let path = find_path(graph, source, sink)?;
        if path.is_empty() {
            break;
        }

        let bottleneck = path
            .windows(2)
            .map(|pair| graph.capacity(pair[0], pair[1]))
            .min()
            .unwrap_or_else(C::zero);
        trace!("augmenting {:?} by {:?}", path, bottleneck);

        // Compute every update before writing so an overflow leaves the graph untouched.
        let updates = path
            .windows(2)
            .map(|pair| {
                let (a, b) = (pair[0], pair[1]);
                let backward = graph
                    .capacity(b, a)
                    .checked_add(&bottleneck)
                    .ok_or(Error::CapacityOverflow { from: b, to: a })?;
                Ok::<_, Error>((a, b, graph.capacity(a, b) - bottleneck, backward))
            })
            .collect::<Result<Vec<_>>>()?;
        for (a, b, forward, backward) in updates {
            graph.set_capacity(a, b, forward);
            graph.set_capacity(b, a, backward);
        }

        total_flow = total_flow
            .checked_add(&bottleneck)
            .ok_or(Error::CapacityOverflow {
                from: source,
                to: sink,
            })?;
        augmentations += 1;
    }

    debug!(
        "max flow {} -> {} = {:?} after {} augmenting paths",
        source, sink, total_flow, augmentations
    );
    Ok(total_flow)
}

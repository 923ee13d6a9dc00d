//! Breadth-first search over the positive-capacity edges of a [`CapacityGraph`].
//!
//! One traversal primitive records, for every node it discovers, the predecessor
//! it was first discovered from and the cheapest accumulated capacity seen
//! before it was expanded. The
//! public queries are thin views over that record:
//!
//! - [`find_path`] stops once the sink is dequeued and returns the source-to-sink path.
//! - [`distances`] runs to exhaustion and returns a [`Distance`] per node.
//! - [`parents`] runs to exhaustion and returns the BFS predecessor per node.
//! - [`reachable`] runs to exhaustion and returns which nodes were visited.
//!
//! Neighbors are enumerated in ascending index order and the first discovery of
//! a node wins, so among several shortest paths the lexicographically earliest
//! parent chain is reported.
//!
//! The distance of a node is the smallest sum of residual capacities over the
//! routes that discovered it before it was dequeued, so it can be shorter than
//! the capacity sum along its BFS tree path. It equals the hop count only when
//! every edge has capacity one; FIFO order does not yield shortest weighted
//! paths on graphs with other capacities.

use num_traits::PrimInt;
use std::collections::VecDeque;
use std::fmt::Debug;

use super::capacity_graph::CapacityGraph;
use crate::error::Result;

/// Accumulated capacity from the traversal root, or `Unreachable`.
///
/// `Unreachable` orders after every finite distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<C> {
    Finite(C),
    Unreachable,
}

impl<C: Copy> Distance<C> {
    pub fn finite(self) -> Option<C> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

struct Traversal<C> {
    visited: Vec<bool>,
    parent: Vec<Option<usize>>,
    distance: Vec<Distance<C>>,
}

/// Runs BFS from `source`, following only edges with positive capacity.
/// Stops early once `stop_at` is dequeued.
fn traverse<C>(graph: &CapacityGraph<C>, source: usize, stop_at: Option<usize>) -> Traversal<C>
where
    C: PrimInt + Debug,
{
    let n = graph.node_count();
    let mut visited = vec![false; n];
    let mut expanded = vec![false; n];
    let mut parent = vec![None; n];
    let mut distance = vec![Distance::Unreachable; n];
    let mut queue = VecDeque::new();

    visited[source] = true;
    distance[source] = Distance::Finite(C::zero());
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        if Some(u) == stop_at {
            break;
        }
        expanded[u] = true;
        // Every queued node was discovered with a finite distance.
        let base = distance[u].finite().unwrap_or_else(C::zero);
        for v in graph.neighbors(u) {
            if expanded[v] {
                continue;
            }
            // Saturates only on graphs whose capacities already sit near C::max_value().
            let through_u = Distance::Finite(base.saturating_add(graph.capacity(u, v)));
            if visited[v] {
                // Still queued: the parent stays, the distance takes the cheaper route.
                distance[v] = distance[v].min(through_u);
                continue;
            }
            visited[v] = true;
            parent[v] = Some(u);
            distance[v] = through_u;
            queue.push_back(v);
        }
    }

    Traversal {
        visited,
        parent,
        distance,
    }
}

/// Finds a shortest (fewest hops) path from `source` to `sink` over edges with
/// positive residual capacity.
///
/// Returns the node sequence starting at `source` and ending at `sink`, or an
/// empty vector if `sink` cannot be reached. When `source == sink` the path is
/// the single node.
pub fn find_path<C>(graph: &CapacityGraph<C>, source: usize, sink: usize) -> Result<Vec<usize>>
where
    C: PrimInt + Debug,
{
    graph.check_node(source)?;
    graph.check_node(sink)?;

    let traversal = traverse(graph, source, Some(sink));
    if !traversal.visited[sink] {
        return Ok(Vec::new());
    }

    let mut path = vec![sink];
    let mut curr = sink;
    while let Some(prev) = traversal.parent[curr] {
        path.push(prev);
        curr = prev;
    }
    path.reverse();
    Ok(path)
}

/// Cheapest accumulated capacity from `source` to every node, over the routes
/// that reached it before it was dequeued.
pub fn distances<C>(graph: &CapacityGraph<C>, source: usize) -> Result<Vec<Distance<C>>>
where
    C: PrimInt + Debug,
{
    graph.check_node(source)?;
    Ok(traverse(graph, source, None).distance)
}

/// BFS predecessor of every node; `None` for `source` itself and unreached nodes.
pub fn parents<C>(graph: &CapacityGraph<C>, source: usize) -> Result<Vec<Option<usize>>>
where
    C: PrimInt + Debug,
{
    graph.check_node(source)?;
    Ok(traverse(graph, source, None).parent)
}

/// Marks every node reachable from `source` over positive-capacity edges.
pub fn reachable<C>(graph: &CapacityGraph<C>, source: usize) -> Result<Vec<bool>>
where
    C: PrimInt + Debug,
{
    graph.check_node(source)?;
    Ok(traverse(graph, source, None).visited)
}

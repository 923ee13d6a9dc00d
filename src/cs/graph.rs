pub mod adjacency;
pub mod augmenting_path;
pub mod capacity_graph;
pub mod edmond_karp;
pub mod endpoint_selector;
pub mod min_cut;
pub mod partition;

pub use adjacency::AdjacencyList;
pub use augmenting_path::{distances, find_path, parents, reachable, Distance};
pub use capacity_graph::CapacityGraph;
pub use edmond_karp::max_flow;
pub use endpoint_selector::select_endpoints;
pub use min_cut::{bisect, bisect_farthest, bisect_verified, global_min_cut, Bisection};
pub use partition::{partition, Partition};

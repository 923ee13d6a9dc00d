use num_traits::PrimInt;
use std::collections::HashMap;
use std::fmt::Debug;
use std::str::FromStr;

use super::capacity_graph::CapacityGraph;
use crate::error::{Error, Result};

/// Named undirected graph read from `name: neighbor neighbor ...` lines.
///
/// Names are numbered in order of first appearance, reading each line's name
/// before its neighbors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    names: Vec<String>,
    index: HashMap<String, usize>,
    edges: Vec<(usize, usize)>,
}

impl AdjacencyList {
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Undirected edges, one per declared neighbor, in input order.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownNode(name.to_string()))
    }

    pub fn to_capacity_graph<C>(&self) -> Result<CapacityGraph<C>>
    where
        C: PrimInt + Debug,
    {
        CapacityGraph::build(self.node_count(), &self.edges)
    }

    fn intern(&mut self, name: &str) -> usize {
        if let Some(&i) = self.index.get(name) {
            return i;
        }
        let i = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), i);
        i
    }
}

impl FromStr for AdjacencyList {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let mut list = AdjacencyList::default();
        for (line_no, line) in input.lines().enumerate().map(|(i, l)| (i + 1, l.trim())) {
            if line.is_empty() {
                continue;
            }
            let (name, rest) = line
                .split_once(':')
                .ok_or_else(|| Error::parse(line_no, "expected `name: neighbor ...`"))?;
            let name = name.trim();
            if name.is_empty() {
                return Err(Error::parse(line_no, "missing node name before `:`"));
            }
            if name.contains(char::is_whitespace) {
                return Err(Error::parse(
                    line_no,
                    format!("node name `{}` contains whitespace", name),
                ));
            }

            let u = list.intern(name);
            for neighbor in rest.split_whitespace() {
                if neighbor.contains(':') {
                    return Err(Error::parse(
                        line_no,
                        format!("unexpected `:` in neighbor `{}`", neighbor),
                    ));
                }
                let v = list.intern(neighbor);
                list.edges.push((u, v));
            }
        }
        Ok(list)
    }
}

//! Who-pulled-in-whom record of a discovery run.
//!
//! Every enqueued type has at most one incoming edge: the candidate being
//! classified when it was first offered. Seeds have none.

use beanscope_api::ClassName;
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize)]
pub struct DiscoveryGraph {
    topology: DiGraph<ClassName, ()>,
    #[serde(skip)]
    index: HashMap<ClassName, NodeIndex>,
}

impl DiscoveryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&mut self, name: &ClassName) -> NodeIndex {
        if let Some(idx) = self.index.get(name) {
            return *idx;
        }
        let idx = self.topology.add_node(name.clone());
        self.index.insert(name.clone(), idx);
        idx
    }

    /// Record that `to` was enqueued, by `from` when classification was under way.
    pub fn record(&mut self, from: Option<&ClassName>, to: &ClassName) {
        let target = self.node(to);
        if let Some(from) = from {
            let source = self.node(from);
            if source != target && self.topology.find_edge(source, target).is_none() {
                self.topology.add_edge(source, target, ());
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn node_count(&self) -> usize {
        self.topology.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.topology.edge_count()
    }

    pub fn topology(&self) -> &DiGraph<ClassName, ()> {
        &self.topology
    }

    /// The candidate that first offered `name`, `None` for seeds and unknown names.
    pub fn origin_of(&self, name: &str) -> Option<&ClassName> {
        let idx = *self.index.get(name)?;
        self.topology
            .neighbors_directed(idx, Direction::Incoming)
            .next()
            .map(|origin| &self.topology[origin])
    }

    /// Types first offered while `name` was being classified.
    pub fn pulled_in_by(&self, name: &str) -> Vec<&ClassName> {
        let Some(idx) = self.index.get(name) else {
            return Vec::new();
        };
        let mut out: Vec<&ClassName> = self
            .topology
            .neighbors_directed(*idx, Direction::Outgoing)
            .map(|n| &self.topology[n])
            .collect();
        out.sort();
        out
    }

    /// Chain from a seed down to `name`, both ends included.
    pub fn path_to(&self, name: &str) -> Vec<&ClassName> {
        let Some(mut idx) = self.index.get(name).copied() else {
            return Vec::new();
        };
        let mut path = vec![&self.topology[idx]];
        // Each node has at most one parent.
        for _ in 0..self.topology.node_count() {
            let Some(parent) = self
                .topology
                .neighbors_directed(idx, Direction::Incoming)
                .next()
            else {
                break;
            };
            path.push(&self.topology[parent]);
            idx = parent;
        }
        path.reverse();
        path
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

//! Shortest-hop route search over the conversion graph.

use crate::core::graph::ConversionGraph;
use crate::core::rate::RateEdge;
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::debug;

/// Ordered edges leading from a source currency to a target currency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Route {
    edges: Vec<RateEdge>,
}

impl Route {
    pub fn edges(&self) -> &[RateEdge] {
        &self.edges
    }

    pub fn hops(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Currency codes visited along the route, source first.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.edges.iter().map(|edge| edge.from.code()).collect();
        if let Some(last) = self.edges.last() {
            codes.push(last.to.code());
        }
        codes
    }
}

/// Finds a route with the fewest hops using breadth-first search.
///
/// Among equally short routes, the one reached first through each node's
/// neighbour order is returned. Returns `None` when `to` cannot be reached,
/// including when `from` has no edges at all.
pub fn resolve(graph: &ConversionGraph, from: &str, to: &str) -> Option<Route> {
    if from == to {
        return Some(Route::default());
    }
    if !graph.contains(from) {
        return None;
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    let mut came_from: HashMap<&str, &RateEdge> = HashMap::new();

    visited.insert(from);
    queue.push_back(from);

    'search: while let Some(current) = queue.pop_front() {
        for edge in graph.neighbors(current) {
            let neighbor = edge.to.code();
            if visited.insert(neighbor) {
                came_from.insert(neighbor, edge);
                if neighbor == to {
                    break 'search;
                }
                queue.push_back(neighbor);
            }
        }
    }

    let mut edges = Vec::new();
    let mut current = to;
    while current != from {
        let edge = came_from.get(current)?;
        edges.push((*edge).clone());
        current = edge.from.code();
    }
    edges.reverse();

    debug!(from, to, hops = edges.len(), "Resolved conversion route");
    Some(Route { edges })
}

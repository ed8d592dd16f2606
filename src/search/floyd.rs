//! Floyd-Warshall all-pairs shortest objective.
//!
//! Precomputes dense objective and successor matrices over the whole
//! location set (O(n²) memory), then answers any pair by walking successor
//! links. The [`RouteSolver`] impl rebuilds the tables per query for
//! comparability with the single-pair strategies; callers with repeated or
//! all-pairs queries should build [`FloydWarshallTables`] once and reuse it.

use std::collections::HashMap;

use log::debug;
use serde::Deserialize;

use crate::cost::{CostModel, TransportMode};
use crate::graph::Network;

use super::{resolve_endpoints, RouteQuery, RouteSolver, SearchOutcome};

/// Precomputed all-pairs tables for one network, cost model, and priority.
#[derive(Debug, Clone)]
pub struct FloydWarshallTables {
    n: usize,
    /// Row-major least objective per (from, to) pair.
    dist: Vec<f64>,
    /// Row-major next hop on the least-objective route.
    next: Vec<Option<usize>>,
    /// Winning transport mode per directed direct edge.
    edge_modes: HashMap<(usize, usize), TransportMode>,
}

impl FloydWarshallTables {
    /// Runs the full precomputation for the given priority weight.
    pub fn build(network: &Network, costs: &CostModel, priority: f64) -> Self {
        let n = network.num_locations();
        let mut tables = Self {
            n,
            dist: vec![f64::INFINITY; n * n],
            next: vec![None; n * n],
            edge_modes: HashMap::new(),
        };

        for i in 0..n {
            tables.set(i, i, 0.0, Some(i));
        }

        // Road segments enter both directions; the objective is symmetric.
        for i in 0..n {
            for &j in network.road_neighbors(i) {
                if i > j {
                    continue;
                }
                let d = network
                    .road_distance(i, j)
                    .unwrap_or_else(|| network.straight_line_km(i, j));
                let w = costs.edge_value(d, TransportMode::Road, priority);
                if w < tables.dist(i, j) {
                    tables.set(i, j, w, Some(j));
                    tables.edge_modes.insert((i, j), TransportMode::Road);
                }
                if w < tables.dist(j, i) {
                    tables.set(j, i, w, Some(i));
                    tables.edge_modes.insert((j, i), TransportMode::Road);
                }
            }
        }

        // Flight edges are directed hub-to-hub; they replace a road edge
        // only when strictly better.
        for &u in network.hubs() {
            for &v in network.hubs() {
                if u == v {
                    continue;
                }
                let d = network.straight_line_km(u, v);
                let w = costs.edge_value(d, TransportMode::Fly, priority);
                if w < tables.dist(u, v) {
                    tables.set(u, v, w, Some(v));
                    tables.edge_modes.insert((u, v), TransportMode::Fly);
                }
            }
        }

        let mut relaxations = 0usize;
        for k in 0..n {
            for i in 0..n {
                let ik = tables.dist(i, k);
                if ik.is_infinite() {
                    continue;
                }
                for j in 0..n {
                    let kj = tables.dist(k, j);
                    if kj.is_infinite() {
                        continue;
                    }
                    relaxations += 1;
                    let through = ik + kj;
                    if through < tables.dist(i, j) {
                        let via = tables.next(i, k);
                        tables.set(i, j, through, via);
                    }
                }
            }
        }
        debug!("floyd_warshall: {n} locations, {relaxations} relaxations");

        tables
    }

    fn idx(&self, i: usize, j: usize) -> usize {
        i * self.n + j
    }

    fn set(&mut self, i: usize, j: usize, value: f64, next: Option<usize>) {
        let idx = self.idx(i, j);
        self.dist[idx] = value;
        self.next[idx] = next;
    }

    fn next(&self, i: usize, j: usize) -> Option<usize> {
        self.next[self.idx(i, j)]
    }

    /// Least objective from `start` to `goal`; infinite when unreachable.
    pub fn dist(&self, start: usize, goal: usize) -> f64 {
        self.dist[self.idx(start, goal)]
    }

    /// Reconstructs the least-objective route for one pair.
    pub fn query(&self, start: usize, goal: usize) -> SearchOutcome {
        if start >= self.n || goal >= self.n {
            return SearchOutcome::not_found();
        }
        if start == goal {
            return SearchOutcome::single(start);
        }
        if self.next(start, goal).is_none() || self.dist(start, goal).is_infinite() {
            return SearchOutcome::not_found();
        }

        let mut path = vec![start];
        let mut current = start;
        while current != goal {
            let Some(hop) = self.next(current, goal) else {
                return SearchOutcome::not_found();
            };
            current = hop;
            path.push(current);
            if path.len() > self.n {
                // Successor chain cycled; treat as unreachable.
                return SearchOutcome::not_found();
            }
        }

        let modes = path
            .windows(2)
            .map(|pair| {
                self.edge_modes
                    .get(&(pair[0], pair[1]))
                    .copied()
                    .unwrap_or(TransportMode::Road)
            })
            .collect();

        SearchOutcome::found(path, modes, self.dist(start, goal))
    }
}

/// Floyd-Warshall strategy.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct FloydWarshall;

impl RouteSolver for FloydWarshall {
    fn name(&self) -> &'static str {
        "floyd_warshall"
    }

    fn solve(&self, network: &Network, costs: &CostModel, query: &RouteQuery) -> SearchOutcome {
        let (start, goal, priority) = match resolve_endpoints(network, query) {
            Ok(resolved) => resolved,
            Err(trivial) => return trivial,
        };
        FloydWarshallTables::build(network, costs, priority).query(start, goal)
    }
}

//! Greedy Best-First Search.
//!
//! Orders the frontier purely by the estimate to the goal, ignoring
//! accumulated cost, so it expands few nodes but offers no optimality
//! guarantee. Included as a fast baseline; its reported objective is
//! recomputed from the discovered path, never from the ordering key.

use std::collections::BinaryHeap;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::cost::{CostModel, TransportMode};
use crate::graph::Network;

use super::state::{FrontierEntry, RunState};
use super::{resolve_endpoints, RouteQuery, RouteSolver, SearchOutcome};

/// Greedy Best-First strategy.
///
/// Each node is enqueued at most once: the first discovery fixes its
/// predecessor and there is no cost-based re-relaxation. Ties in the
/// estimate are broken by a random secondary key (seedable).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GreedyBestFirst {
    /// Seed for the tie-breaking random key; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl GreedyBestFirst {
    /// Greedy search with a fixed tie-break seed.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl RouteSolver for GreedyBestFirst {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve(&self, network: &Network, costs: &CostModel, query: &RouteQuery) -> SearchOutcome {
        let (start, goal, priority) = match resolve_endpoints(network, query) {
            Ok(resolved) => resolved,
            Err(trivial) => return trivial,
        };

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let flight_possible = network.has_flight_network();

        let mut state = RunState::new(network.num_locations());
        let mut frontier = BinaryHeap::new();

        state.h[start] = costs.estimate(
            network.straight_line_km(start, goal),
            flight_possible,
            priority,
        );
        state.in_open[start] = true;
        frontier.push(FrontierEntry {
            key: state.h[start],
            tie: rng.random::<f64>(),
            node: start,
        });

        let mut pops = 0usize;

        while let Some(entry) = frontier.pop() {
            let current = entry.node;
            pops += 1;

            if current == goal {
                let (path, modes) = state.reconstruct(goal);
                let objective = path_objective(network, costs, priority, &path, &modes);
                debug!(
                    "greedy: found {} -> {} after {pops} pops",
                    query.start, query.goal
                );
                return SearchOutcome::found(path, modes, objective);
            }

            state.in_open[current] = false;
            state.closed[current] = true;

            for edge in network.edges_from(current) {
                if state.closed[edge.to] || state.in_open[edge.to] {
                    continue; // first discovery wins
                }
                state.parent[edge.to] = Some(current);
                state.arrival_mode[edge.to] = Some(edge.mode);
                state.h[edge.to] = costs.estimate(
                    network.straight_line_km(edge.to, goal),
                    flight_possible,
                    priority,
                );
                state.in_open[edge.to] = true;
                frontier.push(FrontierEntry {
                    key: state.h[edge.to],
                    tie: rng.random::<f64>(),
                    node: edge.to,
                });
            }
        }

        debug!(
            "greedy: no route {} -> {} after {pops} pops",
            query.start, query.goal
        );
        SearchOutcome::not_found()
    }
}

/// True objective of a concrete path, recomputed segment by segment.
fn path_objective(
    network: &Network,
    costs: &CostModel,
    priority: f64,
    path: &[usize],
    modes: &[TransportMode],
) -> f64 {
    path.windows(2)
        .zip(modes)
        .map(|(pair, &mode)| {
            let distance = match mode {
                TransportMode::Road => network
                    .road_distance(pair[0], pair[1])
                    .unwrap_or_else(|| network.straight_line_km(pair[0], pair[1])),
                TransportMode::Fly => network.straight_line_km(pair[0], pair[1]),
            };
            costs.edge_value(distance, mode, priority)
        })
        .sum()
}

//! A* search with an admissible straight-line estimate.

use std::collections::BinaryHeap;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::cost::CostModel;
use crate::graph::Network;

use super::state::{FrontierEntry, RunState};
use super::{resolve_endpoints, RouteQuery, RouteSolver, SearchOutcome};

/// Default cap on frontier expansions.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// A* strategy: frontier ordered by `f = g + h` where `h` is the cost
/// model's optimistic estimate over the straight-line distance to the goal.
///
/// Ties in `f` are broken by a random secondary key to avoid queue-ordering
/// bias; pass a `seed` for reproducible runs. The estimate never
/// overestimates the true remaining objective, so results match
/// [`UniformCost`](super::UniformCost) on every reachable pair.
///
/// An expansion cap guards against pathological inputs; exceeding it yields
/// a well-formed empty outcome flagged
/// [`RouteStatus::LimitExceeded`](super::RouteStatus::LimitExceeded).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AStar {
    /// Maximum number of frontier expansions before giving up.
    pub max_iterations: usize,
    /// Seed for the tie-breaking random key; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for AStar {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }
}

impl AStar {
    /// A* with the default expansion cap and the given tie-break seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

impl RouteSolver for AStar {
    fn name(&self) -> &'static str {
        "astar"
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
        let estimate = |node: usize| {
            costs.estimate(network.straight_line_km(node, goal), flight_possible, priority)
        };

        let mut state = RunState::new(network.num_locations());
        let mut frontier = BinaryHeap::new();

        state.g[start] = 0.0;
        state.h[start] = estimate(start);
        state.in_open[start] = true;
        frontier.push(FrontierEntry {
            key: state.h[start],
            tie: rng.random::<f64>(),
            node: start,
        });

        let mut pops = 0usize;
        let mut closed_count = 0usize;
        let mut peak_space = 0usize;

        while let Some(entry) = frontier.pop() {
            let current = entry.node;
            if state.closed[current] {
                continue;
            }
            if pops >= self.max_iterations {
                debug!(
                    "astar: cap of {} expansions exhausted for {} -> {}",
                    self.max_iterations, query.start, query.goal
                );
                return SearchOutcome::limit_exceeded();
            }
            pops += 1;

            if current == goal {
                let (path, modes) = state.reconstruct(goal);
                debug!(
                    "astar: found {} -> {} after {pops} pops, peak space {peak_space}",
                    query.start, query.goal
                );
                return SearchOutcome::found(path, modes, state.g[goal]);
            }

            state.closed[current] = true;
            state.in_open[current] = false;
            closed_count += 1;

            for edge in network.edges_from(current) {
                if state.closed[edge.to] {
                    continue;
                }
                let tentative = state.g[current]
                    + costs.edge_value(edge.distance_km, edge.mode, priority);
                if tentative < state.g[edge.to] {
                    if state.h[edge.to].is_infinite() {
                        state.h[edge.to] = estimate(edge.to);
                    }
                    state.g[edge.to] = tentative;
                    state.parent[edge.to] = Some(current);
                    state.arrival_mode[edge.to] = Some(edge.mode);
                    state.in_open[edge.to] = true;
                    frontier.push(FrontierEntry {
                        key: tentative + state.h[edge.to],
                        tie: rng.random::<f64>(),
                        node: edge.to,
                    });
                }
            }

            peak_space = peak_space.max(frontier.len() + closed_count);
        }

        debug!(
            "astar: no route {} -> {} after {pops} pops",
            query.start, query.goal
        );
        SearchOutcome::not_found()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::CostConstants;
    use crate::graph::NetworkData;
    use crate::search::{RouteStatus, UniformCost};

    fn costs() -> CostModel {
        CostModel::new(CostConstants::default()).expect("valid constants")
    }

    fn grid() -> Network {
        let mut data = NetworkData::new();
        data.add_location("a", 0.0, 0.0);
        data.add_location("b", 0.0, 1.0);
        data.add_location("c", 0.0, 2.0);
        data.add_location("d", 1.0, 0.0);
        data.add_location("e", 1.0, 1.0);
        data.add_road("a", "b");
        data.add_road("b", "c");
        data.add_road("a", "d");
        data.add_road("d", "e");
        data.add_road("e", "c");
        data.add_road("b", "e");
        data.add_hub("a");
        data.add_hub("c");
        Network::build(&data)
    }

    #[test]
    fn test_matches_ucs_objective() {
        let net = grid();
        let costs = costs();
        for &p in &[0.0, 0.25, 0.5, 0.75, 1.0] {
            let query = RouteQuery::new("d", "c", p);
            let ucs = UniformCost.solve(&net, &costs, &query);
            let astar = AStar::seeded(7).solve(&net, &costs, &query);
            assert!(astar.is_found());
            assert!(
                (astar.objective - ucs.objective).abs() < 1e-9,
                "priority {p}: astar {} vs ucs {}",
                astar.objective,
                ucs.objective
            );
        }
    }

    #[test]
    fn test_cap_yields_limit_exceeded() {
        let net = grid();
        let solver = AStar {
            max_iterations: 1,
            seed: Some(1),
        };
        let outcome = solver.solve(&net, &costs(), &RouteQuery::new("a", "c", 0.5));
        assert_eq!(outcome.status, RouteStatus::LimitExceeded);
        assert!(outcome.path.is_empty());
        assert!(outcome.objective.is_infinite());
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let net = grid();
        let costs = costs();
        let query = RouteQuery::new("a", "e", 0.5);
        let first = AStar::seeded(42).solve(&net, &costs, &query);
        let second = AStar::seeded(42).solve(&net, &costs, &query);
        assert_eq!(first.path, second.path);
        assert_eq!(first.objective, second.objective);
    }

    #[test]
    fn test_unreachable_pair() {
        let mut data = NetworkData::new();
        data.add_location("a", 0.0, 0.0);
        data.add_location("far", 30.0, 30.0);
        let net = Network::build(&data);
        let outcome = AStar::seeded(1).solve(&net, &costs(), &RouteQuery::new("a", "far", 0.5));
        assert_eq!(outcome.status, RouteStatus::NoRoute);
    }

    #[test]
    fn test_identity_pair() {
        let net = grid();
        let outcome = AStar::seeded(1).solve(&net, &costs(), &RouteQuery::new("e", "e", 0.9));
        assert_eq!(outcome.path.len(), 1);
        assert_eq!(outcome.objective, 0.0);
    }
}

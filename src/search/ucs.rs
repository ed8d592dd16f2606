//! Uniform Cost Search.
//!
//! Best-first search ordered strictly by the accumulated objective from the
//! start, with no heuristic term. Optimal for the blended objective since
//! every edge value is non-negative.

use std::collections::BinaryHeap;

use log::debug;
use serde::Deserialize;

use crate::cost::CostModel;
use crate::graph::Network;

use super::state::{FrontierEntry, RunState};
use super::{resolve_endpoints, RouteQuery, RouteSolver, SearchOutcome};

/// Uniform Cost Search strategy.
///
/// # Examples
///
/// ```
/// use multiroute::cost::{CostModel, CostConstants};
/// use multiroute::graph::{Network, NetworkData};
/// use multiroute::search::{RouteQuery, RouteSolver, UniformCost};
///
/// let mut data = NetworkData::new();
/// data.add_location("alpha", 0.0, 0.0);
/// data.add_location("beta", 0.0, 1.0);
/// data.add_road("alpha", "beta");
///
/// let net = Network::build(&data);
/// let costs = CostModel::new(CostConstants::default()).unwrap();
/// let outcome = UniformCost.solve(&net, &costs, &RouteQuery::new("alpha", "beta", 0.5));
/// assert!(outcome.is_found());
/// assert_eq!(outcome.path.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct UniformCost;

impl RouteSolver for UniformCost {
    fn name(&self) -> &'static str {
        "ucs"
    }

    fn solve(&self, network: &Network, costs: &CostModel, query: &RouteQuery) -> SearchOutcome {
        let (start, goal, priority) = match resolve_endpoints(network, query) {
            Ok(resolved) => resolved,
            Err(trivial) => return trivial,
        };

        let mut state = RunState::new(network.num_locations());
        let mut frontier = BinaryHeap::new();
        // Deterministic FIFO tie-break: later insertions sort after earlier
        // ones at equal cost.
        let mut sequence = 0u64;

        state.g[start] = 0.0;
        state.in_open[start] = true;
        frontier.push(FrontierEntry {
            key: 0.0,
            tie: 0.0,
            node: start,
        });

        let mut pops = 0usize;
        let mut closed_count = 0usize;
        let mut peak_space = 0usize;

        while let Some(entry) = frontier.pop() {
            let current = entry.node;
            if state.closed[current] {
                continue; // stale duplicate
            }
            pops += 1;

            if current == goal {
                let (path, modes) = state.reconstruct(goal);
                debug!(
                    "ucs: found {} -> {} after {pops} pops, peak space {peak_space}",
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
                    state.g[edge.to] = tentative;
                    state.parent[edge.to] = Some(current);
                    state.arrival_mode[edge.to] = Some(edge.mode);
                    state.in_open[edge.to] = true;
                    sequence += 1;
                    frontier.push(FrontierEntry {
                        key: tentative,
                        tie: sequence as f64,
                        node: edge.to,
                    });
                }
            }

            peak_space = peak_space.max(frontier.len() + closed_count);
        }

        debug!(
            "ucs: no route {} -> {} after {pops} pops",
            query.start, query.goal
        );
        SearchOutcome::not_found()
    }
}

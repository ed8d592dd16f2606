//! Search strategies over the transport network.
//!
//! Five interchangeable strategies minimize the same blended objective and
//! produce comparable [`SearchOutcome`]s:
//!
//! - [`UniformCost`] — best-first on accumulated objective, optimal
//! - [`AStar`] — accumulated objective plus admissible estimate, optimal
//! - [`FloydWarshall`] — dense all-pairs precomputation
//! - [`GreedyBestFirst`] — estimate-only ordering, fast but not optimal
//! - [`AntColony`] — stochastic pheromone-reinforced metaheuristic
//!
//! Every strategy degrades to an empty outcome (never a panic) for unknown
//! endpoints, unreachable pairs, and exceeded iteration caps.

mod aco;
mod astar;
mod floyd;
mod greedy;
mod state;
mod ucs;

pub use aco::AntColony;
pub use astar::AStar;
pub use floyd::{FloydWarshall, FloydWarshallTables};
pub use greedy::GreedyBestFirst;
pub use ucs::UniformCost;

use serde::{Deserialize, Serialize};

use crate::cost::{clamp_priority, CostModel, TransportMode};
use crate::graph::Network;

/// A single routing request: endpoints by name and the cost-priority blend.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteQuery {
    /// Start location name.
    pub start: String,
    /// Goal location name.
    pub goal: String,
    /// Cost-priority weight in `[0, 1]`: 0 optimizes time, 1 monetary cost.
    /// Clamped at entry.
    #[serde(default = "default_priority")]
    pub priority: f64,
}

fn default_priority() -> f64 {
    0.5
}

impl RouteQuery {
    /// Creates a query; the priority is clamped when the query is solved.
    pub fn new(start: &str, goal: &str, priority: f64) -> Self {
        Self {
            start: start.to_string(),
            goal: goal.to_string(),
            priority,
        }
    }
}

/// How a search run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    /// A route was found.
    Found,
    /// No route exists between the endpoints (or an endpoint is unknown).
    NoRoute,
    /// The iteration or step cap was exhausted before reaching the goal.
    LimitExceeded,
}

/// Raw result of one strategy invocation: the node path, the transport mode
/// of each consecutive pair, and the minimized objective value.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Location ids from start to goal inclusive; empty when no route.
    pub path: Vec<usize>,
    /// Transport mode per path segment (`path.len() - 1` entries).
    pub modes: Vec<TransportMode>,
    /// Total blended objective; infinite when no route.
    pub objective: f64,
    /// Termination condition.
    pub status: RouteStatus,
}

impl SearchOutcome {
    /// A successful outcome.
    pub fn found(path: Vec<usize>, modes: Vec<TransportMode>, objective: f64) -> Self {
        debug_assert_eq!(path.len().saturating_sub(1), modes.len());
        Self {
            path,
            modes,
            objective,
            status: RouteStatus::Found,
        }
    }

    /// The single-location outcome for a start equal to the goal.
    pub fn single(node: usize) -> Self {
        Self::found(vec![node], Vec::new(), 0.0)
    }

    /// The well-formed empty outcome for "no route exists".
    pub fn not_found() -> Self {
        Self {
            path: Vec::new(),
            modes: Vec::new(),
            objective: f64::INFINITY,
            status: RouteStatus::NoRoute,
        }
    }

    /// The well-formed empty outcome for an exhausted iteration cap.
    pub fn limit_exceeded() -> Self {
        Self {
            status: RouteStatus::LimitExceeded,
            ..Self::not_found()
        }
    }

    /// Whether a route was found.
    pub fn is_found(&self) -> bool {
        self.status == RouteStatus::Found
    }
}

/// A route-optimization strategy.
///
/// Implementations share the same contract: unknown endpoints yield
/// [`SearchOutcome::not_found`], identical endpoints yield a zero-valued
/// single-location path, and the network is never mutated — all transient
/// search state is allocated per invocation.
pub trait RouteSolver {
    /// Short strategy name for logs and reports.
    fn name(&self) -> &'static str;

    /// Computes a least-objective route for the query.
    fn solve(&self, network: &Network, costs: &CostModel, query: &RouteQuery) -> SearchOutcome;
}

/// Strategy selection with per-strategy parameters, deserializable from
/// configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Uniform Cost Search.
    UniformCost,
    /// A* with an admissible straight-line estimate.
    AStar(AStar),
    /// Floyd-Warshall all-pairs precomputation.
    FloydWarshall,
    /// Greedy Best-First Search.
    GreedyBestFirst(GreedyBestFirst),
    /// Ant Colony Optimization.
    AntColony(AntColony),
}

impl Strategy {
    /// The solver configured by this selection.
    pub fn solver(&self) -> Box<dyn RouteSolver> {
        match self {
            Strategy::UniformCost => Box::new(UniformCost),
            Strategy::AStar(s) => Box::new(s.clone()),
            Strategy::FloydWarshall => Box::new(FloydWarshall),
            Strategy::GreedyBestFirst(s) => Box::new(s.clone()),
            Strategy::AntColony(s) => Box::new(s.clone()),
        }
    }
}

/// Resolves query endpoints to location ids.
///
/// Returns the trivial outcome early: `Err(not_found)` when either endpoint
/// is unknown, `Err(single)` when start and goal coincide.
pub(crate) fn resolve_endpoints(
    network: &Network,
    query: &RouteQuery,
) -> Result<(usize, usize, f64), SearchOutcome> {
    let priority = clamp_priority(query.priority);
    let (Some(start), Some(goal)) = (
        network.index_of(&query.start),
        network.index_of(&query.goal),
    ) else {
        return Err(SearchOutcome::not_found());
    };
    if start == goal {
        return Err(SearchOutcome::single(start));
    }
    Ok((start, goal, priority))
}

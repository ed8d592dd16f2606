//! # multiroute
//!
//! Least-cost routing through a multimodal transport network: road segments
//! plus point-to-point flights between hub locations, optimized under a
//! tunable blend of monetary cost and travel time.
//!
//! ## Modules
//!
//! - [`geo`] — Haversine great-circle distance
//! - [`cost`] — Transport modes, tunable constants, blended objective
//! - [`graph`] — Locations, road segments, hub flight subgraph
//! - [`search`] — The five strategies (UCS, A*, Floyd-Warshall, Greedy, ACO)
//! - [`report`] — Itemized route summaries
//!
//! ## Example
//!
//! ```
//! use multiroute::cost::{CostConstants, CostModel};
//! use multiroute::graph::{Network, NetworkData};
//! use multiroute::search::{RouteQuery, Strategy};
//!
//! let mut data = NetworkData::new();
//! data.add_location("alpha", 0.0, 0.0);
//! data.add_location("beta", 0.0, 1.0);
//! data.add_location("gamma", 0.0, 2.0);
//! data.add_road("alpha", "beta");
//! data.add_road("beta", "gamma");
//!
//! let network = Network::build(&data);
//! let costs = CostModel::new(CostConstants::default()).unwrap();
//! let query = RouteQuery::new("alpha", "gamma", 0.5);
//!
//! let summary = multiroute::solve(&network, &costs, &Strategy::UniformCost, &query);
//! assert!(summary.is_found());
//! assert_eq!(summary.path, vec!["alpha", "beta", "gamma"]);
//! ```

pub mod cost;
pub mod geo;
pub mod graph;
pub mod report;
pub mod search;

pub use cost::{CostConstants, CostModel, TransportMode};
pub use graph::{Network, NetworkData};
pub use report::RouteSummary;
pub use search::{RouteQuery, RouteStatus, Strategy};

/// Solves one routing query with the selected strategy and assembles the
/// itemized summary.
pub fn solve(
    network: &Network,
    costs: &CostModel,
    strategy: &Strategy,
    query: &RouteQuery,
) -> RouteSummary {
    let outcome = strategy.solver().solve(network, costs, query);
    report::assemble(network, costs, query.priority, &outcome)
}

//! Itemized route summary.

use serde::Serialize;

use crate::cost::{clamp_priority, CostModel, TransportMode};
use crate::graph::Network;
use crate::search::{RouteStatus, SearchOutcome};

/// One fully itemized segment of a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentReport {
    /// Origin location name.
    pub from: String,
    /// Target location name.
    pub to: String,
    /// Transport mode of this segment.
    pub mode: TransportMode,
    /// Segment length in kilometers.
    pub distance_km: f64,
    /// Segment travel time in hours.
    pub time_hours: f64,
    /// Segment monetary cost.
    pub cost: f64,
}

/// The structured result record of one routing invocation.
///
/// An empty `path` signals "no route": totals are zero, the objective is
/// infinite, and `status` carries the reason. Totals always equal the sums
/// of the per-segment fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    /// Ordered location names from start to goal; empty when no route.
    pub path: Vec<String>,
    /// Sum of segment distances in kilometers.
    pub total_distance_km: f64,
    /// Sum of segment times in hours.
    pub total_time_hours: f64,
    /// Sum of segment monetary costs.
    pub total_cost: f64,
    /// Blended objective of the whole route; infinite when no route.
    pub objective_value: f64,
    /// Per-segment breakdown.
    pub segments: Vec<SegmentReport>,
    /// How the search terminated.
    pub status: RouteStatus,
}

impl RouteSummary {
    /// Whether a route was found.
    pub fn is_found(&self) -> bool {
        self.status == RouteStatus::Found
    }

    fn empty(status: RouteStatus) -> Self {
        Self {
            path: Vec::new(),
            total_distance_km: 0.0,
            total_time_hours: 0.0,
            total_cost: 0.0,
            objective_value: f64::INFINITY,
            segments: Vec::new(),
            status,
        }
    }
}

/// Converts a raw search outcome into an itemized summary.
///
/// Every segment's distance, time, and cost is recomputed from the cost
/// model rather than trusted from the search, so reports are consistent
/// across strategies. The objective is re-aggregated from the segments for
/// the same reason.
pub fn assemble(
    network: &Network,
    costs: &CostModel,
    priority: f64,
    outcome: &SearchOutcome,
) -> RouteSummary {
    if !outcome.is_found() || outcome.path.is_empty() {
        let status = if outcome.status == RouteStatus::Found {
            RouteStatus::NoRoute
        } else {
            outcome.status
        };
        return RouteSummary::empty(status);
    }

    let priority = clamp_priority(priority);
    let path: Vec<String> = outcome
        .path
        .iter()
        .map(|&id| network.location(id).name().to_string())
        .collect();

    let mut segments = Vec::with_capacity(outcome.modes.len());
    let mut total_distance_km = 0.0;
    let mut total_time_hours = 0.0;
    let mut total_cost = 0.0;
    let mut objective_value = 0.0;

    for (pair, &mode) in outcome.path.windows(2).zip(&outcome.modes) {
        let (from, to) = (pair[0], pair[1]);
        let distance_km = match mode {
            TransportMode::Road => network
                .road_distance(from, to)
                .unwrap_or_else(|| network.straight_line_km(from, to)),
            TransportMode::Fly => network.straight_line_km(from, to),
        };
        let metrics = costs.metrics(distance_km, mode);

        total_distance_km += distance_km;
        total_time_hours += metrics.time_hours;
        total_cost += metrics.cost;
        objective_value += costs.objective(metrics, priority);

        segments.push(SegmentReport {
            from: network.location(from).name().to_string(),
            to: network.location(to).name().to_string(),
            mode,
            distance_km,
            time_hours: metrics.time_hours,
            cost: metrics.cost,
        });
    }

    RouteSummary {
        path,
        total_distance_km,
        total_time_hours,
        total_cost,
        objective_value,
        segments,
        status: RouteStatus::Found,
    }
}

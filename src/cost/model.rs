//! Transport modes and the blended cost/time objective.

use serde::{Deserialize, Serialize};

use super::{ConfigError, CostConstants};

/// How a single segment of a route is traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// Driving along a physical road segment.
    Road,
    /// A direct flight between two hub locations.
    Fly,
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportMode::Road => write!(f, "road"),
            TransportMode::Fly => write!(f, "fly"),
        }
    }
}

/// Travel time and monetary cost of one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentMetrics {
    /// Travel time in hours, including rest stops or flight handling.
    pub time_hours: f64,
    /// Monetary cost.
    pub cost: f64,
}

/// Clamps a cost-priority weight into `[0, 1]`.
///
/// Non-finite input falls back to an even 0.5 blend.
pub fn clamp_priority(priority: f64) -> f64 {
    if !priority.is_finite() {
        return 0.5;
    }
    priority.clamp(0.0, 1.0)
}

/// Converts segment distances into time, monetary cost, and the blended
/// scalar objective every strategy minimizes.
///
/// The objective is `priority * cost + (1 - priority) * time` with
/// `priority` in `[0, 1]`: 0 optimizes purely for time, 1 purely for cost.
/// All methods are pure; the model holds validated constants only.
///
/// # Examples
///
/// ```
/// use multiroute::cost::{CostModel, CostConstants, TransportMode};
///
/// let model = CostModel::new(CostConstants::default()).unwrap();
/// let m = model.metrics(100.0, TransportMode::Road);
/// assert!((m.time_hours - 2.0).abs() < 1e-10); // 100 km at 50 km/h, no rest yet
/// assert!((m.cost - 10_000.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct CostModel {
    constants: CostConstants,
}

impl CostModel {
    /// Creates a cost model, rejecting corrupt constants.
    pub fn new(constants: CostConstants) -> Result<Self, ConfigError> {
        constants.validate()?;
        Ok(Self { constants })
    }

    /// The validated constants backing this model.
    pub fn constants(&self) -> &CostConstants {
        &self.constants
    }

    /// Time and monetary cost of traversing `distance_km` by `mode`.
    ///
    /// Road time charges one rest stop per full rest interval driven; flight
    /// time includes the fixed handling overhead.
    pub fn metrics(&self, distance_km: f64, mode: TransportMode) -> SegmentMetrics {
        let c = &self.constants;
        match mode {
            TransportMode::Road => SegmentMetrics {
                time_hours: distance_km / c.road_speed_kmh
                    + (distance_km / c.rest_distance_km).floor() * c.rest_time_hours,
                cost: distance_km * c.road_cost_per_km,
            },
            TransportMode::Fly => SegmentMetrics {
                time_hours: distance_km / c.air_speed_kmh + c.storage_time_hours,
                cost: distance_km * c.air_cost_per_km,
            },
        }
    }

    /// The blended objective of a pre-computed `(time, cost)` pair.
    pub fn objective(&self, metrics: SegmentMetrics, priority: f64) -> f64 {
        let p = clamp_priority(priority);
        p * metrics.cost + (1.0 - p) * metrics.time_hours
    }

    /// The blended objective of traversing `distance_km` by `mode`.
    pub fn edge_value(&self, distance_km: f64, mode: TransportMode, priority: f64) -> f64 {
        self.objective(self.metrics(distance_km, mode), priority)
    }

    /// Optimistic lower bound on the remaining objective given the
    /// straight-line distance to the goal.
    ///
    /// Uses bare per-km blended rates: rest stops and flight handling are
    /// charged per segment of the real path, so a bound computed from the
    /// direct distance must omit them to never overestimate. The air rate
    /// participates only when the network can fly at all, since any route
    /// may shortcut through the hub subgraph.
    pub fn estimate(&self, straight_km: f64, flight_possible: bool, priority: f64) -> f64 {
        let p = clamp_priority(priority);
        let c = &self.constants;
        let road_rate = p * c.road_cost_per_km + (1.0 - p) / c.road_speed_kmh;
        let mut rate = road_rate;
        if flight_possible {
            let air_rate = p * c.air_cost_per_km + (1.0 - p) / c.air_speed_kmh;
            rate = rate.min(air_rate);
        }
        straight_km * rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> CostModel {
        CostModel::new(CostConstants::default()).expect("default constants are valid")
    }

    #[test]
    fn test_road_metrics_with_rest_stops() {
        let m = model().metrics(650.0, TransportMode::Road);
        // 650 km at 50 km/h = 13 h, plus two rest stops (two full 300 km blocks).
        assert!((m.time_hours - 15.0).abs() < 1e-10);
        assert!((m.cost - 65_000.0).abs() < 1e-10);
    }

    #[test]
    fn test_rest_stop_at_exact_interval() {
        let m = model().metrics(300.0, TransportMode::Road);
        assert!((m.time_hours - 7.0).abs() < 1e-10); // 6 h driving + 1 h rest
    }

    #[test]
    fn test_fly_metrics() {
        let m = model().metrics(800.0, TransportMode::Fly);
        assert!((m.time_hours - 3.0).abs() < 1e-10); // 1 h flight + 2 h handling
        assert!((m.cost - 240_000.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_distance() {
        let road = model().metrics(0.0, TransportMode::Road);
        assert_eq!(road.time_hours, 0.0);
        assert_eq!(road.cost, 0.0);
        // A zero-length flight still pays the handling overhead.
        let fly = model().metrics(0.0, TransportMode::Fly);
        assert!((fly.time_hours - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_objective_blend_endpoints() {
        let model = model();
        let m = SegmentMetrics {
            time_hours: 4.0,
            cost: 1000.0,
        };
        assert!((model.objective(m, 0.0) - 4.0).abs() < 1e-10);
        assert!((model.objective(m, 1.0) - 1000.0).abs() < 1e-10);
        assert!((model.objective(m, 0.5) - 502.0).abs() < 1e-10);
    }

    #[test]
    fn test_clamp_priority() {
        assert_eq!(clamp_priority(-0.5), 0.0);
        assert_eq!(clamp_priority(7.0), 1.0);
        assert_eq!(clamp_priority(0.3), 0.3);
        assert_eq!(clamp_priority(f64::NAN), 0.5);
        assert_eq!(clamp_priority(f64::INFINITY), 0.5);
    }

    #[test]
    fn test_estimate_never_exceeds_single_edge_value() {
        let model = model();
        for &p in &[0.0, 0.25, 0.5, 0.75, 1.0] {
            for &d in &[1.0, 100.0, 350.0, 1200.0] {
                let est = model.estimate(d, true, p);
                let road = model.edge_value(d, TransportMode::Road, p);
                let fly = model.edge_value(d, TransportMode::Fly, p);
                assert!(est <= road + 1e-9, "p={p} d={d}");
                assert!(est <= fly + 1e-9, "p={p} d={d}");
            }
        }
    }

    #[test]
    fn test_estimate_road_only_network() {
        let model = model();
        // Without flights the bound uses the road rate only, so it is tighter.
        let with_air = model.estimate(400.0, true, 0.0);
        let road_only = model.estimate(400.0, false, 0.0);
        assert!(road_only > with_air);
    }

    #[test]
    fn test_invalid_constants_rejected() {
        let bad = CostConstants {
            air_speed_kmh: -10.0,
            ..CostConstants::default()
        };
        assert!(CostModel::new(bad).is_err());
    }
}

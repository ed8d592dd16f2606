//! Network construction from static graph data.

use std::collections::HashMap;

use log::warn;
use serde::Deserialize;

use crate::cost::TransportMode;
use crate::geo::haversine_km;

use super::Location;

/// Static description of a transport network, as supplied by the caller.
///
/// Maps location names to coordinates, lists direct road neighbors per
/// location, and names the hub locations that form the complete flight
/// subgraph.
///
/// # Examples
///
/// ```
/// use multiroute::graph::{Network, NetworkData};
///
/// let mut data = NetworkData::new();
/// data.add_location("alpha", 0.0, 0.0);
/// data.add_location("beta", 0.0, 1.0);
/// data.add_road("alpha", "beta");
/// let net = Network::build(&data);
/// assert_eq!(net.num_locations(), 2);
/// assert!(net.diagnostics().is_empty());
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkData {
    /// Location name → (latitude, longitude) in degrees.
    pub coordinates: HashMap<String, (f64, f64)>,
    /// Location name → directly road-connected neighbor names.
    #[serde(default)]
    pub neighbors: HashMap<String, Vec<String>>,
    /// Names of hub locations with direct flights to every other hub.
    #[serde(default)]
    pub hubs: Vec<String>,
}

impl NetworkData {
    /// Creates an empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a location with the given coordinates.
    pub fn add_location(&mut self, name: &str, latitude: f64, longitude: f64) {
        self.coordinates.insert(name.to_string(), (latitude, longitude));
    }

    /// Declares a road between two locations (recorded in both directions).
    pub fn add_road(&mut self, a: &str, b: &str) {
        self.neighbors
            .entry(a.to_string())
            .or_default()
            .push(b.to_string());
        self.neighbors
            .entry(b.to_string())
            .or_default()
            .push(a.to_string());
    }

    /// Flags a location as a flight hub.
    pub fn add_hub(&mut self, name: &str) {
        self.hubs.push(name.to_string());
    }
}

/// A data-integrity defect found while building the network.
///
/// Defects never abort the build; the affected entry is skipped and the
/// defect surfaced here (and via `log::warn!`).
#[derive(Debug, Clone, PartialEq)]
pub enum BuildDiagnostic {
    /// A location had a non-finite coordinate and was dropped.
    InvalidCoordinate { name: String },
    /// An adjacency entry referenced a source location that does not exist.
    UnknownLocation { name: String },
    /// A neighbor entry referenced a location that does not exist.
    UnknownNeighbor { location: String, neighbor: String },
    /// A hub entry referenced a location that does not exist.
    UnknownHub { name: String },
    /// Locations unreachable from the rest of the network (advisory).
    Disconnected { names: Vec<String> },
}

/// One outgoing edge of the network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Target location id.
    pub to: usize,
    /// How the edge is traversed.
    pub mode: TransportMode,
    /// Edge length in kilometers.
    pub distance_km: f64,
}

/// An immutable transport network: locations, deduplicated road segments
/// with precomputed great-circle distances, and hub flags.
///
/// Flight edges are not stored: hubs form a complete subgraph and flight
/// distances are computed on demand from coordinates. The network carries no
/// mutable search state, so one instance can serve any number of queries.
#[derive(Debug, Clone)]
pub struct Network {
    locations: Vec<Location>,
    index: HashMap<String, usize>,
    road_neighbors: Vec<Vec<usize>>,
    /// Canonical (low, high) id pair → road distance in km.
    segments: HashMap<(usize, usize), f64>,
    hubs: Vec<usize>,
    is_hub: Vec<bool>,
    diagnostics: Vec<BuildDiagnostic>,
}

fn canonical(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl Network {
    /// Builds a network from a static description.
    ///
    /// Locations are indexed in sorted-name order so ids are stable across
    /// builds. Malformed entries (unknown names, non-finite coordinates) are
    /// skipped and reported through [`Network::diagnostics`]; construction
    /// itself never fails.
    pub fn build(data: &NetworkData) -> Self {
        let mut diagnostics = Vec::new();

        let mut names: Vec<&String> = data.coordinates.keys().collect();
        names.sort();

        let mut locations = Vec::new();
        let mut index = HashMap::new();
        for name in names {
            let (lat, lon) = data.coordinates[name];
            if !lat.is_finite() || !lon.is_finite() {
                warn!("dropping location {name}: non-finite coordinate ({lat}, {lon})");
                diagnostics.push(BuildDiagnostic::InvalidCoordinate { name: name.clone() });
                continue;
            }
            let id = locations.len();
            locations.push(Location::new(id, name.clone(), lat, lon));
            index.insert(name.clone(), id);
        }

        let n = locations.len();
        let mut road_neighbors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut segments = HashMap::new();

        let mut sources: Vec<&String> = data.neighbors.keys().collect();
        sources.sort();
        for name in sources {
            let Some(&from) = index.get(name.as_str()) else {
                warn!("skipping adjacency list of unknown location {name}");
                diagnostics.push(BuildDiagnostic::UnknownLocation { name: name.clone() });
                continue;
            };
            for neighbor in &data.neighbors[name] {
                let Some(&to) = index.get(neighbor.as_str()) else {
                    warn!("skipping road {name} -> {neighbor}: unknown neighbor");
                    diagnostics.push(BuildDiagnostic::UnknownNeighbor {
                        location: name.clone(),
                        neighbor: neighbor.clone(),
                    });
                    continue;
                };
                if from == to {
                    continue;
                }
                let key = canonical(from, to);
                if segments.contains_key(&key) {
                    continue;
                }
                let distance = locations[from].distance_to(&locations[to]);
                segments.insert(key, distance);
                // Road segments are unordered pairs; keep adjacency symmetric.
                road_neighbors[from].push(to);
                road_neighbors[to].push(from);
            }
        }
        for neighbors in &mut road_neighbors {
            neighbors.sort_unstable();
        }

        let mut is_hub = vec![false; n];
        let mut hubs = Vec::new();
        for name in &data.hubs {
            let Some(&id) = index.get(name.as_str()) else {
                warn!("skipping unknown hub {name}");
                diagnostics.push(BuildDiagnostic::UnknownHub { name: name.clone() });
                continue;
            };
            if !is_hub[id] {
                is_hub[id] = true;
                hubs.push(id);
            }
        }
        hubs.sort_unstable();

        let mut network = Self {
            locations,
            index,
            road_neighbors,
            segments,
            hubs,
            is_hub,
            diagnostics,
        };

        if n > 0 {
            let unreachable = network.unreachable_from(0);
            if !unreachable.is_empty() {
                let names: Vec<String> = unreachable
                    .iter()
                    .map(|&id| network.locations[id].name().to_string())
                    .collect();
                warn!("network has {} location(s) disconnected from {}: {:?}",
                    names.len(),
                    network.locations[0].name(),
                    names
                );
                network
                    .diagnostics
                    .push(BuildDiagnostic::Disconnected { names });
            }
        }

        network
    }

    /// Number of locations in the network.
    pub fn num_locations(&self) -> usize {
        self.locations.len()
    }

    /// All locations, indexed by id.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// The location with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds.
    pub fn location(&self, id: usize) -> &Location {
        &self.locations[id]
    }

    /// Resolves a location name to its id.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Ids of the road neighbors of a location.
    pub fn road_neighbors(&self, id: usize) -> &[usize] {
        &self.road_neighbors[id]
    }

    /// Stored road distance between two directly connected locations,
    /// orientation-independent.
    pub fn road_distance(&self, a: usize, b: usize) -> Option<f64> {
        self.segments.get(&canonical(a, b)).copied()
    }

    /// Great-circle distance between two locations, used for flight edges
    /// and heuristic estimates.
    pub fn straight_line_km(&self, a: usize, b: usize) -> f64 {
        let la = &self.locations[a];
        let lb = &self.locations[b];
        haversine_km(la.latitude(), la.longitude(), lb.latitude(), lb.longitude())
    }

    /// Ids of the hub locations.
    pub fn hubs(&self) -> &[usize] {
        &self.hubs
    }

    /// Whether the location has flight access.
    pub fn is_hub(&self, id: usize) -> bool {
        self.is_hub[id]
    }

    /// Whether the network contains any flight edge at all.
    pub fn has_flight_network(&self) -> bool {
        self.hubs.len() >= 2
    }

    /// All outgoing edges of a location: its road segments plus, if it is a
    /// hub, a flight to every other hub with the distance computed on demand.
    pub fn edges_from(&self, id: usize) -> impl Iterator<Item = Edge> + '_ {
        let roads = self.road_neighbors[id].iter().map(move |&to| Edge {
            to,
            mode: TransportMode::Road,
            distance_km: self
                .road_distance(id, to)
                .unwrap_or_else(|| self.straight_line_km(id, to)),
        });
        let flights = self
            .is_hub[id]
            .then(|| {
                self.hubs.iter().filter(move |&&h| h != id).map(move |&h| Edge {
                    to: h,
                    mode: TransportMode::Fly,
                    distance_km: self.straight_line_km(id, h),
                })
            })
            .into_iter()
            .flatten();
        roads.chain(flights)
    }

    /// Data-integrity defects found at build time.
    pub fn diagnostics(&self) -> &[BuildDiagnostic] {
        &self.diagnostics
    }

    /// Ids unreachable from `start` by depth-first traversal over road and
    /// flight edges. Advisory; solving remains possible for reachable pairs.
    pub fn unreachable_from(&self, start: usize) -> Vec<usize> {
        let n = self.locations.len();
        let mut seen = vec![false; n];
        if start < n {
            let mut stack = vec![start];
            seen[start] = true;
            while let Some(current) = stack.pop() {
                for edge in self.edges_from(current) {
                    if !seen[edge.to] {
                        seen[edge.to] = true;
                        stack.push(edge.to);
                    }
                }
            }
        }
        (0..n).filter(|&id| !seen[id]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> NetworkData {
        let mut data = NetworkData::new();
        data.add_location("alpha", 0.0, 0.0);
        data.add_location("beta", 0.0, 1.0);
        data.add_location("gamma", 1.0, 1.0);
        data.add_road("alpha", "beta");
        data.add_road("beta", "gamma");
        data
    }

    #[test]
    fn test_build_indexes_sorted_names() {
        let net = Network::build(&triangle());
        assert_eq!(net.location(0).name(), "alpha");
        assert_eq!(net.location(1).name(), "beta");
        assert_eq!(net.location(2).name(), "gamma");
        assert_eq!(net.index_of("beta"), Some(1));
        assert_eq!(net.index_of("missing"), None);
    }

    #[test]
    fn test_segments_deduplicated_and_symmetric() {
        let net = Network::build(&triangle());
        // add_road records both directions; only one segment must exist.
        assert_eq!(net.segments.len(), 2);
        let d_ab = net.road_distance(0, 1).expect("road exists");
        let d_ba = net.road_distance(1, 0).expect("road exists");
        assert_eq!(d_ab, d_ba);
        assert!(net.road_distance(0, 2).is_none());
        assert_eq!(net.road_neighbors(1), &[0, 2]);
    }

    #[test]
    fn test_unknown_neighbor_skipped_with_diagnostic() {
        let mut data = triangle();
        data.neighbors
            .get_mut("alpha")
            .expect("alpha has neighbors")
            .push("atlantis".to_string());
        let net = Network::build(&data);
        assert_eq!(net.road_neighbors(0), &[1]);
        assert!(net.diagnostics().iter().any(|d| matches!(
            d,
            BuildDiagnostic::UnknownNeighbor { location, neighbor }
                if location == "alpha" && neighbor == "atlantis"
        )));
    }

    #[test]
    fn test_unknown_hub_skipped_with_diagnostic() {
        let mut data = triangle();
        data.add_hub("alpha");
        data.add_hub("atlantis");
        let net = Network::build(&data);
        assert_eq!(net.hubs(), &[0]);
        assert!(net
            .diagnostics()
            .iter()
            .any(|d| matches!(d, BuildDiagnostic::UnknownHub { name } if name == "atlantis")));
    }

    #[test]
    fn test_non_finite_coordinate_dropped() {
        let mut data = triangle();
        data.add_location("nanland", f64::NAN, 12.0);
        let net = Network::build(&data);
        assert_eq!(net.num_locations(), 3);
        assert!(net
            .diagnostics()
            .iter()
            .any(|d| matches!(d, BuildDiagnostic::InvalidCoordinate { name } if name == "nanland")));
    }

    #[test]
    fn test_disconnected_location_reported() {
        let mut data = triangle();
        data.add_location("delta", 5.0, 5.0);
        let net = Network::build(&data);
        let delta = net.index_of("delta").expect("delta exists");
        assert_eq!(net.unreachable_from(0), vec![delta]);
        assert!(net.diagnostics().iter().any(|d| matches!(
            d,
            BuildDiagnostic::Disconnected { names } if names == &["delta".to_string()]
        )));
    }

    #[test]
    fn test_flight_edges_complete_over_hubs() {
        let mut data = triangle();
        data.add_hub("alpha");
        data.add_hub("gamma");
        let net = Network::build(&data);
        assert!(net.has_flight_network());

        let alpha_edges: Vec<Edge> = net.edges_from(0).collect();
        // One road to beta plus one flight to gamma.
        assert_eq!(alpha_edges.len(), 2);
        let flight = alpha_edges
            .iter()
            .find(|e| e.mode == TransportMode::Fly)
            .expect("alpha is a hub");
        assert_eq!(flight.to, 2);
        assert!((flight.distance_km - net.straight_line_km(0, 2)).abs() < 1e-10);

        // beta is not a hub: road edges only.
        assert!(net.edges_from(1).all(|e| e.mode == TransportMode::Road));
    }

    #[test]
    fn test_duplicate_hub_ignored() {
        let mut data = triangle();
        data.add_hub("alpha");
        data.add_hub("alpha");
        let net = Network::build(&data);
        assert_eq!(net.hubs(), &[0]);
        assert!(!net.has_flight_network());
    }

    #[test]
    fn test_self_loop_skipped() {
        let mut data = triangle();
        data.neighbors
            .get_mut("alpha")
            .expect("alpha has neighbors")
            .push("alpha".to_string());
        let net = Network::build(&data);
        assert_eq!(net.road_neighbors(0), &[1]);
    }

    #[test]
    fn test_empty_network() {
        let net = Network::build(&NetworkData::new());
        assert_eq!(net.num_locations(), 0);
        assert!(net.diagnostics().is_empty());
    }
}

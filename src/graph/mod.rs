//! Network graph: locations, deduplicated road segments, and the implicit
//! complete flight subgraph over hub locations.

mod location;
mod network;

pub use location::Location;
pub use network::{BuildDiagnostic, Edge, Network, NetworkData};

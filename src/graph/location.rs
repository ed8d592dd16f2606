//! Location (node) type.

use crate::geo::haversine_km;

/// A named location in the transport network.
///
/// Locations are immutable once the network is built; all transient search
/// state lives in per-run tables keyed by the location id, never here.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    id: usize,
    name: String,
    latitude: f64,
    longitude: f64,
}

impl Location {
    pub(crate) fn new(id: usize, name: String, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            name,
            latitude,
            longitude,
        }
    }

    /// Dense index of this location within its network.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Unique location name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another location in kilometers.
    pub fn distance_to(&self, other: &Location) -> f64 {
        haversine_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

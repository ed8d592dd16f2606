//! Great-circle geometry on a spherical Earth.

mod haversine;

pub use haversine::{haversine_km, EARTH_RADIUS_KM};

//! Shared fixture: a small country-scale network with three hubs and one
//! intentionally disconnected island.

use std::f64::consts::PI;

use multiroute::cost::{CostConstants, CostModel};
use multiroute::geo::EARTH_RADIUS_KM;
use multiroute::graph::{Network, NetworkData};

/// Degrees of arc spanning `km` kilometers along a great circle.
pub fn deg(km: f64) -> f64 {
    km / EARTH_RADIUS_KM * 180.0 / PI
}

pub fn cost_model() -> CostModel {
    CostModel::new(CostConstants::default()).expect("default constants are valid")
}

/// Eight locations: `capital`, `coast`, and `south` are hubs; `island` has
/// no edges at all.
pub fn country() -> Network {
    let mut data = NetworkData::new();
    data.add_location("capital", 0.0, 0.0);
    data.add_location("port", 0.0, deg(120.0));
    data.add_location("mountain", deg(150.0), deg(60.0));
    data.add_location("midland", 0.0, deg(400.0));
    data.add_location("coast", 0.0, deg(800.0));
    data.add_location("south", 0.0, deg(1500.0));
    data.add_location("delta", deg(-100.0), deg(1400.0));
    data.add_location("island", deg(900.0), deg(900.0));

    data.add_road("capital", "port");
    data.add_road("capital", "mountain");
    data.add_road("capital", "midland");
    data.add_road("port", "midland");
    data.add_road("midland", "coast");
    data.add_road("coast", "south");
    data.add_road("coast", "delta");
    data.add_road("delta", "south");

    data.add_hub("capital");
    data.add_hub("coast");
    data.add_hub("south");

    Network::build(&data)
}

/// Every location name except the disconnected island.
pub fn connected_names() -> Vec<&'static str> {
    vec![
        "capital", "port", "mountain", "midland", "coast", "south", "delta",
    ]
}

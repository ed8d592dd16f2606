//! Cost model: transport modes, tunable constants, and the blended
//! cost/time objective that every search strategy minimizes.

mod constants;
mod model;

pub use constants::{ConfigError, CostConstants};
pub use model::{clamp_priority, CostModel, SegmentMetrics, TransportMode};

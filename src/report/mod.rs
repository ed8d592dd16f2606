//! Result assembly: turning a raw search outcome into a fully itemized
//! route summary.

mod summary;

pub use summary::{assemble, RouteSummary, SegmentReport};

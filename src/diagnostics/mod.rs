//! Diagnostics returned alongside the frequency estimate.
//!
//! `FrequencyReport` bundles the masked map, the median and a
//! `FrequencyTrace` with one `BlockSample` per visited block plus stage
//! timings. Everything except the map serializes to camelCase JSON.

pub mod report;
pub mod timing;

pub use report::{BlockSample, FrequencyReport, FrequencyTrace, InputDescriptor};
pub use timing::{StageTiming, TimingBreakdown};

//! Whole-image ridge frequency: tiling, per-block estimation, masking and
//! median reduction.

pub mod params;
pub mod pipeline;
pub mod reduce;
pub mod tiling;

pub use params::RidgeFreqParams;
pub use pipeline::RidgeFrequencyMapBuilder;
pub use reduce::{broadcast_median, median, positive_median};
pub use tiling::{BlockCell, BlockGrid};

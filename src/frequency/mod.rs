//! Ridge frequency of a single image block.
//!
//! [`FrequencyEstimator`] aligns the ridges of a block vertically, projects
//! the block to a 1-D profile and converts the mean peak spacing into cycles
//! per pixel. See `estimator` for the step-by-step description.

pub mod estimator;
pub mod params;

pub use estimator::{BlockEstimate, BlockOutcome, FrequencyEstimator};
pub use params::{FrequencyParams, PEAK_NOISE_THRESHOLD};

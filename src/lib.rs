#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod frequency;
pub mod image;
pub mod mapper;
pub mod orientation;

// Building blocks – public for tooling and tests, but considered internals.
pub mod angle;
pub mod profile;
pub mod warp;

// --- High-level re-exports -------------------------------------------------

// Main entry points: whole-image builder and per-block estimator.
pub use crate::frequency::{BlockEstimate, BlockOutcome, FrequencyEstimator, FrequencyParams};
pub use crate::mapper::{broadcast_median, RidgeFreqParams, RidgeFrequencyMapBuilder};

// Inputs and errors.
pub use crate::error::Error;
pub use crate::image::{BorderMode, ImageF32};
pub use crate::orientation::{OrientationField, OrientationResolution};

// Diagnostics returned by `build_with_diagnostics`.
pub use crate::diagnostics::{BlockSample, FrequencyReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use ridge_frequency::prelude::*;
///
/// # fn main() {
/// let (w, h) = (256usize, 256usize);
/// let image = ImageF32::new(w, h);
/// let mask = ImageF32::new_fill(w, h, 1.0);
/// let orient = OrientationField::uniform(7, 7, 0.0);
///
/// let builder = RidgeFrequencyMapBuilder::new(RidgeFreqParams::default());
/// match builder.build_with_diagnostics(&image, &mask, &orient) {
///     Ok(report) => println!("{}", report.summary()),
///     Err(err) => eprintln!("{err}"),
/// }
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageF32;
    pub use crate::orientation::OrientationField;
    pub use crate::{Error, RidgeFreqParams, RidgeFrequencyMapBuilder};
}

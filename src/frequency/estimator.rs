//! Per-block ridge frequency estimation.
//!
//! Steps for one block:
//! 1. Reduce the orientation samples with the doubled-angle circular mean.
//! 2. Rotate the block by `θ·180/π + 90` degrees so ridges run vertically
//!    (cubic B-spline resampling, border per [`FrequencyParams::border`]).
//! 3. Crop the rotation-safe centre square and sum down its columns.
//! 4. Pick peaks against a flat grey dilation of the profile.
//! 5. Average peak spacing gives the wavelength; inside the accepted range its
//!    reciprocal is the block frequency, otherwise the block reads zero.
//!
//! Degenerate blocks never fail: they produce a zero frequency together with
//! a [`BlockOutcome`] explaining why.
use super::params::FrequencyParams;
use crate::angle::doubled_angle_mean;
use crate::error::Error;
use crate::image::ImageF32;
use crate::profile::{detect_peaks, mean_wavelength, projected_ridge_profile};
use crate::warp::rotate_about_center;
use serde::Serialize;

/// Why a block ended with the frequency it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockOutcome {
    Accepted,
    TooFewPeaks,
    WavelengthOutOfRange,
    NoOrientation,
}

/// Scalar result of one block plus the intermediate values behind it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockEstimate {
    /// Circular-mean ridge orientation used for the rotation (radians).
    pub orientation_rad: Option<f32>,
    /// Peak positions along the projected profile.
    pub peaks: Vec<usize>,
    /// Mean peak spacing in pixels, when at least two peaks were found.
    pub wavelength: Option<f32>,
    /// `1 / wavelength` when accepted, `0` otherwise.
    pub frequency: f32,
    pub outcome: BlockOutcome,
}

impl BlockEstimate {
    fn rejected(orientation_rad: Option<f32>, outcome: BlockOutcome) -> Self {
        Self {
            orientation_rad,
            peaks: Vec::new(),
            wavelength: None,
            frequency: 0.0,
            outcome,
        }
    }

    /// Constant `w × h` patch holding the block frequency.
    pub fn patch(&self, w: usize, h: usize) -> ImageF32 {
        ImageF32::new_fill(w, h, self.frequency)
    }
}

/// Stateless per-block estimator; cheap to share across threads.
#[derive(Clone, Debug, Default)]
pub struct FrequencyEstimator {
    params: FrequencyParams,
}

impl FrequencyEstimator {
    /// Create an estimator without validating `params`.
    pub fn new(params: FrequencyParams) -> Self {
        Self { params }
    }

    /// Create an estimator after checking the parameter invariants.
    pub fn try_new(params: FrequencyParams) -> Result<Self, Error> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &FrequencyParams {
        &self.params
    }

    /// Frequency patch with the dimensions of `block`: constant `1/λ` when a
    /// wavelength in range was measured, all zeros otherwise.
    pub fn estimate(&self, block: &ImageF32, orientations: &[f32]) -> ImageF32 {
        self.estimate_block(block, orientations).patch(block.w, block.h)
    }

    /// Estimate the ridge frequency of `block` given its orientation samples.
    ///
    /// A single sample is the usual case (one pre-averaged angle per block);
    /// several samples are reduced with the doubled-angle circular mean.
    pub fn estimate_block(&self, block: &ImageF32, orientations: &[f32]) -> BlockEstimate {
        let Some(theta) = doubled_angle_mean(orientations) else {
            return BlockEstimate::rejected(None, BlockOutcome::NoOrientation);
        };

        let degrees = (theta as f64).to_degrees() + 90.0;
        let rotated = rotate_about_center(block, degrees, self.params.border);
        let profile = projected_ridge_profile(&rotated);
        let peaks = detect_peaks(
            &profile,
            self.params.kernel_size,
            self.params.peak_noise_threshold,
        );

        let Some(wavelength) = mean_wavelength(&peaks) else {
            let mut est = BlockEstimate::rejected(Some(theta), BlockOutcome::TooFewPeaks);
            est.peaks = peaks;
            return est;
        };

        let (frequency, outcome) = if self.params.accepts(wavelength) {
            (1.0 / wavelength, BlockOutcome::Accepted)
        } else {
            (0.0, BlockOutcome::WavelengthOutOfRange)
        };
        BlockEstimate {
            orientation_rad: Some(theta),
            peaks,
            wavelength: Some(wavelength),
            frequency,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    /// Ridges along direction `theta` (x right, y down) with period `period`,
    /// phase chosen so a crest passes through `(phase, phase)`.
    fn ridge_block(size: usize, period: f32, theta: f32, phase: f32) -> ImageF32 {
        let (s, c) = theta.sin_cos();
        ImageF32::from_fn(size, size, |x, y| {
            let (dx, dy) = (x as f32 - phase, y as f32 - phase);
            let n = -dx * s + dy * c;
            (2.0 * PI * n / period).cos()
        })
    }

    fn params(min: f32, max: f32) -> FrequencyParams {
        FrequencyParams {
            kernel_size: 5,
            min_wavelength: min,
            max_wavelength: max,
            ..Default::default()
        }
    }

    #[test]
    fn horizontal_ridges_with_zero_orientation() {
        let block = ridge_block(16, 8.0, 0.0, 3.0);
        let est = FrequencyEstimator::new(params(3.0, 25.0)).estimate_block(&block, &[0.0]);
        assert_eq!(est.outcome, BlockOutcome::Accepted, "{est:?}");
        assert_eq!(est.peaks, vec![1, 9]);
        assert!((est.frequency - 0.125).abs() < 1e-6);
    }

    #[test]
    fn vertical_ridges_with_quarter_turn_orientation() {
        let block = ridge_block(16, 8.0, FRAC_PI_2, 3.0);
        let est = FrequencyEstimator::new(params(3.0, 25.0)).estimate_block(&block, &[FRAC_PI_2]);
        assert_eq!(est.outcome, BlockOutcome::Accepted, "{est:?}");
        assert!((est.frequency - 0.125).abs() < 1e-6);
    }

    #[test]
    fn patch_is_constant_and_block_sized() {
        let block = ridge_block(16, 8.0, 0.0, 3.0);
        let patch = FrequencyEstimator::new(params(3.0, 25.0)).estimate(&block, &[0.0]);
        assert_eq!((patch.w, patch.h), (16, 16));
        assert!(patch.data.iter().all(|&v| (v - 0.125).abs() < 1e-6));
    }

    #[test]
    fn flat_block_yields_zero_patch() {
        let block = ImageF32::new_fill(16, 16, 0.5);
        let estimator = FrequencyEstimator::new(params(3.0, 25.0));
        let est = estimator.estimate_block(&block, &[0.4]);
        assert_eq!(est.outcome, BlockOutcome::TooFewPeaks);
        let patch = estimator.estimate(&block, &[0.4]);
        assert!(patch.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn wavelength_outside_range_is_rejected() {
        let block = ridge_block(16, 8.0, 0.0, 3.0);
        let est = FrequencyEstimator::new(params(3.0, 6.0)).estimate_block(&block, &[0.0]);
        assert_eq!(est.outcome, BlockOutcome::WavelengthOutOfRange);
        assert_eq!(est.wavelength, Some(8.0));
        assert_eq!(est.frequency, 0.0);
    }

    #[test]
    fn missing_or_invalid_orientation_degrades_to_zero() {
        let block = ridge_block(16, 8.0, 0.0, 3.0);
        let estimator = FrequencyEstimator::new(params(3.0, 25.0));
        assert_eq!(
            estimator.estimate_block(&block, &[]).outcome,
            BlockOutcome::NoOrientation
        );
        assert_eq!(
            estimator.estimate_block(&block, &[f32::NAN]).outcome,
            BlockOutcome::NoOrientation
        );
    }

    #[test]
    fn empty_block_degrades_to_zero() {
        let block = ImageF32::new(0, 0);
        let estimator = FrequencyEstimator::new(params(3.0, 25.0));
        let est = estimator.estimate_block(&block, &[0.0]);
        assert_eq!(est.outcome, BlockOutcome::TooFewPeaks);
        assert_eq!(estimator.estimate(&block, &[0.0]).data.len(), 0);
    }

    #[test]
    fn multiple_samples_use_circular_mean() {
        let block = ridge_block(16, 8.0, FRAC_PI_2, 3.0);
        let estimator = FrequencyEstimator::new(params(3.0, 25.0));
        // ±π/2 name the same ridge direction; a naive mean would give 0.
        let samples = [FRAC_PI_2, -FRAC_PI_2, FRAC_PI_2, -FRAC_PI_2];
        let est = estimator.estimate_block(&block, &samples);
        assert_eq!(est.outcome, BlockOutcome::Accepted, "{est:?}");
        assert!((est.frequency - 0.125).abs() < 1e-6);
    }

    #[test]
    fn oblique_ridges_go_through_spline_rotation() {
        let estimator = FrequencyEstimator::new(params(3.0, 25.0));
        for theta in [0.39f32, 0.93] {
            let block = ridge_block(38, 8.0, theta, 3.0);
            let est = estimator.estimate_block(&block, &[theta]);
            assert_eq!(est.outcome, BlockOutcome::Accepted, "theta={theta}: {est:?}");
            assert!(
                (est.frequency - 0.125).abs() < 1e-3,
                "theta={theta}: frequency {}",
                est.frequency
            );
        }
    }

    #[test]
    fn try_new_validates() {
        assert!(FrequencyEstimator::try_new(params(10.0, 5.0)).is_err());
        assert!(FrequencyEstimator::try_new(params(5.0, 10.0)).is_ok());
    }
}

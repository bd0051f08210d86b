//! Whole-image ridge frequency driver.
//!
//! [`RidgeFrequencyMapBuilder`] tiles the image into blocks, runs the
//! [`FrequencyEstimator`] on each block with that block's orientation, writes
//! the constant per-block frequency into a full-resolution map, applies the
//! validity mask and reduces the positive entries to their median.
//!
//! Typical usage:
//! ```no_run
//! use ridge_frequency::{ImageF32, OrientationField, RidgeFreqParams, RidgeFrequencyMapBuilder};
//!
//! # fn example(image: ImageF32, mask: ImageF32, orient: OrientationField) {
//! let builder = RidgeFrequencyMapBuilder::new(RidgeFreqParams::default());
//! match builder.build(&image, &mask, &orient) {
//!     Ok(freq) => println!("median ridge frequency: {freq:.4} cycles/px"),
//!     Err(err) => eprintln!("frequency estimation failed: {err}"),
//! }
//! # }
//! ```
//!
//! Each horizontal band of blocks owns a disjoint slice of map rows, so bands
//! are processed in parallel (feature `parallel`) without synchronisation.
use super::params::RidgeFreqParams;
use super::reduce::positive_median;
use super::tiling::BlockGrid;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{BlockSample, FrequencyReport, FrequencyTrace, InputDescriptor, TimingBreakdown};
use crate::error::Error;
use crate::frequency::{BlockOutcome, FrequencyEstimator};
use crate::image::ImageF32;
use crate::orientation::OrientationField;
use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::time::Instant;

/// Builds ridge frequency maps and their median for whole images.
#[derive(Clone, Debug)]
pub struct RidgeFrequencyMapBuilder {
    params: RidgeFreqParams,
    estimator: FrequencyEstimator,
}

impl Default for RidgeFrequencyMapBuilder {
    fn default() -> Self {
        Self::new(RidgeFreqParams::default())
    }
}

impl RidgeFrequencyMapBuilder {
    /// Create a builder; parameters are validated on every run.
    pub fn new(params: RidgeFreqParams) -> Self {
        let estimator = FrequencyEstimator::new(params.frequency.clone());
        Self { params, estimator }
    }

    pub fn params(&self) -> &RidgeFreqParams {
        &self.params
    }

    /// Unmasked frequency map with the image's shape.
    pub fn build_map(
        &self,
        image: &ImageF32,
        orientation: &OrientationField,
    ) -> Result<ImageF32, Error> {
        let grid = self.prepare(image, None, orientation)?;
        let (map, _) = self.estimate_blocks(image, orientation, &grid);
        Ok(map)
    }

    /// Median ridge frequency over the masked, positive map entries.
    ///
    /// Fails with [`Error::NoRidgeFrequency`] when no block inside the mask
    /// yields a frequency.
    pub fn build(
        &self,
        image: &ImageF32,
        mask: &ImageF32,
        orientation: &OrientationField,
    ) -> Result<f32, Error> {
        self.build_with_diagnostics(image, mask, orientation)?
            .median
            .ok_or(Error::NoRidgeFrequency)
    }

    /// Run the full pipeline and return the masked map, the median (if any)
    /// and a per-block trace.
    pub fn build_with_diagnostics(
        &self,
        image: &ImageF32,
        mask: &ImageF32,
        orientation: &OrientationField,
    ) -> Result<FrequencyReport, Error> {
        let total_start = Instant::now();
        let grid = self.prepare(image, Some(mask), orientation)?;
        debug!(
            "RidgeFrequencyMapBuilder::build start w={} h={} block={} grid={}x{}",
            image.w, image.h, grid.block_size, grid.blocks_x, grid.blocks_y
        );
        let mut timings = TimingBreakdown::default();

        let blocks_start = Instant::now();
        let (mut map, blocks) = self.estimate_blocks(image, orientation, &grid);
        timings.record("blocks", blocks_start);

        let mask_start = Instant::now();
        map.mul_assign(mask)?;
        timings.record("mask", mask_start);

        let median_start = Instant::now();
        let median = positive_median(&map);
        timings.record("median", median_start);

        let accepted_blocks = blocks
            .iter()
            .filter(|b| b.outcome == BlockOutcome::Accepted)
            .count();
        let positive_pixels = map.data.iter().filter(|&&v| v > 0.0).count();
        timings.total_ms = elapsed_ms(total_start);

        let report = FrequencyReport {
            frequency_map: map,
            median,
            trace: FrequencyTrace {
                input: InputDescriptor {
                    width: image.w,
                    height: image.h,
                    grid,
                    orientation: orientation.resolution(),
                },
                blocks,
                accepted_blocks,
                positive_pixels,
                timings,
            },
        };
        debug!("RidgeFrequencyMapBuilder::build done {}", report.summary());
        Ok(report)
    }

    fn prepare(
        &self,
        image: &ImageF32,
        mask: Option<&ImageF32>,
        orientation: &OrientationField,
    ) -> Result<BlockGrid, Error> {
        self.params.validate()?;
        if let Some(mask) = mask {
            if mask.dims() != image.dims() {
                return Err(Error::ShapeMismatch {
                    expected: image.dims(),
                    actual: mask.dims(),
                });
            }
        }
        let grid = BlockGrid::new(image.w, image.h, self.params.block_size);
        orientation.validate_for(&grid)?;
        Ok(grid)
    }

    fn estimate_blocks(
        &self,
        image: &ImageF32,
        orientation: &OrientationField,
        grid: &BlockGrid,
    ) -> (ImageF32, Vec<BlockSample>) {
        let mut map = ImageF32::new(image.w, image.h);
        if grid.is_empty() {
            return (map, Vec::new());
        }
        // A non-empty grid has block_size < h, so the band fits inside the map.
        let band_len = grid.block_size * image.w;

        let run_band = |(by, band): (usize, &mut [f32])| {
            self.estimate_band(image, orientation, grid, by, band)
        };

        #[cfg(feature = "parallel")]
        let bands: Vec<Vec<BlockSample>> = map
            .data
            .par_chunks_mut(band_len)
            .take(grid.blocks_y)
            .enumerate()
            .map(run_band)
            .collect();
        #[cfg(not(feature = "parallel"))]
        let bands: Vec<Vec<BlockSample>> = map
            .data
            .chunks_mut(band_len)
            .take(grid.blocks_y)
            .enumerate()
            .map(run_band)
            .collect();

        (map, bands.into_iter().flatten().collect())
    }

    /// Estimate every block of band `by`; `band` holds the band's map rows.
    fn estimate_band(
        &self,
        image: &ImageF32,
        orientation: &OrientationField,
        grid: &BlockGrid,
        by: usize,
        band: &mut [f32],
    ) -> Vec<BlockSample> {
        let w = image.w;
        grid.band(by)
            .map(|cell| {
                let block = image.crop(cell.x, cell.y, cell.size, cell.size);
                let samples = orientation.block_samples(&cell);
                let estimate = self.estimator.estimate_block(&block, &samples);
                if estimate.frequency > 0.0 {
                    for row in band.chunks_mut(w).take(cell.size) {
                        row[cell.x..cell.x + cell.size].fill(estimate.frequency);
                    }
                }
                BlockSample::from_estimate(&cell, &estimate)
            })
            .collect()
    }
}

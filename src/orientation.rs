//! Ridge orientation input for the frequency pipeline.
//!
//! The field is computed upstream. It comes either at block resolution (one
//! angle per block cell, read at `(col / bs, row / bs)`) or at pixel resolution
//! (same shape as the image). In the pixel case every sample inside a block
//! is handed to the estimator, which reduces them with the doubled-angle
//! circular mean.
use crate::angle::doubled_angle_mean;
use crate::error::Error;
use crate::image::ImageF32;
use crate::mapper::tiling::{BlockCell, BlockGrid};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrientationResolution {
    Block,
    Pixel,
}

/// Ridge orientation angles in radians (x right, y down; 0 = ridges parallel
/// to the x axis).
#[derive(Clone, Debug, PartialEq)]
pub struct OrientationField {
    angles: ImageF32,
    resolution: OrientationResolution,
}

impl OrientationField {
    /// One angle per block cell; `angles.get(bx, by)` belongs to block `(bx, by)`.
    pub fn per_block(angles: ImageF32) -> Self {
        Self {
            angles,
            resolution: OrientationResolution::Block,
        }
    }

    /// One angle per pixel; must share the image's shape.
    pub fn per_pixel(angles: ImageF32) -> Self {
        Self {
            angles,
            resolution: OrientationResolution::Pixel,
        }
    }

    /// Block-resolution field holding the same angle everywhere.
    pub fn uniform(blocks_x: usize, blocks_y: usize, theta: f32) -> Self {
        Self::per_block(ImageF32::new_fill(blocks_x, blocks_y, theta))
    }

    pub fn resolution(&self) -> OrientationResolution {
        self.resolution
    }

    pub fn angles(&self) -> &ImageF32 {
        &self.angles
    }

    /// Check that every block visited on `grid` can be given an orientation.
    pub fn validate_for(&self, grid: &BlockGrid) -> Result<(), Error> {
        match self.resolution {
            OrientationResolution::Block => {
                let required = (grid.blocks_x, grid.blocks_y);
                if !grid.is_empty()
                    && (self.angles.w < required.0 || self.angles.h < required.1)
                {
                    return Err(Error::OrientationFieldTooSmall {
                        required,
                        actual: self.angles.dims(),
                    });
                }
            }
            OrientationResolution::Pixel => {
                let expected = (grid.width, grid.height);
                if self.angles.dims() != expected {
                    return Err(Error::ShapeMismatch {
                        expected,
                        actual: self.angles.dims(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Orientation samples for one block.
    pub fn block_samples(&self, cell: &BlockCell) -> Vec<f32> {
        match self.resolution {
            OrientationResolution::Block => vec![self.angles.get(cell.bx, cell.by)],
            OrientationResolution::Pixel => {
                self.angles.crop(cell.x, cell.y, cell.size, cell.size).data
            }
        }
    }

    /// Collapse a pixel-resolution field to one circular-mean angle per
    /// `block_size` cell, covering partial cells at the right and bottom.
    ///
    /// Cells without a usable sample hold NaN, which the estimator treats as
    /// a missing orientation. Block-resolution fields are returned unchanged.
    pub fn averaged_to_blocks(&self, block_size: usize) -> Result<Self, Error> {
        if block_size == 0 {
            return Err(Error::InvalidBlockSize);
        }
        if self.resolution == OrientationResolution::Block {
            return Ok(self.clone());
        }
        let bw = self.angles.w.div_ceil(block_size);
        let bh = self.angles.h.div_ceil(block_size);
        let angles = ImageF32::from_fn(bw, bh, |bx, by| {
            let cell = self
                .angles
                .crop(bx * block_size, by * block_size, block_size, block_size);
            doubled_angle_mean(&cell.data).unwrap_or(f32::NAN)
        });
        Ok(Self::per_block(angles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::angular_difference;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn block_field_must_cover_visited_grid() {
        let grid = BlockGrid::new(64, 64, 16);
        assert!(OrientationField::uniform(3, 3, 0.0).validate_for(&grid).is_ok());
        assert_eq!(
            OrientationField::uniform(2, 3, 0.0).validate_for(&grid),
            Err(Error::OrientationFieldTooSmall {
                required: (3, 3),
                actual: (2, 3)
            })
        );
        let empty_grid = BlockGrid::new(8, 8, 16);
        assert!(OrientationField::uniform(0, 0, 0.0)
            .validate_for(&empty_grid)
            .is_ok());
    }

    #[test]
    fn pixel_field_must_match_image() {
        let grid = BlockGrid::new(32, 24, 8);
        let ok = OrientationField::per_pixel(ImageF32::new(32, 24));
        assert!(ok.validate_for(&grid).is_ok());
        let bad = OrientationField::per_pixel(ImageF32::new(24, 32));
        assert!(matches!(
            bad.validate_for(&grid),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn block_samples_follow_resolution() {
        let grid = BlockGrid::new(12, 12, 4);
        let cell = grid.cell(1, 0);

        let blocks = OrientationField::per_block(ImageF32::from_fn(3, 3, |x, y| (x + 10 * y) as f32));
        assert_eq!(blocks.block_samples(&cell), vec![1.0]);

        let pixels = OrientationField::per_pixel(ImageF32::new_fill(12, 12, 0.25));
        let samples = pixels.block_samples(&cell);
        assert_eq!(samples.len(), 16);
        assert!(samples.iter().all(|&v| v == 0.25));
    }

    #[test]
    fn averaging_to_blocks_uses_circular_mean() {
        // Left half near +π/2, right half near -π/2: both vertical ridges.
        let field = OrientationField::per_pixel(ImageF32::from_fn(8, 4, |x, _| {
            if x % 2 == 0 {
                FRAC_PI_2 - 0.02
            } else {
                -FRAC_PI_2 + 0.02
            }
        }));
        let blocks = field.averaged_to_blocks(3).expect("valid block size");
        assert_eq!(blocks.resolution(), OrientationResolution::Block);
        assert_eq!(blocks.angles().dims(), (3, 2));
        for &theta in &blocks.angles().data {
            assert!(
                angular_difference(theta, FRAC_PI_2) < 0.03,
                "expected near-vertical mean, got {theta}"
            );
        }
        assert_eq!(field.averaged_to_blocks(0), Err(Error::InvalidBlockSize));
    }
}

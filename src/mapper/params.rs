//! Parameters of the whole-image frequency map.
//!
//! Defaults follow common fingerprint-enhancement settings for ~500 dpi
//! images: 38 px blocks, a 5-sample peak window and ridge wavelengths between
//! 5 and 15 px.

use crate::error::Error;
use crate::frequency::FrequencyParams;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RidgeFreqParams {
    /// Side of the square blocks the image is tiled into (pixels, > 0).
    pub block_size: usize,
    /// Per-block estimator settings.
    #[serde(flatten)]
    pub frequency: FrequencyParams,
}

impl Default for RidgeFreqParams {
    fn default() -> Self {
        Self {
            block_size: 38,
            frequency: FrequencyParams::default(),
        }
    }
}

impl RidgeFreqParams {
    pub fn new(block_size: usize, kernel_size: usize, min_wavelength: f32, max_wavelength: f32) -> Self {
        Self {
            block_size,
            frequency: FrequencyParams {
                kernel_size,
                min_wavelength,
                max_wavelength,
                ..Default::default()
            },
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.block_size == 0 {
            return Err(Error::InvalidBlockSize);
        }
        self.frequency.validate()
    }
}

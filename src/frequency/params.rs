use crate::error::Error;
use crate::image::BorderMode;
use serde::{Deserialize, Serialize};

/// Maximum distance from the dilated profile at which a sample still counts
/// as a peak.
pub const PEAK_NOISE_THRESHOLD: f32 = 2.0;

/// Parameters of the per-block frequency estimator.
///
/// - `kernel_size`: dilation window used to find profile peaks (odd, e.g. 3 or 5).
/// - `min_wavelength` / `max_wavelength`: accepted ridge spacing in pixels.
/// - `peak_noise_threshold`: tolerance between the profile and its dilation.
/// - `border`: extension used when rotation samples outside the block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrequencyParams {
    pub kernel_size: usize,
    pub min_wavelength: f32,
    pub max_wavelength: f32,
    pub peak_noise_threshold: f32,
    pub border: BorderMode,
}

impl Default for FrequencyParams {
    fn default() -> Self {
        Self {
            kernel_size: 5,
            min_wavelength: 5.0,
            max_wavelength: 15.0,
            peak_noise_threshold: PEAK_NOISE_THRESHOLD,
            border: BorderMode::Clamp,
        }
    }
}

impl FrequencyParams {
    /// Check the invariants the estimator relies on.
    pub fn validate(&self) -> Result<(), Error> {
        if self.kernel_size == 0 || self.kernel_size % 2 == 0 {
            return Err(Error::InvalidKernelSize {
                kernel_size: self.kernel_size,
            });
        }
        let (min, max) = (self.min_wavelength, self.max_wavelength);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(Error::InvalidWavelengthRange { min, max });
        }
        let threshold = self.peak_noise_threshold;
        if !(threshold.is_finite() && threshold > 0.0) {
            return Err(Error::InvalidPeakThreshold { threshold });
        }
        Ok(())
    }

    /// Whether `wavelength` lies inside the inclusive accepted range.
    #[inline]
    pub fn accepts(&self, wavelength: f32) -> bool {
        wavelength >= self.min_wavelength && wavelength <= self.max_wavelength
    }
}

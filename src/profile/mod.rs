//! One-dimensional ridge profile analysis.
//!
//! After rotation the ridges of a block run vertically, so summing each column
//! gives a profile whose maxima sit on the ridge lines. Peaks are the samples
//! that (a) survive a flat grey dilation within `peak_noise_threshold` and
//! (b) lie above the profile mean. The ridge wavelength is the average spacing
//! between the first and last peak.

pub mod peaks;

pub use peaks::{detect_peaks, grey_dilate, mean_wavelength};

use crate::image::{ImageF32, ImageView};

/// Crop the centred `floor(h/√2)` square that stays free of rotation
/// padding and return its per-column sums.
///
/// The square uses the same offset `floor((h - crop)/2)` on both axes; on
/// blocks narrower than they are tall the column range is clipped.
pub fn projected_ridge_profile(rotated: &ImageF32) -> Vec<f32> {
    let rows = rotated.height();
    let crop = (rows as f64 / std::f64::consts::SQRT_2).floor() as usize;
    let offset = (rows - crop) / 2;
    let window = rotated.crop(offset, offset, crop, crop);

    let mut sums = vec![0.0f64; window.width()];
    for row in window.rows() {
        for (acc, &v) in sums.iter_mut().zip(row) {
            *acc += v as f64;
        }
    }
    sums.into_iter().map(|s| s as f32).collect()
}

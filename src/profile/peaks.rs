//! Flat grey dilation, peak picking and wavelength estimation on a profile.

/// Sliding-window maximum with a flat window of `kernel_size` samples,
/// centred on each sample.
///
/// The window is truncated at both ends of the profile, which for a max
/// filter is equivalent to reflecting the profile about its end points.
pub fn grey_dilate(profile: &[f32], kernel_size: usize) -> Vec<f32> {
    let n = profile.len();
    let half = kernel_size / 2;
    (0..n)
        .map(|i| {
            let lo = i.saturating_sub(half);
            let hi = (i + half).min(n - 1);
            profile[lo..=hi]
                .iter()
                .copied()
                .fold(f32::NEG_INFINITY, f32::max)
        })
        .collect()
}

/// Indices (ascending) of profile samples that are local maxima within the
/// dilation window up to `noise_threshold` and exceed the profile mean.
pub fn detect_peaks(profile: &[f32], kernel_size: usize, noise_threshold: f32) -> Vec<usize> {
    if profile.is_empty() {
        return Vec::new();
    }
    let mean = profile.iter().map(|&v| v as f64).sum::<f64>() / profile.len() as f64;
    let dilation = grey_dilate(profile, kernel_size);
    profile
        .iter()
        .zip(&dilation)
        .enumerate()
        .filter(|(_, (&v, &d))| (d - v).abs() < noise_threshold && (v as f64) > mean)
        .map(|(i, _)| i)
        .collect()
}

/// Average spacing between the first and last peak, or `None` with fewer
/// than two peaks.
pub fn mean_wavelength(peaks: &[usize]) -> Option<f32> {
    match (peaks.first(), peaks.last()) {
        (Some(&first), Some(&last)) if peaks.len() >= 2 => {
            Some((last - first) as f32 / (peaks.len() - 1) as f32)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dilation_truncates_window_at_ends() {
        let profile = [1.0, 5.0, 2.0, 0.0, 3.0, 1.0];
        assert_eq!(
            grey_dilate(&profile, 3),
            vec![5.0, 5.0, 5.0, 3.0, 3.0, 3.0]
        );
        assert_eq!(grey_dilate(&profile, 1), profile.to_vec());
        assert_eq!(
            grey_dilate(&profile, 5),
            vec![5.0, 5.0, 5.0, 5.0, 3.0, 3.0]
        );
    }

    #[test]
    fn peaks_require_local_max_and_above_mean() {
        // Two clear maxima at 2 and 7; the shoulder at 9 is below the mean.
        let profile = [0.0, 4.0, 10.0, 4.0, 0.0, 0.0, 4.0, 10.0, 4.0, 1.0];
        assert_eq!(detect_peaks(&profile, 3, 2.0), vec![2, 7]);
    }

    #[test]
    fn noise_threshold_admits_near_maxima() {
        let profile = [0.0, 9.0, 10.0, 0.0, 0.0, 0.0];
        // 9 is within 2 of the window maximum 10.
        assert_eq!(detect_peaks(&profile, 3, 2.0), vec![1, 2]);
        assert_eq!(detect_peaks(&profile, 3, 0.5), vec![2]);
    }

    #[test]
    fn flat_profile_has_no_peaks() {
        assert!(detect_peaks(&[3.0; 12], 5, 2.0).is_empty());
        assert!(detect_peaks(&[], 5, 2.0).is_empty());
    }

    #[test]
    fn wavelength_averages_over_peak_count() {
        assert_eq!(mean_wavelength(&[2, 10, 18]), Some(8.0));
        assert_eq!(mean_wavelength(&[1, 4, 10]), Some(4.5));
        assert_eq!(mean_wavelength(&[3]), None);
        assert_eq!(mean_wavelength(&[]), None);
    }
}

//! Angle utilities used across the frequency pipeline.

/// Circular mean of ridge orientations.
///
/// Ridge directions are π-periodic, so the samples are averaged as doubled
/// angles: `atan2(mean sin 2θ, mean cos 2θ) / 2`. The result lies in
/// (-π/2, π/2]. Returns `None` for an empty slice or when any sample is not
/// finite.
pub fn doubled_angle_mean(samples: &[f32]) -> Option<f32> {
    if samples.is_empty() {
        return None;
    }
    let mut sum_cos = 0.0f64;
    let mut sum_sin = 0.0f64;
    for &theta in samples {
        if !theta.is_finite() {
            return None;
        }
        let doubled = 2.0 * theta as f64;
        sum_cos += doubled.cos();
        sum_sin += doubled.sin();
    }
    let n = samples.len() as f64;
    Some(((sum_sin / n).atan2(sum_cos / n) / 2.0) as f32)
}

/// Cosine and sine of an angle given in degrees.
///
/// Multiples of 90° return exact values so that quarter-turn rotations map
/// pixel centres onto pixel centres without round-off.
pub fn cos_sin_deg(degrees: f64) -> (f64, f64) {
    let reduced = degrees.rem_euclid(360.0);
    if reduced == 0.0 {
        (1.0, 0.0)
    } else if reduced == 90.0 {
        (0.0, 1.0)
    } else if reduced == 180.0 {
        (-1.0, 0.0)
    } else if reduced == 270.0 {
        (0.0, -1.0)
    } else {
        let rad = reduced.to_radians();
        (rad.cos(), rad.sin())
    }
}

/// Computes the smallest unsigned angular difference between two angles,
/// treating antipodal directions as equivalent (i.e. π apart → 0).
#[inline]
pub fn angular_difference(a: f32, b: f32) -> f32 {
    let mut diff = (a - b).abs();
    if diff > std::f32::consts::PI {
        diff = diff.rem_euclid(std::f32::consts::PI);
    }
    if diff > std::f32::consts::FRAC_PI_2 {
        std::f32::consts::PI - diff
    } else {
        diff
    }
}

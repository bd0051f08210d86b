//! Cubic B-spline interpolation on a single-channel image.
//!
//! The image is padded by [`SPLINE_PAD`] samples per side using the requested
//! border mode, then converted to B-spline coefficients with the separable
//! recursive prefilter (pole `√3 − 2`, mirror-symmetric initialisation).
//! Evaluation uses the 4×4 cubic B-spline neighbourhood; coefficient lookups
//! beyond the padded grid are clamped.
//!
//! Because the prefilter makes the spline interpolating, sampling at integer
//! coordinates reproduces the input pixel values.
use crate::image::{map_index, BorderMode, ImageF32, ImageView};

/// Samples of padding added on every side before prefiltering.
pub const SPLINE_PAD: usize = 12;

const POLE: f64 = -0.267_949_192_431_122_7;
const INIT_TOLERANCE: f64 = 1e-12;

/// Prefiltered cubic B-spline coefficients for one image.
#[derive(Clone, Debug)]
pub struct SplineCoefficients {
    width: usize,
    height: usize,
    padded_w: usize,
    padded_h: usize,
    fill: f32,
    coeffs: Vec<f64>,
}

impl SplineCoefficients {
    /// Pad `img` with `border` and run the prefilter along rows and columns.
    pub fn from_image(img: &ImageF32, border: BorderMode) -> Self {
        let fill = match border {
            BorderMode::Constant(v) => v,
            _ => 0.0,
        };
        let (width, height) = (img.width(), img.height());
        if width == 0 || height == 0 {
            return Self {
                width,
                height,
                padded_w: 0,
                padded_h: 0,
                fill,
                coeffs: Vec::new(),
            };
        }

        let padded_w = width + 2 * SPLINE_PAD;
        let padded_h = height + 2 * SPLINE_PAD;
        let mut coeffs = Vec::with_capacity(padded_w * padded_h);
        for py in 0..padded_h {
            let sy = map_index(py as isize - SPLINE_PAD as isize, height, border);
            for px in 0..padded_w {
                let sx = map_index(px as isize - SPLINE_PAD as isize, width, border);
                let v = match (sx, sy) {
                    (Some(x), Some(y)) => img.get(x, y),
                    _ => fill,
                };
                coeffs.push(v as f64);
            }
        }

        for row in coeffs.chunks_mut(padded_w) {
            prefilter_line(row);
        }
        let mut column = vec![0.0f64; padded_h];
        for x in 0..padded_w {
            for (y, c) in column.iter_mut().enumerate() {
                *c = coeffs[y * padded_w + x];
            }
            prefilter_line(&mut column);
            for (y, &c) in column.iter().enumerate() {
                coeffs[y * padded_w + x] = c;
            }
        }

        Self {
            width,
            height,
            padded_w,
            padded_h,
            fill,
            coeffs,
        }
    }

    /// Width of the source image (without padding).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the source image (without padding).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Evaluate the spline at pixel-centre coordinates `(x, y)` of the source.
    pub fn sample(&self, x: f64, y: f64) -> f32 {
        if self.coeffs.is_empty() || !x.is_finite() || !y.is_finite() {
            return self.fill;
        }
        let px = x + SPLINE_PAD as f64;
        let py = y + SPLINE_PAD as f64;
        let x0 = px.floor();
        let y0 = py.floor();
        let wx = cubic_weights(px - x0);
        let wy = cubic_weights(py - y0);
        let x0 = x0 as isize - 1;
        let y0 = y0 as isize - 1;

        let mut acc = 0.0f64;
        for (j, &wyj) in wy.iter().enumerate() {
            let yy = clamp_index(y0 + j as isize, self.padded_h);
            let row = &self.coeffs[yy * self.padded_w..(yy + 1) * self.padded_w];
            let mut row_acc = 0.0f64;
            for (i, &wxi) in wx.iter().enumerate() {
                let xx = clamp_index(x0 + i as isize, self.padded_w);
                row_acc += wxi * row[xx];
            }
            acc += wyj * row_acc;
        }
        acc as f32
    }
}

#[inline]
fn clamp_index(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}

/// Cubic B-spline weights for the taps at offsets -1, 0, 1, 2 around
/// `floor(x)`, where `t = x - floor(x)`.
#[inline]
fn cubic_weights(t: f64) -> [f64; 4] {
    let u = 1.0 - t;
    [
        u * u * u / 6.0,
        2.0 / 3.0 - t * t + 0.5 * t * t * t,
        2.0 / 3.0 - u * u + 0.5 * u * u * u,
        t * t * t / 6.0,
    ]
}

/// In-place conversion of samples to cubic B-spline coefficients.
pub fn prefilter_line(line: &mut [f64]) {
    let n = line.len();
    if n < 2 {
        return;
    }
    let gain = (1.0 - POLE) * (1.0 - 1.0 / POLE);
    for v in line.iter_mut() {
        *v *= gain;
    }

    line[0] = initial_causal_coefficient(line);
    for k in 1..n {
        line[k] += POLE * line[k - 1];
    }

    line[n - 1] = (POLE / (POLE * POLE - 1.0)) * (POLE * line[n - 2] + line[n - 1]);
    for k in (0..n - 1).rev() {
        line[k] = POLE * (line[k + 1] - line[k]);
    }
}

fn initial_causal_coefficient(line: &[f64]) -> f64 {
    let n = line.len();
    let horizon = (INIT_TOLERANCE.ln() / POLE.abs().ln()).ceil() as usize;
    if horizon < n {
        let mut zn = POLE;
        let mut sum = line[0];
        for &v in &line[1..horizon] {
            sum += zn * v;
            zn *= POLE;
        }
        return sum;
    }

    // Exact mirror-symmetric initialisation for short lines.
    let iz = 1.0 / POLE;
    let mut zn = POLE;
    let mut z2n = POLE.powi(n as i32 - 1);
    let mut sum = line[0] + z2n * line[n - 1];
    z2n *= z2n * iz;
    for &v in &line[1..n - 1] {
        sum += (zn + z2n) * v;
        zn *= POLE;
        z2n *= iz;
    }
    sum / (1.0 - zn * zn)
}

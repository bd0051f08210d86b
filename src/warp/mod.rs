//! Geometric resampling used to align ridges before projection.
//!
//! - `spline`: cubic B-spline prefilter and 4×4 evaluation with border
//!   padding.
//! - `rotate`: same-size rotation about the image centre.

pub mod rotate;
pub mod spline;

pub use rotate::rotate_about_center;
pub use spline::{prefilter_line, SplineCoefficients, SPLINE_PAD};

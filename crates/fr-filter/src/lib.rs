//! Pixel filters over [`fr_core::FloatImage`].
//!
//! - Gradients: 3x3 normalized Sobel kernels applied as correlations;
//!   magnitude is the L1 combination `|gx| + |gy|`.
//! - Blur: separable sampled Gaussian, normalized to unit sum.
//! - Median: square odd-width windows, per channel.
//! - Integral: summed-area tables with a zero first row and column.
//!
//! Filters default to the replicate border ([`fr_core::BorderMode::Clamp`]).
//! The `_with_border` variants take any border mode.

pub mod blur;
pub mod conv;
pub mod ext;
pub mod gradient;
pub mod integral;
pub mod kernels;
pub mod median;

pub use blur::{gaussian_blur, separable_blur};
pub use conv::convolve_f32;
pub use ext::FilterExt;
pub use gradient::{
    correlate3x3, gradient_magnitude, gradient_magnitude_with_border, gradient_x,
    gradient_x_with_border, gradient_y, gradient_y_with_border,
};
pub use integral::{integral, integrate_into, region_sum};
pub use kernels::{GaussianKernel1D, SOBEL_X, SOBEL_Y};
pub use median::{median_filter, median_filter_with_border};

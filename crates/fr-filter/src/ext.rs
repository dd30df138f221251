use fr_core::{Error, FloatImage};

use crate::{blur, gradient, integral, median};

/// Filtering operations as methods on [`FloatImage`].
///
/// Gradients use the replicate border; see the free functions for other
/// border modes.
pub trait FilterExt {
    fn gradient_x(&self) -> FloatImage;

    fn gradient_y(&self) -> FloatImage;

    /// `|gx| + |gy|` per sample.
    fn gradient_magnitude(&self) -> FloatImage;

    fn gaussian_blur(&mut self, kernel_size: usize) -> Result<(), Error>;

    fn median_filter(&mut self, patch_width: usize) -> Result<(), Error>;

    fn integral(&self) -> Result<FloatImage, Error>;

    fn integrate_into(&self, out: &mut FloatImage) -> Result<(), Error>;
}

impl FilterExt for FloatImage {
    fn gradient_x(&self) -> FloatImage {
        gradient::gradient_x(self)
    }

    fn gradient_y(&self) -> FloatImage {
        gradient::gradient_y(self)
    }

    fn gradient_magnitude(&self) -> FloatImage {
        gradient::gradient_magnitude(self)
    }

    fn gaussian_blur(&mut self, kernel_size: usize) -> Result<(), Error> {
        blur::gaussian_blur(self, kernel_size)
    }

    fn median_filter(&mut self, patch_width: usize) -> Result<(), Error> {
        median::median_filter(self, patch_width)
    }

    fn integral(&self) -> Result<FloatImage, Error> {
        integral::integral(self)
    }

    fn integrate_into(&self, out: &mut FloatImage) -> Result<(), Error> {
        integral::integrate_into(self, out)
    }
}

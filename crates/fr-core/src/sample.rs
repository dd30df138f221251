//! Continuous-coordinate sampling.
//!
//! Integer coordinates refer to pixel centers. Bilinear interpolation uses the
//! floor-based 2x2 neighborhood of the sample point.

use crate::Error;
use crate::border::{BorderMode, map_index};
use crate::image::{FloatImage, Rgb};

impl FloatImage {
    /// Bilinear blend of channel `c` at `(x, y)`.
    ///
    /// The domain is `[0, width - 1] x [0, height - 1]`; points outside it are
    /// rejected rather than clamped. On the last column or row the missing
    /// neighbor carries zero weight, so integer coordinates return the stored
    /// sample exactly.
    pub fn bilinear(&self, x: f64, y: f64, c: usize) -> Result<f32, Error> {
        self.check_domain(x, y)?;
        if c >= self.channels() {
            return Err(Error::ChannelOutOfRange {
                channel: c,
                channels: self.channels(),
            });
        }
        Ok(self.blend_in_domain(x, y, c))
    }

    /// Bilinear blend of all three channels at `(x, y)`.
    pub fn bilinear_rgb(&self, x: f64, y: f64) -> Result<Rgb, Error> {
        self.require_channels(3)?;
        self.check_domain(x, y)?;
        Ok([
            self.blend_in_domain(x, y, 0),
            self.blend_in_domain(x, y, 1),
            self.blend_in_domain(x, y, 2),
        ])
    }

    /// Bilinear sample of channel `c` anywhere in the plane.
    ///
    /// Neighbors outside the image are resolved through `border`.
    pub fn sample_bilinear(
        &self,
        x: f64,
        y: f64,
        c: usize,
        border: BorderMode,
    ) -> Result<f32, Error> {
        if c >= self.channels() {
            return Err(Error::ChannelOutOfRange {
                channel: c,
                channels: self.channels(),
            });
        }
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::SampleOutOfDomain { x, y });
        }
        if self.is_empty() {
            if let BorderMode::Constant(v) = border {
                return Ok(v);
            }
            return Err(Error::SampleOutOfDomain { x, y });
        }

        let x = fold_coordinate(x, self.width(), border);
        let y = fold_coordinate(y, self.height(), border);
        let xf = x.floor();
        let yf = y.floor();
        let x0 = xf as isize;
        let y0 = yf as isize;
        let dx = (x - xf) as f32;
        let dy = (y - yf) as f32;

        let p00 = self.sample_at(x0, y0, c, border);
        let p10 = self.sample_at(x0 + 1, y0, c, border);
        let p01 = self.sample_at(x0, y0 + 1, c, border);
        let p11 = self.sample_at(x0 + 1, y0 + 1, c, border);

        let top = p00 * (1.0 - dx) + p10 * dx;
        let bottom = p01 * (1.0 - dx) + p11 * dx;
        Ok(top * (1.0 - dy) + bottom * dy)
    }

    fn check_domain(&self, x: f64, y: f64) -> Result<(), Error> {
        let inside = !self.is_empty()
            && (0.0..=(self.width() - 1) as f64).contains(&x)
            && (0.0..=(self.height() - 1) as f64).contains(&y);
        if inside {
            Ok(())
        } else {
            Err(Error::SampleOutOfDomain { x, y })
        }
    }

    fn blend_in_domain(&self, x: f64, y: f64, c: usize) -> f32 {
        let w = self.width();
        let ch = self.channels();
        let data = self.data();

        let x0 = x.floor() as usize;
        let y0 = y.floor() as usize;
        let x1 = (x0 + 1).min(w - 1);
        let y1 = (y0 + 1).min(self.height() - 1);
        let dx = (x - x0 as f64) as f32;
        let dy = (y - y0 as f64) as f32;

        let p00 = data[(y0 * w + x0) * ch + c];
        let p10 = data[(y0 * w + x1) * ch + c];
        let p01 = data[(y1 * w + x0) * ch + c];
        let p11 = data[(y1 * w + x1) * ch + c];

        let top = p00 * (1.0 - dx) + p10 * dx;
        let bottom = p01 * (1.0 - dx) + p11 * dx;
        top * (1.0 - dy) + bottom * dy
    }

    fn sample_at(&self, x: isize, y: isize, c: usize, border: BorderMode) -> f32 {
        let mapped = map_index(x, self.width(), border).zip(map_index(y, self.height(), border));
        match (mapped, border) {
            (Some((xi, yi)), _) => self.data()[(yi * self.width() + xi) * self.channels() + c],
            (None, BorderMode::Constant(v)) => v,
            // Clamp and reflect always map on a non-empty image.
            (None, _) => 0.0,
        }
    }
}

/// Moves `v` into a window whose integer taps cannot overflow, without
/// changing what `border` resolves the sample to.
///
/// Past one pixel outside the image, clamp and constant borders see only the
/// edge sample or the fill. Reflect-101 is periodic with period `2 * (len - 1)`.
fn fold_coordinate(v: f64, len: usize, border: BorderMode) -> f64 {
    let n = len as f64;
    match border {
        BorderMode::Reflect101 if len > 1 => v.rem_euclid(2.0 * (n - 1.0)),
        _ => v.clamp(-1.0, n),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::{BorderMode, Error, FloatImage};

    fn grid_2x2() -> FloatImage {
        FloatImage::from_vec(2, 2, 1, vec![0.0, 10.0, 20.0, 30.0]).expect("valid image")
    }

    #[test]
    fn integer_coordinates_return_stored_values() {
        let data: Vec<f32> = (0..12).map(|i| (i * i) as f32).collect();
        let img = FloatImage::from_vec(4, 3, 1, data).expect("valid image");
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(
                    img.bilinear(x as f64, y as f64, 0),
                    img.get_xy(x, y, 0),
                    "mismatch at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn center_of_cell_is_the_mean() {
        let img = grid_2x2();
        let v = img.bilinear(0.5, 0.5, 0).expect("in domain");
        assert_abs_diff_eq!(v, 15.0, epsilon = 1e-6);

        let edge = img.bilinear(1.0, 0.25, 0).expect("in domain");
        assert_abs_diff_eq!(edge, 15.0, epsilon = 1e-6);
    }

    #[test]
    fn rgb_blend_uses_each_channel() {
        let img = FloatImage::from_vec(
            2,
            1,
            3,
            vec![
                0.0, 1.0, 2.0, //
                10.0, 11.0, 12.0, //
            ],
        )
        .expect("valid image");
        let rgb = img.bilinear_rgb(0.25, 0.0).expect("in domain");
        assert_abs_diff_eq!(rgb[0], 2.5, epsilon = 1e-6);
        assert_abs_diff_eq!(rgb[1], 3.5, epsilon = 1e-6);
        assert_abs_diff_eq!(rgb[2], 4.5, epsilon = 1e-6);

        assert!(grid_2x2().bilinear_rgb(0.0, 0.0).is_err());
    }

    #[test]
    fn points_outside_domain_are_rejected() {
        let img = grid_2x2();
        assert_eq!(
            img.bilinear(-0.25, 0.0, 0),
            Err(Error::SampleOutOfDomain { x: -0.25, y: 0.0 })
        );
        assert!(img.bilinear(0.0, 1.01, 0).is_err());
        assert!(img.bilinear(f64::NAN, 0.0, 0).is_err());
        assert!(img.bilinear(0.0, 0.0, 1).is_err());
        assert!(FloatImage::default().bilinear(0.0, 0.0, 0).is_err());
    }

    #[test]
    fn border_aware_sampling_outside_the_image() {
        let img = grid_2x2();

        let clamp = img
            .sample_bilinear(-0.25, -0.25, 0, BorderMode::Clamp)
            .expect("clamp samples anywhere");
        assert_abs_diff_eq!(clamp, 0.0, epsilon = 1e-6);

        // p00, p10, p01 come from the constant, p11 from the image.
        let constant = img
            .sample_bilinear(-0.25, -0.25, 0, BorderMode::Constant(100.0))
            .expect("constant samples anywhere");
        assert_abs_diff_eq!(constant, 43.75, epsilon = 1e-5);

        let inside = img
            .sample_bilinear(0.5, 0.5, 0, BorderMode::Reflect101)
            .expect("inside");
        assert_abs_diff_eq!(inside, 15.0, epsilon = 1e-6);
    }

    #[test]
    fn far_coordinates_resolve_through_the_border() {
        let flat = FloatImage::new_fill(2, 2, 1, 3.0).expect("valid image");
        assert_eq!(flat.sample_bilinear(1e20, 0.0, 0, BorderMode::Clamp), Ok(3.0));
        assert_eq!(flat.sample_bilinear(0.0, -1e20, 0, BorderMode::Clamp), Ok(3.0));
        assert_eq!(
            flat.sample_bilinear(-1e30, 0.5, 0, BorderMode::Constant(-2.0)),
            Ok(-2.0)
        );

        let ramp = FloatImage::from_vec(3, 1, 1, vec![0.0, 1.0, 2.0]).expect("valid image");
        for x in [4.5, -3.5, 4.0e12 + 0.5] {
            let v = ramp
                .sample_bilinear(x, 0.0, 0, BorderMode::Reflect101)
                .expect("reflect samples anywhere");
            assert_abs_diff_eq!(v, 0.5, epsilon = 1e-6);
        }
    }
}

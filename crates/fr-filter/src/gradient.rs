//! First-derivative images from fixed 3x3 kernels.
//!
//! Kernels are applied as correlations, so a ramp increasing to the right
//! (or downward) has a positive x (or y) derivative. With the normalized
//! Sobel weights a ramp `I = x` yields `gradient_x == 1` everywhere away from
//! the border. Default boundary handling replicates edge pixels.

use fr_core::{BorderMode, FloatImage, map_index};

use crate::kernels::{SOBEL_X, SOBEL_Y};

/// Correlates every channel with a 3x3 kernel.
///
/// Output has the same shape as `src`.
pub fn correlate3x3(src: &FloatImage, kernel: &[[f32; 3]; 3], border: BorderMode) -> FloatImage {
    let mut out = src.clone();
    if src.is_empty() {
        return out;
    }

    let w = src.width();
    let h = src.height();
    let ch = src.channels();
    let fill = match border {
        BorderMode::Constant(c) => c,
        _ => 0.0,
    };

    let cols = neighbor_table(w, border);
    let rows = neighbor_table(h, border);
    let s = src.data();
    let d = out.data_mut();

    for (y, ry) in rows.iter().enumerate() {
        for (x, cx) in cols.iter().enumerate() {
            for c in 0..ch {
                let mut acc = 0.0f32;
                for (krow, yi) in kernel.iter().zip(ry) {
                    for (&kv, xi) in krow.iter().zip(cx) {
                        if kv == 0.0 {
                            continue;
                        }
                        let v = match (yi, xi) {
                            (Some(yi), Some(xi)) => s[(yi * w + xi) * ch + c],
                            _ => fill,
                        };
                        acc += kv * v;
                    }
                }
                d[(y * w + x) * ch + c] = acc;
            }
        }
    }

    out
}

pub fn gradient_x(src: &FloatImage) -> FloatImage {
    gradient_x_with_border(src, BorderMode::Clamp)
}

pub fn gradient_y(src: &FloatImage) -> FloatImage {
    gradient_y_with_border(src, BorderMode::Clamp)
}

/// Per-sample `|gx| + |gy|`.
pub fn gradient_magnitude(src: &FloatImage) -> FloatImage {
    gradient_magnitude_with_border(src, BorderMode::Clamp)
}

pub fn gradient_x_with_border(src: &FloatImage, border: BorderMode) -> FloatImage {
    correlate3x3(src, &SOBEL_X, border)
}

pub fn gradient_y_with_border(src: &FloatImage, border: BorderMode) -> FloatImage {
    correlate3x3(src, &SOBEL_Y, border)
}

pub fn gradient_magnitude_with_border(src: &FloatImage, border: BorderMode) -> FloatImage {
    let mut mag = correlate3x3(src, &SOBEL_X, border);
    let gy = correlate3x3(src, &SOBEL_Y, border);
    for (m, &g) in mag.data_mut().iter_mut().zip(gy.data()) {
        *m = m.abs() + g.abs();
    }
    mag
}

/// For each position along an axis, the mapped indices of its `-1, 0, +1`
/// neighbors. `None` marks a constant-border sample.
fn neighbor_table(len: usize, border: BorderMode) -> Vec<[Option<usize>; 3]> {
    (0..len as isize)
        .map(|i| {
            [
                map_index(i - 1, len, border),
                map_index(i, len, border),
                map_index(i + 1, len, border),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use fr_core::{BorderMode, FloatImage};

    use super::{gradient_magnitude, gradient_x, gradient_x_with_border, gradient_y};

    fn ramp(width: usize, height: usize, fx: f32, fy: f32) -> FloatImage {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(fx * x as f32 + fy * y as f32);
            }
        }
        FloatImage::from_vec(width, height, 1, data).expect("valid image")
    }

    #[test]
    fn x_ramp_has_unit_x_derivative_inside() {
        let img = ramp(6, 5, 1.0, 0.0);
        let gx = gradient_x(&img);
        let gy = gradient_y(&img);
        assert_eq!((gx.width(), gx.height(), gx.channels()), (6, 5, 1));

        for y in 0..5 {
            for x in 1..5 {
                assert_abs_diff_eq!(gx.get_xy(x, y, 0).expect("in bounds"), 1.0, epsilon = 1e-6);
            }
            assert_abs_diff_eq!(gy.get_xy(2, y, 0).expect("in bounds"), 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn replicated_border_halves_the_edge_derivative() {
        let img = ramp(4, 3, 1.0, 0.0);
        let gx = gradient_x(&img);
        // At x = 0 the left neighbor replicates x = 0: (1 - 0) / 2.
        assert_abs_diff_eq!(gx.get_xy(0, 1, 0).expect("in bounds"), 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(gx.get_xy(3, 1, 0).expect("in bounds"), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn zero_border_sees_a_step_at_the_edge() {
        let img = FloatImage::new_fill(3, 3, 1, 2.0).expect("valid image");
        let gx = gradient_x_with_border(&img, BorderMode::Constant(0.0));
        assert_abs_diff_eq!(gx.get_xy(1, 1, 0).expect("in bounds"), 0.0, epsilon = 1e-6);
        // Left column sees zeros to its left: 0.5 * (2 - 0).
        assert_abs_diff_eq!(gx.get_xy(0, 1, 0).expect("in bounds"), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(gx.get_xy(2, 1, 0).expect("in bounds"), -1.0, epsilon = 1e-6);
    }

    #[test]
    fn reflected_border_flattens_the_edge_derivative() {
        let img = ramp(4, 3, 1.0, 0.0);
        let gx = gradient_x_with_border(&img, BorderMode::Reflect101);
        // Both horizontal neighbors of x = 0 read x = 1.
        assert_abs_diff_eq!(gx.get_xy(0, 1, 0).expect("in bounds"), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(gx.get_xy(3, 1, 0).expect("in bounds"), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(gx.get_xy(1, 1, 0).expect("in bounds"), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn y_ramp_and_magnitude_is_l1() {
        let img = ramp(5, 5, 2.0, -3.0);
        let gx = gradient_x(&img);
        let gy = gradient_y(&img);
        let mag = gradient_magnitude(&img);

        assert_abs_diff_eq!(gx.get_xy(2, 2, 0).expect("in bounds"), 2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(gy.get_xy(2, 2, 0).expect("in bounds"), -3.0, epsilon = 1e-5);
        assert_abs_diff_eq!(mag.get_xy(2, 2, 0).expect("in bounds"), 5.0, epsilon = 1e-5);

        for ((m, x), y) in mag.data().iter().zip(gx.data()).zip(gy.data()) {
            assert_abs_diff_eq!(*m, x.abs() + y.abs(), epsilon = 1e-6);
        }
    }

    #[test]
    fn channels_are_differentiated_independently() {
        let mut data = Vec::new();
        for _y in 0..3 {
            for x in 0..4 {
                data.extend_from_slice(&[x as f32, 0.0, -(x as f32)]);
            }
        }
        let img = FloatImage::from_vec(4, 3, 3, data).expect("valid image");
        let gx = gradient_x(&img);
        let px = gx.pixel(1, 1).expect("in bounds");
        assert_abs_diff_eq!(px[0], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(px[1], 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(px[2], -1.0, epsilon = 1e-6);
    }

    #[test]
    fn empty_image_yields_empty_gradient() {
        let img = FloatImage::default();
        assert!(gradient_magnitude(&img).is_empty());
    }
}

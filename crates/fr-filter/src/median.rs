//! Rank-order (median) filtering.
//!
//! Windows are square and centered, so `patch_width` must be odd. Samples
//! outside the image come from the border mode; with the default replicate
//! border every window holds exactly `patch_width^2` samples.

use fr_core::{BorderMode, Error, FloatImage, map_index};

/// Per-channel median over a `patch_width x patch_width` window, in place.
pub fn median_filter(img: &mut FloatImage, patch_width: usize) -> Result<(), Error> {
    median_filter_with_border(img, patch_width, BorderMode::Clamp)
}

pub fn median_filter_with_border(
    img: &mut FloatImage,
    patch_width: usize,
    border: BorderMode,
) -> Result<(), Error> {
    if patch_width == 0 || patch_width.is_multiple_of(2) {
        return Err(Error::InvalidKernelSize(patch_width));
    }
    if img.is_empty() || patch_width == 1 {
        return Ok(());
    }

    let w = img.width();
    let h = img.height();
    let ch = img.channels();
    let radius = (patch_width / 2) as isize;
    let fill = match border {
        BorderMode::Constant(c) => c,
        _ => 0.0,
    };

    let src = img.data().to_vec();
    let dst = img.data_mut();
    let mut window = Vec::with_capacity(patch_width * patch_width);
    let mid = patch_width * patch_width / 2;

    for y in 0..h {
        for x in 0..w {
            for c in 0..ch {
                window.clear();
                for dy in -radius..=radius {
                    let ny = map_index(y as isize + dy, h, border);
                    for dx in -radius..=radius {
                        let nx = map_index(x as isize + dx, w, border);
                        let v = match (nx, ny) {
                            (Some(nx), Some(ny)) => src[(ny * w + nx) * ch + c],
                            _ => fill,
                        };
                        window.push(v);
                    }
                }

                let (_, median, _) = window.select_nth_unstable_by(mid, f32::total_cmp);
                dst[(y * w + x) * ch + c] = *median;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use fr_core::{BorderMode, Error, FloatImage};

    use super::{median_filter, median_filter_with_border};

    #[test]
    fn reflected_border_does_not_repeat_the_edge_sample() {
        let row = vec![9.0, 0.0, 0.0, 0.0];

        let mut reflected = FloatImage::from_vec(4, 1, 1, row.clone()).expect("valid image");
        median_filter_with_border(&mut reflected, 3, BorderMode::Reflect101)
            .expect("odd width");
        assert_eq!(reflected.get_xy(0, 0, 0), Ok(0.0));

        let mut clamped = FloatImage::from_vec(4, 1, 1, row).expect("valid image");
        median_filter_with_border(&mut clamped, 3, BorderMode::Clamp)
            .expect("odd width");
        assert_eq!(clamped.get_xy(0, 0, 0), Ok(9.0));
    }

    #[test]
    fn removes_single_pixel_speck() {
        let mut img = FloatImage::new(5, 5, 1).expect("valid image");
        img.set_xy(2, 2, 0, 100.0).expect("in bounds");
        median_filter(&mut img, 3).expect("odd width");
        assert!(img.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn preserves_a_straight_step_edge() {
        let mut data = Vec::new();
        for _y in 0..4 {
            data.extend_from_slice(&[0.0f32, 0.0, 1.0, 1.0]);
        }
        let mut img = FloatImage::from_vec(4, 4, 1, data).expect("valid image");
        let before = img.clone();
        median_filter(&mut img, 3).expect("odd width");
        assert_eq!(img, before);
    }

    #[test]
    fn replicated_border_uses_edge_values() {
        // Corner window of a 3x1 row [1, 5, 9] is [1, 1, 5] per row.
        let mut img = FloatImage::from_vec(3, 1, 1, vec![1.0, 5.0, 9.0]).expect("valid image");
        median_filter(&mut img, 3).expect("odd width");
        assert_eq!(img.data(), &[1.0, 5.0, 9.0]);
    }

    #[test]
    fn constant_border_counts_fill_samples() {
        let mut img = FloatImage::new_fill(3, 3, 1, 4.0).expect("valid image");
        median_filter_with_border(&mut img, 3, BorderMode::Constant(0.0)).expect("odd width");
        // Corners see 5 fill samples out of 9, edges 3, the center none.
        assert_eq!(img.get_xy(0, 0, 0), Ok(0.0));
        assert_eq!(img.get_xy(1, 0, 0), Ok(4.0));
        assert_eq!(img.get_xy(1, 1, 0), Ok(4.0));
    }

    #[test]
    fn channels_are_filtered_independently() {
        let mut img = FloatImage::new(3, 3, 2).expect("valid image");
        for y in 0..3 {
            for x in 0..3 {
                img.set_xy(x, y, 1, 7.0).expect("in bounds");
            }
        }
        img.set_xy(1, 1, 0, -50.0).expect("in bounds");
        median_filter(&mut img, 3).expect("odd width");
        assert_eq!(img.pixel(1, 1).expect("in bounds"), &[0.0, 7.0]);
    }

    #[test]
    fn even_or_zero_width_is_rejected() {
        let mut img = FloatImage::new(3, 3, 1).expect("valid image");
        assert_eq!(median_filter(&mut img, 0), Err(Error::InvalidKernelSize(0)));
        assert_eq!(median_filter(&mut img, 4), Err(Error::InvalidKernelSize(4)));
    }
}

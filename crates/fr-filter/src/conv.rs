use fr_core::{BorderMode, map_index};

/// 1D convolution `out[i] = sum_k signal[i + radius - k] * kernel[k]`.
///
/// Neighbors outside `signal` are resolved through `border`; `Constant`
/// borders contribute their fill value.
///
/// # Panics
/// If `out` and `signal` differ in length or `kernel.len() != 2 * radius + 1`.
pub fn convolve_f32(
    signal: &[f32],
    kernel: &[f32],
    radius: usize,
    border: BorderMode,
    out: &mut [f32],
) {
    assert_eq!(out.len(), signal.len(), "output length differs from signal");
    assert_eq!(kernel.len(), 2 * radius + 1, "kernel must have 2*radius+1 taps");

    if signal.is_empty() {
        return;
    }

    let padded = pad_line(signal, radius, border);
    for (dst, window) in out.iter_mut().zip(padded.windows(kernel.len())) {
        *dst = window
            .iter()
            .zip(kernel.iter().rev())
            .map(|(&s, &k)| s * k)
            .sum();
    }
}

/// Copy of `signal` extended by `radius` border samples on both ends.
fn pad_line(signal: &[f32], radius: usize, border: BorderMode) -> Vec<f32> {
    let fill = match border {
        BorderMode::Constant(v) => v,
        _ => 0.0,
    };
    let (n, r) = (signal.len() as isize, radius as isize);
    (-r..n + r)
        .map(|j| map_index(j, signal.len(), border).map_or(fill, |i| signal[i]))
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use fr_core::BorderMode;

    use super::{convolve_f32, pad_line};

    #[test]
    fn single_tap_kernel_scales() {
        let signal = [1.0f32, -2.0, 5.0];
        let mut out = [0.0f32; 3];
        convolve_f32(&signal, &[2.0], 0, BorderMode::Reflect101, &mut out);
        assert_eq!(out, [2.0, -4.0, 10.0]);
    }

    #[test]
    fn impulse_response_is_the_kernel() {
        let signal = [0.0f32, 0.0, 1.0, 0.0, 0.0];
        let mut out = [0.0f32; 5];
        convolve_f32(&signal, &[1.0, 2.0, 3.0], 1, BorderMode::Clamp, &mut out);
        assert_eq!(out, [0.0, 1.0, 2.0, 3.0, 0.0]);
    }

    #[test]
    fn padding_follows_the_border_mode() {
        let signal = [1.0f32, 2.0, 3.0];
        assert_eq!(
            pad_line(&signal, 2, BorderMode::Clamp),
            [1.0, 1.0, 1.0, 2.0, 3.0, 3.0, 3.0]
        );
        assert_eq!(
            pad_line(&signal, 2, BorderMode::Reflect101),
            [3.0, 2.0, 1.0, 2.0, 3.0, 2.0, 1.0]
        );
        assert_eq!(
            pad_line(&signal, 1, BorderMode::Constant(-1.0)),
            [-1.0, 1.0, 2.0, 3.0, -1.0]
        );
    }

    #[test]
    fn box_sums_at_the_edges() {
        let signal = [2.0f32, 4.0, 6.0];
        let ones = [1.0f32; 3];
        let mut out = [0.0f32; 3];

        convolve_f32(&signal, &ones, 1, BorderMode::Constant(0.0), &mut out);
        assert_eq!(out, [6.0, 12.0, 10.0]);

        convolve_f32(&signal, &ones, 1, BorderMode::Clamp, &mut out);
        assert_eq!(out, [8.0, 12.0, 16.0]);
    }

    #[test]
    fn kernel_wider_than_signal_still_averages() {
        let signal = [4.0f32, 0.0];
        let mut out = [0.0f32; 2];
        convolve_f32(&signal, &[0.2; 5], 2, BorderMode::Clamp, &mut out);
        assert_abs_diff_eq!(out[0], 2.4, epsilon = 1e-6);
        assert_abs_diff_eq!(out[1], 1.6, epsilon = 1e-6);
    }
}

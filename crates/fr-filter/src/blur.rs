use fr_core::{BorderMode, Error, FloatImage};

use crate::conv::convolve_f32;
use crate::kernels::GaussianKernel1D;

/// Approximate Gaussian blur over a `kernel_size`-wide footprint, in place.
///
/// See [`GaussianKernel1D::from_size`] for how the size maps to sigma and
/// radius. Edges are replicated.
pub fn gaussian_blur(img: &mut FloatImage, kernel_size: usize) -> Result<(), Error> {
    let kernel =
        GaussianKernel1D::from_size(kernel_size).ok_or(Error::InvalidKernelSize(kernel_size))?;
    separable_blur(img, &kernel, BorderMode::Clamp);
    Ok(())
}

/// Convolves every channel with `kernel` along rows, then along columns.
pub fn separable_blur(img: &mut FloatImage, kernel: &GaussianKernel1D, border: BorderMode) {
    if img.is_empty() || kernel.radius == 0 {
        return;
    }

    let w = img.width();
    let h = img.height();
    let ch = img.channels();
    let data = img.data_mut();

    let mut line = vec![0.0f32; w.max(h)];
    let mut filtered = vec![0.0f32; w.max(h)];

    for c in 0..ch {
        for y in 0..h {
            let row = &mut data[y * w * ch..(y + 1) * w * ch];
            for (dst, px) in line[..w].iter_mut().zip(row.chunks_exact(ch)) {
                *dst = px[c];
            }
            convolve_f32(
                &line[..w],
                &kernel.weights,
                kernel.radius,
                border,
                &mut filtered[..w],
            );
            for (px, &v) in row.chunks_exact_mut(ch).zip(&filtered[..w]) {
                px[c] = v;
            }
        }

        for x in 0..w {
            for (y, dst) in line[..h].iter_mut().enumerate() {
                *dst = data[(y * w + x) * ch + c];
            }
            convolve_f32(
                &line[..h],
                &kernel.weights,
                kernel.radius,
                border,
                &mut filtered[..h],
            );
            for (y, &v) in filtered[..h].iter().enumerate() {
                data[(y * w + x) * ch + c] = v;
            }
        }
    }
}

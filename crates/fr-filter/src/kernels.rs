/// Normalized sampled 1D Gaussian.
///
/// Conventions:
/// - `weights.len() == 2 * radius + 1`, centered on index `radius`.
/// - `weights` sums to 1 up to rounding, so constant signals pass unchanged.
/// - A zero radius yields the identity kernel `[1.0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel1D {
    pub sigma: f32,
    pub radius: usize,
    pub weights: Vec<f32>,
}

impl GaussianKernel1D {
    /// Kernel spanning roughly `kernel_size` pixels.
    ///
    /// `radius = kernel_size / 2` and `sigma = kernel_size / 4`, so the
    /// footprint covers two standard deviations on each side. Even sizes are
    /// rounded up to the next odd footprint. Returns `None` for a zero size.
    pub fn from_size(kernel_size: usize) -> Option<Self> {
        if kernel_size == 0 {
            return None;
        }
        let radius = kernel_size / 2;
        let sigma = kernel_size as f32 / 4.0;
        Some(Self::build(sigma, radius))
    }

    /// Kernel with `radius = ceil(3 * sigma)`, minimum 1.
    pub fn from_sigma(sigma: f32) -> Self {
        assert!(
            sigma.is_finite() && sigma > 0.0,
            "sigma must be > 0 and finite"
        );
        let radius = ((3.0 * sigma).ceil() as usize).max(1);
        Self::build(sigma, radius)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    fn build(sigma: f32, radius: usize) -> Self {
        let len = 2 * radius + 1;
        let sigma2 = sigma * sigma;

        let mut weights = vec![0.0f32; len];
        for (i, wi) in weights.iter_mut().enumerate() {
            let x = i as isize - radius as isize;
            let xf = x as f32;
            *wi = (-(xf * xf) / (2.0 * sigma2)).exp();
        }

        let sum: f32 = weights.iter().sum();
        for wi in &mut weights {
            *wi /= sum;
        }

        Self {
            sigma,
            radius,
            weights,
        }
    }
}

/// 3x3 x-derivative kernel, row-major, applied as a correlation.
pub const SOBEL_X: [[f32; 3]; 3] = [
    [-0.125, 0.0, 0.125],
    [-0.25, 0.0, 0.25],
    [-0.125, 0.0, 0.125],
];

/// 3x3 y-derivative kernel, row-major, applied as a correlation.
pub const SOBEL_Y: [[f32; 3]; 3] = [
    [-0.125, -0.25, -0.125],
    [0.0, 0.0, 0.0],
    [0.125, 0.25, 0.125],
];

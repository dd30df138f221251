use crate::Error;

/// Three-channel sample vector used by the RGB accessors.
pub type Rgb = [f32; 3];

/// Owned f32 raster with interleaved channels.
///
/// Samples are stored row-major with channels interleaved, so the sample for
/// channel `c` of pixel `(x, y)` lives at `(y * width + x) * channels + c`.
/// `(x, y)` is Cartesian (column, row); the `row_col` accessors take the same
/// pixel as `(row, col)`.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatImage {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<f32>,
}

impl Default for FloatImage {
    /// An empty `0x0` single-channel image.
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            channels: 1,
            data: Vec::new(),
        }
    }
}

impl FloatImage {
    /// Zero-filled image of the given shape.
    pub fn new(width: usize, height: usize, channels: usize) -> Result<Self, Error> {
        Self::new_fill(width, height, channels, 0.0)
    }

    pub fn new_fill(
        width: usize,
        height: usize,
        channels: usize,
        value: f32,
    ) -> Result<Self, Error> {
        let len = sample_count(width, height, channels, 0)?;
        Ok(Self {
            width,
            height,
            channels,
            data: vec![value; len],
        })
    }

    /// Wraps an existing interleaved sample buffer.
    pub fn from_vec(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<f32>,
    ) -> Result<Self, Error> {
        let expected = sample_count(width, height, channels, data.len())?;
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn rows(&self) -> usize {
        self.height
    }

    pub fn cols(&self) -> usize {
        self.width
    }

    /// Total number of samples across all channels.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the image holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Flat index of channel `c` at pixel `(x, y)`.
    ///
    /// Every accessor goes through this function, which keeps the XY and
    /// row/col forms addressing the same sample.
    pub fn index(&self, x: usize, y: usize, c: usize) -> Result<usize, Error> {
        self.check_pixel(x, y)?;
        if c >= self.channels {
            return Err(Error::ChannelOutOfRange {
                channel: c,
                channels: self.channels,
            });
        }
        Ok((y * self.width + x) * self.channels + c)
    }

    pub fn get_xy(&self, x: usize, y: usize, c: usize) -> Result<f32, Error> {
        let idx = self.index(x, y, c)?;
        Ok(self.data[idx])
    }

    pub fn set_xy(&mut self, x: usize, y: usize, c: usize, value: f32) -> Result<(), Error> {
        let idx = self.index(x, y, c)?;
        self.data[idx] = value;
        Ok(())
    }

    pub fn get_xy_rgb(&self, x: usize, y: usize) -> Result<Rgb, Error> {
        self.require_channels(3)?;
        let px = self.pixel(x, y)?;
        Ok([px[0], px[1], px[2]])
    }

    pub fn set_xy_rgb(&mut self, x: usize, y: usize, rgb: Rgb) -> Result<(), Error> {
        self.require_channels(3)?;
        self.pixel_mut(x, y)?.copy_from_slice(&rgb);
        Ok(())
    }

    pub fn get_row_col(&self, row: usize, col: usize, c: usize) -> Result<f32, Error> {
        self.get_xy(col, row, c)
    }

    pub fn set_row_col(
        &mut self,
        row: usize,
        col: usize,
        c: usize,
        value: f32,
    ) -> Result<(), Error> {
        self.set_xy(col, row, c, value)
    }

    pub fn get_row_col_rgb(&self, row: usize, col: usize) -> Result<Rgb, Error> {
        self.get_xy_rgb(col, row)
    }

    pub fn set_row_col_rgb(&mut self, row: usize, col: usize, rgb: Rgb) -> Result<(), Error> {
        self.set_xy_rgb(col, row, rgb)
    }

    /// All channels of pixel `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> Result<&[f32], Error> {
        let start = self.index(x, y, 0)?;
        Ok(&self.data[start..start + self.channels])
    }

    pub fn pixel_mut(&mut self, x: usize, y: usize) -> Result<&mut [f32], Error> {
        let start = self.index(x, y, 0)?;
        let end = start + self.channels;
        Ok(&mut self.data[start..end])
    }

    /// Interleaved samples of row `y`.
    pub fn row(&self, y: usize) -> Result<&[f32], Error> {
        if y >= self.height {
            return Err(Error::OutOfBounds {
                x: 0,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let stride = self.row_stride();
        Ok(&self.data[y * stride..(y + 1) * stride])
    }

    /// Number of samples between the starts of adjacent rows.
    pub fn row_stride(&self) -> usize {
        self.width * self.channels
    }

    /// Multiplies every sample by `factor`.
    pub fn scale_pixels(&mut self, factor: f32) {
        for v in &mut self.data {
            *v *= factor;
        }
    }

    /// Swaps in a freshly allocated buffer of a new shape.
    pub(crate) fn replace_buffer(
        &mut self,
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<f32>,
    ) {
        debug_assert!(channels > 0);
        debug_assert_eq!(data.len(), width * height * channels);
        self.width = width;
        self.height = height;
        self.channels = channels;
        self.data = data;
    }

    pub(crate) fn require_channels(&self, expected: usize) -> Result<(), Error> {
        if self.channels != expected {
            return Err(Error::ChannelMismatch {
                expected,
                actual: self.channels,
            });
        }
        Ok(())
    }

    fn check_pixel(&self, x: usize, y: usize) -> Result<(), Error> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

fn sample_count(
    width: usize,
    height: usize,
    channels: usize,
    actual: usize,
) -> Result<usize, Error> {
    if channels == 0 {
        return Err(Error::ZeroChannels);
    }
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual,
        })
}

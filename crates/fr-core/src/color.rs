//! Channel-count conversion between grayscale and RGB.

use crate::Error;
use crate::image::FloatImage;

/// Rec. 709 luma weights for linear R, G, B.
pub const LUMA_REC709: [f32; 3] = [0.2126, 0.7152, 0.0722];

impl FloatImage {
    /// Reduces the image to one luma channel in place.
    ///
    /// Channels beyond the third are ignored. Two-channel images have no RGB
    /// interpretation and are rejected.
    pub fn convert_to_grayscale(&mut self) -> Result<(), Error> {
        match self.channels() {
            1 => return Ok(()),
            2 => return Err(Error::UnsupportedChannels { channels: 2 }),
            _ => {}
        }

        let [wr, wg, wb] = LUMA_REC709;
        let gray: Vec<f32> = self
            .data()
            .chunks_exact(self.channels())
            .map(|px| wr * px[0] + wg * px[1] + wb * px[2])
            .collect();

        let (w, h) = (self.width(), self.height());
        self.replace_buffer(w, h, 1, gray);
        Ok(())
    }

    /// Expands or reduces the image to three channels in place.
    ///
    /// A single channel is replicated into R, G and B; extra channels beyond
    /// the third are dropped.
    pub fn convert_to_rgb(&mut self) -> Result<(), Error> {
        let rgb: Vec<f32> = match self.channels() {
            3 => return Ok(()),
            1 => self.data().iter().flat_map(|&v| [v, v, v]).collect(),
            2 => return Err(Error::UnsupportedChannels { channels: 2 }),
            n => self
                .data()
                .chunks_exact(n)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect(),
        };

        let (w, h) = (self.width(), self.height());
        self.replace_buffer(w, h, 3, rgb);
        Ok(())
    }

    pub fn as_grayscale(&self) -> Result<FloatImage, Error> {
        let mut out = self.clone();
        out.convert_to_grayscale()?;
        Ok(out)
    }

    pub fn as_rgb(&self) -> Result<FloatImage, Error> {
        let mut out = self.clone();
        out.convert_to_rgb()?;
        Ok(out)
    }
}

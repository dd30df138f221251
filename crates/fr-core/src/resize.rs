//! Geometric resampling.
//!
//! Resize is bilinear with pixel-center alignment: destination pixel `d` maps
//! to source coordinate `(d + 0.5) * src_len / dst_len - 0.5`, clamped into
//! the source. Every resize allocates a new buffer.

use log::trace;

use crate::Error;
use crate::image::FloatImage;

#[derive(Debug, Clone, Copy)]
struct AxisTap {
    i0: usize,
    i1: usize,
    frac: f32,
}

impl FloatImage {
    /// Resamples to `new_width x new_height` with `channels` channels.
    ///
    /// An uninitialized `0x0` image is simply reallocated (zero-filled) at the
    /// requested shape. Otherwise `channels` must be at least the current
    /// count; channels gained by the resize are zero-filled. On error the
    /// image is left untouched.
    pub fn resize_with_channels(
        &mut self,
        new_width: usize,
        new_height: usize,
        channels: usize,
    ) -> Result<(), Error> {
        if self.width() == 0 && self.height() == 0 {
            *self = FloatImage::new(new_width, new_height, channels)?;
            return Ok(());
        }
        if channels < self.channels() {
            return Err(Error::ChannelReduction {
                from: self.channels(),
                to: channels,
            });
        }

        let mut out = FloatImage::new(new_width, new_height, channels)?;
        trace!(
            "resize {}x{}x{} -> {}x{}x{}",
            self.width(),
            self.height(),
            self.channels(),
            new_width,
            new_height,
            channels
        );
        // A degenerate source (`w x 0` or `0 x h`) has nothing to sample.
        if !self.is_empty() && !out.is_empty() {
            resample_bilinear(self, &mut out);
        }
        *self = out;
        Ok(())
    }

    /// Resamples to `new_width x new_height`, keeping the channel count.
    pub fn resize(&mut self, new_width: usize, new_height: usize) -> Result<(), Error> {
        self.resize_with_channels(new_width, new_height, self.channels())
    }

    /// Row/column ordered form of [`FloatImage::resize`].
    pub fn resize_rows_cols(&mut self, new_rows: usize, new_cols: usize) -> Result<(), Error> {
        self.resize(new_cols, new_rows)
    }

    /// Scales both dimensions by `scale`, truncating toward zero.
    pub fn resize_by(&mut self, scale: f64) -> Result<(), Error> {
        if !scale.is_finite() || scale < 0.0 {
            return Err(Error::InvalidScale(scale));
        }
        let new_width = (scale * self.width() as f64) as usize;
        let new_height = (scale * self.height() as f64) as usize;
        self.resize(new_width, new_height)
    }
}

fn axis_taps(src_len: usize, dst_len: usize) -> Vec<AxisTap> {
    let scale = src_len as f64 / dst_len as f64;
    let max = (src_len - 1) as f64;
    (0..dst_len)
        .map(|d| {
            let s = ((d as f64 + 0.5) * scale - 0.5).clamp(0.0, max);
            let i0 = s.floor() as usize;
            AxisTap {
                i0,
                i1: (i0 + 1).min(src_len - 1),
                frac: (s - i0 as f64) as f32,
            }
        })
        .collect()
}

fn resample_bilinear(src: &FloatImage, dst: &mut FloatImage) {
    debug_assert!(!src.is_empty());
    debug_assert!(dst.channels() >= src.channels());

    let x_taps = axis_taps(src.width(), dst.width());
    let y_taps = axis_taps(src.height(), dst.height());

    let src_w = src.width();
    let src_ch = src.channels();
    let dst_ch = dst.channels();
    let dst_stride = dst.row_stride();
    let s = src.data();
    let d = dst.data_mut();

    for (dy, ty) in y_taps.iter().enumerate() {
        let row0 = ty.i0 * src_w;
        let row1 = ty.i1 * src_w;
        let dst_row = &mut d[dy * dst_stride..(dy + 1) * dst_stride];
        for (out_px, tx) in dst_row.chunks_exact_mut(dst_ch).zip(&x_taps) {
            let p00 = (row0 + tx.i0) * src_ch;
            let p10 = (row0 + tx.i1) * src_ch;
            let p01 = (row1 + tx.i0) * src_ch;
            let p11 = (row1 + tx.i1) * src_ch;
            for (c, out) in out_px.iter_mut().take(src_ch).enumerate() {
                let top = s[p00 + c] * (1.0 - tx.frac) + s[p10 + c] * tx.frac;
                let bottom = s[p01 + c] * (1.0 - tx.frac) + s[p11 + c] * tx.frac;
                *out = top * (1.0 - ty.frac) + bottom * ty.frac;
            }
        }
    }
}

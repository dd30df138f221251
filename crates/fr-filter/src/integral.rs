//! Summed-area tables.
//!
//! The table of a `width x height` image is `(width + 1) x (height + 1)`
//! with a zero first row and column; entry `(x, y)` holds the sum of all
//! source pixels in `[0, x) x [0, y)` for each channel.

use fr_core::{Error, FloatImage};

/// Builds the summed-area table of every channel.
///
/// Each row is accumulated left to right into a running sum that is added to
/// the entry above, which bounds round-off compared to summing whole
/// rectangles per cell.
pub fn integral(src: &FloatImage) -> Result<FloatImage, Error> {
    let w = src.width();
    let h = src.height();
    let ch = src.channels();
    let out_w = w + 1;

    let mut out = FloatImage::new(out_w, h + 1, ch)?;
    let s = src.data();
    let d = out.data_mut();
    let mut row_sum = vec![0.0f32; ch];

    for y in 1..=h {
        row_sum.fill(0.0);
        let src_row = &s[(y - 1) * w * ch..y * w * ch];
        for (x, px) in (1..=w).zip(src_row.chunks_exact(ch)) {
            let above = ((y - 1) * out_w + x) * ch;
            let here = (y * out_w + x) * ch;
            for c in 0..ch {
                row_sum[c] += px[c];
                d[here + c] = d[above + c] + row_sum[c];
            }
        }
    }

    Ok(out)
}

/// Writes the summed-area table of `src` into `out`, replacing its buffer.
pub fn integrate_into(src: &FloatImage, out: &mut FloatImage) -> Result<(), Error> {
    *out = integral(src)?;
    Ok(())
}

/// Sum of channel `c` over the source rectangle `[x0, x1) x [y0, y1)`.
///
/// `table` must come from [`integral`]; corner coordinates index the table,
/// so `x1` may equal the source width.
pub fn region_sum(
    table: &FloatImage,
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
    c: usize,
) -> Result<f32, Error> {
    if x0 > x1 || y0 > y1 {
        return Err(Error::InvalidRegion { x0, y0, x1, y1 });
    }
    let a = table.get_xy(x0, y0, c)?;
    let b = table.get_xy(x1, y0, c)?;
    let d = table.get_xy(x0, y1, c)?;
    let e = table.get_xy(x1, y1, c)?;
    Ok(e - b - d + a)
}

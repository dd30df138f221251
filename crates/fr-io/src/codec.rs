use std::io::Cursor;

use fr_core::FloatImage;
use image::{DynamicImage, ImageBuffer, ImageFormat, Luma, LumaA, Rgb, Rgba};
use log::{debug, trace};

use crate::config::{ChannelLayout, DecodeConfig, EncodeConfig};
use crate::error::IoError;
use crate::format::RasterFormat;

/// Byte-level codec capability.
///
/// Processing crates only see [`FloatImage`]; implementations own the
/// mapping from file bytes to samples.
pub trait RasterCodec {
    fn decode(&self, bytes: &[u8]) -> Result<FloatImage, IoError>;

    fn encode(&self, image: &FloatImage, format: RasterFormat) -> Result<Vec<u8>, IoError>;
}

/// [`RasterCodec`] backed by the `image` crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageCodec {
    pub decode: DecodeConfig,
    pub encode: EncodeConfig,
}

impl ImageCodec {
    pub fn new(decode: DecodeConfig, encode: EncodeConfig) -> Self {
        Self { decode, encode }
    }
}

impl RasterCodec for ImageCodec {
    fn decode(&self, bytes: &[u8]) -> Result<FloatImage, IoError> {
        let dyn_img = image::load_from_memory(bytes).map_err(|e| IoError::Decode(Box::new(e)))?;
        let color = dyn_img.color();
        debug!(
            "decoded {}x{} {:?} raster",
            dyn_img.width(),
            dyn_img.height(),
            color
        );

        let mut raster = match (self.decode.channels, color.channel_count()) {
            (ChannelLayout::Grayscale, _) if !color.has_color() => luma_raster(&dyn_img)?,
            (ChannelLayout::Grayscale, _)
            | (ChannelLayout::Rgb, _)
            | (ChannelLayout::Native, 3) => rgb_raster(&dyn_img)?,
            (ChannelLayout::Native, 1) => luma_raster(&dyn_img)?,
            (ChannelLayout::Native, 2) => {
                let buf = dyn_img.to_luma_alpha32f();
                let (w, h) = buf.dimensions();
                FloatImage::from_vec(w as usize, h as usize, 2, buf.into_raw())?
            }
            (ChannelLayout::Native, _) => {
                let buf = dyn_img.to_rgba32f();
                let (w, h) = buf.dimensions();
                FloatImage::from_vec(w as usize, h as usize, 4, buf.into_raw())?
            }
        };

        if self.decode.channels == ChannelLayout::Grayscale && raster.channels() != 1 {
            trace!("reducing {} channels to grayscale", raster.channels());
            raster.convert_to_grayscale()?;
        }
        raster.scale_pixels(self.decode.range.scale());
        Ok(raster)
    }

    fn encode(&self, image: &FloatImage, format: RasterFormat) -> Result<Vec<u8>, IoError> {
        let dyn_img = to_dynamic(image, self.encode)?;
        let mut out = Cursor::new(Vec::new());
        dyn_img
            .write_to(&mut out, image_format(format))
            .map_err(|e| IoError::Encode(Box::new(e)))?;
        debug!(
            "encoded {}x{}x{} raster as {:?} ({} bytes)",
            image.width(),
            image.height(),
            image.channels(),
            format,
            out.get_ref().len()
        );
        Ok(out.into_inner())
    }
}

fn luma_raster(img: &DynamicImage) -> Result<FloatImage, IoError> {
    let buf = img.to_luma32f();
    let (w, h) = buf.dimensions();
    Ok(FloatImage::from_vec(w as usize, h as usize, 1, buf.into_raw())?)
}

fn rgb_raster(img: &DynamicImage) -> Result<FloatImage, IoError> {
    let buf = img.to_rgb32f();
    let (w, h) = buf.dimensions();
    Ok(FloatImage::from_vec(w as usize, h as usize, 3, buf.into_raw())?)
}

fn to_dynamic(image: &FloatImage, cfg: EncodeConfig) -> Result<DynamicImage, IoError> {
    let scale = 255.0 / cfg.range.scale();
    let bytes: Vec<u8> = image
        .data()
        .iter()
        .map(|&v| (v * scale).round().clamp(0.0, 255.0) as u8)
        .collect();
    let (w, h) = (image.width() as u32, image.height() as u32);

    let dyn_img = match image.channels() {
        1 => ImageBuffer::<Luma<u8>, _>::from_raw(w, h, bytes).map(DynamicImage::ImageLuma8),
        2 => ImageBuffer::<LumaA<u8>, _>::from_raw(w, h, bytes).map(DynamicImage::ImageLumaA8),
        3 => ImageBuffer::<Rgb<u8>, _>::from_raw(w, h, bytes).map(DynamicImage::ImageRgb8),
        4 => ImageBuffer::<Rgba<u8>, _>::from_raw(w, h, bytes).map(DynamicImage::ImageRgba8),
        channels => return Err(fr_core::Error::UnsupportedChannels { channels }.into()),
    };

    dyn_img.ok_or_else(|| IoError::Encode("image dimensions exceed the encoder limits".into()))
}

fn image_format(format: RasterFormat) -> ImageFormat {
    match format {
        RasterFormat::Png => ImageFormat::Png,
        RasterFormat::Jpeg => ImageFormat::Jpeg,
        RasterFormat::Bmp => ImageFormat::Bmp,
        RasterFormat::Tiff => ImageFormat::Tiff,
        RasterFormat::Pnm => ImageFormat::Pnm,
    }
}

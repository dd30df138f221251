use std::fs;
use std::path::Path;

use fr_core::FloatImage;
use log::debug;

use crate::codec::{ImageCodec, RasterCodec};
use crate::error::IoError;
use crate::format::RasterFormat;

/// Reads and decodes `path` with the default [`ImageCodec`].
///
/// The result is a single-channel grayscale raster on the 0..=255 scale,
/// whatever the file stores.
pub fn read(path: impl AsRef<Path>) -> Result<FloatImage, IoError> {
    read_with(&ImageCodec::default(), path)
}

pub fn read_with<C: RasterCodec + ?Sized>(
    codec: &C,
    path: impl AsRef<Path>,
) -> Result<FloatImage, IoError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    codec.decode(&bytes)
}

/// Encodes `image` in the format named by the extension of `path`.
pub fn write(path: impl AsRef<Path>, image: &FloatImage) -> Result<(), IoError> {
    write_with(&ImageCodec::default(), path, image)
}

pub fn write_with<C: RasterCodec + ?Sized>(
    codec: &C,
    path: impl AsRef<Path>,
    image: &FloatImage,
) -> Result<(), IoError> {
    let path = path.as_ref();
    let format = RasterFormat::from_path(path)
        .ok_or_else(|| IoError::UnsupportedFormat(path.to_path_buf()))?;
    let bytes = codec.encode(image, format)?;
    fs::write(path, &bytes).map_err(|source| IoError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

//! Codec boundary for [`fr_core::FloatImage`].
//!
//! Decoding and encoding sit behind the [`RasterCodec`] trait so the
//! processing crates never depend on a codec library. [`ImageCodec`]
//! implements it with the `image` crate.
//!
//! ## Normalization
//! [`read`] always returns a single-channel grayscale raster on the 0..=255
//! scale. Other layouts and ranges are selected through [`DecodeConfig`].
//! Encoding rounds and clamps samples to 8 bits and chooses the file format
//! from the path extension.

mod codec;
mod config;
mod error;
mod format;
mod path;

pub use codec::{ImageCodec, RasterCodec};
pub use config::{ChannelLayout, DecodeConfig, EncodeConfig, SampleRange};
pub use error::IoError;
pub use format::RasterFormat;
pub use path::{read, read_with, write, write_with};

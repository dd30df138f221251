//! Owned floating-point raster images.
//!
//! ## Layout
//! A [`FloatImage`] stores `width * height * channels` f32 samples row-major
//! with channels interleaved. The flat slice from [`FloatImage::data`] can be
//! handed to numeric code that expects this layout.
//!
//! ## Coordinates
//! `(x, y)` accessors are Cartesian (column, row). `row_col` accessors take
//! `(row, col)` and address exactly the same sample. Integer coordinates refer
//! to pixel centers.
//!
//! ## Border Modes
//! Sampling and filtering outside the image go through [`BorderMode`]: clamp
//! (replicate), constant fill, or reflect-101.
//!
//! ## Errors
//! Out-of-range access, channel mismatches and unsupported conversions are
//! reported as [`Error`] values; nothing silently clamps unless a border mode
//! says so.

mod border;
mod color;
mod error;
mod image;
mod resize;
mod sample;

pub use border::{BorderMode, map_index};
pub use color::LUMA_REC709;
pub use error::Error;
pub use image::{FloatImage, Rgb};

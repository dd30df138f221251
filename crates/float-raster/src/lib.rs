//! Umbrella crate for the `float-raster` workspace.
//!
//! Re-exports the raster type and accessors (`fr-core`), the pixel filters
//! (`fr-filter`) and the codec boundary (`fr-io`).
//!
//! ```no_run
//! use float_raster::{FilterExt, read};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut img = read("frame.png")?;
//! img.gaussian_blur(5)?;
//! let edges = img.gradient_magnitude();
//! let table = img.integral()?;
//! println!("{}x{} total={}", edges.width(), edges.height(),
//!     table.get_xy(img.width(), img.height(), 0)?);
//! # Ok(())
//! # }
//! ```

pub use fr_core::*;
pub use fr_filter::*;
pub use fr_io::*;

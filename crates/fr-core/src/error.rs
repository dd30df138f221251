use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("an image needs at least one channel")]
    ZeroChannels,
    #[error("pixel ({x}, {y}) is outside a {width}x{height} image")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("channel {channel} is out of range for a {channels}-channel image")]
    ChannelOutOfRange { channel: usize, channels: usize },
    #[error("expected a {expected}-channel image, got {actual} channels")]
    ChannelMismatch { expected: usize, actual: usize },
    #[error(
        "cannot reduce channels from {from} to {to} by resizing; convert to grayscale or RGB first"
    )]
    ChannelReduction { from: usize, to: usize },
    #[error("conversion from {channels} channels is unsupported")]
    UnsupportedChannels { channels: usize },
    #[error("sample point ({x}, {y}) is outside the interpolation domain")]
    SampleOutOfDomain { x: f64, y: f64 },
    #[error("invalid scale factor {0}")]
    InvalidScale(f64),
    #[error("region [{x0}, {x1}) x [{y0}, {y1}) is empty or inverted")]
    InvalidRegion {
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
    },
    #[error("invalid kernel size {0}")]
    InvalidKernelSize(usize),
}

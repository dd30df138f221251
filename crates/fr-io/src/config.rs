use serde::{Deserialize, Serialize};

/// Channel layout produced by decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelLayout {
    /// One luma channel; color sources are reduced with Rec. 709 weights.
    #[default]
    Grayscale,
    /// Three channels; gray sources are replicated and alpha is dropped.
    Rgb,
    /// Whatever the file stores (1 to 4 channels, alpha included).
    Native,
}

/// Numeric scale of f32 samples on the codec side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleRange {
    /// 8-bit scale: black is 0.0, white is 255.0.
    #[default]
    Byte,
    /// Unit scale: black is 0.0, white is 1.0.
    Unit,
}

impl SampleRange {
    /// Factor from unit-scale samples to this range.
    pub fn scale(self) -> f32 {
        match self {
            Self::Byte => 255.0,
            Self::Unit => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    pub channels: ChannelLayout,
    pub range: SampleRange,
}

/// Samples are scaled from `range` to 8 bits, rounded and clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeConfig {
    pub range: SampleRange,
}

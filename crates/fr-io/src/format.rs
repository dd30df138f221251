use std::path::Path;

/// Raster file formats the codec boundary can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterFormat {
    Png,
    Jpeg,
    Bmp,
    Tiff,
    Pnm,
}

impl RasterFormat {
    /// Guesses the format from a file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "bmp" => Some(Self::Bmp),
            "tif" | "tiff" => Some(Self::Tiff),
            "pbm" | "pgm" | "ppm" | "pnm" => Some(Self::Pnm),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::RasterFormat;

    #[test]
    fn extension_lookup() {
        assert_eq!(RasterFormat::from_path(Path::new("a/b.PNG")), Some(RasterFormat::Png));
        assert_eq!(RasterFormat::from_path(Path::new("x.jpeg")), Some(RasterFormat::Jpeg));
        assert_eq!(RasterFormat::from_path(Path::new("x.pgm")), Some(RasterFormat::Pnm));
        assert_eq!(RasterFormat::from_path(Path::new("x.tsai")), None);
        assert_eq!(RasterFormat::from_path(Path::new("noext")), None);
    }
}

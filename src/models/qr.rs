//! QR request domain types.

use std::fmt;
use std::str::FromStr;

use image::ImageFormat;
use qrcodegen::QrCodeEcc;

/// Smallest accepted image side in pixels
pub const MIN_SIZE: u32 = 150;

/// Largest accepted image side in pixels
pub const MAX_SIZE: u32 = 350;

pub const DEFAULT_SIZE: u32 = 250;

pub const DEFAULT_IMAGE_TYPE: &str = "png";

pub const DEFAULT_CORRECTION: &str = "L";

/// QR error correction strength, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorCorrection {
    #[default]
    L,
    M,
    Q,
    H,
}

impl ErrorCorrection {
    pub const ALL: [ErrorCorrection; 4] = [
        ErrorCorrection::L,
        ErrorCorrection::M,
        ErrorCorrection::Q,
        ErrorCorrection::H,
    ];

    /// Resolve a correction letter without rejecting anything.
    ///
    /// `M`, `Q` and `H` match case-insensitively; every other value,
    /// including garbage, resolves to [`ErrorCorrection::L`].
    pub fn resolve(value: &str) -> Self {
        match value.to_uppercase().as_str() {
            "M" => ErrorCorrection::M,
            "Q" => ErrorCorrection::Q,
            "H" => ErrorCorrection::H,
            _ => ErrorCorrection::L,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCorrection::L => "L",
            ErrorCorrection::M => "M",
            ErrorCorrection::Q => "Q",
            ErrorCorrection::H => "H",
        }
    }

    pub fn ecc(&self) -> QrCodeEcc {
        match self {
            ErrorCorrection::L => QrCodeEcc::Low,
            ErrorCorrection::M => QrCodeEcc::Medium,
            ErrorCorrection::Q => QrCodeEcc::Quartile,
            ErrorCorrection::H => QrCodeEcc::High,
        }
    }
}

impl FromStr for ErrorCorrection {
    type Err = String;

    /// Strict parse: only the four letters, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == upper)
            .ok_or_else(|| format!("Unknown error correction level '{}'", s))
    }
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raster output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageType {
    #[default]
    Png,
    Jpeg,
    Gif,
}

impl ImageType {
    pub const ALL: [ImageType; 3] = [ImageType::Png, ImageType::Jpeg, ImageType::Gif];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::Png => "png",
            ImageType::Jpeg => "jpeg",
            ImageType::Gif => "gif",
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            ImageType::Png => "image/png",
            ImageType::Jpeg => "image/jpeg",
            ImageType::Gif => "image/gif",
        }
    }

    /// Resolve a type name without rejecting anything; names other than
    /// `jpeg` and `gif` resolve to [`ImageType::Png`].
    pub fn resolve(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "jpeg" => ImageType::Jpeg,
            "gif" => ImageType::Gif,
            _ => ImageType::Png,
        }
    }

    pub fn image_format(&self) -> ImageFormat {
        match self {
            ImageType::Png => ImageFormat::Png,
            ImageType::Jpeg => ImageFormat::Jpeg,
            ImageType::Gif => ImageFormat::Gif,
        }
    }
}

impl FromStr for ImageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| format!("Unknown image type '{}'", s))
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully validated request, ready for encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrRequest {
    pub contents: String,
    pub size: u32,
    pub image_type: ImageType,
    pub correction: ErrorCorrection,
}

/// Serialized image bytes paired with their media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub media_type: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_correction_case_insensitive() {
        assert_eq!(ErrorCorrection::resolve("m"), ErrorCorrection::M);
        assert_eq!(ErrorCorrection::resolve("Q"), ErrorCorrection::Q);
        assert_eq!(ErrorCorrection::resolve("h"), ErrorCorrection::H);
        assert_eq!(ErrorCorrection::resolve("l"), ErrorCorrection::L);
    }

    #[test]
    fn test_resolve_correction_falls_back_to_low() {
        for value in ["", "X", "medium", " M", "LL"] {
            assert_eq!(ErrorCorrection::resolve(value), ErrorCorrection::L, "{value:?}");
        }
    }

    #[test]
    fn test_parse_correction_strict() {
        assert_eq!("q".parse::<ErrorCorrection>(), Ok(ErrorCorrection::Q));
        assert!("X".parse::<ErrorCorrection>().is_err());
        assert!("".parse::<ErrorCorrection>().is_err());
    }

    #[test]
    fn test_correction_maps_to_encoder_levels() {
        assert_eq!(ErrorCorrection::L.ecc(), QrCodeEcc::Low);
        assert_eq!(ErrorCorrection::M.ecc(), QrCodeEcc::Medium);
        assert_eq!(ErrorCorrection::Q.ecc(), QrCodeEcc::Quartile);
        assert_eq!(ErrorCorrection::H.ecc(), QrCodeEcc::High);
    }

    #[test]
    fn test_parse_image_type() {
        assert_eq!("PNG".parse::<ImageType>(), Ok(ImageType::Png));
        assert_eq!("Jpeg".parse::<ImageType>(), Ok(ImageType::Jpeg));
        assert_eq!("gif".parse::<ImageType>(), Ok(ImageType::Gif));
        assert!("jpg".parse::<ImageType>().is_err());
        assert!("bmp".parse::<ImageType>().is_err());
    }

    #[test]
    fn test_resolve_image_type_falls_back_to_png() {
        assert_eq!(ImageType::resolve("jpeg").media_type(), "image/jpeg");
        assert_eq!(ImageType::resolve("GIF").media_type(), "image/gif");
        assert_eq!(ImageType::resolve("png").media_type(), "image/png");
        assert_eq!(ImageType::resolve("webp").media_type(), "image/png");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ErrorCorrection::default().as_str(), DEFAULT_CORRECTION);
        assert_eq!(ImageType::default().as_str(), DEFAULT_IMAGE_TYPE);
        assert!((MIN_SIZE..=MAX_SIZE).contains(&DEFAULT_SIZE));
    }
}

//! Bitmap rasterization and serialization through the `image` codecs.

use std::io::Cursor;

use image::{DynamicImage, ImageError, Rgb, RgbImage};

use crate::models::ImageType;
use crate::qr::matrix::BitMatrix;

const DARK: Rgb<u8> = Rgb([0, 0, 0]);

const LIGHT: Rgb<u8> = Rgb([255, 255, 255]);

/// Paint the matrix as a full-color bitmap.
pub fn to_image(matrix: &BitMatrix) -> RgbImage {
    let mut img = RgbImage::new(matrix.side(), matrix.side());
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = if matrix.get(x, y) { DARK } else { LIGHT };
    }
    img
}

/// Serialize `img` in the requested format.
pub fn encode(img: RgbImage, image_type: ImageType) -> Result<Vec<u8>, ImageError> {
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img).write_to(&mut buffer, image_type.image_format())?;
    Ok(buffer.into_inner())
}

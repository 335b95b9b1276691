//! QR code rendering pipeline: contents to module matrix to encoded image.

pub mod matrix;
pub mod raster;

pub use matrix::{BitMatrix, QUIET_ZONE};

use crate::error::{AppError, AppResult};
use crate::models::{EncodedImage, QrRequest};

/// Run the whole pipeline synchronously for an already validated request.
pub fn render(request: &QrRequest) -> AppResult<EncodedImage> {
    let code = matrix::encode(&request.contents, request.correction)?;
    let bitmap = raster::to_image(&matrix::render(&code, request.size));

    let bytes = raster::encode(bitmap, request.image_type).map_err(|source| AppError::Image {
        format: request.image_type.as_str(),
        source,
    })?;

    Ok(EncodedImage {
        bytes,
        media_type: request.image_type.media_type(),
    })
}

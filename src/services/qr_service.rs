//! QR code service.
//!
//! Runs the rendering pipeline off the async runtime. Failures are returned
//! to the caller and logged once, when they become a response.

use crate::error::{AppError, AppResult};
use crate::models::{EncodedImage, QrRequest};
use crate::qr;

/// Stateless QR code generator. Cloning is free.
#[derive(Clone, Debug, Default)]
pub struct QrCodeService;

impl QrCodeService {
    pub fn new() -> Self {
        Self
    }

    /// Generates the image for a validated request.
    ///
    /// Encoding is CPU bound, so it runs on the blocking thread pool.
    ///
    /// # Returns
    /// The serialized image with its media type, or an internal error when
    /// the encoder or codec fails
    pub async fn generate(&self, request: QrRequest) -> AppResult<EncodedImage> {
        let image_type = request.image_type;
        let size = request.size;

        let image = tokio::task::spawn_blocking(move || qr::render(&request))
            .await
            .map_err(|e| AppError::Internal {
                source: anyhow::Error::new(e).context("QR rendering task failed"),
            })??;

        tracing::debug!(
            image_type = %image_type,
            size,
            bytes = image.bytes.len(),
            "QR code generated"
        );
        Ok(image)
    }
}

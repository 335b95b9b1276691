//! QR code request DTOs.

use std::borrow::Cow;

use serde::Deserialize;
use utoipa::IntoParams;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::{
    DEFAULT_CORRECTION, DEFAULT_IMAGE_TYPE, DEFAULT_SIZE, ErrorCorrection, ImageType, MAX_SIZE,
    MIN_SIZE, QrRequest,
};

pub const CONTENTS_MESSAGE: &str = "Contents cannot be null or blank";

pub const SIZE_MESSAGE: &str = "Image size must be between 150 and 350 pixels";

pub const CORRECTION_MESSAGE: &str = "Permitted error correction levels are L, M, Q, H";

pub const TYPE_MESSAGE: &str = "Only png, jpeg and gif image types are supported";

fn default_size() -> i64 {
    i64::from(DEFAULT_SIZE)
}

fn default_image_type() -> String {
    DEFAULT_IMAGE_TYPE.to_string()
}

fn default_correction() -> String {
    DEFAULT_CORRECTION.to_string()
}

/// Blank means only code points up to U+0020: ASCII controls and space.
///
/// Unicode spaces such as U+00A0 are content and get encoded.
fn is_blank(contents: &str) -> bool {
    contents.trim_matches(|c: char| c <= ' ').is_empty()
}

/// Query parameters of `GET /api/qrcode`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QrCodeQuery {
    /// Text to encode; must not be blank
    #[param(example = "https://example.com")]
    pub contents: Option<String>,

    /// Image side in pixels, 150 to 350
    #[serde(default = "default_size")]
    #[param(minimum = 150, maximum = 350, default = 250)]
    pub size: i64,

    /// Output format: png, jpeg or gif (case-insensitive)
    #[serde(rename = "type", default = "default_image_type")]
    #[param(default = "png")]
    pub image_type: String,

    /// Error correction level: L, M, Q or H (case-insensitive)
    #[serde(default = "default_correction")]
    #[param(default = "L")]
    pub correction: String,
}

impl Default for QrCodeQuery {
    fn default() -> Self {
        Self {
            contents: None,
            size: default_size(),
            image_type: default_image_type(),
            correction: default_correction(),
        }
    }
}

impl QrCodeQuery {
    /// The first violated rule as `(field, code, message)`.
    ///
    /// Rules run in order: contents, size, correction, type.
    fn first_violation(&self) -> Option<(&'static str, &'static str, &'static str)> {
        if self.contents.as_deref().is_none_or(is_blank) {
            return Some(("contents", "blank", CONTENTS_MESSAGE));
        }

        if !(i64::from(MIN_SIZE)..=i64::from(MAX_SIZE)).contains(&self.size) {
            return Some(("size", "range", SIZE_MESSAGE));
        }

        if self.correction.parse::<ErrorCorrection>().is_err() {
            return Some(("correction", "unsupported_correction", CORRECTION_MESSAGE));
        }

        if self.image_type.parse::<ImageType>().is_err() {
            return Some(("type", "unsupported_type", TYPE_MESSAGE));
        }

        None
    }

    /// Map the raw parameters onto encoder options.
    ///
    /// Meant for validated queries; unknown names still resolve to the
    /// lowest correction level and PNG output.
    pub fn into_request(self) -> QrRequest {
        let size = u32::try_from(self.size.clamp(i64::from(MIN_SIZE), i64::from(MAX_SIZE)))
            .unwrap_or(DEFAULT_SIZE);

        QrRequest {
            contents: self.contents.unwrap_or_default(),
            size,
            image_type: ImageType::resolve(&self.image_type),
            correction: ErrorCorrection::resolve(&self.correction),
        }
    }
}

/// Reports at most one error: the first rule that fails.
impl Validate for QrCodeQuery {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self.first_violation() {
            None => Ok(()),
            Some((field, code, message)) => {
                let mut errors = ValidationErrors::new();
                errors.add(
                    field,
                    ValidationError::new(code).with_message(Cow::Borrowed(message)),
                );
                Err(errors)
            }
        }
    }
}

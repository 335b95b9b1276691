//! Data Transfer Objects for API requests and responses.
//!
//! - `qrcode` - QR code query parameters and their validation
//! - `error` - Error response body

mod error;
mod qrcode;

pub use error::ErrorResponse;
pub use qrcode::{
    CONTENTS_MESSAGE, CORRECTION_MESSAGE, QrCodeQuery, SIZE_MESSAGE, TYPE_MESSAGE,
};

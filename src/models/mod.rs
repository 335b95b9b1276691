mod qr;

pub use qr::{
    DEFAULT_CORRECTION, DEFAULT_IMAGE_TYPE, DEFAULT_SIZE, EncodedImage, ErrorCorrection,
    ImageType, MAX_SIZE, MIN_SIZE, QrRequest,
};

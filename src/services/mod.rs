//! Service layer for business logic operations.

mod qr_service;

pub use qr_service::QrCodeService;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
#[derive(Clone, Debug, Default)]
pub struct Services {
    pub qr: QrCodeService,
}

impl Services {
    pub fn new() -> Self {
        Self {
            qr: QrCodeService::new(),
        }
    }
}

//! Application state for Axum web framework.
//!
//! Contains shared services that are accessible across all request handlers.

use crate::services::Services;

/// Application state containing all shared services.
///
/// Nothing in here is mutable; cloning per request is cheap.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            services: Services::new(),
        }
    }
}

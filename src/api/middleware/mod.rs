//! Middleware components for request processing.
//!
//! Request ID tracking, request logging and the `AppError` response mapping.

mod error_handler;
mod logging;
mod request_id;

pub use logging::logging_middleware;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};

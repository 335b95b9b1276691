//! QR code request handler.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::QR_TAG;
use crate::api::dto::{ErrorResponse, QrCodeQuery};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::ValidatedQuery;

/// Creates QR code routes.
pub fn qrcode_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(get_qrcode))
}

/// GET /api/qrcode - Render a QR code image
///
/// Parameters are checked in order (contents, size, correction, type) and
/// the first failure is returned. The body is the encoded image and the
/// `Content-Type` header names its format.
#[utoipa::path(
    get,
    path = "/qrcode",
    tag = QR_TAG,
    params(QrCodeQuery),
    responses(
        (status = 200, description = "QR code image as image/png, image/jpeg or image/gif"),
        (status = 400, description = "Invalid parameter", body = ErrorResponse),
        (status = 500, description = "Encoding failed, empty body")
    )
)]
pub async fn get_qrcode(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<QrCodeQuery>,
) -> AppResult<Response> {
    let image = state.services.qr.generate(query.into_request()).await?;
    Ok(([(header::CONTENT_TYPE, image.media_type)], image.bytes).into_response())
}

use utoipa::OpenApi;

pub const QR_TAG: &str = "QR Code";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "qrcode-api",
        description = "Renders text as PNG, JPEG or GIF QR code images",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
        )
    ),
    tags(
        (name = QR_TAG, description = "QR code rendering"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;

use axum::extract::Request;
use axum::http::{header, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::domain::ChamadoError;

/// Local frontend dev server and the production frontend.
pub const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "https://cerne-beta.vercel.app"];

/// Requests without an `Origin` header (curl, server-to-server) always pass.
/// An empty header value counts as absent.
pub fn is_origin_allowed(origin: Option<&str>) -> bool {
    match origin {
        None => true,
        Some(origin) => origin.is_empty() || ALLOWED_ORIGINS.contains(&origin),
    }
}

pub async fn origin_gate(req: Request, next: Next) -> Result<Response, ChamadoError> {
    let origin = req.headers().get(header::ORIGIN).map(|value| {
        value
            .to_str()
            .map(str::to_string)
            .unwrap_or_else(|_| String::from_utf8_lossy(value.as_bytes()).into_owned())
    });

    if !is_origin_allowed(origin.as_deref()) {
        return Err(ChamadoError::OriginRejected(origin.unwrap_or_default()));
    }

    Ok(next.run(req).await)
}

pub fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = ALLOWED_ORIGINS
        .into_iter()
        .map(HeaderValue::from_static)
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

//! # CORS
//!
//! One configured origin may call the API with credentials, using any
//! method and any header. The CORS protocol forbids `*` alongside
//! credentials, so methods and headers are mirrored from the preflight.
//! Requests from any other origin get no `Access-Control-Allow-Origin`.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build the CORS layer for `origin`.
pub fn layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_constructs_with_credentials() {
        let _layer = layer(HeaderValue::from_static("http://localhost:3000"));
    }
}

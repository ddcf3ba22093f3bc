use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, Method, Request, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

const ALLOW_METHODS: &str = "POST, OPTIONS, GET, PUT, PATCH, DELETE, HEAD";
const ALLOW_HEADERS: &str = "Platform-Id, Content-Type, Content-Length, Accept-Encoding, \
X-CSRF-Token, Authorization, accept, origin, Cache-Control, X-Requested-With";
const MAX_AGE: &str = "3600";

/// Adds the permissive CORS headers to every response. Preflight requests are
/// answered directly with 204.
///
/// A wildcard origin combined with credentials is rejected by
/// `tower_http::cors`, so the headers are written by hand.
pub async fn cors_middleware(req: Request<Body>, next: Next) -> Response {
    let mut response = if req.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(req).await
    };

    apply_cors_headers(response.headers_mut());
    response
}

fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static(MAX_AGE),
    );
}

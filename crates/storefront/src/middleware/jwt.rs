use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{abstract_trait::DynJwtService, errors::ErrorResponse};
use tracing::error;

/// Accepts a token from the `token` cookie or the `Authorization` header,
/// with or without the `Bearer ` prefix. The verified user id is stored as a
/// request extension.
pub async fn auth_middleware(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let token = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .or_else(|| {
            req.headers()
                .get(header::AUTHORIZATION)
                .and_then(|auth_header| auth_header.to_str().ok())
                .map(|auth_value| {
                    auth_value
                        .strip_prefix("Bearer ")
                        .unwrap_or(auth_value)
                        .trim()
                        .to_owned()
                })
        })
        .filter(|token| !token.is_empty());

    let Some(token) = token else {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::fail(
                "You are not logged in, please provide token",
            )),
        ));
    };

    let user_id = match jwt.verify_token(&token, "access") {
        Ok(id) => id,
        Err(err) => {
            error!("❌ Rejected token: {err}");
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::fail("Invalid token")),
            ));
        }
    };

    req.extensions_mut().insert(user_id);

    Ok(next.run(req).await)
}

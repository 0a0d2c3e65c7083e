use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{errors::JsonApiError, state::ServerState};

/// Cookie set by the login endpoint.
pub const AUTH_COOKIE: &str = "auth_token";

/// Token from `Authorization: Bearer <token>`, falling back to the auth cookie.
fn extract_token(req: &Request, jar: &CookieJar) -> Result<String, JsonApiError> {
    if let Some(h) = req.headers().get(AUTHORIZATION) {
        let h = h.to_str().map_err(|_| JsonApiError::unauthorized("malformed Authorization header"))?;
        return match h.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            _ => {
                tracing::warn!(path = %req.uri().path(), "invalid Authorization format (expect Bearer)");
                Err(JsonApiError::unauthorized("expected a Bearer token"))
            }
        };
    }
    match jar.get(AUTH_COOKIE).map(|c| c.value().to_string()) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => {
            tracing::warn!(path = %req.uri().path(), "missing Authorization header and auth_token cookie");
            Err(JsonApiError::unauthorized("missing bearer token"))
        }
    }
}

/// Reject requests without a valid administrator token; verified claims are
/// stored in the request extensions.
pub async fn require_bearer_token(
    State(state): State<ServerState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let token = extract_token(&req, &jar)?;
    match state.auth.verify(&token) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(path = %req.uri().path(), err = %e, "token validation failed");
            Err(e.into())
        }
    }
}

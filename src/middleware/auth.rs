use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::utils::token::decode_token;
use crate::AppState;

/// Rejects the request with 401 unless it carries a valid bearer token.
/// The decoded [`Claims`](crate::utils::token::Claims) are attached to the
/// request extensions.
pub async fn require_bearer_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response> {
    let token = match bearer_token(req.headers()) {
        Ok(token) => token,
        Err(err) => {
            warn!(path = %req.uri().path(), error = %err, "authentication denied");
            return Err(err);
        }
    };

    let claims = decode_token(token, &state.config.jwt_secret).map_err(|err| {
        warn!(path = %req.uri().path(), "authentication denied: invalid token");
        err
    })?;
    debug!(user_id = %claims.sub, "authenticated request");

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Extracts the token from `Authorization: bearer <token>`. The scheme is
/// matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| Error::Unauthorized("Authorization token required".to_string()))?;
    let value = header
        .to_str()
        .map_err(|_| Error::Unauthorized("Malformed authorization header".to_string()))?;
    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or_else(|| Error::Unauthorized("Malformed authorization header".to_string()))?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(Error::Unauthorized(
            "Unsupported authorization scheme".to_string(),
        ));
    }
    let token = token.trim();
    if token.is_empty() {
        return Err(Error::Unauthorized("Authorization token required".to_string()));
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn scheme_is_case_insensitive() {
        assert_eq!(bearer_token(&headers("bearer abc")).unwrap(), "abc");
        assert_eq!(bearer_token(&headers("Bearer abc")).unwrap(), "abc");
        assert_eq!(bearer_token(&headers("BEARER  abc ")).unwrap(), "abc");
    }

    #[test]
    fn missing_or_foreign_headers_are_unauthorized() {
        assert!(matches!(
            bearer_token(&HeaderMap::new()),
            Err(Error::Unauthorized(_))
        ));
        assert!(matches!(
            bearer_token(&headers("Basic dXNlcjpwYXNz")),
            Err(Error::Unauthorized(_))
        ));
        assert!(matches!(
            bearer_token(&headers("bearer")),
            Err(Error::Unauthorized(_))
        ));
    }
}

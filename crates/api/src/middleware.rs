//! Basic-auth authentication middleware.
//!
//! Every protected request carries `Authorization: Basic ...`; the supplied
//! credentials are validated against the authentication gate on each
//! request (the service issues no tokens or sessions).

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::app::errors::failure_response;
use crate::app::services::AppServices;
use crate::context::PrincipalContext;

#[derive(Clone)]
pub struct AuthState {
    pub services: Arc<AppServices>,
}

pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let (username, password) = match extract_basic(req.headers()) {
        Ok(creds) => creds,
        Err(msg) => return unauthorized(msg.to_string()),
    };

    match state.services.gate.authenticate(&username, &password) {
        Ok(principal) => {
            req.extensions_mut()
                .insert(PrincipalContext::new(principal));
            next.run(req).await
        }
        Err(e) => unauthorized(e.to_string()),
    }
}

fn unauthorized(message: String) -> Response {
    let mut res = failure_response(StatusCode::UNAUTHORIZED, vec![message]);
    res.headers_mut().insert(
        header::WWW_AUTHENTICATE,
        header::HeaderValue::from_static("Basic realm=\"userd\""),
    );
    res
}

fn extract_basic(headers: &HeaderMap) -> Result<(String, String), &'static str> {
    let header = headers
        .get(header::AUTHORIZATION)
        .ok_or("Authorization header missing")?;

    let header = header.to_str().map_err(|_| "malformed Authorization header")?;

    // The scheme token is case-insensitive (RFC 7617).
    let (scheme, encoded) = header
        .split_once(' ')
        .ok_or("Basic authentication required")?;
    if !scheme.eq_ignore_ascii_case("Basic") {
        return Err("Basic authentication required");
    }

    let decoded = BASE64
        .decode(encoded.trim())
        .map_err(|_| "malformed Basic credentials")?;
    let decoded = String::from_utf8(decoded).map_err(|_| "malformed Basic credentials")?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or("malformed Basic credentials")?;

    Ok((username.to_string(), password.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn decodes_well_formed_credentials() {
        let encoded = BASE64.encode("alice1:Secr3t!");
        let headers = headers_with(&format!("Basic {encoded}"));

        let (user, pass) = extract_basic(&headers).unwrap();
        assert_eq!(user, "alice1");
        assert_eq!(pass, "Secr3t!");
    }

    #[test]
    fn password_may_contain_colons() {
        let encoded = BASE64.encode("alice1:a:b:c");
        let headers = headers_with(&format!("Basic {encoded}"));

        let (_, pass) = extract_basic(&headers).unwrap();
        assert_eq!(pass, "a:b:c");
    }

    #[test]
    fn rejects_missing_header() {
        assert!(extract_basic(&HeaderMap::new()).is_err());
    }

    #[test]
    fn scheme_matches_case_insensitively() {
        let encoded = BASE64.encode("alice1:Secr3t!");
        for scheme in ["basic", "BASIC", "bAsIc"] {
            let headers = headers_with(&format!("{scheme} {encoded}"));
            let (user, _) = extract_basic(&headers).unwrap();
            assert_eq!(user, "alice1");
        }
    }

    #[test]
    fn rejects_bearer_scheme() {
        let headers = headers_with("Bearer some-token");
        assert!(extract_basic(&headers).is_err());
    }

    #[test]
    fn rejects_invalid_base64() {
        let headers = headers_with("Basic !!not-base64!!");
        assert!(extract_basic(&headers).is_err());
    }
}
